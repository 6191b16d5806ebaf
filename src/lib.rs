// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod board;
pub mod config;
pub mod data;
pub mod level;
pub mod map_formatter;
pub mod moves;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod parser;
mod vec2d;

use std::error::Error;
use std::fs;
use std::path::Path;

pub use crate::config::{Config, Strategy};
pub use crate::level::Level;
pub use crate::parser::ParserErr;
pub use crate::solver::{Outcome, SolverOk, Stats};

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

impl<P: AsRef<Path> + ?Sized> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let text = fs::read_to_string(self)?;
        Ok(text.parse::<Level>()?)
    }
}

pub trait Solve {
    fn solve(&self, config: &Config) -> SolverOk;
}

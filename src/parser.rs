use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::board::Board;
use crate::data::{Cell, MapCell, Pos};
use crate::level::Level;
use crate::state::State;
use crate::vec2d::Vec2d;

/// The level text doesn't describe a playable level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    Empty,
    MultiplePlayers,
    NoPlayer,
    BoxesTargets { boxes: usize, targets: usize },
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::Empty => write!(f, "Empty level"),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::BoxesTargets { boxes, targets } => write!(
                f,
                "Different number of boxes ({}) and targets ({})",
                boxes, targets
            ),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the XSB format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
/// (without run-length encoding).
pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level
        .trim_start_matches(|c| c == '\n' || c == '\r')
        .trim_end();
    if level.is_empty() {
        return Err(ParserErr::Empty);
    }

    let mut grid = Vec::new();
    let mut boxes = Vec::new();
    let mut player_pos = None;

    for (r, line) in level.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        let mut row = Vec::with_capacity(line.len());
        for (c, ch) in line.chars().enumerate() {
            let cell = Cell::from_char(ch).ok_or(ParserErr::Pos(r, c))?;
            let pos = Pos::new(r, c);

            if cell.has_player() {
                if player_pos.is_some() {
                    return Err(ParserErr::MultiplePlayers);
                }
                player_pos = Some(pos);
            }
            if cell.has_box() {
                boxes.push(pos);
            }
            row.push(cell.map_cell());
        }
        grid.push(row);
    }

    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;
    let board = Board::new(Vec2d::new(&grid, MapCell::Empty));

    if boxes.len() != board.targets().len() {
        return Err(ParserErr::BoxesTargets {
            boxes: boxes.len(),
            targets: board.targets().len(),
        });
    }

    Ok(Level::new(board, State::new(player_pos, boxes)))
}

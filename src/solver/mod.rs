mod best_first;
mod deepening;
pub(crate) mod expand;
mod frontier;
mod heuristic;
mod stats;

use std::fmt::{self, Debug, Formatter};
use std::time::{Duration, Instant};

use log::debug;
use typed_arena::Arena;

use crate::config::{Config, Strategy};
use crate::level::Level;
use crate::moves::Moves;
use crate::Solve;

use self::best_first::SearchNode;
use self::frontier::{FifoFrontier, PriorityFrontier};

pub use self::stats::Stats;

#[derive(Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Can be empty if the level is already solved.
    Solved(Moves),
    /// The whole reachable space (or everything up to the maximum depth) was searched.
    NoSolution,
    /// `Config::max_expanded` was reached.
    Aborted,
}

impl Debug for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Solved(moves) => write!(f, "Solved({})", moves),
            Outcome::NoSolution => write!(f, "NoSolution"),
            Outcome::Aborted => write!(f, "Aborted"),
        }
    }
}

pub struct SolverOk {
    pub outcome: Outcome,
    pub stats: Stats,
    pub strategy: Strategy,
    pub elapsed: Duration,
}

impl SolverOk {
    fn new(outcome: Outcome, stats: Stats, strategy: Strategy, elapsed: Duration) -> Self {
        Self {
            outcome,
            stats,
            strategy,
            elapsed,
        }
    }

    pub fn moves(&self) -> Option<&Moves> {
        match self.outcome {
            Outcome::Solved(ref moves) => Some(moves),
            _ => None,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Solved(ref moves) => writeln!(f, "{}: {}", self.strategy, moves.move_cnt())?,
            Outcome::NoSolution => writeln!(f, "{}: No solution", self.strategy)?,
            Outcome::Aborted => writeln!(f, "{}: Aborted", self.strategy)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, config: &Config) -> SolverOk {
        solve(self, config)
    }
}

/// Every call starts from scratch - nothing is shared between solves except the level.
pub fn solve(level: &Level, config: &Config) -> SolverOk {
    debug!("Solving using {}", config.strategy);
    let started = Instant::now();

    let (outcome, stats) = match config.strategy {
        Strategy::BreadthFirst => {
            let arena = Arena::new();
            best_first::search(level, config, &arena, FifoFrontier::new())
        }
        Strategy::UniformCost => {
            let arena = Arena::new();
            let frontier = PriorityFrontier::new(|node: &SearchNode<'_>| node.cost);
            best_first::search(level, config, &arena, frontier)
        }
        Strategy::Greedy => {
            let arena = Arena::new();
            let board = &level.board;
            let frontier = PriorityFrontier::new(move |node: &SearchNode<'_>| {
                heuristic::estimate(board, &node.state)
            });
            best_first::search(level, config, &arena, frontier)
        }
        Strategy::AStar => {
            let arena = Arena::new();
            let board = &level.board;
            let frontier = PriorityFrontier::new(move |node: &SearchNode<'_>| {
                node.cost + heuristic::estimate(board, &node.state)
            });
            best_first::search(level, config, &arena, frontier)
        }
        Strategy::DepthFirst => deepening::search(level, config),
    };

    let elapsed = started.elapsed();
    debug!("Done using {} in {:?}: {:?}", config.strategy, elapsed, outcome);
    SolverOk::new(outcome, stats, config.strategy, elapsed)
}

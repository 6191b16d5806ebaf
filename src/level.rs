use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::solver::expand;
use crate::state::State;

#[derive(Clone)]
pub struct Level {
    pub board: Board,
    pub state: State,
}

impl Level {
    pub fn new(board: Board, state: State) -> Self {
        Level { board, state }
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_solved(&self.state)
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.board.format_with_state(&self.state)
    }

    /// Applies the moves one by one to the initial state.
    ///
    /// Returns all the visited states including the initial one
    /// or `None` if any move is illegal or claims to be a push when it isn't (or vice versa).
    pub fn replay(&self, moves: &Moves) -> Option<Vec<State>> {
        let mut states = vec![self.state.clone()];
        for mov in moves {
            let cur = states.last()?;
            let (_, next) = expand::successors(&self.board, cur, false)
                .into_iter()
                .find(|(m, _)| m == mov)?;
            states.push(next);
        }
        Some(states)
    }

    pub fn solution<'a>(&'a self, moves: &'a Moves, include_steps: bool) -> SolutionFormatter<'a> {
        SolutionFormatter::new(self, moves, include_steps)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}

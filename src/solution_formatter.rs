use std::fmt::{self, Debug, Display, Formatter};

use crate::level::Level;
use crate::moves::Moves;

pub struct SolutionFormatter<'a> {
    level: &'a Level,
    moves: &'a Moves,
    include_steps: bool,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(level: &'a Level, moves: &'a Moves, include_steps: bool) -> Self {
        Self {
            level,
            moves,
            include_steps,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let states = match self.level.replay(self.moves) {
            Some(states) => states,
            // moves from a different level
            None => return writeln!(f, "Moves {} don't apply to this level", self.moves),
        };

        writeln!(f, "{}", self.level.board.format_with_state(&states[0]))?;
        for (mov, state) in self.moves.iter().zip(&states[1..]) {
            if mov.is_push || self.include_steps {
                writeln!(f, "{}", self.level.board.format_with_state(state))?;
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

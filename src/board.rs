use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

/// The static part of a level. Shared by every state of a single solve.
#[derive(Clone)]
pub struct Board {
    pub(crate) grid: Vec2d<MapCell>,
    targets: Vec<Pos>,
}

impl Board {
    pub(crate) fn new(grid: Vec2d<MapCell>) -> Self {
        // positions() goes row by row so this is already sorted like State::boxes
        let targets = grid
            .positions()
            .filter(|&pos| grid[pos] == MapCell::Target)
            .collect();
        Board { grid, targets }
    }

    pub fn width(&self) -> usize {
        self.grid.cols()
    }

    pub fn height(&self) -> usize {
        self.grid.rows()
    }

    pub fn targets(&self) -> &[Pos] {
        &self.targets
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        self.grid.contains(pos)
    }

    /// Anything outside the board counts as a wall.
    pub fn is_wall(&self, pos: Pos) -> bool {
        !matches!(self.grid.get(pos), Some(&cell) if cell != MapCell::Wall)
    }

    pub fn is_target(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Target)
    }

    /// Boxes and targets have the same count so comparing the sorted lists is enough.
    pub fn is_solved(&self, state: &State) -> bool {
        state.boxes == self.targets
    }

    pub fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, Some(state))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(self, None))
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

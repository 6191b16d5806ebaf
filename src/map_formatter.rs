use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::data::{Cell, MapCell, Pos};
use crate::state::State;

pub struct MapFormatter<'a> {
    board: &'a Board,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(board: &'a Board, state: Option<&'a State>) -> Self {
        Self { board, state }
    }

    fn cell(&self, pos: Pos) -> Cell {
        let map_cell = self.board.grid[pos];
        let (has_player, has_box) = match self.state {
            Some(state) => (state.player_pos == pos, state.has_box(pos)),
            None => (false, false),
        };
        match (map_cell, has_player, has_box) {
            (MapCell::Wall, _, _) => Cell::Wall,
            (MapCell::Empty, true, _) => Cell::Player,
            (MapCell::Empty, _, true) => Cell::Box,
            (MapCell::Empty, false, false) => Cell::Empty,
            (MapCell::Target, true, _) => Cell::PlayerOnTarget,
            (MapCell::Target, _, true) => Cell::BoxOnTarget,
            (MapCell::Target, false, false) => Cell::Target,
        }
    }
}

impl Display for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.board.height() {
            // don't print trailing empty cells to match the input level strings
            let cells: Vec<_> = (0..self.board.width())
                .map(|c| self.cell(Pos::new(r, c)))
                .collect();
            let len = cells
                .iter()
                .rposition(|&cell| cell != Cell::Empty)
                .map_or(0, |last| last + 1);

            for cell in &cells[..len] {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    #[test]
    fn formatting_state() {
        let xsb: &str = r"
*###*
#@$.#
*###*#
"
        .trim_start_matches('\n');
        let map: &str = "
.###.
#  .#
.###.#
"
        .trim_start_matches('\n');

        let level: Level = xsb.parse().unwrap();
        assert_eq!(level.board.format_with_state(&level.state).to_string(), xsb);
        assert_eq!(format!("{:?}", level.board.format_with_state(&level.state)), xsb);
        assert_eq!(level.to_string(), xsb);
        assert_eq!(level.board.to_string(), map);
    }

    #[test]
    fn formatting_player_on_target() {
        let xsb: &str = r"
######
#$+.$#
######
"
        .trim_start_matches('\n');
        let level: Level = xsb.parse().unwrap();
        assert_eq!(level.to_string(), xsb);
    }
}

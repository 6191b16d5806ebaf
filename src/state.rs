use crate::data::Pos;

/// The dynamic part of a level - this is what the search deduplicates on.
///
/// Boxes are kept sorted so two states with the same set of boxes compare and hash equal
/// no matter in which order the boxes were moved.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub player_pos: Pos,
    pub boxes: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort();
        State { player_pos, boxes }
    }

    pub fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    /// Moves the box at `from` to `to` and the player to `from`.
    pub(crate) fn with_push(&self, from: Pos, to: Pos) -> State {
        let boxes = self
            .boxes
            .iter()
            .map(|&b| if b == from { to } else { b })
            .collect();
        State::new(from, boxes)
    }

    pub(crate) fn with_player(&self, player_pos: Pos) -> State {
        State {
            player_pos,
            boxes: self.boxes.clone(),
        }
    }
}

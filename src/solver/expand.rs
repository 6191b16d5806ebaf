use crate::board::Board;
use crate::data::{Dir, Pos, DIRECTIONS};
use crate::moves::Move;
use crate::state::State;

// Terminology:
// move = changing player position by one cell
// push = a move that changes a box position
// step = a move that doesn't change a box position

/// All legal moves from `state` in the order of `DIRECTIONS`.
///
/// With `prune_deadlocks` pushes that leave a box stuck in a corner which is not a target
/// are not generated - such a box can never be moved again.
pub(crate) fn successors(board: &Board, state: &State, prune_deadlocks: bool) -> Vec<(Move, State)> {
    let mut new_states = Vec::with_capacity(DIRECTIONS.len());

    for &dir in &DIRECTIONS {
        let new_player_pos = state.player_pos + dir;
        if board.is_wall(new_player_pos) {
            continue;
        }

        if !state.has_box(new_player_pos) {
            // step
            new_states.push((Move::new(dir, false), state.with_player(new_player_pos)));
            continue;
        }

        let push_dest = new_player_pos + dir;
        if board.is_wall(push_dest) || state.has_box(push_dest) {
            continue;
        }
        if prune_deadlocks && is_corner_deadlock(board, push_dest) {
            continue;
        }
        new_states.push((
            Move::new(dir, true),
            state.with_push(new_player_pos, push_dest),
        ));
    }

    new_states
}

pub(crate) fn is_corner_deadlock(board: &Board, box_pos: Pos) -> bool {
    if board.is_target(box_pos) {
        return false;
    }
    let vertical = board.is_wall(box_pos + Dir::Up) || board.is_wall(box_pos + Dir::Down);
    let horizontal = board.is_wall(box_pos + Dir::Left) || board.is_wall(box_pos + Dir::Right);
    vertical && horizontal
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    use super::*;

    fn dirs(successors: &[(Move, State)]) -> Vec<Move> {
        successors.iter().map(|&(m, _)| m).collect()
    }

    #[test]
    fn steps_and_pushes() {
        let level: Level = r"
 ####
# $  #
# @$*#
# $  #
# ...#
 ####
"
        .parse()
        .unwrap();
        let successors = successors(&level.board, &level.state, false);
        // up is blocked by the wall behind the box, right by the box on the target
        assert_eq!(
            dirs(&successors),
            vec![Move::new(Dir::Down, true), Move::new(Dir::Left, false)]
        );
        let (_, pushed) = &successors[0];
        assert_eq!(pushed.player_pos, Pos::new(3, 2));
        assert!(pushed.has_box(Pos::new(4, 2)));
        assert!(!pushed.has_box(Pos::new(3, 2)));
    }

    #[test]
    fn free_movement() {
        let level: Level = r"
 ####
#    #
# @ *#
# $  #
#   .#
 ####
"
        .parse()
        .unwrap();
        let successors = successors(&level.board, &level.state, true);
        assert_eq!(
            dirs(&successors),
            vec![
                Move::new(Dir::Up, false),
                Move::new(Dir::Down, true),
                Move::new(Dir::Left, false),
                Move::new(Dir::Right, false),
            ]
        );
        let (_, pushed) = &successors[1];
        assert_eq!(pushed.player_pos, Pos::new(3, 2));
        assert_eq!(pushed.boxes, vec![Pos::new(2, 4), Pos::new(4, 2)]);
    }

    #[test]
    fn box_count_never_changes() {
        let level: Level = r"
#######
#  .  #
# $$  #
#@ .  #
#######
"
        .parse()
        .unwrap();
        let mut to_visit = vec![level.state.clone()];
        let mut seen = std::collections::HashSet::new();
        while let Some(state) = to_visit.pop() {
            if !seen.insert(state.clone()) {
                continue;
            }
            assert_eq!(state.boxes.len(), 2);
            assert!(!level.board.is_wall(state.player_pos));
            assert!(!state.has_box(state.player_pos));
            for (_, next) in successors(&level.board, &state, false) {
                to_visit.push(next);
            }
        }
        // more than just walking around the initial boxes
        assert!(seen.len() > 13);
    }

    #[test]
    fn corner_pruning() {
        let level: Level = r"
#####
#   #
# $ #
#@ .#
#####
"
        .parse()
        .unwrap();
        // pushing right from [2, 1] moves the box next to the right wall, not into a corner
        let left_of_box = level.state.with_player(Pos::new(2, 1));
        let pruned = successors(&level.board, &left_of_box, true);
        assert!(pruned.iter().any(|&(m, _)| m == Move::new(Dir::Right, true)));

        // from below the box, pushing up puts it into the top wall - still not a corner
        let below = level.state.with_player(Pos::new(3, 2));
        let pruned = successors(&level.board, &below, true);
        assert!(pruned.iter().any(|&(m, _)| m == Move::new(Dir::Up, true)));

        assert!(is_corner_deadlock(&level.board, Pos::new(1, 1)));
        assert!(is_corner_deadlock(&level.board, Pos::new(1, 3)));
        assert!(!is_corner_deadlock(&level.board, Pos::new(3, 3)));
        assert!(!is_corner_deadlock(&level.board, Pos::new(1, 2)));
        assert!(!is_corner_deadlock(&level.board, Pos::new(2, 2)));
    }

    #[test]
    fn pruning_corner_pushes() {
        let level: Level = r"
#####
#@$ #
#  .#
#####
"
        .parse()
        .unwrap();
        let unpruned = successors(&level.board, &level.state, false);
        let pruned = successors(&level.board, &level.state, true);
        // pushing right would wedge the box into the top right corner
        assert_eq!(
            dirs(&unpruned),
            vec![Move::new(Dir::Down, false), Move::new(Dir::Right, true)]
        );
        assert_eq!(dirs(&pruned), vec![Move::new(Dir::Down, false)]);
    }
}

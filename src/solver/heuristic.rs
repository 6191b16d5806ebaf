use crate::board::Board;
use crate::state::State;

/// Sum of distances from each box to its nearest target.
///
/// Two boxes can count the same target so this is not a lower bound
/// when boxes compete for targets.
pub(crate) fn estimate(board: &Board, state: &State) -> u32 {
    // less is better
    let mut goal_dist_sum = 0;
    for &box_pos in &state.boxes {
        let min = board
            .targets()
            .iter()
            .map(|&target| box_pos.dist(target))
            .min()
            .unwrap_or(0);
        goal_dist_sum += min;
    }
    goal_dist_sum
}

#[cfg(test)]
mod tests {
    use crate::data::Pos;
    use crate::level::Level;

    use super::*;

    #[test]
    fn nearest_target_per_box() {
        let level: Level = r"
#######
#@$ . #
#     #
#  $ .#
#######
"
        .parse()
        .unwrap();
        // [1, 2] -> [1, 4] is 2, [3, 3] -> [3, 5] is 2
        assert_eq!(estimate(&level.board, &level.state), 4);

        let solved = State::new(Pos::new(1, 1), vec![Pos::new(1, 4), Pos::new(3, 5)]);
        assert_eq!(estimate(&level.board, &solved), 0);
    }

    #[test]
    fn contested_target_is_counted_twice() {
        let level: Level = r"
########
#@ $$. #
#      #
#     .#
########
"
        .parse()
        .unwrap();
        // both boxes are closest to [1, 5], nobody is assigned to [3, 6]
        assert_eq!(estimate(&level.board, &level.state), 2 + 1);
    }
}

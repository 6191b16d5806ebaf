use fnv::FnvHashSet;
use log::{debug, warn};
use typed_arena::Arena;

use crate::config::Config;
use crate::level::Level;
use crate::moves::{Move, Moves};
use crate::state::State;

use super::expand;
use super::frontier::Frontier;
use super::stats::Stats;
use super::Outcome;

/// A state together with how the search reached it.
#[derive(Debug)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: State,
    /// Number of moves from the initial state.
    pub(crate) cost: u32,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    /// The move that led here from `prev`.
    pub(crate) mov: Option<Move>,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(
        state: State,
        cost: u32,
        prev: Option<&'a SearchNode<'a>>,
        mov: Option<Move>,
    ) -> Self {
        Self {
            state,
            cost,
            prev,
            mov,
        }
    }

    /// Follows the links back to the initial state.
    pub(crate) fn backtrack_moves(&self) -> Moves {
        let mut moves = Moves::default();
        let mut node = self;
        while let (Some(mov), Some(prev)) = (node.mov, node.prev) {
            moves.add(mov);
            node = prev;
        }
        moves.reverse();
        moves
    }
}

/// The loop shared by all the strategies except depth-first -
/// they only differ in the order in which `frontier` returns nodes.
///
/// A state is marked closed when it's popped, not when it's generated,
/// otherwise cost-ordered frontiers could close a state reached by a longer path first.
pub(crate) fn search<'a, F>(
    level: &Level,
    config: &Config,
    arena: &'a Arena<SearchNode<'a>>,
    mut frontier: F,
) -> (Outcome, Stats)
where
    F: Frontier<'a>,
{
    debug!("Search called");

    let mut stats = Stats::new();
    let mut closed: FnvHashSet<&'a State> = FnvHashSet::default();

    let start = arena.alloc(SearchNode::new(level.state.clone(), 0, None, None));
    frontier.push(start);

    while let Some(cur_node) = frontier.pop() {
        if level.board.is_solved(&cur_node.state) {
            debug!("Solved, backtracking path");
            return (Outcome::Solved(cur_node.backtrack_moves()), stats);
        }

        if closed.contains(&cur_node.state) {
            stats.add_reached_duplicate(cur_node.cost);
            continue;
        }

        if let Some(max_expanded) = config.max_expanded {
            if stats.total_expanded() >= max_expanded {
                warn!("Aborting after expanding {} states", max_expanded);
                return (Outcome::Aborted, stats);
            }
        }

        closed.insert(&cur_node.state);
        if stats.add_expanded(cur_node.cost) {
            debug!(
                "Expanding new depth: {}, frontier size: {}",
                cur_node.cost,
                frontier.len()
            );
        }

        for (mov, new_state) in
            expand::successors(&level.board, &cur_node.state, config.prune_deadlocks)
        {
            if closed.contains(&new_state) {
                continue;
            }
            let next_node = arena.alloc(SearchNode::new(
                new_state,
                cur_node.cost + 1,
                Some(cur_node),
                Some(mov),
            ));
            stats.add_generated(next_node.cost);
            frontier.push(next_node);
        }
    }

    debug!("Frontier exhausted");
    (Outcome::NoSolution, stats)
}

#[cfg(test)]
mod tests {
    use crate::config::Strategy;
    use crate::data::{Dir, Pos};

    use super::super::frontier::{FifoFrontier, PriorityFrontier};
    use super::*;

    const LEVEL: &str = r"
######
#@ $.#
#    #
######
";

    #[test]
    fn backtracking() {
        let arena = Arena::new();
        let a = &*arena.alloc(SearchNode::new(State::new(Pos::new(1, 1), vec![]), 0, None, None));
        let b = &*arena.alloc(SearchNode::new(
            State::new(Pos::new(1, 2), vec![]),
            1,
            Some(a),
            Some(Move::new(Dir::Right, false)),
        ));
        let c = &*arena.alloc(SearchNode::new(
            State::new(Pos::new(2, 2), vec![]),
            2,
            Some(b),
            Some(Move::new(Dir::Down, true)),
        ));
        assert_eq!(c.backtrack_moves().to_string(), "rD");
        assert_eq!(a.backtrack_moves(), Moves::default());
    }

    #[test]
    fn fifo_counts() {
        let level: Level = LEVEL.parse().unwrap();
        let config = Config::new(Strategy::BreadthFirst);
        let arena = Arena::new();
        let (outcome, stats) = search(&level, &config, &arena, FifoFrontier::new());

        match outcome {
            Outcome::Solved(moves) => assert_eq!(moves.to_string(), "rR"),
            _ => panic!("expected a solution"),
        }
        // depth 1: [2, 1], [1, 2]
        // depth 2: [2, 2] from both of them and the push
        // the second [2, 2] is a duplicate, the push is popped after it
        assert_eq!(stats.expanded_by_depth(), &[1, 2, 1]);
        assert_eq!(stats.generated_by_depth(), &[0, 2, 3, 1]);
        assert_eq!(stats.total_reached_duplicates(), 1);
    }

    #[test]
    fn aborting() {
        let level: Level = LEVEL.parse().unwrap();
        let config = Config::new(Strategy::UniformCost).max_expanded(1);
        let arena = Arena::new();
        let frontier = PriorityFrontier::new(|node: &SearchNode<'_>| node.cost);
        let (outcome, stats) = search(&level, &config, &arena, frontier);
        assert_eq!(outcome, Outcome::Aborted);
        assert_eq!(stats.total_expanded(), 1);
    }

    #[test]
    fn already_solved() {
        let level: Level = r"
####
#@*#
####
"
        .parse()
        .unwrap();
        let config = Config::new(Strategy::BreadthFirst);
        let arena = Arena::new();
        let (outcome, stats) = search(&level, &config, &arena, FifoFrontier::new());
        assert_eq!(outcome, Outcome::Solved(Moves::default()));
        assert_eq!(stats.total_expanded(), 0);
        assert_eq!(stats.total_generated(), 0);
    }
}

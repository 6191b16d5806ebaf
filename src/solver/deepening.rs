use std::vec;

use fnv::FnvHashSet;
use log::{debug, info, warn};

use crate::config::Config;
use crate::level::Level;
use crate::moves::{Move, Moves};
use crate::state::State;

use super::expand;
use super::stats::Stats;
use super::Outcome;

/// Result of one depth-limited pass.
#[derive(Debug, PartialEq, Eq)]
enum Pass {
    Found(Moves),
    Aborted,
    /// Some states were not expanded because of the depth limit.
    CutOff,
    /// Everything reachable was explored without hitting the limit.
    Exhausted,
}

/// One entry of the explicit stack - a state on the current path
/// and the successors which haven't been tried yet.
struct Frame {
    state: State,
    mov: Option<Move>,
    successors: vec::IntoIter<(Move, State)>,
}

/// Iterative deepening depth-first search with limits `1..=config.max_depth`.
pub(crate) fn search(level: &Level, config: &Config) -> (Outcome, Stats) {
    debug!("Search called");

    let mut stats = Stats::new();
    if level.board.is_solved(&level.state) {
        return (Outcome::Solved(Moves::default()), stats);
    }

    for limit in 1..=config.max_depth {
        stats.set_depth_limit(limit);
        match depth_limited(level, config, limit, &mut stats) {
            Pass::Found(moves) => {
                info!("Solved with depth limit {}", limit);
                return (Outcome::Solved(moves), stats);
            }
            Pass::Aborted => return (Outcome::Aborted, stats),
            Pass::Exhausted => {
                // a higher limit would explore exactly the same paths
                debug!("Nothing cut off at depth limit {}", limit);
                return (Outcome::NoSolution, stats);
            }
            Pass::CutOff => debug!(
                "Depth limit {} done, expanded {} states so far",
                limit,
                stats.total_expanded()
            ),
        }
    }

    debug!("Maximum depth {} reached", config.max_depth);
    (Outcome::NoSolution, stats)
}

/// Depth-first search which doesn't expand states at depth `limit`.
///
/// Only the states on the current path are closed so a state can be visited again
/// through a different path.
fn depth_limited(level: &Level, config: &Config, limit: u32, stats: &mut Stats) -> Pass {
    let mut on_path = FnvHashSet::default();
    let mut cut_off = false;

    if !expand_allowed(config, stats) {
        return Pass::Aborted;
    }
    stats.add_expanded(0);
    on_path.insert(level.state.clone());
    let mut stack = vec![Frame {
        state: level.state.clone(),
        mov: None,
        successors: expand::successors(&level.board, &level.state, config.prune_deadlocks)
            .into_iter(),
    }];

    while let Some(frame) = stack.last_mut() {
        let (mov, state) = match frame.successors.next() {
            Some(next) => next,
            None => {
                // all successors tried, backtrack
                if let Some(frame) = stack.pop() {
                    on_path.remove(&frame.state);
                }
                continue;
            }
        };

        if on_path.contains(&state) {
            continue;
        }

        // the initial state is at depth 0
        let depth = stack.len() as u32;
        stats.add_generated(depth);

        if level.board.is_solved(&state) {
            let mut moves: Vec<Move> = stack.iter().filter_map(|frame| frame.mov).collect();
            moves.push(mov);
            return Pass::Found(Moves::new(moves));
        }

        if depth >= limit {
            cut_off = true;
            continue;
        }

        if !expand_allowed(config, stats) {
            return Pass::Aborted;
        }
        stats.add_expanded(depth);

        let successors =
            expand::successors(&level.board, &state, config.prune_deadlocks).into_iter();
        on_path.insert(state.clone());
        stack.push(Frame {
            state,
            mov: Some(mov),
            successors,
        });
    }

    if cut_off {
        Pass::CutOff
    } else {
        Pass::Exhausted
    }
}

fn expand_allowed(config: &Config, stats: &Stats) -> bool {
    match config.max_expanded {
        Some(max_expanded) if stats.total_expanded() >= max_expanded => {
            warn!("Aborting after expanding {} states", max_expanded);
            false
        }
        _ => true,
    }
}

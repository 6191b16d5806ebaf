use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    /// Iterative deepening, bounded by `Config::max_depth`.
    DepthFirst,
    AStar,
    UniformCost,
    Greedy,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::AStar,
        Strategy::UniformCost,
        Strategy::Greedy,
    ];
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Strategy::BreadthFirst => write!(f, "bfs"),
            Strategy::DepthFirst => write!(f, "dfs"),
            Strategy::AStar => write!(f, "astar"),
            Strategy::UniformCost => write!(f, "ucs"),
            Strategy::Greedy => write!(f, "greedy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStrategy(pub String);

impl Display for InvalidStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid strategy '{}' - expected one of: bfs, dfs, astar, ucs, greedy",
            self.0
        )
    }
}

impl Error for InvalidStrategy {}

impl FromStr for Strategy {
    type Err = InvalidStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .iter()
            .cloned()
            .find(|strategy| strategy.to_string() == s)
            .ok_or_else(|| InvalidStrategy(s.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub strategy: Strategy,
    /// The largest depth limit iterative deepening tries before giving up.
    pub max_depth: u32,
    /// Abort after expanding this many states.
    pub max_expanded: Option<usize>,
    /// Drop pushes into non-goal corners during move generation.
    pub prune_deadlocks: bool,
}

impl Config {
    pub const DEFAULT_MAX_DEPTH: u32 = 100;

    pub fn new(strategy: Strategy) -> Self {
        Config {
            strategy,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_expanded: None,
            prune_deadlocks: true,
        }
    }

    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_expanded(mut self, max_expanded: usize) -> Self {
        self.max_expanded = Some(max_expanded);
        self
    }

    pub fn prune_deadlocks(mut self, prune_deadlocks: bool) -> Self {
        self.prune_deadlocks = prune_deadlocks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_strategies() {
        for &strategy in &Strategy::ALL {
            assert_eq!(strategy.to_string().parse(), Ok(strategy));
        }
        assert_eq!(
            "dijkstra".parse::<Strategy>(),
            Err(InvalidStrategy("dijkstra".to_owned()))
        );
        assert!("".parse::<Strategy>().is_err());
        assert!("BFS".parse::<Strategy>().is_err());
    }

    #[test]
    fn building() {
        let config = Config::new(Strategy::DepthFirst)
            .max_depth(7)
            .max_expanded(1000)
            .prune_deadlocks(false);
        assert_eq!(config.strategy, Strategy::DepthFirst);
        assert_eq!(config.max_depth, 7);
        assert_eq!(config.max_expanded, Some(1000));
        assert!(!config.prune_deadlocks);

        let config = Config::new(Strategy::AStar);
        assert_eq!(config.max_depth, 100);
        assert_eq!(config.max_expanded, None);
        assert!(config.prune_deadlocks);
    }
}

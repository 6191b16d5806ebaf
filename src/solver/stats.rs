use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

/// Counts of states by depth (number of moves from the initial state).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    generated_states: Vec<usize>,
    expanded_states: Vec<usize>,
    duplicate_states: Vec<usize>,
    /// Only set by iterative deepening.
    depth_limit: Option<u32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    /// States pushed to the frontier. The initial state is not included.
    pub fn total_generated(&self) -> usize {
        self.generated_states.iter().sum()
    }

    pub fn total_expanded(&self) -> usize {
        self.expanded_states.iter().sum()
    }

    /// States popped from the frontier after an equal state had already been expanded.
    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    pub fn generated_by_depth(&self) -> &[usize] {
        &self.generated_states
    }

    pub fn expanded_by_depth(&self) -> &[usize] {
        &self.expanded_states
    }

    /// The last depth limit iterative deepening tried.
    pub fn depth_limit(&self) -> Option<u32> {
        self.depth_limit
    }

    pub(crate) fn add_generated(&mut self, depth: u32) -> bool {
        Self::add(&mut self.generated_states, depth)
    }

    /// Returns true when this is the first expanded state at this depth.
    pub(crate) fn add_expanded(&mut self, depth: u32) -> bool {
        Self::add(&mut self.expanded_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    pub(crate) fn set_depth_limit(&mut self, limit: u32) {
        self.depth_limit = Some(limit);
    }

    fn add(counts: &mut Vec<usize>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because some depths might be skipped
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "generated by depth: {:?}", self.generated_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        if let Some(limit) = self.depth_limit {
            writeln!(f, "depth limit: {}", limit)?;
        }
        writeln!(f, "total generated: {}", self.total_generated().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States generated total: {}", self.total_generated().separated_string())?;
        writeln!(f, "States expanded total: {}", self.total_expanded().separated_string())?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        if let Some(limit) = self.depth_limit {
            writeln!(f, "Depth limit: {}", limit)?;
        }
        Ok(())
    }
}

use crate::{GoapError, Result};

/// Bounds on how far the planner may recurse.
///
/// Both bounds are always enforced. A branch that would go deeper is dropped
/// and counted in [`PlanSet::depth_limit_hits`](crate::PlanSet::depth_limit_hits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    /// How many precondition levels the backward search may descend
    pub max_search_depth: usize,
    /// How many travel splices movement adjustment may nest
    pub max_movement_depth: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_search_depth: 12,
            max_movement_depth: 10,
        }
    }
}

impl PlannerConfig {
    pub fn with_max_search_depth(mut self, depth: usize) -> Self {
        self.max_search_depth = depth;
        self
    }

    pub fn with_max_movement_depth(mut self, depth: usize) -> Self {
        self.max_movement_depth = depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_search_depth == 0 {
            return Err(GoapError::InvalidConfig(
                "max_search_depth must be at least 1".to_string(),
            ));
        }
        if self.max_movement_depth == 0 {
            return Err(GoapError::InvalidConfig(
                "max_movement_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

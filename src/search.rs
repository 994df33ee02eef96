//! # Backward-Chaining Search
//!
//! The search starts from a goal condition and works backwards: every action
//! that could satisfy the goal is a branch, every unmet precondition of that
//! action is a sub-goal, and so on until each branch either bottoms out in
//! actions the agent can perform right now or runs into a condition nothing
//! can satisfy.
//!
//! All unmet preconditions of an action are satisfied jointly. The solutions
//! for each precondition are combined in declaration order and placed before
//! the action, so every chain the search returns can be replayed from the
//! starting state without a dangling precondition.
//!
//! There is no cycle detection. Recursion is cut at
//! [`PlannerConfig::max_search_depth`], and each cut is counted so callers can
//! tell a truncated search from a goal that is simply out of reach.

use crate::action::Action;
use crate::agent::AgentState;
use crate::condition::Condition;
use crate::config::PlannerConfig;
use crate::movement::Chain;
use crate::plan::Plan;
use crate::world::{Economy, PlanningContext, WorldView};
use crate::Result;

/// Domain knowledge of which actions can satisfy which condition.
///
/// The planner asks its repertoire for candidates instead of calling
/// [`Condition::candidate_actions`] directly, so callers can restrict or extend
/// what an agent knows how to do.
///
/// # Examples
///
/// ```
/// use goap_planner::{Action, Condition, PlanningContext, Repertoire, Result};
///
/// /// An agent too honest to steal.
/// struct Honest;
///
/// impl Repertoire for Honest {
///     fn candidate_actions(
///         &self,
///         condition: &Condition,
///         ctx: &PlanningContext<'_>,
///     ) -> Result<Vec<Action>> {
///         let mut actions = condition.candidate_actions(ctx)?;
///         actions.retain(|a| !matches!(a.name(), "steal_item" | "steal_money"));
///         Ok(actions)
///     }
/// }
/// ```
pub trait Repertoire {
    fn candidate_actions(
        &self,
        condition: &Condition,
        ctx: &PlanningContext<'_>,
    ) -> Result<Vec<Action>>;
}

/// Uses each condition's own candidate table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRepertoire;

impl Repertoire for DefaultRepertoire {
    fn candidate_actions(
        &self,
        condition: &Condition,
        ctx: &PlanningContext<'_>,
    ) -> Result<Vec<Action>> {
        condition.candidate_actions(ctx)
    }
}

/// State of one top-level planning call.
pub(crate) struct BackwardSearch<'a> {
    repertoire: &'a dyn Repertoire,
    world: &'a dyn WorldView,
    economy: &'a dyn Economy,
    pub(crate) config: PlannerConfig,
    pub(crate) depth_limit_hits: usize,
}

impl<'a> BackwardSearch<'a> {
    pub(crate) fn new(
        repertoire: &'a dyn Repertoire,
        world: &'a dyn WorldView,
        economy: &'a dyn Economy,
        config: PlannerConfig,
    ) -> Self {
        Self {
            repertoire,
            world,
            economy,
            config,
            depth_limit_hits: 0,
        }
    }

    /// Finds every plan achieving `goal` for `agent`, adjusted for movement.
    ///
    /// `movement_depth` is the number of travel splices already made by the
    /// caller; top-level calls pass 0.
    pub(crate) fn search(
        &mut self,
        goal: &Condition,
        agent: &AgentState,
        movement_depth: usize,
    ) -> Result<Vec<Plan>> {
        if goal.is_satisfied(agent) {
            log::debug!("Goal '{}' already holds", goal);
            return Ok(vec![Plan::empty()]);
        }

        let chains = self.find_actions_leading_to_goal(goal, agent, 0)?;
        let mut plans = Vec::new();
        for chain in chains {
            self.adjust_for_movement(agent, Chain::new(chain), movement_depth, &mut plans)?;
        }
        Ok(plans)
    }

    /// Expands `goal` into every action chain that satisfies it, in execution
    /// order and discovery order.
    pub(crate) fn find_actions_leading_to_goal(
        &mut self,
        goal: &Condition,
        agent: &AgentState,
        depth: usize,
    ) -> Result<Vec<Vec<Action>>> {
        let ctx = PlanningContext::new(agent, self.world, self.economy);
        let candidates = self.repertoire.candidate_actions(goal, &ctx)?;
        if candidates.is_empty() {
            log::trace!("[depth {}] '{}' has no remedy", depth, goal);
            return Ok(Vec::new());
        }

        // only a condition that could have been expanded counts as a cut
        if depth >= self.config.max_search_depth {
            self.depth_limit_hits += 1;
            log::warn!(
                "Search depth limit {} reached while expanding '{}'",
                self.config.max_search_depth,
                goal
            );
            return Ok(Vec::new());
        }

        let mut chains = Vec::new();
        for action in candidates {
            let unmet = action.unmet_preconditions(agent);
            log::debug!(
                "[depth {}] '{}' via {} ({} unmet)",
                depth,
                goal,
                action,
                unmet.len()
            );

            let mut prefixes: Vec<Vec<Action>> = vec![Vec::new()];
            for condition in &unmet {
                log::trace!("[depth {}] {} needs '{}'", depth, action, condition);
                let solutions = self.find_actions_leading_to_goal(condition, agent, depth + 1)?;
                prefixes = combine(&prefixes, &solutions);
                if prefixes.is_empty() {
                    log::trace!("[depth {}] '{}' cannot be satisfied", depth, condition);
                    break;
                }
            }

            for mut chain in prefixes {
                chain.push(action.clone());
                chains.push(chain);
            }
        }

        Ok(chains)
    }
}

/// Every prefix followed by every solution.
fn combine(prefixes: &[Vec<Action>], solutions: &[Vec<Action>]) -> Vec<Vec<Action>> {
    prefixes
        .iter()
        .flat_map(|prefix| {
            solutions.iter().map(move |solution| {
                let mut chain = Vec::with_capacity(prefix.len() + solution.len());
                chain.extend(prefix.iter().cloned());
                chain.extend(solution.iter().cloned());
                chain
            })
        })
        .collect()
}

//! # Movement Adjustment
//!
//! The backward search decides *what* to do but not *where*. A chain it
//! returns may ask the agent to buy something at the market and then work at
//! the docks with no travel in between. Movement adjustment walks the chain,
//! follows the agent's simulated position, and splices a travel sub-plan in
//! front of every action that happens somewhere else.
//!
//! Which actions have been looked at is tracked per chain, in a `checked` list
//! that is copied along with the chain whenever a splice produces a new one.
//! Actions themselves are never marked, so alternative chains sharing the same
//! action values cannot see each other's progress.

use crate::action::Action;
use crate::agent::AgentState;
use crate::condition::Condition;
use crate::plan::{Plan, UnreachableLocation};
use crate::search::BackwardSearch;
use crate::Result;

/// An action chain under movement adjustment.
#[derive(Debug, Clone)]
pub(crate) struct Chain {
    actions: Vec<Action>,
    checked: Vec<bool>,
    unreachable: Vec<UnreachableLocation>,
}

impl Chain {
    /// Moves start out checked; they never need travel of their own.
    pub(crate) fn new(actions: Vec<Action>) -> Self {
        let checked = actions.iter().map(Action::is_move).collect();
        Self {
            actions,
            checked,
            unreachable: Vec::new(),
        }
    }

    /// New chain with `travel` inserted before `index`, which becomes checked.
    fn splice(&self, index: usize, travel: &Plan) -> Self {
        let mut actions = Vec::with_capacity(self.actions.len() + travel.len());
        actions.extend_from_slice(&self.actions[..index]);
        actions.extend(travel.iter().cloned());
        actions.extend_from_slice(&self.actions[index..]);

        let mut checked = Vec::with_capacity(actions.len());
        checked.extend_from_slice(&self.checked[..index]);
        checked.extend(std::iter::repeat(true).take(travel.len() + 1));
        checked.extend_from_slice(&self.checked[index + 1..]);

        let mut unreachable = self.unreachable.clone();
        unreachable.extend(travel.unreachable().iter().cloned());

        Self {
            actions,
            checked,
            unreachable,
        }
    }

    fn into_plan(self) -> Plan {
        Plan::with_unreachable(self.actions, self.unreachable)
    }
}

impl BackwardSearch<'_> {
    /// Makes `chain` spatially consistent for `agent` and appends every
    /// resulting variant to `plans`.
    ///
    /// One variant is produced per combination of travel sub-plans. A location
    /// no travel can reach is recorded on the plan rather than dropping it.
    /// Chains needing more than `max_movement_depth` nested splices are dropped.
    pub(crate) fn adjust_for_movement(
        &mut self,
        agent: &AgentState,
        mut chain: Chain,
        depth: usize,
        plans: &mut Vec<Plan>,
    ) -> Result<()> {
        if depth > self.config.max_movement_depth {
            self.depth_limit_hits += 1;
            log::warn!(
                "Movement depth limit {} exceeded, dropping chain",
                self.config.max_movement_depth
            );
            return Ok(());
        }

        let mut current = agent.position;
        for index in 0..chain.actions.len() {
            let required = chain.actions[index].location_for(current);
            if chain.checked[index] || required == current {
                chain.checked[index] = true;
                current = required;
                continue;
            }

            if depth >= self.config.max_movement_depth {
                self.depth_limit_hits += 1;
                log::warn!(
                    "Movement depth limit {} reached before travelling to {}",
                    self.config.max_movement_depth,
                    required
                );
                return Ok(());
            }

            let projected = agent.projected_at(current);
            let goal = Condition::at_location(current, required);
            let travel_plans = self.search(&goal, &projected, depth + 1)?;

            if travel_plans.is_empty() {
                let action = chain.actions[index].to_string();
                log::warn!("No way from {} to {} to {}", current, required, action);
                chain.unreachable.push(UnreachableLocation {
                    action,
                    from: current,
                    to: required,
                });
                chain.checked[index] = true;
                current = required;
                continue;
            }

            log::debug!(
                "Splicing {} travel option(s) before '{}'",
                travel_plans.len(),
                chain.actions[index]
            );
            for travel in &travel_plans {
                self.adjust_for_movement(agent, chain.splice(index, travel), depth + 1, plans)?;
            }
            return Ok(());
        }

        plans.push(chain.into_plan());
        Ok(())
    }
}

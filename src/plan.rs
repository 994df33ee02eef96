//! # Plans
//!
//! A [`Plan`] is the only thing that leaves the planner: an ordered list of
//! actions plus a record of any place the agent could not find a way to reach.

use std::fmt;
use std::slice;

use crate::action::Action;
use crate::agent::{AgentState, Location};
use crate::{GoapError, Result};

/// A location gap movement adjustment could not bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreachableLocation {
    /// Description of the action that needed to be at `to`
    pub action: String,
    pub from: Location,
    pub to: Location,
}

impl fmt::Display for UnreachableLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot reach {} from {} to {}",
            self.to, self.from, self.action
        )
    }
}

/// An ordered sequence of actions achieving a goal.
///
/// # Examples
///
/// ```
/// use goap_planner::{Action, AgentState, Location, Plan};
///
/// let plan = Plan::new(vec![
///     Action::move_to(Location::new(0, 0), Location::new(2, 2)),
///     Action::buy_item("cheese", 5, Some(Location::new(2, 2))).unwrap(),
/// ]);
///
/// let agent = AgentState::new(Location::new(0, 0)).with_currency(5);
/// let after = plan.simulate(&agent).unwrap();
///
/// assert!(after.has_item("cheese"));
/// assert!(plan.is_spatially_consistent(agent.position));
/// assert_eq!(format!("{}", plan), "travel to (2, 2) -> buy cheese for 5");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    actions: Vec<Action>,
    unreachable: Vec<UnreachableLocation>,
}

impl Plan {
    pub fn new(actions: Vec<Action>) -> Self {
        Self {
            actions,
            unreachable: Vec::new(),
        }
    }

    /// The plan for a goal that already holds.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn with_unreachable(
        actions: Vec<Action>,
        unreachable: Vec<UnreachableLocation>,
    ) -> Self {
        Self {
            actions,
            unreachable,
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Action> {
        self.actions.iter()
    }

    pub fn action_names(&self) -> Vec<&'static str> {
        self.actions.iter().map(Action::name).collect()
    }

    pub fn move_count(&self) -> usize {
        self.actions.iter().filter(|action| action.is_move()).count()
    }

    /// Number of action executions, counting repeats. Used as the plan cost.
    pub fn total_repeats(&self) -> u64 {
        self.actions
            .iter()
            .fold(0u64, |total, action| total.saturating_add(action.repeat_count()))
    }

    /// False when some action's location could not be reached.
    pub fn is_reachable(&self) -> bool {
        self.unreachable.is_empty()
    }

    pub fn unreachable(&self) -> &[UnreachableLocation] {
        &self.unreachable
    }

    /// Checks that every non-move action happens where the agent already is,
    /// starting from `start` and following the plan's moves.
    pub fn is_spatially_consistent(&self, start: Location) -> bool {
        let mut current = start;
        for action in &self.actions {
            if !action.is_move() && action.location_for(current) != current {
                return false;
            }
            current = action.location_for(current);
        }
        true
    }

    /// Replays the plan on a copy of `agent`, returning the projected final state.
    ///
    /// # Errors
    ///
    /// Returns [`GoapError::PreconditionNotMet`] at the first action whose
    /// preconditions the projected state does not satisfy.
    pub fn simulate(&self, agent: &AgentState) -> Result<AgentState> {
        let mut state = agent.clone();
        for action in &self.actions {
            if let Some(condition) = action.unmet_preconditions(&state).first() {
                return Err(GoapError::PreconditionNotMet(format!(
                    "{} requires {}",
                    action, condition
                )));
            }
            action.apply_effects(&mut state);
        }
        Ok(state)
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a Action;
    type IntoIter = slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.actions.is_empty() {
            return write!(f, "(nothing to do)");
        }
        let steps: Vec<String> = self.actions.iter().map(ToString::to_string).collect();
        write!(f, "{}", steps.join(" -> "))
    }
}

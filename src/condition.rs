//! # Conditions
//!
//! A [`Condition`] is something the planner wants to be true about an agent:
//! being somewhere, owning something, knowing something. Each condition can
//! test itself against an [`AgentState`] and list the actions that would make
//! it true when it is not.
//!
//! ```
//! use goap_planner::{AgentState, Condition, Location};
//!
//! let agent = AgentState::new(Location::new(0, 0)).with_currency(10);
//!
//! assert!(Condition::have_money(10).is_satisfied(&agent));
//! assert!(!Condition::have_item("cheese").is_satisfied(&agent));
//! ```

use std::fmt;

use crate::action::Action;
use crate::agent::{AgentState, Location, EXACT_ACCURACY, ROUGH_ACCURACY};
use crate::world::PlanningContext;
use crate::Result;

/// A checkable goal or precondition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Agent stands on `to`; `from` is where travel would start
    AtLocation { from: Location, to: Location },
    HaveItem { item: String },
    /// Agent knows exactly where `item` is
    KnowLocation { item: String },
    /// Agent knows at least roughly where `item` is
    HaveRoughLocationIdea { item: String },
    HaveMoney { amount: i64 },
    HaveJob,
    CanAct,
}

impl Condition {
    pub fn at_location(from: Location, to: Location) -> Self {
        Self::AtLocation { from, to }
    }

    pub fn have_item(item: impl Into<String>) -> Self {
        Self::HaveItem { item: item.into() }
    }

    pub fn know_location(item: impl Into<String>) -> Self {
        Self::KnowLocation { item: item.into() }
    }

    pub fn have_rough_location_idea(item: impl Into<String>) -> Self {
        Self::HaveRoughLocationIdea { item: item.into() }
    }

    pub fn have_money(amount: i64) -> Self {
        Self::HaveMoney { amount }
    }

    /// Stable snake_case tag of the condition kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AtLocation { .. } => "at_location",
            Self::HaveItem { .. } => "have_item",
            Self::KnowLocation { .. } => "know_location",
            Self::HaveRoughLocationIdea { .. } => "have_rough_location_idea",
            Self::HaveMoney { .. } => "have_money",
            Self::HaveJob => "have_job",
            Self::CanAct => "can_act",
        }
    }

    /// Tests the condition against `agent` without side effects.
    pub fn is_satisfied(&self, agent: &AgentState) -> bool {
        match self {
            Self::AtLocation { to, .. } => agent.position == *to,
            Self::HaveItem { item } => agent.has_item(item),
            Self::KnowLocation { item } => {
                agent.knowledge.location_accuracy(item) == Some(EXACT_ACCURACY)
            }
            Self::HaveRoughLocationIdea { item } => agent
                .knowledge
                .location_accuracy(item)
                .map_or(false, |accuracy| accuracy <= ROUGH_ACCURACY),
            Self::HaveMoney { amount } => agent.currency >= *amount,
            Self::HaveJob => agent.profession.is_some(),
            Self::CanAct => agent.is_available_to_act(),
        }
    }

    /// Actions that could make this condition true, in the order the search
    /// should try them.
    ///
    /// An empty list means the condition has no known remedy. A rough idea of
    /// where something is, and being able to act at all, are never planned for.
    ///
    /// # Errors
    ///
    /// Fails when a collaborator hands back parameters no action can be built
    /// from, such as a negative price or a non-positive wage.
    pub fn candidate_actions(&self, ctx: &PlanningContext<'_>) -> Result<Vec<Action>> {
        let actions = match self {
            Self::AtLocation { from, to } => vec![Action::move_to(*from, *to)],
            Self::HaveItem { item } => {
                let mut actions = Vec::with_capacity(2);
                if let Some(price) = ctx.economy.price_of(item) {
                    actions.push(Action::buy_item(
                        item.clone(),
                        price,
                        ctx.world.point_of_sale(item),
                    )?);
                }
                actions.push(Action::steal_item(item.clone(), ctx.world.item_location(item)));
                actions
            }
            Self::KnowLocation { item } => vec![
                Action::find_item_location(item.clone()),
                Action::search_for_item(item.clone(), ctx.world.item_location(item)),
            ],
            Self::HaveRoughLocationIdea { .. } | Self::CanAct => Vec::new(),
            Self::HaveMoney { amount } => {
                let shortfall = amount.saturating_sub(ctx.agent.currency);
                if shortfall <= 0 {
                    return Ok(Vec::new());
                }
                let (monthly_pay, work_site) = match &ctx.agent.profession {
                    Some(profession) => (profession.monthly_pay, profession.work_site),
                    None => (ctx.economy.expected_monthly_pay(), None),
                };
                vec![
                    Action::earn_money(
                        shortfall,
                        monthly_pay,
                        work_site.or_else(|| ctx.world.hiring_site()),
                    )?,
                    Action::steal_money(shortfall)?,
                ]
            }
            Self::HaveJob => vec![Action::get_job(
                ctx.economy.expected_monthly_pay(),
                ctx.world.hiring_site(),
            )?],
        };
        Ok(actions)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLocation { to, .. } => write!(f, "be at {}", to),
            Self::HaveItem { item } => write!(f, "have {}", item),
            Self::KnowLocation { item } => write!(f, "know where {} is", item),
            Self::HaveRoughLocationIdea { item } => write!(f, "roughly know where {} is", item),
            Self::HaveMoney { amount } => write!(f, "have {} money", amount),
            Self::HaveJob => write!(f, "have a job"),
            Self::CanAct => write!(f, "be able to act"),
        }
    }
}

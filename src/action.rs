//! # Actions
//!
//! An [`Action`] is one step an agent could take. Every action kind carries a
//! fixed precondition template, a place where it has to happen, and the effect
//! it has on the agent once executed. Actions are immutable values: plans hold
//! their own copies, and nothing about movement bookkeeping is stored on them.
//!
//! ## Basic Usage
//!
//! ```
//! use goap_planner::{Action, AgentState, Condition, Location};
//!
//! let work = Action::earn_money(10, 4, Some(Location::new(3, 3))).unwrap();
//!
//! // 10 money at 4 per month takes three months
//! assert_eq!(work.repeat_count(), 3);
//! assert_eq!(work.preconditions(), vec![Condition::HaveJob]);
//!
//! let agent = AgentState::new(Location::new(0, 0));
//! assert!(!work.can_perform(&agent));
//! assert_eq!(work.location_for(agent.position), Location::new(3, 3));
//! ```

use std::fmt;

use crate::agent::{AgentState, Location, Profession, EXACT_ACCURACY, LOCATION_ATTRIBUTE};
use crate::condition::Condition;
use crate::{GoapError, Result};

/// Where an action has to be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationRequirement {
    /// Wherever the agent happens to be
    Anywhere,
    At(Location),
}

impl LocationRequirement {
    /// Location the agent must occupy, given where it currently is.
    pub fn resolve(&self, current: Location) -> Location {
        match self {
            Self::Anywhere => current,
            Self::At(location) => *location,
        }
    }
}

impl From<Option<Location>> for LocationRequirement {
    fn from(location: Option<Location>) -> Self {
        location.map_or(Self::Anywhere, Self::At)
    }
}

/// The kind of an action together with the parameters that kind needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    Move { from: Location, to: Location },
    FindItemLocation { item: String },
    SearchForItem { item: String },
    GetJob { monthly_pay: i64 },
    EarnMoneyByWorking { amount: i64, monthly_pay: i64 },
    StealMoney { amount: i64 },
    BuyItem { item: String, price: i64 },
    StealItem { item: String },
}

/// A single step of a plan.
///
/// Actions can only be built through the constructors below, which reject
/// parameters that would make the action meaningless.
///
/// # Examples
///
/// ```
/// use goap_planner::{Action, AgentState, Condition, Location};
///
/// let buy = Action::buy_item("cheese", 5, None).unwrap();
/// assert_eq!(buy.preconditions(), vec![Condition::have_money(5)]);
///
/// let mut agent = AgentState::new(Location::new(0, 0)).with_currency(8);
/// assert!(buy.can_perform(&agent));
///
/// buy.apply_effects(&mut agent);
/// assert!(agent.has_item("cheese"));
/// assert_eq!(agent.currency, 3);
///
/// // Prices cannot be negative
/// assert!(Action::buy_item("cheese", -1, None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    kind: ActionKind,
    location: LocationRequirement,
}

impl Action {
    /// Travel from `from` to `to`.
    pub fn move_to(from: Location, to: Location) -> Self {
        Self {
            kind: ActionKind::Move { from, to },
            location: LocationRequirement::At(to),
        }
    }

    /// Ask around until the exact location of `item` is known.
    pub fn find_item_location(item: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::FindItemLocation { item: item.into() },
            location: LocationRequirement::Anywhere,
        }
    }

    /// Comb the area `item` is roughly known to be in.
    pub fn search_for_item(item: impl Into<String>, site: Option<Location>) -> Self {
        Self {
            kind: ActionKind::SearchForItem { item: item.into() },
            location: site.into(),
        }
    }

    /// Get hired for `monthly_pay` per work cycle.
    pub fn get_job(monthly_pay: i64, site: Option<Location>) -> Result<Self> {
        if monthly_pay <= 0 {
            return Err(GoapError::InvalidIncome(monthly_pay));
        }
        Ok(Self {
            kind: ActionKind::GetJob { monthly_pay },
            location: site.into(),
        })
    }

    /// Work until `amount` money has been earned.
    pub fn earn_money(amount: i64, monthly_pay: i64, site: Option<Location>) -> Result<Self> {
        if amount <= 0 {
            return Err(GoapError::InvalidAmount(amount));
        }
        if monthly_pay <= 0 {
            return Err(GoapError::InvalidIncome(monthly_pay));
        }
        Ok(Self {
            kind: ActionKind::EarnMoneyByWorking {
                amount,
                monthly_pay,
            },
            location: site.into(),
        })
    }

    /// Steal `amount` money from whoever is nearby.
    pub fn steal_money(amount: i64) -> Result<Self> {
        if amount <= 0 {
            return Err(GoapError::InvalidAmount(amount));
        }
        Ok(Self {
            kind: ActionKind::StealMoney { amount },
            location: LocationRequirement::Anywhere,
        })
    }

    /// Buy `item` for `price` at `site`.
    pub fn buy_item(item: impl Into<String>, price: i64, site: Option<Location>) -> Result<Self> {
        let item = item.into();
        if price < 0 {
            return Err(GoapError::InvalidPrice { item, price });
        }
        Ok(Self {
            kind: ActionKind::BuyItem { item, price },
            location: site.into(),
        })
    }

    /// Take `item` from where it is kept.
    pub fn steal_item(item: impl Into<String>, site: Option<Location>) -> Self {
        Self {
            kind: ActionKind::StealItem { item: item.into() },
            location: site.into(),
        }
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    pub fn location_requirement(&self) -> LocationRequirement {
        self.location
    }

    /// Stable snake_case tag of the action kind.
    pub fn name(&self) -> &'static str {
        match self.kind {
            ActionKind::Move { .. } => "move",
            ActionKind::FindItemLocation { .. } => "find_item_location",
            ActionKind::SearchForItem { .. } => "search_for_item",
            ActionKind::GetJob { .. } => "get_job",
            ActionKind::EarnMoneyByWorking { .. } => "earn_money_by_working",
            ActionKind::StealMoney { .. } => "steal_money",
            ActionKind::BuyItem { .. } => "buy_item",
            ActionKind::StealItem { .. } => "steal_item",
        }
    }

    /// Moves are never adjusted for movement themselves.
    pub fn is_move(&self) -> bool {
        matches!(self.kind, ActionKind::Move { .. })
    }

    /// Conditions that must hold before this action can run, in declaration order.
    pub fn preconditions(&self) -> Vec<Condition> {
        match &self.kind {
            ActionKind::Move { .. }
            | ActionKind::FindItemLocation { .. }
            | ActionKind::GetJob { .. }
            | ActionKind::StealMoney { .. } => vec![Condition::CanAct],
            ActionKind::SearchForItem { item } => vec![
                Condition::CanAct,
                Condition::have_rough_location_idea(item.clone()),
            ],
            ActionKind::EarnMoneyByWorking { .. } => vec![Condition::HaveJob],
            ActionKind::BuyItem { price, .. } => vec![Condition::have_money(*price)],
            ActionKind::StealItem { item } => vec![Condition::know_location(item.clone())],
        }
    }

    /// Preconditions `agent` does not satisfy yet.
    pub fn unmet_preconditions(&self, agent: &AgentState) -> Vec<Condition> {
        self.preconditions()
            .into_iter()
            .filter(|condition| !condition.is_satisfied(agent))
            .collect()
    }

    pub fn can_perform(&self, agent: &AgentState) -> bool {
        self.preconditions()
            .iter()
            .all(|condition| condition.is_satisfied(agent))
    }

    /// How many times the action runs before its purpose is met.
    pub fn repeat_count(&self) -> u64 {
        self.months_of_work().unsigned_abs().max(1)
    }

    /// Work cycles needed to earn the target amount, 0 for other kinds.
    fn months_of_work(&self) -> i64 {
        match self.kind {
            ActionKind::EarnMoneyByWorking {
                amount,
                monthly_pay,
            } => {
                // constructor guarantees both are positive
                amount / monthly_pay + i64::from(amount % monthly_pay != 0)
            }
            _ => 0,
        }
    }

    /// Location the agent has to occupy to run this action.
    pub fn location_for(&self, current: Location) -> Location {
        self.location.resolve(current)
    }

    /// Applies the action's projected outcome to `agent`.
    ///
    /// Located actions leave the agent standing where they happened.
    pub fn apply_effects(&self, agent: &mut AgentState) {
        agent.position = self.location_for(agent.position);
        match &self.kind {
            ActionKind::Move { .. } => {}
            ActionKind::FindItemLocation { item } | ActionKind::SearchForItem { item } => {
                agent
                    .knowledge
                    .set(item.clone(), LOCATION_ATTRIBUTE, EXACT_ACCURACY);
            }
            ActionKind::GetJob { monthly_pay } => {
                let mut profession = Profession::new(*monthly_pay);
                profession.work_site = match self.location {
                    LocationRequirement::At(site) => Some(site),
                    LocationRequirement::Anywhere => None,
                };
                agent.profession = Some(profession);
            }
            ActionKind::EarnMoneyByWorking { monthly_pay, .. } => {
                let earned = monthly_pay.saturating_mul(self.months_of_work());
                agent.currency = agent.currency.saturating_add(earned);
            }
            ActionKind::StealMoney { amount } => {
                agent.currency = agent.currency.saturating_add(*amount);
            }
            ActionKind::BuyItem { item, price } => {
                agent.currency = agent.currency.saturating_sub(*price);
                agent.possessions.insert(item.clone());
            }
            ActionKind::StealItem { item } => {
                agent.possessions.insert(item.clone());
            }
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ActionKind::Move { to, .. } => write!(f, "travel to {}", to),
            ActionKind::FindItemLocation { item } => write!(f, "find out where {} is", item),
            ActionKind::SearchForItem { item } => write!(f, "search for {}", item),
            ActionKind::GetJob { .. } => write!(f, "get a job"),
            ActionKind::EarnMoneyByWorking { amount, .. } => write!(
                f,
                "work for {} money ({} months)",
                amount,
                self.repeat_count()
            ),
            ActionKind::StealMoney { amount } => write!(f, "steal {} money", amount),
            ActionKind::BuyItem { item, price } => write!(f, "buy {} for {}", item, price),
            ActionKind::StealItem { item } => write!(f, "steal {}", item),
        }
    }
}

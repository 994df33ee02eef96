//! # Agent State
//!
//! The planner never owns the agent it plans for. Callers hand it an
//! [`AgentState`] snapshot, and conditions and actions read from that snapshot
//! while the search runs. The only writes happen on private copies, when a plan
//! is replayed or when movement adjustment projects the agent to another tile.
//!
//! ```
//! use goap_planner::{AgentState, Location};
//!
//! let agent = AgentState::new(Location::new(10, 10))
//!     .with_currency(10)
//!     .with_knowledge("cheese", "location", 2);
//!
//! assert_eq!(agent.currency, 10);
//! assert_eq!(agent.knowledge.location_accuracy("cheese"), Some(2));
//! assert!(agent.is_available_to_act());
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Knowledge attribute holding how precisely an agent knows where something is.
pub const LOCATION_ATTRIBUTE: &str = "location";

/// Accuracy value meaning "knows the exact location".
pub const EXACT_ACCURACY: i32 = 1;

/// Coarsest accuracy that still counts as a rough idea of the location.
pub const ROUGH_ACCURACY: i32 = 2;

/// A world tile coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Location {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Employment record of an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profession {
    /// Income earned per work cycle (one month)
    pub monthly_pay: i64,
    /// Where the work happens, if anywhere in particular
    pub work_site: Option<Location>,
}

impl Profession {
    pub fn new(monthly_pay: i64) -> Self {
        Self {
            monthly_pay,
            work_site: None,
        }
    }

    pub fn with_work_site(mut self, site: Location) -> Self {
        self.work_site = Some(site);
        self
    }
}

/// Sparse `subject -> attribute -> value` knowledge store.
///
/// Missing entries mean the agent knows nothing at all, which is weaker than
/// any recorded accuracy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    facts: HashMap<String, HashMap<String, i32>>,
}

impl Knowledge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, subject: impl Into<String>, attribute: impl Into<String>, value: i32) {
        self.facts
            .entry(subject.into())
            .or_default()
            .insert(attribute.into(), value);
    }

    pub fn get(&self, subject: &str, attribute: &str) -> Option<i32> {
        self.facts
            .get(subject)
            .and_then(|attributes| attributes.get(attribute))
            .copied()
    }

    pub fn location_accuracy(&self, item: &str) -> Option<i32> {
        self.get(item, LOCATION_ATTRIBUTE)
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

/// Snapshot of everything the planner may ask about an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentState {
    pub position: Location,
    pub possessions: HashSet<String>,
    pub currency: i64,
    pub profession: Option<Profession>,
    pub knowledge: Knowledge,
    /// Whether the agent is currently free to act (not asleep, captive, ...)
    pub available: bool,
}

impl AgentState {
    /// Creates an available agent at `position` with nothing to its name.
    pub fn new(position: Location) -> Self {
        Self {
            position,
            possessions: HashSet::new(),
            currency: 0,
            profession: None,
            knowledge: Knowledge::new(),
            available: true,
        }
    }

    pub fn with_currency(mut self, currency: i64) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_possession(mut self, item: impl Into<String>) -> Self {
        self.possessions.insert(item.into());
        self
    }

    pub fn with_profession(mut self, profession: Profession) -> Self {
        self.profession = Some(profession);
        self
    }

    pub fn with_knowledge(
        mut self,
        subject: impl Into<String>,
        attribute: impl Into<String>,
        value: i32,
    ) -> Self {
        self.knowledge.set(subject, attribute, value);
        self
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.possessions.contains(item)
    }

    pub fn is_available_to_act(&self) -> bool {
        self.available
    }

    /// Copy of this state standing somewhere else.
    pub(crate) fn projected_at(&self, position: Location) -> Self {
        let mut projected = self.clone();
        projected.position = position;
        projected
    }
}

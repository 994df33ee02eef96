//! # Collaborators
//!
//! The planner consults two outside services while it builds candidate
//! actions: a [`WorldView`] that knows where things happen, and an [`Economy`]
//! that knows what things cost. Neither is involved in the search's control
//! flow; they only fill in action parameters.
//!
//! [`StaticWorld`] and [`PriceList`] are plain in-memory implementations.

use std::collections::HashMap;

use crate::agent::{AgentState, Location};

/// Spatial lookups needed to place actions on the map.
///
/// `None` means the action can be carried out wherever the agent stands.
pub trait WorldView {
    /// Where `item` can be bought.
    fn point_of_sale(&self, item: &str) -> Option<Location>;

    /// Where `item` is physically kept.
    fn item_location(&self, item: &str) -> Option<Location>;

    /// Where an unemployed agent goes to find work.
    fn hiring_site(&self) -> Option<Location>;
}

/// Static economic attributes of goods and labour.
pub trait Economy {
    /// Price of `item`, or `None` if it is not sold anywhere.
    fn price_of(&self, item: &str) -> Option<i64>;

    /// Income per work cycle an agent can expect from a new job.
    fn expected_monthly_pay(&self) -> i64;
}

/// Everything candidate generation is allowed to read.
#[derive(Clone, Copy)]
pub struct PlanningContext<'a> {
    pub agent: &'a AgentState,
    pub world: &'a dyn WorldView,
    pub economy: &'a dyn Economy,
}

impl<'a> PlanningContext<'a> {
    pub fn new(agent: &'a AgentState, world: &'a dyn WorldView, economy: &'a dyn Economy) -> Self {
        Self {
            agent,
            world,
            economy,
        }
    }
}

/// A fixed map of sites.
///
/// # Examples
///
/// ```
/// use goap_planner::{Location, StaticWorld, WorldView};
///
/// let world = StaticWorld::new()
///     .with_market("cheese", Location::new(2, 2))
///     .with_hiring_site(Location::new(7, 1));
///
/// assert_eq!(world.point_of_sale("cheese"), Some(Location::new(2, 2)));
/// assert_eq!(world.item_location("cheese"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticWorld {
    markets: HashMap<String, Location>,
    stashes: HashMap<String, Location>,
    hiring_site: Option<Location>,
}

impl StaticWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_market(mut self, item: impl Into<String>, location: Location) -> Self {
        self.markets.insert(item.into(), location);
        self
    }

    pub fn with_stash(mut self, item: impl Into<String>, location: Location) -> Self {
        self.stashes.insert(item.into(), location);
        self
    }

    pub fn with_hiring_site(mut self, location: Location) -> Self {
        self.hiring_site = Some(location);
        self
    }
}

impl WorldView for StaticWorld {
    fn point_of_sale(&self, item: &str) -> Option<Location> {
        self.markets.get(item).copied()
    }

    fn item_location(&self, item: &str) -> Option<Location> {
        self.stashes.get(item).copied()
    }

    fn hiring_site(&self) -> Option<Location> {
        self.hiring_site
    }
}

/// A price catalog with a single going wage.
#[derive(Debug, Clone)]
pub struct PriceList {
    prices: HashMap<String, i64>,
    monthly_pay: i64,
}

impl PriceList {
    pub fn new(monthly_pay: i64) -> Self {
        Self {
            prices: HashMap::new(),
            monthly_pay,
        }
    }

    pub fn with_price(mut self, item: impl Into<String>, price: i64) -> Self {
        self.prices.insert(item.into(), price);
        self
    }
}

impl Economy for PriceList {
    fn price_of(&self, item: &str) -> Option<i64> {
        self.prices.get(item).copied()
    }

    fn expected_monthly_pay(&self) -> i64 {
        self.monthly_pay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_world_lookups() {
        let world = StaticWorld::new()
            .with_market("cheese", Location::new(1, 1))
            .with_stash("cheese", Location::new(9, 9));

        assert_eq!(world.point_of_sale("cheese"), Some(Location::new(1, 1)));
        assert_eq!(world.item_location("cheese"), Some(Location::new(9, 9)));
        assert_eq!(world.point_of_sale("bread"), None);
        assert_eq!(world.hiring_site(), None);
    }

    #[test]
    fn test_price_list() {
        let prices = PriceList::new(4).with_price("cheese", 6);
        assert_eq!(prices.price_of("cheese"), Some(6));
        assert_eq!(prices.price_of("gold ring"), None);
        assert_eq!(prices.expected_monthly_pay(), 4);
    }
}

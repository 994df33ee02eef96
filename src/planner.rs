//! # Planner Module
//!
//! The planner is the entry point of the crate. Given a goal [`Condition`] and
//! an [`AgentState`], it:
//! 1. Returns the empty plan straight away if the goal already holds
//! 2. Searches backwards from the goal through candidate actions and their
//!    preconditions, collecting every fully satisfied action chain
//! 3. Splices travel into each chain wherever consecutive actions happen in
//!    different places
//! 4. Hands back every resulting plan in discovery order
//!
//! The planner keeps no state between calls. Running the same goal against the
//! same agent twice yields the same [`PlanSet`].
//!
//! ## Basic Usage
//!
//! ```
//! use goap_planner::{AgentState, Condition, Location, Planner, PriceList, StaticWorld};
//!
//! let market = Location::new(4, 4);
//! let world = StaticWorld::new().with_market("cheese", market);
//! let prices = PriceList::new(5).with_price("cheese", 8);
//! let planner = Planner::new(world, prices);
//!
//! let agent = AgentState::new(Location::new(0, 0)).with_currency(10);
//! let plans = planner.plan(&Condition::have_item("cheese"), &agent).unwrap();
//!
//! // Walk to the market, then buy
//! let first = &plans.plans()[0];
//! assert_eq!(first.action_names(), ["move", "buy_item"]);
//! assert!(first.is_spatially_consistent(agent.position));
//! ```

use std::slice;
use std::vec;

use crate::action::Action;
use crate::agent::AgentState;
use crate::condition::Condition;
use crate::config::PlannerConfig;
use crate::movement::Chain;
use crate::plan::Plan;
use crate::search::{BackwardSearch, DefaultRepertoire, Repertoire};
use crate::world::{Economy, WorldView};
use crate::Result;

/// Every plan found for one goal, plus how often the depth bounds cut the
/// search short.
///
/// An empty set is a normal answer: the goal cannot currently be achieved.
/// [`depth_limit_hits`](Self::depth_limit_hits) tells whether that answer may
/// be incomplete because a bound was reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanSet {
    plans: Vec<Plan>,
    depth_limit_hits: usize,
}

impl PlanSet {
    /// Plans in discovery order.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn into_plans(self) -> Vec<Plan> {
        self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Plan> {
        self.plans.iter()
    }

    /// Number of branches dropped because a depth bound was reached.
    pub fn depth_limit_hits(&self) -> usize {
        self.depth_limit_hits
    }

    pub fn hit_depth_limit(&self) -> bool {
        self.depth_limit_hits > 0
    }

    /// Plans whose every location could be reached.
    pub fn reachable(&self) -> impl Iterator<Item = &Plan> {
        self.plans.iter().filter(|plan| plan.is_reachable())
    }

    /// Plans ordered by [`Plan::total_repeats`], ties kept in discovery order.
    pub fn ranked(&self) -> Vec<&Plan> {
        let mut ranked: Vec<&Plan> = self.plans.iter().collect();
        ranked.sort_by_key(|plan| plan.total_repeats());
        ranked
    }
}

impl IntoIterator for PlanSet {
    type Item = Plan;
    type IntoIter = vec::IntoIter<Plan>;

    fn into_iter(self) -> Self::IntoIter {
        self.plans.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSet {
    type Item = &'a Plan;
    type IntoIter = slice::Iter<'a, Plan>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The backward-chaining GOAP planner.
///
/// A `Planner` owns its collaborators: the [`WorldView`] that places actions
/// on the map, the [`Economy`] that prices goods and labour, and the
/// [`Repertoire`] of actions agents know about. The agent itself is passed to
/// every call.
///
/// # Examples
///
/// ```
/// use goap_planner::{
///     AgentState, Condition, Location, Planner, PlannerConfig, PriceList, StaticWorld,
/// };
///
/// let planner = Planner::new(StaticWorld::new(), PriceList::new(5))
///     .with_config(PlannerConfig::default().with_max_search_depth(6))
///     .unwrap();
///
/// let agent = AgentState::new(Location::new(0, 0));
/// let plans = planner.plan(&Condition::HaveJob, &agent).unwrap();
///
/// assert_eq!(plans.len(), 1);
/// assert_eq!(plans.plans()[0].action_names(), ["get_job"]);
/// ```
pub struct Planner {
    world: Box<dyn WorldView + Send + Sync>,
    economy: Box<dyn Economy + Send + Sync>,
    repertoire: Box<dyn Repertoire + Send + Sync>,
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner with the default repertoire and depth bounds.
    pub fn new(
        world: impl WorldView + Send + Sync + 'static,
        economy: impl Economy + Send + Sync + 'static,
    ) -> Self {
        Self {
            world: Box::new(world),
            economy: Box::new(economy),
            repertoire: Box::new(DefaultRepertoire),
            config: PlannerConfig::default(),
        }
    }

    /// Replaces the depth bounds.
    ///
    /// # Errors
    ///
    /// Returns [`GoapError::InvalidConfig`](crate::GoapError::InvalidConfig)
    /// if either bound is zero.
    pub fn with_config(mut self, config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Replaces the action repertoire.
    pub fn with_repertoire(mut self, repertoire: Box<dyn Repertoire + Send + Sync>) -> Self {
        self.repertoire = repertoire;
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    fn backward_search(&self) -> BackwardSearch<'_> {
        BackwardSearch::new(
            self.repertoire.as_ref(),
            self.world.as_ref(),
            self.economy.as_ref(),
            self.config,
        )
    }

    /// Finds every plan that achieves `goal` for `agent`.
    ///
    /// If the goal already holds the result is a single empty plan and no
    /// candidate action is looked at.
    ///
    /// # Errors
    ///
    /// Fails only on contract violations, for example a catalog returning a
    /// negative price. Failing to find any plan is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use goap_planner::{AgentState, Condition, Location, Planner, PriceList, StaticWorld};
    ///
    /// let planner = Planner::new(StaticWorld::new(), PriceList::new(5));
    /// let agent = AgentState::new(Location::new(5, 5));
    ///
    /// let goal = Condition::at_location(Location::new(0, 0), Location::new(5, 5));
    /// let plans = planner.plan(&goal, &agent).unwrap();
    ///
    /// assert_eq!(plans.len(), 1);
    /// assert!(plans.plans()[0].is_empty());
    /// ```
    pub fn plan(&self, goal: &Condition, agent: &AgentState) -> Result<PlanSet> {
        let mut search = self.backward_search();
        let plans = search.search(goal, agent, 0)?;

        log::info!(
            "Found {} plan(s) for '{}' ({} depth limit hit(s))",
            plans.len(),
            goal,
            search.depth_limit_hits
        );

        Ok(PlanSet {
            plans,
            depth_limit_hits: search.depth_limit_hits,
        })
    }

    /// Raw action chains for `goal`, before any travel is spliced in.
    pub fn find_actions_leading_to_goal(
        &self,
        goal: &Condition,
        agent: &AgentState,
    ) -> Result<Vec<Vec<Action>>> {
        self.backward_search()
            .find_actions_leading_to_goal(goal, agent, 0)
    }

    /// Splices travel into a caller-supplied chain.
    pub fn adjust_for_movement(&self, agent: &AgentState, chain: Vec<Action>) -> Result<PlanSet> {
        let mut search = self.backward_search();
        let mut plans = Vec::new();
        search.adjust_for_movement(agent, Chain::new(chain), 0, &mut plans)?;

        Ok(PlanSet {
            plans,
            depth_limit_hits: search.depth_limit_hits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{Location, Profession};
    use crate::world::{PlanningContext, PriceList, StaticWorld};
    use crate::GoapError;

    fn bare_planner() -> Planner {
        Planner::new(StaticWorld::new(), PriceList::new(5).with_price("cheese", 4))
    }

    #[test]
    fn test_satisfied_goal_yields_empty_plan() {
        struct Panicking;

        impl Repertoire for Panicking {
            fn candidate_actions(
                &self,
                condition: &Condition,
                _ctx: &PlanningContext<'_>,
            ) -> Result<Vec<Action>> {
                panic!("expanded '{}' although it already holds", condition)
            }
        }

        let planner = bare_planner().with_repertoire(Box::new(Panicking));
        let agent = AgentState::new(Location::new(0, 0)).with_possession("cheese");

        let plans = planner.plan(&Condition::have_item("cheese"), &agent).unwrap();
        assert_eq!(plans.plans(), &[Plan::empty()]);
        assert!(!plans.hit_depth_limit());
    }

    #[test]
    fn test_plans_in_discovery_order() {
        let planner = bare_planner();
        let agent = AgentState::new(Location::new(0, 0));

        let plans = planner.plan(&Condition::have_item("cheese"), &agent).unwrap();
        let names: Vec<_> = plans.iter().map(|p| p.action_names()).collect();
        assert_eq!(
            names,
            vec![
                vec!["get_job", "earn_money_by_working", "buy_item"],
                vec!["steal_money", "buy_item"],
                vec!["find_item_location", "steal_item"],
            ]
        );
    }

    #[test]
    fn test_every_plan_replays_cleanly() {
        let planner = Planner::new(
            StaticWorld::new()
                .with_market("cheese", Location::new(2, 2))
                .with_stash("cheese", Location::new(8, 1))
                .with_hiring_site(Location::new(5, 5)),
            PriceList::new(3).with_price("cheese", 9),
        );
        let agent = AgentState::new(Location::new(0, 0))
            .with_currency(1)
            .with_knowledge("cheese", "location", 2);

        let plans = planner.plan(&Condition::have_item("cheese"), &agent).unwrap();
        assert!(!plans.is_empty());
        for plan in &plans {
            let after = plan.simulate(&agent).unwrap();
            assert!(after.has_item("cheese"), "{} does not end with cheese", plan);
            assert!(plan.is_spatially_consistent(agent.position), "{}", plan);
        }
    }

    #[test]
    fn test_ranked_prefers_fewer_repeats() {
        let planner = bare_planner();
        let agent = AgentState::new(Location::new(0, 0)).with_profession(Profession::new(1));

        let plans = planner.plan(&Condition::have_money(3), &agent).unwrap();
        let ranked: Vec<_> = plans.ranked().iter().map(|p| p.action_names()).collect();
        assert_eq!(
            ranked,
            vec![vec!["steal_money"], vec!["earn_money_by_working"]]
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = bare_planner().with_config(PlannerConfig::default().with_max_search_depth(0));
        assert!(matches!(result, Err(GoapError::InvalidConfig(_))));
    }

    #[test]
    fn test_contract_violation_fails_fast() {
        let planner = Planner::new(StaticWorld::new(), PriceList::new(0));
        let agent = AgentState::new(Location::new(0, 0));

        let result = planner.plan(&Condition::HaveJob, &agent);
        assert!(matches!(result, Err(GoapError::InvalidIncome(0))));
    }

    #[test]
    fn test_adjust_caller_chain() {
        let planner = bare_planner();
        let agent = AgentState::new(Location::new(0, 0));
        let chain = vec![Action::steal_item("cheese", Some(Location::new(1, 2)))];

        let plans = planner.adjust_for_movement(&agent, chain).unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans.plans()[0].action_names(), ["move", "steal_item"]);
    }
}

use goap_planner::{
    Action, AgentState, Condition, GoapError, Location, PlanSet, Planner, PlannerConfig,
    PlanningContext, PriceList, Profession, Repertoire, Result, StaticWorld,
};

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: Location = Location::new(10, 10);
    const STASH: Location = Location::new(3, 4);
    const HIRING_HALL: Location = Location::new(0, 7);

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn cheese_world() -> StaticWorld {
        StaticWorld::new()
            .with_market("cheese", HOME)
            .with_stash("cheese", STASH)
            .with_hiring_site(HIRING_HALL)
    }

    fn cheese_planner() -> Planner {
        Planner::new(cheese_world(), PriceList::new(4).with_price("cheese", 5))
    }

    fn cheese_agent() -> AgentState {
        AgentState::new(HOME)
            .with_currency(10)
            .with_knowledge("cheese", "location", 2)
    }

    fn assert_plans_are_sound(plans: &PlanSet, agent: &AgentState) {
        for plan in plans {
            if let Err(e) = plan.simulate(agent) {
                panic!("plan '{}' does not replay: {}", plan, e);
            }
            if plan.is_reachable() {
                assert!(
                    plan.is_spatially_consistent(agent.position),
                    "plan '{}' skips travel",
                    plan
                );
            }
        }
    }

    #[test]
    fn test_buy_or_steal_cheese() {
        init_logging();
        let planner = cheese_planner();
        let agent = cheese_agent();

        let plans = planner.plan(&Condition::have_item("cheese"), &agent).unwrap();
        let names: Vec<_> = plans.iter().map(|p| p.action_names()).collect();
        assert_eq!(
            names,
            vec![
                vec!["buy_item"],
                vec!["find_item_location", "move", "steal_item"],
                vec!["move", "search_for_item", "steal_item"],
            ]
        );

        // already standing at the market with enough money
        assert_eq!(plans.plans()[0].move_count(), 0);

        // stealing always comes after learning exactly where the cheese is
        for plan in plans.iter().filter(|p| p.action_names().contains(&"steal_item")) {
            let names = plan.action_names();
            let steal = names.iter().position(|n| *n == "steal_item").unwrap();
            assert!(names[..steal]
                .iter()
                .any(|n| *n == "find_item_location" || *n == "search_for_item"));
        }

        assert_plans_are_sound(&plans, &agent);
        assert!(!plans.hit_depth_limit());
    }

    #[test]
    fn test_poor_agent_works_or_steals_for_money() {
        init_logging();
        let planner = cheese_planner();
        let agent = AgentState::new(HOME).with_currency(1);

        let plans = planner.plan(&Condition::have_item("cheese"), &agent).unwrap();
        let names: Vec<_> = plans.iter().map(|p| p.action_names()).collect();
        assert_eq!(
            names,
            vec![
                vec!["move", "get_job", "earn_money_by_working", "move", "buy_item"],
                vec!["steal_money", "buy_item"],
                vec!["find_item_location", "move", "steal_item"],
            ]
        );

        let work = &plans.plans()[0].actions()[2];
        // 4 short at 4 per month
        assert_eq!(work.repeat_count(), 1);
        assert_eq!(
            plans.plans()[0].actions()[3],
            Action::move_to(HIRING_HALL, HOME)
        );

        assert_plans_are_sound(&plans, &agent);
    }

    #[test]
    fn test_get_job_when_unemployed() {
        let planner = Planner::new(StaticWorld::new(), PriceList::new(4));
        let agent = AgentState::new(HOME);

        let plans = planner.plan(&Condition::HaveJob, &agent).unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans.plans()[0].action_names(), ["get_job"]);
    }

    #[test]
    fn test_already_at_location() {
        let planner = cheese_planner();
        let agent = AgentState::new(Location::new(5, 5));

        let goal = Condition::at_location(Location::new(0, 0), Location::new(5, 5));
        let plans = planner.plan(&goal, &agent).unwrap();
        assert_eq!(plans.len(), 1);
        assert!(plans.plans()[0].is_empty());
    }

    #[test]
    fn test_travel_goal() {
        let planner = cheese_planner();
        let agent = AgentState::new(Location::new(0, 0));

        let goal = Condition::at_location(Location::new(0, 0), Location::new(5, 5));
        let plans = planner.plan(&goal, &agent).unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(
            plans.plans()[0].actions(),
            &[Action::move_to(Location::new(0, 0), Location::new(5, 5))]
        );
    }

    #[test]
    fn test_cyclic_repertoire_terminates() {
        /// Stealing needs the location, and the only way to learn the
        /// location is to steal.
        struct Cyclic;

        impl Repertoire for Cyclic {
            fn candidate_actions(
                &self,
                condition: &Condition,
                _ctx: &PlanningContext<'_>,
            ) -> Result<Vec<Action>> {
                Ok(match condition {
                    Condition::HaveItem { item } | Condition::KnowLocation { item } => {
                        vec![Action::steal_item(item.clone(), None)]
                    }
                    _ => Vec::new(),
                })
            }
        }

        init_logging();
        let planner = cheese_planner()
            .with_repertoire(Box::new(Cyclic))
            .with_config(PlannerConfig::default().with_max_search_depth(8))
            .unwrap();
        let agent = AgentState::new(HOME);

        let plans = planner.plan(&Condition::have_item("cheese"), &agent).unwrap();
        assert!(plans.is_empty());
        assert!(plans.hit_depth_limit());
    }

    #[test]
    fn test_depth_bound_drops_deep_solutions() {
        let planner = cheese_planner()
            .with_config(PlannerConfig::default().with_max_search_depth(2))
            .unwrap();
        let agent = AgentState::new(HOME).with_currency(1);

        // working needs three levels: buy <- earn <- get_job
        let plans = planner.plan(&Condition::have_item("cheese"), &agent).unwrap();
        let names: Vec<_> = plans.iter().map(|p| p.action_names()).collect();
        assert!(!names.iter().any(|n| n.contains(&"get_job")));
        assert!(names.contains(&vec!["steal_money", "buy_item"]));
        assert!(plans.hit_depth_limit());
    }

    #[test]
    fn test_planning_is_repeatable() {
        let planner = cheese_planner();
        let agent = AgentState::new(Location::new(1, 1)).with_currency(2);
        let before = agent.clone();

        let first = planner.plan(&Condition::have_item("cheese"), &agent).unwrap();
        let second = planner.plan(&Condition::have_item("cheese"), &agent).unwrap();

        assert_eq!(first, second);
        assert_eq!(agent, before);
    }

    #[test]
    fn test_plans_are_sound_across_agents() {
        let planner = cheese_planner();
        let agents = vec![
            AgentState::new(Location::new(0, 0)),
            AgentState::new(STASH).with_currency(3),
            AgentState::new(HIRING_HALL).with_knowledge("cheese", "location", 1),
            cheese_agent(),
        ];
        let goals = vec![
            Condition::have_item("cheese"),
            Condition::have_money(12),
            Condition::know_location("cheese"),
            Condition::HaveJob,
        ];

        for agent in &agents {
            for goal in &goals {
                let plans = planner.plan(goal, agent).unwrap();
                assert_plans_are_sound(&plans, agent);
                for plan in &plans {
                    let after = plan.simulate(agent).unwrap();
                    assert!(goal.is_satisfied(&after), "'{}' misses '{}'", plan, goal);
                }
            }
        }
    }

    #[test]
    fn test_unavailable_agent_gets_flagged_plan() {
        let planner = cheese_planner();
        let agent = AgentState::new(Location::new(0, 0))
            .with_currency(10)
            .with_availability(false);

        let plans = planner.plan(&Condition::have_item("cheese"), &agent).unwrap();
        assert_eq!(plans.len(), 1);
        let plan = &plans.plans()[0];
        assert_eq!(plan.action_names(), ["buy_item"]);
        assert!(!plan.is_reachable());
        assert_eq!(plan.unreachable()[0].to, HOME);
        assert_eq!(plans.reachable().count(), 0);
    }

    #[test]
    fn test_large_shortfall_is_fully_earned() {
        let planner = Planner::new(
            StaticWorld::new(),
            PriceList::new(1).with_price("gem", 5_000_000_000),
        );
        let agent = AgentState::new(HOME).with_profession(Profession::new(1));

        let plans = planner.plan(&Condition::have_item("gem"), &agent).unwrap();
        let work = &plans.plans()[0];
        assert_eq!(work.action_names(), ["earn_money_by_working", "buy_item"]);
        assert_eq!(work.actions()[0].repeat_count(), 5_000_000_000);
        assert_plans_are_sound(&plans, &agent);
    }

    #[test]
    fn test_unavailable_agent_search_is_complete() {
        let planner = cheese_planner()
            .with_config(PlannerConfig::default().with_max_search_depth(1))
            .unwrap();
        let agent = AgentState::new(HOME).with_availability(false);

        let plans = planner.plan(&Condition::HaveJob, &agent).unwrap();
        assert!(plans.is_empty());
        assert!(!plans.hit_depth_limit());
    }

    #[test]
    fn test_bad_catalog_is_an_error_not_an_empty_result() {
        let planner = Planner::new(cheese_world(), PriceList::new(4).with_price("cheese", -5));
        let agent = cheese_agent();

        let result = planner.plan(&Condition::have_item("cheese"), &agent);
        assert!(matches!(result, Err(GoapError::InvalidPrice { .. })));
    }
}

use goap_planner::{
    AgentState, Condition, Location, PlanVisualizer, Planner, PriceList, Result, StaticWorld,
};

fn main() -> Result<()> {
    env_logger::init();

    // A small town: cheese sells at the market, a wheel is kept in the cellar
    let market = Location::new(10, 10);
    let cellar = Location::new(3, 4);
    let world = StaticWorld::new()
        .with_market("cheese", market)
        .with_stash("cheese", cellar)
        .with_hiring_site(Location::new(0, 7));
    let prices = PriceList::new(4).with_price("cheese", 5);
    let planner = Planner::new(world, prices);

    // Standing in the market with 10 gold and a rough idea where the cellar is
    let agent = AgentState::new(market)
        .with_currency(10)
        .with_knowledge("cheese", "location", 2);
    let goal = Condition::have_item("cheese");

    let plans = planner.plan(&goal, &agent)?;
    println!("Found {} plan(s) to {}:", plans.len(), goal);
    for (i, plan) in plans.ranked().into_iter().enumerate() {
        println!("  {}. {} (cost {})", i + 1, plan, plan.total_repeats());
    }

    // A poorer agent elsewhere has to earn or steal the money first
    let pauper = AgentState::new(Location::new(1, 1)).with_currency(1);
    let plans = planner.plan(&goal, &pauper)?;
    println!("\nFound {} plan(s) for the pauper:", plans.len());
    for plan in &plans {
        println!("  {}", plan);
    }

    let visualizer = PlanVisualizer::new();
    visualizer.visualize_plans(&goal, plans.plans(), "cheese_plans.dot")?;
    println!("\nWrote cheese_plans.dot (render with `dot -Tpng cheese_plans.dot -o plans.png`)");

    Ok(())
}

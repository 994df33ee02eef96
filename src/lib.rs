mod action;
mod agent;
mod condition;
mod config;
mod error;
mod movement;
mod plan;
mod planner;
mod search;
mod visualizer;
mod world;

pub use action::{Action, ActionKind, LocationRequirement};
pub use agent::{
    AgentState, Knowledge, Location, Profession, EXACT_ACCURACY, LOCATION_ATTRIBUTE,
    ROUGH_ACCURACY,
};
pub use condition::Condition;
pub use config::PlannerConfig;
pub use error::{GoapError, Result};
pub use plan::{Plan, UnreachableLocation};
pub use planner::{PlanSet, Planner};
pub use search::{DefaultRepertoire, Repertoire};
pub use visualizer::PlanVisualizer;
pub use world::{Economy, PlanningContext, PriceList, StaticWorld, WorldView};

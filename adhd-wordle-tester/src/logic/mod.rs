pub mod invariants;
pub mod network;
pub mod player;
pub mod reports;
pub mod scenarios;
pub mod seeds;
pub mod tester;

pub use scenarios::{get_scenario, list_scenarios};
pub use seeds::resolve_seed_inputs;
pub use tester::*;

mod runner;
mod world;

pub use runner::{RunError, RunOptions, run_with_options};
pub use world::SimulationWorld;

pub mod config;
pub mod ecs;
pub mod error;
pub mod flush;
pub mod id;
pub mod sim;
pub mod testutil;

pub use config::WolfSheepConfig;
pub use ecs::{AgentView, Breed, Position, TickRecord};
pub use error::SimError;
pub use id::{AgentId, IdGenerator};
pub use sim::{RunError, RunOptions, SimulationWorld, run_with_options};

pub mod entity_map;
pub mod population_log;
pub mod sim_resources;

pub use entity_map::AgentIndex;
pub use population_log::{PopulationLog, TickRecord};
pub use sim_resources::{EcsIdGenerator, SimFault, SimRng};

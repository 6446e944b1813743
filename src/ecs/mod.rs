pub mod app;
pub mod clock;
pub mod components;
pub mod conditions;
pub mod grid;
pub mod resources;
pub mod schedule;
pub mod scheduler;
pub mod snapshot;
pub mod spawn;
pub mod systems;

pub use app::build_sim_app;
pub use clock::SimClock;
pub use components::{Breed, Energy, GrassState, Position, SimAgent, Walker};
pub use grid::SpatialGrid;
pub use resources::{
    AgentIndex, EcsIdGenerator, PopulationLog, SimFault, SimRng, TickRecord,
};
pub use schedule::{SimPhase, SimTick, configure_sim_schedule};
pub use scheduler::{BreedScheduler, total_energy_of};
pub use snapshot::{AgentView, agent_view, agents_at, snapshot};
pub use systems::activate_breed;

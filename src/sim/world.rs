use bevy_app::App;

use crate::config::WolfSheepConfig;
use crate::ecs::clock::SimClock;
use crate::ecs::components::{Breed, Position};
use crate::ecs::grid::SpatialGrid;
use crate::ecs::resources::{PopulationLog, SimFault};
use crate::ecs::schedule::SimTick;
use crate::ecs::scheduler::{self, BreedScheduler};
use crate::ecs::snapshot::{self, AgentView};
use crate::ecs::{activate_breed, build_sim_app, spawn};
use crate::error::SimError;
use crate::id::AgentId;

/// A wolf–sheep world: grid, breed scheduler, parameters and RNG, driven one
/// tick at a time.
///
/// ```no_run
/// # use wolf_sheep::{Breed, SimulationWorld, WolfSheepConfig};
/// let mut world = SimulationWorld::new(WolfSheepConfig::default()).unwrap();
/// world.run(100).unwrap();
/// println!("{} wolves left", world.count_of(Breed::Wolf));
/// ```
pub struct SimulationWorld {
    app: App,
}

impl SimulationWorld {
    /// Validate `config`, then seed the initial sheep, wolves and one fully
    /// grown patch per cell.
    pub fn new(config: WolfSheepConfig) -> Result<Self, SimError> {
        let mut app = build_sim_app(&config)?;
        spawn::seed_population(app.world_mut())?;
        Ok(Self { app })
    }

    pub fn config(&self) -> &WolfSheepConfig {
        self.app.world().resource::<WolfSheepConfig>()
    }

    /// Ticks completed so far.
    pub fn tick(&self) -> u64 {
        self.app.world().resource::<SimClock>().tick_count
    }

    pub fn create_sheep(&mut self, pos: Position) -> Result<AgentId, SimError> {
        spawn::spawn_sheep(self.app.world_mut(), pos)
    }

    pub fn create_wolf(&mut self, pos: Position) -> Result<AgentId, SimError> {
        spawn::spawn_wolf(self.app.world_mut(), pos)
    }

    pub fn create_grass_patch(&mut self, pos: Position) -> Result<AgentId, SimError> {
        spawn::spawn_grass_patch(self.app.world_mut(), pos)
    }

    /// Remove a live agent from the grid and the scheduler.
    pub fn remove_agent(&mut self, id: AgentId) -> Result<Breed, SimError> {
        spawn::despawn_agent(self.app.world_mut(), id)
    }

    /// Run one tick: every breed pass, then statistics, then the clock.
    ///
    /// An internal-consistency error stops the remaining breed passes of the
    /// tick and is returned here. A faulted tick is not logged and does not
    /// advance the clock.
    pub fn step(&mut self) -> Result<(), SimError> {
        self.app.world_mut().run_schedule(SimTick);
        match self.app.world_mut().resource_mut::<SimFault>().0.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Run a single breed pass outside the tick schedule. Statistics are not
    /// collected and the clock does not move. Returns how many agents acted.
    pub fn step_breed(&mut self, breed: Breed) -> Result<usize, SimError> {
        activate_breed(self.app.world_mut(), breed)
    }

    /// Run `ticks` ticks, stopping at the first error.
    pub fn run(&mut self, ticks: u64) -> Result<(), SimError> {
        for _ in 0..ticks {
            self.step()?;
        }
        tracing::info!(
            tick = self.tick(),
            sheep = self.count_of(Breed::Sheep),
            wolves = self.count_of(Breed::Wolf),
            "run complete"
        );
        Ok(())
    }

    pub fn count_of(&self, breed: Breed) -> usize {
        self.scheduler().count_of(breed)
    }

    /// Summed energy of a breed; 0 for grass.
    pub fn total_energy_of(&self, breed: Breed) -> i64 {
        scheduler::total_energy_of(self.app.world(), breed)
    }

    pub fn agent(&self, id: AgentId) -> Option<AgentView> {
        snapshot::agent_view(self.app.world(), id)
    }

    pub fn agents_at(&self, pos: Position) -> Result<Vec<AgentView>, SimError> {
        snapshot::agents_at(self.app.world(), pos)
    }

    /// The grass patch in a cell, if one was created there.
    pub fn grass_at(&self, pos: Position) -> Result<Option<AgentView>, SimError> {
        Ok(self
            .agents_at(pos)?
            .into_iter()
            .find(|view| view.breed == Breed::GrassPatch))
    }

    /// Every live agent, ordered by ID.
    pub fn snapshot(&self) -> Vec<AgentView> {
        snapshot::snapshot(self.app.world())
    }

    pub fn population_log(&self) -> &PopulationLog {
        self.app.world().resource::<PopulationLog>()
    }

    pub fn grid(&self) -> &SpatialGrid {
        self.app.world().resource::<SpatialGrid>()
    }

    pub fn scheduler(&self) -> &BreedScheduler {
        self.app.world().resource::<BreedScheduler>()
    }

    /// The underlying Bevy app, for callers adding their own systems.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

//! Per-tick data collection.

use bevy_app::App;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::world::World;

use crate::ecs::clock::SimClock;
use crate::ecs::components::{Breed, GrassState};
use crate::ecs::conditions::tick_healthy;
use crate::ecs::resources::{AgentIndex, PopulationLog, TickRecord};
use crate::ecs::schedule::{SimPhase, SimTick};
use crate::ecs::scheduler::{BreedScheduler, total_energy_of};

pub fn add_stats_systems(app: &mut App) {
    app.add_systems(
        SimTick,
        collect_population
            .run_if(tick_healthy)
            .in_set(SimPhase::PostUpdate),
    );
}

/// Append this tick's counts and energy totals to the `PopulationLog`.
pub fn collect_population(world: &mut World) {
    let record = population_record(world);
    tracing::trace!(?record, "collected");
    world.resource_mut::<PopulationLog>().records.push(record);
}

/// Aggregates of the live population as of the running tick.
fn population_record(world: &World) -> TickRecord {
    let scheduler = world.resource::<BreedScheduler>();
    let index = world.resource::<AgentIndex>();
    let wolves = scheduler.count_of(Breed::Wolf);
    let wolf_energy = total_energy_of(world, Breed::Wolf);
    let grown_grass = scheduler
        .ids_of(Breed::GrassPatch)
        .iter()
        .filter_map(|id| index.get(*id))
        .filter_map(|entity| world.get::<GrassState>(entity))
        .filter(|patch| patch.fully_grown)
        .count();

    TickRecord {
        tick: world.resource::<SimClock>().current_tick(),
        sheep: scheduler.count_of(Breed::Sheep),
        wolves,
        grown_grass,
        sheep_energy: total_energy_of(world, Breed::Sheep),
        wolf_energy,
        energy_per_wolf: wolf_energy as f64 / (wolves + 1) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WolfSheepConfig;
    use crate::ecs::app::build_sim_app;
    use crate::ecs::components::Position;
    use crate::ecs::resources::SimFault;
    use crate::ecs::spawn::{spawn_grass_patch, spawn_sheep, spawn_wolf};
    use crate::error::SimError;
    use crate::id::AgentId;

    fn app() -> bevy_app::App {
        build_sim_app(&WolfSheepConfig {
            width: 3,
            height: 3,
            initial_sheep: 0,
            initial_wolves: 0,
            ..WolfSheepConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn record_sums_live_agents() {
        let mut app = app();
        let world = app.world_mut();
        spawn_sheep(world, Position::new(0, 0)).unwrap();
        spawn_sheep(world, Position::new(1, 0)).unwrap();
        spawn_wolf(world, Position::new(2, 2)).unwrap();
        spawn_grass_patch(world, Position::new(1, 1)).unwrap();

        let record = population_record(world);
        assert_eq!(record.tick, 1);
        assert_eq!((record.sheep, record.wolves), (2, 1));
        assert_eq!(record.grown_grass, 1);
        assert_eq!(record.sheep_energy, 8);
        assert_eq!(record.wolf_energy, 10);
        assert_eq!(record.energy_per_wolf, 5.0);
    }

    #[test]
    fn faulted_tick_is_not_recorded() {
        let mut app = app();
        let world = app.world_mut();
        world.resource_mut::<SimFault>().0 = Some(SimError::AgentNotFound(AgentId(1)));
        world.run_schedule(SimTick);

        assert!(world.resource::<PopulationLog>().records.is_empty());
        assert_eq!(world.resource::<SimClock>().tick_count, 0);
    }
}

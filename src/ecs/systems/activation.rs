//! Random activation by breed.
//!
//! Three chained exclusive systems fill the three activation slots. Each slot
//! reads its breed from `BreedScheduler::order`, so any fixed breed order can
//! be configured without rebuilding the schedule.

use bevy_app::App;
use bevy_ecs::change_detection::Mut;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::world::World;

use super::{grass, sheep, wolf};
use crate::ecs::clock::SimClock;
use crate::ecs::components::Breed;
use crate::ecs::resources::{SimFault, SimRng};
use crate::ecs::schedule::{SimPhase, SimTick};
use crate::ecs::scheduler::BreedScheduler;
use crate::error::SimError;

pub fn add_activation_systems(app: &mut App) {
    app.add_systems(
        SimTick,
        (activation_slot::<0>, activation_slot::<1>, activation_slot::<2>)
            .chain()
            .in_set(SimPhase::Update),
    );
}

fn activation_slot<const SLOT: usize>(world: &mut World) {
    if world.resource::<SimFault>().is_set() {
        return;
    }
    let breed = world.resource::<BreedScheduler>().order()[SLOT];
    if let Err(err) = activate_breed(world, breed) {
        let tick = world.resource::<SimClock>().current_tick();
        tracing::error!(tick, ?breed, %err, "breed pass aborted");
        world.resource_mut::<SimFault>().0 = Some(err);
    }
}

/// Run one breed pass: shuffle a snapshot of the breed's live agents and step
/// each one still alive when its turn comes. Returns how many agents acted.
pub fn activate_breed(world: &mut World, breed: Breed) -> Result<usize, SimError> {
    let snapshot = world.resource_scope(|world, mut sim_rng: Mut<SimRng>| {
        world
            .resource::<BreedScheduler>()
            .shuffled_snapshot(breed, &mut sim_rng.rng)
    });

    let mut activated = 0;
    for id in snapshot {
        // Eaten earlier in this pass (or a previous one this tick).
        if !world.resource::<BreedScheduler>().contains(breed, id) {
            continue;
        }
        match breed {
            Breed::Sheep => sheep::step_sheep(world, id)?,
            Breed::Wolf => wolf::step_wolf(world, id)?,
            Breed::GrassPatch => grass::step_grass(world, id)?,
        }
        activated += 1;
    }

    tracing::trace!(?breed, activated, "breed pass complete");
    Ok(activated)
}

use bevy_ecs::resource::Resource;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::IdGenerator;
use crate::error::SimError;

/// The single deterministic RNG of a world.
///
/// Seeding, movement, reproduction draws and activation shuffles all pull
/// from this one stream, in a fixed order.
#[derive(Resource)]
pub struct SimRng {
    pub rng: SmallRng,
    pub seed: u64,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Global ID generator for agents.
#[derive(Resource, Default)]
pub struct EcsIdGenerator(pub IdGenerator);

/// First internal-consistency error raised during the current tick.
///
/// Breed passes stop once this is set; `SimulationWorld::step` takes it and
/// returns it to the caller.
#[derive(Resource, Debug, Default)]
pub struct SimFault(pub Option<SimError>);

impl SimFault {
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

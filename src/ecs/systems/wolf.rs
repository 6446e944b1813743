//! Wolves: pay, walk, hunt, breed.

use bevy_ecs::world::World;

use super::helpers::{gain_energy, maybe_reproduce, occupants, pay_step_cost};
use super::movement::random_move;
use crate::config::WolfSheepConfig;
use crate::ecs::components::{Breed, Position};
use crate::ecs::spawn::despawn_agent;
use crate::error::SimError;
use crate::id::AgentId;

/// One wolf turn.
///
/// 1. Spend one energy; a wolf left with none is removed and does nothing else.
/// 2. Walk to a random neighbouring cell.
/// 3. Eat the first sheep in the cell, if any (one kill per turn).
/// 4. Roll for an offspring.
pub(crate) fn step_wolf(world: &mut World, id: AgentId) -> Result<(), SimError> {
    let Some(entity) = pay_step_cost(world, id)? else {
        return Ok(());
    };
    let pos = random_move(world, id)?;

    if let Some(prey) = hunt(world, pos)? {
        despawn_agent(world, prey)?;
        let gain = world.resource::<WolfSheepConfig>().wolf_gain_from_food;
        gain_energy(world, id, entity, gain)?;
        tracing::debug!(wolf = %id, sheep = %prey, %pos, "predation");
    }

    maybe_reproduce(world, Breed::Wolf, id, pos)?;
    Ok(())
}

/// First sheep in `pos`, in arrival order.
fn hunt(world: &World, pos: Position) -> Result<Option<AgentId>, SimError> {
    Ok(occupants(world, pos)?
        .into_iter()
        .find(|(_, entity)| world.get::<Breed>(*entity) == Some(&Breed::Sheep))
        .map(|(id, _)| id))
}

//! Sheep: pay, walk, graze, breed.

use bevy_ecs::world::World;

use super::helpers::{gain_energy, maybe_reproduce, occupants, pay_step_cost};
use super::movement::random_move;
use crate::config::WolfSheepConfig;
use crate::ecs::components::{Breed, GrassState, Position};
use crate::error::SimError;
use crate::id::AgentId;

/// One sheep turn.
///
/// 1. Spend one energy; a sheep left with none is removed and does nothing else.
/// 2. Walk to a random neighbouring cell.
/// 3. With grass enabled, eat the cell's patch if it is fully grown.
/// 4. Roll for an offspring.
pub(crate) fn step_sheep(world: &mut World, id: AgentId) -> Result<(), SimError> {
    let Some(entity) = pay_step_cost(world, id)? else {
        return Ok(());
    };
    let pos = random_move(world, id)?;

    let config = world.resource::<WolfSheepConfig>();
    let (grass, regrowth, gain) = (
        config.grass,
        config.grass_regrowth_time,
        config.sheep_gain_from_food,
    );
    if grass && graze(world, pos, regrowth)? {
        gain_energy(world, id, entity, gain)?;
        tracing::trace!(%id, %pos, "grazed");
    }

    maybe_reproduce(world, Breed::Sheep, id, pos)?;
    Ok(())
}

/// Eat the grown patch at `pos`, if any. One patch per cell, so at most one
/// is consumed.
fn graze(world: &mut World, pos: Position, regrowth: u32) -> Result<bool, SimError> {
    for (_, entity) in occupants(world, pos)? {
        if world.get::<Breed>(entity) != Some(&Breed::GrassPatch) {
            continue;
        }
        if let Some(mut patch) = world.get_mut::<GrassState>(entity) {
            if patch.consume(regrowth) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

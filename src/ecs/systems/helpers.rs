//! Shared helpers used by the sheep and wolf step rules.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::Rng;

use crate::config::WolfSheepConfig;
use crate::ecs::components::{Breed, Energy, Position};
use crate::ecs::grid::SpatialGrid;
use crate::ecs::resources::{AgentIndex, SimRng};
use crate::ecs::spawn::{despawn_agent, spawn_agent};
use crate::error::SimError;
use crate::id::AgentId;

/// Charge the one-energy cost of a step. Starved agents are removed and
/// `None` is returned; survivors get their entity back.
pub(crate) fn pay_step_cost(world: &mut World, id: AgentId) -> Result<Option<Entity>, SimError> {
    let entity = world.resource::<AgentIndex>().entity(id)?;
    let alive = world
        .get_mut::<Energy>(entity)
        .ok_or(SimError::AgentNotFound(id))?
        .spend_step();
    if alive {
        return Ok(Some(entity));
    }
    let breed = despawn_agent(world, id)?;
    tracing::debug!(%id, ?breed, "starved");
    Ok(None)
}

pub(crate) fn gain_energy(
    world: &mut World,
    id: AgentId,
    entity: Entity,
    amount: i64,
) -> Result<(), SimError> {
    world
        .get_mut::<Energy>(entity)
        .ok_or(SimError::AgentNotFound(id))?
        .gain(amount);
    Ok(())
}

/// Agents sharing `pos`, resolved to entities, in cell order.
pub(crate) fn occupants(
    world: &World,
    pos: Position,
) -> Result<Vec<(AgentId, Entity)>, SimError> {
    let grid = world.resource::<SpatialGrid>();
    let index = world.resource::<AgentIndex>();
    grid.contents_of(pos)?
        .iter()
        .map(|id| index.entity(*id).map(|entity| (*id, entity)))
        .collect()
}

/// Draw the reproduction roll for `breed` and, on success, create an offspring
/// with full starting energy at `pos`. The roll is drawn every time.
pub(crate) fn maybe_reproduce(
    world: &mut World,
    breed: Breed,
    parent: AgentId,
    pos: Position,
) -> Result<Option<AgentId>, SimError> {
    let chance = world.resource::<WolfSheepConfig>().reproduce_probability(breed);
    let roll: f64 = world.resource_mut::<SimRng>().rng.random_range(0.0..1.0);
    if roll >= chance {
        return Ok(None);
    }
    let child = spawn_agent(world, breed, pos)?;
    tracing::debug!(%parent, %child, ?breed, %pos, "born");
    Ok(Some(child))
}

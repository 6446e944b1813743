//! Random-walk capability shared by sheep and wolves.

use bevy_ecs::world::World;
use rand::Rng;

use crate::ecs::components::{Position, Walker};
use crate::ecs::grid::SpatialGrid;
use crate::ecs::resources::{AgentIndex, SimRng};
use crate::error::SimError;
use crate::id::AgentId;

/// Move an agent to a uniformly chosen neighbouring cell and return it.
///
/// The neighbourhood (Moore or von Neumann) comes from the agent's `Walker`.
/// Grid and `Position` component change together.
pub fn random_move(world: &mut World, id: AgentId) -> Result<Position, SimError> {
    let entity = world.resource::<AgentIndex>().entity(id)?;
    let from = *world
        .get::<Position>(entity)
        .ok_or(SimError::AgentNotFound(id))?;
    let moore = world
        .get::<Walker>(entity)
        .ok_or(SimError::AgentNotFound(id))?
        .moore;

    let candidates = world
        .resource::<SpatialGrid>()
        .neighbor_positions(from, moore);
    let Some(to) = pick(world, &candidates) else {
        return Ok(from);
    };

    world
        .resource_mut::<SpatialGrid>()
        .move_agent(id, from, to)?;
    if let Some(mut pos) = world.get_mut::<Position>(entity) {
        *pos = to;
    }
    Ok(to)
}

fn pick(world: &mut World, candidates: &[Position]) -> Option<Position> {
    if candidates.is_empty() {
        return None;
    }
    let choice = world
        .resource_mut::<SimRng>()
        .rng
        .random_range(0..candidates.len());
    Some(candidates[choice])
}

use bevy_ecs::world::World;

use crate::ecs::components::GrassState;
use crate::ecs::resources::AgentIndex;
use crate::error::SimError;
use crate::id::AgentId;

/// One grass turn: regrow if eaten. Eating happens in the sheep's turn.
pub(crate) fn step_grass(world: &mut World, id: AgentId) -> Result<(), SimError> {
    let entity = world.resource::<AgentIndex>().entity(id)?;
    let mut patch = world
        .get_mut::<GrassState>(entity)
        .ok_or(SimError::AgentNotFound(id))?;
    let was_grown = patch.fully_grown;
    patch.regrow();
    if !was_grown && patch.fully_grown {
        tracing::trace!(%id, "regrown");
    }
    Ok(())
}

//! Read-only views of agents for reporting and rendering layers.

use bevy_ecs::world::World;
use serde::{Deserialize, Serialize};

use crate::ecs::components::{Breed, Energy, GrassState, Position, SimAgent};
use crate::ecs::grid::SpatialGrid;
use crate::ecs::resources::AgentIndex;
use crate::error::SimError;
use crate::id::AgentId;

/// Copy of one agent's observable state.
///
/// `energy` is set for sheep and wolves; `fully_grown` and `countdown` for
/// grass patches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentView {
    pub id: AgentId,
    pub breed: Breed,
    pub position: Position,
    /// Completed ticks when the agent was created; 0 for the seeded population.
    pub born: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub energy: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fully_grown: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub countdown: Option<u32>,
}

/// View of a live agent, or `None` if it is dead or never existed.
pub fn agent_view(world: &World, id: AgentId) -> Option<AgentView> {
    let entity = world.resource::<AgentIndex>().get(id)?;
    let agent = world.get::<SimAgent>(entity)?;
    let breed = *world.get::<Breed>(entity)?;
    let position = *world.get::<Position>(entity)?;
    let grass = world.get::<GrassState>(entity);
    Some(AgentView {
        id: agent.id,
        breed,
        position,
        born: agent.born,
        energy: world.get::<Energy>(entity).map(|energy| energy.0),
        fully_grown: grass.map(|patch| patch.fully_grown),
        countdown: grass.map(|patch| patch.countdown),
    })
}

/// Views of every agent in a cell, in arrival order.
pub fn agents_at(world: &World, pos: Position) -> Result<Vec<AgentView>, SimError> {
    world
        .resource::<SpatialGrid>()
        .contents_of(pos)?
        .iter()
        .map(|id| agent_view(world, *id).ok_or(SimError::AgentNotFound(*id)))
        .collect()
}

/// Views of every live agent, ordered by ID.
pub fn snapshot(world: &World) -> Vec<AgentView> {
    world
        .resource::<AgentIndex>()
        .ids()
        .filter_map(|id| agent_view(world, id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WolfSheepConfig;
    use crate::ecs::app::build_sim_app;
    use crate::ecs::spawn::{spawn_grass_patch, spawn_sheep, spawn_wolf};

    #[test]
    fn views_carry_breed_specific_fields() {
        let mut app = build_sim_app(&WolfSheepConfig {
            width: 2,
            height: 2,
            initial_sheep: 0,
            initial_wolves: 0,
            ..WolfSheepConfig::default()
        })
        .unwrap();
        let world = app.world_mut();
        let pos = Position::new(1, 0);
        let patch = spawn_grass_patch(world, pos).unwrap();
        let sheep = spawn_sheep(world, pos).unwrap();
        let wolf = spawn_wolf(world, Position::new(0, 1)).unwrap();

        let here = agents_at(world, pos).unwrap();
        assert_eq!(here.len(), 2);
        assert_eq!(here[0].id, patch);
        assert_eq!(here[0].fully_grown, Some(true));
        assert_eq!(here[0].countdown, Some(0));
        assert_eq!(here[0].energy, None);
        assert_eq!(here[1].id, sheep);
        assert_eq!(here[1].energy, Some(4));
        assert_eq!(here[1].fully_grown, None);

        let all = snapshot(world);
        let ids: Vec<AgentId> = all.iter().map(|view| view.id).collect();
        assert_eq!(ids, vec![patch, sheep, wolf]);
        assert_eq!(all[2].energy, Some(10));
        assert!(all.iter().all(|view| view.born == 0));
        assert!(agent_view(world, AgentId(999)).is_none());
    }

    #[test]
    fn serialized_view_omits_absent_fields() {
        let view = AgentView {
            id: AgentId(3),
            breed: Breed::Wolf,
            position: Position::new(1, 2),
            born: 4,
            energy: Some(7),
            fully_grown: None,
            countdown: None,
        };
        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"breed":"wolf","position":{"x":1,"y":2},"born":4,"energy":7}"#
        );
    }
}

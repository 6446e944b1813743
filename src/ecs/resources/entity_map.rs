use std::collections::BTreeMap;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::error::SimError;
use crate::id::AgentId;

/// Mapping from agent IDs to Bevy entities.
///
/// Only live agents are present: an entry is dropped when its agent dies.
#[derive(Resource, Debug, Clone, Default)]
pub struct AgentIndex {
    to_bevy: BTreeMap<AgentId, Entity>,
}

impl AgentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping. Panics if the agent ID is already registered.
    pub fn insert(&mut self, id: AgentId, entity: Entity) {
        let prev = self.to_bevy.insert(id, entity);
        assert!(prev.is_none(), "duplicate agent id {id} in AgentIndex");
    }

    /// Drop a mapping, returning the entity it pointed at.
    pub fn remove(&mut self, id: AgentId) -> Result<Entity, SimError> {
        self.to_bevy.remove(&id).ok_or(SimError::AgentNotFound(id))
    }

    /// Look up a Bevy entity by agent ID.
    pub fn get(&self, id: AgentId) -> Option<Entity> {
        self.to_bevy.get(&id).copied()
    }

    /// Look up a Bevy entity by agent ID, failing with `AgentNotFound`.
    pub fn entity(&self, id: AgentId) -> Result<Entity, SimError> {
        self.get(id).ok_or(SimError::AgentNotFound(id))
    }

    /// Live agent IDs in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.to_bevy.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.to_bevy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_bevy.is_empty()
    }
}

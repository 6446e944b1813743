use std::collections::HashMap;

use bevy_ecs::resource::Resource;
use bevy_ecs::world::World;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::ecs::components::{Breed, Energy};
use crate::ecs::resources::AgentIndex;
use crate::error::SimError;
use crate::id::AgentId;

/// Live agents of one breed.
///
/// Dense vector plus position index: add, remove and membership are O(1),
/// and iteration order depends only on the sequence of adds and removes.
#[derive(Debug, Clone, Default)]
struct BreedSet {
    ids: Vec<AgentId>,
    slots: HashMap<AgentId, usize>,
}

impl BreedSet {
    fn insert(&mut self, id: AgentId) {
        self.slots.insert(id, self.ids.len());
        self.ids.push(id);
    }

    fn remove(&mut self, id: AgentId) -> bool {
        let Some(slot) = self.slots.remove(&id) else {
            return false;
        };
        self.ids.swap_remove(slot);
        if let Some(moved) = self.ids.get(slot) {
            self.slots.insert(*moved, slot);
        }
        true
    }

    fn contains(&self, id: AgentId) -> bool {
        self.slots.contains_key(&id)
    }
}

/// Live agents partitioned by breed, activated breed by breed.
///
/// Each tick every breed in `order` takes a pass. A pass works on a snapshot
/// of the breed's IDs shuffled at pass start: agents born during the pass are
/// not in it, and agents killed before their turn are skipped by a liveness
/// check.
#[derive(Resource, Debug, Clone)]
pub struct BreedScheduler {
    order: [Breed; 3],
    breeds: [BreedSet; 3],
}

impl Default for BreedScheduler {
    fn default() -> Self {
        Self::new([Breed::Sheep, Breed::Wolf, Breed::GrassPatch])
    }
}

impl BreedScheduler {
    pub fn new(order: [Breed; 3]) -> Self {
        Self {
            order,
            breeds: Default::default(),
        }
    }

    /// Breeds in activation order.
    pub fn order(&self) -> [Breed; 3] {
        self.order
    }

    /// Register a live agent. Panics if the ID is already scheduled under any breed.
    pub fn add(&mut self, breed: Breed, id: AgentId) {
        assert!(
            self.breed_of(id).is_none(),
            "agent {id} is already scheduled"
        );
        self.breeds[breed.index()].insert(id);
    }

    /// Unregister an agent. A second removal reports `AgentNotFound`.
    pub fn remove(&mut self, breed: Breed, id: AgentId) -> Result<(), SimError> {
        if self.breeds[breed.index()].remove(id) {
            Ok(())
        } else {
            Err(SimError::AgentNotFound(id))
        }
    }

    pub fn contains(&self, breed: Breed, id: AgentId) -> bool {
        self.breeds[breed.index()].contains(id)
    }

    pub fn breed_of(&self, id: AgentId) -> Option<Breed> {
        Breed::ALL.into_iter().find(|b| self.contains(*b, id))
    }

    pub fn count_of(&self, breed: Breed) -> usize {
        self.breeds[breed.index()].ids.len()
    }

    /// IDs of one breed in scheduler order (not the activation order of any pass).
    pub fn ids_of(&self, breed: Breed) -> &[AgentId] {
        &self.breeds[breed.index()].ids
    }

    pub fn len(&self) -> usize {
        self.breeds.iter().map(|set| set.ids.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fix the activation order for one breed pass.
    pub fn shuffled_snapshot<R: Rng + ?Sized>(
        &self,
        breed: Breed,
        rng: &mut R,
    ) -> Vec<AgentId> {
        let mut snapshot = self.breeds[breed.index()].ids.clone();
        snapshot.shuffle(rng);
        snapshot
    }
}

/// Summed energy of a breed's live agents; 0 for breeds without energy.
pub fn total_energy_of(world: &World, breed: Breed) -> i64 {
    if !breed.has_energy() {
        return 0;
    }
    let scheduler = world.resource::<BreedScheduler>();
    let index = world.resource::<AgentIndex>();
    scheduler
        .ids_of(breed)
        .iter()
        .filter_map(|id| index.get(*id))
        .filter_map(|entity| world.get::<Energy>(entity))
        .map(|energy| energy.0)
        .sum()
}

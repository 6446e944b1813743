use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::Rng;

use crate::config::WolfSheepConfig;
use crate::ecs::clock::SimClock;
use crate::ecs::components::*;
use crate::ecs::grid::SpatialGrid;
use crate::ecs::resources::{AgentIndex, EcsIdGenerator, SimRng};
use crate::ecs::scheduler::BreedScheduler;
use crate::error::SimError;
use crate::id::AgentId;

/// Claim an ID and a grid slot, then spawn and register the entity.
///
/// Bounds are checked first so an out-of-bounds position fails before an ID
/// or entity is created.
fn register(
    world: &mut World,
    breed: Breed,
    pos: Position,
    spawn: impl FnOnce(&mut World, SimAgent) -> Entity,
) -> Result<AgentId, SimError> {
    let grid = world.resource::<SpatialGrid>();
    if !grid.contains(pos) {
        return Err(SimError::InvalidPosition {
            x: pos.x,
            y: pos.y,
            width: grid.width(),
            height: grid.height(),
        });
    }

    let id = world.resource_mut::<EcsIdGenerator>().0.next_id();
    world.resource_mut::<SpatialGrid>().place(id, pos)?;
    let born = world.resource::<SimClock>().tick_count;
    let entity = spawn(world, SimAgent { id, born });
    world.resource_mut::<AgentIndex>().insert(id, entity);
    world.resource_mut::<BreedScheduler>().add(breed, id);
    Ok(id)
}

fn spawn_animal(world: &mut World, breed: Breed, pos: Position) -> Result<AgentId, SimError> {
    let energy = world.resource::<WolfSheepConfig>().initial_energy(breed);
    register(world, breed, pos, |world, agent| {
        world
            .spawn((agent, breed, pos, Energy(energy), Walker { moore: true }))
            .id()
    })
}

pub fn spawn_sheep(world: &mut World, pos: Position) -> Result<AgentId, SimError> {
    spawn_animal(world, Breed::Sheep, pos)
}

pub fn spawn_wolf(world: &mut World, pos: Position) -> Result<AgentId, SimError> {
    spawn_animal(world, Breed::Wolf, pos)
}

/// Spawn a fully grown patch.
pub fn spawn_grass_patch(world: &mut World, pos: Position) -> Result<AgentId, SimError> {
    register(world, Breed::GrassPatch, pos, |world, agent| {
        world
            .spawn((agent, Breed::GrassPatch, pos, GrassState::grown()))
            .id()
    })
}

pub fn spawn_agent(world: &mut World, breed: Breed, pos: Position) -> Result<AgentId, SimError> {
    match breed {
        Breed::Sheep => spawn_sheep(world, pos),
        Breed::Wolf => spawn_wolf(world, pos),
        Breed::GrassPatch => spawn_grass_patch(world, pos),
    }
}

/// Remove an agent from the scheduler, the grid and the index, then despawn it.
///
/// Every store is checked before any is touched; a stale ID fails with
/// `AgentNotFound` and changes nothing.
pub fn despawn_agent(world: &mut World, id: AgentId) -> Result<Breed, SimError> {
    let entity = world.resource::<AgentIndex>().entity(id)?;
    let breed = *world
        .get::<Breed>(entity)
        .ok_or(SimError::AgentNotFound(id))?;
    let pos = *world
        .get::<Position>(entity)
        .ok_or(SimError::AgentNotFound(id))?;
    if !world.resource::<BreedScheduler>().contains(breed, id) {
        return Err(SimError::AgentNotFound(id));
    }

    world.resource_mut::<SpatialGrid>().remove(id, pos)?;
    world.resource_mut::<BreedScheduler>().remove(breed, id)?;
    world.resource_mut::<AgentIndex>().remove(id)?;
    world.despawn(entity);
    Ok(breed)
}

fn random_position(world: &mut World) -> Position {
    let (width, height) = {
        let grid = world.resource::<SpatialGrid>();
        (grid.width(), grid.height())
    };
    let mut sim_rng = world.resource_mut::<SimRng>();
    let x = sim_rng.rng.random_range(0..width);
    let y = sim_rng.rng.random_range(0..height);
    Position::new(x, y)
}

/// Seed the starting population: sheep, then wolves, each at a uniformly
/// random cell, then one fully grown patch on every cell (column by column).
pub fn seed_population(world: &mut World) -> Result<(), SimError> {
    let config = world.resource::<WolfSheepConfig>().clone();

    for _ in 0..config.initial_sheep {
        let pos = random_position(world);
        spawn_sheep(world, pos)?;
    }
    for _ in 0..config.initial_wolves {
        let pos = random_position(world);
        spawn_wolf(world, pos)?;
    }
    for x in 0..config.width {
        for y in 0..config.height {
            spawn_grass_patch(world, Position::new(x, y))?;
        }
    }

    tracing::info!(
        sheep = config.initial_sheep,
        wolves = config.initial_wolves,
        patches = config.cell_count(),
        seed = config.seed,
        "seeded population"
    );
    Ok(())
}

use crate::config::WolfSheepConfig;
use crate::ecs::components::Breed;
use crate::sim::SimulationWorld;

// ---------------------------------------------------------------------------
// Config builders
// ---------------------------------------------------------------------------

/// A config with no seeded animals and no reproduction, so scenarios control
/// the whole population. Grass patches are still seeded on every cell.
pub fn quiet_config(width: u32, height: u32) -> WolfSheepConfig {
    WolfSheepConfig {
        width,
        height,
        initial_sheep: 0,
        initial_wolves: 0,
        sheep_reproduce: 0.0,
        wolf_reproduce: 0.0,
        ..WolfSheepConfig::default()
    }
}

/// Build a world, panicking on an invalid config.
pub fn world_with(config: WolfSheepConfig) -> SimulationWorld {
    SimulationWorld::new(config).expect("test config should be valid")
}

// ---------------------------------------------------------------------------
// Invariant checks
// ---------------------------------------------------------------------------

/// Assert the structural invariants that must hold between ticks:
/// every live agent is inside the grid and listed in its cell, animals have
/// positive energy, and each cell holds at most one grass patch.
pub fn assert_world_consistent(world: &SimulationWorld) {
    let grid = world.grid();
    let snapshot = world.snapshot();
    let scheduler = world.scheduler();
    assert_eq!(snapshot.len(), scheduler.len(), "scheduler and index disagree");

    for view in &snapshot {
        assert!(
            grid.contains(view.position),
            "{} at {} is outside the grid",
            view.id,
            view.position
        );
        let cell = grid.contents_of(view.position).unwrap();
        assert!(
            cell.contains(&view.id),
            "{} missing from cell {}",
            view.id,
            view.position
        );
        assert_eq!(scheduler.breed_of(view.id), Some(view.breed));
        if view.breed.has_energy() {
            let energy = view.energy.unwrap();
            assert!(energy > 0, "{} is alive with energy {energy}", view.id);
        }
    }

    for pos in grid.positions() {
        let patches = world
            .agents_at(pos)
            .unwrap()
            .into_iter()
            .filter(|view| view.breed == Breed::GrassPatch)
            .count();
        assert!(patches <= 1, "cell {pos} holds {patches} grass patches");
    }
}

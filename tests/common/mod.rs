#![allow(dead_code)]

use wolf_sheep::{AgentId, Breed, SimulationWorld, WolfSheepConfig};

pub use wolf_sheep::testutil::{assert_world_consistent, quiet_config, world_with};

/// A 1x1 world holding one sheep and optionally one wolf, with the energies given.
pub fn single_cell_hunt(sheep_energy: i64, wolf_energy: Option<i64>) -> (SimulationWorld, AgentId) {
    let config = WolfSheepConfig {
        initial_sheep_energy: sheep_energy,
        initial_wolf_energy: wolf_energy.unwrap_or(10),
        ..quiet_config(1, 1)
    };
    let mut world = world_with(config);
    let origin = wolf_sheep::Position::new(0, 0);
    let sheep = world.create_sheep(origin).unwrap();
    if wolf_energy.is_some() {
        world.create_wolf(origin).unwrap();
    }
    (world, sheep)
}

/// Energies of every live agent of `breed`, sorted.
pub fn energies(world: &SimulationWorld, breed: Breed) -> Vec<i64> {
    let mut out: Vec<i64> = world
        .snapshot()
        .into_iter()
        .filter(|view| view.breed == breed)
        .filter_map(|view| view.energy)
        .collect();
    out.sort();
    out
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

mod common;

use wolf_sheep::{Breed, WolfSheepConfig};

use common::world_with;

fn config(seed: u64) -> WolfSheepConfig {
    WolfSheepConfig {
        grass: true,
        seed,
        ..WolfSheepConfig::default()
    }
}

#[test]
fn same_seed_same_history() {
    let mut a = world_with(config(2024));
    let mut b = world_with(config(2024));
    a.run(50).unwrap();
    b.run(50).unwrap();

    assert_eq!(a.population_log().records, b.population_log().records);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn seeding_is_reproducible() {
    let a = world_with(config(9));
    let b = world_with(config(9));
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn different_seeds_diverge() {
    let a = world_with(config(1));
    let b = world_with(config(2));
    let positions = |world: &wolf_sheep::SimulationWorld| -> Vec<_> {
        world
            .snapshot()
            .into_iter()
            .filter(|view| view.breed != Breed::GrassPatch)
            .map(|view| view.position)
            .collect()
    };
    assert_ne!(positions(&a), positions(&b));
}

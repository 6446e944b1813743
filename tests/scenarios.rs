mod common;

use wolf_sheep::{Breed, Position, SimError, SimulationWorld, WolfSheepConfig};

use common::{energies, quiet_config, single_cell_hunt, world_with};

#[test]
fn lone_sheep_starves_on_second_tick() {
    let (mut world, sheep) = single_cell_hunt(2, None);

    world.step().unwrap();
    assert_eq!(world.count_of(Breed::Sheep), 1);
    assert_eq!(world.agent(sheep).unwrap().energy, Some(1));

    world.step().unwrap();
    assert_eq!(world.count_of(Breed::Sheep), 0);
    assert!(world.agent(sheep).is_none());
    assert!(
        world
            .grid()
            .contents_of(Position::new(0, 0))
            .unwrap()
            .iter()
            .all(|id| *id != sheep)
    );
}

#[test]
fn wolf_eats_sheep_sharing_its_cell() {
    let config = WolfSheepConfig {
        initial_sheep_energy: 5,
        initial_wolf_energy: 5,
        wolf_gain_from_food: 20,
        ..quiet_config(1, 1)
    };
    let mut world = world_with(config);
    world.create_sheep(Position::new(0, 0)).unwrap();
    world.create_wolf(Position::new(0, 0)).unwrap();

    world.step().unwrap();

    assert_eq!(world.count_of(Breed::Sheep), 0);
    assert_eq!(energies(&world, Breed::Wolf), vec![24]);
    let record = world.population_log().latest().unwrap();
    assert_eq!(record.sheep, 0);
    assert_eq!(record.wolf_energy, 24);
    assert_eq!(record.energy_per_wolf, 12.0);
}

#[test]
fn sheep_grazes_grown_patch() {
    let config = WolfSheepConfig {
        grass: true,
        sheep_gain_from_food: 4,
        initial_sheep_energy: 5,
        grass_regrowth_time: 30,
        ..quiet_config(10, 10)
    };
    let mut world = world_with(config);
    let sheep = world.create_sheep(Position::new(4, 4)).unwrap();

    assert_eq!(world.step_breed(Breed::Sheep).unwrap(), 1);

    let view = world.agent(sheep).unwrap();
    assert_eq!(view.energy, Some(5 - 1 + 4));
    let patch = world.grass_at(view.position).unwrap().unwrap();
    assert_eq!(patch.fully_grown, Some(false));
    assert_eq!(patch.countdown, Some(30));
}

#[test]
fn eaten_patch_regrows_after_regrowth_time_grass_steps() {
    let config = WolfSheepConfig {
        grass: true,
        grass_regrowth_time: 3,
        initial_sheep_energy: 50,
        ..quiet_config(5, 5)
    };
    let mut world = world_with(config);
    let sheep = world.create_sheep(Position::new(2, 2)).unwrap();
    world.step_breed(Breed::Sheep).unwrap();
    let eaten_at = world.agent(sheep).unwrap().position;
    world.remove_agent(sheep).unwrap();

    for expected in [2, 1] {
        world.step_breed(Breed::GrassPatch).unwrap();
        let patch = world.grass_at(eaten_at).unwrap().unwrap();
        assert_eq!(patch.fully_grown, Some(false));
        assert_eq!(patch.countdown, Some(expected));
    }
    world.step_breed(Breed::GrassPatch).unwrap();
    let patch = world.grass_at(eaten_at).unwrap().unwrap();
    assert_eq!(patch.fully_grown, Some(true));
    assert_eq!(patch.countdown, Some(0));
}

#[test]
fn eaten_patch_is_grown_again_after_r_minus_one_ticks() {
    // Default order runs grass after sheep, so the eating tick already spends
    // one regrowth step: grown again R - 1 ticks after the tick it was eaten.
    let config = WolfSheepConfig {
        grass: true,
        grass_regrowth_time: 3,
        initial_sheep_energy: 50,
        ..quiet_config(1, 1)
    };
    let mut world = world_with(config);
    let origin = Position::new(0, 0);
    world.create_sheep(origin).unwrap();

    let mut seen = Vec::new();
    for _ in 0..3 {
        world.step().unwrap();
        let patch = world.grass_at(origin).unwrap().unwrap();
        seen.push((patch.fully_grown.unwrap(), patch.countdown.unwrap()));
    }
    assert_eq!(seen, vec![(false, 2), (false, 1), (true, 0)]);

    let grown: Vec<usize> = world
        .population_log()
        .records
        .iter()
        .map(|record| record.grown_grass)
        .collect();
    assert_eq!(grown, vec![0, 0, 1]);
    // One meal in tick 1, then three step costs.
    assert_eq!(energies(&world, Breed::Sheep), vec![50 + 4 - 3]);
}

#[test]
fn grass_disabled_means_no_grazing() {
    let config = WolfSheepConfig {
        grass: false,
        initial_sheep_energy: 5,
        ..quiet_config(3, 3)
    };
    let mut world = world_with(config);
    let sheep = world.create_sheep(Position::new(1, 1)).unwrap();
    world.step().unwrap();

    assert_eq!(world.agent(sheep).unwrap().energy, Some(4));
    for pos in world.grid().positions() {
        let patch = world.grass_at(pos).unwrap().unwrap();
        assert_eq!(patch.fully_grown, Some(true));
    }
    assert_eq!(world.population_log().latest().unwrap().grown_grass, 9);
}

#[test]
fn sheep_eaten_before_its_pass_never_steps() {
    let config = WolfSheepConfig {
        activation_order: [Breed::Wolf, Breed::Sheep, Breed::GrassPatch],
        initial_sheep_energy: 1,
        initial_wolf_energy: 5,
        ..quiet_config(1, 1)
    };
    let mut world = world_with(config);
    world.create_sheep(Position::new(0, 0)).unwrap();
    world.create_wolf(Position::new(0, 0)).unwrap();

    world.step().unwrap();

    assert_eq!(world.count_of(Breed::Sheep), 0);
    assert_eq!(energies(&world, Breed::Wolf), vec![5 - 1 + 20]);
}

#[test]
fn wolf_kills_at_most_one_sheep_per_tick() {
    let config = WolfSheepConfig {
        activation_order: [Breed::Wolf, Breed::Sheep, Breed::GrassPatch],
        initial_sheep_energy: 10,
        ..quiet_config(1, 1)
    };
    let mut world = world_with(config);
    for _ in 0..3 {
        world.create_sheep(Position::new(0, 0)).unwrap();
    }
    world.create_wolf(Position::new(0, 0)).unwrap();

    world.step().unwrap();
    assert_eq!(world.count_of(Breed::Sheep), 2);
    world.step().unwrap();
    assert_eq!(world.count_of(Breed::Sheep), 1);
}

#[test]
fn newborns_wait_until_next_tick() {
    let config = WolfSheepConfig {
        sheep_reproduce: 1.0,
        initial_sheep_energy: 4,
        ..quiet_config(1, 1)
    };
    let mut world = world_with(config);
    world.create_sheep(Position::new(0, 0)).unwrap();

    world.step().unwrap();
    assert_eq!(energies(&world, Breed::Sheep), vec![3, 4]);

    world.step().unwrap();
    // Parent 3 -> 2, first lamb 4 -> 3, plus two fresh lambs.
    assert_eq!(energies(&world, Breed::Sheep), vec![2, 3, 4, 4]);
    let born_in_second_tick = world
        .snapshot()
        .into_iter()
        .filter(|view| view.born == 1)
        .count();
    assert_eq!(born_in_second_tick, 2);
}

#[test]
fn empty_world_steps_cleanly() {
    let mut world = world_with(quiet_config(4, 4));
    world.run(5).unwrap();
    assert_eq!(world.tick(), 5);
    let record = world.population_log().latest().unwrap();
    assert_eq!((record.sheep, record.wolves), (0, 0));
    assert_eq!(record.energy_per_wolf, 0.0);
}

#[test]
fn removing_unknown_agent_reports_not_found() {
    let mut world = world_with(quiet_config(2, 2));
    let id = wolf_sheep::AgentId(9_999);
    assert_eq!(world.remove_agent(id), Err(SimError::AgentNotFound(id)));
}

#[test]
fn invalid_configs_are_rejected() {
    let bad = [
        WolfSheepConfig {
            width: 0,
            ..WolfSheepConfig::default()
        },
        WolfSheepConfig {
            sheep_reproduce: 1.01,
            ..WolfSheepConfig::default()
        },
        WolfSheepConfig {
            initial_wolf_energy: 0,
            ..WolfSheepConfig::default()
        },
    ];
    for config in bad {
        assert!(matches!(
            SimulationWorld::new(config),
            Err(SimError::InvalidParameter { .. })
        ));
    }
}

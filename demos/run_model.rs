use std::path::PathBuf;

use wolf_sheep::{Breed, RunOptions, SimulationWorld, WolfSheepConfig, run_with_options};

// Usage: run_model [config.json] [ticks] [output_dir]
fn main() {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("cannot read {path}: {e}"));
            WolfSheepConfig::from_json_str(&json).unwrap_or_else(|e| panic!("{path}: {e}"))
        }
        None => WolfSheepConfig {
            grass: true,
            ..WolfSheepConfig::default()
        },
    };
    let ticks: u64 = args.next().and_then(|t| t.parse().ok()).unwrap_or(200);

    let mut options = RunOptions::new(ticks);
    if let Some(dir) = args.next() {
        options = options.with_checkpoints(50, PathBuf::from(dir));
    }

    let mut world = SimulationWorld::new(config).expect("invalid config");
    run_with_options(&mut world, &options).expect("run failed");

    for record in world.population_log().records.iter().step_by(10) {
        eprintln!(
            "tick {:>4}: sheep={:>4} wolves={:>4} grass={:>4} energy/wolf={:.2}",
            record.tick, record.sheep, record.wolves, record.grown_grass, record.energy_per_wolf
        );
    }
    eprintln!(
        "final: sheep={} wolves={} after {} ticks",
        world.count_of(Breed::Sheep),
        world.count_of(Breed::Wolf),
        world.tick()
    );
}

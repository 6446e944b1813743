use bevy_app::App;
use bevy_ecs::schedule::ExecutorKind;

use super::clock::SimClock;
use super::grid::SpatialGrid;
use super::resources::{AgentIndex, EcsIdGenerator, PopulationLog, SimFault, SimRng};
use super::schedule::configure_sim_schedule;
use super::scheduler::BreedScheduler;
use super::systems::{add_activation_systems, add_stats_systems};
use crate::config::WolfSheepConfig;
use crate::error::SimError;

/// Build a headless Bevy app holding an empty world for `config`: grid,
/// scheduler, clock, RNG and collectors, with the `SimTick` schedule wired.
/// No agents are spawned.
///
/// The schedule always uses the single-threaded executor; the simulation is
/// a pure function of the config and its seed.
///
/// Manual tick control:
/// ```no_run
/// # use wolf_sheep::config::WolfSheepConfig;
/// # use wolf_sheep::ecs::{build_sim_app, SimTick};
/// let mut app = build_sim_app(&WolfSheepConfig::default()).unwrap();
/// for _ in 0..200 {
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_sim_app(config: &WolfSheepConfig) -> Result<App, SimError> {
    config.validate()?;
    let mut app = App::empty();

    // Core resources
    app.insert_resource(config.clone());
    app.insert_resource(SimClock::new());
    app.insert_resource(SimRng::new(config.seed));
    app.insert_resource(EcsIdGenerator::default());
    app.insert_resource(AgentIndex::new());
    app.insert_resource(SpatialGrid::new(config.width, config.height)?);
    app.insert_resource(BreedScheduler::new(config.activation_order));
    app.insert_resource(PopulationLog::new());
    app.init_resource::<SimFault>();

    app.add_schedule(configure_sim_schedule(ExecutorKind::SingleThreaded));
    add_activation_systems(&mut app);
    add_stats_systems(&mut app);
    Ok(app)
}

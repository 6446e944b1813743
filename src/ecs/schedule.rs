use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;
use super::conditions::tick_healthy;

/// Schedule label for one simulation tick.
/// Run manually each tick via `app.world_mut().run_schedule(SimTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimTick;

/// Ordered phases within each simulation tick.
///
/// Phases run in declaration order: Update < PostUpdate < Last.
/// Breed passes run in `Update`, statistics in `PostUpdate`, and the clock
/// advances in `Last`. A faulted tick skips statistics and the clock.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimPhase {
    Update,
    PostUpdate,
    Last,
}

/// Build a configured `SimTick` schedule with phase ordering.
pub fn configure_sim_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(SimTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets((SimPhase::Update, SimPhase::PostUpdate, SimPhase::Last).chain());
    schedule.add_systems(advance_clock.run_if(tick_healthy).in_set(SimPhase::Last));
    schedule
}

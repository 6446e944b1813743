use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Tick counter for the simulation.
///
/// The `advance_clock` system moves the clock forward at the end of each tick
/// (in `SimPhase::Last`), so systems running during tick `n` (1-based) see
/// `tick_count == n - 1`.
#[derive(Resource, Debug, Default)]
pub struct SimClock {
    pub tick_count: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the tick currently running, or about to run (1-based).
    pub fn current_tick(&self) -> u64 {
        self.tick_count + 1
    }

    pub fn advance(&mut self) {
        self.tick_count += 1;
    }
}

/// Bevy system that advances the simulation clock by one tick.
/// Registered in `SimPhase::Last` so all other systems see the current
/// tick before it advances.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}

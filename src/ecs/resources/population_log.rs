use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

/// Aggregate population figures at the end of one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    /// 1-based number of the tick that just completed.
    pub tick: u64,
    pub sheep: usize,
    pub wolves: usize,
    pub grown_grass: usize,
    pub sheep_energy: i64,
    pub wolf_energy: i64,
    /// `wolf_energy / (wolves + 1)`, the classic collector's smoothed mean.
    pub energy_per_wolf: f64,
}

/// Accumulates one `TickRecord` per tick for reporting layers to read.
#[derive(Resource, Debug, Clone, Default)]
pub struct PopulationLog {
    pub records: Vec<TickRecord>,
}

impl PopulationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&TickRecord> {
        self.records.last()
    }
}

use std::fmt;

use bevy_ecs::component::Component;
use serde::{Deserialize, Serialize};

use crate::id::AgentId;

/// Core identity component present on every agent entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct SimAgent {
    pub id: AgentId,
    /// Tick during which the agent was created (0 for the seeded population).
    pub born: u64,
}

/// Agent kind. Doubles as the scheduler's partition key.
#[derive(
    Component,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Breed {
    Sheep,
    Wolf,
    GrassPatch,
}

impl Breed {
    pub const ALL: [Breed; 3] = [Breed::Sheep, Breed::Wolf, Breed::GrassPatch];

    /// Stable index for per-breed tables.
    pub const fn index(self) -> usize {
        match self {
            Breed::Sheep => 0,
            Breed::Wolf => 1,
            Breed::GrassPatch => 2,
        }
    }

    /// Whether agents of this breed carry `Energy`.
    pub const fn has_energy(self) -> bool {
        matches!(self, Breed::Sheep | Breed::Wolf)
    }
}

/// Grid cell, always within bounds once placed.
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

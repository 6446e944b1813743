use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use crate::ecs::components::Breed;
use crate::error::SimError;

/// Run parameters for a wolf–sheep world. Immutable once the world is built.
///
/// Deserializes from JSON with every field optional; missing fields take the
/// classic model's defaults.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WolfSheepConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    pub initial_sheep: u32,
    pub initial_wolves: u32,
    /// Per-step probability that a sheep reproduces.
    pub sheep_reproduce: f64,
    /// Per-step probability that a wolf reproduces.
    pub wolf_reproduce: f64,
    /// Energy a wolf gains from eating a sheep.
    pub wolf_gain_from_food: i64,
    /// Whether sheep eat grass.
    pub grass: bool,
    /// Grass steps needed for an eaten patch to regrow.
    pub grass_regrowth_time: u32,
    /// Energy a sheep gains from eating a grown patch.
    pub sheep_gain_from_food: i64,
    pub initial_wolf_energy: i64,
    pub initial_sheep_energy: i64,
    /// RNG seed. The whole run is a function of the config and this seed.
    pub seed: u64,
    /// Order in which breeds take their turn within a tick.
    pub activation_order: [Breed; 3],
}

impl Default for WolfSheepConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            initial_sheep: 100,
            initial_wolves: 50,
            sheep_reproduce: 0.04,
            wolf_reproduce: 0.05,
            wolf_gain_from_food: 20,
            grass: false,
            grass_regrowth_time: 30,
            sheep_gain_from_food: 4,
            initial_wolf_energy: 10,
            initial_sheep_energy: 4,
            seed: 42,
            activation_order: [Breed::Sheep, Breed::Wolf, Breed::GrassPatch],
        }
    }
}

impl WolfSheepConfig {
    /// Parse a JSON document and validate the result.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter. Called by `SimulationWorld::new` before any
    /// state is built.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.width == 0 {
            return Err(SimError::invalid_parameter("width", "must be at least 1"));
        }
        if self.height == 0 {
            return Err(SimError::invalid_parameter("height", "must be at least 1"));
        }
        check_probability("sheep_reproduce", self.sheep_reproduce)?;
        check_probability("wolf_reproduce", self.wolf_reproduce)?;
        check_non_negative("wolf_gain_from_food", self.wolf_gain_from_food)?;
        check_non_negative("sheep_gain_from_food", self.sheep_gain_from_food)?;
        check_positive("initial_wolf_energy", self.initial_wolf_energy)?;
        check_positive("initial_sheep_energy", self.initial_sheep_energy)?;

        for breed in Breed::ALL {
            let seen = self
                .activation_order
                .iter()
                .filter(|b| **b == breed)
                .count();
            if seen != 1 {
                return Err(SimError::invalid_parameter(
                    "activation_order",
                    format!("{breed:?} must appear exactly once, found {seen}"),
                ));
            }
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Starting energy for newly created agents of `breed` (0 for grass).
    pub fn initial_energy(&self, breed: Breed) -> i64 {
        match breed {
            Breed::Sheep => self.initial_sheep_energy,
            Breed::Wolf => self.initial_wolf_energy,
            Breed::GrassPatch => 0,
        }
    }

    /// Per-step reproduction probability for `breed` (0 for grass).
    pub fn reproduce_probability(&self, breed: Breed) -> f64 {
        match breed {
            Breed::Sheep => self.sheep_reproduce,
            Breed::Wolf => self.wolf_reproduce,
            Breed::GrassPatch => 0.0,
        }
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), SimError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(SimError::invalid_parameter(
            name,
            format!("{value} is not a probability in [0, 1]"),
        ));
    }
    Ok(())
}

fn check_non_negative(name: &'static str, value: i64) -> Result<(), SimError> {
    if value < 0 {
        return Err(SimError::invalid_parameter(
            name,
            format!("{value} must not be negative"),
        ));
    }
    Ok(())
}

fn check_positive(name: &'static str, value: i64) -> Result<(), SimError> {
    if value < 1 {
        return Err(SimError::invalid_parameter(
            name,
            format!("{value} must be at least 1"),
        ));
    }
    Ok(())
}

//! Per-tick systems: breed activation passes and statistics collection.

pub mod activation;
pub mod grass;
mod helpers;
pub mod movement;
pub mod sheep;
pub mod stats;
pub mod wolf;

pub use activation::{activate_breed, add_activation_systems};
pub use movement::random_move;
pub use stats::{add_stats_systems, collect_population};

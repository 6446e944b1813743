pub mod animal;
pub mod common;
pub mod grass;

pub use animal::{Energy, Walker};
pub use common::{Breed, Position, SimAgent};
pub use grass::GrassState;

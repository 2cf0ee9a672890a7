pub mod calculations;
pub mod models;

pub use calculations::{PerSimulator, Simulation};
pub use models::*;

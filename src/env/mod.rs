//! The 2-D world the ants walk through.
//!
//! An environment couples a bounded occupancy grid with the shared pheromone
//! field. Walks read it; only the colony mutates it, between generations.

pub mod environment;
pub mod obstacle;
pub mod pheromone;

pub use environment::{Environment, EnvironmentError};
pub use obstacle::Obstacle;
pub use pheromone::{PheromoneField, SurroundingPheromone};

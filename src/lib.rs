//! AntSwarm Core - stigmergic pathfinding engine
//!
//! This library searches for short collision-free paths across bounded 2-D
//! grid environments using ant colony optimization: generations of parallel
//! stochastic walkers that coordinate indirectly through a shared pheromone
//! field. Good paths accumulate pheromone, evaporation forgets stale trails,
//! and elitist reinforcement keeps pressure on the best path found so far.

pub mod aco;
pub mod env;
pub mod helpers;

// Re-export key types
pub use aco::ant::{Ant, WalkOutcome};
pub use aco::colony::Colony;
pub use aco::config::{AcoConfig, ConfigError, Elitism};
pub use aco::{PathSolver, Solution};
pub use env::environment::{Environment, EnvironmentError};
pub use env::obstacle::Obstacle;
pub use env::pheromone::{PheromoneField, SurroundingPheromone};
pub use helpers::coordinate::Coordinate;
pub use helpers::direction::Direction;
pub use helpers::path::Path;
pub use helpers::path_specification::PathSpecification;

/// Initialize tracing for the library.
pub fn setup_logging(level: Option<String>) {
    let filter = level.unwrap_or_else(|| "info".to_string());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

//! Ant colony optimization.
//!
//! A colony runs generations of parallel stochastic ant walks over a shared
//! pheromone field. Successful paths reinforce the field, evaporation
//! forgets stale trails, and elitism keeps pressure on the best path found
//! so far. The walk itself is a small state machine with dead-end
//! backtracking, so individual ants recover from traps instead of failing.

pub mod ant;
pub mod colony;
pub mod config;
pub mod sampling;
pub mod scenario_test;

pub use ant::{Ant, WalkOutcome};
pub use colony::Colony;
pub use config::{AcoConfig, ConfigError, Elitism};

use serde::Serialize;

use crate::helpers::path::Path;
use crate::helpers::path_specification::PathSpecification;

/// Result of one full solver run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solution {
    /// Best path found, if any ant ever reached the goal.
    pub best: Option<Path>,
    /// Best-path length recorded at generations 1, 3, 5, 9, then every 10th.
    pub checkpoints: Vec<usize>,
    /// Generations actually run before returning.
    pub generations: usize,
}

impl Solution {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Capability interface shared by the path optimizers: one call, one best
/// path plus its convergence checkpoints. Competing metaheuristics implement
/// this independently; only the ant colony family shares the pheromone
/// machinery.
pub trait PathSolver {
    fn solve(&mut self, spec: &PathSpecification) -> Result<Solution, ConfigError>;
}

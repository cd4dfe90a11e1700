//! Colony hyperparameters.
//!
//! One immutable struct passed by value into the colony constructor; no
//! process-wide configuration state. Invalid parameter sets are rejected
//! eagerly, before any walk executes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::helpers::coordinate::Coordinate;

/// Elitist reinforcement policy applied after the regular deposits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Elitism {
    /// Deposit the incumbent best path `sigma_elite` extra times, every
    /// generation.
    Fixed,
    /// Adaptive probabilistic elitism: reinforce with probability
    /// `1 - best_len / longest_best_seen`, so pressure fades as the colony
    /// closes in on a short path. When a fresh best outgrows the recorded
    /// maximum the raw value turns negative and `default_probability` is
    /// used instead.
    Adaptive { default_probability: f64 },
}

/// Hyperparameters for one colony run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AcoConfig {
    /// Ant walks launched per generation.
    pub ants_per_generation: usize,
    /// Upper bound on generations before giving up.
    pub max_generations: usize,
    /// Deposit normalization factor Q: a path deposits `q / len` per cell.
    pub deposit_factor: f64,
    /// Evaporation rate rho, in [0, 1).
    pub evaporation_rate: f64,
    /// Maximum number of moves a single walk may take.
    pub move_budget: usize,
    /// Sharpness exponent applied to pheromone intensities when weighing
    /// candidate moves. Must be positive.
    pub trail_exponent: f64,
    /// Consecutive generations without best-path change before terminating
    /// early.
    pub stagnation_limit: usize,
    /// Extra deposits of the best path per elitist reinforcement.
    pub sigma_elite: usize,
    /// Elitist reinforcement policy.
    pub elitism: Elitism,
    /// Size of the worker pool running the walks.
    pub workers: usize,
    /// Master seed; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        AcoConfig {
            ants_per_generation: 30,
            max_generations: 20,
            deposit_factor: 500.0,
            evaporation_rate: 0.5,
            move_budget: 3500,
            trail_exponent: 1.0,
            stagnation_limit: 30,
            sigma_elite: 50,
            elitism: Elitism::Adaptive {
                default_probability: 0.5,
            },
            workers: 6,
            seed: None,
        }
    }
}

/// Rejected configurations and path specifications. Fatal to that
/// configuration; never retried internally.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ants_per_generation must be positive")]
    NoAnts,
    #[error("max_generations must be positive")]
    NoGenerations,
    #[error("evaporation_rate must lie in [0, 1), got {0}")]
    InvalidEvaporation(f64),
    #[error("move_budget must be positive")]
    NoMoveBudget,
    #[error("trail_exponent must be positive, got {0}")]
    InvalidTrailExponent(f64),
    #[error("workers must be positive")]
    NoWorkers,
    #[error("elitism default_probability must lie in [0, 1], got {0}")]
    InvalidElitistProbability(f64),
    #[error("start and end of a path specification must differ")]
    DegenerateSpecification,
    #[error("path endpoint ({0}) is out of bounds or blocked")]
    UnreachableEndpoint(Coordinate),
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}

impl AcoConfig {
    /// Validate the whole parameter set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ants_per_generation == 0 {
            return Err(ConfigError::NoAnts);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(ConfigError::InvalidEvaporation(self.evaporation_rate));
        }
        if self.move_budget == 0 {
            return Err(ConfigError::NoMoveBudget);
        }
        if self.trail_exponent <= 0.0 {
            return Err(ConfigError::InvalidTrailExponent(self.trail_exponent));
        }
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if let Elitism::Adaptive {
            default_probability,
        } = self.elitism
        {
            if !(0.0..=1.0).contains(&default_probability) {
                return Err(ConfigError::InvalidElitistProbability(default_probability));
            }
        }
        Ok(())
    }
}

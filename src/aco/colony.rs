//! The colony orchestrator.
//!
//! Runs generations of parallel ant walks against a read-only view of the
//! environment, then updates the pheromone field between generations:
//! evaporation first, then deposits from every successful path, then elitist
//! reinforcement of the incumbent best. The field is mutated only here, on
//! the orchestrating thread, after the walk barrier; workers never write.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rayon::ThreadPool;
use tracing::{debug, info};

use crate::env::environment::Environment;
use crate::helpers::path::Path;
use crate::helpers::path_specification::PathSpecification;

use super::ant::Ant;
use super::config::{AcoConfig, ConfigError, Elitism};
use super::{PathSolver, Solution};

/// Salt separating the elitism coin stream from the per-ant seed streams.
const ELITISM_STREAM: u64 = 0xE117;

/// Whether a 1-based generation index is on the checkpoint schedule:
/// 1, 3, 5, 9, then every 10th.
fn is_checkpoint(generation: usize) -> bool {
    matches!(generation, 1 | 3 | 5 | 9) || generation % 10 == 0
}

/// Reinforcement probability of the adaptive elitism policy.
///
/// Approaches 1 as the best path shrinks relative to the longest best ever
/// seen; once a fresh best outgrows that maximum the raw value turns
/// negative and `default_probability` is used instead.
fn reinforcement_probability(best_len: usize, longest_best: usize, default_probability: f64) -> f64 {
    let p = 1.0 - best_len as f64 / longest_best as f64;
    if p < 0.0 {
        default_probability
    } else {
        p
    }
}

/// Ant colony path optimizer over a single environment.
pub struct Colony {
    environment: Environment,
    config: AcoConfig,
    pool: ThreadPool,
    seed: u64,
    rng: SmallRng,
    longest_best: Option<usize>,
}

impl Colony {
    /// Build a colony around an environment. The configuration is validated
    /// eagerly; nothing runs before it passes.
    pub fn new(environment: Environment, config: AcoConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()
            .map_err(|e| ConfigError::WorkerPool(e.to_string()))?;

        let seed = config.seed.unwrap_or_else(rand::random);
        info!(
            "🐜 [Colony] initialized ({} ants/gen, {} generations max, {} workers, seed {})",
            config.ants_per_generation, config.max_generations, config.workers, seed
        );

        Ok(Colony {
            environment,
            config,
            pool,
            seed,
            rng: SmallRng::seed_from_u64(seed ^ ELITISM_STREAM),
            longest_best: None,
        })
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Find a short path for `spec` across at most `max_generations`
    /// generations of parallel walks.
    ///
    /// Returns the best path found (possibly none: a colony whose ants never
    /// reach the goal is a normal outcome, not an error), the checkpoint log
    /// and the number of generations actually run.
    pub fn solve(&mut self, spec: &PathSpecification) -> Result<Solution, ConfigError> {
        self.validate_spec(spec)?;

        self.environment.reset();
        self.longest_best = None;
        self.rng = SmallRng::seed_from_u64(self.seed ^ ELITISM_STREAM);

        let mut best: Option<Path> = None;
        let mut stagnation = 0usize;
        let mut checkpoints: Vec<usize> = Vec::new();

        for generation in 1..=self.config.max_generations {
            let paths = self.run_generation(generation, spec);

            let previous = best.clone();
            for path in &paths {
                let replace = match &best {
                    None => true,
                    Some(incumbent) => path.shorter_than(incumbent),
                };
                if replace {
                    best = Some(path.clone());
                }
            }

            // The longest best ever seen anchors the adaptive elitism
            // probability; it is captured once, at the first success.
            if self.longest_best.is_none() {
                if let Some(incumbent) = &best {
                    self.longest_best = Some(incumbent.len());
                }
            }

            if best.is_some() && previous == best {
                stagnation += 1;
            } else {
                stagnation = 0;
            }

            debug!(
                "🐜 [Colony] generation {}: {} paths, best {:?}, stagnation {}",
                generation,
                paths.len(),
                best.as_ref().map(Path::len),
                stagnation
            );

            if stagnation >= self.config.stagnation_limit {
                info!(
                    "🏁 [Colony] stagnated at generation {}, best length {:?}",
                    generation,
                    best.as_ref().map(Path::len)
                );
                return Ok(Solution {
                    best,
                    checkpoints,
                    generations: generation,
                });
            }

            // A generation with zero successes skips the field update (and
            // its checkpoint) but keeps going: next generation's fresh ants
            // are the retry mechanism.
            if paths.is_empty() {
                continue;
            }

            self.environment.evaporate(self.config.evaporation_rate);
            self.environment
                .deposit_paths(&paths, self.config.deposit_factor);
            if let Some(incumbent) = &best {
                self.reinforce(incumbent);
            }

            if is_checkpoint(generation) {
                if let Some(incumbent) = &best {
                    checkpoints.push(incumbent.len());
                }
            }
        }

        info!(
            "🏁 [Colony] finished {} generations, best length {:?}",
            self.config.max_generations,
            best.as_ref().map(Path::len)
        );
        Ok(Solution {
            best,
            checkpoints,
            generations: self.config.max_generations,
        })
    }

    /// Launch one generation of walks on the worker pool and collect the
    /// successful paths. The walks only read the environment; the barrier
    /// here is what lets the caller mutate it afterwards.
    fn run_generation(&self, generation: usize, spec: &PathSpecification) -> Vec<Path> {
        let environment = &self.environment;
        let config = &self.config;

        self.pool.install(|| {
            (0..config.ants_per_generation)
                .into_par_iter()
                .filter_map(|index| {
                    let rng = SmallRng::seed_from_u64(self.ant_seed(generation, index));
                    Ant::new(environment, spec, config.move_budget, config.trail_exponent, rng)
                        .find_path()
                        .into_path()
                })
                .collect()
        })
    }

    fn reinforce(&mut self, best: &Path) {
        match self.config.elitism {
            Elitism::Fixed => {
                for _ in 0..self.config.sigma_elite {
                    self.environment
                        .deposit_path(best, self.config.deposit_factor);
                }
            }
            Elitism::Adaptive {
                default_probability,
            } => {
                let Some(longest) = self.longest_best else {
                    return;
                };
                let p = reinforcement_probability(best.len(), longest, default_probability);
                if self.rng.gen::<f64>() < p {
                    for _ in 0..self.config.sigma_elite {
                        self.environment
                            .deposit_path(best, self.config.deposit_factor);
                    }
                }
            }
        }
    }

    fn validate_spec(&self, spec: &PathSpecification) -> Result<(), ConfigError> {
        if spec.start == spec.end {
            return Err(ConfigError::DegenerateSpecification);
        }
        for endpoint in [spec.start, spec.end] {
            if !self.environment.traversable(endpoint) {
                return Err(ConfigError::UnreachableEndpoint(endpoint));
            }
        }
        Ok(())
    }

    /// Splitmix scramble of (master seed, generation, ant index): runs with
    /// the same seed reproduce exactly while sibling ants stay decorrelated.
    fn ant_seed(&self, generation: usize, index: usize) -> u64 {
        let mut z = self
            .seed
            .wrapping_add(((generation as u64) << 32) | (index as u64 + 1));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl PathSolver for Colony {
    fn solve(&mut self, spec: &PathSpecification) -> Result<Solution, ConfigError> {
        Colony::solve(self, spec)
    }
}

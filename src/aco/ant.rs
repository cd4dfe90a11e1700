//! The ant walker.
//!
//! One ant performs one stochastic walk from start toward end, biased by the
//! pheromone field. Cells visited during the walk are excluded from later
//! choices, and genuine decision points (two or more viable moves) are
//! remembered on a stack so a dead-ended ant falls back to its last real
//! choice instead of failing outright. Only branch points are recorded,
//! which keeps the stack proportional to the number of branches rather than
//! the path length.

use std::collections::HashSet;

use rand::Rng;

use crate::env::environment::Environment;
use crate::helpers::coordinate::Coordinate;
use crate::helpers::direction::Direction;
use crate::helpers::path::Path;
use crate::helpers::path_specification::PathSpecification;

use super::sampling::sample_weighted;

/// Terminal state of a single walk.
///
/// Callers treat both failure kinds identically: no path found this run.
#[derive(Clone, Debug, PartialEq)]
pub enum WalkOutcome {
    /// The ant reached the end position.
    Success(Path),
    /// No viable move anywhere and no decision point left to fall back to.
    Stuck,
    /// The move budget ran out before the end was reached.
    BudgetExhausted,
}

impl WalkOutcome {
    /// The discovered path, if the walk succeeded.
    pub fn into_path(self) -> Option<Path> {
        match self {
            WalkOutcome::Success(path) => Some(path),
            WalkOutcome::Stuck | WalkOutcome::BudgetExhausted => None,
        }
    }
}

/// A single walker. Owns nothing shared: the visited set and backtrack
/// stack live and die with the walk.
pub struct Ant<'a, R: Rng> {
    environment: &'a Environment,
    start: Coordinate,
    end: Coordinate,
    move_budget: usize,
    trail_exponent: f64,
    rng: R,
}

impl<'a, R: Rng> Ant<'a, R> {
    pub fn new(
        environment: &'a Environment,
        spec: &PathSpecification,
        move_budget: usize,
        trail_exponent: f64,
        rng: R,
    ) -> Self {
        Ant {
            environment,
            start: spec.start,
            end: spec.end,
            move_budget,
            trail_exponent,
            rng,
        }
    }

    /// Run the walk to one of its terminal states.
    ///
    /// The budget counts advances; backtracking consumes none of it, and the
    /// walk still terminates because every backtrack pops a stack entry that
    /// some earlier advance pushed.
    pub fn find_path(mut self) -> WalkOutcome {
        let mut current = self.start;
        let mut path = Path::new(self.start);

        let mut visited: HashSet<Coordinate> = HashSet::new();
        visited.insert(self.start);

        // Decision points: (position, path length when standing there).
        let mut stack: Vec<(Coordinate, usize)> = Vec::new();

        let mut budget = self.move_budget;

        while current != self.end {
            if budget == 0 {
                return WalkOutcome::BudgetExhausted;
            }

            let surrounding = self.environment.surrounding_pheromone(current);
            let mut remaining_total = surrounding.total();
            let mut weights = [0.0; Direction::COUNT];

            for direction in Direction::ALL {
                let neighbor = current.step(direction);
                if visited.contains(&neighbor) {
                    remaining_total -= surrounding.get(direction);
                } else {
                    weights[direction.index()] =
                        surrounding.get(direction).powf(self.trail_exponent);
                }
            }

            let weight_sum: f64 = weights.iter().sum();

            if remaining_total <= 0.0 || weight_sum <= 0.0 {
                // Dead end: rewind to the most recent decision point.
                match stack.pop() {
                    Some((position, length)) => {
                        path.truncate_to(length);
                        current = position;
                        continue;
                    }
                    None => return WalkOutcome::Stuck,
                }
            }

            let viable = weights.iter().filter(|&&weight| weight > 0.0).count();
            if viable >= 2 {
                stack.push((current, path.len()));
            }

            let choice = match sample_weighted(&mut self.rng, &weights) {
                Some(index) => Direction::ALL[index],
                // Unreachable while weight_sum > 0; bail out rather than spin.
                None => return WalkOutcome::Stuck,
            };

            current = current.step(choice);
            path.push(current);
            visited.insert(current);
            budget -= 1;
        }

        WalkOutcome::Success(path)
    }
}

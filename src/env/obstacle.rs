//! Circular obstacles.
//!
//! An obstacle blocks every cell whose center lies within its radius. The
//! seeded `scatter` generator places non-overlapping obstacles across the
//! central 80% of a grid, for building test and demo environments; loading
//! real maze layouts from files stays outside this crate.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::helpers::coordinate::Coordinate;

/// A circular obstacle: center cell plus a radius in cells.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub center: Coordinate,
    pub radius: f64,
}

impl Obstacle {
    pub const fn new(center: Coordinate, radius: f64) -> Self {
        Obstacle { center, radius }
    }

    /// Whether a cell lies inside this obstacle.
    pub fn contains(&self, position: Coordinate) -> bool {
        self.center.distance_to(position) <= self.radius
    }
}

/// Randomly place non-overlapping obstacles of one radius until roughly
/// `coverage` (in [0, 1]) of the placeable area is filled.
///
/// Placement is restricted to the central 80% of the grid, keeping a margin
/// of 10% per side so corner start/end cells stay clear. Deterministic for a
/// fixed seed. Placement gives up after a bounded number of rejected draws,
/// so dense requests return fewer obstacles instead of spinning.
pub fn scatter(width: i32, height: i32, radius: f64, coverage: f64, seed: u64) -> Vec<Obstacle> {
    if width <= 0 || height <= 0 || radius < 0.0 || coverage <= 0.0 {
        return Vec::new();
    }

    let left = (f64::from(width) * 0.1) as i32;
    let right = (f64::from(width) * 0.9) as i32;
    let bottom = (f64::from(height) * 0.1) as i32;
    let top = (f64::from(height) * 0.9) as i32;
    if left > right || bottom > top {
        return Vec::new();
    }

    // One obstacle occupies about (2r+1)^2 cells; 80% of the grid is placeable.
    let obstacle_area = (radius * 2.0 + 1.0).powi(2);
    let placeable_cells = f64::from(width) * f64::from(height) * 0.8;
    let target = ((placeable_cells / obstacle_area) * coverage) as usize;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut obstacles: Vec<Obstacle> = Vec::with_capacity(target);
    let mut attempts = 0usize;
    let max_attempts = target.saturating_mul(1000).max(1000);

    while obstacles.len() < target && attempts < max_attempts {
        attempts += 1;
        let candidate = Coordinate::new(
            rng.gen_range(left..=right),
            rng.gen_range(bottom..=top),
        );

        let clear = obstacles
            .iter()
            .all(|other| candidate.distance_to(other.center) >= radius + other.radius);
        if clear {
            obstacles.push(Obstacle::new(candidate, radius));
        }
    }

    obstacles
}

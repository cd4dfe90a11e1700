//! Bounded grid environment.
//!
//! Owns the occupancy predicate and the pheromone field, and is the only
//! component that mutates pheromone state. Reads are clamped: out-of-bounds
//! and blocked cells report zero pheromone, so grid edges and obstacles act
//! as zero-attractiveness sinks without special-casing every caller.

use thiserror::Error;

use crate::helpers::coordinate::Coordinate;
use crate::helpers::direction::Direction;
use crate::helpers::path::Path;

use super::obstacle::Obstacle;
use super::pheromone::{PheromoneField, SurroundingPheromone};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum EnvironmentError {
    #[error("environment dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("occupancy rows must be non-empty and rectangular")]
    RaggedRows,
}

/// A bounded width x height grid with blocked cells and a pheromone field.
#[derive(Clone, Debug)]
pub struct Environment {
    width: i32,
    height: i32,
    open_cells: Vec<bool>,
    pheromone: PheromoneField,
}

impl Environment {
    /// A fully open grid with no obstacles.
    pub fn open(width: i32, height: i32) -> Result<Self, EnvironmentError> {
        Self::check_dimensions(width, height)?;
        let open_cells = vec![true; (width * height) as usize];
        Ok(Self::from_occupancy(width, height, open_cells))
    }

    /// A grid with the given circular obstacles rasterized onto it: a cell
    /// is blocked iff its center lies within some obstacle's radius.
    pub fn with_obstacles(
        width: i32,
        height: i32,
        obstacles: &[Obstacle],
    ) -> Result<Self, EnvironmentError> {
        Self::check_dimensions(width, height)?;

        let mut open_cells = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let cell = Coordinate::new(x, y);
                open_cells.push(!obstacles.iter().any(|o| o.contains(cell)));
            }
        }

        Ok(Self::from_occupancy(width, height, open_cells))
    }

    /// Build from in-memory occupancy rows, `true` = open. `rows[0]` is the
    /// visual top of the grid (highest y), so a literal in a test reads like
    /// the maze it describes.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, EnvironmentError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(EnvironmentError::RaggedRows);
        }

        let mut open_cells = Vec::with_capacity(width * height);
        for row in rows.iter().rev() {
            open_cells.extend_from_slice(row);
        }

        Ok(Self::from_occupancy(width as i32, height as i32, open_cells))
    }

    fn from_occupancy(width: i32, height: i32, open_cells: Vec<bool>) -> Self {
        let pheromone = PheromoneField::uniform(width as usize, height as usize, &open_cells);
        Environment {
            width,
            height,
            open_cells,
            pheromone,
        }
    }

    fn check_dimensions(width: i32, height: i32) -> Result<(), EnvironmentError> {
        if width <= 0 || height <= 0 {
            return Err(EnvironmentError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, position: Coordinate) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Whether an ant may stand on this cell.
    pub fn traversable(&self, position: Coordinate) -> bool {
        self.in_bounds(position) && self.open_cells[self.cell_index(position)]
    }

    /// Clamped pheromone read: 0 for out-of-bounds or blocked cells.
    pub fn pheromone_at(&self, position: Coordinate) -> f64 {
        if !self.traversable(position) {
            return 0.0;
        }
        self.pheromone.get(position.x as usize, position.y as usize)
    }

    /// Pheromone levels on all eight neighbors of `position`, with the total
    /// cached in the snapshot.
    pub fn surrounding_pheromone(&self, position: Coordinate) -> SurroundingPheromone {
        let mut levels = [0.0; Direction::COUNT];
        for direction in Direction::ALL {
            levels[direction.index()] = self.pheromone_at(position.step(direction));
        }
        SurroundingPheromone::new(levels)
    }

    /// Uniformly decay the whole field by `rho`.
    pub fn evaporate(&mut self, rho: f64) {
        self.pheromone.evaporate(rho);
    }

    /// Deposit `q / path.len()` on every coordinate the path visits, start
    /// inclusive. A zero-length path deposits nothing; non-traversable
    /// coordinates are skipped so blocked cells stay at exactly 0.
    pub fn deposit_path(&mut self, path: &Path, q: f64) {
        if path.is_empty() {
            return;
        }
        let amount = q / path.len() as f64;
        for &coordinate in path.coordinates() {
            if self.traversable(coordinate) {
                self.pheromone
                    .add(coordinate.x as usize, coordinate.y as usize, amount);
            }
        }
    }

    /// Additive, order-independent batch deposit.
    pub fn deposit_paths(&mut self, paths: &[Path], q: f64) {
        for path in paths {
            self.deposit_path(path, q);
        }
    }

    /// Reinitialize the pheromone field to the uniform prior, leaving the
    /// occupancy untouched.
    pub fn reset(&mut self) {
        self.pheromone = PheromoneField::uniform(
            self.width as usize,
            self.height as usize,
            &self.open_cells,
        );
    }

    fn cell_index(&self, position: Coordinate) -> usize {
        (position.y * self.width + position.x) as usize
    }
}

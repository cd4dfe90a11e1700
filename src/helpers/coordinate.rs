use std::fmt;

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// An integer position on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// The neighboring coordinate one unit move away in `direction`.
    pub fn step(self, direction: Direction) -> Coordinate {
        let (dx, dy) = direction.delta();
        Coordinate::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another coordinate.
    pub fn distance_to(self, other: Coordinate) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Chebyshev (king-move) distance: the minimum number of unit moves
    /// between two cells when diagonals are allowed.
    pub fn chebyshev_to(self, other: Coordinate) -> i32 {
        (other.x - self.x).abs().max((other.y - self.y).abs())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_applies_the_direction_delta() {
        let origin = Coordinate::new(3, 4);
        assert_eq!(origin.step(Direction::North), Coordinate::new(3, 5));
        assert_eq!(origin.step(Direction::SouthWest), Coordinate::new(2, 3));
    }

    #[test]
    fn equality_is_component_wise() {
        assert_eq!(Coordinate::new(1, 2), Coordinate::new(1, 2));
        assert_ne!(Coordinate::new(1, 2), Coordinate::new(2, 1));
    }

    #[test]
    fn distances() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(3, 4);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.chebyshev_to(b), 4);
    }
}

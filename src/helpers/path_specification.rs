use std::fmt;

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// Immutable start/end pair of a shortest path problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSpecification {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl PathSpecification {
    pub const fn new(start: Coordinate, end: Coordinate) -> Self {
        PathSpecification { start, end }
    }
}

impl fmt::Display for PathSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Start: {} End: {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_and_display() {
        let spec = PathSpecification::new(Coordinate::new(0, 0), Coordinate::new(4, 4));
        assert_eq!(
            spec,
            PathSpecification::new(Coordinate::new(0, 0), Coordinate::new(4, 4))
        );
        assert_eq!(spec.to_string(), "Start: 0, 0 End: 4, 4");
    }
}

use serde::{Deserialize, Serialize};

/// The eight king moves an ant can take, in clockwise order from north.
///
/// The grid is y-up: north increases y, east increases x. Every move has
/// unit cost regardless of whether it is cardinal or diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Number of directions in the active set.
    pub const COUNT: usize = 8;

    /// All directions, clockwise. Array position matches `index()`.
    pub const ALL: [Direction; Direction::COUNT] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit displacement vector of this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// Stable position of this direction within `ALL`.
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_indexed_consistently() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), i);
        }
    }

    #[test]
    fn deltas_are_unit_king_moves() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!((dx, dy) != (0, 0));
        }
    }

    #[test]
    fn opposite_deltas_cancel() {
        let (nx, ny) = Direction::North.delta();
        let (sx, sy) = Direction::South.delta();
        assert_eq!((nx + sx, ny + sy), (0, 0));

        let (ex, ey) = Direction::NorthEast.delta();
        let (wx, wy) = Direction::SouthWest.delta();
        assert_eq!((ex + wx, ey + wy), (0, 0));
    }
}

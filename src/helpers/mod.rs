//! Value types shared by the pathfinding engine.
//!
//! Pure data: grid coordinates, the king-move direction set, walked paths
//! and the start/end specification of a shortest path problem.

pub mod coordinate;
pub mod direction;
pub mod path;
pub mod path_specification;

pub use coordinate::Coordinate;
pub use direction::Direction;
pub use path::Path;
pub use path_specification::PathSpecification;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dims::Dims;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Wall,
    Floor,
}

impl CellState {
    pub fn is_wall(self) -> bool {
        self == CellState::Wall
    }

    pub fn is_floor(self) -> bool {
        self == CellState::Floor
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellState::Wall => write!(f, "wall"),
            CellState::Floor => write!(f, "floor"),
        }
    }
}

/// Axis-aligned step between two orthogonally adjacent cells.
///
/// `y` grows upwards, same as the tile maps the grid is usually painted onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// All four directions, in the order neighbors are scanned during carving.
    ///
    /// The order is part of the reproducibility contract: changing it changes every seeded maze.
    pub const fn get_in_order() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Right,
            Direction::Left,
        ]
    }

    pub const fn to_coord(self) -> Dims {
        match self {
            Direction::Up => Dims(0, 1),
            Direction::Down => Dims(0, -1),
            Direction::Right => Dims(1, 0),
            Direction::Left => Dims(-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_offsets_in_scan_order() {
        let offsets = Direction::get_in_order().map(Direction::to_coord);

        assert_eq!(offsets, [Dims(0, 1), Dims(0, -1), Dims(1, 0), Dims(-1, 0)]);
        assert_eq!(offsets.into_iter().fold(Dims::ZERO, |acc, o| acc + o), Dims::ZERO);
    }

    #[test]
    fn default_is_wall() {
        assert!(CellState::default().is_wall());
    }
}

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    array::Array2D,
    cell::{CellState, Direction},
    dims::Dims,
};

/// Occupancy grid the generator works on.
pub type Grid = Array2D<CellState>;

/// Finished maze.
///
/// Produced by [`crate::algorithms::generate`] and read-only afterwards, renderers only query it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    cells: Grid,
    entrance: Dims,
    exit: Dims,
    seed: u64,
}

impl Maze {
    pub(crate) fn new(cells: Grid, entrance: Dims, exit: Dims, seed: u64) -> Self {
        Self {
            cells,
            entrance,
            exit,
            seed,
        }
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn entrance(&self) -> Dims {
        self.entrance
    }

    pub fn exit(&self) -> Dims {
        self.exit
    }

    /// Seed the maze was generated from, generating again with it gives the same maze.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    /// Returns `None` for positions outside of the maze.
    pub fn cell_state(&self, pos: Dims) -> Option<CellState> {
        self.cells.get(pos).copied()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.is_in_bounds(pos)
    }

    pub fn is_floor(&self, pos: Dims) -> bool {
        self.cell_state(pos).is_some_and(CellState::is_floor)
    }

    pub fn is_opening(&self, pos: Dims) -> bool {
        pos == self.entrance || pos == self.exit
    }

    /// Rows from `y = 0` upwards.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.rows()
    }

    pub fn floor_cells(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos().filter(|&pos| self.cells[pos].is_floor())
    }

    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_floor()).count()
    }

    pub fn floor_neighbors(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        floor_neighbors(&self.cells, pos)
    }

    /// Number of orthogonally adjacent floor pairs.
    pub fn floor_edge_count(&self) -> usize {
        self.floor_cells()
            .map(|pos| {
                [Direction::Up, Direction::Right]
                    .into_iter()
                    .filter(|dir| self.is_floor(pos + dir.to_coord()))
                    .count()
            })
            .sum()
    }

    pub fn boundary_floor_cells(&self) -> Vec<Dims> {
        boundary_positions(self.size())
            .filter(|&pos| self.is_floor(pos))
            .collect()
    }

    /// All floor cells are reachable from each other.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.floor_cells().next() else {
            return false;
        };

        let mut visited = Array2D::new(false, self.width(), self.height());
        let mut stack = vec![start];
        let mut reached = 0;
        visited[start] = true;

        while let Some(pos) = stack.pop() {
            reached += 1;
            for next in self.floor_neighbors(pos) {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }

        reached == self.floor_count()
    }

    /// Floor cells form a spanning tree: connected and without any loop.
    pub fn is_perfect(&self) -> bool {
        self.is_connected() && self.floor_edge_count() + 1 == self.floor_count()
    }
}

pub(crate) fn floor_neighbors(grid: &Grid, pos: Dims) -> SmallVec<[Dims; 4]> {
    Direction::get_in_order()
        .into_iter()
        .map(|dir| pos + dir.to_coord())
        .filter(|&next| grid.get(next).is_some_and(|cell| cell.is_floor()))
        .collect()
}

/// Every cell on the outer ring of a grid of the given size, each exactly once.
pub fn boundary_positions(size: Dims) -> impl Iterator<Item = Dims> {
    Dims::iter_fill(Dims::ZERO, size).filter(move |&pos| is_boundary(size, pos))
}

pub fn is_boundary(size: Dims, pos: Dims) -> bool {
    let Dims(x, y) = pos;
    x == 0 || y == 0 || x == size.0 - 1 || y == size.1 - 1
}

use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use super::Random;
use crate::{
    cell::{CellState, Direction},
    dims::Dims,
    maze::Grid,
};

/// Randomized depth-first carve starting at `start`.
///
/// Carves single-cell corridors into a grid full of walls. A cell is only carved when it touches
/// exactly one floor cell, so the carved region always stays a tree. Returns the number of carved
/// cells.
pub fn carve(grid: &mut Grid, start: Dims, rng: &mut Random) -> usize {
    let mut stack = Vec::with_capacity(grid.len() / 2);
    let mut current = start;
    let mut carved = 1;

    grid[current] = CellState::Floor;
    stack.push(current);

    while !stack.is_empty() {
        grid[current] = CellState::Floor;
        let neighbors = valid_neighbors(grid, current);

        if let Some(&next) = neighbors.choose(rng) {
            stack.push(current);
            grid[next] = CellState::Floor;
            stack.push(next);
            current = next;
            carved += 1;
        } else if let Some(prev) = stack.pop() {
            current = prev;
        }
    }

    log::trace!("carved {} cells from {:?}", carved, start);
    carved
}

/// Cells the carve may extend into from `center`, in [`Direction::get_in_order`] order.
///
/// A candidate must lie strictly inside the outer ring, have at least one odd coordinate, still be
/// a wall and have exactly three intact walls around it.
pub fn valid_neighbors(grid: &Grid, center: Dims) -> SmallVec<[Dims; 4]> {
    let size = grid.size();

    Direction::get_in_order()
        .into_iter()
        .map(|dir| center + dir.to_coord())
        .filter(|&pos| {
            is_inside_ring(size, pos)
                && pos.has_odd_coord()
                && grid.get(pos) == Some(&CellState::Wall)
                && has_three_walls_intact(grid, pos)
        })
        .collect()
}

/// Exactly three of the four orthogonal neighbors are walls. Positions outside the grid do not
/// count as walls.
pub fn has_three_walls_intact(grid: &Grid, pos: Dims) -> bool {
    Direction::get_in_order()
        .into_iter()
        .filter(|dir| grid.get(pos + dir.to_coord()) == Some(&CellState::Wall))
        .count()
        == 3
}

fn is_inside_ring(size: Dims, pos: Dims) -> bool {
    pos.0 >= 1 && pos.1 >= 1 && pos.0 < size.0 - 1 && pos.1 < size.1 - 1
}

use rand::Rng as _;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Random;
use crate::{
    cell::CellState,
    dims::Dims,
    maze::{boundary_positions, floor_neighbors, Grid},
};

/// What to do with floor cells on the outer ring, other than the entrance and the exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// Wall every ring cell except the entrance and the exit.
    #[default]
    Seal,
    /// Only wall the old start cell `(1, 0)`, and only when more than two ring cells are open.
    ///
    /// Kept for compatibility with mazes made by the older generator, it can leave other ring
    /// cells open.
    Legacy,
}

/// Opens the entrance and the exit on one of the two diagonal corner pairs.
///
/// Both pairs are equally likely:
/// - entrance `(1, 0)`, exit `(width - 2, height - 1)`
/// - entrance `(width - 2, 0)`, exit `(1, height - 1)`
///
/// The chosen cells become floor no matter what they were before.
pub fn place_entrance_exit(grid: &mut Grid, rng: &mut Random) -> (Dims, Dims) {
    let Dims(width, height) = grid.size();

    let (entrance, exit) = if rng.gen_bool(0.5) {
        (Dims(1, 0), Dims(width - 2, height - 1))
    } else {
        (Dims(width - 2, 0), Dims(1, height - 1))
    };

    grid[entrance] = CellState::Floor;
    grid[exit] = CellState::Floor;

    log::debug!("entrance: {:?}, exit: {:?}", entrance, exit);
    (entrance, exit)
}

/// Links openings that ended up next to a wall with the rest of the maze.
///
/// Only happens on grids with both sides even, where `(width - 2, height - 2)` is a lattice cell.
/// The cell in front of the opening is opened and the extra dead-end spurs around it are walled,
/// so every floor cell stays connected and no loop appears. Returns the walled spurs.
pub fn attach_openings(grid: &mut Grid, entrance: Dims, exit: Dims) -> SmallVec<[Dims; 4]> {
    let mut removed = SmallVec::new();

    for opening in [entrance, exit] {
        let Some(inward) = inward_cell(grid.size(), opening) else {
            continue;
        };
        if grid.get(inward) != Some(&CellState::Wall) {
            continue;
        }

        let links = floor_neighbors(grid, inward)
            .into_iter()
            .filter(|&pos| pos != entrance && pos != exit)
            .collect::<SmallVec<[Dims; 4]>>();
        let Some(&first) = links.first() else {
            log::warn!("opening {:?} has nothing to attach to", opening);
            continue;
        };

        let keep = links
            .iter()
            .copied()
            .find(|&pos| !is_dead_end(grid, pos))
            .unwrap_or(first);

        for &pos in links.iter().filter(|&&pos| pos != keep) {
            if is_dead_end(grid, pos) {
                grid[pos] = CellState::Wall;
                removed.push(pos);
            } else {
                log::warn!("attaching {:?} closes a loop through {:?}", opening, pos);
            }
        }

        grid[inward] = CellState::Floor;
        log::debug!("attached {:?} through {:?}", opening, inward);
    }

    removed
}

/// Applies the boundary policy, returns how many ring cells were walled.
pub fn enforce_boundary_invariant(
    grid: &mut Grid,
    entrance: Dims,
    exit: Dims,
    policy: BoundaryPolicy,
) -> usize {
    let open = boundary_positions(grid.size())
        .filter(|&pos| grid[pos].is_floor())
        .collect::<Vec<_>>();

    let walled = match policy {
        BoundaryPolicy::Seal => {
            let mut walled = 0;
            for pos in open.into_iter().filter(|&pos| pos != entrance && pos != exit) {
                grid[pos] = CellState::Wall;
                walled += 1;
            }
            walled
        }
        BoundaryPolicy::Legacy if open.len() > 2 => {
            grid[LEGACY_START] = CellState::Wall;
            1
        }
        BoundaryPolicy::Legacy => 0,
    };

    if walled > 0 {
        log::debug!("walled {} boundary cells ({:?})", walled, policy);
    }
    walled
}

const LEGACY_START: Dims = Dims(1, 0);

/// Cell one step into the grid from a ring cell.
fn inward_cell(size: Dims, pos: Dims) -> Option<Dims> {
    let Dims(x, y) = pos;
    let inward = if y == 0 {
        Dims(x, 1)
    } else if y == size.1 - 1 {
        Dims(x, size.1 - 2)
    } else if x == 0 {
        Dims(1, y)
    } else if x == size.0 - 1 {
        Dims(size.0 - 2, y)
    } else {
        return None;
    };

    Some(inward)
}

fn is_dead_end(grid: &Grid, pos: Dims) -> bool {
    floor_neighbors(grid, pos).len() == 1
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    fn grid_from_rows(rows: &[&str]) -> Grid {
        let size = Dims(rows[0].len() as i32, rows.len() as i32);
        let mut grid = Grid::new_dims(CellState::Wall, size).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '.' {
                    grid[Dims(x as i32, y as i32)] = CellState::Floor;
                }
            }
        }
        grid
    }

    #[test]
    fn both_corner_pairs_show_up() {
        let mut seen = Vec::new();

        for seed in 0..64 {
            let mut grid = Grid::new(CellState::Wall, 7, 9);
            let mut rng = Random::seed_from_u64(seed);
            let pair = place_entrance_exit(&mut grid, &mut rng);

            assert!(
                pair == (Dims(1, 0), Dims(5, 8)) || pair == (Dims(5, 0), Dims(1, 8)),
                "unexpected pair {:?}",
                pair
            );
            assert!(grid[pair.0].is_floor() && grid[pair.1].is_floor());
            if !seen.contains(&pair) {
                seen.push(pair);
            }
        }

        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn attach_through_lattice_corner() {
        // 4x4 after carving, exit at (2, 3) faces the lattice cell (2, 2)
        let mut grid = grid_from_rows(&["#.##", "#..#", "#.##", "##.#"]);

        let removed = attach_openings(&mut grid, Dims(1, 0), Dims(2, 3));

        assert_eq!(removed.as_slice(), &[Dims(1, 2)]);
        assert_eq!(grid, grid_from_rows(&["#.##", "#..#", "##.#", "##.#"]));
    }

    #[test]
    fn attach_leaves_linked_openings_alone() {
        let rows = ["##.#", "#..#", "#.##", "#.##"];
        let mut grid = grid_from_rows(&rows);

        let removed = attach_openings(&mut grid, Dims(2, 0), Dims(1, 3));

        assert!(removed.is_empty());
        // (2, 0) faces the floor cell (2, 1)
        assert_eq!(grid, grid_from_rows(&rows));
    }

    #[test]
    fn seal_walls_stray_ring_cells() {
        let mut grid = grid_from_rows(&["#.#.#", "#...#", "#.#.#", "#...#", "#.#.#"]);

        let walled =
            enforce_boundary_invariant(&mut grid, Dims(1, 0), Dims(3, 4), BoundaryPolicy::Seal);

        assert_eq!(walled, 2);
        assert!(grid[Dims(1, 0)].is_floor());
        assert!(grid[Dims(3, 4)].is_floor());
        assert!(grid[Dims(3, 0)].is_wall());
        assert!(grid[Dims(1, 4)].is_wall());
    }

    #[test]
    fn legacy_only_walls_old_start() {
        let mut grid = grid_from_rows(&["#.#.#", "#...#", "#.#.#", "#...#", "#.#.#"]);

        let walled =
            enforce_boundary_invariant(&mut grid, Dims(3, 0), Dims(1, 4), BoundaryPolicy::Legacy);

        assert_eq!(walled, 1);
        assert!(grid[Dims(1, 0)].is_wall());
        assert!(grid[Dims(3, 4)].is_floor());
    }

    #[test]
    fn legacy_keeps_two_openings() {
        let rows = ["#.###", "#...#", "###.#"];
        let mut grid = grid_from_rows(&rows);

        let walled =
            enforce_boundary_invariant(&mut grid, Dims(1, 0), Dims(3, 2), BoundaryPolicy::Legacy);

        assert_eq!(walled, 0);
        assert_eq!(grid, grid_from_rows(&rows));
    }
}

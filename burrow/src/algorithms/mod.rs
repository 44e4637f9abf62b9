pub mod backtracker;
pub mod openings;

use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use crate::{
    cell::CellState,
    dims::Dims,
    maze::{Grid, Maze},
};
pub use backtracker::{carve, has_three_walls_intact, valid_neighbors};
pub use openings::{
    attach_openings, enforce_boundary_invariant, place_entrance_exit, BoundaryPolicy,
};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Smallest side length that still leaves an interior cell to carve.
pub const MIN_SIDE: i32 = 3;

/// Where carving starts: the odd-parity interior cell nearest to the origin.
pub const START: Dims = Dims(1, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error(
        "invalid maze dimensions {width}x{height}, both sides must be at least 3 \
         and the cell count must fit in an i32"
    )]
    InvalidDimensions { width: i32, height: i32 },
}

/// Generates a maze of the given size with the default settings.
///
/// Same as `Generator::default().generate(Dims(width, height), Some(seed))`.
pub fn generate(width: i32, height: i32, seed: u64) -> Result<Maze, GeneratorError> {
    Generator::default().generate(Dims(width, height), Some(seed))
}

/// Maze generator.
///
/// Carves a thick-wall maze by randomized depth-first backtracking from [`START`], opens an
/// entrance and an exit on two diagonal corners and then applies the [`BoundaryPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    boundary: BoundaryPolicy,
}

impl Generator {
    pub fn new(boundary: BoundaryPolicy) -> Self {
        Self { boundary }
    }

    pub fn boundary_policy(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Generates a maze of `size`.
    ///
    /// Without a seed, a random one is drawn and stored in the maze, so it can be reproduced.
    pub fn generate(&self, size: Dims, seed: Option<u64>) -> Result<Maze, GeneratorError> {
        validate_size(size)?;

        let seed = seed.unwrap_or_else(|| {
            let seed = thread_rng().gen();
            log::debug!("no seed given, using {}", seed);
            seed
        });
        let mut rng = Random::seed_from_u64(seed);

        let mut grid = Grid::new_dims(CellState::Wall, size)
            .ok_or(GeneratorError::InvalidDimensions {
                width: size.0,
                height: size.1,
            })?;

        let carved = carve(&mut grid, START, &mut rng);
        let (entrance, exit) = place_entrance_exit(&mut grid, &mut rng);
        attach_openings(&mut grid, entrance, exit);
        enforce_boundary_invariant(&mut grid, entrance, exit, self.boundary);

        log::debug!(
            "generated {}x{} maze from seed {}, {} cells carved",
            size.0,
            size.1,
            seed,
            carved
        );

        Ok(Maze::new(grid, entrance, exit, seed))
    }
}

fn validate_size(size: Dims) -> Result<(), GeneratorError> {
    if size.0 < MIN_SIDE || size.1 < MIN_SIDE || size.0.checked_mul(size.1).is_none() {
        return Err(GeneratorError::InvalidDimensions {
            width: size.0,
            height: size.1,
        });
    }

    Ok(())
}

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Integer grid coordinate, `Dims(x, y)`.
///
/// Also used for sizes, where `Dims(width, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    /// Iterates every position in `from..to`, row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    /// At least one of the coordinates is odd.
    ///
    /// Cells with both coordinates even form the permanent wall lattice of a thick-wall maze.
    pub fn has_odd_coord(self) -> bool {
        self.0 % 2 != 0 || self.1 % 2 != 0
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

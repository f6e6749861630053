//! Cubie-level model of a 3x3x3 cube.
//!
//! A [`Cube`] is 26 [`Cubie`]s keyed by [`Position`]. Moves are described by
//! any [`MoveDescriptor`]; [`expand()`] turns one into a list of sticker
//! relocations using the process-wide move tables, and
//! [`Cube::apply_changes()`] performs them.
//!
//! ```
//! use cubie::prelude::*;
//!
//! let mut cube = Cube::new();
//! cube.twist(&Move::new(MoveFace::R)).unwrap();
//! cube.twist(&Move::new(MoveFace::R).inverse()).unwrap();
//! assert!(cube.is_solved());
//! ```

#[macro_use]
extern crate lazy_static;

mod cube;
mod cubie;
mod error;
mod facing;
pub mod moves;
mod position;
mod sticker;
#[cfg(test)]
mod tests;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::cube::{Cube, FACELET_MAP};
    pub use crate::cubie::{Cubie, CubieKind};
    pub use crate::error::CubeError;
    pub use crate::facing::Facing;
    pub use crate::moves::{
        Change, Changes, Move, MoveDescriptor, MoveFace, MoveTables, expand, move_tables,
    };
    pub use crate::position::{POSITIONS, Position, ResolvedLabel};
    pub use crate::sticker::Sticker;
}

/// Number of visible stickers on the cube.
pub const FACELET_COUNT: usize = 54;

/// Number of cubies on the cube, not counting the hidden core.
pub const CUBIE_COUNT: usize = 26;

//! Move descriptors, move tables, and expansion of moves into sticker
//! relocations.

use std::fmt;
use std::str::FromStr;

use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::{CubeError, Facing, Position, ResolvedLabel};

mod registry;
pub mod tables;

pub use registry::{MoveTables, expand, move_tables};

/// Relocation of the stickers named by a source label to the places named by
/// a destination label.
pub type Change = (&'static str, &'static str);

/// Single sticker slot: a cubie position and one of its facings.
pub type Facelet = (Position, Facing);

/// Identifier of a move that has a move table.
#[derive(
    Debug, Display, AsRefStr, EnumCount, EnumIter, EnumString, Copy, Clone, PartialEq, Eq, Hash,
)]
#[allow(missing_docs)]
pub enum MoveFace {
    F,
    B,
    R,
    L,
    U,
    D,
    /// Whole-cube rotation along R.
    X,
    /// Whole-cube rotation along U.
    Y,
    /// Whole-cube rotation along F.
    Z,
}

impl MoveFace {
    /// Returns whether this is a whole-cube rotation rather than a face turn.
    pub fn is_rotation(self) -> bool {
        matches!(self, Self::X | Self::Y | Self::Z)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Description of a move, usually produced by parsing notation such as `R'`
/// or `U2`.
pub trait MoveDescriptor {
    /// Returns the move identifier, one of `F B R L U D X Y Z`.
    fn face(&self) -> &str;
    /// Returns whether the move is counterclockwise.
    fn counterclockwise(&self) -> bool;
    /// Returns whether the move is a half turn.
    fn double(&self) -> bool;
}

/// Concrete move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face or rotation axis.
    pub face: MoveFace,
    /// Whether the move is counterclockwise.
    pub counterclockwise: bool,
    /// Whether the move is a half turn.
    pub double: bool,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if self.double {
            write!(f, "2")?;
        }
        if self.counterclockwise {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl MoveDescriptor for Move {
    fn face(&self) -> &str {
        self.face.as_ref()
    }
    fn counterclockwise(&self) -> bool {
        self.counterclockwise
    }
    fn double(&self) -> bool {
        self.double
    }
}

impl Move {
    /// Constructs a clockwise quarter turn.
    pub fn new(face: MoveFace) -> Self {
        Self {
            face,
            counterclockwise: false,
            double: false,
        }
    }

    /// Returns the inverse move.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            counterclockwise: !self.counterclockwise,
            ..self
        }
    }

    /// Returns the half turn in the same direction.
    #[must_use]
    pub fn doubled(self) -> Self {
        Self {
            double: true,
            ..self
        }
    }
}

/// Expanded move, ready to apply to a [`crate::Cube`].
///
/// Each pass relocates every pair at once: all sources are read before any
/// destination is written. A half turn is the same pairs applied in two
/// passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changes {
    /// Label pairs for one quarter turn.
    pub pairs: Vec<Change>,
    /// Number of times to apply `pairs`.
    pub passes: usize,
}

impl Changes {
    /// Constructs changes for a single quarter turn.
    pub fn quarter(pairs: Vec<Change>) -> Self {
        Self { pairs, passes: 1 }
    }

    /// Resolves every label pair into sticker-level relocations.
    ///
    /// The `i`th letter of a source label pairs with the `i`th letter of its
    /// destination label, so an edge moves both of its stickers and a corner
    /// rotates all three of its stickers together.
    pub fn resolve(&self) -> Result<Vec<(Facelet, Facelet)>, CubeError> {
        let mut relocations = Vec::with_capacity(self.pairs.len() * 3);
        for &(src_label, dst_label) in &self.pairs {
            let src = ResolvedLabel::resolve(src_label)?;
            let dst = ResolvedLabel::resolve(dst_label)?;
            if src.facings.len() != dst.facings.len() {
                return Err(CubeError::UnresolvedLabel(dst_label.to_owned()));
            }
            relocations.extend(
                std::iter::zip(&src.facings, &dst.facings)
                    .map(|(&f1, &f2)| ((src.position, f1), (dst.position, f2))),
            );
        }
        Ok(relocations)
    }
}

/// Parses a move identifier such as `R` or `X`.
fn parse_move_face(s: &str) -> Result<MoveFace, CubeError> {
    MoveFace::from_str(s).map_err(|_| CubeError::UnknownMove(s.to_owned()))
}

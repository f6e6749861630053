use crate::{CubieKind, Facing};

/// Error produced while building or mutating a cube.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// Color code outside `W R B G Y O .`
    #[error("color {0:?} is not one of W, R, B, G, Y, O, .")]
    InvalidColor(char),
    /// Color code string that is not exactly one character
    #[error("color code must be a single character, got {0:?}")]
    BadColorCode(String),
    /// Facing letter outside `F B R L U D`
    #[error("face {0:?} is not one of F, B, R, L, U, D")]
    InvalidFacing(char),
    /// Same facing given twice for one cubie
    #[error("face {0} given more than once")]
    DuplicateFacing(Facing),
    /// Wrong number of stickers for a cubie kind
    #[error("{kind} must have exactly {expected} sticker(s), got {got}")]
    ArityMismatch {
        /// Kind of cubie being built.
        kind: CubieKind,
        /// Required number of stickers.
        expected: usize,
        /// Number of stickers given.
        got: usize,
    },
    /// Flat configuration with the wrong number of symbols
    #[error("cube configuration must have 54 symbols, got {got}")]
    BadConfigurationLength {
        /// Number of symbols given.
        got: usize,
    },
    /// Move identifier with no move table
    #[error("unknown move {0:?}")]
    UnknownMove(String),
    /// Move table label that names no position or facing
    ///
    /// This indicates a bug in the move tables rather than bad input.
    #[error("unresolved move table label {0:?} (this is a bug)")]
    UnresolvedLabel(String),
}

impl CubeError {
    /// Returns whether the error comes from a defect in the move tables
    /// rather than from bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::UnresolvedLabel(_))
    }
}

use std::fmt;

use smallvec::SmallVec;

use crate::{CUBIE_COUNT, CubeError, CubieKind, Facing};

/// Canonical identifiers of the 26 cubie slots, indexed by [`Position`].
///
/// The letters of each identifier are the facings of the cubie in that slot.
#[rustfmt::skip]
pub const POSITIONS: [&str; CUBIE_COUNT] = [
    "FLU", "FU", "FRU", "FL", "F", "FR", "FLD", "FD", "FRD",
    "BLU", "BU", "BRU", "BL", "B", "BR", "BLD", "BD", "BRD",
    "UL", "L", "DL", "UR", "R", "DR", "D", "U",
];

/// One of the 26 fixed cubie slots on the cube.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u8);

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position::{}", self.name())
    }
}
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[allow(missing_docs)]
impl Position {
    pub const FLU: Self = Self(0);
    pub const FU: Self = Self(1);
    pub const FRU: Self = Self(2);
    pub const FL: Self = Self(3);
    pub const F: Self = Self(4);
    pub const FR: Self = Self(5);
    pub const FLD: Self = Self(6);
    pub const FD: Self = Self(7);
    pub const FRD: Self = Self(8);
    pub const BLU: Self = Self(9);
    pub const BU: Self = Self(10);
    pub const BRU: Self = Self(11);
    pub const BL: Self = Self(12);
    pub const B: Self = Self(13);
    pub const BR: Self = Self(14);
    pub const BLD: Self = Self(15);
    pub const BD: Self = Self(16);
    pub const BRD: Self = Self(17);
    pub const UL: Self = Self(18);
    pub const L: Self = Self(19);
    pub const DL: Self = Self(20);
    pub const UR: Self = Self(21);
    pub const R: Self = Self(22);
    pub const DR: Self = Self(23);
    pub const D: Self = Self(24);
    pub const U: Self = Self(25);
}

impl Position {
    /// Returns an iterator over all positions, in the order of [`POSITIONS`].
    pub fn iter() -> impl Iterator<Item = Position> {
        (0..CUBIE_COUNT as u8).map(Self)
    }

    /// Returns the index of the position in [`POSITIONS`].
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the canonical identifier of the position.
    pub fn name(self) -> &'static str {
        POSITIONS[self.index()]
    }

    /// Returns the kind of cubie that occupies the position.
    pub fn kind(self) -> CubieKind {
        match self.name().len() {
            1 => CubieKind::Center,
            2 => CubieKind::Edge,
            _ => CubieKind::Corner,
        }
    }

    /// Returns the facings of the position, in canonical letter order.
    pub fn facings(self) -> impl Iterator<Item = Facing> {
        self.name().chars().filter_map(|c| Facing::from_char(c).ok())
    }

    fn mask(self) -> u8 {
        self.facings().fold(0, |mask, facing| mask | facing.bit())
    }

    /// Returns the position whose canonical identifier is exactly `name`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|p| p.name() == name)
    }

    /// Returns the position named by `label`, whose letters may be in any
    /// order.
    ///
    /// For example, `"FUR"`, `"RFU"`, and `"URF"` all canonicalize to
    /// [`Position::FRU`].
    pub fn canonicalize(label: &str) -> Result<Self, CubeError> {
        let unresolved = || CubeError::UnresolvedLabel(label.to_owned());

        let mut mask = 0_u8;
        let mut len = 0;
        for c in label.chars() {
            let bit = Facing::from_char(c).map_err(|_| unresolved())?.bit();
            if mask & bit != 0 {
                return Err(unresolved());
            }
            mask |= bit;
            len += 1;
        }
        if len == 0 {
            return Err(unresolved());
        }

        Self::iter().find(|p| p.mask() == mask).ok_or_else(unresolved)
    }
}

/// Move table label resolved to a concrete cubie slot.
///
/// `facings` keeps the letter order of the label, which is what pairs the
/// stickers of a source label with those of a destination label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedLabel {
    /// Slot of the cubie named by the label.
    pub position: Position,
    /// Facings in the order they appear in the label.
    pub facings: SmallVec<[Facing; 3]>,
}

impl ResolvedLabel {
    /// Resolves a label such as `"FUR"` to its position and ordered facings.
    pub fn resolve(label: &str) -> Result<Self, CubeError> {
        let position = Position::canonicalize(label)?;
        let facings = label.chars().filter_map(|c| Facing::from_char(c).ok()).collect();
        Ok(Self { position, facings })
    }
}

use std::fmt;

use itertools::Itertools;
use smallvec::SmallVec;
use strum::{Display, IntoEnumIterator};

use crate::{CubeError, Facing, Position, Sticker};

/// Kind of cubie, determined by how many stickers it carries.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CubieKind {
    /// Cubie with 1 sticker.
    Center,
    /// Cubie with 2 stickers.
    Edge,
    /// Cubie with 3 stickers.
    Corner,
}

impl CubieKind {
    /// Returns the number of stickers on a cubie of this kind.
    pub fn sticker_count(self) -> usize {
        match self {
            Self::Center => 1,
            Self::Edge => 2,
            Self::Corner => 3,
        }
    }

    /// Returns the kind of cubie with `count` stickers, or `None` if there is
    /// no such kind.
    pub fn from_sticker_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::Center),
            2 => Some(Self::Edge),
            3 => Some(Self::Corner),
            _ => None,
        }
    }
}

/// Physical piece of the cube, with one sticker per facing.
///
/// Stickers are kept in the order they were given, which for cubies owned by
/// a [`crate::Cube`] is the letter order of the position identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cubie {
    kind: CubieKind,
    facings: SmallVec<[(Facing, Sticker); 3]>,
}

impl fmt::Display for Cubie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stickers = self
            .facings
            .iter()
            .map(|(facing, sticker)| format!("{facing}: {sticker}"))
            .join(", ");
        write!(f, "<{}: {stickers}>", self.kind)
    }
}

impl Cubie {
    /// Constructs a cubie of the given kind from `(facing, color)` letter
    /// pairs.
    ///
    /// Returns an error if the number of pairs does not match `kind`, if any
    /// facing letter is invalid or repeated, or if any color code is invalid.
    pub fn new(
        kind: CubieKind,
        facings: impl IntoIterator<Item = (char, char)>,
    ) -> Result<Self, CubeError> {
        let pairs: SmallVec<[(char, char); 3]> = facings.into_iter().collect();
        if pairs.len() != kind.sticker_count() {
            return Err(CubeError::ArityMismatch {
                kind,
                expected: kind.sticker_count(),
                got: pairs.len(),
            });
        }

        let mut facings = SmallVec::new();
        for (facing_char, color) in pairs {
            let facing = Facing::from_char(facing_char)?;
            if facings.iter().any(|&(f, _)| f == facing) {
                return Err(CubeError::DuplicateFacing(facing));
            }
            facings.push((facing, Sticker::new(color)?));
        }
        Ok(Self { kind, facings })
    }

    /// Constructs a center cubie from one `(facing, color)` pair.
    pub fn center(facings: impl IntoIterator<Item = (char, char)>) -> Result<Self, CubeError> {
        Self::new(CubieKind::Center, facings)
    }
    /// Constructs an edge cubie from two `(facing, color)` pairs.
    pub fn edge(facings: impl IntoIterator<Item = (char, char)>) -> Result<Self, CubeError> {
        Self::new(CubieKind::Edge, facings)
    }
    /// Constructs a corner cubie from three `(facing, color)` pairs.
    pub fn corner(facings: impl IntoIterator<Item = (char, char)>) -> Result<Self, CubeError> {
        Self::new(CubieKind::Corner, facings)
    }

    /// Constructs the cubie that sits at `position` on a solved cube.
    pub(crate) fn solved(position: Position) -> Self {
        Self {
            kind: position.kind(),
            facings: position
                .facings()
                .map(|facing| (facing, Self::facing_to_color(facing)))
                .collect(),
        }
    }

    /// Returns the kind of cubie.
    pub fn kind(&self) -> CubieKind {
        self.kind
    }
    /// Returns the facings of the cubie.
    pub fn faces(&self) -> impl Iterator<Item = Facing> + '_ {
        self.facings.iter().map(|&(facing, _)| facing)
    }
    /// Returns the sticker colors of the cubie, in the same order as
    /// [`Cubie::faces()`].
    pub fn colors(&self) -> impl Iterator<Item = Sticker> + '_ {
        self.facings.iter().map(|&(_, sticker)| sticker)
    }

    /// Returns the sticker on `facing`, or `None` if the cubie has no sticker
    /// there.
    pub fn sticker(&self, facing: Facing) -> Option<Sticker> {
        self.facings
            .iter()
            .find(|&&(f, _)| f == facing)
            .map(|&(_, sticker)| sticker)
    }
    /// Returns a mutable reference to the sticker on `facing`, or `None` if
    /// the cubie has no sticker there.
    pub fn sticker_mut(&mut self, facing: Facing) -> Option<&mut Sticker> {
        self.facings
            .iter_mut()
            .find(|(f, _)| *f == facing)
            .map(|(_, sticker)| sticker)
    }

    /// Returns the color that `facing` has on a solved cube.
    pub fn facing_to_color(facing: Facing) -> Sticker {
        match facing {
            Facing::F => Sticker::Red,
            Facing::B => Sticker::Orange,
            Facing::R => Sticker::Green,
            Facing::L => Sticker::Blue,
            Facing::U => Sticker::Yellow,
            Facing::D => Sticker::White,
        }
    }
    /// Returns the facing that shows `color` on a solved cube, or `None` for
    /// the wildcard.
    pub fn color_to_facing(color: Sticker) -> Option<Facing> {
        Facing::iter().find(|&facing| Self::facing_to_color(facing) == color)
    }
}

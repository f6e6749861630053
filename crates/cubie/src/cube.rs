use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::moves::Facelet;
use crate::{
    CUBIE_COUNT, Changes, CubeError, Cubie, FACELET_COUNT, Facing, MoveDescriptor, Position,
    Sticker, expand,
};

/// Position and facing of each visible sticker, in flat configuration order.
///
/// Faces are in the order U, L, F, R, B, D, and each face is row-major.
/// Changing this breaks compatibility with existing flat configurations.
#[rustfmt::skip]
pub const FACELET_MAP: [Facelet; FACELET_COUNT] = [
    // Up
    (Position::BLU, Facing::U), (Position::BU, Facing::U), (Position::BRU, Facing::U),
    (Position::UL, Facing::U), (Position::U, Facing::U), (Position::UR, Facing::U),
    (Position::FLU, Facing::U), (Position::FU, Facing::U), (Position::FRU, Facing::U),
    // Left
    (Position::BLU, Facing::L), (Position::UL, Facing::L), (Position::FLU, Facing::L),
    (Position::BL, Facing::L), (Position::L, Facing::L), (Position::FL, Facing::L),
    (Position::BLD, Facing::L), (Position::DL, Facing::L), (Position::FLD, Facing::L),
    // Front
    (Position::FLU, Facing::F), (Position::FU, Facing::F), (Position::FRU, Facing::F),
    (Position::FL, Facing::F), (Position::F, Facing::F), (Position::FR, Facing::F),
    (Position::FLD, Facing::F), (Position::FD, Facing::F), (Position::FRD, Facing::F),
    // Right
    (Position::FRU, Facing::R), (Position::UR, Facing::R), (Position::BRU, Facing::R),
    (Position::FR, Facing::R), (Position::R, Facing::R), (Position::BR, Facing::R),
    (Position::FRD, Facing::R), (Position::DR, Facing::R), (Position::BRD, Facing::R),
    // Back
    (Position::BLU, Facing::B), (Position::BU, Facing::B), (Position::BRU, Facing::B),
    (Position::BL, Facing::B), (Position::B, Facing::B), (Position::BR, Facing::B),
    (Position::BLD, Facing::B), (Position::BD, Facing::B), (Position::BRD, Facing::B),
    // Down
    (Position::FLD, Facing::D), (Position::FD, Facing::D), (Position::FRD, Facing::D),
    (Position::DL, Facing::D), (Position::D, Facing::D), (Position::DR, Facing::D),
    (Position::BLD, Facing::D), (Position::BD, Facing::D), (Position::BRD, Facing::D),
];

/// State of a 3x3x3 cube, tracked per cubie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    /// Cubie in each slot, indexed by [`Position::index()`].
    cubies: Vec<Cubie>,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &(position, facing) in &FACELET_MAP {
            match self.cubie(position).sticker(facing) {
                Some(sticker) => write!(f, "{sticker}")?,
                None => return Err(fmt::Error),
            }
        }
        Ok(())
    }
}

impl FromStr for Cube {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cube = Self::new();
        cube.load_flat(s)?;
        Ok(cube)
    }
}

impl Cube {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        let cubies = Position::iter().map(Cubie::solved).collect_vec();
        debug_assert_eq!(cubies.len(), CUBIE_COUNT);
        Self { cubies }
    }

    /// Returns the cubie at `position`.
    pub fn cubie(&self, position: Position) -> &Cubie {
        &self.cubies[position.index()]
    }

    /// Returns the sticker at a facelet, or `None` if the cubie at `position`
    /// has no sticker on `facing`.
    pub fn sticker(&self, position: Position, facing: Facing) -> Option<Sticker> {
        self.cubie(position).sticker(facing)
    }
    fn resolved_sticker(&self, (position, facing): Facelet) -> Result<Sticker, CubeError> {
        self.sticker(position, facing)
            .ok_or_else(|| unresolved_facelet(position, facing))
    }
    fn sticker_mut(&mut self, (position, facing): Facelet) -> Result<&mut Sticker, CubeError> {
        self.cubies[position.index()]
            .sticker_mut(facing)
            .ok_or_else(|| unresolved_facelet(position, facing))
    }

    /// Overwrites every visible sticker from a flat configuration of 54 color
    /// codes, in the order of [`FACELET_MAP`].
    ///
    /// The cube is left unmodified if the configuration is invalid. The
    /// resulting state is not checked for reachability.
    pub fn load_flat(&mut self, configuration: &str) -> Result<(), CubeError> {
        let got = configuration.chars().count();
        if got != FACELET_COUNT {
            return Err(CubeError::BadConfigurationLength { got });
        }
        let stickers = configuration
            .chars()
            .map(Sticker::new)
            .collect::<Result<Vec<_>, _>>()?;
        for (&facelet, sticker) in std::iter::zip(&FACELET_MAP, stickers) {
            *self.sticker_mut(facelet)? = sticker;
        }
        Ok(())
    }

    /// Returns the flat configuration of the cube: 54 uppercase color codes in
    /// the order of [`FACELET_MAP`].
    pub fn dump_flat(&self) -> String {
        self.to_string()
    }

    /// Returns whether each face of the cube shows a single color.
    pub fn is_solved(&self) -> bool {
        FACELET_MAP.chunks(9).all(|face| {
            face.iter()
                .map(|&(position, facing)| self.cubie(position).sticker(facing))
                .all_equal()
        })
    }

    /// Applies expanded changes to the cube.
    ///
    /// Every label is resolved before any sticker moves, so an unresolved
    /// label leaves the cube unmodified. Within each pass, all stickers are
    /// read before any are written.
    pub fn apply_changes(&mut self, changes: &Changes) -> Result<(), CubeError> {
        let relocations = changes.resolve()?;
        log::trace!(
            "applying {} sticker relocations in {} pass(es)",
            relocations.len(),
            changes.passes,
        );
        for _ in 0..changes.passes {
            let stickers = relocations
                .iter()
                .map(|&(src, _)| self.resolved_sticker(src))
                .collect::<Result<Vec<_>, _>>()?;
            for (&(_, dst), sticker) in std::iter::zip(&relocations, stickers) {
                *self.sticker_mut(dst)? = sticker;
            }
        }
        Ok(())
    }

    /// Expands a move using the global move tables and applies it.
    pub fn twist(&mut self, m: &(impl MoveDescriptor + ?Sized)) -> Result<(), CubeError> {
        let changes = expand(m)?;
        self.apply_changes(&changes)
    }
}

fn unresolved_facelet(position: Position, facing: Facing) -> CubeError {
    CubeError::UnresolvedLabel(format!("{position}:{facing}"))
}

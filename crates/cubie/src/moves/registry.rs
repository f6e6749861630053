use strum::EnumCount;

use super::tables::{AXIS_DERIVATIONS, FACE_CHANGES};
use super::{Change, Changes, Move, MoveDescriptor, MoveFace, parse_move_face};
use crate::CubeError;

lazy_static! {
    /// Global move tables, built on first use and never modified afterward.
    static ref MOVE_TABLES: Result<MoveTables, CubeError> = MoveTables::build()
        .inspect_err(|e| log::error!("error building move tables: {e}"));
}

/// Returns the global move tables, building them if this is the first call.
///
/// Returns an error if the tables contain a label that does not resolve.
pub fn move_tables() -> Result<&'static MoveTables, CubeError> {
    MOVE_TABLES.as_ref().map_err(CubeError::clone)
}

/// Expands a move into the changes that perform it, using the global move
/// tables.
pub fn expand(m: &(impl MoveDescriptor + ?Sized)) -> Result<Changes, CubeError> {
    move_tables()?.expand(m)
}

/// Clockwise quarter-turn changes for every move identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTables {
    tables: [Vec<Change>; MoveFace::COUNT],
}

impl MoveTables {
    /// Builds the move tables.
    ///
    /// The six face tables are built first because the rotation tables are
    /// derived from their expansions.
    pub fn build() -> Result<Self, CubeError> {
        let mut tables: [Vec<Change>; MoveFace::COUNT] = Default::default();

        // Phase 1: literal face tables.
        for (face, changes) in FACE_CHANGES {
            tables[face.index()] = changes.to_vec();
        }

        // Phase 2: rotations. Only face tables are read here.
        for (axis, face, opposite, slice) in AXIS_DERIVATIONS {
            let mut changes = expand_changes(&tables[face.index()], &Move::new(face)).pairs;
            changes.extend(
                expand_changes(&tables[opposite.index()], &Move::new(opposite).inverse()).pairs,
            );
            changes.extend_from_slice(slice);
            tables[axis.index()] = changes;
        }

        let this = Self { tables };

        // Resolve every label once so that a bad table is reported here
        // instead of partway through a solve.
        for table in &this.tables {
            Changes::quarter(table.clone()).resolve()?;
        }

        log::debug!(
            "built move tables with {} label pairs",
            this.tables.iter().map(Vec::len).sum::<usize>(),
        );

        Ok(this)
    }

    /// Returns the clockwise quarter-turn changes for `face`.
    pub fn changes(&self, face: MoveFace) -> &[Change] {
        &self.tables[face.index()]
    }

    /// Expands a move into the changes that perform it.
    ///
    /// Returns [`CubeError::UnknownMove`] if the move identifier has no table.
    pub fn expand(&self, m: &(impl MoveDescriptor + ?Sized)) -> Result<Changes, CubeError> {
        let face = parse_move_face(m.face())?;
        Ok(expand_changes(self.changes(face), m))
    }
}

/// Inverts and doubles a clockwise quarter-turn table according to `m`.
fn expand_changes(base: &[Change], m: &(impl MoveDescriptor + ?Sized)) -> Changes {
    let pairs = if m.counterclockwise() {
        base.iter().map(|&(src, dst)| (dst, src)).collect()
    } else {
        base.to_vec()
    };
    Changes {
        pairs,
        passes: if m.double() { 2 } else { 1 },
    }
}

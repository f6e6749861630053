//! Literal move tables.
//!
//! Each pair `(src, dst)` moves the sticker facing `src[i]` on the cubie at
//! `src` to facing `dst[i]` on the cubie at `dst`, for every letter index `i`,
//! when the move is done clockwise. Label letter order matters; position
//! lookup does not depend on it.

use super::{Change, MoveFace};

/// Clockwise quarter turn of each face: one 4-cycle of corners followed by
/// one 4-cycle of edges.
pub const FACE_CHANGES: [(MoveFace, [Change; 8]); 6] = [
    (
        MoveFace::F,
        [
            ("FLU", "FUR"),
            ("FUR", "FRD"),
            ("FRD", "FDL"),
            ("FDL", "FLU"),
            ("FU", "FR"),
            ("FR", "FD"),
            ("FD", "FL"),
            ("FL", "FU"),
        ],
    ),
    (
        MoveFace::B,
        [
            ("BLU", "BDL"),
            ("BDL", "BRD"),
            ("BRD", "BUR"),
            ("BUR", "BLU"),
            ("BU", "BL"),
            ("BL", "BD"),
            ("BD", "BR"),
            ("BR", "BU"),
        ],
    ),
    (
        MoveFace::R,
        [
            ("RFU", "RUB"),
            ("RUB", "RBD"),
            ("RBD", "RDF"),
            ("RDF", "RFU"),
            ("RU", "RB"),
            ("RB", "RD"),
            ("RD", "RF"),
            ("RF", "RU"),
        ],
    ),
    (
        MoveFace::L,
        [
            ("LFU", "LDF"),
            ("LDF", "LBD"),
            ("LBD", "LUB"),
            ("LUB", "LFU"),
            ("LU", "LF"),
            ("LF", "LD"),
            ("LD", "LB"),
            ("LB", "LU"),
        ],
    ),
    (
        MoveFace::U,
        [
            ("ULB", "UBR"),
            ("UBR", "URF"),
            ("URF", "UFL"),
            ("UFL", "ULB"),
            ("UB", "UR"),
            ("UR", "UF"),
            ("UF", "UL"),
            ("UL", "UB"),
        ],
    ),
    (
        MoveFace::D,
        [
            ("DFL", "DRF"),
            ("DRF", "DBR"),
            ("DBR", "DLB"),
            ("DLB", "DFL"),
            ("DF", "DR"),
            ("DR", "DB"),
            ("DB", "DL"),
            ("DL", "DF"),
        ],
    ),
];

/// Middle slice edges and centers carried along by `X`, which is otherwise
/// `R` followed by `L'`.
pub const X_SLICE_CHANGES: [Change; 8] = [
    ("FU", "UB"),
    ("UB", "BD"),
    ("BD", "DF"),
    ("DF", "FU"),
    ("F", "U"),
    ("U", "B"),
    ("B", "D"),
    ("D", "F"),
];

/// Equator slice edges and centers carried along by `Y`, which is otherwise
/// `U` followed by `D'`.
pub const Y_SLICE_CHANGES: [Change; 8] = [
    ("FR", "LF"),
    ("LF", "BL"),
    ("BL", "RB"),
    ("RB", "FR"),
    ("F", "L"),
    ("L", "B"),
    ("B", "R"),
    ("R", "F"),
];

/// Standing slice edges and centers carried along by `Z`, which is otherwise
/// `F` followed by `B'`.
pub const Z_SLICE_CHANGES: [Change; 8] = [
    ("UL", "RU"),
    ("RU", "DR"),
    ("DR", "LD"),
    ("LD", "UL"),
    ("U", "R"),
    ("R", "D"),
    ("D", "L"),
    ("L", "U"),
];

/// Derivation of each whole-cube rotation: the face turned clockwise, the
/// opposite face turned counterclockwise, and the slice pairs.
pub const AXIS_DERIVATIONS: [(MoveFace, MoveFace, MoveFace, &[Change; 8]); 3] = [
    (MoveFace::X, MoveFace::R, MoveFace::L, &X_SLICE_CHANGES),
    (MoveFace::Y, MoveFace::U, MoveFace::D, &Y_SLICE_CHANGES),
    (MoveFace::Z, MoveFace::F, MoveFace::B, &Z_SLICE_CHANGES),
];

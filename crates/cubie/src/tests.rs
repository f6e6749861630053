use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::IntoEnumIterator;

use crate::moves::tables::{X_SLICE_CHANGES, Y_SLICE_CHANGES, Z_SLICE_CHANGES};
use crate::*;

const SOLVED: &str = "YYYYYYYYYBBBBBBBBBRRRRRRRRRGGGGGGGGGOOOOOOOOOWWWWWWWWW";

fn twisted(moves: &[Move]) -> Cube {
    let mut cube = Cube::new();
    for m in moves {
        cube.twist(m).unwrap();
    }
    cube
}

fn face_moves() -> impl Iterator<Item = MoveFace> {
    MoveFace::iter().filter(|face| !face.is_rotation())
}

#[test]
fn test_single_face_turns() {
    let expected = [
        (MoveFace::F, "YYYYYYBBBBBWBBWBBWRRRRRRRRRYGGYGGYGGOOOOOOOOOGGGWWWWWW"),
        (MoveFace::B, "GGGYYYYYYYBBYBBYBBRRRRRRRRRGGWGGWGGWOOOOOOOOOWWWWWWBBB"),
        (MoveFace::R, "YYRYYRYYRBBBBBBBBBRRWRRWRRWGGGGGGGGGOOYOOYOOYWWOWWOWWO"),
        (MoveFace::L, "OYYOYYOYYBBBBBBBBBYRRYRRYRRGGGGGGGGGWOOWOOWOORWWRWWRWW"),
        (MoveFace::U, "YYYYYYYYYRRRBBBBBBGGGRRRRRROOOGGGGGGBBBOOOOOOWWWWWWWWW"),
        (MoveFace::D, "YYYYYYYYYBBBBBBOOORRRRRRBBBGGGGGGRRROOOOOOGGGWWWWWWWWW"),
    ];
    for (face, flat) in expected {
        assert_eq!(twisted(&[Move::new(face)]).dump_flat(), flat, "{face}");
    }
}

#[test]
fn test_rotations() {
    let expected = [
        (MoveFace::X, "RRRRRRRRRBBBBBBBBBWWWWWWWWWGGGGGGGGGYYYYYYYYYOOOOOOOOO"),
        (MoveFace::Y, "YYYYYYYYYRRRRRRRRRGGGGGGGGGOOOOOOOOOBBBBBBBBBWWWWWWWWW"),
        (MoveFace::Z, "BBBBBBBBBWWWWWWWWWRRRRRRRRRYYYYYYYYYOOOOOOOOOGGGGGGGGG"),
    ];
    for (face, flat) in expected {
        let cube = twisted(&[Move::new(face)]);
        assert_eq!(cube.dump_flat(), flat, "{face}");
        assert!(cube.is_solved());
    }
}

#[test]
fn test_sequence() {
    let r = Move::new(MoveFace::R);
    let u = Move::new(MoveFace::U);
    assert_eq!(
        twisted(&[r, u]).dump_flat(),
        "YYYYYYRRRRRWBBBBBBGGGRRWRRWYOOGGGGGGBBBOOYOOYWWOWWOWWO",
    );
    assert_eq!(
        twisted(&[r.doubled()]).dump_flat(),
        "YYWYYWYYWBBBBBBBBBRRORRORROGGGGGGGGGOOROOROORWWYWWYWWY",
    );
}

#[test]
fn test_order_four() {
    for face in MoveFace::iter() {
        let m = Move::new(face);
        let mut cube = twisted(&[Move::new(MoveFace::R), Move::new(MoveFace::F)]);
        let before = cube.clone();
        for i in 1..=4 {
            cube.twist(&m).unwrap();
            assert_eq!(cube == before, i == 4, "{face} x{i}");
        }
    }
}

#[test]
fn test_inverse() {
    for face in MoveFace::iter() {
        let m = Move::new(face);
        let scrambled = twisted(&[Move::new(MoveFace::L), Move::new(MoveFace::D).inverse()]);

        let mut cube = scrambled.clone();
        cube.twist(&m).unwrap();
        cube.twist(&m.inverse()).unwrap();
        assert_eq!(cube.dump_flat(), scrambled.dump_flat(), "{face}");

        let mut cube = scrambled.clone();
        cube.twist(&m.inverse()).unwrap();
        cube.twist(&m).unwrap();
        assert_eq!(cube.dump_flat(), scrambled.dump_flat(), "{face}");
    }
}

#[test]
fn test_double() {
    for face in MoveFace::iter() {
        let m = Move::new(face);
        assert_eq!(twisted(&[m.doubled()]), twisted(&[m, m]), "{face}");
        assert_eq!(
            twisted(&[m.doubled().inverse()]),
            twisted(&[m.doubled()]),
            "{face}",
        );
    }
}

#[test]
fn test_axis_composition() {
    let tables = move_tables().unwrap();
    let derivations = [
        (MoveFace::X, MoveFace::R, MoveFace::L, X_SLICE_CHANGES),
        (MoveFace::Y, MoveFace::U, MoveFace::D, Y_SLICE_CHANGES),
        (MoveFace::Z, MoveFace::F, MoveFace::B, Z_SLICE_CHANGES),
    ];
    for (axis, face, opposite, slice) in derivations {
        let start = twisted(&[Move::new(MoveFace::F), Move::new(MoveFace::U)]);

        let mut expected = start.clone();
        expected.twist(&Move::new(face)).unwrap();
        expected.twist(&Move::new(opposite).inverse()).unwrap();
        expected
            .apply_changes(&Changes::quarter(slice.to_vec()))
            .unwrap();

        let mut actual = start.clone();
        actual
            .apply_changes(&tables.expand(&Move::new(axis)).unwrap())
            .unwrap();
        assert_eq!(actual.dump_flat(), expected.dump_flat(), "{axis}");
    }
}

#[test]
fn test_solved_cube_counts() {
    let cube = twisted(&[
        Move::new(MoveFace::R),
        Move::new(MoveFace::U).inverse(),
        Move::new(MoveFace::B).doubled(),
        Move::new(MoveFace::Z),
    ]);
    let flat = cube.dump_flat();
    for color in "WRBGYO".chars() {
        assert_eq!(flat.chars().filter(|&c| c == color).count(), 9, "{color}");
    }
    assert_ne!(flat, SOLVED);
}

fn arbitrary_move() -> impl Strategy<Value = Move> {
    let faces = MoveFace::iter().collect::<Vec<_>>();
    (prop::sample::select(faces), any::<bool>(), any::<bool>()).prop_map(
        |(face, counterclockwise, double)| Move {
            face,
            counterclockwise,
            double,
        },
    )
}

proptest! {
    #[test]
    fn proptest_flat_round_trip(moves in prop::collection::vec(arbitrary_move(), 0..20)) {
        let cube = twisted(&moves);
        let mut copy = Cube::new();
        copy.load_flat(&cube.dump_flat()).unwrap();
        prop_assert_eq!(copy, cube);
    }

    #[test]
    fn proptest_undo_sequence(moves in prop::collection::vec(arbitrary_move(), 0..20)) {
        let mut cube = twisted(&moves);
        for m in moves.iter().rev() {
            cube.twist(&m.inverse()).unwrap();
        }
        prop_assert_eq!(cube.dump_flat(), SOLVED);
    }

    #[test]
    fn proptest_double_is_two_quarters(
        moves in prop::collection::vec(arbitrary_move(), 0..10),
        m in arbitrary_move(),
    ) {
        let quarter = Move { double: false, ..m };
        let mut a = twisted(&moves);
        let mut b = a.clone();
        a.twist(&quarter.doubled()).unwrap();
        b.twist(&quarter).unwrap();
        b.twist(&quarter).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn test_face_turns_keep_centers() {
    for face in face_moves() {
        let cube = twisted(&[Move::new(face), Move::new(face).doubled()]);
        for position in Position::iter().filter(|p| p.kind() == CubieKind::Center) {
            assert_eq!(cube.cubie(position), Cube::new().cubie(position), "{face}");
        }
    }
}

//! Direction vectors and precomputed target tables for leaper pieces.
//!
//! All deltas are `(rank delta, file delta)`. Table entries keep the order of
//! their offset list, so generated moves come out in a fixed order.

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, -2),
    (-1, -2),
    (2, -1),
    (-2, -1),
    (2, 1),
    (-2, 1),
    (1, 2),
    (-1, 2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, -1),
    (0, -1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

pub(crate) const DIAGONALS: [(isize, isize); 4] = [(1, -1), (-1, -1), (1, 1), (-1, 1)];

pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];

pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    DIAGONALS[0],
    DIAGONALS[1],
    DIAGONALS[2],
    DIAGONALS[3],
    ORTHOGONALS[0],
    ORTHOGONALS[1],
    ORTHOGONALS[2],
    ORTHOGONALS[3],
];

pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_targets(&KNIGHT_OFFSETS));

pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_targets(&KING_OFFSETS));

fn leaper_targets(offsets: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        offsets
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
}

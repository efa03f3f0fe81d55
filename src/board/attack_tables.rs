//! Lazily built per-square move tables.
//!
//! Each table stores destination squares precomputed from (Δrank, Δfile)
//! deltas, so generation and attack detection never re-derive edge wraps at
//! runtime. The delta lists mirror the engine's fixed index-offset orders
//! (knight: -17, -15, -10, -6, 6, 10, 15, 17; king: -9..9; rays: orthogonal
//! then diagonal), which keeps move enumeration order deterministic.

use once_cell::sync::Lazy;

use super::types::Square;

/// Knight jump deltas in offset order -17, -15, -10, -6, 6, 10, 15, 17.
const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King step deltas in offset order -9, -8, -7, -1, 1, 7, 8, 9.
const KING_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Sliding directions in offset order -8, -1, 1, 8, -9, -7, 7, 9.
/// The first four are orthogonal (rook), the last four diagonal (bishop).
const RAY_DELTAS: [(isize, isize); 8] = [
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub(crate) const ROOK_DIRS: std::ops::Range<usize> = 0..4;
pub(crate) const BISHOP_DIRS: std::ops::Range<usize> = 4..8;
pub(crate) const QUEEN_DIRS: std::ops::Range<usize> = 0..8;

/// Index of the first diagonal direction in [`RAY_DELTAS`].
pub(crate) const FIRST_DIAGONAL_DIR: usize = 4;

fn offset(square: usize, delta: (isize, isize)) -> Option<Square> {
    let rank = square as isize / 8 + delta.0;
    let file = square as isize % 8 + delta.1;
    if (0..8).contains(&rank) && (0..8).contains(&file) {
        Some(Square::new(rank as usize, file as usize))
    } else {
        None
    }
}

fn step_targets(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|sq| deltas.iter().filter_map(|&d| offset(sq, d)).collect())
}

/// Knight destinations for every square.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| step_targets(&KNIGHT_DELTAS));

/// King destinations for every square.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| step_targets(&KING_DELTAS));

/// Sliding rays for every square: `RAYS[sq][dir]` walks outward until the
/// board edge, in the direction order of [`RAY_DELTAS`].
pub(crate) static RAYS: Lazy<[[Vec<Square>; 8]; 64]> = Lazy::new(|| {
    std::array::from_fn(|sq| {
        std::array::from_fn(|dir| {
            let delta = RAY_DELTAS[dir];
            let mut ray = Vec::new();
            let mut current = sq;
            while let Some(next) = offset(current, delta) {
                ray.push(next);
                current = next.index();
            }
            ray
        })
    })
});

/// Squares from which a pawn of the given side attacks the indexed square,
/// indexed `[side][square]`. A white pawn attacks from one rank below, a
/// black pawn from one rank above.
pub(crate) static PAWN_ATTACK_SOURCES: Lazy<[[Vec<Square>; 64]; 2]> = Lazy::new(|| {
    let sources_for = |rank_delta: isize| -> [Vec<Square>; 64] {
        std::array::from_fn(|sq| {
            [(rank_delta, -1), (rank_delta, 1)]
                .iter()
                .filter_map(|&d| offset(sq, d))
                .collect()
        })
    };
    [sources_for(-1), sources_for(1)]
});

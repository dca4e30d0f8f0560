//! Precomputed attack tables.
//!
//! Leapers (knight, king, pawn) use per-square lookup tables. Sliders walk
//! rays until the first blocker.

use once_cell::sync::Lazy;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn leaper_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut mask = 0u64;
        for &(dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << ((nr as usize) * 8 + (nf as usize));
            }
        }
        *slot = mask;
    }
    attacks
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// Pawn capture targets, indexed `[color][square]` (White=0 attacks north).
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    [
        leaper_table(&[(1, -1), (1, 1)]),
        leaper_table(&[(-1, -1), (-1, 1)]),
    ]
});

/// Squares attacked by a slider on `square` along `directions`, stopping at
/// (and including) the first occupied square on each ray.
pub(crate) fn slider_attacks(square: usize, occupied: u64, directions: &[(isize, isize)]) -> u64 {
    let r = (square / 8) as isize;
    let f = (square % 8) as isize;
    let mut attacks = 0u64;
    for &(dr, df) in directions {
        let mut nr = r + dr;
        let mut nf = f + df;
        while (0..8).contains(&nr) && (0..8).contains(&nf) {
            let bit = 1u64 << ((nr as usize) * 8 + (nf as usize));
            attacks |= bit;
            if occupied & bit != 0 {
                break;
            }
            nr += dr;
            nf += df;
        }
    }
    attacks
}

//! Zobrist hashing for chess positions.
//!
//! Provides incrementally-updatable 64-bit position hashes.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastlingRights, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[color][piece][square]
    pub(crate) piece_keys: [[[u64; 64]; 6]; 2],
    pub(crate) black_to_move_key: u64,
    // indexed by the raw castling bitmask (0-15)
    pub(crate) castling_keys: [u64; 16],
    // en_passant_keys[file]
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // fixed seed for reproducible hashes
        let mut piece_keys = [[[0; 64]; 6]; 2];
        let mut castling_keys = [0; 16];
        let mut en_passant_keys = [0; 8];

        for color in &mut piece_keys {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        // Index 0 (no rights) hashes to zero so an empty mask contributes nothing
        for key in castling_keys.iter_mut().skip(1) {
            *key = rng.gen();
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[color.index()][piece.index()][sq.as_index()]
    }

    #[inline]
    pub(crate) fn castling(&self, rights: CastlingRights) -> u64 {
        self.castling_keys[rights.as_u8() as usize]
    }

    #[inline]
    pub(crate) fn en_passant(&self, sq: Square) -> u64 {
        self.en_passant_keys[sq.file()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

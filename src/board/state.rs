use crate::zobrist::ZOBRIST;

use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// State needed to take back a move made with [`Board::make_move`].
#[derive(Clone, Debug)]
pub struct UnmakeInfo {
    pub(crate) captured: Option<(Color, Piece)>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    pub(crate) previous_hash: u64,
}

/// A chess position: piece placement plus side to move, castling rights,
/// en passant target and move counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64, // Zobrist hash
}

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board.hash = board.calculate_hash();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Bitboard of one piece kind for one side
    #[inline]
    #[must_use]
    pub fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// Bitboard of every piece belonging to `color`
    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    /// The piece standing on `sq`, if any
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !self.all_occupied.contains(sq) {
            return None;
        }
        let color = if self.occupied[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        Piece::ALL
            .into_iter()
            .find(|piece| self.pieces_of(color, *piece).contains(sq))
            .map(|piece| (color, piece))
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = Bitboard::from_square(sq).0;
        self.pieces[color.index()][piece.index()].0 |= bit;
        self.occupied[color.index()].0 |= bit;
        self.all_occupied.0 |= bit;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = !Bitboard::from_square(sq).0;
        self.pieces[color.index()][piece.index()].0 &= bit;
        self.occupied[color.index()].0 &= bit;
        self.all_occupied.0 &= bit;
    }

    /// Hash recomputed from scratch; always equal to the incremental `hash()`
    pub(crate) fn calculate_hash(&self) -> u64 {
        let mut hash = 0u64;
        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.pieces_of(color, piece).iter() {
                    hash ^= ZOBRIST.piece(color, piece, sq);
                }
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.black_to_move_key;
        }
        hash ^= ZOBRIST.castling(self.castling_rights);
        if let Some(ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant(ep);
        }
        hash
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

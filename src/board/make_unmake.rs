use crate::zobrist::ZOBRIST;

use super::{Board, CastlingRights, Color, Move, Piece, Square, UnmakeInfo};

/// Rook home corners and the castling right each one guards
const ROOK_CORNERS: [(Square, Color, bool); 4] = [
    (Square(0, 0), Color::White, false),
    (Square(0, 7), Color::White, true),
    (Square(7, 0), Color::Black, false),
    (Square(7, 7), Color::Black, true),
];

/// Rook origin and destination for a castling move landing on `king_to`
fn castling_rook_squares(king_to: Square, kingside: bool) -> (Square, Square) {
    let rank = king_to.rank();
    if kingside {
        (Square(rank, 7), Square(rank, 5))
    } else {
        (Square(rank, 0), Square(rank, 3))
    }
}

/// Square of the pawn removed by an en passant capture
fn en_passant_victim(mv: Move) -> Square {
    Square(mv.from().rank(), mv.to().file())
}

fn updated_castling_rights(
    mut rights: CastlingRights,
    color: Color,
    moving: Piece,
    mv: Move,
) -> CastlingRights {
    if moving == Piece::King {
        rights.remove(color, true);
        rights.remove(color, false);
    }
    // Anything leaving or landing on a rook corner ends that right
    for (corner, owner, kingside) in ROOK_CORNERS {
        if mv.from() == corner || mv.to() == corner {
            rights.remove(owner, kingside);
        }
    }
    rights
}

impl Board {
    /// Play `mv` on the board and return what is needed to take it back.
    ///
    /// `mv` must come from [`Board::generate_moves`] for this position.
    ///
    /// # Panics
    /// Panics if the origin square of `mv` is empty.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let color = self.side_to_move;
        let opponent = color.opponent();
        let (from, to) = (mv.from(), mv.to());

        let info = UnmakeInfo {
            captured: None,
            previous_en_passant_target: self.en_passant_target,
            previous_castling_rights: self.castling_rights,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
            previous_hash: self.hash,
        };

        let mut hash = self.hash ^ ZOBRIST.castling(self.castling_rights);
        if let Some(ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant(ep);
        }

        let (_, moving) = self
            .piece_at(from)
            .expect("make_move called with an empty origin square");

        let captured = if mv.is_en_passant() {
            let victim = en_passant_victim(mv);
            self.remove_piece(victim, opponent, Piece::Pawn);
            hash ^= ZOBRIST.piece(opponent, Piece::Pawn, victim);
            Some((opponent, Piece::Pawn))
        } else if mv.is_castling() {
            None
        } else if let Some((cap_color, cap_piece)) = self.piece_at(to) {
            self.remove_piece(to, cap_color, cap_piece);
            hash ^= ZOBRIST.piece(cap_color, cap_piece, to);
            Some((cap_color, cap_piece))
        } else {
            None
        };

        self.remove_piece(from, color, moving);
        hash ^= ZOBRIST.piece(color, moving, from);
        let placed = mv.promotion().unwrap_or(moving);
        self.set_piece(to, color, placed);
        hash ^= ZOBRIST.piece(color, placed, to);

        if mv.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(to, mv.is_castle_kingside());
            self.remove_piece(rook_from, color, Piece::Rook);
            self.set_piece(rook_to, color, Piece::Rook);
            hash ^= ZOBRIST.piece(color, Piece::Rook, rook_from);
            hash ^= ZOBRIST.piece(color, Piece::Rook, rook_to);
        }

        self.castling_rights = updated_castling_rights(self.castling_rights, color, moving, mv);
        hash ^= ZOBRIST.castling(self.castling_rights);

        self.en_passant_target = if mv.is_double_pawn_push() {
            let ep = Square((from.rank() + to.rank()) / 2, from.file());
            hash ^= ZOBRIST.en_passant(ep);
            Some(ep)
        } else {
            None
        };

        if moving == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = opponent;
        hash ^= ZOBRIST.black_to_move_key;
        self.hash = hash;

        UnmakeInfo { captured, ..info }
    }

    /// Take back `mv`, which must be the last move made with `info` as its result.
    ///
    /// # Panics
    /// Panics if the destination square of `mv` is empty.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        self.side_to_move = self.side_to_move.opponent();
        let color = self.side_to_move;
        let (from, to) = (mv.from(), mv.to());

        let (_, placed) = self
            .piece_at(to)
            .expect("unmake_move called with an empty destination square");
        self.remove_piece(to, color, placed);
        let original = if mv.is_promotion() { Piece::Pawn } else { placed };
        self.set_piece(from, color, original);

        if mv.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(to, mv.is_castle_kingside());
            self.remove_piece(rook_to, color, Piece::Rook);
            self.set_piece(rook_from, color, Piece::Rook);
        }

        if let Some((cap_color, cap_piece)) = info.captured {
            let sq = if mv.is_en_passant() {
                en_passant_victim(mv)
            } else {
                to
            };
            self.set_piece(sq, cap_color, cap_piece);
        }

        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
        self.hash = info.previous_hash;
    }
}

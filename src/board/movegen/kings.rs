use super::super::attack_tables::{
    slider_attacks, BISHOP_DIRECTIONS, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS,
    ROOK_DIRECTIONS,
};
use super::super::{Bitboard, Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let own_occ = self.occupied_by(color).0;
        let targets = Bitboard(KING_ATTACKS[from.as_index()] & !own_occ);
        self.push_targets(from, targets, moves);

        // Attacked squares are filtered in generate_moves
        let rank = color.back_rank();
        if from != Square(rank, 4) {
            return;
        }
        let rook_home = |file| self.piece_at(Square(rank, file)) == Some((color, Piece::Rook));
        if self.castling_rights.has(color, true)
            && self.is_empty(Square(rank, 5))
            && self.is_empty(Square(rank, 6))
            && rook_home(7)
        {
            moves.push(Move::castle_kingside(from, Square(rank, 6)));
        }
        if self.castling_rights.has(color, false)
            && self.is_empty(Square(rank, 1))
            && self.is_empty(Square(rank, 2))
            && self.is_empty(Square(rank, 3))
            && rook_home(0)
        {
            moves.push(Move::castle_queenside(from, Square(rank, 2)));
        }
    }

    /// Square of `color`'s king, if it has one
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, Piece::King).iter().next()
    }

    /// True if any piece of `attacker` attacks `square`
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let idx = square.as_index();
        let pieces = |piece| self.pieces_of(attacker, piece).0;

        // A pawn of `attacker` hits `square` iff a defender pawn on `square` would hit it
        if pieces(Piece::Pawn) & PAWN_ATTACKS[attacker.opponent().index()][idx] != 0 {
            return true;
        }
        if pieces(Piece::Knight) & KNIGHT_ATTACKS[idx] != 0 {
            return true;
        }
        if pieces(Piece::King) & KING_ATTACKS[idx] != 0 {
            return true;
        }

        let occupied = self.all_occupied.0;
        let rook_like = pieces(Piece::Rook) | pieces(Piece::Queen);
        if slider_attacks(idx, occupied, &ROOK_DIRECTIONS) & rook_like != 0 {
            return true;
        }
        let bishop_like = pieces(Piece::Bishop) | pieces(Piece::Queen);
        slider_attacks(idx, occupied, &BISHOP_DIRECTIONS) & bishop_like != 0
    }

    pub(crate) fn is_king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// True when the side to move is in check
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }
}

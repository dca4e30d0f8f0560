use super::super::attack_tables::PAWN_ATTACKS;
use super::super::{Bitboard, Board, Move, MoveList, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        // A pawn never stands on its promotion rank, so one step forward is on the board
        let Some(forward) = from.offset(dir, 0) else {
            return;
        };

        if self.is_empty(forward) {
            if forward.rank() == promotion_rank {
                for piece in PROMOTION_PIECES {
                    moves.push(Move::promotion_to(from, forward, piece, false));
                }
            } else {
                moves.push(Move::quiet(from, forward));
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::double_pawn_push(from, double));
                        }
                    }
                }
            }
        }

        let enemy = self.occupied_by(color.opponent());
        let attacks = Bitboard(PAWN_ATTACKS[color.index()][from.as_index()]);
        for target in attacks.iter() {
            if enemy.contains(target) {
                if target.rank() == promotion_rank {
                    for piece in PROMOTION_PIECES {
                        moves.push(Move::promotion_to(from, target, piece, true));
                    }
                } else {
                    moves.push(Move::capture(from, target));
                }
            } else if Some(target) == self.en_passant_target {
                moves.push(Move::en_passant(from, target));
            }
        }
    }
}

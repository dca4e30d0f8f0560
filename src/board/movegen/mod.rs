//! Legal move generation.
//!
//! Moves are generated pseudo-legally per piece kind, then filtered by
//! making each one and rejecting those that leave the mover's king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Bitboard, Board, Move, MoveList, Piece, Square};

impl Board {
    fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;

        for from in self.pieces_of(color, Piece::Pawn).iter() {
            self.generate_pawn_moves(from, &mut moves);
        }
        for from in self.pieces_of(color, Piece::Knight).iter() {
            self.generate_knight_moves(from, &mut moves);
        }
        for piece in [Piece::Bishop, Piece::Rook, Piece::Queen] {
            for from in self.pieces_of(color, piece).iter() {
                self.generate_slider_moves(from, piece, &mut moves);
            }
        }
        for from in self.pieces_of(color, Piece::King).iter() {
            self.generate_king_moves(from, &mut moves);
        }
        moves
    }

    /// Quiet move or capture depending on what stands on `to`
    pub(crate) fn push_targets(&self, from: Square, targets: Bitboard, moves: &mut MoveList) {
        let enemy = self.occupied_by(self.side_to_move.opponent());
        for to in targets.iter() {
            if enemy.contains(to) {
                moves.push(Move::capture(from, to));
            } else {
                moves.push(Move::quiet(from, to));
            }
        }
    }

    /// All legal moves for the side to move.
    pub fn generate_moves(&mut self) -> MoveList {
        let color = self.side_to_move;
        let opponent = color.opponent();
        let mut legal_moves = MoveList::new();

        for mv in self.generate_pseudo_moves() {
            if mv.is_castling() {
                // The king may not castle out of or through check
                let transit = Square(mv.from().rank(), (mv.from().file() + mv.to().file()) / 2);
                if self.is_square_attacked(mv.from(), opponent)
                    || self.is_square_attacked(transit, opponent)
                {
                    continue;
                }
            }

            let info = self.make_move(mv);
            if !self.is_king_attacked(color) {
                legal_moves.push(mv);
            }
            self.unmake_move(mv, info);
        }
        log::trace!("{} legal moves for {}", legal_moves.len(), color);
        legal_moves
    }

    /// True when the side to move is checkmated
    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check() && self.generate_moves().is_empty()
    }

    /// True when the side to move has no legal move but is not in check
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check() && self.generate_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let info = self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv, info);
        }
        nodes
    }
}

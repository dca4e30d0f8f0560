use super::super::attack_tables::{slider_attacks, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Bitboard, Board, MoveList, Piece, Square};

/// Attack set of a bishop, rook or queen on `from` given the occupancy.
fn slider_targets(from: Square, piece: Piece, occupied: u64) -> u64 {
    let idx = from.as_index();
    match piece {
        Piece::Bishop => slider_attacks(idx, occupied, &BISHOP_DIRECTIONS),
        Piece::Rook => slider_attacks(idx, occupied, &ROOK_DIRECTIONS),
        Piece::Queen => {
            slider_attacks(idx, occupied, &BISHOP_DIRECTIONS)
                | slider_attacks(idx, occupied, &ROOK_DIRECTIONS)
        }
        _ => 0,
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let own_occ = self.occupied_by(self.side_to_move).0;
        let targets = slider_targets(from, piece, self.all_occupied.0) & !own_occ;
        self.push_targets(from, Bitboard(targets), moves);
    }
}

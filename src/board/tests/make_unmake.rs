//! Make/unmake move tests.

use super::{board, find_move};
use crate::board::{Board, CastlingRights, Color, Piece, Square};

#[test]
fn test_en_passant_make_unmake() {
    let mut board = board("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let before = board.clone();
    let mv = find_move(&mut board, Square(4, 4), Square(5, 5), None);
    assert!(mv.is_en_passant());

    let info = board.make_move(mv);
    assert_eq!(board.piece_at(Square(4, 5)), None, "captured pawn removed");
    assert_eq!(board.piece_at(Square(5, 5)), Some((Color::White, Piece::Pawn)));

    board.unmake_move(mv, info);
    assert_eq!(board, before);
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = board("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let before = board.clone();
    let mv = find_move(&mut board, Square(6, 0), Square(7, 0), Some(Piece::Queen));

    let info = board.make_move(mv);
    assert_eq!(board.piece_at(Square(7, 0)), Some((Color::White, Piece::Queen)));
    assert_eq!(board.pieces_of(Color::White, Piece::Pawn).popcount(), 0);

    board.unmake_move(mv, info);
    assert_eq!(board, before);
    assert_eq!(board.piece_at(Square(6, 0)), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_promotion_capture_make_unmake() {
    let mut board = board("1r5k/P7/8/8/8/8/8/K7 w - - 0 1");
    let before = board.clone();
    let mv = find_move(&mut board, Square(6, 0), Square(7, 1), Some(Piece::Knight));
    assert!(mv.is_capture());

    let info = board.make_move(mv);
    assert_eq!(board.piece_at(Square(7, 1)), Some((Color::White, Piece::Knight)));
    assert_eq!(board.occupied_by(Color::Black).popcount(), 1);

    board.unmake_move(mv, info);
    assert_eq!(board, before);
}

#[test]
fn test_castling_make_unmake() {
    let mut board = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let before = board.clone();

    let kingside = find_move(&mut board, Square(0, 4), Square(0, 6), None);
    let info = board.make_move(kingside);
    assert_eq!(board.piece_at(Square(0, 6)), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(Square(0, 5)), Some((Color::White, Piece::Rook)));
    assert_eq!(board.piece_at(Square(0, 7)), None);
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(!board.castling_rights().has(Color::White, false));
    assert!(board.castling_rights().has(Color::Black, true));
    board.unmake_move(kingside, info);
    assert_eq!(board, before);

    let queenside = find_move(&mut board, Square(0, 4), Square(0, 2), None);
    let info = board.make_move(queenside);
    assert_eq!(board.piece_at(Square(0, 2)), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(Square(0, 3)), Some((Color::White, Piece::Rook)));
    assert_eq!(board.piece_at(Square(0, 0)), None);
    board.unmake_move(queenside, info);
    assert_eq!(board, before);
}

#[test]
fn test_rook_moves_clear_castling_rights() {
    let mut board = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    board.make_move_uci("h1h8").unwrap(); // rook takes rook on the opposite corner
    let rights = board.castling_rights();
    assert!(!rights.has(Color::White, true));
    assert!(rights.has(Color::White, false));
    assert!(!rights.has(Color::Black, true));
    assert!(rights.has(Color::Black, false));
    assert_eq!(rights.to_string(), "Qq");
}

#[test]
fn test_counters_advance() {
    let mut board = Board::new();
    board.make_move_uci("g1f3").unwrap();
    assert_eq!(board.halfmove_clock(), 1);
    assert_eq!(board.fullmove_number(), 1);
    board.make_move_uci("g8f6").unwrap();
    assert_eq!(board.halfmove_clock(), 2);
    assert_eq!(board.fullmove_number(), 2);
    board.make_move_uci("e2e4").unwrap();
    assert_eq!(board.halfmove_clock(), 0, "pawn move resets the clock");
    board.make_move_uci("f6e4").unwrap();
    assert_eq!(board.halfmove_clock(), 0, "capture resets the clock");
    assert_eq!(board.fullmove_number(), 3);
}

#[test]
fn test_en_passant_target_only_after_double_push() {
    let mut board = Board::new();
    board.make_move_uci("e2e4").unwrap();
    assert_eq!(board.en_passant_target(), Some(Square(2, 4)));
    board.make_move_uci("e7e6").unwrap();
    assert_eq!(board.en_passant_target(), None);
}

#[test]
fn test_hash_tracks_recomputed_value() {
    let mut board = Board::new();
    for token in ["e2e4", "d7d5", "e4d5", "g8f6", "f1b5", "c7c6", "d5c6", "d8d2", "b1d2"] {
        board.make_move_uci(token).unwrap();
        assert_eq!(board.hash(), board.calculate_hash(), "after {token}");
    }
}

#[test]
fn test_transposition_hashes_equal() {
    let mut a = Board::new();
    let mut b = Board::new();
    for token in ["g1f3", "g8f6", "b1c3"] {
        a.make_move_uci(token).unwrap();
    }
    for token in ["b1c3", "g8f6", "g1f3"] {
        b.make_move_uci(token).unwrap();
    }
    assert_eq!(a.hash(), b.hash());
    assert_eq!(a.to_fen(), b.to_fen());
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::new();
    let mut initial: Vec<String> = board.generate_moves().iter().map(|m| m.to_string()).collect();

    for mv in board.generate_moves() {
        let info = board.make_move(mv);
        board.unmake_move(mv, info);
    }

    let mut after: Vec<String> = board.generate_moves().iter().map(|m| m.to_string()).collect();
    initial.sort();
    after.sort();
    assert_eq!(initial, after);
    assert_eq!(board.castling_rights(), CastlingRights::all());
}

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, Move, Piece, Square};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidCounter {
        found: field.to_string(),
    })
}

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The half-move clock and full-move number are optional and default to
    /// `0` and `1`.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|n| (1..=8).contains(n)) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::new(rank, file).ok_or(FenError::BadRankWidth {
                    rank: rank + 1,
                    files: file + 1,
                })?;
                board.set_piece(sq, color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadRankWidth {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => rights.set(Color::White, true),
                    'Q' => rights.set(Color::White, false),
                    'k' => rights.set(Color::Black, true),
                    'q' => rights.set(Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }
        board.castling_rights = rights;

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let sq = parts[3]
                .parse::<Square>()
                .map_err(|_| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?;
            // White to move captures onto rank 6, Black onto rank 3
            let expected_rank = match board.side_to_move {
                Color::White => 5,
                Color::Black => 2,
            };
            if sq.rank() != expected_rank {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
            Some(sq)
        };

        if let Some(field) = parts.get(4) {
            board.halfmove_clock = parse_counter(field)?;
        }
        if let Some(field) = parts.get(5) {
            board.fullmove_number = parse_counter(field)?.max(1);
        }

        board.hash = board.calculate_hash();
        Ok(board)
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move() { "w" } else { "b" };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use board_replay::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = uci.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let square = |file: char, rank: char| -> Result<Square, MoveParseError> {
            let mut notation = String::with_capacity(2);
            notation.push(file);
            notation.push(rank);
            notation
                .parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: uci.to_string(),
                })
        };
        let from_sq = square(chars[0], chars[1])?;
        let to_sq = square(chars[2], chars[3])?;

        let promotion = match chars.get(4) {
            None => None,
            Some(&c) => match Piece::from_char(c) {
                Some(piece @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => {
                    Some(piece)
                }
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.generate_moves()
            .into_iter()
            .find(|mv| mv.from() == from_sq && mv.to() == to_sq && mv.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
    }

    /// Parse a UCI move and make it on the board in one call.
    ///
    /// # Example
    /// ```
    /// use board_replay::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_uci("e2e4").unwrap();
    /// board.make_move_uci("e7e5").unwrap();
    /// ```
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(uci)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_fen_matches_new() {
        let board = Board::try_from_fen(START_FEN).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(Board::new().to_fen(), START_FEN);
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert!(!board.white_to_move());
        assert_eq!(board.en_passant_target(), Some(Square(2, 4)));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_counters() {
        let board = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - 42 17").unwrap();
        assert_eq!(board.halfmove_clock(), 42);
        assert_eq!(board.fullmove_number(), 17);

        let short = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - -").unwrap();
        assert_eq!(short.halfmove_clock(), 0);
        assert_eq!(short.fullmove_number(), 1);
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::TooFewParts { found: 2 })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_fen_error_rank_shape() {
        let seven = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(seven, Err(FenError::WrongRankCount { found: 7 })));

        let wide = Board::try_from_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(wide, Err(FenError::BadRankWidth { rank: 7, .. })));

        let narrow = Board::try_from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(narrow, Err(FenError::BadRankWidth { rank: 7, files: 7 })));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { char: 'X' })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));

        let wrong_rank =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1");
        assert!(matches!(wrong_rank, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_en_passant_must_match_side_to_move() {
        let white_on_e3 =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e3 0 1");
        assert!(matches!(white_on_e3, Err(FenError::InvalidEnPassant { .. })));

        let black_on_d6 =
            Board::try_from_fen("rnbqkbnr/ppp1pppp/8/3p4/8/8/PPPPPPPP/RNBQKBNR b KQkq d6 0 1");
        assert!(matches!(black_on_d6, Err(FenError::InvalidEnPassant { .. })));

        let white_on_d6 =
            Board::try_from_fen("rnbqkbnr/ppp1pppp/8/3p4/8/8/PPPPPPPP/RNBQKBNR w KQkq d6 0 1");
        assert_eq!(white_on_d6.unwrap().en_passant_target(), Some(Square(5, 3)));
    }

    #[test]
    fn test_fen_error_empty_count_out_of_range() {
        let zero = Board::try_from_fen("rnbqkbnr/pppp0pppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(zero, Err(FenError::InvalidPiece { char: '0' })));

        let nine = Board::try_from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(nine, Err(FenError::InvalidPiece { char: '9' })));
    }

    #[test]
    fn test_fen_error_invalid_counter() {
        let result = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - x 1");
        assert!(matches!(result, Err(FenError::InvalidCounter { .. })));
    }

    #[test]
    fn test_fen_partial_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        let rights = board.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
    }

    #[test]
    fn test_parse_move_e2e4() {
        let mut board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        assert_eq!(mv.from(), Square(1, 4));
        assert_eq!(mv.to(), Square(3, 4));
        assert!(mv.is_double_pawn_push());
    }

    #[test]
    fn test_parse_move_promotion() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = board.parse_move("a7a8q").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Queen));
        let upper = board.parse_move("a7a8N").unwrap();
        assert_eq!(upper.promotion(), Some(Piece::Knight));
    }

    #[test]
    fn test_parse_move_promotion_requires_letter() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let result = board.parse_move("a7a8");
        assert!(matches!(result, Err(MoveParseError::IllegalMove { .. })));
    }

    #[test]
    fn test_parse_move_error_invalid_length() {
        let mut board = Board::new();
        assert!(matches!(
            board.parse_move("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            board.parse_move("e2e4qq"),
            Err(MoveParseError::InvalidLength { len: 6 })
        ));
    }

    #[test]
    fn test_parse_move_error_invalid_square() {
        let mut board = Board::new();
        let result = board.parse_move("z9z9");
        assert!(matches!(result, Err(MoveParseError::InvalidSquare { .. })));
    }

    #[test]
    fn test_parse_move_error_illegal() {
        let mut board = Board::new();
        let result = board.parse_move("e2e5"); // Pawn can't move 3 squares
        assert!(matches!(result, Err(MoveParseError::IllegalMove { .. })));
    }

    #[test]
    fn test_parse_move_error_invalid_promotion() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        for token in ["a7a8p", "a7a8k", "a7a8x"] {
            assert!(matches!(
                board.parse_move(token),
                Err(MoveParseError::InvalidPromotion { .. })
            ));
        }
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = START_FEN.parse().unwrap();
        assert!(board.white_to_move());
    }

    #[test]
    fn test_make_move_uci() {
        let mut board = Board::new();
        board.make_move_uci("e2e4").unwrap();
        assert!(!board.white_to_move());
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }
}

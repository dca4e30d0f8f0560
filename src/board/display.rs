//! Plain-text board diagram.

use std::fmt;

use super::{Board, Square};

/// Character drawn for an empty square
pub const EMPTY_SQUARE: char = '.';

impl Board {
    /// Render the position as eight lines of eight characters, rank 8 first.
    ///
    /// White pieces are uppercase, Black lowercase, empty squares `.`. The
    /// text has no trailing newline.
    ///
    /// # Example
    /// ```
    /// use board_replay::board::Board;
    ///
    /// let text = Board::new().render();
    /// assert_eq!(text.lines().next(), Some("rnbqkbnr"));
    /// assert_eq!(text.lines().last(), Some("RNBQKBNR"));
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(8 * 9);
        for rank in (0..8).rev() {
            for file in 0..8 {
                let c = self
                    .piece_at(Square(rank, file))
                    .map_or(EMPTY_SQUARE, |(color, piece)| piece.to_fen_char(color));
                out.push(c);
            }
            if rank > 0 {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

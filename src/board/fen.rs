use super::Board;

use crate::core::*;
use thiserror::Error;

/******************************************\
|==========================================|
|            Useful fen strings            |
|==========================================|
\******************************************/

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/******************************************\
|==========================================|
|                Parse Fen                 |
|==========================================|
\******************************************/

impl Board {
    /// Parses a FEN string into a board.
    ///
    /// Only piece placement and the side-to-move field are modeled; castling,
    /// en passant and the move clocks are accepted and discarded. A missing
    /// side-to-move field defaults to White.
    pub fn from_fen(fen: &str) -> Result<Self, FenParseError> {
        let mut parts = fen.split(' ');

        let placement = parts.next().ok_or(FenParseError::MissingPlacement)?;

        let mut board = Board::new();

        if let Some(side_to_move) = parts.next() {
            board.set_stm(if side_to_move == "w" {
                Colour::White
            } else {
                Colour::Black
            });
        }

        board.parse_placement(placement)?;

        Ok(board)
    }

    fn parse_placement(&mut self, placement: &str) -> Result<(), FenParseError> {
        let ranks: Vec<&str> = placement.split('/').collect();

        if ranks.len() != 8 {
            return Err(FenParseError::InvalidRankCount(ranks.len()));
        }

        let mut rank = 8;
        for rank_str in ranks {
            // Textual length check only; digit runs that overshoot 8 files
            // (e.g. "9") are accepted looseness of the format
            if rank_str.len() > 8 {
                return Err(FenParseError::RankTooLong(rank_str.len()));
            }

            let mut file = 1;
            for current_char in rank_str.chars() {
                if let Some(skip) = current_char.to_digit(10) {
                    file += skip as i32;
                    continue;
                }

                let piece = Piece::from_fen_char(current_char)?;
                self.add_piece(PlacedPiece::new(Position::new(file, rank), piece));
                file += 1;
            }
            rank -= 1;
        }

        Ok(())
    }
}

/******************************************\
|==========================================|
|              Serialize Fen               |
|==========================================|
\******************************************/

impl Board {
    /// Serializes the board back to FEN.
    ///
    /// Castling, en passant and the clocks are not modeled and always emit
    /// the placeholder tail `- - 0 1`.
    pub fn fen(&self) -> String {
        let mut grid: [[Option<Piece>; 8]; 8] = [[None; 8]; 8];

        for placed in self.board_pieces() {
            if !placed.position.is_valid() {
                continue;
            }
            let row = (8 - placed.position.rank) as usize;
            let col = (placed.position.file - 1) as usize;
            grid[row][col] = Some(placed.piece);
        }

        let mut rank_strings = Vec::with_capacity(8);
        for row in &grid {
            let mut rank_str = String::new();
            let mut empty_count = 0;

            for piece in row {
                match piece {
                    Some(piece) => {
                        if empty_count > 0 {
                            rank_str.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        rank_str.push(piece.fen_char());
                    }
                    None => {
                        empty_count += 1;
                    }
                }
            }
            if empty_count > 0 {
                rank_str.push_str(&empty_count.to_string());
            }

            rank_strings.push(rank_str);
        }

        let to_play = match self.stm() {
            Colour::White => "w",
            Colour::Black => "b",
        };

        format!("{} {} - - 0 1", rank_strings.join("/"), to_play)
    }
}

/******************************************\
|==========================================|
|             Fen Parse Errors             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenParseError {
    #[error("FEN must contain at least piece placement data")]
    MissingPlacement,
    #[error("FEN placement must have 8 ranks, found {0}")]
    InvalidRankCount(usize),
    #[error("FEN rank must have at most 8 files, has {0}")]
    RankTooLong(usize),
    #[error(transparent)]
    InvalidPiece(#[from] ParsePieceError),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_fen() {
        let board = Board::from_fen(START_FEN).unwrap();

        assert_eq!(board.stm(), Colour::White);
        assert_eq!(board.board_pieces().len(), 32);

        let whites = board
            .board_pieces()
            .iter()
            .filter(|placed| placed.piece.colour == Colour::White)
            .count();
        let blacks = board
            .board_pieces()
            .iter()
            .filter(|placed| placed.piece.colour == Colour::Black)
            .count();
        assert_eq!(whites, 16);
        assert_eq!(blacks, 16);

        let a1 = "a1".parse::<Position>().unwrap();
        assert_eq!(
            board.on(a1),
            Some(Piece::new(Colour::White, PieceType::Rook))
        );
        let h8 = "h8".parse::<Position>().unwrap();
        assert_eq!(
            board.on(h8),
            Some(Piece::new(Colour::Black, PieceType::Rook))
        );
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        // First pass normalizes the tail fields, after that the FEN is stable
        let board = Board::from_fen(START_FEN).unwrap();
        let normalized = board.fen();
        assert_eq!(
            normalized,
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
        );

        let reparsed = Board::from_fen(&normalized).unwrap();
        assert_eq!(reparsed.fen(), normalized);
    }

    #[test]
    fn test_round_trip_preserves_side_to_move() {
        let fen = "8/8/8/3q4/8/8/8/4K3 b - - 0 1";
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.stm(), Colour::Black);
        assert_eq!(board.fen(), fen);
    }

    #[test]
    fn test_missing_side_to_move_defaults_to_white() {
        let board = Board::from_fen("8/8/8/8/8/8/8/8").unwrap();
        assert_eq!(board.stm(), Colour::White);
    }

    #[test]
    fn test_non_w_side_to_move_is_black() {
        let board = Board::from_fen("8/8/8/8/8/8/8/8 b").unwrap();
        assert_eq!(board.stm(), Colour::Black);
    }

    #[test]
    fn test_empty_rank_emits_single_count() {
        let board = Board::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let fen = board.fen();
        assert!(fen.starts_with("8/8/8/8/8/8/8/4K3"));
        assert!(!fen.contains("44"));
        assert!(!fen.contains("1111"));
    }

    #[test]
    fn test_partial_empty_runs_within_rank() {
        let board = Board::from_fen("8/8/8/2r2N2/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(board.fen(), "8/8/8/2r2N2/8/8/8/8 w - - 0 1");
    }

    #[test]
    fn test_empty_fen_fails() {
        assert!(matches!(
            Board::from_fen(""),
            Err(FenParseError::InvalidRankCount(1))
        ));
    }

    #[test]
    fn test_seven_ranks_fails() {
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenParseError::InvalidRankCount(7))
        ));
    }

    #[test]
    fn test_nine_ranks_fails() {
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenParseError::InvalidRankCount(9))
        ));
    }

    #[test]
    fn test_rank_longer_than_eight_chars_fails() {
        assert!(matches!(
            Board::from_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"),
            Err(FenParseError::RankTooLong(9))
        ));
    }

    #[test]
    fn test_invalid_piece_char_fails() {
        assert!(matches!(
            Board::from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"),
            Err(FenParseError::InvalidPiece(ParsePieceError::InvalidChar(
                'x'
            )))
        ));
    }

    #[test]
    fn test_overshooting_digit_run_is_accepted() {
        // "9" passes the textual length check; the format's accepted looseness
        let board = Board::from_fen("9/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert!(board.board_pieces().is_empty());
    }

    #[test]
    fn test_duplicate_squares_are_kept() {
        // Two skip-less pieces can stack through a malformed rank; both stay,
        // lookup returns the first in parse order
        let board = Board::from_fen("8/8/8/8/8/8/8/R7 w - - 0 1").unwrap();
        let mut stacked = Board::new();
        for placed in board.board_pieces() {
            stacked.add_piece(*placed);
            stacked.add_piece(*placed);
        }
        assert_eq!(stacked.board_pieces().len(), 2);

        let a1 = "a1".parse::<Position>().unwrap();
        assert_eq!(
            stacked.on(a1),
            Some(Piece::new(Colour::White, PieceType::Rook))
        );
    }

    #[test]
    fn test_castling_fields_are_normalized_away() {
        let board = Board::from_fen(START_FEN).unwrap();
        assert!(board.fen().ends_with(" w - - 0 1"));
    }
}

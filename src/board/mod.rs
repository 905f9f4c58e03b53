pub mod fen;

pub use fen::{FenParseError, START_FEN};

use crate::core::*;

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// # Board representation
///
/// - An unordered collection of placed pieces plus the side to move and a
///   free-text annotation set by the problem loader

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<PlacedPiece>,

    stm: Colour,

    info: String,
}

/// Listing order used when grouping pieces for display. This is a fixed
/// display priority, distinct from [`Position`]'s own ordering.
#[rustfmt::skip]
pub const DISPLAY_ORDER: [PieceType; PieceType::NUM] = [
    PieceType::King, PieceType::Queen, PieceType::Rook,
    PieceType::Bishop, PieceType::Knight, PieceType::Pawn,
];

/******************************************\
|==========================================|
|           Basic Implementation           |
|==========================================|
\******************************************/

impl Default for Board {
    fn default() -> Board {
        Board::from_fen(START_FEN).unwrap()
    }
}

impl Board {
    pub fn new() -> Board {
        Board {
            pieces: Vec::new(),
            stm: Colour::White,
            info: String::new(),
        }
    }

    /// Side to move
    #[inline]
    pub fn stm(&self) -> Colour {
        self.stm
    }

    pub(crate) fn set_stm(&mut self, stm: Colour) {
        self.stm = stm;
    }

    pub(crate) fn add_piece(&mut self, placed: PlacedPiece) {
        self.pieces.push(placed);
    }

    /// The first piece found on `position`, if any. Storage order decides
    /// between duplicates (possible only through malformed FENs).
    pub fn on(&self, position: Position) -> Option<Piece> {
        self.pieces
            .iter()
            .find(|placed| placed.position == position)
            .map(|placed| placed.piece)
    }

    /// All placed pieces in insertion/parse order
    pub fn board_pieces(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    pub fn set_info(&mut self, info: &str) {
        self.info = info.to_string();
    }

    pub fn info(&self) -> &str {
        &self.info
    }
}

/******************************************\
|==========================================|
|                 Rotation                 |
|==========================================|
\******************************************/

impl Board {
    /// Rotates the board 180 degrees and flips whose turn it is.
    ///
    /// Every piece moves to the mirrored square and changes colour; the two
    /// transformations always happen together, never independently.
    pub fn rotate(&mut self) {
        self.stm = !self.stm;

        for placed in &mut self.pieces {
            placed.position.rank = 9 - placed.position.rank;
            placed.position.file = 9 - placed.position.file;
            placed.piece.colour = !placed.piece.colour;
        }
    }
}

/******************************************\
|==========================================|
|              Piece Listing               |
|==========================================|
\******************************************/

impl Board {
    /// The pieces of one colour and type, rendered and joined with ", "
    pub fn piece_list(&self, colour: Colour, pt: PieceType, notation: Notation) -> String {
        let texts: Vec<String> = self
            .pieces
            .iter()
            .filter(|placed| placed.piece.colour == colour && placed.piece.pt == pt)
            .map(|placed| placed.to_text(notation))
            .collect();

        texts.join(", ")
    }

    /// Multi-line summary for the quiz layer: FEN, pieces grouped by colour
    /// in display order, side to move and (optionally) the annotation.
    pub fn render(&self, show_info: bool, notation: Notation) -> String {
        let mut out = String::new();

        out.push_str(&format!("FEN: {}\n", self.fen()));

        for colour in [Colour::White, Colour::Black] {
            out.push_str(match colour {
                Colour::White => "White:\n",
                Colour::Black => "Black:\n",
            });
            for pt in DISPLAY_ORDER {
                let list = self.piece_list(colour, pt, notation);
                if !list.is_empty() {
                    out.push_str(&format!(" - {}\n", list));
                }
            }
        }

        out.push_str(match self.stm {
            Colour::White => "White to move\n",
            Colour::Black => "Black to move\n",
        });

        if show_info && !self.info.is_empty() {
            out.push_str(&format!("Info: {}\n", self.info));
        }

        out
    }
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
    fn test_on_start_position() {
        let board = Board::default();

        let e1 = "e1".parse::<Position>().unwrap();
        assert_eq!(
            board.on(e1),
            Some(Piece::new(Colour::White, PieceType::King))
        );

        let d8 = "d8".parse::<Position>().unwrap();
        assert_eq!(
            board.on(d8),
            Some(Piece::new(Colour::Black, PieceType::Queen))
        );

        let e4 = "e4".parse::<Position>().unwrap();
        assert_eq!(board.on(e4), None);
    }

    #[test]
    fn test_rotate_moves_and_recolours() {
        let mut board = Board::from_fen("8/8/8/8/8/8/8/R7 w - - 0 1").unwrap();
        board.rotate();

        assert_eq!(board.stm(), Colour::Black);

        let h8 = "h8".parse::<Position>().unwrap();
        assert_eq!(
            board.on(h8),
            Some(Piece::new(Colour::Black, PieceType::Rook))
        );
        let a1 = "a1".parse::<Position>().unwrap();
        assert_eq!(board.on(a1), None);
    }

    #[test]
    fn test_rotate_involution() {
        let mut board = Board::default();
        let pieces_before: Vec<PlacedPiece> = board.board_pieces().to_vec();
        let stm_before = board.stm();

        board.rotate();
        board.rotate();

        assert_eq!(board.board_pieces(), &pieces_before[..]);
        assert_eq!(board.stm(), stm_before);
    }

    #[test]
    fn test_piece_list_start_position() {
        let board = Board::default();

        assert_eq!(
            board.piece_list(Colour::White, PieceType::King, Notation::EnglishAbbrev),
            "Ke1"
        );
        assert_eq!(
            board.piece_list(Colour::Black, PieceType::Rook, Notation::EnglishAbbrev),
            "ra8, rh8"
        );
        assert_eq!(
            board.piece_list(Colour::White, PieceType::Rook, Notation::Spanish),
            "Ta1, Th1"
        );
    }

    #[test]
    fn test_render_contains_sections() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        board.set_info("kings only");

        let plain = board.render(false, Notation::EnglishAbbrev);
        assert!(plain.starts_with("FEN: 4k3/8/8/8/8/8/8/4K3 w - - 0 1\n"));
        assert!(plain.contains("White:\n - Ke1\n"));
        assert!(plain.contains("Black:\n - ke8\n"));
        assert!(plain.contains("White to move\n"));
        assert!(!plain.contains("Info:"));

        let with_info = board.render(true, Notation::EnglishAbbrev);
        assert!(with_info.contains("Info: kings only\n"));
    }

    #[test]
    fn test_info_accessors() {
        let mut board = Board::new();
        assert_eq!(board.info(), "");
        board.set_info("Polgar #12");
        assert_eq!(board.info(), "Polgar #12");
    }
}

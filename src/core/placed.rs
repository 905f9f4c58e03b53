use super::piece::{Notation, ParsePieceError, Piece};
use super::position::{ParsePositionError, Position};
use super::types::Colour;
use thiserror::Error;

/******************************************\
|==========================================|
|               Placed Piece               |
|==========================================|
\******************************************/

/// # Placed piece representation
///
/// - A piece standing on a concrete square ("Ne4")

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub position: Position,
    pub piece: Piece,
}

impl PlacedPiece {
    pub const fn new(position: Position, piece: Piece) -> Self {
        PlacedPiece { position, piece }
    }

    /// Renders the piece text followed by the square; Black pieces lower-case
    /// the whole token, whatever the notation
    ///
    /// ## Examples
    ///
    /// ```
    /// use blindfold::core::{Notation, PlacedPiece};
    ///
    /// let white_knight: PlacedPiece = "Ne4".parse().unwrap();
    /// assert_eq!(white_knight.to_text(Notation::EnglishAbbrev), "Ne4");
    ///
    /// let black_knight: PlacedPiece = "ne4".parse().unwrap();
    /// assert_eq!(black_knight.to_text(Notation::EnglishAbbrev), "ne4");
    /// assert_eq!(black_knight.to_text(Notation::EnglishFull), "knighte4");
    /// ```
    pub fn to_text(&self, notation: Notation) -> String {
        let text = format!("{}{}", self.piece.pt.to_text(notation), self.position);

        match self.piece.colour {
            Colour::White => text,
            Colour::Black => text.to_lowercase(),
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for PlacedPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text(Notation::EnglishAbbrev))
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl std::str::FromStr for PlacedPiece {
    type Err = ParsePlacedPieceError;

    /// Parses a three-character token: piece letter (case gives the colour)
    /// followed by the square
    ///
    /// ## Examples
    ///
    /// ```
    /// use blindfold::core::{Colour, ParsePlacedPieceError, PlacedPiece};
    ///
    /// let placed: PlacedPiece = "Ne4".parse().unwrap();
    /// assert_eq!(placed.piece.colour, Colour::White);
    /// assert_eq!(placed.position.to_string(), "e4");
    ///
    /// assert!(matches!("Ne".parse::<PlacedPiece>(), Err(ParsePlacedPieceError::InvalidLength(2))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 3 {
            return Err(ParsePlacedPieceError::InvalidLength(chars.len()));
        }

        let piece = Piece::from_fen_char(chars[0])?;
        let position_str: String = chars[1..].iter().collect();
        let position = position_str.parse::<Position>()?;

        Ok(PlacedPiece { position, piece })
    }
}

/******************************************\
|==========================================|
|         Placed Piece Parse Error         |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePlacedPieceError {
    #[error("Invalid length for placed piece string: {0}, expected 3")]
    InvalidLength(usize),
    #[error(transparent)]
    Piece(#[from] ParsePieceError),
    #[error(transparent)]
    Position(#[from] ParsePositionError),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::PieceType;

    #[test]
    fn test_placed_piece_round_trip() {
        let white = "Ne4".parse::<PlacedPiece>().unwrap();
        assert_eq!(white.piece, Piece::new(Colour::White, PieceType::Knight));
        assert_eq!(white.position, Position::new(5, 4));
        assert_eq!(white.to_text(Notation::EnglishAbbrev), "Ne4");

        let black = "ne4".parse::<PlacedPiece>().unwrap();
        assert_eq!(black.piece, Piece::new(Colour::Black, PieceType::Knight));
        assert_eq!(black.to_text(Notation::EnglishAbbrev), "ne4");
    }

    #[test]
    fn test_black_lowercases_every_notation() {
        let black = "ra8".parse::<PlacedPiece>().unwrap();
        assert_eq!(black.to_text(Notation::EnglishAbbrev), "ra8");
        assert_eq!(black.to_text(Notation::EnglishFull), "rooka8");
        assert_eq!(black.to_text(Notation::Spanish), "ta8");

        let white = "Ra8".parse::<PlacedPiece>().unwrap();
        assert_eq!(white.to_text(Notation::EnglishFull), "rooka8");
        assert_eq!(white.to_text(Notation::Spanish), "Ta8");
    }

    #[test]
    fn test_placed_piece_from_str_invalid() {
        assert!(matches!(
            "".parse::<PlacedPiece>(),
            Err(ParsePlacedPieceError::InvalidLength(0))
        ));
        assert!(matches!(
            "Ne".parse::<PlacedPiece>(),
            Err(ParsePlacedPieceError::InvalidLength(2))
        ));
        assert!(matches!(
            "Ne4g".parse::<PlacedPiece>(),
            Err(ParsePlacedPieceError::InvalidLength(4))
        ));

        assert!(matches!(
            "Xe4".parse::<PlacedPiece>(),
            Err(ParsePlacedPieceError::Piece(ParsePieceError::InvalidChar(
                'X'
            )))
        ));
        assert!(matches!(
            "Ne9".parse::<PlacedPiece>(),
            Err(ParsePlacedPieceError::Position(
                ParsePositionError::OutOfRange(_)
            ))
        ));
    }

    #[test]
    fn test_display_matches_english_abbrev() {
        let placed = "qd8".parse::<PlacedPiece>().unwrap();
        assert_eq!(placed.to_string(), "qd8");
    }
}

use super::types::Colour;
use thiserror::Error;

/******************************************\
|==========================================|
|                Piece Type                |
|==========================================|
\******************************************/

/// # Piece Type representation
///
/// - Represents the different chess piece types

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceType {
    Rook, Knight, Bishop, Queen, King, Pawn,
}

impl PieceType {
    /// Number of elements in the PieceType enum
    pub const NUM: usize = 6;

    /// All piece types, in declaration order
    #[rustfmt::skip]
    pub const ALL: [PieceType; PieceType::NUM] = [
        PieceType::Rook, PieceType::Knight, PieceType::Bishop,
        PieceType::Queen, PieceType::King, PieceType::Pawn,
    ];
}

/******************************************\
|==========================================|
|                 Notation                 |
|==========================================|
\******************************************/

/// # Notation representation
///
/// - The symbol sets available for rendering a piece type as text

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    EnglishAbbrev,
    EnglishFull,
    Spanish,
    Unicode,
}

impl PieceType {
    /// Renders the piece type in the chosen notation
    ///
    /// ## Examples
    ///
    /// ```
    /// use blindfold::core::{Notation, PieceType};
    ///
    /// assert_eq!(PieceType::Knight.to_text(Notation::EnglishAbbrev), "N");
    /// assert_eq!(PieceType::Knight.to_text(Notation::EnglishFull), "knight");
    /// assert_eq!(PieceType::Knight.to_text(Notation::Spanish), "C");
    /// ```
    pub const fn to_text(self, notation: Notation) -> &'static str {
        match notation {
            Notation::EnglishAbbrev => match self {
                PieceType::Rook => "R",
                PieceType::Knight => "N",
                PieceType::Bishop => "B",
                PieceType::Queen => "Q",
                PieceType::King => "K",
                PieceType::Pawn => "P",
            },
            Notation::EnglishFull => match self {
                PieceType::Rook => "rook",
                PieceType::Knight => "knight",
                PieceType::Bishop => "bishop",
                PieceType::Queen => "queen",
                PieceType::King => "king",
                PieceType::Pawn => "pawn",
            },
            Notation::Spanish => match self {
                PieceType::Rook => "T",
                PieceType::Knight => "C",
                PieceType::Bishop => "A",
                PieceType::Queen => "D",
                PieceType::King => "R",
                PieceType::Pawn => "P",
            },
            Notation::Unicode => match self {
                PieceType::Rook => "🨂 ",
                PieceType::Knight => "🨄 ",
                PieceType::Bishop => "🨃 ",
                PieceType::Queen => "🨁 ",
                PieceType::King => "🨀 ",
                PieceType::Pawn => "🨅 ",
            },
        }
    }

    /// The lowercase FEN letter for the piece type
    pub const fn fen_letter(self) -> char {
        match self {
            PieceType::Rook => 'r',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
            PieceType::Pawn => 'p',
        }
    }
}

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// # Piece representation
///
/// - A piece type together with its colour

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub pt: PieceType,
    pub colour: Colour,
}

impl Piece {
    /// Combines a colour and piece type pair to create a piece
    pub const fn new(colour: Colour, pt: PieceType) -> Self {
        Piece { pt, colour }
    }

    /// Parses a FEN piece character: letter gives the type, case the colour
    ///
    /// ## Examples
    ///
    /// ```
    /// use blindfold::core::{Colour, ParsePieceError, Piece, PieceType};
    ///
    /// assert_eq!(Piece::from_fen_char('N').unwrap(), Piece::new(Colour::White, PieceType::Knight));
    /// assert_eq!(Piece::from_fen_char('k').unwrap(), Piece::new(Colour::Black, PieceType::King));
    /// assert!(matches!(Piece::from_fen_char('x'), Err(ParsePieceError::InvalidChar('x'))));
    /// ```
    pub fn from_fen_char(c: char) -> Result<Self, ParsePieceError> {
        let colour = if c.is_ascii_uppercase() {
            Colour::White
        } else {
            Colour::Black
        };

        let pt = match c.to_ascii_lowercase() {
            'r' => PieceType::Rook,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            'p' => PieceType::Pawn,
            _ => return Err(ParsePieceError::InvalidChar(c)),
        };

        Ok(Piece { pt, colour })
    }

    /// The FEN character for the piece (uppercase White, lowercase Black)
    pub fn fen_char(self) -> char {
        match self.colour {
            Colour::White => self.pt.fen_letter().to_ascii_uppercase(),
            Colour::Black => self.pt.fen_letter(),
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

/******************************************\
|==========================================|
|                Parse Piece               |
|==========================================|
\******************************************/

impl std::str::FromStr for Piece {
    type Err = ParsePieceError;

    /// Parse a one-character piece string into a piece, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use blindfold::core::{Colour, ParsePieceError, Piece, PieceType};
    ///
    /// assert_eq!("P".parse::<Piece>().unwrap(), Piece::new(Colour::White, PieceType::Pawn));
    /// assert_eq!("k".parse::<Piece>().unwrap(), Piece::new(Colour::Black, PieceType::King));
    /// assert!(matches!("X".parse::<Piece>(), Err(ParsePieceError::InvalidChar('X'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let piece_char = chars.next().ok_or(ParsePieceError::InvalidLength(0))?;
        if chars.next().is_some() {
            return Err(ParsePieceError::InvalidLength(s.chars().count()));
        }

        Piece::from_fen_char(piece_char)
    }
}

/******************************************\
|==========================================|
|            Piece Parse Error             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("Invalid length for piece string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid FEN piece type: '{0}'")]
    InvalidChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

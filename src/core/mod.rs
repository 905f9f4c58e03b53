// Core module exports

// Leaf value types of the position model
pub mod piece;
pub mod placed;
pub mod position;
pub mod types;

// Re-export common types for easier access
pub use piece::{Notation, ParsePieceError, Piece, PieceType};
pub use placed::{ParsePlacedPieceError, PlacedPiece};
pub use position::{ParsePositionError, Position};
pub use types::Colour;

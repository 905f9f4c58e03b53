//! # Blindfold
//!
//! Terminal chess training drills: blindfold board recall, piece-location
//! memory quizzes and bishop-move geometry exercises, built on a small FEN
//! position model.
pub mod board;
pub mod core;
pub mod problems;
pub mod term;
pub mod trainer;

pub use board::{Board, START_FEN};
pub use core::*;

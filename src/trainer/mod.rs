//! The interactive training exercises: bishop geometry drills, the
//! piece-location memory quiz and the blindfold review loop.

pub mod bishop;
pub mod blindfold;
pub mod memory;

pub use bishop::Drill;

use thiserror::Error;

use crate::board::Board;
use crate::problems::ProblemLoadError;

/******************************************\
|==========================================|
|              Analysis Links              |
|==========================================|
\******************************************/

/// Builds the lichess analysis URL for a board. The board's FEN is the sole
/// input; spaces become underscores.
pub fn analysis_url(board: &Board) -> String {
    format!(
        "https://lichess.org/analysis/{}?color=white",
        board.fen().replace(' ', "_")
    )
}

/******************************************\
|==========================================|
|              Trainer Errors              |
|==========================================|
\******************************************/

#[derive(Error, Debug)]
pub enum TrainerError {
    #[error(transparent)]
    Problems(#[from] ProblemLoadError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("problem number {0} is out of range, the file has {1} problems")]
    ProblemOutOfRange(usize, usize),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

//! Problem-set loading: a JSON document of labeled FEN strings, one board
//! per entry.
//!
//! ```json
//! { "problems": [ { "fen": "8/8/...", "info": "Polgar #12" }, ... ] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::board::{Board, FenParseError};

/******************************************\
|==========================================|
|              Problem Schema              |
|==========================================|
\******************************************/

#[derive(Debug, Deserialize)]
struct ProblemFile {
    problems: Vec<ProblemEntry>,
}

#[derive(Debug, Deserialize)]
struct ProblemEntry {
    fen: String,
    info: Option<String>,
}

/******************************************\
|==========================================|
|                  Loader                  |
|==========================================|
\******************************************/

/// Reads a problem file and parses every entry into a [`Board`].
///
/// The first bad entry aborts the whole batch; output order matches the
/// input array order.
pub fn load_fen_file(path: &Path) -> Result<Vec<Board>, ProblemLoadError> {
    let text = fs::read_to_string(path).map_err(|source| ProblemLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    boards_from_json(&text)
}

/// Parses the problem-file JSON text into boards. Split out of
/// [`load_fen_file`] so the schema handling is testable without touching
/// the filesystem.
pub fn boards_from_json(text: &str) -> Result<Vec<Board>, ProblemLoadError> {
    let file: ProblemFile = serde_json::from_str(text)?;

    let mut boards = Vec::with_capacity(file.problems.len());
    for (index, entry) in file.problems.into_iter().enumerate() {
        let mut board = Board::from_fen(&entry.fen)
            .map_err(|source| ProblemLoadError::Fen { index, source })?;

        if let Some(info) = entry.info {
            board.set_info(&info);
        }

        boards.push(board);
    }

    Ok(boards)
}

/******************************************\
|==========================================|
|              Loader Errors               |
|==========================================|
\******************************************/

#[derive(Error, Debug)]
pub enum ProblemLoadError {
    #[error("failed to read problem file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid problem file JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("problem at index {index}: {source}")]
    Fen { index: usize, source: FenParseError },
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

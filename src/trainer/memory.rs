//! Piece-location memory quiz: memorize one problem, then answer randomized
//! questions about it.

use std::io::{BufRead, Write};
use std::path::Path;

use rand::Rng;

use crate::board::Board;
use crate::core::{Notation, Piece, PlacedPiece, Position};
use crate::problems::load_fen_file;
use crate::term::clear_screen;

use super::{TrainerError, analysis_url};

/******************************************\
|==========================================|
|              Quiz Helpers                |
|==========================================|
\******************************************/

/// The board's pieces on `rank`, sorted by position.
pub fn rank_pieces(board: &Board, rank: i32) -> Vec<PlacedPiece> {
    let mut pieces: Vec<PlacedPiece> = board
        .board_pieces()
        .iter()
        .copied()
        .filter(|placed| placed.position.rank == rank)
        .collect();
    pieces.sort_by_key(|placed| placed.position);
    pieces
}

/// Parses a whitespace-separated list of placed-piece tokens ("Ne4 pd5"),
/// sorted by position. Returns the failing token's message on error.
pub fn parse_placed_list(input: &str) -> Result<Vec<PlacedPiece>, String> {
    let mut pieces = Vec::new();
    for part in input.split_whitespace() {
        let placed = part
            .parse::<PlacedPiece>()
            .map_err(|e| format!("'{}': {}", part, e))?;
        pieces.push(placed);
    }
    pieces.sort_by_key(|placed| placed.position);
    Ok(pieces)
}

fn describe(piece: Option<Piece>) -> String {
    match piece {
        Some(piece) => format!(
            "a {} {}",
            piece.colour,
            piece.pt.to_text(Notation::EnglishFull)
        ),
        None => "none".to_string(),
    }
}

fn read_line(input: &mut impl BufRead) -> std::io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/******************************************\
|==========================================|
|               Quiz Loop                  |
|==========================================|
\******************************************/

/// Runs the memory quiz for one problem of a problem file.
/// `problem_number` is 1-based, the way the problems are labeled.
pub fn run_memory_trainer(path: &Path, problem_number: usize) -> Result<(), TrainerError> {
    let problems = load_fen_file(path)?;

    if problem_number == 0 || problem_number > problems.len() {
        return Err(TrainerError::ProblemOutOfRange(
            problem_number,
            problems.len(),
        ));
    }

    let mut rng = rand::thread_rng();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    run(
        &problems[problem_number - 1],
        &mut rng,
        &mut input,
        &mut output,
    )?;

    Ok(())
}

/// The quiz proper: show the problem, wait, then question until `exit`
/// or end of input.
pub fn run<R: Rng>(
    problem: &Board,
    rng: &mut R,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<()> {
    clear_screen();

    write!(output, "{}", problem.render(true, Notation::EnglishAbbrev))?;
    writeln!(output, "Analysis: {}", analysis_url(problem))?;
    writeln!(
        output,
        "-----------------------------------------------------------"
    )?;
    write!(output, "Press enter when done memorizing...")?;
    output.flush()?;
    if input.read_line(&mut String::new())? == 0 {
        return Ok(());
    }

    let board_pieces = problem.board_pieces();

    loop {
        clear_screen();

        if rng.gen_range(0..2) == 0 {
            // Spot check a square, biased toward occupied ones
            let position = if rng.gen_bool(0.75) && !board_pieces.is_empty() {
                board_pieces[rng.gen_range(0..board_pieces.len())].position
            } else {
                Position::new(rng.gen_range(1..=8), rng.gen_range(1..=8))
            };

            writeln!(output, "What is on {}?", position)?;
            output.flush()?;
            let mut answer = read_line(input)?;

            if answer == "exit" {
                return Ok(());
            }
            if answer.is_empty() || answer == "empty" || answer == "nothing" {
                answer = "none".to_string();
            }

            let user_piece = if answer == "none" {
                None
            } else {
                match answer.parse::<Piece>() {
                    Ok(piece) => Some(piece),
                    Err(_) => {
                        writeln!(output, "Invalid piece notation")?;
                        continue;
                    }
                }
            };

            let actual_piece = problem.on(position);

            if actual_piece == user_piece {
                writeln!(output, "Correct!")?;
            } else {
                writeln!(output, "Incorrect! It's {}", describe(actual_piece))?;
            }
        } else {
            // Describe a whole rank
            let rank = rng.gen_range(1..=8);
            write!(output, "What's on rank number {}? ", rank)?;
            output.flush()?;
            let answer = read_line(input)?;

            if answer == "exit" {
                return Ok(());
            }

            let user_pieces = match parse_placed_list(&answer) {
                Ok(pieces) => pieces,
                Err(message) => {
                    writeln!(output, "Invalid board piece notation: {}", message)?;
                    continue;
                }
            };

            let actual_pieces = rank_pieces(problem, rank);

            if user_pieces == actual_pieces {
                writeln!(output, "Correct!")?;
            } else {
                let texts: Vec<String> = actual_pieces
                    .iter()
                    .map(PlacedPiece::to_string)
                    .collect();
                writeln!(output, "Incorrect, the answer is: {}", texts.join(" "))?;
            }
        }

        // Wait for enter before the next question; EOF ends the session
        if input.read_line(&mut String::new())? == 0 {
            return Ok(());
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

//! Bishop-move geometry drills.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::core::{Colour, Position};

/******************************************\
|==========================================|
|              Drill Variants              |
|==========================================|
\******************************************/

/// The available geometry drills. A closed set dispatched through
/// [`Drill::run`]; no open-ended trainer hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drill {
    SquareColour,
    BishopEndpoints,
    BishopIntercept,
}

impl Drill {
    /// Number of elements in the Drill enum
    pub const NUM: usize = 3;

    /// All drills, in declaration order
    pub const ALL: [Drill; Drill::NUM] = [
        Drill::SquareColour,
        Drill::BishopEndpoints,
        Drill::BishopIntercept,
    ];
}

/******************************************\
|==========================================|
|             Board Geometry               |
|==========================================|
\******************************************/

/// Sorts, deduplicates and removes invalid positions.
pub fn normalize(positions: &mut Vec<Position>) {
    positions.sort();
    positions.dedup();
    positions.retain(Position::is_valid);
}

/// The squares from which a bishop standing on `a` attacks `b`.
///
/// Solves `(dx, dy) = s(1, 1) + t(1, -1)` over the integers: no solution
/// when the squares have opposite colours, `a` itself when they already
/// share a diagonal, otherwise the two lattice intersections (filtered to
/// the board).
pub fn intercept_squares(a: Position, b: Position) -> Vec<Position> {
    let dx = b.file - a.file;
    let dy = b.rank - a.rank;

    if (dx + dy) % 2 != 0 {
        return Vec::new();
    }

    let s = (dx + dy) / 2;
    let t = (dx - dy) / 2;

    if s == 0 || t == 0 {
        return vec![a];
    }

    let mut solutions = vec![
        Position::new(a.file + s, a.rank + s),
        Position::new(a.file + t, a.rank - t),
    ];
    normalize(&mut solutions);
    solutions
}

/// The squares where the diagonals through `position` meet the board edge.
pub fn diagonal_endpoints(position: Position) -> Vec<Position> {
    let Position { file, rank } = position;

    let mut endpoints = vec![
        Position::new(1, rank - (file - 1)),
        Position::new(1, rank + (file - 1)),
        Position::new(8, rank - (file - 8)),
        Position::new(8, rank + (file - 8)),
        Position::new(file - (rank - 1), 1),
        Position::new(file + (rank - 1), 1),
        Position::new(file - (rank - 8), 8),
        Position::new(file + (rank - 8), 8),
    ];
    normalize(&mut endpoints);
    endpoints
}

fn random_position<R: Rng>(rng: &mut R) -> Position {
    Position::new(rng.gen_range(1..=8), rng.gen_range(1..=8))
}

fn join_positions(positions: &[Position]) -> String {
    let texts: Vec<String> = positions.iter().map(Position::to_string).collect();
    texts.join(" ")
}

fn parse_positions(input: &str) -> Option<Vec<Position>> {
    let mut positions = Vec::new();
    for part in input.split_whitespace() {
        positions.push(part.parse::<Position>().ok()?);
    }
    Some(positions)
}

fn read_line(input: &mut impl BufRead) -> std::io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/******************************************\
|==========================================|
|               Drill Loop                 |
|==========================================|
\******************************************/

impl Drill {
    /// Asks one question and grades the answer.
    pub fn run<R: Rng>(
        &self,
        rng: &mut R,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> std::io::Result<()> {
        match self {
            Drill::SquareColour => run_square_colour(rng, input, output),
            Drill::BishopEndpoints => run_endpoints(rng, input, output),
            Drill::BishopIntercept => run_intercept(rng, input, output),
        }
    }
}

fn run_square_colour<R: Rng>(
    rng: &mut R,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<()> {
    let position = random_position(rng);

    write!(output, "Guess the colour of the square {}: ", position)?;
    output.flush()?;

    let answer = read_line(input)?;
    let guessed = match answer.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('w') => Colour::White,
        _ => Colour::Black,
    };

    if guessed == position.square_colour() {
        writeln!(output, "Correct!")?;
    } else {
        writeln!(output, "Incorrect! It is {}", position.square_colour())?;
    }

    Ok(())
}

fn run_endpoints<R: Rng>(
    rng: &mut R,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<()> {
    let position = random_position(rng);
    let endpoints = diagonal_endpoints(position);
    let endpoints_string = join_positions(&endpoints);

    writeln!(output, "What are the endpoints of B{}?", position)?;
    output.flush()?;

    let mut user_endpoints;
    loop {
        let line = read_line(input)?;
        match parse_positions(&line) {
            Some(positions) => {
                user_endpoints = positions;
                break;
            }
            None => {
                writeln!(output, "Invalid positions. Please try again")?;
                output.flush()?;
            }
        }
    }
    user_endpoints.sort();

    if user_endpoints == endpoints {
        writeln!(output, "Correct!")?;
    } else {
        writeln!(output, "Incorrect! It's {}", endpoints_string)?;
        writeln!(output, "You wrote:      {}", join_positions(&user_endpoints))?;
    }

    Ok(())
}

fn run_intercept<R: Rng>(
    rng: &mut R,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<()> {
    let a = random_position(rng);
    let mut b = random_position(rng);
    while a == b {
        b = random_position(rng);
    }

    let solutions = intercept_squares(a, b);
    let solution_str = if solutions.is_empty() {
        "None".to_string()
    } else {
        join_positions(&solutions)
    };

    write!(
        output,
        "You have a bishop on {}. From which accessible squares does it attack {}? ",
        a, b
    )?;
    output.flush()?;

    let line = read_line(input)?;

    let mut user_solutions = Vec::new();
    if !line.is_empty() && line.to_lowercase() != "none" {
        match parse_positions(&line) {
            Some(positions) => user_solutions = positions,
            None => {
                writeln!(output, "Invalid position in: '{}'", line)?;
                return Ok(());
            }
        }
        normalize(&mut user_solutions);
    }

    if user_solutions == solutions {
        writeln!(output, "Correct!")?;
    } else {
        writeln!(output, "Incorrect! The solution is: {}", solution_str)?;
    }

    Ok(())
}

/// Endless drill loop for the interactive binary: clear, ask, wait.
pub fn run_bishop_trainer() -> std::io::Result<()> {
    let mut rng = rand::thread_rng();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    loop {
        crate::term::clear_screen();

        let drill = Drill::ALL[rng.gen_range(0..Drill::NUM)];
        drill.run(&mut rng, &mut input, &mut output)?;

        // Wait for enter; EOF ends the session
        let mut ignored = String::new();
        if input.read_line(&mut ignored)? == 0 {
            return Ok(());
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

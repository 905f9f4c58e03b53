//! Blindfold review loop: random problems, listed piece by piece instead of
//! drawn, with an analysis link for checking afterwards.

use std::io::{BufRead, Write};
use std::path::Path;

use rand::Rng;

use crate::board::Board;
use crate::core::Notation;
use crate::problems::load_fen_file;

use super::{TrainerError, analysis_url};

/// Loads a problem file and reviews it in random order until end of input.
pub fn run_blindfold(path: &Path) -> Result<(), TrainerError> {
    let problems = load_fen_file(path)?;

    let mut rng = rand::thread_rng();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    run(&problems, &mut rng, &mut input, &mut output)?;

    Ok(())
}

/// Shows one random problem per turn; enter advances, EOF ends the session.
pub fn run<R: Rng>(
    problems: &[Board],
    rng: &mut R,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<()> {
    if problems.is_empty() {
        writeln!(output, "No problems in the file")?;
        return Ok(());
    }

    loop {
        let index = rng.gen_range(0..problems.len());
        let problem = &problems[index];

        writeln!(
            output,
            "Showing problem #{}. Lichess: {}",
            index + 1,
            analysis_url(problem)
        )?;
        write!(output, "{}", problem.render(false, Notation::EnglishAbbrev))?;
        writeln!(
            output,
            "-----------------------------------------------------------"
        )?;
        output.flush()?;

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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_run_shows_problem_and_stops_at_eof() {
        let problems = vec![Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap()];

        let mut rng = StdRng::seed_from_u64(1);
        let mut input = std::io::Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();

        run(&problems, &mut rng, &mut input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Showing problem #1."));
        assert!(text.contains("https://lichess.org/analysis/"));
        assert!(text.contains("White:\n - Ke1"));
    }

    #[test]
    fn test_empty_problem_list() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut input = std::io::Cursor::new(Vec::new());
        let mut output = Vec::new();

        run(&[], &mut rng, &mut input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("No problems"));
    }
}

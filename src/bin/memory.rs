use std::path::PathBuf;

use blindfold::trainer::memory::run_memory_trainer;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: memory <problems.json> <problem-number>");
        std::process::exit(2);
    }

    let path = PathBuf::from(&args[1]);

    let problem_number: usize = match args[2].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Couldn't parse '{}' as a problem number", args[2]);
            std::process::exit(2);
        }
    };

    if let Err(e) = run_memory_trainer(&path, problem_number) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

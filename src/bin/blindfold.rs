use std::path::PathBuf;

use blindfold::trainer::blindfold::run_blindfold;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: blindfold <problems.json>");
        std::process::exit(2);
    }

    let path = PathBuf::from(&args[1]);

    if let Err(e) = run_blindfold(&path) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

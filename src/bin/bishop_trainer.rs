use blindfold::trainer::bishop::run_bishop_trainer;

fn main() {
    if let Err(e) = run_bishop_trainer() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Generate an exercise file from an annotated solution file by removing
/// solution blocks and uncommenting exercise blocks.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the annotated solution file
    solution_file: PathBuf,

    /// Path the generated exercise file is written to
    exercise_file: PathBuf,
}

fn main() {
    let args = Args::parse();

    let source = match fs::read_to_string(&args.solution_file) {
        Ok(source) => source,
        Err(_) => {
            println!(
                "SOL2EX ERROR: Failed to open {}!",
                args.solution_file.display()
            );
            std::process::exit(1);
        }
    };

    let document = match sol2ex_parser::parse(&source) {
        Ok(document) => document,
        Err(err) => {
            println!("SOL2EX ERROR: {}", err);
            println!(
                "{}:{}: {}",
                args.solution_file.display(),
                err.line(),
                err.text()
            );
            std::process::exit(1);
        }
    };

    // The output file is only created once the whole document has parsed,
    // so a malformed input never leaves a half-written exercise file behind.
    let output = sol2ex_renderer::render(&document);
    if fs::write(&args.exercise_file, output).is_err() {
        println!(
            "SOL2EX ERROR: Failed to open {}!",
            args.exercise_file.display()
        );
        std::process::exit(1);
    }
}

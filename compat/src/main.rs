use clap::Parser;
use colored::Colorize;
use glob::glob;
use sol2ex_common::test_case::TestCase;
use std::path::PathBuf;

mod test_runner;
use test_runner::{TestResult, TestRunner};

/// Run the markdown compatibility fixtures against a sol2ex binary.
#[derive(Parser, Debug)]
struct Args {
    /// Path to the sol2ex binary under test
    sol2ex: PathBuf,

    /// Glob matching compatibility test fixtures
    compatibility_tests: String,
}

fn main() {
    let args = Args::parse();

    let runner = TestRunner::from_path(args.sol2ex);

    let mut passed = 0;
    let mut failed = 0;
    let mut skipped = 0;

    for entry in glob(&args.compatibility_tests).expect("invalid glob pattern") {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("{}: {}", path.display(), err);
                continue;
            }
        };

        let test_case = TestCase::from_string(&content, &path);

        if test_case.disabled {
            skipped += 1;
            println!("{} {}", "SKIP".yellow(), test_case.name);
            continue;
        }

        match runner.run(test_case.clone()) {
            TestResult::Pass => {
                passed += 1;
                println!("{} {}", "PASS".green(), test_case.name);
            }
            TestResult::Fail { expected, actual } => {
                failed += 1;
                println!("{} {}", "FAIL".red(), test_case.name);
                if let Some(expected) = expected {
                    println!("expected:\n{}", expected);
                }
                println!("actual:\n{}", actual);
            }
        }
    }

    println!(
        "\n{} passed, {} failed, {} skipped",
        passed, failed, skipped
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

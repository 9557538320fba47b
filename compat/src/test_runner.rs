use std::fs::File;
use std::io::prelude::*;
use std::path::PathBuf;
use std::process::Command;

use sol2ex_common::test_case::TestCase;

#[derive(Debug, Clone)]
pub enum TestResult {
    Pass,
    Fail {
        expected: Option<String>,
        actual: String,
    },
}

pub struct TestRunner {
    sol2ex_path: PathBuf,
}

struct TempDirGuard {
    dir: PathBuf,
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

impl TestRunner {
    pub fn from_path(path: PathBuf) -> Self {
        TestRunner { sol2ex_path: path }
    }

    pub fn run(&self, test_case: TestCase) -> TestResult {
        // Write the solution script to a temporary directory and point the
        // binary at it, with the exercise output next to it.
        let file_stem = test_case
            .path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy();
        let unique = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let temp_dir = std::env::temp_dir().join(format!(
            "sol2ex-compat-{}-{}",
            std::process::id(),
            unique
        ));
        std::fs::create_dir_all(&temp_dir).unwrap();
        let _temp_guard = TempDirGuard {
            dir: temp_dir.clone(),
        };

        let solution_path = temp_dir.join(format!("{}.sol.c", file_stem));
        let exercise_path = temp_dir.join(format!("{}.ex.c", file_stem));
        let mut file = File::create(&solution_path).unwrap();
        writeln!(file, "{}", test_case.solution).unwrap();

        match Command::new(&self.sol2ex_path)
            .arg(&solution_path)
            .arg(&exercise_path)
            .output()
        {
            Ok(result) if result.status.success() => {
                let output = std::fs::read_to_string(&exercise_path).unwrap_or_default();
                let output_trimmed = output.trim_end_matches(&['\r', '\n'][..]);
                let expected_trimmed = test_case.exercise.trim_end_matches(&['\r', '\n'][..]);

                if expected_trimmed == output_trimmed {
                    TestResult::Pass
                } else {
                    TestResult::Fail {
                        expected: Some(test_case.exercise),
                        actual: output,
                    }
                }
            }
            Ok(result) => TestResult::Fail {
                expected: Some(test_case.exercise),
                actual: String::from_utf8(result.stdout).unwrap_or_default(),
            },
            Err(err) => {
                dbg!(err);
                TestResult::Fail {
                    expected: None,
                    actual: "Error running test".to_string(),
                }
            }
        }
    }
}

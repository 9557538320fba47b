use std::path::Path;
use std::path::PathBuf;

/// A compatibility test fixture: a markdown file holding the annotated
/// solution script and the exercise output expected from it.
#[derive(Clone)]
pub struct TestCase {
    pub name: String,
    pub solution: String,
    pub exercise: String,
    pub path: PathBuf,
    pub disabled: bool,
}

fn parse_name(content: &str) -> String {
    content
        .lines()
        .next()
        .unwrap()
        .split("# ")
        .collect::<Vec<&str>>()[1]
        .to_string()
}

fn parse_markdown_block(content: &str, language: &str) -> String {
    content
        .split(&format!("```{}\n", language))
        .collect::<Vec<&str>>()[1]
        .split("```")
        .collect::<Vec<&str>>()[0]
        .trim()
        .to_string()
}

impl TestCase {
    pub fn from_string<A, B>(content: A, path: B) -> Self
    where
        A: AsRef<str>,
        B: AsRef<Path>,
    {
        let name = parse_name(content.as_ref());
        let solution = parse_markdown_block(content.as_ref(), "solution");
        let exercise = parse_markdown_block(content.as_ref(), "exercise");
        let disabled = content.as_ref().trim().ends_with("!!! disabled");

        TestCase {
            name,
            solution,
            exercise,
            path: path.as_ref().into(),
            disabled,
        }
    }
}

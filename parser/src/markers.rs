use std::sync::LazyLock;

use regex::Regex;
use sol2ex_common::BlockKind;

use crate::ParseError;

pub const BLOCK_START: &str = "//$ START";
pub const BLOCK_END: &str = "//$ END";
pub const INLINE_SOL: &str = "//$ SOL";
pub const INLINE_EX: &str = "//$ EX";

/// Pattern to match a block-start marker and capture its type token.
static BLOCK_START_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//\$ START ?(\w*)").unwrap());

/// A marker recognized on a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// `//$ START SOL` / `//$ START EX` anywhere on the line.
    Start(BlockKind),
    /// `//$ END` anywhere on the line.
    End,
    /// A trailing `//$ SOL` / `//$ EX`. Carries the synthesized content
    /// line: marker text removed, trailing whitespace trimmed, newline
    /// appended.
    Inline { kind: BlockKind, line: String },
}

/// Classify one input line, first match wins: block start, block end,
/// inline marker, plain content (`None`). `line` keeps its trailing
/// newline; `line_number` is 1-based.
pub fn classify(line: &str, line_number: usize) -> Result<Option<Marker>, ParseError> {
    if line.contains(BLOCK_START) {
        return extract_block_start(line, line_number).map(|kind| Some(Marker::Start(kind)));
    }

    if line.contains(BLOCK_END) {
        return Ok(Some(Marker::End));
    }

    if is_inline_marker(line) {
        return extract_inline_block(line, line_number).map(Some);
    }

    Ok(None)
}

fn is_inline_marker(line: &str) -> bool {
    let trimmed = line.trim_end();
    trimmed.ends_with(INLINE_SOL) || trimmed.ends_with(INLINE_EX)
}

fn extract_block_start(line: &str, line_number: usize) -> Result<BlockKind, ParseError> {
    let Some(captures) = BLOCK_START_PATTERN.captures(line) else {
        return Err(ParseError::InvalidStart {
            line: line_number,
            text: raw(line),
        });
    };

    match &captures[1] {
        "SOL" => Ok(BlockKind::Solution),
        "EX" => Ok(BlockKind::Exercise),
        token => Err(ParseError::InvalidBlockType {
            token: token.to_string(),
            line: line_number,
            text: raw(line),
        }),
    }
}

fn extract_inline_block(line: &str, line_number: usize) -> Result<Marker, ParseError> {
    let trimmed = line.trim_end();

    let (kind, marker) = if trimmed.ends_with(INLINE_SOL) {
        (BlockKind::Solution, INLINE_SOL)
    } else if trimmed.ends_with(INLINE_EX) {
        (BlockKind::Exercise, INLINE_EX)
    } else {
        return Err(ParseError::InvalidInlineBlock {
            line: line_number,
            text: raw(line),
        });
    };

    // Remove every occurrence of the marker text, drop trailing whitespace,
    // and re-terminate the line.
    let mut content = line.replace(marker, "");
    let trimmed_len = content.trim_end().len();
    content.truncate(trimmed_len);
    content.push('\n');

    Ok(Marker::Inline { kind, line: content })
}

/// The offending line as stored in errors: trailing newline stripped.
pub fn raw(line: &str) -> String {
    line.trim_end_matches(['\r', '\n']).to_string()
}

use thiserror::Error;

/// Fatal segmentation failures. Every variant carries the 1-based line
/// number and the raw offending line so the caller can point at the exact
/// spot in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A block-start marker with a type token other than `SOL` or `EX`.
    #[error("Invalid block type '{token}'.")]
    InvalidBlockType {
        token: String,
        line: usize,
        text: String,
    },

    /// A line that looked like a block-start marker but did not match the
    /// start grammar at all.
    #[error("Invalid start.")]
    InvalidStart { line: usize, text: String },

    /// A line that passed the coarse inline-marker check but carried neither
    /// a `//$ SOL` nor a `//$ EX` suffix.
    #[error("Invalid inline block.")]
    InvalidInlineBlock { line: usize, text: String },

    /// A block-start marker while a solution or exercise block is still open.
    /// Blocks do not nest; the previous block must be closed with `//$ END`.
    #[error("Block start inside an open block.")]
    NestedBlockStart { line: usize, text: String },
}

impl ParseError {
    /// 1-based line number of the offending input line.
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidBlockType { line, .. }
            | ParseError::InvalidStart { line, .. }
            | ParseError::InvalidInlineBlock { line, .. }
            | ParseError::NestedBlockStart { line, .. } => *line,
        }
    }

    /// The offending line, without its trailing newline.
    pub fn text(&self) -> &str {
        match self {
            ParseError::InvalidBlockType { text, .. }
            | ParseError::InvalidStart { text, .. }
            | ParseError::InvalidInlineBlock { text, .. }
            | ParseError::NestedBlockStart { text, .. } => text,
        }
    }
}

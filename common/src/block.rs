/// Classification of a run of input lines. Determines whether the run is
/// copied, uncommented, or dropped when the exercise file is rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    #[default]
    Normal,
    Solution,
    Exercise,
}

/// A contiguous run of lines sharing one [`BlockKind`].
///
/// Every line keeps its trailing newline, except the final line of an input
/// that does not end in one. Marker lines are never stored here; an inline
/// marker contributes exactly one synthesized line to a one-line block.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub lines: Vec<String>,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
        }
    }
}

/// The ordered block list produced by one segmentation pass. The first block
/// is always `Normal`, implicitly opened at start of file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

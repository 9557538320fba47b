use sol2ex_common::{Block, BlockKind, Document};

use crate::markers::{self, Marker};
use crate::ParseError;

/// The block segmenter. Walks the source line by line and groups runs of
/// lines into typed blocks, holding the in-progress block in an explicit
/// cursor that is sealed onto the document at each marker.
#[derive(Debug, Default)]
pub struct Parser {
    document: Document,
    current: Block,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segment `source` into a [`Document`].
    ///
    /// The input is split with `split_inclusive` so every line keeps its
    /// trailing newline; a final line without one is carried as-is. On the
    /// first malformed marker the whole parse fails and no document is
    /// produced.
    pub fn parse<A>(&mut self, source: A) -> Result<Document, ParseError>
    where
        A: AsRef<str>,
    {
        self.document = Document::default();
        self.current = Block::new(BlockKind::Normal);

        for (line_idx, line) in source.as_ref().split_inclusive('\n').enumerate() {
            let line_number = line_idx + 1;

            match markers::classify(line, line_number)? {
                Some(Marker::Start(kind)) => {
                    // Blocks do not nest. A start while a solution or
                    // exercise block is open is rejected rather than
                    // implicitly closing it.
                    if self.current.kind != BlockKind::Normal {
                        return Err(ParseError::NestedBlockStart {
                            line: line_number,
                            text: markers::raw(line),
                        });
                    }
                    self.open(kind);
                }
                Some(Marker::End) => {
                    // Lenient: an end marker with no open solution or
                    // exercise block is accepted and simply opens another
                    // normal block.
                    self.open(BlockKind::Normal);
                }
                Some(Marker::Inline { kind, line }) => {
                    // An inline block is a one-line detour; afterwards the
                    // enclosing block's kind resumes, not necessarily Normal.
                    let enclosing = self.current.kind;
                    self.open(kind);
                    self.current.lines.push(line);
                    self.open(enclosing);
                }
                None => self.current.lines.push(line.to_string()),
            }
        }

        self.seal();
        Ok(std::mem::take(&mut self.document))
    }

    /// Seal the in-progress block and open a fresh one of `kind`.
    fn open(&mut self, kind: BlockKind) {
        self.seal();
        self.current = Block::new(kind);
    }

    fn seal(&mut self) {
        let block = std::mem::take(&mut self.current);
        self.document.blocks.push(block);
    }
}

use sol2ex_common::{BlockKind, Document};

/// The escape sequence marking commented-out exercise content. Stripped
/// once per line, at its first occurrence anywhere in the line.
pub const ESCAPE: &str = "// ";

/// Produce the exercise text for a segmented document.
///
/// Normal blocks are copied unchanged, exercise blocks are uncommented by
/// removing the first `// ` on each line, solution blocks are dropped.
pub fn render(document: &Document) -> String {
    let mut output = String::new();

    for block in &document.blocks {
        match block.kind {
            BlockKind::Normal => {
                for line in &block.lines {
                    output.push_str(line);
                }
            }
            BlockKind::Exercise => {
                for line in &block.lines {
                    output.push_str(&line.replacen(ESCAPE, "", 1));
                }
            }
            BlockKind::Solution => {}
        }
    }

    output
}

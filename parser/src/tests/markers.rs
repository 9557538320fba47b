use sol2ex_common::BlockKind;

use crate::markers::{classify, Marker};
use crate::ParseError;

#[test]
fn test_classify_block_start_sol() {
    let marker = classify("//$ START SOL\n", 1).unwrap();
    assert_eq!(marker, Some(Marker::Start(BlockKind::Solution)));
}

#[test]
fn test_classify_block_start_ex() {
    let marker = classify("//$ START EX\n", 1).unwrap();
    assert_eq!(marker, Some(Marker::Start(BlockKind::Exercise)));
}

#[test]
fn test_classify_block_start_anywhere_on_the_line() {
    let marker = classify("  some_code(); //$ START SOL\n", 1).unwrap();
    assert_eq!(marker, Some(Marker::Start(BlockKind::Solution)));
}

#[test]
fn test_classify_block_start_with_unknown_token() {
    let result = classify("//$ START BAD\n", 7);
    assert_eq!(
        result,
        Err(ParseError::InvalidBlockType {
            token: "BAD".to_string(),
            line: 7,
            text: "//$ START BAD".to_string(),
        })
    );
}

#[test]
fn test_classify_block_start_with_empty_token() {
    let result = classify("//$ START\n", 3);
    assert_eq!(
        result,
        Err(ParseError::InvalidBlockType {
            token: String::new(),
            line: 3,
            text: "//$ START".to_string(),
        })
    );
}

#[test]
fn test_classify_block_end() {
    assert_eq!(classify("//$ END\n", 1).unwrap(), Some(Marker::End));
    assert_eq!(classify("code(); //$ END\n", 1).unwrap(), Some(Marker::End));
}

#[test]
fn test_classify_inline_solution() {
    let marker = classify("secret(); //$ SOL\n", 1).unwrap();
    assert_eq!(
        marker,
        Some(Marker::Inline {
            kind: BlockKind::Solution,
            line: "secret();\n".to_string(),
        })
    );
}

#[test]
fn test_classify_inline_exercise() {
    let marker = classify("bar(); //$ EX\n", 1).unwrap();
    assert_eq!(
        marker,
        Some(Marker::Inline {
            kind: BlockKind::Exercise,
            line: "bar();\n".to_string(),
        })
    );
}

#[test]
fn test_classify_inline_with_trailing_whitespace() {
    let marker = classify("bar(); //$ EX   \n", 1).unwrap();
    assert_eq!(
        marker,
        Some(Marker::Inline {
            kind: BlockKind::Exercise,
            line: "bar();\n".to_string(),
        })
    );
}

#[test]
fn test_classify_plain_line() {
    assert_eq!(classify("plain_code();\n", 1).unwrap(), None);
    assert_eq!(classify("// a comment\n", 1).unwrap(), None);
    assert_eq!(classify("\n", 1).unwrap(), None);
}

#[test]
fn test_inline_marker_must_be_a_suffix() {
    // Marker text in the middle of a line does not make it an inline block.
    assert_eq!(classify("foo(); //$ EX bar();\n", 1).unwrap(), None);
}

#[test]
fn test_block_end_takes_precedence_over_inline() {
    // `first match wins`: the END substring is checked before the inline
    // suffix.
    let marker = classify("//$ END //$ SOL\n", 1).unwrap();
    assert_eq!(marker, Some(Marker::End));
}

use sol2ex_common::Document;

mod error;
pub use error::ParseError;

mod markers;
pub use markers::Marker;

mod parser;
pub use parser::Parser;

#[cfg(test)]
mod tests;

/// Segment an annotated solution source into a typed block document.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let mut parser = Parser::new();
    parser.parse(source)
}

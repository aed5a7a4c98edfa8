//! Source buffers and location lookup for error reporting.

use crate::Position;

/// An immutable source buffer together with the name it was read from.
///
/// The buffer must outlive every AST built from it: names in the AST are
/// slices into `text`.
#[derive(Debug, Clone, Copy)]
pub struct SourceContext<'src> {
    pub filename: &'src str,
    pub text: &'src str,
}

/// A 1-based row/column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilePosition {
    pub row: usize,
    pub column: usize,
}

impl<'src> SourceContext<'src> {
    pub fn new(filename: &'src str, text: &'src str) -> Self {
        SourceContext { filename, text }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Resolves a byte offset to a row and column by scanning from the start
    /// of the buffer. Linear in the offset, only meant for diagnostics.
    ///
    /// Columns count characters, not bytes.
    pub fn file_position(&self, position: Position) -> FilePosition {
        let offset = position.offset().min(self.text.len());
        let before = &self.text.as_bytes()[..offset];

        let row = 1 + before.iter().filter(|&&b| b == b'\n').count();
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);

        // an offset inside a multi-byte character counts the partial bytes
        let column = self
            .text
            .get(line_start..offset)
            .map_or(offset - line_start, |line| line.chars().count())
            + 1;

        FilePosition { row, column }
    }

    /// Returns the line containing `position`, without its line terminator.
    pub fn line_at(&self, position: Position) -> &'src str {
        let offset = position.offset().min(self.text.len());
        let bytes = self.text.as_bytes();

        let start = bytes[..offset]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let end = bytes[offset..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(bytes.len(), |i| offset + i);

        self.text[start..end].trim_end_matches('\r')
    }
}

#[cfg(test)]
mod tests {
    use super::{FilePosition, SourceContext};
    use crate::Position;

    #[test]
    fn test_file_position() {
        let source = SourceContext::new("test.glotta", "fun a\n  = unit\n");

        assert_eq!(source.file_position(Position(0)), FilePosition { row: 1, column: 1 });
        assert_eq!(source.file_position(Position(4)), FilePosition { row: 1, column: 5 });
        assert_eq!(source.file_position(Position(8)), FilePosition { row: 2, column: 3 });
    }

    #[test]
    fn test_file_position_past_end() {
        let source = SourceContext::new("test.glotta", "ab\nc");

        assert_eq!(source.file_position(Position(100)), FilePosition { row: 2, column: 2 });
    }

    #[test]
    fn test_file_position_counts_characters() {
        let source = SourceContext::new("test.glotta", "a\u{e9} b\n\u{e9}\u{e9}x");

        assert_eq!(source.file_position(Position(4)), FilePosition { row: 1, column: 4 });
        assert_eq!(source.file_position(Position(10)), FilePosition { row: 2, column: 3 });
    }

    #[test]
    fn test_line_at() {
        let source = SourceContext::new("test.glotta", "first\r\nsecond\nthird");

        assert_eq!(source.line_at(Position(2)), "first");
        assert_eq!(source.line_at(Position(9)), "second");
        assert_eq!(source.line_at(Position(17)), "third");
        assert_eq!(source.line_at(Position(18)), "third");
    }
}

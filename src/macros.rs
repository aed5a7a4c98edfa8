//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a kind and a byte range
//! - `MK_ERROR!` - Creates a positioned Error from any stage error

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$start` - Byte offset of the first character
/// * `$end` - Byte offset one past the last character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            span: $crate::Span::new($start, $end),
        }
    };
}

/// Creates a positioned Error from a stage error.
///
/// # Example
///
/// ```ignore
/// return Err(MK_ERROR!(NameError::VariableNotDeclared { variable: name.to_string() }, expr.position));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($error:expr, $position:expr) => {
        $crate::errors::errors::Error::new($error.into(), $position)
    };
}

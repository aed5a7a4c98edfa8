#![allow(clippy::module_inception)]

use std::fmt::Write as _;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    namer::namer::{resolve_names, SymbolCount},
    parser::parser::parse,
    source::SourceContext,
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod namer;
pub mod parser;
pub mod source;
pub mod type_checker;

/// A byte offset into the source buffer of the unit being compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub u32);

impl Position {
    pub fn offset(self) -> usize {
        self.0 as usize
    }
}

/// A half-open byte range `[start, end)` into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: start as u32,
            end: end as u32,
        }
    }

    pub fn start_position(&self) -> Position {
        Position(self.start)
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A translation unit that made it through every stage.
#[derive(Debug)]
pub struct CheckedProgram<'src> {
    pub program: Program<'src>,
    pub symbol_count: SymbolCount,
}

/// Runs lexing, parsing, naming and typing over one source buffer.
///
/// Processing of the unit stops at the first error. Nothing is shared between
/// calls, so a failing unit never affects another one.
pub fn check_source<'src>(source: &SourceContext<'src>) -> Result<CheckedProgram<'src>, Error> {
    let mut program = parse(source)?;
    debug!(
        file = source.filename,
        functions = program.functions.len(),
        expressions = program.exprs.len(),
        "parsed"
    );

    let symbol_count = resolve_names(&mut program)?;
    debug!(file = source.filename, symbols = symbol_count.0, "names resolved");

    type_check(&mut program, symbol_count)?;
    debug!(file = source.filename, "types checked");

    Ok(CheckedProgram {
        program,
        symbol_count,
    })
}

/// Renders an error the way the driver prints it:
///
/// ```text
/// ERROR[main.glotta:2:16]: variable name `y` is not bound (declare it first with `val y: ... = ...`)
///   |
/// 2 | fun f(): Int = y
///   | ---------------^
/// ```
pub fn format_error(error: &Error, source: &SourceContext) -> String {
    let position = error.get_position();
    let file_position = source.file_position(position);
    let line_text = source.line_at(position);

    let mut out = String::new();
    let _ = write!(
        out,
        "ERROR[{}:{}:{}]: {}",
        source.filename, file_position.row, file_position.column, error
    );
    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        let _ = write!(out, " ({})", tip);
    }
    out.push('\n');

    let line_string = file_position.row.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{:>padding$}", "|");
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (file_position.column - 1).saturating_sub(removed_whitespace) + 1;
    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

/// Prints an error in the driver's caret format to stderr.
pub fn display_error(error: &Error, source: &SourceContext) {
    eprintln!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use crate::{
        check_source,
        errors::errors::{Error, NameError},
        format_error,
        source::SourceContext,
        Position,
    };

    #[test]
    fn test_format_error_points_at_column() {
        let source = SourceContext::new("main.glotta", "fun g() = unit\nfun f(): Int = y\n");
        let error = check_source(&source).unwrap_err();

        let rendered = format_error(&error, &source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("ERROR[main.glotta:2:16]: "));
        assert_eq!(lines[2], "2 | fun f(): Int = y");
        assert_eq!(lines[3], "  | ---------------^");
    }

    #[test]
    fn test_format_error_strips_indentation() {
        let source = SourceContext::new("main.glotta", "fun f(): Int = {\n    zz\n}");
        let error = check_source(&source).unwrap_err();

        let rendered = format_error(&error, &source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("ERROR[main.glotta:2:5]: "));
        assert_eq!(lines[2], "2 | zz");
        assert_eq!(lines[3], "  | ^");
    }

    #[test]
    fn test_format_error_counts_characters() {
        let source = SourceContext::new("main.glotta", "val \u{e9} = y");
        let error = Error::new(
            NameError::VariableNotDeclared {
                variable: "y".to_string(),
            }
            .into(),
            Position(9),
        );

        let rendered = format_error(&error, &source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("ERROR[main.glotta:1:9]: "));
        assert_eq!(lines[3], "  | --------^");
    }
}

//! Type annotation parsing.
//!
//! The language only has the two builtin types `Int` and `Unit`, so a type is
//! always a single keyword token.

use crate::{
    ast::ast::{Type, TypeAnnotation},
    errors::errors::{Error, Expected},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> Result<TypeAnnotation, Error> {
    let token = parser.current_token();

    let ty = match token.kind {
        TokenKind::Int => Type::Int,
        TokenKind::UnitType => Type::Unit,
        _ => return Err(parser.unexpected(token, Expected::Type)),
    };

    parser.advance();

    Ok(TypeAnnotation {
        ty,
        position: token.span.start_position(),
    })
}

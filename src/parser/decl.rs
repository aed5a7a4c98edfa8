//! Top level declaration parsing.
//!
//! A translation unit is a list of function declarations:
//!
//! ```text
//! fun <ident> [ ( <params> ) ] [ : <type> ] = <expr>
//! ```

use crate::{
    ast::ast::{Function, Parameter, SymbolId},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser, types::parse_type};

pub fn parse_function<'src>(parser: &mut Parser<'src>) -> Result<Function<'src>, Error> {
    let start = parser.expect(TokenKind::Fun)?.span.start_position();

    let name_token = parser.expect(TokenKind::Identifier)?;
    let name = parser.text(&name_token);

    // `fun main = ...` has no parameter list at all
    let parameters = if parser.current_token_kind() == TokenKind::OpenParen {
        parse_parameters(parser)?
    } else {
        vec![]
    };

    let return_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Assignment)?;

    let body = parse_expr(parser, BindingPower::DEFAULT)?;

    Ok(Function {
        name,
        symbol: SymbolId::UNRESOLVED,
        parameters: parameters.into_boxed_slice(),
        return_type,
        body,
        position: start,
    })
}

/// `( [val|var] <ident> : <type>, ... )`. Trailing commas are rejected.
pub fn parse_parameters<'src>(parser: &mut Parser<'src>) -> Result<Vec<Parameter<'src>>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            parameters.push(parse_parameter(parser)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(parameters)
}

fn parse_parameter<'src>(parser: &mut Parser<'src>) -> Result<Parameter<'src>, Error> {
    let position = parser.get_position();

    let mutable = match parser.current_token_kind() {
        TokenKind::Var => {
            parser.advance();
            true
        }
        TokenKind::Val => {
            parser.advance();
            false
        }
        _ => false,
    };

    let name_token = parser.expect(TokenKind::Identifier)?;
    let name = parser.text(&name_token);

    parser.expect(TokenKind::Colon)?;
    let type_annotation = parse_type(parser)?;

    Ok(Parameter {
        name,
        symbol: SymbolId::UNRESOLVED,
        mutable,
        type_annotation,
        position,
    })
}

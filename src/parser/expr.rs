use crate::{
    ast::expressions::{
        BinaryOp, BinaryOpKind, Block, Expr, ExprId, ExprKind, FunctionCall, Variable,
        VariableDefinition,
    },
    ast::ast::SymbolId,
    errors::errors::{Error, Expected, ParseError},
    lexer::tokens::TokenKind,
    MK_ERROR,
};

use super::{lookups::BindingPower, parser::Parser, types::parse_type};

/// Parses one expression. Infix operators are folded in while their left
/// binding power is at least `min_bp`.
pub fn parse_expr<'src>(parser: &mut Parser<'src>, min_bp: u8) -> Result<ExprId<'src>, Error> {
    // First parse NUD
    let token = parser.current_token();
    let Some(nud) = parser.get_nud(token.kind) else {
        return Err(parser.unexpected(token, Expected::Expression));
    };

    let mut left = nud(parser)?;

    // Then fold LEDs while they bind at least as tightly as requested
    loop {
        let kind = parser.current_token_kind();
        let Some((led, binding_power)) = parser.get_led(kind) else {
            break;
        };
        if binding_power.left < min_bp {
            break;
        }

        left = led(parser, left, binding_power)?;
    }

    Ok(left)
}

pub fn parse_primary_expr<'src>(parser: &mut Parser<'src>) -> Result<ExprId<'src>, Error> {
    let token = parser.advance();
    let position = token.span.start_position();

    match token.kind {
        TokenKind::Unit => Ok(parser.alloc(Expr::new(ExprKind::Unit, position))),
        TokenKind::Integer => {
            let text = parser.text(&token);
            let digits: String = text.chars().filter(|c| *c != '_').collect();

            match digits.parse::<i32>() {
                Ok(value) => Ok(parser.alloc(Expr::new(ExprKind::Integer(value), position))),
                Err(_) => Err(MK_ERROR!(
                    ParseError::NumberParseError {
                        token: text.to_string()
                    },
                    position
                )),
            }
        }
        _ => Err(parser.unexpected(token, Expected::Expression)),
    }
}

/// A bare identifier is a variable; followed by `(` it is a call.
pub fn parse_symbol_expr<'src>(parser: &mut Parser<'src>) -> Result<ExprId<'src>, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    let name = parser.text(&token);
    let position = token.span.start_position();

    if parser.current_token_kind() == TokenKind::OpenParen {
        let arguments = parse_arguments(parser)?;

        return Ok(parser.alloc(Expr::new(
            ExprKind::FunctionCall(FunctionCall {
                function: name,
                symbol: SymbolId::UNRESOLVED,
                arguments: arguments.into_boxed_slice(),
            }),
            position,
        )));
    }

    Ok(parser.alloc(Expr::new(
        ExprKind::Variable(Variable {
            name,
            symbol: SymbolId::UNRESOLVED,
        }),
        position,
    )))
}

/// `( <expr>, ... )` including both parentheses. Trailing commas are rejected.
pub fn parse_arguments<'src>(parser: &mut Parser<'src>) -> Result<Vec<ExprId<'src>>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser, BindingPower::DEFAULT)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(arguments)
}

pub fn parse_binary_expr<'src>(
    parser: &mut Parser<'src>,
    left: ExprId<'src>,
    bp: BindingPower,
) -> Result<ExprId<'src>, Error> {
    let operator_token = parser.advance();
    let kind = match operator_token.kind {
        TokenKind::Assignment => BinaryOpKind::Assign,
        TokenKind::Plus => BinaryOpKind::Add,
        _ => return Err(parser.unexpected(operator_token, Expected::Expression)),
    };

    let right = parse_expr(parser, bp.right)?;

    Ok(parser.alloc(Expr::new(
        ExprKind::BinaryOp(BinaryOp {
            kind,
            lhs: left,
            rhs: right,
        }),
        operator_token.span.start_position(),
    )))
}

/// `val <ident> : [<type>] = <expr>`, or `var` for a mutable binding.
pub fn parse_var_def_expr<'src>(parser: &mut Parser<'src>) -> Result<ExprId<'src>, Error> {
    let start_token = parser.advance();
    let mutable = start_token.kind == TokenKind::Var;

    let name_token = parser.expect(TokenKind::Identifier)?;
    let name = parser.text(&name_token);

    parser.expect(TokenKind::Colon)?;

    let type_annotation = if parser.current_token_kind() == TokenKind::Assignment {
        None
    } else {
        Some(parse_type(parser)?)
    };

    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser, BindingPower::DEFAULT)?;

    Ok(parser.alloc(Expr::new(
        ExprKind::VariableDefinition(VariableDefinition {
            name,
            symbol: SymbolId::UNRESOLVED,
            mutable,
            type_annotation,
            value,
        }),
        start_token.span.start_position(),
    )))
}

pub fn parse_grouping_expr<'src>(parser: &mut Parser<'src>) -> Result<ExprId<'src>, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// `{ <expr>; <expr>; ... }`. An empty block, or a `;` right before the
/// closing brace, contributes an implicit `unit`.
pub fn parse_block_expr<'src>(parser: &mut Parser<'src>) -> Result<ExprId<'src>, Error> {
    let open = parser.expect(TokenKind::OpenCurly)?;

    let mut items = vec![];

    loop {
        let token = parser.current_token();
        if token.kind == TokenKind::CloseCurly {
            items.push(parser.alloc(Expr::new(ExprKind::Unit, token.span.start_position())));
            break;
        }

        items.push(parse_expr(parser, BindingPower::DEFAULT)?);

        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(parser.alloc(Expr::new(
        ExprKind::Block(Block {
            items: items.into_boxed_slice(),
        }),
        open.span.start_position(),
    )))
}

/// `.<ident>` optionally followed by an argument list.
pub fn parse_dot_call_expr<'src>(parser: &mut Parser<'src>) -> Result<ExprId<'src>, Error> {
    let dot = parser.expect(TokenKind::Dot)?;

    let name_token = parser.expect(TokenKind::Identifier)?;
    let function = parser.text(&name_token);

    let arguments = if parser.current_token_kind() == TokenKind::OpenParen {
        parse_arguments(parser)?
    } else {
        vec![]
    };

    Ok(parser.alloc(Expr::new(
        ExprKind::FunctionCall(FunctionCall {
            function,
            symbol: SymbolId::UNRESOLVED,
            arguments: arguments.into_boxed_slice(),
        }),
        dot.span.start_position(),
    )))
}

/// `<receiver>.f(<args>)`: the receiver becomes the first argument of `f`.
pub fn parse_member_call_expr<'src>(
    parser: &mut Parser<'src>,
    left: ExprId<'src>,
    _bp: BindingPower,
) -> Result<ExprId<'src>, Error> {
    let call = parse_dot_call_expr(parser)?;

    if let ExprKind::FunctionCall(function_call) = &mut parser.get_expr_mut(call).kind {
        let mut arguments = Vec::with_capacity(function_call.arguments.len() + 1);
        arguments.push(left);
        arguments.extend_from_slice(&function_call.arguments);
        function_call.arguments = arguments.into_boxed_slice();
    }

    Ok(call)
}

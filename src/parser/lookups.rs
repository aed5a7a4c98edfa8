use std::collections::HashMap;

use crate::{ast::expressions::ExprId, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Left and right binding power of an infix operator. An operator is
/// left-associative when `left < right` and right-associative otherwise.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct BindingPower {
    pub left: u8,
    pub right: u8,
}

impl BindingPower {
    /// Minimum binding power of a full expression.
    pub const DEFAULT: u8 = 0;

    pub const ASSIGNMENT: BindingPower = BindingPower { left: 2, right: 1 };
    pub const ADDITIVE: BindingPower = BindingPower { left: 3, right: 4 };
    pub const MEMBER: BindingPower = BindingPower {
        left: 99,
        right: 100,
    };
}

pub type NUDHandler<'src> = fn(&mut Parser<'src>) -> Result<ExprId<'src>, Error>;
pub type LEDHandler<'src> =
    fn(&mut Parser<'src>, ExprId<'src>, BindingPower) -> Result<ExprId<'src>, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.led(TokenKind::Assignment, BindingPower::ASSIGNMENT, parse_binary_expr);
    parser.led(TokenKind::Plus, BindingPower::ADDITIVE, parse_binary_expr);

    // a.f(b) is f(a, b)
    parser.led(TokenKind::Dot, BindingPower::MEMBER, parse_member_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Unit, parse_primary_expr);
    parser.nud(TokenKind::Integer, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_symbol_expr);
    parser.nud(TokenKind::Val, parse_var_def_expr);
    parser.nud(TokenKind::Var, parse_var_def_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::OpenCurly, parse_block_expr);
    parser.nud(TokenKind::Dot, parse_dot_call_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup<'src> = HashMap<TokenKind, NUDHandler<'src>>;
pub type LEDLookup<'src> = HashMap<TokenKind, LEDHandler<'src>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fun", TokenKind::Fun);
        map.insert("Int", TokenKind::Int);
        map.insert("Unit", TokenKind::UnitType);
        map.insert("unit", TokenKind::Unit);
        map.insert("val", TokenKind::Val);
        map.insert("var", TokenKind::Var);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Invalid,
    Integer,
    Identifier,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    Dot,
    Comma,
    Colon,
    Semicolon,
    Assignment, // =
    Plus,

    // Reserved
    Fun,
    Int,
    UnitType, // Unit
    Unit,     // unit
    Val,
    Var,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Invalid => "INVALID",
            TokenKind::Integer => "INTEGER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Assignment => "=",
            TokenKind::Plus => "+",
            TokenKind::Fun => "fun",
            TokenKind::Int => "Int",
            TokenKind::UnitType => "Unit",
            TokenKind::Unit => "unit",
            TokenKind::Val => "val",
            TokenKind::Var => "var",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A token does not own its text; slice it out of the source with
/// [`Token::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.span.start as usize..self.span.end as usize]
    }
}

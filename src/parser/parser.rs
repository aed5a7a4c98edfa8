//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser pulls tokens from the lexer one at a time (with a single token
//! of lookahead) and uses a Pratt parser with NUD/LED handlers for
//! expressions.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use la_arena::Arena;
use tracing::trace;

use crate::{
    ast::{
        ast::Program,
        expressions::{Expr, ExprId},
    },
    errors::errors::{Error, Expected, LexError, ParseError},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    source::SourceContext,
    Position, MK_ERROR,
};

use super::{
    decl::parse_function,
    expr::parse_expr,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup,
    },
};

/// The main parser structure that maintains parsing state.
///
/// Expressions are allocated into the arena that becomes the `Program`'s
/// expression store once parsing finishes.
pub struct Parser<'src> {
    /// Token source; only its scan position is kept
    lexer: Lexer<'src>,
    /// Every expression parsed so far
    exprs: Arena<Expr<'src>>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup<'src>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup<'src>,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` with empty lookup tables.
    pub fn new(source: &'src str) -> Self {
        Parser {
            lexer: Lexer::new(source),
            exprs: Arena::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&mut self) -> Token {
        self.lexer.peek()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&mut self) -> TokenKind {
        self.lexer.peek().kind
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Token {
        self.lexer.next_token()
    }

    /// Returns the source text covered by `token`.
    pub fn text(&self, token: &Token) -> &'src str {
        token.text(self.lexer.source())
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an error
    /// naming the expected and the found token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            Err(self.unexpected(token, Expected::Token(expected_kind)))
        } else {
            Ok(self.advance())
        }
    }

    /// Builds the error for a token that cannot appear here. Invalid tokens
    /// are reported as lexical errors.
    pub fn unexpected(&self, token: Token, expected: Expected) -> Error {
        let position = token.span.start_position();

        if token.kind == TokenKind::Invalid {
            MK_ERROR!(
                LexError::UnrecognisedToken {
                    token: self.text(&token).to_string()
                },
                position
            )
        } else {
            MK_ERROR!(
                ParseError::UnexpectedToken {
                    expected,
                    found: token.kind
                },
                position
            )
        }
    }

    /// Moves an expression into the arena.
    pub fn alloc(&mut self, expr: Expr<'src>) -> ExprId<'src> {
        self.exprs.alloc(expr)
    }

    pub fn get_expr_mut(&mut self, id: ExprId<'src>) -> &mut Expr<'src> {
        &mut self.exprs[id]
    }

    /// Returns the NUD handler registered for `kind`.
    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler<'src>> {
        self.nud_lookup.get(&kind).copied()
    }

    /// Returns the LED handler and binding power registered for `kind`.
    pub fn get_led(&self, kind: TokenKind) -> Option<(LEDHandler<'src>, BindingPower)> {
        let handler = self.led_lookup.get(&kind).copied()?;
        let binding_power = self.binding_power_lookup.get(&kind).copied()?;
        Some((handler, binding_power))
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<'src>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<'src>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&mut self) -> Position {
        self.current_token().span.start_position()
    }

    /// Hands the expression arena over to the caller.
    pub fn finish(self) -> Arena<Expr<'src>> {
        self.exprs
    }
}

/// Parses a whole translation unit: a sequence of function declarations up
/// to `EOF`.
///
/// Stops at the first malformed construct.
pub fn parse<'src>(source: &SourceContext<'src>) -> Result<Program<'src>, Error> {
    let mut parser = Parser::new(source.text);
    create_token_lookups(&mut parser);

    let mut functions = vec![];

    while parser.current_token_kind() != TokenKind::EOF {
        let function = parse_function(&mut parser)?;
        trace!(
            name = function.name,
            parameters = function.parameters.len(),
            "parsed function"
        );
        functions.push(function);
    }

    Ok(Program {
        functions,
        exprs: parser.finish(),
    })
}

/// Parses `source` as one expression that must span the whole input.
pub fn parse_expression(source: &str) -> Result<(Arena<Expr<'_>>, ExprId<'_>), Error> {
    let mut parser = Parser::new(source);
    create_token_lookups(&mut parser);

    let expr = parse_expr(&mut parser, BindingPower::DEFAULT)?;
    parser.expect(TokenKind::EOF)?;

    Ok((parser.finish(), expr))
}

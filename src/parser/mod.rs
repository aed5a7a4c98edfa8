//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's tokens into a
//! `Program`. It uses a Pratt parser for expressions with binding powers for
//! operator precedence, and handles:
//!
//! - Function declarations and their parameter lists
//! - Expression parsing (binary ops, calls, blocks, variable definitions)
//! - Type annotations
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing. Parsing stops at the first error.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod types;

//! Lexical analysis module.
//!
//! This module contains the lexer that converts a source buffer into tokens
//! on demand. It handles:
//!
//! - Recognition of keywords, identifiers, integer literals and punctuation
//! - Token spans (half-open byte ranges) for error reporting
//! - Line comments and whitespace
//! - Unrecognised input, surfaced as `Invalid` tokens rather than errors

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

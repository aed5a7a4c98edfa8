//! Error types and error handling for the front end.
//!
//! Every stage has its own error enum (`LexError`, `ParseError`, `NameError`,
//! `TypeError`). They are collected into `ErrorImpl` and carried together with
//! the source position in `Error`, which is what the stage entry points
//! return. The first error of a translation unit stops its processing.

pub mod errors;

#[cfg(test)]
mod tests;

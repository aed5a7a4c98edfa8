//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::ast::ast::Type;
use crate::errors::errors::{
    Error, ErrorImpl, ErrorTip, Expected, LexError, NameError, ParseError, TypeError,
};
use crate::lexer::tokens::TokenKind;
use crate::{Position, MK_ERROR};

#[test]
fn test_error_creation() {
    let error = Error::new(
        LexError::UnrecognisedToken {
            token: "@".to_string(),
        }
        .into(),
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position(), Position(10));
}

#[test]
fn test_error_macro_converts_stage_errors() {
    let error = MK_ERROR!(
        NameError::VariableNotDeclared {
            variable: "y".to_string()
        },
        Position(3)
    );

    assert!(matches!(
        error.get_error(),
        ErrorImpl::Name(NameError::VariableNotDeclared { .. })
    ));
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ParseError::UnexpectedToken {
            expected: Expected::Token(TokenKind::CloseParen),
            found: TokenKind::Semicolon,
        }
        .into(),
        Position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.to_string(), "expected `)` but got `;`");
}

#[test]
fn test_expected_display() {
    assert_eq!(Expected::Token(TokenKind::Identifier).to_string(), "`IDENTIFIER`");
    assert_eq!(Expected::Expression.to_string(), "EXPRESSION");
    assert_eq!(Expected::Type.to_string(), "type");
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::new(
        TypeError::TypeMatchError {
            expected: Type::Int,
            received: Type::Unit,
        }
        .into(),
        Position(0),
    );

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert_eq!(
        error.to_string(),
        "types do not match: expected `Int`, received `Unit`"
    );
}

#[test]
fn test_name_error_messages() {
    let error = Error::new(
        NameError::FunctionAlreadyDeclared {
            function: "main".to_string(),
        }
        .into(),
        Position(0),
    );
    assert_eq!(error.get_error_name(), "FunctionAlreadyDeclared");
    assert_eq!(error.to_string(), "function `main` already defined");

    let error = Error::new(
        NameError::FunctionNotDeclared {
            function: "g".to_string(),
        }
        .into(),
        Position(0),
    );
    assert_eq!(error.get_error_name(), "FunctionNotDeclared");
    assert_eq!(error.to_string(), "function name `g` is not bound");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        LexError::UnrecognisedToken {
            token: "@".to_string(),
        }
        .into(),
        Position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ParseError::UnexpectedToken {
            expected: Expected::Token(TokenKind::CloseCurly),
            found: TokenKind::EOF,
        }
        .into(),
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_return_type_tip_mentions_default() {
    let error = Error::new(
        TypeError::ReturnTypeMatchError {
            function: "f".to_string(),
            declared: Type::Unit,
            received: Type::Int,
        }
        .into(),
        Position(0),
    );

    assert!(error.get_tip().to_string().contains("`Unit`"));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_argument_count_errors() {
    let error = Error::new(
        TypeError::UnexpectedArguments {
            expected: 2,
            received: 3,
        }
        .into(),
        Position(0),
    );
    assert_eq!(error.get_error_name(), "UnexpectedArguments");

    let error = Error::new(
        TypeError::MissingArguments {
            expected: 3,
            received: 1,
        }
        .into(),
        Position(0),
    );
    assert_eq!(error.get_error_name(), "MissingArguments");
    assert_eq!(error.to_string(), "missing arguments: expected 3, received 1");
}

use std::fmt::Display;

use thiserror::Error;

use crate::{ast::ast::Type, lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::Lex(LexError::UnrecognisedToken { .. }) => "UnrecognisedToken",
            ErrorImpl::Parse(ParseError::UnexpectedToken { .. }) => "UnexpectedToken",
            ErrorImpl::Parse(ParseError::NumberParseError { .. }) => "NumberParseError",
            ErrorImpl::Name(NameError::FunctionAlreadyDeclared { .. }) => "FunctionAlreadyDeclared",
            ErrorImpl::Name(NameError::ParameterAlreadyDeclared { .. }) => {
                "ParameterAlreadyDeclared"
            }
            ErrorImpl::Name(NameError::VariableNotDeclared { .. }) => "VariableNotDeclared",
            ErrorImpl::Name(NameError::FunctionNotDeclared { .. }) => "FunctionNotDeclared",
            ErrorImpl::Type(TypeError::TypeMatchError { .. }) => "TypeMatchError",
            ErrorImpl::Type(TypeError::OperandTypeMatchError { .. }) => "OperandTypeMatchError",
            ErrorImpl::Type(TypeError::InvalidAssignmentTarget) => "InvalidAssignmentTarget",
            ErrorImpl::Type(TypeError::UnexpectedArguments { .. }) => "UnexpectedArguments",
            ErrorImpl::Type(TypeError::MissingArguments { .. }) => "MissingArguments",
            ErrorImpl::Type(TypeError::ArgumentTypeMatchError { .. }) => "ArgumentTypeMatchError",
            ErrorImpl::Type(TypeError::ReturnTypeMatchError { .. }) => "ReturnTypeMatchError",
            ErrorImpl::Type(TypeError::UnresolvedSymbol { .. }) => "UnresolvedSymbol",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::Lex(_) => ErrorTip::None,
            ErrorImpl::Parse(ParseError::UnexpectedToken { found, .. })
                if *found == TokenKind::EOF =>
            {
                ErrorTip::Suggestion(String::from("the file ended early, is a bracket unclosed?"))
            }
            ErrorImpl::Parse(ParseError::UnexpectedToken { .. }) => ErrorTip::None,
            ErrorImpl::Parse(ParseError::NumberParseError { .. }) => ErrorTip::Suggestion(
                String::from("is it above the integer limit?"),
            ),
            ErrorImpl::Name(NameError::VariableNotDeclared { variable }) => ErrorTip::Suggestion(
                format!("declare it first with `val {}: ... = ...`", variable),
            ),
            ErrorImpl::Name(_) => ErrorTip::None,
            ErrorImpl::Type(TypeError::InvalidAssignmentTarget) => ErrorTip::Suggestion(
                String::from("only variables can be assigned to"),
            ),
            ErrorImpl::Type(TypeError::ReturnTypeMatchError { declared, .. })
                if *declared == Type::Unit =>
            {
                ErrorTip::Suggestion(String::from(
                    "functions without a return type annotation return `Unit`",
                ))
            }
            ErrorImpl::Type(_) => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Errors of every stage, tagged with the stage that raised them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Type(#[from] TypeError),
}

/// The lexer itself never fails; an unrecognised run of characters becomes an
/// `Invalid` token which is reported once the parser reaches it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unrecognised token `{token}`")]
    UnrecognisedToken { token: String },
}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    Expression,
    Type,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "`{}`", kind),
            Expected::Expression => write!(f, "EXPRESSION"),
            Expected::Type => write!(f, "type"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} but got `{found}`")]
    UnexpectedToken { expected: Expected, found: TokenKind },
    #[error("error parsing integer `{token}`")]
    NumberParseError { token: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("function `{function}` already defined")]
    FunctionAlreadyDeclared { function: String },
    #[error("parameter `{parameter}` already defined")]
    ParameterAlreadyDeclared { parameter: String },
    #[error("variable name `{variable}` is not bound")]
    VariableNotDeclared { variable: String },
    #[error("function name `{function}` is not bound")]
    FunctionNotDeclared { function: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("types do not match: expected `{expected}`, received `{received}`")]
    TypeMatchError { expected: Type, received: Type },
    #[error("operand of `+` must be `Int`, received `{received}`")]
    OperandTypeMatchError { received: Type },
    #[error("left-hand side of `=` is not a variable")]
    InvalidAssignmentTarget,
    #[error("too many arguments: expected {expected}, received {received}")]
    UnexpectedArguments { expected: usize, received: usize },
    #[error("missing arguments: expected {expected}, received {received}")]
    MissingArguments { expected: usize, received: usize },
    #[error("argument types do not match: expected `{expected}`, received `{received}`")]
    ArgumentTypeMatchError { expected: Type, received: Type },
    #[error("body of `{function}` has type `{received}` but its return type is `{declared}`")]
    ReturnTypeMatchError {
        function: String,
        declared: Type,
        received: Type,
    },
    #[error("type of `{name}` is not known at this point")]
    UnresolvedSymbol { name: String },
}

//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals with separators
//! - Punctuation
//! - Comments and whitespace
//! - Invalid input

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("fun Int Unit unit val var"),
        vec![
            TokenKind::Fun,
            TokenKind::Int,
            TokenKind::UnitType,
            TokenKind::Unit,
            TokenKind::Val,
            TokenKind::Var,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    let source = "Fun int UNIT funny _val";
    let tokens = tokenize(source);

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[3].text(source), "funny");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase";
    let tokens = tokenize(source);

    let texts: Vec<&str> = tokens[..5].iter().map(|t| t.text(source)).collect();
    assert_eq!(texts, vec!["foo", "bar", "baz_123", "_underscore", "CamelCase"]);
    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let source = "42 0 1_000 7__";
    let tokens = tokenize(source);

    let texts: Vec<&str> = tokens[..4].iter().map(|t| t.text(source)).collect();
    assert_eq!(texts, vec!["42", "0", "1_000", "7__"]);
    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Integer));
}

#[test]
fn test_integer_followed_by_identifier() {
    let source = "12ab";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].text(source), "12");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text(source), "ab");
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } . , : ; = +"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_spans_are_half_open() {
    let tokens = tokenize("  val x");

    assert_eq!((tokens[0].span.start, tokens[0].span.end), (2, 5));
    assert_eq!((tokens[1].span.start, tokens[1].span.end), (6, 7));
    assert_eq!((tokens[2].span.start, tokens[2].span.end), (7, 7));
}

#[test]
fn test_tokenize_comments() {
    let source = "val x // this is a comment\nx + 1 // trailing";
    let tokens = tokenize(source);

    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Val,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Integer,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[2].text(source), "x");
    assert_eq!(tokens[5].span.start as usize, source.len());
}

#[test]
fn test_lone_slash_is_invalid() {
    let source = "1 / 2";
    let tokens = tokenize(source);

    assert_eq!(tokens[1].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].text(source), "/");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
}

#[test]
fn test_invalid_run_stops_at_newline() {
    let source = "val x = @ 1 2\ny";
    let tokens = tokenize(source);

    assert_eq!(tokens[3].kind, TokenKind::Invalid);
    assert_eq!(tokens[3].text(source), "@ 1 2");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].text(source), "y");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_invalid_run_at_end_of_input() {
    let source = "x #!";
    let tokens = tokenize(source);

    assert_eq!(tokens[1].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].text(source), "#!");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_embedded_nul_is_invalid() {
    let source = "x\0y";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].text(source), "\0y");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_empty_and_whitespace_only_input() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds(" \t\r\n  "), vec![TokenKind::EOF]);
    assert_eq!(kinds("// only a comment"), vec![TokenKind::EOF]);
}

#[test]
fn test_peek_does_not_advance() {
    let mut lexer = Lexer::new("fun main");

    assert_eq!(lexer.peek().kind, TokenKind::Fun);
    assert_eq!(lexer.peek().kind, TokenKind::Fun);
    assert_eq!(lexer.next_token().kind, TokenKind::Fun);
    assert_eq!(lexer.peek().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_tokens_reconstruct_source() {
    let source = "fun add(a: Int, var b: Int): Int = {\n  // add them\n  val c: = a + b;\n  c = c + 1_0;\n  c.id()\n}\n";
    let tokens = tokenize(source);

    let joined: String = tokens.iter().map(|t| t.text(source)).collect();
    let expected: String = source
        .lines()
        .map(|line| line.split("//").next().unwrap_or(""))
        .collect::<String>()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    assert_eq!(joined, expected);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Invalid));
}

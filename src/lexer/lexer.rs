use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Identifier,
    Integer,
    Slash,
    Comment,
    Invalid,
}

/// An on-demand tokenizer. The only state kept between calls is the scan
/// position, so `peek` is simply `next_token` followed by a rewind.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer { source, pos: 0 }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    fn at(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Scans and returns the next token. Once the input is exhausted every
    /// call returns `EOF` with an empty span at the end of the buffer.
    pub fn next_token(&mut self) -> Token {
        let mut start = self.pos;
        let mut state = State::Start;

        let kind = loop {
            match state {
                State::Start => {
                    let Some(c) = self.at() else {
                        return MK_TOKEN!(TokenKind::EOF, self.pos, self.pos);
                    };
                    self.pos += 1;

                    match c {
                        b' ' | b'\n' | b'\t' | b'\r' => start = self.pos,
                        b'/' => state = State::Slash,
                        b'(' => break TokenKind::OpenParen,
                        b')' => break TokenKind::CloseParen,
                        b'{' => break TokenKind::OpenCurly,
                        b'}' => break TokenKind::CloseCurly,
                        b'.' => break TokenKind::Dot,
                        b',' => break TokenKind::Comma,
                        b':' => break TokenKind::Colon,
                        b';' => break TokenKind::Semicolon,
                        b'=' => break TokenKind::Assignment,
                        b'+' => break TokenKind::Plus,
                        c if c.is_ascii_alphabetic() || c == b'_' => state = State::Identifier,
                        c if c.is_ascii_digit() => state = State::Integer,
                        // Embedded NUL bytes end up here as well.
                        _ => state = State::Invalid,
                    }
                }
                State::Identifier => match self.at() {
                    Some(c) if c.is_ascii_alphanumeric() || c == b'_' => self.pos += 1,
                    _ => {
                        let ident = &self.source[start..self.pos];
                        break RESERVED_LOOKUP
                            .get(ident)
                            .copied()
                            .unwrap_or(TokenKind::Identifier);
                    }
                },
                State::Integer => match self.at() {
                    Some(c) if c.is_ascii_digit() || c == b'_' => self.pos += 1,
                    _ => break TokenKind::Integer,
                },
                State::Slash => match self.at() {
                    Some(b'/') => {
                        self.pos += 1;
                        state = State::Comment;
                    }
                    _ => break TokenKind::Invalid,
                },
                State::Comment => match self.at() {
                    Some(b'\n') => {
                        self.pos += 1;
                        start = self.pos;
                        state = State::Start;
                    }
                    Some(_) => self.pos += 1,
                    None => {
                        start = self.pos;
                        state = State::Start;
                    }
                },
                State::Invalid => match self.at() {
                    None | Some(b'\n') => break TokenKind::Invalid,
                    Some(_) => self.pos += 1,
                },
            }
        };

        MK_TOKEN!(kind, start, self.pos)
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Token {
        let pos = self.pos;
        let token = self.next_token();
        self.pos = pos;
        token
    }
}

/// Drains a lexer over `source` into a vector. The last token is always `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        tokens.push(token);

        if token.kind == TokenKind::EOF {
            break;
        }
    }

    tokens
}

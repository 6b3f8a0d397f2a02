use std::rc::Rc;

use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Byte-oriented scanner producing one token per call to [`Lexer::next_token`].
///
/// `position` indexes the byte under examination (`ch`), `read_position` the
/// next unread byte. `ch` is `0` once the input is exhausted.
#[derive(Clone, Debug)]
pub struct Lexer {
    input: String,
    position: usize,
    read_position: usize,
    ch: u8,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: impl Into<String>, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            input: source.into(),
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
        };
        lexer.read_char();
        lexer
    }

    /// Name of the source being scanned, shared with every token span.
    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn source(&self) -> &str {
        &self.input
    }

    fn read_char(&mut self) {
        self.ch = self.peek_char();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        self.input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0)
    }

    fn at_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Consumes a run of bytes matching `accept` and returns it as a slice of the input.
    fn read_while(&mut self, accept: fn(u8) -> bool) -> &str {
        let start = self.position;
        while !self.at_eof() && accept(self.ch) {
            self.read_char();
        }
        &self.input[start..self.position]
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        let token = MK_TOKEN!(kind, (self.ch as char).to_string(), start, start + 1, self.file);
        self.read_char();
        token
    }

    /// Emits `double` when the next byte is `second`, otherwise `single`.
    fn two_char(&mut self, second: u8, double: TokenKind, single: TokenKind) -> Token {
        if self.peek_char() != second {
            return self.single(single);
        }

        let start = self.position;
        let value = format!("{}{}", self.ch as char, second as char);
        self.read_char();
        self.read_char();
        MK_TOKEN!(double, value, start, start + 2, self.file)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = if self.at_eof() {
            MK_TOKEN!(
                TokenKind::EOF,
                String::new(),
                self.input.len(),
                self.input.len(),
                self.file
            )
        } else {
            match self.ch {
                b'+' => self.single(TokenKind::Plus),
                b'-' => self.single(TokenKind::Dash),
                b'*' => self.single(TokenKind::Star),
                b'/' => self.single(TokenKind::Slash),
                b'<' => self.single(TokenKind::Less),
                b'>' => self.single(TokenKind::Greater),
                b',' => self.single(TokenKind::Comma),
                b';' => self.single(TokenKind::Semicolon),
                b'(' => self.single(TokenKind::OpenParen),
                b')' => self.single(TokenKind::CloseParen),
                b'{' => self.single(TokenKind::OpenCurly),
                b'}' => self.single(TokenKind::CloseCurly),
                b'=' => self.two_char(b'=', TokenKind::Equals, TokenKind::Assignment),
                b'!' => self.two_char(b'=', TokenKind::NotEquals, TokenKind::Not),
                ch if is_letter(ch) => {
                    let start = self.position;
                    let word = self.read_while(is_identifier_char).to_string();
                    let end = start + word.len();
                    MK_TOKEN!(lookup_identifier(&word), word, start, end, self.file)
                }
                ch if ch.is_ascii_digit() => {
                    let start = self.position;
                    let digits = self.read_while(|c| c.is_ascii_digit()).to_string();
                    let end = start + digits.len();
                    MK_TOKEN!(TokenKind::Int, digits, start, end, self.file)
                }
                _ => self.single(TokenKind::Illegal),
            }
        };

        trace!(kind = %token.kind, value = %token.value, "token");
        token
    }
}

/// Yields every token up to, but not including, `EOF`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_identifier_char(ch: u8) -> bool {
    is_letter(ch) || ch.is_ascii_digit()
}

/// Scans `source` to exhaustion. The returned vector always ends with `EOF`.
pub fn tokenize(source: impl Into<String>, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}

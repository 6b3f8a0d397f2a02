//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Single and two-character operators
//! - Whitespace handling and illegal bytes
//! - End-of-input behaviour

use std::rc::Rc;

use crate::MK_TOKEN;

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_identifier, TokenKind, RESERVED_LOOKUP},
};

fn kinds_and_values(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source, Some("test.mk".to_string()))
        .into_iter()
        .map(|token| (token.kind, token.value))
        .collect()
}

#[test]
fn test_tokenize_program() {
    let source = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;";

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assignment, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Not, "!"),
        (TokenKind::Dash, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Star, "*"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::Greater, ">"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Int, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Int, "10"),
        (TokenKind::Equals, "=="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "10"),
        (TokenKind::NotEquals, "!="),
        (TokenKind::Int, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    let tokens = kinds_and_values(source);
    assert_eq!(tokens.len(), expected.len());

    for (i, ((kind, value), (expected_kind, expected_value))) in
        tokens.iter().zip(expected.iter()).enumerate()
    {
        assert_eq!(kind, expected_kind, "token {i} kind");
        assert_eq!(value, expected_value, "token {i} value");
    }
}

#[test]
fn test_tokenize_keywords() {
    let tokens = kinds_and_values("fn let if else return true false");
    let kinds: Vec<TokenKind> = tokens.iter().map(|(kind, _)| *kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Fn,
            TokenKind::Let,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::False,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = kinds_and_values("foo bar baz_123 _underscore CamelCase letter elsewhere");

    for (kind, _) in &tokens[..7] {
        assert_eq!(*kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[2].1, "baz_123");
    assert_eq!(tokens[3].1, "_underscore");
    assert_eq!(tokens[5].1, "letter");
    assert_eq!(tokens[6].1, "elsewhere");
    assert_eq!(tokens[7].0, TokenKind::EOF);
}

#[test]
fn test_else_if_lexes_as_two_keywords() {
    assert_eq!(
        kinds_and_values("else if elseif else isomething"),
        vec![
            (TokenKind::Else, "else".to_string()),
            (TokenKind::If, "if".to_string()),
            (TokenKind::Identifier, "elseif".to_string()),
            (TokenKind::Else, "else".to_string()),
            (TokenKind::Identifier, "isomething".to_string()),
            (TokenKind::EOF, String::new()),
        ]
    );
}

#[test]
fn test_tokenize_numbers_have_no_sign() {
    assert_eq!(
        kinds_and_values("-42 0 007"),
        vec![
            (TokenKind::Dash, "-".to_string()),
            (TokenKind::Int, "42".to_string()),
            (TokenKind::Int, "0".to_string()),
            (TokenKind::Int, "007".to_string()),
            (TokenKind::EOF, String::new()),
        ]
    );
}

#[test]
fn test_number_followed_by_letters() {
    assert_eq!(
        kinds_and_values("12abc"),
        vec![
            (TokenKind::Int, "12".to_string()),
            (TokenKind::Identifier, "abc".to_string()),
            (TokenKind::EOF, String::new()),
        ]
    );
}

#[test]
fn test_two_character_operators() {
    assert_eq!(
        kinds_and_values("== != = ! =!= !=="),
        vec![
            (TokenKind::Equals, "==".to_string()),
            (TokenKind::NotEquals, "!=".to_string()),
            (TokenKind::Assignment, "=".to_string()),
            (TokenKind::Not, "!".to_string()),
            (TokenKind::Assignment, "=".to_string()),
            (TokenKind::NotEquals, "!=".to_string()),
            (TokenKind::NotEquals, "!=".to_string()),
            (TokenKind::Assignment, "=".to_string()),
            (TokenKind::EOF, String::new()),
        ]
    );
}

#[test]
fn test_operator_at_end_of_input() {
    assert_eq!(
        kinds_and_values("x ="),
        vec![
            (TokenKind::Identifier, "x".to_string()),
            (TokenKind::Assignment, "=".to_string()),
            (TokenKind::EOF, String::new()),
        ]
    );
}

#[test]
fn test_illegal_characters() {
    assert_eq!(
        kinds_and_values("a @ $b"),
        vec![
            (TokenKind::Identifier, "a".to_string()),
            (TokenKind::Illegal, "@".to_string()),
            (TokenKind::Illegal, "$".to_string()),
            (TokenKind::Identifier, "b".to_string()),
            (TokenKind::EOF, String::new()),
        ]
    );
}

#[test]
fn test_nul_byte_is_illegal_not_eof() {
    let tokens = kinds_and_values("a\0b");

    assert_eq!(tokens[1].0, TokenKind::Illegal);
    assert_eq!(tokens[2], (TokenKind::Identifier, "b".to_string()));
    assert_eq!(tokens[3].0, TokenKind::EOF);
}

#[test]
fn test_non_ascii_bytes_are_illegal() {
    let tokens = kinds_and_values("é");

    // Two UTF-8 bytes, one illegal token each.
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].0, TokenKind::Illegal);
    assert_eq!(tokens[1].0, TokenKind::Illegal);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x", None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(kinds_and_values(""), vec![(TokenKind::EOF, String::new())]);
    assert_eq!(kinds_and_values(" \t\r\n"), vec![(TokenKind::EOF, String::new())]);
}

#[test]
fn test_iterator_stops_before_eof() {
    let tokens: Vec<_> = Lexer::new("let x = 1;", None).collect();

    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|token| token.kind != TokenKind::EOF));
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let ab == 12", Some("spans.mk".to_string()));
    let spans: Vec<(u32, u32)> = tokens
        .iter()
        .map(|token| (token.span.start.0, token.span.end.0))
        .collect();

    assert_eq!(spans, vec![(0, 3), (4, 6), (7, 9), (10, 12), (12, 12)]);
    assert_eq!(tokens[0].span.start.1.as_str(), "spans.mk");
}

#[test]
fn test_default_file_name() {
    let lexer = Lexer::new("", None);

    assert_eq!(lexer.file().as_str(), "shell");
    assert_eq!(lexer.source(), "");
}

#[test]
fn test_lookup_identifier() {
    for (word, kind) in RESERVED_LOOKUP.iter() {
        assert_eq!(lookup_identifier(word), *kind);
        assert!(kind.is_keyword());
    }

    assert_eq!(lookup_identifier("foobar"), TokenKind::Identifier);
    assert_eq!(lookup_identifier("Let"), TokenKind::Identifier);
    assert_eq!(lookup_identifier("elseif"), TokenKind::Identifier);
    assert!(!TokenKind::Identifier.is_keyword());
}

#[test]
fn test_token_debug_string() {
    let tokens = tokenize("x 5 ; @ != let", None);

    assert_eq!(tokens[0].debug_string(), "Identifier (x)");
    assert_eq!(tokens[1].debug_string(), "Int (5)");
    assert_eq!(tokens[2].debug_string(), "Semicolon (;)");
    assert_eq!(tokens[3].debug_string(), "Illegal (@)");
    assert_eq!(tokens[4].debug_string(), "NotEquals (!=)");
    assert_eq!(tokens[5].debug_string(), "Let (let)");
    assert_eq!(tokens[6].debug_string(), "EOF ()");
}

#[test]
fn test_token_offsets_saturate() {
    let file = Rc::new("test.mk".to_string());

    let token = MK_TOKEN!(TokenKind::Int, "1".to_string(), 7usize, 8usize, file);
    assert_eq!((token.span.start.0, token.span.end.0), (7, 8));

    let far = u32::MAX as u64 + 10;
    let token = MK_TOKEN!(TokenKind::Int, "1".to_string(), far, far + 1, file);
    assert_eq!(token.span.start.0, u32::MAX);
    assert_eq!(token.span.end.0, u32::MAX);
    assert_eq!(token.span.start.1.as_str(), "test.mk");
}

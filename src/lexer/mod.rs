//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Byte-at-a-time scanning with one character of lookahead
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Token position tracking for error reporting
//! - Whitespace skipping and illegal-byte reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

#![allow(clippy::module_inception)]

use std::{
    fmt::{self, Display, Formatter},
    rc::Rc,
};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Byte offset into a named source. Offsets are `u32`; anything beyond
/// `u32::MAX` is clamped to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text (without its newline) and
/// the offset of `position` within that line. A position at the very end of
/// the source resolves to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let text = line.trim_end_matches(['\n', '\r']);
            return Some((line_number, text.to_string(), (pos - start).min(text.len())));
        }

        start = end;
        line_number += 1;
    }

    // `pos == source.len()`: point just past the final character.
    match source.split_inclusive('\n').last() {
        Some(last) if !last.ends_with('\n') => {
            Some((line_number - 1, last.to_string(), last.len()))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}


/// An error paired with the source it points into, displayed as
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: expected `Identifier`, found `Assignment`)
/// -> shell
///   |
/// 1 | let = 4;
///   | ----^
/// ```
pub struct ErrorReport<'a> {
    error: &'a Error,
    source: &'a str,
}

impl<'a> ErrorReport<'a> {
    pub fn new(error: &'a Error, source: &'a str) -> Self {
        ErrorReport { error, source }
    }
}

impl Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let position = self.error.get_position();

        if let ErrorTip::None = self.error.get_tip() {
            writeln!(f, "Error: {}", self.error.get_error_name())?;
        } else {
            writeln!(
                f,
                "Error: {} ({})",
                self.error.get_error_name(),
                self.error.get_tip()
            )?;
        }
        writeln!(f, "-> {}", position.1)?;

        let Some((line, line_text, line_pos)) = get_line_at_position(self.source, position.0)
        else {
            return writeln!(f, "   {}", self.error);
        };

        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        writeln!(f, "{:>padding$}", "|")?;

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        writeln!(f, "{} | {}", line_string, line_text_removed.trim_end())?;

        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
        writeln!(f, "{:>padding$} {:->arrows$}", "|", "^")
    }
}

/// Renders `error` against `source`; see [`ErrorReport`] for the layout.
pub fn render_error(error: &Error, source: &str) -> String {
    ErrorReport::new(error, source).to_string()
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}

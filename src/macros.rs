//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! The lexer builds every token through this macro so span construction
//! stays in one place.

/// Creates a Token instance spanning `$start..$end` of the lexer's source.
///
/// Offsets past `u32::MAX` saturate to `u32::MAX`.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$start` - Byte offset of the first character
/// * `$end` - Byte offset one past the last character
/// * `$file` - The `Rc<String>` naming the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), 0, 2, lexer.file);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $start:expr, $end:expr, $file:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $crate::Span {
                start: $crate::Position(
                    u32::try_from($start).unwrap_or(u32::MAX),
                    ::std::rc::Rc::clone(&$file),
                ),
                end: $crate::Position(
                    u32::try_from($end).unwrap_or(u32::MAX),
                    ::std::rc::Rc::clone(&$file),
                ),
            },
        }
    };
}

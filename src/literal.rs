//! Single-quote screening for hand-built SQL literals.

pub const SINGLE_QUOTE: &str = "'";
pub const SINGLE_QUOTE_TWICE: &str = "''";

/// Double every single quote in `src`.
///
/// Only makes `src` safe inside a `'...'` literal; it is not a general
/// sanitizer. Prefer bound parameters wherever the driver allows them.
pub fn escape_single_quotes(src: &str) -> String {
    src.replace(SINGLE_QUOTE, SINGLE_QUOTE_TWICE)
}

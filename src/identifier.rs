//! Identifier safety checks.
//!
//! Table and procedure names cannot be bound as query parameters, so any name
//! that ends up interpolated into SQL text has to pass [`check_identifier`]
//! first. This is a character whitelist, not a grammar: leading digits,
//! length limits and reserved words are not looked at.

use crate::error::{Error, Result};

/// Returns `true` for `[A-Za-z0-9_]`.
pub fn is_identifier_symbol(symbol: char) -> bool {
    symbol.is_ascii_alphabetic() || symbol.is_ascii_digit() || symbol == '_'
}

/// Check that every character of `name` is a Latin letter, a decimal digit or
/// an underscore.
///
/// Fails with [`Error::BadSymbol`] on the first offending character. An empty
/// name has nothing to reject and passes; callers that need a non-empty name
/// must check that separately.
pub fn check_identifier(name: &str) -> Result<()> {
    match name.chars().find(|c| !is_identifier_symbol(*c)) {
        Some(symbol) => Err(Error::BadSymbol(symbol)),
        None => Ok(()),
    }
}

/// [`check_identifier`] applied to a table name.
#[inline]
pub fn check_table_name(table_name: &str) -> Result<()> {
    check_identifier(table_name)
}

/// [`check_identifier`] applied to a procedure name.
#[inline]
pub fn check_procedure_name(procedure_name: &str) -> Result<()> {
    check_identifier(procedure_name)
}

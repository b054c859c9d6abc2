//! Bracketed Tuple Syntax.
//!
//! Every input stream is a sequence of lines of the form `<a,b,...>`. This module
//! splits such a line into trimmed fields and parses the two field kinds the
//! formats share: register names and integer values.

use crate::common::constants::{NUM_REGS, REGISTER_PREFIX};
use crate::common::error::ParseError;

/// Splits `<a,b,c>` into its trimmed fields, requiring exactly `expected` of them.
///
/// Surrounding whitespace (including a DOS `\r`) is ignored.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::tuple::fields;
///
/// assert_eq!(fields("<R1, 42>\r", 2).unwrap(), vec!["R1", "42"]);
/// assert!(fields("R1,42", 2).is_err());
/// assert!(fields("<R1,42,7>", 2).is_err());
/// ```
pub fn fields(line: &str, expected: usize) -> Result<Vec<&str>, ParseError> {
    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| ParseError::MissingBrackets(trimmed.to_owned()))?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return Err(ParseError::FieldCount {
            expected,
            found: parts.len(),
        });
    }
    Ok(parts)
}

/// Parses a register name `R0`-`R7` into its index.
///
/// The prefix is case-insensitive; the index must be a single in-range digit.
pub fn register(token: &str) -> Result<usize, ParseError> {
    let invalid = || ParseError::InvalidRegister(token.to_owned());

    let mut chars = token.chars();
    let prefix = chars.next().ok_or_else(invalid)?;
    if !prefix.eq_ignore_ascii_case(&REGISTER_PREFIX) {
        return Err(invalid());
    }

    let digits = chars.as_str();
    if digits.len() != 1 {
        return Err(invalid());
    }

    match digits.parse::<usize>() {
        Ok(idx) if idx < NUM_REGS => Ok(idx),
        _ => Err(invalid()),
    }
}

/// Parses a signed 32-bit integer value.
pub fn value(token: &str) -> Result<i32, ParseError> {
    token
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidValue(token.to_owned()))
}

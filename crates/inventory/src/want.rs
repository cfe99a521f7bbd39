//! Parsing of user-supplied want values.

use stockroom_core::{DomainError, DomainResult};

/// Parse a want value: a non-negative integer, surrounding whitespace allowed.
pub fn parse_want(input: &str) -> DomainResult<u32> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| DomainError::validation(format!("`{trimmed}` is not a number")))?;

    if value < 0 {
        return Err(DomainError::validation(format!(
            "want value cannot be negative (got {value})"
        )));
    }
    u32::try_from(value)
        .map_err(|_| DomainError::validation(format!("want value {value} is too large")))
}

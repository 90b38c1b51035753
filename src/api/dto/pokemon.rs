//! Path parameters for Pokemon lookups.

use crate::error::AppError;

/// Parses the `{id}` path segment.
///
/// Only the integer syntax is checked here; positivity is checked by the
/// service so the CLI shares the rule.
pub fn parse_pokemon_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::invalid_input("Pokemon ID must be an integer"))
}

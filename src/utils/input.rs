//! Validation and normalization of caller-supplied parameters.
//!
//! All checks are pure and run before any upstream call is made.

use crate::error::AppError;

pub const DEFAULT_LIMIT: i64 = 20;
pub const DEFAULT_OFFSET: i64 = 0;
pub const MAX_LIMIT: i64 = 1000;

/// Validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// Ensures an identifier is strictly positive.
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] with `"<field> must be positive"`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(ensure_positive(25, "Pokemon ID")?, 25);
/// assert!(ensure_positive(0, "Pokemon ID").is_err());
/// ```
pub fn ensure_positive(value: i64, field: &str) -> Result<i64, AppError> {
    if value <= 0 {
        return Err(AppError::invalid_input(format!("{field} must be positive")));
    }
    Ok(value)
}

/// Trims and lowercases a name or type token.
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] with `"<field> cannot be empty"` when
/// nothing is left after trimming.
pub fn normalize_token(raw: &str, field: &str) -> Result<String, AppError> {
    let cleaned = raw.trim().to_lowercase();
    if cleaned.is_empty() {
        return Err(AppError::invalid_input(format!("{field} cannot be empty")));
    }
    Ok(cleaned)
}

/// Checks a listing window, applying defaults for missing values.
///
/// # Validation
///
/// - `limit` must be within `1..=1000` (default 20)
/// - `offset` must be non-negative (default 0)
///
/// The limit is checked first.
pub fn validate_pagination(limit: Option<i64>, offset: Option<i64>) -> Result<Pagination, AppError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    let offset = offset.unwrap_or(DEFAULT_OFFSET);

    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(AppError::invalid_input(format!(
            "Limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    if offset < 0 {
        return Err(AppError::invalid_input("Offset must be non-negative"));
    }

    Ok(Pagination { limit, offset })
}

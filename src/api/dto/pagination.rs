//! Listing query parameters.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::error::AppError;

/// Raw `limit`/`offset` query parameters.
///
/// Values are kept as text so that a non-numeric value is reported through the
/// regular error envelope instead of an extractor rejection. An empty value
/// (`?limit=`) counts as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub limit: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub offset: Option<String>,
}

impl ListQueryParams {
    /// Parses the raw values into integers without applying range checks.
    ///
    /// Range checks and defaults belong to
    /// [`crate::utils::input::validate_pagination`].
    pub fn parse(&self) -> Result<(Option<i64>, Option<i64>), AppError> {
        let limit = parse_integer(self.limit.as_deref(), "Limit")?;
        let offset = parse_integer(self.offset.as_deref(), "Offset")?;
        Ok((limit, offset))
    }
}

fn parse_integer(raw: Option<&str>, field: &str) -> Result<Option<i64>, AppError> {
    raw.map(|value| {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::invalid_input(format!("{field} must be an integer")))
    })
    .transpose()
}

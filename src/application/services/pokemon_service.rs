//! Pokemon lookup service.

use std::sync::Arc;

use crate::domain::entities::{PokemonListPage, PokemonRecord, TypeMembership};
use crate::domain::source::{PokemonSource, UpstreamFailure, UpstreamRequest};
use crate::error::AppError;
use crate::utils::input::{ensure_positive, normalize_token, validate_pagination};

/// Service composing input validation, the upstream call and the shape
/// contract for every Pokemon operation.
///
/// Each operation validates first and makes at most one upstream call.
pub struct PokemonService<S: PokemonSource> {
    source: Arc<S>,
}

/// Turns an upstream 404 into an operation-specific not-found error.
fn not_found_as(message: String) -> impl FnOnce(UpstreamFailure) -> AppError {
    move |failure| match failure {
        UpstreamFailure::NotFound => AppError::not_found(message),
        other => AppError::from(other),
    }
}

impl<S: PokemonSource> PokemonService<S> {
    /// Creates a new Pokemon service.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Looks up a Pokemon by its numeric ID.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] if `id` is not positive (no upstream call)
    /// - [`AppError::NotFound`] with `Pokemon with ID {id} not found`
    /// - [`AppError::UpstreamUnreachable`] / [`AppError::UpstreamError`] on upstream failure
    /// - [`AppError::ShapeMismatch`] if the payload does not conform
    pub async fn get_by_id(&self, id: i64) -> Result<PokemonRecord, AppError> {
        let id = ensure_positive(id, "Pokemon ID")?;

        let payload = self
            .source
            .get_json(UpstreamRequest::get("pokemon").segment(id))
            .await
            .map_err(not_found_as(format!("Pokemon with ID {id} not found")))?;

        PokemonRecord::from_upstream(&payload)
            .map_err(|violations| AppError::ShapeMismatch { violations })
    }

    /// Looks up a Pokemon by name. The name is trimmed and lowercased first.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_by_id`], with the not-found message
    /// `Pokemon with name "{name}" not found` using the normalized name.
    pub async fn get_by_name(&self, name: &str) -> Result<PokemonRecord, AppError> {
        let name = normalize_token(name, "Pokemon name")?;

        let payload = self
            .source
            .get_json(UpstreamRequest::get("pokemon").segment(&name))
            .await
            .map_err(not_found_as(format!(r#"Pokemon with name "{name}" not found"#)))?;

        PokemonRecord::from_upstream(&payload)
            .map_err(|violations| AppError::ShapeMismatch { violations })
    }

    /// Fetches a page of the Pokemon collection.
    ///
    /// Missing values default to `limit = 20`, `offset = 0`. The collection
    /// endpoint has no dedicated not-found message.
    pub async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<PokemonListPage, AppError> {
        let window = validate_pagination(limit, offset)?;

        let request = UpstreamRequest::get("pokemon")
            .with_query("limit", window.limit)
            .with_query("offset", window.offset);

        let payload = self.source.get_json(request).await?;

        PokemonListPage::from_upstream(&payload)
            .map_err(|violations| AppError::ShapeMismatch { violations })
    }

    /// Lists the names of the Pokemon belonging to a type.
    ///
    /// A payload without a usable `pokemon` array yields an empty list rather
    /// than an error.
    pub async fn list_by_type(&self, pokemon_type: &str) -> Result<TypeMembership, AppError> {
        let pokemon_type = normalize_token(pokemon_type, "Pokemon type")?;

        let payload = self
            .source
            .get_json(UpstreamRequest::get("type").segment(&pokemon_type))
            .await
            .map_err(not_found_as(format!(
                r#"Pokemon type "{pokemon_type}" not found"#
            )))?;

        Ok(TypeMembership::from_upstream(&payload))
    }

    /// Checks that the upstream service answers a minimal listing request.
    pub async fn ping(&self) -> Result<(), AppError> {
        let request = UpstreamRequest::get("pokemon")
            .with_query("limit", 1)
            .with_query("offset", 0);

        self.source.get_json(request).await?;
        Ok(())
    }
}

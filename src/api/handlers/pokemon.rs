//! Handlers for Pokemon lookup endpoints.
//!
//! Every handler delegates to [`crate::application::services::PokemonService`]
//! and lets [`AppError`] render failures as `400 {"detail": ...}`.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use crate::api::dto::pagination::ListQueryParams;
use crate::api::dto::pokemon::parse_pokemon_id;
use crate::domain::entities::{PokemonListPage, PokemonRecord, TypeMembership};
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves a Pokemon by numeric ID.
///
/// # Endpoint
///
/// `GET /pokemon/id/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request when the ID is not a positive integer, the Pokemon
/// does not exist (`Pokemon with ID {id} not found`), or PokeAPI fails.
pub async fn pokemon_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PokemonRecord>, AppError> {
    let id = parse_pokemon_id(&id)?;
    let record = state.pokemon_service.get_by_id(id).await?;
    Ok(Json(record))
}

/// Retrieves a Pokemon by name (case-insensitive, surrounding whitespace ignored).
///
/// # Endpoint
///
/// `GET /pokemon/name/{name}`
pub async fn pokemon_by_name_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PokemonRecord>, AppError> {
    let record = state.pokemon_service.get_by_name(&name).await?;
    Ok(Json(record))
}

/// Retrieves a page of the Pokemon collection.
///
/// # Endpoint
///
/// `GET /pokemon`
///
/// # Query Parameters
///
/// - `limit` (optional): Items per page (default: 20, range: 1-1000)
/// - `offset` (optional): Items to skip (default: 0)
pub async fn pokemon_list_handler(
    State(state): State<AppState>,
    query: Result<Query<ListQueryParams>, QueryRejection>,
) -> Result<Json<PokemonListPage>, AppError> {
    let Query(params) = query.map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;
    let (limit, offset) = params.parse()?;

    let page = state.pokemon_service.list(limit, offset).await?;
    Ok(Json(page))
}

/// Lists the names of all Pokemon of a type.
///
/// # Endpoint
///
/// `GET /pokemon/type/{type}`
///
/// # Response
///
/// ```json
/// { "results": ["charmander", "charmeleon", "charizard"] }
/// ```
pub async fn pokemon_by_type_handler(
    State(state): State<AppState>,
    Path(pokemon_type): Path<String>,
) -> Result<Json<TypeMembership>, AppError> {
    let names = state.pokemon_service.list_by_type(&pokemon_type).await?;
    Ok(Json(names))
}

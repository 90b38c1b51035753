//! API route configuration.

use crate::api::handlers::{
    pokemon_by_id_handler, pokemon_by_name_handler, pokemon_by_type_handler, pokemon_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Pokemon routes.
///
/// # Endpoints
///
/// - `GET /pokemon`               - Paginated listing (`limit`, `offset`)
/// - `GET /pokemon/id/{id}`       - Lookup by numeric ID
/// - `GET /pokemon/name/{name}`   - Lookup by name
/// - `GET /pokemon/type/{type}`   - Names of the Pokemon of a type
pub fn pokemon_routes() -> Router<AppState> {
    Router::new()
        .route("/pokemon", get(pokemon_list_handler))
        .route("/pokemon/id/{id}", get(pokemon_by_id_handler))
        .route("/pokemon/name/{name}", get(pokemon_by_name_handler))
        .route("/pokemon/type/{pokemon_type}", get(pokemon_by_type_handler))
}

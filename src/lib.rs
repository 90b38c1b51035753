//! # PokeAPI Gateway
//!
//! A small REST gateway in front of [PokeAPI](https://pokeapi.co), built with Axum.
//! Requests are validated before any network call, forwarded to PokeAPI as a
//! single GET, and the response is checked against a fixed shape before it is
//! returned.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Outward entities, shape contracts and the upstream source trait
//! - **Application Layer** ([`application`]) - Validation and orchestration per operation
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest client for PokeAPI
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `GET /pokemon/id/{id}` - Pokemon by ID
//! - `GET /pokemon/name/{name}` - Pokemon by name
//! - `GET /pokemon?limit=&offset=` - Paginated listing
//! - `GET /pokemon/type/{type}` - Names of the Pokemon of a type
//! - `GET /health` - Liveness check
//!
//! Every failure is answered with `400 Bad Request` and a `{"detail": "..."}` body.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::PokemonService;
    pub use crate::domain::entities::{PokemonListPage, PokemonRecord, TypeMembership};
    pub use crate::domain::source::{PokemonSource, UpstreamFailure, UpstreamRequest};
    pub use crate::error::AppError;
    pub use crate::infrastructure::pokeapi::{PokeApiSource, UpstreamSettings};
    pub use crate::state::AppState;
}

//! PokeAPI integration.
//!
//! Provides [`PokeApiSource`], the reqwest-backed [`crate::domain::source::PokemonSource`],
//! and the [`UpstreamSettings`] it is built from.

mod settings;
mod source;

pub use settings::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, UpstreamSettings, default_user_agent};
pub use source::PokeApiSource;

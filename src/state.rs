//! Shared application state.

use std::sync::Arc;

use crate::application::services::PokemonService;
use crate::infrastructure::pokeapi::{PokeApiSource, UpstreamSettings};

/// State injected into every handler.
///
/// Holds no per-request resources: the upstream client is created inside each
/// call by [`PokeApiSource`].
#[derive(Clone)]
pub struct AppState {
    pub pokemon_service: Arc<PokemonService<PokeApiSource>>,
}

impl AppState {
    pub fn new(settings: UpstreamSettings) -> Self {
        let source = Arc::new(PokeApiSource::new(settings));

        Self {
            pokemon_service: Arc::new(PokemonService::new(source)),
        }
    }
}

//! Business logic services for the application layer.

pub mod pokemon_service;

pub use pokemon_service::PokemonService;

//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`pokeapi`] - HTTP client for the upstream PokeAPI service

pub mod pokeapi;

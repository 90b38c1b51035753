//! Application layer services implementing the gateway's operations.
//!
//! Services validate caller input, call the upstream source through the
//! [`crate::domain::source::PokemonSource`] trait, and apply the shape
//! contracts from [`crate::domain::entities`]. Handlers and the CLI both go
//! through this layer.
//!
//! # Available Services
//!
//! - [`services::pokemon_service::PokemonService`] - Pokemon lookups, listing and type membership

pub mod services;

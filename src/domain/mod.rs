//! Domain layer: the data the gateway hands out and the rules it checks.
//!
//! # Architecture
//!
//! - [`entities`] - Outward-facing value types
//! - [`contract`] - Field-level shape checks applied to upstream payloads
//! - [`source`] - Upstream data source trait and its failure classification
//!
//! The domain layer knows nothing about HTTP routing or the concrete upstream
//! client; [`crate::infrastructure::pokeapi`] implements [`source::PokemonSource`].

pub mod contract;
pub mod entities;
pub mod source;

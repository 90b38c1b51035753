//! Request-scoped entities built from upstream payloads.
//!
//! Each entity is constructed from exactly one upstream response, validated
//! against its shape contract, and either returned to the caller or dropped.
//! Nothing here is persisted or cached.
//!
//! # Entity Types
//!
//! - [`PokemonRecord`] - A single Pokemon (ID and name lookups)
//! - [`PokemonListPage`] - A page of the Pokemon collection
//! - [`TypeMembership`] - Names of the Pokemon belonging to a type

pub mod pokemon;
pub mod pokemon_list;
pub mod type_membership;

pub use pokemon::{NamedResource, PokemonRecord, Sprites, StatSlot, TypeSlot};
pub use pokemon_list::{PokemonListItem, PokemonListPage};
pub use type_membership::TypeMembership;

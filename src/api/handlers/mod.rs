//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod pokemon;

pub use health::health_handler;
pub use pokemon::{
    pokemon_by_id_handler, pokemon_by_name_handler, pokemon_by_type_handler, pokemon_list_handler,
};

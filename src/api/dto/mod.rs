//! Data Transfer Objects for API requests and responses.
//!
//! Success bodies for Pokemon lookups are the domain entities themselves
//! (see [`crate::domain::entities`]); this module holds the request-side
//! parameters and the remaining response shapes.

pub mod health;
pub mod pagination;
pub mod pokemon;

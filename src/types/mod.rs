//! Core type system and domain definitions
//!
//! Strongly-typed values shared by the query executor, the pagination
//! controller and the presentation layer.

pub mod repository;
pub mod search;

pub use repository::*;
pub use search::*;

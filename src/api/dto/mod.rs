//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization.

pub mod health;
pub mod links;

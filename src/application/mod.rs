//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the seeding CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link submission and listing

pub mod services;

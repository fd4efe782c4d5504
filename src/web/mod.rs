//! Web layer for the browser UI.
//!
//! Server-side rendered pages built with Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Web route configuration

pub mod handlers;
pub mod routes;

//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Link`] - A stored link with its timestamps
//! - [`NewLink`] - A validated link that has not been stored yet
//! - [`LinkSubmission`] - Raw fields posted by a client, carrying the validation rules

pub mod link;

pub use link::{Link, LinkSubmission, NewLink};

//! Utility functions shared across layers.
//!
//! - [`absolute_url`] - Absolute URL checks for submitted links

pub mod absolute_url;

//! Code renderer for turning generation requests into code text
//!
//! This module selects a catalog template for a request, or the generic
//! fallback, and interpolates the description into it.

pub mod code;

pub use code::{Renderer, Resolution};

//! Renderers
//!
//! This module turns notes back into text formats.

pub mod score;

pub use score::generate_score;

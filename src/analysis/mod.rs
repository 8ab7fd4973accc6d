//! Text analysis: derives the property bundle stored with each record.

pub mod analyzer;

pub use analyzer::{analyze, content_hash, normalize};

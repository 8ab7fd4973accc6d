//! # Lexstore
//!
//! A content-addressed string analysis and query engine.
//!
//! ## Features
//!
//! - Pure string analysis (length, palindrome detection, character statistics)
//! - Content-addressed record store with pluggable persistence
//! - Structured filter queries over stored records
//! - Rule-based natural-language query translation

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod error;
pub mod query;
pub mod record;
pub mod storage;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

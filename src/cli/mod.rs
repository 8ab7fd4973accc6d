//! Command line interface for the Lexstore engine.

pub mod args;
pub mod commands;
pub mod output;

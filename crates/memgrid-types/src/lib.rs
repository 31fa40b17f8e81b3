//! Foundation types for memgrid.
//!
//! Platform-agnostic types shared by the memgrid crates: colors, input
//! events, configuration and error types.

pub mod color;
pub mod config;
pub mod error;
pub mod input;

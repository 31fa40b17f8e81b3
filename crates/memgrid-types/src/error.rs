//! Error types for memgrid.

use std::io;

/// Errors produced by the memgrid crates.
///
/// Navigation itself is total and never fails; errors only arise while
/// building a grid from configuration or editing the memory table.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("config error: {0}")]
    Config(String),

    #[error("unknown slot: {0}")]
    UnknownSlot(usize),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, GridError>;

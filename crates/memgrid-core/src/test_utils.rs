//! Shared fixtures for memgrid-core tests.

use memgrid_types::config::GridConfig;

use crate::layout::GridLayout;

/// Five categories `A..=E`, 20 items each, cursor at `(2, 10)`.
pub fn abcde_config() -> GridConfig {
    GridConfig {
        categories: ["A", "B", "C", "D", "E"].iter().map(|s| s.to_string()).collect(),
        ..GridConfig::default()
    }
}

pub fn abcde_layout() -> GridLayout {
    layout_with(|_| {})
}

/// The `A..=E` layout with a tweak applied to its config.
pub fn layout_with(tweak: impl FnOnce(&mut GridConfig)) -> GridLayout {
    let mut config = abcde_config();
    tweak(&mut config);
    GridLayout::from_config(&config).expect("fixture config is valid")
}

/// The stock five-category layout.
pub fn default_layout() -> GridLayout {
    GridLayout::from_config(&GridConfig::default()).expect("default config is valid")
}

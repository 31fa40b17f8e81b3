//! Grid configuration.
//!
//! Everything here is supplied once when a grid is mounted and never
//! mutated afterwards. Loaded from TOML; every field has a default so an
//! empty document yields the stock five-category grid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// What a navigation step does at the edge of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// Saturate at the first/last index (stepping past an end is a no-op).
    Clamp,
    /// Continue from the opposite end.
    Wrap,
}

/// What happens to the item cursor when the category changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryChange {
    /// Keep the current item index.
    Preserve,
    /// Move the item cursor to a fixed index (clamped into range).
    ResetTo(usize),
}

/// Radii of the visible neighborhood around the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborhoodConfig {
    /// Rows shown above and below the active row.
    #[serde(default = "default_radius")]
    pub rows: u8,
    /// Columns shown left and right of the active column.
    #[serde(default = "default_radius")]
    pub cols: u8,
}

impl Default for NeighborhoodConfig {
    fn default() -> Self {
        Self {
            rows: default_radius(),
            cols: default_radius(),
        }
    }
}

/// Wheel gesture tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Accumulated delta needed to fire one step.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// Quiet period after a step during which wheel events are dropped.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            cooldown_ms: default_cooldown_ms(),
        }
    }
}

/// Top-level grid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default = "default_items_per_category")]
    pub items_per_category: usize,
    #[serde(default = "default_initial_category")]
    pub initial_category: usize,
    #[serde(default = "default_initial_item")]
    pub initial_item: usize,
    #[serde(default)]
    pub neighborhood: NeighborhoodConfig,
    #[serde(default = "default_category_policy")]
    pub category_policy: BoundsPolicy,
    #[serde(default = "default_item_policy")]
    pub item_policy: BoundsPolicy,
    #[serde(default = "default_category_change")]
    pub category_change: CategoryChange,
    #[serde(default)]
    pub wheel: WheelConfig,
}

fn default_radius() -> u8 {
    2
}
fn default_threshold() -> f32 {
    80.0
}
fn default_cooldown_ms() -> u64 {
    400
}
fn default_categories() -> Vec<String> {
    ["Partenaires", "Culture", "Clubs", "Trésorie", "Atelier"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_items_per_category() -> usize {
    20
}
fn default_initial_category() -> usize {
    2
}
fn default_initial_item() -> usize {
    10
}
fn default_category_policy() -> BoundsPolicy {
    BoundsPolicy::Clamp
}
fn default_item_policy() -> BoundsPolicy {
    BoundsPolicy::Wrap
}
fn default_category_change() -> CategoryChange {
    CategoryChange::Preserve
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            items_per_category: default_items_per_category(),
            initial_category: default_initial_category(),
            initial_item: default_initial_item(),
            neighborhood: NeighborhoodConfig::default(),
            category_policy: default_category_policy(),
            item_policy: default_item_policy(),
            category_change: default_category_change(),
            wheel: WheelConfig::default(),
        }
    }
}

impl GridConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::debug!("Loaded grid config from {}", path.display());
        Ok(config)
    }

    /// Reject configurations that cannot produce a valid cursor.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(GridError::Config("category list is empty".into()));
        }
        if self.items_per_category == 0 {
            return Err(GridError::Config(
                "items_per_category must be at least 1".into(),
            ));
        }
        if self.initial_category >= self.categories.len() {
            return Err(GridError::Config(format!(
                "initial_category {} out of range (0..{})",
                self.initial_category,
                self.categories.len()
            )));
        }
        if self.initial_item >= self.items_per_category {
            return Err(GridError::Config(format!(
                "initial_item {} out of range (0..{})",
                self.initial_item, self.items_per_category
            )));
        }
        if !(self.wheel.threshold.is_finite() && self.wheel.threshold > 0.0) {
            return Err(GridError::Config(format!(
                "wheel threshold must be positive, got {}",
                self.wheel.threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = GridConfig::default();
        assert_eq!(c.categories.len(), 5);
        assert_eq!(c.items_per_category, 20);
        assert_eq!((c.initial_category, c.initial_item), (2, 10));
        assert_eq!(c.category_policy, BoundsPolicy::Clamp);
        assert_eq!(c.item_policy, BoundsPolicy::Wrap);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let c = GridConfig::from_toml("").unwrap();
        assert_eq!(c, GridConfig::default());
    }

    #[test]
    fn deserialize_overrides() {
        let toml = r#"
categories = ["A", "B", "C"]
items_per_category = 12
initial_category = 0
initial_item = 3
category_policy = "wrap"
item_policy = "clamp"
category_change = { reset_to = 0 }

[neighborhood]
rows = 1
cols = 1

[wheel]
threshold = 120.0
cooldown_ms = 350
"#;
        let c = GridConfig::from_toml(toml).unwrap();
        assert_eq!(c.categories, vec!["A", "B", "C"]);
        assert_eq!(c.items_per_category, 12);
        assert_eq!(c.category_policy, BoundsPolicy::Wrap);
        assert_eq!(c.item_policy, BoundsPolicy::Clamp);
        assert_eq!(c.category_change, CategoryChange::ResetTo(0));
        assert_eq!(c.neighborhood, NeighborhoodConfig { rows: 1, cols: 1 });
        assert_eq!(c.wheel.cooldown_ms, 350);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn preserve_parses_as_plain_string() {
        let c = GridConfig::from_toml("category_change = \"preserve\"").unwrap();
        assert_eq!(c.category_change, CategoryChange::Preserve);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = GridConfig::from_toml("categories = [").unwrap_err();
        assert!(matches!(err, GridError::TomlParse(_)));
    }

    #[test]
    fn empty_categories_rejected() {
        let c = GridConfig {
            categories: Vec::new(),
            ..GridConfig::default()
        };
        assert!(matches!(c.validate(), Err(GridError::Config(_))));
    }

    #[test]
    fn zero_items_rejected() {
        let c = GridConfig {
            items_per_category: 0,
            initial_item: 0,
            ..GridConfig::default()
        };
        assert!(matches!(c.validate(), Err(GridError::Config(_))));
    }

    #[test]
    fn initial_cursor_out_of_range_rejected() {
        let c = GridConfig {
            initial_category: 5,
            ..GridConfig::default()
        };
        assert!(c.validate().is_err());
        let c = GridConfig {
            initial_item: 20,
            ..GridConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn non_positive_threshold_rejected() {
        let mut c = GridConfig::default();
        c.wheel.threshold = 0.0;
        assert!(c.validate().is_err());
        c.wheel.threshold = f32::NAN;
        assert!(c.validate().is_err());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = GridConfig::load(Path::new("/nonexistent/memgrid.toml")).unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }
}

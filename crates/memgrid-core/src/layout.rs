//! Validated, immutable grid layout built from [`GridConfig`].

use memgrid_types::config::{BoundsPolicy, CategoryChange, GridConfig, WheelConfig};
use memgrid_types::error::Result;

use crate::cursor::Cursor;
use crate::slot::{GlobalSlotId, NeighborhoodShape, SlotAddress, resolve_slot};

/// Grid dimensions and navigation policies.
///
/// Construction is the only place configuration can fail; every value
/// reachable from a `GridLayout` is in range.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    categories: Vec<String>,
    items_per_category: usize,
    initial: Cursor,
    pub shape: NeighborhoodShape,
    pub category_policy: BoundsPolicy,
    pub item_policy: BoundsPolicy,
    pub category_change: CategoryChange,
    pub wheel: WheelConfig,
}

impl GridLayout {
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            categories: config.categories.clone(),
            items_per_category: config.items_per_category,
            initial: Cursor::new(config.initial_category, config.initial_item),
            shape: NeighborhoodShape::new(config.neighborhood.rows, config.neighborhood.cols),
            category_policy: config.category_policy,
            item_policy: config.item_policy,
            category_change: config.category_change,
            wheel: config.wheel,
        })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn category_name(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(String::as_str)
    }

    pub fn items_per_category(&self) -> usize {
        self.items_per_category
    }

    pub fn slot_count(&self) -> usize {
        self.categories.len() * self.items_per_category
    }

    /// Cursor a freshly mounted view starts at.
    pub fn initial_cursor(&self) -> Cursor {
        self.initial
    }

    pub fn contains(&self, cursor: Cursor) -> bool {
        cursor.category < self.category_count() && cursor.item < self.items_per_category
    }

    pub fn resolve(&self, cursor: Cursor, addr: SlotAddress) -> Option<GlobalSlotId> {
        resolve_slot(
            cursor,
            addr,
            self.category_count(),
            self.items_per_category,
        )
    }

    /// Item cursor after moving from `from` to category `to`.
    pub(crate) fn item_after_category_change(&self, from: Cursor, to: usize) -> usize {
        match self.category_change {
            CategoryChange::Preserve => from.item,
            CategoryChange::ResetTo(_) if to == from.category => from.item,
            CategoryChange::ResetTo(n) => n.min(self.items_per_category - 1),
        }
    }
}

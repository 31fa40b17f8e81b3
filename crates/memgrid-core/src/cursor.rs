//! The navigation cursor and bounded index arithmetic.

use serde::{Deserialize, Serialize};

use memgrid_types::config::BoundsPolicy;

/// Position of the active tile: a category (row) and an item (column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    pub category: usize,
    pub item: usize,
}

impl Cursor {
    pub const fn new(category: usize, item: usize) -> Self {
        Self { category, item }
    }
}

/// Move `index` by `delta` inside `0..len` according to `policy`.
///
/// `len` must be non-zero; the layout guarantees this at construction.
pub fn step_index(index: usize, delta: i64, len: usize, policy: BoundsPolicy) -> usize {
    let len_i = len as i64;
    let target = index as i64 + delta;
    match policy {
        BoundsPolicy::Clamp => target.clamp(0, len_i - 1) as usize,
        BoundsPolicy::Wrap => target.rem_euclid(len_i) as usize,
    }
}

/// Clamp an arbitrary (possibly negative) index into `0..len`.
pub fn clamp_index(index: i64, len: usize) -> usize {
    index.clamp(0, len as i64 - 1) as usize
}

/// `base + offset` if it lands inside `0..len`, without wrapping.
pub fn offset_index(base: usize, offset: i32, len: usize) -> Option<usize> {
    let target = base as i64 + offset as i64;
    if (0..len as i64).contains(&target) {
        Some(target as usize)
    } else {
        None
    }
}

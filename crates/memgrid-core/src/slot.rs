//! Slot addressing: neighborhood offsets and flat slot identifiers.
//!
//! The grid is `categories x items_per_category`. A tile on screen is
//! named by its offset from the cursor ([`SlotAddress`]); the content it
//! shows is named by a flat [`GlobalSlotId`]. Offsets that fall outside
//! either axis resolve to nothing. A row never borrows tiles from the
//! neighboring category's range.

use serde::{Deserialize, Serialize};

use crate::cursor::{Cursor, offset_index};

/// Flat index `category * items_per_category + item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GlobalSlotId(pub usize);

impl GlobalSlotId {
    pub fn new(category: usize, item: usize, items_per_category: usize) -> Self {
        Self(category * items_per_category + item)
    }

    /// Split back into `(category, item)`.
    pub fn split(self, items_per_category: usize) -> (usize, usize) {
        (self.0 / items_per_category, self.0 % items_per_category)
    }
}

impl std::fmt::Display for GlobalSlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tile position relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotAddress {
    pub row: i32,
    pub col: i32,
}

impl SlotAddress {
    pub const CENTER: SlotAddress = SlotAddress { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance from the center tile.
    pub fn ring(self) -> u32 {
        self.row.unsigned_abs().max(self.col.unsigned_abs())
    }

    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }
}

/// Which offsets around the cursor are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborhoodShape {
    pub row_radius: u8,
    pub col_radius: u8,
}

impl NeighborhoodShape {
    pub const fn new(row_radius: u8, col_radius: u8) -> Self {
        Self {
            row_radius,
            col_radius,
        }
    }

    pub const fn five_by_five() -> Self {
        Self::new(2, 2)
    }

    pub const fn three_by_three() -> Self {
        Self::new(1, 1)
    }

    /// Only the active row, `2 * col_radius + 1` wide.
    pub const fn single_row(col_radius: u8) -> Self {
        Self::new(0, col_radius)
    }

    pub fn rows(&self) -> usize {
        2 * self.row_radius as usize + 1
    }

    pub fn cols(&self) -> usize {
        2 * self.col_radius as usize + 1
    }

    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn contains(&self, addr: SlotAddress) -> bool {
        addr.row.unsigned_abs() <= self.row_radius as u32
            && addr.col.unsigned_abs() <= self.col_radius as u32
    }

    /// All addresses, row-major from the top-left.
    pub fn addresses(&self) -> impl Iterator<Item = SlotAddress> + '_ {
        let rr = self.row_radius as i32;
        let cr = self.col_radius as i32;
        (-rr..=rr).flat_map(move |row| (-cr..=cr).map(move |col| SlotAddress::new(row, col)))
    }
}

impl Default for NeighborhoodShape {
    fn default() -> Self {
        Self::five_by_five()
    }
}

/// Resolve the tile at `addr` relative to `cursor`.
///
/// Returns `None` when the row falls outside `0..category_count` or the
/// column falls outside `0..items_per_category`.
pub fn resolve_slot(
    cursor: Cursor,
    addr: SlotAddress,
    category_count: usize,
    items_per_category: usize,
) -> Option<GlobalSlotId> {
    let category = offset_index(cursor.category, addr.row, category_count)?;
    let item = offset_index(cursor.item, addr.col, items_per_category)?;
    Some(GlobalSlotId::new(category, item, items_per_category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_resolves_to_cursor() {
        let id = resolve_slot(Cursor::new(2, 10), SlotAddress::CENTER, 5, 20);
        assert_eq!(id, Some(GlobalSlotId(50)));
    }

    #[test]
    fn row_above_first_category_is_absent() {
        let id = resolve_slot(Cursor::new(0, 10), SlotAddress::new(-1, 0), 5, 20);
        assert_eq!(id, None);
    }

    #[test]
    fn row_below_last_category_is_absent() {
        let id = resolve_slot(Cursor::new(4, 10), SlotAddress::new(2, 0), 5, 20);
        assert_eq!(id, None);
    }

    #[test]
    fn no_leak_into_next_category() {
        // Item 21 would be slot 61 if it leaked into category 3.
        let id = resolve_slot(Cursor::new(2, 19), SlotAddress::new(0, 2), 5, 20);
        assert_eq!(id, None);
    }

    #[test]
    fn no_leak_into_previous_category() {
        let id = resolve_slot(Cursor::new(2, 0), SlotAddress::new(0, -1), 5, 20);
        assert_eq!(id, None);
    }

    #[test]
    fn diagonal_neighbor() {
        let id = resolve_slot(Cursor::new(2, 10), SlotAddress::new(1, -2), 5, 20);
        assert_eq!(id, Some(GlobalSlotId(3 * 20 + 8)));
    }

    #[test]
    fn split_inverts_new() {
        let id = GlobalSlotId::new(3, 17, 20);
        assert_eq!(id.split(20), (3, 17));
    }

    #[test]
    fn ring_distance() {
        assert_eq!(SlotAddress::CENTER.ring(), 0);
        assert_eq!(SlotAddress::new(-1, 1).ring(), 1);
        assert_eq!(SlotAddress::new(2, -1).ring(), 2);
    }

    #[test]
    fn shape_sizes() {
        assert_eq!(NeighborhoodShape::five_by_five().len(), 25);
        assert_eq!(NeighborhoodShape::three_by_three().len(), 9);
        assert_eq!(NeighborhoodShape::single_row(1).len(), 3);
    }

    #[test]
    fn addresses_row_major() {
        let shape = NeighborhoodShape::three_by_three();
        let addrs: Vec<_> = shape.addresses().collect();
        assert_eq!(addrs.len(), 9);
        assert_eq!(addrs[0], SlotAddress::new(-1, -1));
        assert_eq!(addrs[4], SlotAddress::CENTER);
        assert_eq!(addrs[8], SlotAddress::new(1, 1));
        assert!(addrs.iter().all(|a| shape.contains(*a)));
    }

    #[test]
    fn contains_rejects_outside() {
        let shape = NeighborhoodShape::single_row(2);
        assert!(shape.contains(SlotAddress::new(0, -2)));
        assert!(!shape.contains(SlotAddress::new(1, 0)));
        assert!(!shape.contains(SlotAddress::new(0, 3)));
    }
}

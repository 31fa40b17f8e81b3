//! The per-render view of the grid handed to the renderer.

use serde::{Deserialize, Serialize};

use memgrid_types::color::Color;

use crate::cursor::Cursor;
use crate::layout::GridLayout;
use crate::palette::row_accent;
use crate::slot::{GlobalSlotId, SlotAddress};

/// Opacity falloff by ring distance from the center tile.
const RING_OPACITY: [f32; 3] = [1.0, 0.7, 0.4];

/// How prominently a tile is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prominence {
    pub opacity: f32,
}

impl Prominence {
    /// Monotonic falloff on `max(|row|, |col|)`.
    pub fn for_ring(ring: u32) -> Self {
        let idx = (ring as usize).min(RING_OPACITY.len() - 1);
        Self {
            opacity: RING_OPACITY[idx],
        }
    }
}

/// Tile size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileSize {
    Centered,
    Default,
    Small,
    ExtraSmall,
}

impl TileSize {
    /// Size class for a tile: shrinks with distance from the active row.
    pub fn for_address(addr: SlotAddress) -> Self {
        if addr.is_center() {
            return TileSize::Centered;
        }
        match addr.row.unsigned_abs() {
            0 => TileSize::Default,
            1 => TileSize::Small,
            _ => TileSize::ExtraSmall,
        }
    }
}

/// One tile of the visible neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibleSlot {
    pub address: SlotAddress,
    /// `None` for tiles outside the grid (drawn hidden).
    pub slot: Option<GlobalSlotId>,
    pub prominence: Prominence,
    pub size: TileSize,
    pub border: Color,
}

impl VisibleSlot {
    /// Border color faded by the tile's prominence.
    pub fn tint(&self) -> Color {
        self.border.with_opacity(self.prominence.opacity)
    }
}

/// Snapshot of every visible tile for one cursor position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleGrid {
    pub cursor: Cursor,
    pub rows: usize,
    pub cols: usize,
    /// Row-major, top-left first.
    pub slots: Vec<VisibleSlot>,
}

impl VisibleGrid {
    pub fn compute(layout: &GridLayout, cursor: Cursor) -> Self {
        let shape = layout.shape;
        let slots = shape
            .addresses()
            .map(|address| VisibleSlot {
                address,
                slot: layout.resolve(cursor, address),
                prominence: Prominence::for_ring(address.ring()),
                size: TileSize::for_address(address),
                border: row_accent(layout, cursor, address.row),
            })
            .collect();
        Self {
            cursor,
            rows: shape.rows(),
            cols: shape.cols(),
            slots,
        }
    }

    pub fn get(&self, address: SlotAddress) -> Option<&VisibleSlot> {
        self.slots.iter().find(|s| s.address == address)
    }

    pub fn center(&self) -> Option<&VisibleSlot> {
        self.get(SlotAddress::CENTER)
    }

    /// Tiles grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[VisibleSlot]> {
        self.slots.chunks(self.cols.max(1))
    }

    /// Number of tiles that resolve to a slot.
    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|s| s.slot.is_some()).count()
    }
}

/// Horizontal nudge, scale and opacity of one category label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emphasis {
    pub offset_x: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Emphasis {
    pub fn for_distance(distance: usize) -> Self {
        match distance {
            0 => Emphasis {
                offset_x: 20.0,
                scale: 1.2,
                opacity: 1.0,
            },
            1 => Emphasis {
                offset_x: 10.0,
                scale: 1.0,
                opacity: 0.7,
            },
            _ => Emphasis {
                offset_x: 0.0,
                scale: 0.8,
                opacity: 0.4,
            },
        }
    }
}

/// One entry of the category sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarEntry {
    pub index: usize,
    pub label: String,
    pub active: bool,
    pub accent: Color,
    pub emphasis: Emphasis,
}

/// Category list with emphasis falling off away from the active category.
pub fn sidebar_entries(layout: &GridLayout, cursor: Cursor) -> Vec<SidebarEntry> {
    layout
        .categories()
        .iter()
        .enumerate()
        .map(|(index, label)| SidebarEntry {
            index,
            label: label.clone(),
            active: index == cursor.category,
            accent: row_accent(layout, cursor, index as i32 - cursor.category as i32),
            emphasis: Emphasis::for_distance(index.abs_diff(cursor.category)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::NeighborhoodShape;
    use crate::test_utils::{abcde_layout, default_layout, layout_with};

    #[test]
    fn five_by_five_has_25_tiles() {
        let layout = abcde_layout();
        let grid = VisibleGrid::compute(&layout, Cursor::new(2, 10));
        assert_eq!(grid.slots.len(), 25);
        assert_eq!(grid.present_count(), 25);
        assert_eq!(grid.center().unwrap().slot, Some(GlobalSlotId(50)));
        assert_eq!(grid.rows().count(), 5);
    }

    #[test]
    fn corner_cursor_hides_out_of_range_tiles() {
        let layout = abcde_layout();
        let grid = VisibleGrid::compute(&layout, Cursor::new(0, 19));
        // Rows -2,-1 absent, cols +1,+2 absent: 3 rows x 3 cols remain.
        assert_eq!(grid.present_count(), 9);
        assert_eq!(grid.get(SlotAddress::new(-1, 0)).unwrap().slot, None);
        assert_eq!(grid.get(SlotAddress::new(0, 2)).unwrap().slot, None);
        assert_eq!(
            grid.get(SlotAddress::new(2, -2)).unwrap().slot,
            Some(GlobalSlotId(2 * 20 + 17))
        );
    }

    #[test]
    fn prominence_falls_off_by_ring() {
        assert_eq!(Prominence::for_ring(0).opacity, 1.0);
        assert_eq!(Prominence::for_ring(1).opacity, 0.7);
        assert_eq!(Prominence::for_ring(2).opacity, 0.4);
        assert_eq!(Prominence::for_ring(7).opacity, 0.4);
    }

    #[test]
    fn tile_sizes() {
        assert_eq!(TileSize::for_address(SlotAddress::CENTER), TileSize::Centered);
        assert_eq!(TileSize::for_address(SlotAddress::new(0, 2)), TileSize::Default);
        assert_eq!(TileSize::for_address(SlotAddress::new(-1, 0)), TileSize::Small);
        assert_eq!(TileSize::for_address(SlotAddress::new(2, 1)), TileSize::ExtraSmall);
    }

    #[test]
    fn three_by_three_shape() {
        let layout = layout_with(|c| {
            c.neighborhood.rows = 1;
            c.neighborhood.cols = 1;
        });
        assert_eq!(layout.shape, NeighborhoodShape::three_by_three());
        let grid = VisibleGrid::compute(&layout, Cursor::new(2, 10));
        assert_eq!(grid.slots.len(), 9);
        assert_eq!((grid.rows, grid.cols), (3, 3));
    }

    #[test]
    fn tint_fades_with_ring() {
        let layout = default_layout();
        let grid = VisibleGrid::compute(&layout, layout.initial_cursor());
        let center = grid.center().unwrap();
        assert_eq!(center.tint(), center.border);
        let outer = grid.get(SlotAddress::new(2, 0)).unwrap();
        assert_eq!(outer.tint().a, 102);
        assert_eq!(outer.tint().with_alpha(255), outer.border);
    }

    #[test]
    fn sidebar_emphasis() {
        let layout = abcde_layout();
        let entries = sidebar_entries(&layout, Cursor::new(1, 0));
        assert_eq!(entries.len(), 5);
        assert!(entries[1].active);
        assert_eq!(entries[1].emphasis.scale, 1.2);
        assert_eq!(entries[0].emphasis.opacity, 0.7);
        assert_eq!(entries[2].emphasis.opacity, 0.7);
        assert_eq!(entries[4].emphasis.opacity, 0.4);
        assert_eq!(entries[4].label, "E");
    }

    #[test]
    fn grid_serializes_for_renderer() {
        let layout = abcde_layout();
        let grid = VisibleGrid::compute(&layout, Cursor::new(0, 0));
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["slots"].as_array().unwrap().len(), 25);
        assert!(json["slots"][0]["slot"].is_null());
    }
}

//! Category accent colors.
//!
//! Colors are a total function over the closed [`CategoryType`] set.
//! Names that do not match a known category get [`FALLBACK_ACCENT`]
//! rather than a silent lookup miss.

use serde::{Deserialize, Serialize};

use memgrid_types::color::Color;

use crate::cursor::{Cursor, offset_index};
use crate::layout::GridLayout;

/// Neutral gray for unknown categories and rows outside the grid.
pub const FALLBACK_ACCENT: Color = Color::rgb(0xE5, 0xE7, 0xEB);

/// The stock categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryType {
    Partenaires,
    Culture,
    Clubs,
    Tresorie,
    Atelier,
}

impl CategoryType {
    pub const ALL: [CategoryType; 5] = [
        CategoryType::Partenaires,
        CategoryType::Culture,
        CategoryType::Clubs,
        CategoryType::Tresorie,
        CategoryType::Atelier,
    ];

    /// Display name as it appears in the category list.
    pub fn name(self) -> &'static str {
        match self {
            CategoryType::Partenaires => "Partenaires",
            CategoryType::Culture => "Culture",
            CategoryType::Clubs => "Clubs",
            CategoryType::Tresorie => "Trésorie",
            CategoryType::Atelier => "Atelier",
        }
    }

    /// Exact match on the display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn accent(self) -> Color {
        match self {
            CategoryType::Partenaires => Color::rgb(0x86, 0xB8, 0x9E),
            CategoryType::Culture => Color::rgb(0xC0, 0x84, 0xFC),
            CategoryType::Clubs => Color::rgb(0xE8, 0x5C, 0x5C),
            CategoryType::Tresorie => Color::rgb(0xF4, 0xC9, 0x8E),
            CategoryType::Atelier => Color::rgb(0x60, 0xA5, 0xFA),
        }
    }
}

/// Accent for a category name, falling back for unknown names.
pub fn accent_for_name(name: &str) -> Color {
    match CategoryType::from_name(name) {
        Some(category) => category.accent(),
        None => FALLBACK_ACCENT,
    }
}

/// Border color for the row `row_offset` away from the active category.
pub fn row_accent(layout: &GridLayout, cursor: Cursor, row_offset: i32) -> Color {
    offset_index(cursor.category, row_offset, layout.category_count())
        .and_then(|index| layout.category_name(index))
        .map_or(FALLBACK_ACCENT, accent_for_name)
}

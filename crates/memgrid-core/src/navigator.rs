//! Navigation commands and the cursor state machine.
//!
//! The transitions are pure functions on [`GridLayout`]; [`GridNavigator`]
//! owns the one mutable [`Cursor`] and applies commands to it. Every
//! transition is total: out-of-range input clamps or is ignored, and the
//! cursor is never observable out of bounds.

use serde::{Deserialize, Serialize};

use crate::cursor::{Cursor, clamp_index, offset_index, step_index};
use crate::layout::GridLayout;
use crate::slot::{GlobalSlotId, SlotAddress};

/// A discrete navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavCommand {
    PrevCategory,
    NextCategory,
    JumpToCategory(i64),
    PrevItem,
    NextItem,
    JumpToItem(i64),
    ActivateSlot(SlotAddress),
}

/// What a slot click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotActivation {
    /// The clicked tile became the active tile.
    Moved(Cursor),
    /// The active tile itself was clicked.
    OpenDetail(GlobalSlotId),
    /// The tile resolves to nothing; state is unchanged.
    Ignored,
}

impl GridLayout {
    pub fn prev_category(&self, cursor: Cursor) -> Cursor {
        self.step_category(cursor, -1)
    }

    pub fn next_category(&self, cursor: Cursor) -> Cursor {
        self.step_category(cursor, 1)
    }

    /// Jump to `index`, clamped into the category range.
    pub fn jump_to_category(&self, cursor: Cursor, index: i64) -> Cursor {
        let category = clamp_index(index, self.category_count());
        self.with_category(cursor, category)
    }

    pub fn prev_item(&self, cursor: Cursor) -> Cursor {
        self.step_item(cursor, -1)
    }

    pub fn next_item(&self, cursor: Cursor) -> Cursor {
        self.step_item(cursor, 1)
    }

    /// Jump to `index`, clamped into the item range.
    pub fn jump_to_item(&self, cursor: Cursor, index: i64) -> Cursor {
        Cursor::new(cursor.category, clamp_index(index, self.items_per_category()))
    }

    /// Make the tile at `addr` active.
    ///
    /// Both axes are committed together; an absent tile leaves the cursor
    /// untouched. The category-change reset policy does not apply since the
    /// click names the exact target item.
    pub fn activate_slot(&self, cursor: Cursor, addr: SlotAddress) -> SlotActivation {
        let Some(slot) = self.resolve(cursor, addr) else {
            return SlotActivation::Ignored;
        };
        if addr.is_center() {
            return SlotActivation::OpenDetail(slot);
        }
        let category = offset_index(cursor.category, addr.row, self.category_count());
        let item = offset_index(cursor.item, addr.col, self.items_per_category());
        match (category, item) {
            (Some(category), Some(item)) => SlotActivation::Moved(Cursor::new(category, item)),
            _ => SlotActivation::Ignored,
        }
    }

    /// Apply a command, returning the resulting cursor.
    pub fn apply(&self, cursor: Cursor, command: NavCommand) -> Cursor {
        match command {
            NavCommand::PrevCategory => self.prev_category(cursor),
            NavCommand::NextCategory => self.next_category(cursor),
            NavCommand::JumpToCategory(i) => self.jump_to_category(cursor, i),
            NavCommand::PrevItem => self.prev_item(cursor),
            NavCommand::NextItem => self.next_item(cursor),
            NavCommand::JumpToItem(i) => self.jump_to_item(cursor, i),
            NavCommand::ActivateSlot(addr) => match self.activate_slot(cursor, addr) {
                SlotActivation::Moved(next) => next,
                SlotActivation::OpenDetail(_) | SlotActivation::Ignored => cursor,
            },
        }
    }

    fn step_category(&self, cursor: Cursor, delta: i64) -> Cursor {
        let category = step_index(
            cursor.category,
            delta,
            self.category_count(),
            self.category_policy,
        );
        self.with_category(cursor, category)
    }

    fn step_item(&self, cursor: Cursor, delta: i64) -> Cursor {
        let item = step_index(
            cursor.item,
            delta,
            self.items_per_category(),
            self.item_policy,
        );
        Cursor::new(cursor.category, item)
    }

    fn with_category(&self, cursor: Cursor, category: usize) -> Cursor {
        Cursor::new(category, self.item_after_category_change(cursor, category))
    }
}

/// Owns the active cursor for one mounted grid.
#[derive(Debug, Clone)]
pub struct GridNavigator {
    layout: GridLayout,
    cursor: Cursor,
}

impl GridNavigator {
    pub fn new(layout: GridLayout) -> Self {
        let cursor = layout.initial_cursor();
        Self { layout, cursor }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The slot under the cursor. Always present.
    pub fn active_slot(&self) -> GlobalSlotId {
        GlobalSlotId::new(
            self.cursor.category,
            self.cursor.item,
            self.layout.items_per_category(),
        )
    }

    pub fn active_category_name(&self) -> &str {
        self.layout
            .category_name(self.cursor.category)
            .unwrap_or_default()
    }

    /// Apply a command. Returns `true` if the cursor moved.
    pub fn apply(&mut self, command: NavCommand) -> bool {
        let next = self.layout.apply(self.cursor, command);
        self.commit(command, next)
    }

    /// Slot click with the detail-open outcome reported to the caller.
    pub fn activate_slot(&mut self, addr: SlotAddress) -> SlotActivation {
        let outcome = self.layout.activate_slot(self.cursor, addr);
        if let SlotActivation::Moved(next) = outcome {
            self.commit(NavCommand::ActivateSlot(addr), next);
        }
        outcome
    }

    fn commit(&mut self, command: NavCommand, next: Cursor) -> bool {
        debug_assert!(self.layout.contains(next));
        if next == self.cursor {
            log::trace!("{command:?}: cursor unchanged at {:?}", self.cursor);
            return false;
        }
        log::debug!("{command:?}: {:?} -> {next:?}", self.cursor);
        self.cursor = next;
        true
    }
}

//! Detail/edit overlay state.
//!
//! While open, the grid behind it must not navigate; the owning view
//! suspends wheel input on open and resumes it synchronously on close.

use memgrid_types::error::Result;

use crate::memory::{MemoryEdit, MemoryStore};
use crate::slot::GlobalSlotId;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Overlay {
    #[default]
    Closed,
    Open {
        slot: GlobalSlotId,
        draft: MemoryEdit,
    },
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open { .. })
    }

    pub fn slot(&self) -> Option<GlobalSlotId> {
        match self {
            Overlay::Open { slot, .. } => Some(*slot),
            Overlay::Closed => None,
        }
    }

    /// Open on `slot` with a draft seeded from the stored memory.
    /// Returns `false` if the slot has no memory.
    pub fn open(&mut self, slot: GlobalSlotId, store: &MemoryStore) -> bool {
        let Some(memory) = store.get(slot) else {
            log::warn!("No memory for slot {slot}; overlay stays closed");
            return false;
        };
        *self = Overlay::Open {
            slot,
            draft: MemoryEdit::from(memory),
        };
        true
    }

    pub fn draft_mut(&mut self) -> Option<&mut MemoryEdit> {
        match self {
            Overlay::Open { draft, .. } => Some(draft),
            Overlay::Closed => None,
        }
    }

    /// Discard the draft.
    pub fn close(&mut self) {
        *self = Overlay::Closed;
    }

    /// Write the draft back and close. A closed overlay saves nothing.
    pub fn save(&mut self, store: &mut MemoryStore) -> Result<Option<GlobalSlotId>> {
        match std::mem::take(self) {
            Overlay::Open { slot, draft } => {
                store.update(slot, draft)?;
                Ok(Some(slot))
            },
            Overlay::Closed => Ok(None),
        }
    }
}

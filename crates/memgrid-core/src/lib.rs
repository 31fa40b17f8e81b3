//! memgrid-core: the navigation core of a category × item memory grid.
//!
//! One [`GridView`] owns the cursor, the wheel translator, the slider
//! tracks, the memory table and the detail overlay. Hosts feed it
//! [`InputEvent`]s (through an [`InputRouter`] or directly) and read back a
//! [`VisibleGrid`] and sidebar entries to draw. All time is host-supplied,
//! so every behavior is deterministic under test.

pub mod animation;
pub mod cursor;
pub mod drag;
pub mod layout;
pub mod memory;
pub mod navigator;
pub mod overlay;
pub mod palette;
pub mod router;
pub mod slot;
pub mod view;
pub mod visible;
pub mod wheel;

#[cfg(test)]
pub(crate) mod test_utils;

pub use memgrid_types::{color, config, error, input};

pub use cursor::Cursor;
pub use layout::GridLayout;
pub use memgrid_types::input::InputEvent;
pub use navigator::{GridNavigator, NavCommand, SlotActivation};
pub use router::{InputRouter, InputSink, Subscription};
pub use slot::{GlobalSlotId, SlotAddress};
pub use view::{GridView, MountedGrid};
pub use visible::VisibleGrid;

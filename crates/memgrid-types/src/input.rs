//! Platform-agnostic input event types.
//!
//! The host maps its native input (DOM events, SDL events, a replay
//! script) to these enums. The navigation core never sees raw platform
//! input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Scroll wheel / trackpad delta. `timestamp_ms` is host time.
    Wheel { dx: f32, dy: f32, timestamp_ms: u64 },
    /// Pointer pressed at absolute position.
    PointerDown { x: f32, y: f32 },
    /// Pointer moved to absolute position.
    PointerMove { x: f32, y: f32 },
    /// Pointer released at absolute position.
    PointerUp { x: f32, y: f32 },
    /// A discrete control was activated.
    ButtonPress(Button),
    /// Host clock advanced without other input.
    Tick { now_ms: u64 },
}

/// Discrete navigation controls (arrow buttons, keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
}

/// The two navigation axes of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Category axis (rows).
    Vertical,
    /// Item axis (columns).
    Horizontal,
}

impl Axis {
    /// Dominant axis of a wheel delta. Ties go to horizontal.
    pub fn of_delta(dx: f32, dy: f32) -> Self {
        if dy.abs() > dx.abs() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }
}

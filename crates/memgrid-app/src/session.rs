//! Scripted input sessions.

use std::path::Path;

use anyhow::{Context, Result};

use memgrid_core::input::{Button, InputEvent};

/// Read a JSON array of input events.
pub fn load(path: &Path) -> Result<Vec<InputEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading session {}", path.display()))?;
    let events = serde_json::from_str(&text)
        .with_context(|| format!("parsing session {}", path.display()))?;
    Ok(events)
}

/// Built-in tour: buttons, a trackpad burst, a slider drag, a tile click
/// and an overlay round trip.
pub fn demo() -> Vec<InputEvent> {
    let mut events = vec![
        InputEvent::ButtonPress(Button::Down),
        InputEvent::ButtonPress(Button::Right),
        InputEvent::ButtonPress(Button::Right),
    ];

    // A burst of small deltas fires once, then the cooldown swallows the rest.
    events.extend((0..20).map(|i| InputEvent::Wheel {
        dx: 0.0,
        dy: -10.0,
        timestamp_ms: 1_000 + i * 10,
    }));
    events.push(InputEvent::Tick { now_ms: 1_600 });
    events.push(InputEvent::Wheel {
        dx: 120.0,
        dy: 4.0,
        timestamp_ms: 1_600,
    });

    // Drag the item slider from one end to the other.
    events.push(InputEvent::PointerDown { x: 40.0, y: 232.0 });
    events.extend((1..=6).map(|i| InputEvent::PointerMove {
        x: 40.0 + i as f32 * 50.0,
        y: 232.0,
    }));
    events.push(InputEvent::PointerUp { x: 340.0, y: 232.0 });
    events.push(InputEvent::Tick { now_ms: 2_000 });

    // Click the category slider near the top.
    events.push(InputEvent::PointerDown { x: 12.0, y: 10.0 });
    events.push(InputEvent::PointerUp { x: 12.0, y: 10.0 });

    // Open the detail overlay; wheel input is ignored until it closes.
    events.push(InputEvent::ButtonPress(Button::Confirm));
    events.push(InputEvent::Wheel {
        dx: 0.0,
        dy: 200.0,
        timestamp_ms: 3_000,
    });
    events.push(InputEvent::ButtonPress(Button::Cancel));
    events.push(InputEvent::Wheel {
        dx: 0.0,
        dy: 200.0,
        timestamp_ms: 3_100,
    });
    events
}

//! Slider tracks: pointer position to direct index.
//!
//! Dragging is direct manipulation. Every move while pressed emits a jump,
//! with no threshold or debounce. While dragging, the handle snaps to the
//! pointer; otherwise it eases toward the active index.

use memgrid_types::input::Axis;

use crate::animation::{Tween, easing};
use crate::navigator::NavCommand;

/// Duration of the handle's eased transition when not dragging.
pub const HANDLE_TRANSITION_MS: u32 = 300;

/// Map a track fraction to an index in `0..cardinality`.
pub fn index_for_fraction(fraction: f32, cardinality: usize) -> usize {
    if cardinality <= 1 || !fraction.is_finite() {
        return 0;
    }
    let f = fraction.clamp(0.0, 1.0);
    (f * (cardinality - 1) as f32).round() as usize
}

/// Handle position (as a track fraction) for `index`.
pub fn fraction_for_index(index: usize, cardinality: usize) -> f32 {
    index as f32 / cardinality.saturating_sub(1).max(1) as f32
}

/// Screen geometry of a slider track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Axis the track runs along. Vertical tracks read `y`, horizontal `x`.
    pub axis: Axis,
    pub start: f32,
    pub length: f32,
    /// Extent across the track used for hit testing.
    pub cross_start: f32,
    pub cross_length: f32,
}

impl Track {
    pub fn vertical(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            axis: Axis::Vertical,
            start: y,
            length: height,
            cross_start: x,
            cross_length: width,
        }
    }

    pub fn horizontal(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            axis: Axis::Horizontal,
            start: x,
            length: width,
            cross_start: y,
            cross_length: height,
        }
    }

    fn split(&self, x: f32, y: f32) -> (f32, f32) {
        match self.axis {
            Axis::Vertical => (y, x),
            Axis::Horizontal => (x, y),
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        let (along, across) = self.split(x, y);
        along >= self.start
            && along <= self.start + self.length
            && across >= self.cross_start
            && across <= self.cross_start + self.cross_length
    }

    /// `clamp((p - start) / length, 0, 1)`; a zero-length track reads 0.
    pub fn fraction_at(&self, x: f32, y: f32) -> f32 {
        if self.length <= 0.0 {
            return 0.0;
        }
        let (along, _) = self.split(x, y);
        ((along - self.start) / self.length).clamp(0.0, 1.0)
    }
}

/// Handle position with an eased transition that dragging suppresses.
#[derive(Debug, Clone)]
pub struct SliderHandle {
    position: f32,
    tween: Option<Tween>,
}

impl SliderHandle {
    pub fn new(position: f32) -> Self {
        Self {
            position,
            tween: None,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Move toward `target`; snap when `eased` is false.
    pub fn set_target(&mut self, target: f32, eased: bool) {
        if eased && (target - self.position).abs() > f32::EPSILON {
            self.tween = Some(Tween::new(
                self.position,
                target,
                HANDLE_TRANSITION_MS,
                easing::ease_out_cubic,
            ));
        } else {
            self.tween = None;
            self.position = target;
        }
    }

    /// Advance the transition. Returns `true` while still animating.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        self.position = tween.tick(dt_ms);
        if tween.is_finished() {
            self.position = tween.end;
            self.tween = None;
        }
        self.tween.is_some()
    }
}

/// Pointer interaction with one slider track.
#[derive(Debug, Clone)]
pub struct TrackDrag {
    track: Track,
    cardinality: usize,
    dragging: bool,
    handle: SliderHandle,
}

impl TrackDrag {
    pub fn new(track: Track, cardinality: usize, index: usize) -> Self {
        Self {
            track,
            cardinality,
            dragging: false,
            handle: SliderHandle::new(fraction_for_index(index, cardinality)),
        }
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn handle(&self) -> &SliderHandle {
        &self.handle
    }

    /// Pointer pressed. Starts a drag and jumps if the press hits the track;
    /// a press and release with no move in between is a plain click.
    pub fn press(&mut self, x: f32, y: f32) -> Option<NavCommand> {
        if !self.track.contains(x, y) {
            return None;
        }
        self.dragging = true;
        log::trace!("{:?} track drag start at ({x}, {y})", self.track.axis);
        Some(self.jump_at(x, y))
    }

    /// Pointer moved. Emits a jump on every move while dragging.
    pub fn drag_to(&mut self, x: f32, y: f32) -> Option<NavCommand> {
        if !self.dragging {
            return None;
        }
        Some(self.jump_at(x, y))
    }

    /// Pointer released. Returns `true` if a drag was in progress.
    pub fn release(&mut self) -> bool {
        let was = self.dragging;
        self.dragging = false;
        was
    }

    /// Sync the handle with the active index.
    pub fn sync(&mut self, index: usize) {
        let target = fraction_for_index(index, self.cardinality);
        self.handle.set_target(target, !self.dragging);
    }

    pub fn tick(&mut self, dt_ms: u32) -> bool {
        self.handle.tick(dt_ms)
    }

    fn jump_at(&self, x: f32, y: f32) -> NavCommand {
        let index = index_for_fraction(self.track.fraction_at(x, y), self.cardinality) as i64;
        match self.track.axis {
            Axis::Vertical => NavCommand::JumpToCategory(index),
            Axis::Horizontal => NavCommand::JumpToItem(index),
        }
    }
}

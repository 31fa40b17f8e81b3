//! Wheel gesture translator: noisy scroll deltas to discrete steps.
//!
//! Deltas accumulate per axis until the threshold is crossed, then exactly
//! one step fires and a cooldown starts. Events arriving while cooling are
//! dropped, not queued. Time comes from the host so the translator stays
//! deterministic.

use memgrid_types::config::WheelConfig;
use memgrid_types::input::Axis;

use crate::navigator::NavCommand;

/// The one cooldown deadline of a translator.
///
/// Re-arming replaces the deadline; there is never more than one pending.
#[derive(Debug, Clone, Default)]
pub struct CooldownTimer {
    deadline_ms: Option<u64>,
}

impl CooldownTimer {
    pub fn arm(&mut self, now_ms: u64, duration_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(duration_ms));
    }

    /// Expire the deadline if `now_ms` has reached it.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            },
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }
}

/// Accumulates wheel deltas into rate-limited navigation commands.
#[derive(Debug, Clone)]
pub struct WheelTranslator {
    config: WheelConfig,
    accumulated: f32,
    last_axis: Option<Axis>,
    cooldown: CooldownTimer,
    suspended: bool,
}

impl WheelTranslator {
    pub fn new(config: WheelConfig) -> Self {
        Self {
            config,
            accumulated: 0.0,
            last_axis: None,
            cooldown: CooldownTimer::default(),
            suspended: false,
        }
    }

    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    pub fn is_cooling(&self) -> bool {
        self.cooldown.is_pending()
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Ignore all wheel input (an overlay is in front of the grid).
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Accept wheel input again. Takes effect for the very next event.
    pub fn resume(&mut self) {
        self.suspended = false;
    }

    /// Drop a partial gesture. Called when a discrete control fires so a
    /// stale accumulation cannot step again afterwards.
    pub fn reset_accumulation(&mut self) {
        self.accumulated = 0.0;
    }

    /// Host clock advanced.
    pub fn tick(&mut self, now_ms: u64) {
        if self.cooldown.poll(now_ms) {
            log::trace!("wheel cooldown expired at {now_ms}ms");
        }
    }

    /// Stop the cooldown and forget any partial gesture.
    pub fn cancel(&mut self) {
        self.cooldown.cancel();
        self.accumulated = 0.0;
        self.last_axis = None;
    }

    /// Feed one wheel event; returns the step it completes, if any.
    pub fn feed(&mut self, dx: f32, dy: f32, now_ms: u64) -> Option<NavCommand> {
        if self.suspended {
            return None;
        }
        self.tick(now_ms);

        let axis = Axis::of_delta(dx, dy);
        let delta = match axis {
            Axis::Vertical => dy,
            Axis::Horizontal => dx,
        };
        if !delta.is_finite() {
            return None;
        }

        if self.last_axis != Some(axis) {
            self.accumulated = 0.0;
            self.last_axis = Some(axis);
        }
        if self.cooldown.is_pending() {
            return None;
        }

        self.accumulated += delta;
        if self.accumulated.abs() < self.config.threshold {
            return None;
        }

        let forward = self.accumulated > 0.0;
        self.accumulated = 0.0;
        self.cooldown.arm(now_ms, self.config.cooldown_ms);
        let command = match (axis, forward) {
            (Axis::Vertical, true) => NavCommand::NextCategory,
            (Axis::Vertical, false) => NavCommand::PrevCategory,
            (Axis::Horizontal, true) => NavCommand::NextItem,
            (Axis::Horizontal, false) => NavCommand::PrevItem,
        };
        log::debug!("wheel gesture fired {command:?}");
        Some(command)
    }
}

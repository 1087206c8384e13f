//! # Display Interpolator
//!
//! Animates the shown amount from whatever is on screen toward a new target
//! over a fixed number of frames, instead of jumping.
//!
//! ```text
//!            retarget()                 frame F reached
//!   Idle ───────────────► Animating ───────────────────► Idle
//!                          │      ▲
//!                          └──────┘ retarget() (restart from displayed value)
//! ```
//!
//! Frame `k` of `F` shows `round(start + (target - start) * k / F)`.
//!
//! The interpolator owns no thread. The event loop calls `tick(now)`, and a
//! `FrameTimer` decides which frames have come due. At most one timer exists:
//! retargeting replaces it, finishing or dropping the interpolator releases it.

use log::debug;
use std::time::{Duration, Instant};

use crate::core::expense::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    pub duration: Duration,
    pub frame_rate: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(100),
            frame_rate: 60,
        }
    }
}

impl AnimationConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.frame_rate.max(1)))
    }

    /// `round(duration * rate)`, at least one frame.
    pub fn frame_count(&self) -> u32 {
        let frames = (self.duration.as_secs_f64() * f64::from(self.frame_rate)).round();
        (frames as u32).max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolatorState {
    Idle,
    Animating,
}

/// A recurring frame schedule. Anchored on its first poll.
#[derive(Debug)]
struct FrameTimer {
    interval: Duration,
    total: u32,
    anchor: Option<Instant>,
    fired: u32,
}

impl FrameTimer {
    fn arm(interval: Duration, total: u32) -> Self {
        Self {
            interval,
            total,
            anchor: None,
            fired: 0,
        }
    }

    /// Number of frames that came due since the last poll.
    fn take_due(&mut self, now: Instant) -> u32 {
        let anchor = *self.anchor.get_or_insert(now);
        let elapsed = now.saturating_duration_since(anchor).as_nanos();
        let due = (elapsed / self.interval.as_nanos().max(1)).min(u128::from(self.total)) as u32;
        let new = due.saturating_sub(self.fired);
        self.fired = self.fired.max(due);
        new
    }

    fn time_until_next(&self, now: Instant) -> Duration {
        match self.anchor {
            None => Duration::ZERO,
            Some(anchor) => (anchor + self.interval * (self.fired + 1)).saturating_duration_since(now),
        }
    }
}

impl Drop for FrameTimer {
    fn drop(&mut self) {
        debug!("Frame timer released ({}/{} frames)", self.fired, self.total);
    }
}

#[derive(Debug)]
pub struct DisplayInterpolator {
    config: AnimationConfig,
    start: f64,
    target: f64,
    displayed: i64,
    frame: u32,
    timer: Option<FrameTimer>,
}

impl DisplayInterpolator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            start: 0.0,
            target: 0.0,
            displayed: 0,
            frame: 0,
            timer: None,
        }
    }

    /// Animate toward `target`, starting from the value currently displayed.
    pub fn retarget(&mut self, target: Amount) {
        let target = target.to_major();
        if self.timer.is_none() && target == self.target && self.displayed == target.round() as i64 {
            return;
        }
        self.start = self.displayed as f64;
        self.target = target;
        self.frame = 0;
        // Assigning drops the in-flight timer.
        self.timer = Some(FrameTimer::arm(
            self.config.frame_interval(),
            self.config.frame_count(),
        ));
    }

    /// Advance through every frame due at `now`. Returns `true` if the displayed value changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        let due = timer.take_due(now);
        if due == 0 {
            return false;
        }

        let before = self.displayed;
        let total = self.config.frame_count();
        self.frame = (self.frame + due).min(total);
        if self.frame >= total {
            self.displayed = self.target.round() as i64;
            self.timer = None;
        } else {
            let progress = f64::from(self.frame) / f64::from(total);
            self.displayed = (self.start + (self.target - self.start) * progress).round() as i64;
        }
        self.displayed != before
    }

    /// Stop animating and keep the current displayed value.
    pub fn cancel(&mut self) {
        self.timer = None;
    }

    pub fn displayed(&self) -> i64 {
        self.displayed
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn state(&self) -> InterpolatorState {
        if self.timer.is_some() {
            InterpolatorState::Animating
        } else {
            InterpolatorState::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.state() == InterpolatorState::Animating
    }

    /// How long the event loop may sleep before the next frame, `None` when idle.
    pub fn time_until_next_frame(&self, now: Instant) -> Option<Duration> {
        self.timer.as_ref().map(|t| t.time_until_next(now))
    }
}

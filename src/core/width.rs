//! # Adaptive Width Calculator
//!
//! Sizes the amount field to its content so digits are never clipped and the
//! field grows as the number does.
//!
//! `target = max(measure(text) + padding, min_width)`
//!
//! The text is measured with a `TextMeasure` that shares the renderer's glyph
//! metrics. The visible width then follows the target on a damped spring
//! rather than snapping.

use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Measures the rendered width of text, in terminal cells.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> u16;
}

/// Plain terminal text: one cell per narrow char, two per wide char.
#[derive(Debug, Default, Clone, Copy)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn measure(&self, text: &str) -> u16 {
        u16::try_from(text.width()).unwrap_or(u16::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthConfig {
    /// Floor, in cells.
    pub min_width: u16,
    /// Added to the measured width, in cells.
    pub padding: u16,
}

impl Default for WidthConfig {
    fn default() -> Self {
        Self {
            min_width: 6,
            padding: 2,
        }
    }
}

const STIFFNESS: f32 = 300.0;
const DAMPING: f32 = 25.0;
const MAX_STEP: f32 = 1.0 / 240.0;
const REST_DISTANCE: f32 = 0.5;
const REST_VELOCITY: f32 = 1.0;

/// Unit-mass damped spring on one axis.
#[derive(Debug, Clone, Copy)]
struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    fn at_rest(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
        }
    }

    fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    fn step(&mut self, dt: Duration) {
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 && !self.is_settled() {
            let h = remaining.min(MAX_STEP);
            let accel = STIFFNESS * (self.target - self.position) - DAMPING * self.velocity;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;

            if (self.target - self.position).abs() < REST_DISTANCE
                && self.velocity.abs() < REST_VELOCITY
            {
                self.position = self.target;
                self.velocity = 0.0;
            }
        }
    }
}

pub struct AdaptiveWidth<M: TextMeasure> {
    measure: M,
    config: WidthConfig,
    target: u16,
    spring: Spring,
}

impl<M: TextMeasure> AdaptiveWidth<M> {
    /// Starts sized for an empty field, without animating.
    pub fn new(measure: M, config: WidthConfig) -> Self {
        let target = target_width(&measure, config, "");
        Self {
            measure,
            config,
            target,
            spring: Spring::at_rest(f32::from(target)),
        }
    }

    /// Re-measure after the raw amount text changed.
    pub fn on_text_changed(&mut self, raw: &str) {
        self.target = target_width(&self.measure, self.config, raw);
        self.spring.target = f32::from(self.target);
    }

    /// Advance the resize animation. Returns `true` if the visible width changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let before = self.width();
        self.spring.step(dt);
        self.width() != before
    }

    pub fn target_width(&self) -> u16 {
        self.target
    }

    /// Current visible width in cells.
    pub fn width(&self) -> u16 {
        self.spring.position.round().clamp(0.0, f32::from(u16::MAX)) as u16
    }

    pub fn is_animating(&self) -> bool {
        !self.spring.is_settled()
    }
}

/// Empty text is measured as `"0"`, the placeholder the field shows.
fn target_width<M: TextMeasure>(measure: &M, config: WidthConfig, raw: &str) -> u16 {
    let text = if raw.is_empty() { "0" } else { raw };
    measure
        .measure(text)
        .saturating_add(config.padding)
        .max(config.min_width)
}

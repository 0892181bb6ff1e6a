use std::time::Duration;

pub static TRACK_HEIGHT: f32 = 5f32;
pub static THUMB_SIZE: f32 = 30f32;
pub static PROGRESS_MARKER_SIZE: f32 = 30f32;
pub static ANIMATION_DURATION: Duration = Duration::from_millis(300);
pub static FOCUS_SCALE_FACTOR: f32 = 1.05;
/// Dampens raw pixel translation into a slower scrub rate.
pub static SCRUB_MULTIPLIER: f64 = 0.15;

/// Tunables for a scrubber. Geometry is in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubberConfig {
    pub track_height: f32,
    pub thumb_size: f32,
    pub progress_marker_size: f32,
    pub animation_duration: Duration,
    /// Scale applied to the whole control while it has focus.
    pub focus_scale_factor: f32,
    pub scrub_multiplier: f64,
    /// Report every intermediate drag update, not only the committed value.
    pub continuous: bool,
}

impl Default for ScrubberConfig {
    fn default() -> Self {
        Self {
            track_height: TRACK_HEIGHT,
            thumb_size: THUMB_SIZE,
            progress_marker_size: PROGRESS_MARKER_SIZE,
            animation_duration: ANIMATION_DURATION,
            focus_scale_factor: FOCUS_SCALE_FACTOR,
            scrub_multiplier: SCRUB_MULTIPLIER,
            continuous: true,
        }
    }
}

impl ScrubberConfig {
    pub fn with_scrub_multiplier(mut self, multiplier: f64) -> Self {
        self.scrub_multiplier = multiplier;
        self
    }

    /// Non-positive sizes are ignored.
    pub fn with_thumb_size(mut self, size: f32) -> Self {
        if size > 0.0 {
            self.thumb_size = size;
        }
        self
    }

    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    pub fn with_focus_scale_factor(mut self, factor: f32) -> Self {
        self.focus_scale_factor = factor;
        self
    }
}

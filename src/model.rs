use tracing::{debug, trace};

use crate::appearance::ControlState;
use crate::config::ScrubberConfig;
use crate::error::ScrubberError;
use crate::event::ScrubberEvent;
use crate::gesture::Translation;
use crate::range::Range;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrubMode {
    #[default]
    Normal,
    Scrubbing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    pub thumb: bool,
    pub thumbnail_overlay: bool,
}

/// Value and gesture state behind a timeline scrubber.
///
/// Keeps two positions on one range: the confirmed progress value and the
/// thumb the user drags around. The thumb is further limited to the scrub
/// range. Gestures move only the thumb; [`confirm_and_exit`] copies it into
/// progress.
///
/// Events are queued and handed out by [`take_events`].
///
/// [`confirm_and_exit`]: ScrubberValueModel::confirm_and_exit
/// [`take_events`]: ScrubberValueModel::take_events
#[derive(Debug)]
pub struct ScrubberValueModel {
    range: Range,
    scrub_range: Range,
    progress_value: f64,
    thumb_value: f64,
    mode: ScrubMode,
    continuous: bool,
    scrub_multiplier: f64,
    scrubbing_enabled: bool,
    thumbnails_enabled: bool,
    thumbnail_source_attached: bool,
    enabled: bool,
    focused: bool,
    drag_anchor: Option<f64>,
    events: Vec<ScrubberEvent>,
}

impl Default for ScrubberValueModel {
    fn default() -> Self {
        Self::new(&ScrubberConfig::default())
    }
}

impl ScrubberValueModel {
    pub fn new(config: &ScrubberConfig) -> Self {
        Self {
            range: Range::default(),
            scrub_range: Range::unbounded(),
            progress_value: 0.0,
            thumb_value: 0.0,
            mode: ScrubMode::Normal,
            continuous: config.continuous,
            scrub_multiplier: config.scrub_multiplier,
            scrubbing_enabled: false,
            thumbnails_enabled: false,
            thumbnail_source_attached: false,
            enabled: true,
            focused: false,
            drag_anchor: None,
            events: Vec::new(),
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn scrub_range(&self) -> Range {
        self.scrub_range
    }

    pub fn progress_value(&self) -> f64 {
        self.progress_value
    }

    pub fn thumb_value(&self) -> f64 {
        self.thumb_value
    }

    pub fn mode(&self) -> ScrubMode {
        self.mode
    }

    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    pub fn is_scrubbing_enabled(&self) -> bool {
        self.scrubbing_enabled
    }

    pub fn is_thumbnails_enabled(&self) -> bool {
        self.thumbnails_enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_range(&mut self, min: f64, max: f64) -> Result<(), ScrubberError> {
        self.range = Range::new(min, max)?;
        debug!(min, max, "scrubber range changed");

        self.progress_value = self.range.clamp(self.progress_value);
        self.thumb_value = self.thumb_bounds().clamp(self.thumb_value);
        Ok(())
    }

    pub fn set_scrub_range(&mut self, min: f64, max: f64) -> Result<(), ScrubberError> {
        self.scrub_range = Range::new(min, max)?;
        debug!(min, max, "scrub range changed");

        self.thumb_value = self.thumb_bounds().clamp(self.thumb_value);
        Ok(())
    }

    pub fn set_progress_value(&mut self, value: f64) {
        if !value.is_finite() {
            trace!(value, "ignoring non-finite progress value");
            return;
        }

        self.progress_value = self.range.clamp(value);
    }

    pub fn set_thumb_value(&mut self, value: f64) {
        if !value.is_finite() {
            trace!(value, "ignoring non-finite thumb value");
            return;
        }

        // The thumb only rests on the scrub minimum when it lies inside the range.
        if self.thumb_value == self.scrub_range.min && value < self.scrub_range.min {
            trace!(value, "scrub attempted beyond minimum");
            self.events.push(ScrubberEvent::ScrubBeyondMinimum);
        }

        self.thumb_value = self.thumb_bounds().clamp(value);
    }

    /// Where the thumb may sit: the scrub range, then the value range. The
    /// value range always wins, so the thumb never leaves it.
    pub fn thumb_bounds(&self) -> Range {
        self.range.confine(self.scrub_range)
    }

    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    pub fn set_scrub_multiplier(&mut self, multiplier: f64) {
        self.scrub_multiplier = multiplier;
    }

    pub fn set_scrubbing_enabled(&mut self, enabled: bool) {
        if self.scrubbing_enabled == enabled {
            return;
        }

        self.scrubbing_enabled = enabled;
        debug!(enabled, "scrubbing toggled");

        if !enabled {
            self.discard_scrub();
        }
    }

    pub fn set_thumbnails_enabled(&mut self, enabled: bool) {
        self.thumbnails_enabled = enabled;
    }

    pub fn set_thumbnail_source_attached(&mut self, attached: bool) {
        self.thumbnail_source_attached = attached;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }

        self.enabled = enabled;
        if !enabled {
            self.discard_scrub();
        }
    }

    /// Losing focus throws away an unconfirmed drag. Gaining focus never
    /// turns scrubbing on by itself.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }

        self.focused = focused;
        if !focused {
            self.discard_scrub();
        }
    }

    pub fn on_gesture_begin(&mut self) {
        if !self.accepts_gestures() {
            trace!("gesture ignored, scrubbing unavailable");
            return;
        }

        self.drag_anchor = Some(self.thumb_position());

        if self.mode == ScrubMode::Normal {
            debug!(thumb = self.thumb_value, "scrubbing started");
            self.mode = ScrubMode::Scrubbing;
            self.events.push(ScrubberEvent::EditingBegin);
        }
    }

    pub fn on_gesture_changed(&mut self, translation: Translation, track_width: f64) {
        let Some(anchor) = self.drag_anchor else {
            return;
        };

        if translation.is_vertical() {
            return;
        }

        if !track_width.is_finite() || track_width <= 0.0 {
            return;
        }

        let center = anchor * track_width + translation.dx * self.scrub_multiplier;
        let percent = center / track_width;
        let next_value = self.range.value_from_percent(percent);
        trace!(dx = translation.dx, track_width, next_value, "scrub update");

        self.set_thumb_value(next_value);

        if self.continuous {
            self.events.push(ScrubberEvent::ValueChanged(self.thumb_value));
        }
    }

    /// Re-anchors on the live thumb so the next gesture continues from there.
    pub fn on_gesture_ended(&mut self) {
        if self.drag_anchor.is_some() {
            self.drag_anchor = Some(self.thumb_position());
        }
    }

    pub fn on_gesture_cancelled(&mut self) {
        self.on_gesture_ended();
    }

    pub fn confirm_and_exit(&mut self) {
        if self.mode != ScrubMode::Scrubbing {
            return;
        }

        self.progress_value = self.range.clamp(self.thumb_value);
        self.mode = ScrubMode::Normal;
        self.drag_anchor = None;
        debug!(progress = self.progress_value, "scrub confirmed");

        self.events.push(ScrubberEvent::EditingEnd);
    }

    pub fn progress_position(&self) -> f64 {
        self.range.percent_from_value(self.progress_value)
    }

    pub fn thumb_position(&self) -> f64 {
        self.range.percent_from_value(self.thumb_value)
    }

    pub fn value_at_position(&self, position: f64) -> f64 {
        self.range.value_from_percent(position)
    }

    pub fn visibility(&self) -> Visibility {
        let thumb = self.scrubbing_enabled && self.focused;

        Visibility {
            thumb,
            thumbnail_overlay: thumb && self.thumbnails_enabled && self.thumbnail_source_attached,
        }
    }

    pub fn control_state(&self) -> ControlState {
        if !self.enabled {
            ControlState::Disabled
        } else if self.mode == ScrubMode::Scrubbing {
            ControlState::Highlighted
        } else if self.focused {
            ControlState::Focused
        } else {
            ControlState::Normal
        }
    }

    pub fn take_events(&mut self) -> Vec<ScrubberEvent> {
        std::mem::take(&mut self.events)
    }

    fn accepts_gestures(&self) -> bool {
        self.enabled && self.scrubbing_enabled
    }

    fn discard_scrub(&mut self) {
        self.drag_anchor = None;

        if self.mode == ScrubMode::Scrubbing {
            debug!(progress = self.progress_value, "unconfirmed scrub discarded");
            self.mode = ScrubMode::Normal;
            self.thumb_value = self.thumb_bounds().clamp(self.progress_value);
        }
    }
}

use std::time::Duration;

use image::RgbaImage;
use tracing::warn;

use crate::appearance::{ControlState, StateAssets};
use crate::config::ScrubberConfig;
use crate::error::ScrubberError;
use crate::event::ScrubberEvent;
use crate::gesture::GesturePhase;
use crate::model::{ScrubMode, ScrubberValueModel, Visibility};
use crate::thumbnail::ThumbnailProvider;

/// Where and how to draw the scrubber for a given track width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub progress_offset: f64,
    pub thumb_offset: f64,
    pub visibility: Visibility,
    pub scale: f32,
    pub state: ControlState,
}

/// Host-facing side of the scrubber.
///
/// A rendering layer forwards gestures, focus, enablement and confirm
/// actions here, drains the returned events and redraws from [`layout`].
/// `I` is whatever the host uses as a thumb image.
///
/// [`layout`]: TimelineScrubber::layout
pub struct TimelineScrubber<I = ()> {
    model: ScrubberValueModel,
    config: ScrubberConfig,
    thumb_images: StateAssets<I>,
    thumbnails: Option<Box<dyn ThumbnailProvider>>,
}

impl<I> Default for TimelineScrubber<I> {
    fn default() -> Self {
        Self::new(ScrubberConfig::default())
    }
}

impl<I> std::fmt::Debug for TimelineScrubber<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimelineScrubber")
            .field("model", &self.model)
            .field("config", &self.config)
            .field("thumbnails", &self.thumbnails.is_some())
            .finish()
    }
}

impl<I> TimelineScrubber<I> {
    pub fn new(config: ScrubberConfig) -> Self {
        Self {
            model: ScrubberValueModel::new(&config),
            config,
            thumb_images: StateAssets::new(),
            thumbnails: None,
        }
    }

    pub fn model(&self) -> &ScrubberValueModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut ScrubberValueModel {
        &mut self.model
    }

    pub fn config(&self) -> &ScrubberConfig {
        &self.config
    }

    pub fn report_gesture(&mut self, phase: GesturePhase, track_width: f64) -> Vec<ScrubberEvent> {
        match phase {
            GesturePhase::Began => self.model.on_gesture_begin(),
            GesturePhase::Changed(translation) => {
                self.model.on_gesture_changed(translation, track_width)
            }
            GesturePhase::Ended => self.model.on_gesture_ended(),
            GesturePhase::Cancelled => self.model.on_gesture_cancelled(),
        }

        self.model.take_events()
    }

    pub fn report_focus(&mut self, focused: bool) -> Vec<ScrubberEvent> {
        self.model.set_focused(focused);
        self.model.take_events()
    }

    pub fn report_enabled(&mut self, enabled: bool) -> Vec<ScrubberEvent> {
        self.model.set_enabled(enabled);
        self.model.take_events()
    }

    pub fn report_confirm(&mut self) -> Vec<ScrubberEvent> {
        self.model.confirm_and_exit();
        self.model.take_events()
    }

    pub fn set_range(&mut self, min: f64, max: f64) -> Result<(), ScrubberError> {
        self.model.set_range(min, max)
    }

    pub fn set_scrub_range(&mut self, min: f64, max: f64) -> Result<(), ScrubberError> {
        self.model.set_scrub_range(min, max)
    }

    /// Returns the duration to animate the marker over when `animated` is set.
    pub fn set_progress_value(&mut self, value: f64, animated: bool) -> Option<Duration> {
        self.model.set_progress_value(value);
        animated.then_some(self.config.animation_duration)
    }

    pub fn set_thumb_value(&mut self, value: f64) -> Vec<ScrubberEvent> {
        self.model.set_thumb_value(value);
        self.model.take_events()
    }

    pub fn set_scrubbing_enabled(&mut self, enabled: bool) {
        self.model.set_scrubbing_enabled(enabled);
    }

    pub fn set_thumbnails_enabled(&mut self, enabled: bool) {
        self.model.set_thumbnails_enabled(enabled);
    }

    pub fn is_scrubbing(&self) -> bool {
        self.model.mode() == ScrubMode::Scrubbing
    }

    pub fn set_thumb_image(&mut self, state: ControlState, image: Option<I>) {
        self.thumb_images.set(state, image);
    }

    pub fn current_thumb_image(&self) -> Option<&I> {
        self.thumb_images.get(self.model.control_state())
    }

    pub fn attach_thumbnails(&mut self, provider: impl ThumbnailProvider + 'static) {
        self.thumbnails = Some(Box::new(provider));
        self.model.set_thumbnail_source_attached(true);
    }

    pub fn detach_thumbnails(&mut self) {
        self.thumbnails = None;
        self.model.set_thumbnail_source_attached(false);
    }

    /// Preview for the thumb's current value, if the overlay is showing.
    pub fn preview(&self) -> anyhow::Result<Option<RgbaImage>> {
        if !self.model.visibility().thumbnail_overlay {
            return Ok(None);
        }

        let Some(provider) = self.thumbnails.as_ref() else {
            return Ok(None);
        };

        let value = self.model.thumb_value();
        match provider.thumbnail(value) {
            Ok(image) => Ok(Some(image)),
            Err(err) => {
                warn!(value, "thumbnail lookup failed: {err:#}");
                Err(err)
            }
        }
    }

    pub fn focus_scale(&self) -> f32 {
        if self.model.is_focused() {
            self.config.focus_scale_factor
        } else {
            1.0
        }
    }

    pub fn layout(&self, track_width: f64) -> Layout {
        let track_width = track_width.max(0.0);

        Layout {
            progress_offset: Self::offset(self.model.progress_position(), track_width),
            thumb_offset: Self::offset(self.model.thumb_position(), track_width),
            visibility: self.model.visibility(),
            scale: self.focus_scale(),
            state: self.model.control_state(),
        }
    }

    fn offset(position: f64, track_width: f64) -> f64 {
        (track_width * position).min(track_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Translation;
    use crate::thumbnail::SolidColourThumbnails;
    use approx::assert_relative_eq;

    fn focused_scrubber() -> TimelineScrubber<&'static str> {
        let mut scrubber = TimelineScrubber::default();
        scrubber.set_scrubbing_enabled(true);
        scrubber.report_focus(true);
        scrubber
    }

    #[test]
    fn full_scrub_cycle() {
        let mut scrubber = focused_scrubber();
        scrubber.set_progress_value(0.55, false);
        scrubber.set_thumb_value(0.6);

        assert_eq!(
            scrubber.report_gesture(GesturePhase::Began, 400.0),
            vec![ScrubberEvent::EditingBegin]
        );

        let events =
            scrubber.report_gesture(GesturePhase::Changed(Translation::horizontal(80.0)), 400.0);
        assert_eq!(events.len(), 1);
        assert_relative_eq!(scrubber.model().thumb_value(), 0.63, epsilon = 1e-9);

        assert!(scrubber.report_gesture(GesturePhase::Ended, 400.0).is_empty());
        assert_eq!(scrubber.report_confirm(), vec![ScrubberEvent::EditingEnd]);
        assert_relative_eq!(scrubber.model().progress_value(), 0.63, epsilon = 1e-9);
        assert!(!scrubber.is_scrubbing());
    }

    #[test]
    fn focus_loss_discards_drag() {
        let mut scrubber = focused_scrubber();
        scrubber.set_progress_value(0.4, false);
        scrubber.report_gesture(GesturePhase::Began, 100.0);
        scrubber.report_gesture(GesturePhase::Changed(Translation::horizontal(100.0)), 100.0);

        scrubber.report_focus(false);

        assert_eq!(scrubber.model().thumb_value(), 0.4);
        assert!(!scrubber.is_scrubbing());
    }

    #[test]
    fn animated_progress_reports_duration() {
        let mut scrubber = TimelineScrubber::<()>::default();

        assert_eq!(
            scrubber.set_progress_value(0.5, true),
            Some(Duration::from_millis(300))
        );
        assert_eq!(scrubber.set_progress_value(0.5, false), None);
    }

    #[test]
    fn layout_maps_values_to_pixels() {
        let mut scrubber = focused_scrubber();
        scrubber.set_range(0.0, 10.0).unwrap();
        scrubber.set_scrub_range(0.0, 10.0).unwrap();
        scrubber.set_progress_value(2.5, false);
        scrubber.set_thumb_value(10.0);

        let layout = scrubber.layout(200.0);

        assert_relative_eq!(layout.progress_offset, 50.0);
        assert_relative_eq!(layout.thumb_offset, 200.0);
        assert!(layout.visibility.thumb);
        assert_relative_eq!(layout.scale, 1.05);
        assert_eq!(layout.state, ControlState::Focused);
    }

    #[test]
    fn unfocused_layout_is_unscaled() {
        let scrubber = TimelineScrubber::<()>::default();
        let layout = scrubber.layout(120.0);

        assert_eq!(layout.scale, 1.0);
        assert_eq!(layout.visibility, Visibility::default());
        assert_eq!(layout.progress_offset, 0.0);
    }

    #[test]
    fn layout_follows_config() {
        let config = ScrubberConfig::default()
            .with_focus_scale_factor(1.2)
            .with_thumb_size(44.0)
            .with_thumb_size(-1.0);
        let mut scrubber = TimelineScrubber::<()>::new(config);
        scrubber.set_scrubbing_enabled(true);
        scrubber.report_focus(true);
        scrubber.set_progress_value(0.5, false);

        let layout = scrubber.layout(300.0);

        assert_eq!(scrubber.config().thumb_size, 44.0);
        assert_relative_eq!(layout.scale, 1.2);
        assert_relative_eq!(layout.progress_offset, 150.0);

        // rendering layers lay out again when the width changes
        assert_relative_eq!(scrubber.layout(600.0).progress_offset, 300.0);
        assert_eq!(scrubber.layout(-5.0).progress_offset, 0.0);
    }

    #[test]
    fn disabled_control_lays_out_disabled() {
        let mut scrubber = focused_scrubber();
        scrubber.set_thumb_image(ControlState::Disabled, Some("greyed"));

        scrubber.report_enabled(false);

        assert_eq!(scrubber.layout(100.0).state, ControlState::Disabled);
        assert_eq!(scrubber.current_thumb_image(), Some(&"greyed"));
    }

    #[test]
    fn thumb_image_follows_control_state() {
        let mut scrubber = focused_scrubber();
        scrubber.set_thumb_image(ControlState::Normal, Some("plain"));
        scrubber.set_thumb_image(ControlState::Highlighted, Some("grabbed"));

        assert_eq!(scrubber.current_thumb_image(), Some(&"plain"));

        scrubber.report_gesture(GesturePhase::Began, 100.0);
        assert_eq!(scrubber.current_thumb_image(), Some(&"grabbed"));
    }

    #[test]
    fn preview_needs_overlay() {
        let mut scrubber = focused_scrubber();
        scrubber.attach_thumbnails(SolidColourThumbnails::default());
        assert!(scrubber.preview().unwrap().is_none());

        scrubber.set_thumbnails_enabled(true);
        let preview = scrubber.preview().unwrap();
        assert_eq!(preview.map(|image| image.dimensions()), Some((160, 90)));

        scrubber.detach_thumbnails();
        assert!(scrubber.preview().unwrap().is_none());
    }

    #[test]
    fn preview_stops_when_scrubbing_disabled() {
        let mut scrubber = focused_scrubber();
        scrubber.attach_thumbnails(SolidColourThumbnails::default());
        scrubber.set_thumbnails_enabled(true);
        assert!(scrubber.preview().unwrap().is_some());

        scrubber.set_scrubbing_enabled(false);

        assert!(scrubber.preview().unwrap().is_none());
    }

    #[test]
    fn failing_provider_surfaces_error() {
        let mut scrubber = focused_scrubber();
        scrubber.set_thumbnails_enabled(true);
        scrubber.attach_thumbnails(|value: f64| -> anyhow::Result<RgbaImage> {
            anyhow::bail!("no frame at {value}")
        });

        assert!(scrubber.preview().is_err());
    }
}

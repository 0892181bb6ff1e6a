use image::RgbaImage;
use relm4::adw;
use relm4::adw::prelude::AnimationExt;
use relm4::gtk;
use relm4::gtk::prelude::{Cast, ObjectExt, SnapshotExt, WidgetExt};
use relm4::gtk::subclass::prelude::*;
use relm4::gtk::{gdk, glib, graphene, gsk, Orientation, Snapshot};
use std::cell::{Cell, RefCell};
use std::time::Duration;

use timeline_scrubber::{ControlState, ScrubberConfig, TimelineScrubber};

static FILL_RULE: gsk::FillRule = gsk::FillRule::Winding;
static PREVIEW_WIDTH: f32 = 160f32;
static PREVIEW_HEIGHT: f32 = 90f32;
static PREVIEW_GAP: f32 = 8f32;
static DISABLED_OPACITY: f64 = 0.5;
static TRACK_COLOUR: gdk::RGBA = gdk::RGBA::new(0.5, 0.5, 0.5, 1.0);
static MINIMUM_TRACK_COLOUR: gdk::RGBA = gdk::RGBA::new(0.0, 0.0, 1.0, 1.0);
static PROGRESS_COLOUR: gdk::RGBA = gdk::RGBA::new(1.0, 0.5, 0.0, 1.0);
static THUMB_COLOUR: gdk::RGBA = gdk::RGBA::WHITE;

#[derive(glib::Properties, Default)]
#[properties(wrapper_type = super::TrackWidget)]
pub struct TrackWidget {
    /// Pixels from the start of the track.
    #[property(get, set)]
    progress_offset: Cell<f32>,
    #[property(get, set)]
    thumb_offset: Cell<f32>,
    #[property(get, set)]
    thumb_visible: Cell<bool>,
    #[property(get, set)]
    scale: Cell<f32>,
    #[property(get, set)]
    track_height: Cell<f32>,
    #[property(get, set)]
    thumb_size: Cell<f32>,
    #[property(get, set)]
    marker_size: Cell<f32>,
    thumb_colour: RefCell<Option<gdk::RGBA>>,
    preview: RefCell<Option<gdk::Texture>>,
    progress_animation: RefCell<Option<adw::TimedAnimation>>,
    allocated_width: Cell<i32>,
    resized: RefCell<Option<Box<dyn Fn()>>>,
}

#[glib::object_subclass]
impl ObjectSubclass for TrackWidget {
    const NAME: &'static str = "ScrubberTrackWidget";
    type Type = super::TrackWidget;
    type ParentType = gtk::Widget;
}

#[glib::derived_properties]
impl ObjectImpl for TrackWidget {}

impl WidgetImpl for TrackWidget {
    fn measure(&self, orientation: Orientation, _for_size: i32) -> (i32, i32, i32, i32) {
        match orientation {
            Orientation::Vertical => {
                let height = (PREVIEW_HEIGHT + PREVIEW_GAP + self.thumb_size.get()) as i32;
                (height, height, -1, -1)
            }
            _ => (self.thumb_size.get() as i32 * 2, PREVIEW_WIDTH as i32 * 2, -1, -1),
        }
    }

    // offsets are in pixels, so the owner has to lay out again on resize
    fn size_allocate(&self, width: i32, height: i32, baseline: i32) {
        self.parent_size_allocate(width, height, baseline);

        if self.allocated_width.replace(width) != width {
            if let Some(resized) = self.resized.borrow().as_ref() {
                resized();
            }
        }
    }

    fn snapshot(&self, snapshot: &Snapshot) {
        let widget = self.obj();
        let width = widget.width() as f32;
        let height = widget.height() as f32;

        snapshot.save();

        let scale = self.scale.get();
        if scale != 1f32 {
            let center = graphene::Point::new(width / 2.0, height / 2.0);
            snapshot.translate(&center);
            snapshot.scale(scale, scale);
            snapshot.translate(&graphene::Point::new(-center.x(), -center.y()));
        }

        let track_height = self.track_height.get();
        let track_y = self.track_center_y() - track_height / 2.0;
        let track_rect =
            graphene::Rect::new(self.track_start(), track_y, self.track_width(), track_height);
        snapshot.append_fill(&Self::pill_path(track_rect), FILL_RULE, &TRACK_COLOUR);

        let progress_offset = self.progress_offset.get().clamp(0.0, self.track_width());
        let minimum_rect =
            graphene::Rect::new(self.track_start(), track_y, progress_offset, track_height);
        snapshot.append_fill(&Self::pill_path(minimum_rect), FILL_RULE, &MINIMUM_TRACK_COLOUR);

        snapshot.append_fill(
            &self.marker_path(progress_offset, self.marker_size.get()),
            FILL_RULE,
            &PROGRESS_COLOUR,
        );

        if self.thumb_visible.get() {
            let thumb_colour = self.thumb_colour.borrow();
            snapshot.append_fill(
                &self.marker_path(self.thumb_offset.get(), self.thumb_size.get()),
                FILL_RULE,
                thumb_colour.as_ref().unwrap_or(&THUMB_COLOUR),
            );

            if let Some(texture) = self.preview.borrow().as_ref() {
                snapshot.append_texture(texture, &self.preview_rect());
            }
        }

        snapshot.restore();
    }
}

impl TrackWidget {
    fn track_start(&self) -> f32 {
        self.thumb_size.get() / 2.0
    }

    fn track_width(&self) -> f32 {
        (self.obj().width() as f32 - self.thumb_size.get()).max(0.0)
    }

    fn track_center_y(&self) -> f32 {
        self.obj().height() as f32 - self.thumb_size.get() / 2.0
    }

    fn pill_path(rect: graphene::Rect) -> gsk::Path {
        let outline = gsk::RoundedRect::from_rect(rect, rect.height() / 2.0);

        let path_builder = gsk::PathBuilder::new();
        path_builder.add_rounded_rect(&outline);
        path_builder.to_path()
    }

    fn marker_path(&self, offset: f32, size: f32) -> gsk::Path {
        let marker_rect = graphene::Rect::new(
            self.track_start() + offset - size / 2.0,
            self.track_center_y() - size / 2.0,
            size,
            size,
        );

        Self::pill_path(marker_rect)
    }

    fn preview_rect(&self) -> graphene::Rect {
        let max_x = (self.obj().width() as f32 - PREVIEW_WIDTH).max(0.0);
        let thumb_center = self.track_start() + self.thumb_offset.get();
        let x = (thumb_center - PREVIEW_WIDTH / 2.0).clamp(0.0, max_x);

        graphene::Rect::new(x, 0.0, PREVIEW_WIDTH, PREVIEW_HEIGHT)
    }
}

impl super::TrackWidget {
    /// Pixel width markers can travel along.
    pub fn usable_width(&self) -> f64 {
        self.imp().track_width() as f64
    }

    /// Called whenever the allocated width changes.
    pub fn connect_resized<F: Fn() + 'static>(&self, f: F) {
        self.imp().resized.replace(Some(Box::new(f)));
    }

    /// Redraws from the scrubber's config and layout. With `animation` set the
    /// progress marker glides to its new offset instead of jumping.
    pub fn show_state(
        &self,
        scrubber: &TimelineScrubber<gdk::RGBA>,
        animation: Option<Duration>,
    ) {
        let config = scrubber.config();
        self.set_track_height(config.track_height);
        self.set_thumb_size(config.thumb_size);
        self.set_marker_size(config.progress_marker_size);

        let layout = scrubber.layout(self.usable_width());

        self.show_progress(layout.progress_offset as f32, animation);
        self.set_thumb_offset(layout.thumb_offset as f32);
        self.set_thumb_visible(layout.visibility.thumb);
        self.set_scale(layout.scale);
        self.set_opacity(if layout.state == ControlState::Disabled {
            DISABLED_OPACITY
        } else {
            1.0
        });
        self.imp()
            .thumb_colour
            .replace(scrubber.current_thumb_image().cloned());
        self.queue_draw();
    }

    fn show_progress(&self, offset: f32, animation: Option<Duration>) {
        let imp = self.imp();

        let Some(duration) = animation else {
            // a running animation is retargeted so it lands on the latest value
            match imp.progress_animation.borrow().as_ref() {
                Some(running) if running.state() == adw::AnimationState::Playing => {
                    running.set_value_to(offset as f64)
                }
                _ => self.set_progress_offset(offset),
            }
            return;
        };

        if let Some(previous) = imp.progress_animation.take() {
            previous.pause();
        }

        let track = self.downgrade();
        let target = adw::CallbackAnimationTarget::new(move |value| {
            if let Some(track) = track.upgrade() {
                track.set_progress_offset(value as f32);
                track.queue_draw();
            }
        });

        let progress_animation = adw::TimedAnimation::new(
            self,
            self.progress_offset() as f64,
            offset as f64,
            duration.as_millis() as u32,
            target,
        );
        progress_animation.play();
        imp.progress_animation.replace(Some(progress_animation));
    }

    pub fn set_preview(&self, preview: Option<RgbaImage>) {
        let texture = preview.map(|image| {
            let (width, height) = image.dimensions();
            let bytes = glib::Bytes::from_owned(image.into_raw());

            gdk::MemoryTexture::new(
                width as i32,
                height as i32,
                gdk::MemoryFormat::R8g8b8a8,
                &bytes,
                width as usize * 4,
            )
            .upcast::<gdk::Texture>()
        });

        self.imp().preview.replace(texture);
        self.queue_draw();
    }
}

impl Default for super::TrackWidget {
    fn default() -> Self {
        let config = ScrubberConfig::default();

        glib::Object::builder()
            .property("progress-offset", 0f32)
            .property("thumb-offset", 0f32)
            .property("thumb-visible", false)
            .property("scale", 1f32)
            .property("track-height", config.track_height)
            .property("thumb-size", config.thumb_size)
            .property("marker-size", config.progress_marker_size)
            .build()
    }
}

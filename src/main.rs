use anyhow::Context;
use argh::FromArgs;
use relm4::gtk::gdk;
use relm4::RelmApp;
use tracing_subscriber::EnvFilter;

use crate::app::{App, AppInit};
use timeline_scrubber::{ControlState, ScrubberConfig, SolidColourThumbnails, TimelineScrubber};

mod app;
mod ui;

static GRABBED_THUMB: gdk::RGBA = gdk::RGBA::new(1.0, 0.85, 0.3, 1.0);
static DISABLED_THUMB: gdk::RGBA = gdk::RGBA::new(0.6, 0.6, 0.6, 1.0);

#[derive(FromArgs)]
/// Timeline scrubber demo.
struct Args {
    /// lowest value the thumb can be dragged to
    #[argh(option, default = "0.5")]
    scrub_min: f64,

    /// highest value the thumb can be dragged to
    #[argh(option, default = "0.9")]
    scrub_max: f64,

    /// initial playback position
    #[argh(option, default = "0.55")]
    progress: f64,

    /// initial thumb position
    #[argh(option, default = "0.6")]
    thumb: f64,

    /// translation multiplier applied while dragging
    #[argh(option, default = "0.15")]
    scrub_multiplier: f64,

    /// thumb diameter in pixels
    #[argh(option, default = "30.0")]
    thumb_size: f32,

    /// only report the committed value, not every drag update
    #[argh(switch)]
    discrete: bool,

    /// hide preview thumbnails
    #[argh(switch)]
    no_thumbnails: bool,

    /// advance the playback position over time
    #[argh(switch)]
    play: bool,
}

fn build_scrubber(args: &Args) -> anyhow::Result<TimelineScrubber<gdk::RGBA>> {
    let config = ScrubberConfig::default()
        .with_scrub_multiplier(args.scrub_multiplier)
        .with_thumb_size(args.thumb_size)
        .with_continuous(!args.discrete);

    let mut scrubber = TimelineScrubber::new(config);
    scrubber
        .set_scrub_range(args.scrub_min, args.scrub_max)
        .context("bad --scrub-min/--scrub-max")?;
    scrubber.set_progress_value(args.progress, false);
    scrubber.set_thumb_value(args.thumb);
    scrubber.set_scrubbing_enabled(true);

    scrubber.set_thumb_image(ControlState::Normal, Some(gdk::RGBA::WHITE));
    scrubber.set_thumb_image(ControlState::Highlighted, Some(GRABBED_THUMB));
    scrubber.set_thumb_image(ControlState::Disabled, Some(DISABLED_THUMB));

    if !args.no_thumbnails {
        scrubber.attach_thumbnails(SolidColourThumbnails::default());
        scrubber.set_thumbnails_enabled(true);
    }

    Ok(scrubber)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("timeline_scrubber=info,scrubber_demo=info")),
        )
        .init();

    let args: Args = argh::from_env();
    let scrubber = build_scrubber(&args)?;

    let app = RelmApp::new("relm4.timeline.scrubber").with_args(Vec::new());
    app.run::<App>(AppInit {
        scrubber,
        playback_step: args.play.then_some(0.002),
    });

    Ok(())
}

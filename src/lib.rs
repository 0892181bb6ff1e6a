//! Value and gesture model for a video timeline scrubber.
//!
//! [`TimelineScrubber`] is the piece a rendering layer talks to. It keeps a
//! confirmed progress marker and a draggable thumb on one value range, turns
//! pan gestures into thumb movement and reports what happened as
//! [`ScrubberEvent`]s.

pub mod appearance;
pub mod config;
pub mod error;
pub mod event;
pub mod gesture;
pub mod model;
pub mod range;
pub mod scrubber;
pub mod thumbnail;

pub use appearance::{ControlState, StateAssets};
pub use config::ScrubberConfig;
pub use error::ScrubberError;
pub use event::ScrubberEvent;
pub use gesture::{GesturePhase, Translation};
pub use model::{ScrubMode, ScrubberValueModel, Visibility};
pub use range::Range;
pub use scrubber::{Layout, TimelineScrubber};
pub use thumbnail::{SolidColourThumbnails, ThumbnailProvider};

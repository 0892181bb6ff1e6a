use anyhow::{ensure, Result};
use image::{Rgba, RgbaImage};

static THUMBNAIL_WIDTH: u32 = 160;
static THUMBNAIL_HEIGHT: u32 = 90;

/// Supplies preview images for positions on the timeline.
pub trait ThumbnailProvider {
    fn thumbnail(&self, value: f64) -> Result<RgbaImage>;
}

impl<F> ThumbnailProvider for F
where
    F: Fn(f64) -> Result<RgbaImage>,
{
    fn thumbnail(&self, value: f64) -> Result<RgbaImage> {
        self(value)
    }
}

/// Flat colour frames, hue picked from the value. Stands in for decoded
/// video frames when there is no media to sample.
#[derive(Clone, Copy, Debug)]
pub struct SolidColourThumbnails {
    width: u32,
    height: u32,
    period: f64,
}

impl Default for SolidColourThumbnails {
    fn default() -> Self {
        Self {
            width: THUMBNAIL_WIDTH,
            height: THUMBNAIL_HEIGHT,
            period: 1.0,
        }
    }
}

impl SolidColourThumbnails {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "thumbnail size must be non-zero, got {width}x{height}"
        );

        Ok(Self {
            width,
            height,
            ..Self::default()
        })
    }

    /// Distance in value units after which the hue wraps around.
    pub fn with_period(mut self, period: f64) -> Self {
        self.period = period;
        self
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn colour_for(&self, value: f64) -> Rgba<u8> {
        let hue = (value / self.period).rem_euclid(1.0) * 6.0;
        let sector = hue.floor();
        let fraction = hue - sector;

        let rising = (fraction * 255.0).round() as u8;
        let falling = 255 - rising;

        let [r, g, b] = match sector as u8 {
            0 => [255, rising, 0],
            1 => [falling, 255, 0],
            2 => [0, 255, rising],
            3 => [0, falling, 255],
            4 => [rising, 0, 255],
            _ => [255, 0, falling],
        };

        Rgba([r, g, b, 255])
    }
}

impl ThumbnailProvider for SolidColourThumbnails {
    fn thumbnail(&self, value: f64) -> Result<RgbaImage> {
        ensure!(value.is_finite(), "no thumbnail for non-finite value {value}");
        ensure!(self.period > 0.0, "thumbnail hue period must be positive");

        Ok(RgbaImage::from_pixel(
            self.width,
            self.height,
            self.colour_for(value),
        ))
    }
}

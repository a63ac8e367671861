//! Color wipe along the strip.

use embedded_hal::delay::DelayNs;

use crate::color::Rgb;
use crate::driver::LedDriver;

const DEFAULT_FRAME_DELAY_MS: u32 = 500;

/// Fills pixels one at a time, in index order, with a single solid color.
///
/// The strip is not cleared first; whatever was showing is covered pixel by
/// pixel, with a render after each one.
#[derive(Clone, Debug)]
pub struct Wipe {
    color: Rgb,
    frame_delay_ms: u32,
}

impl Wipe {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }

    #[must_use]
    pub fn with_frame_delay_ms(mut self, frame_delay_ms: u32) -> Self {
        self.frame_delay_ms = frame_delay_ms;
        self
    }

    pub fn run<D, T>(&self, strip: &mut D, delay: &mut T)
    where
        D: LedDriver,
        T: DelayNs,
    {
        for index in 0..strip.num_pixels() {
            strip.set_pixel_color(index, self.color);
            strip.show();
            delay.delay_ms(self.frame_delay_ms);
        }
    }
}

//! Theater-marquee chase animations.

use embedded_hal::delay::DelayNs;

use crate::animation::rainbow::pixel_hue;
use crate::color::{Rgb, gamma_corrected, wheel};
use crate::driver::LedDriver;

/// Phase offsets per repeat: every third pixel is lit.
const CHASE_PHASES: usize = 3;

const DEFAULT_FRAME_DELAY_MS: u32 = 50;
const DEFAULT_REPEATS: usize = 10;
const DEFAULT_RAINBOW_REPEATS: usize = 30;

/// Hue advance per frame: one wheel revolution every 90 frames.
#[allow(clippy::cast_possible_truncation)]
const HUE_STEP_PER_FRAME: u16 = (65536 / 90) as u16;

/// Chasing lights in a single solid color.
///
/// Each frame clears the strip and lights every third pixel, stepping the
/// phase offset so the lit pixels appear to march along the strip.
#[derive(Clone, Debug)]
pub struct TheaterChase {
    color: Rgb,
    repeats: usize,
    frame_delay_ms: u32,
}

impl TheaterChase {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            repeats: DEFAULT_REPEATS,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }

    #[must_use]
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
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
        for _ in 0..self.repeats {
            for phase in 0..CHASE_PHASES {
                strip.clear();
                for index in (phase..strip.num_pixels()).step_by(CHASE_PHASES) {
                    strip.set_pixel_color(index, self.color);
                }
                strip.show();
                delay.delay_ms(self.frame_delay_ms);
            }
        }
    }
}

/// Theater chase with a continuously advancing rainbow hue.
///
/// The lit pixels take their hue from the scrolling color wheel, offset along
/// the strip like [`crate::animation::Rainbow`]; the base hue advances once
/// per frame.
#[derive(Clone, Debug)]
pub struct TheaterChaseRainbow {
    repeats: usize,
    frame_delay_ms: u32,
}

impl Default for TheaterChaseRainbow {
    fn default() -> Self {
        Self {
            repeats: DEFAULT_RAINBOW_REPEATS,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }
}

impl TheaterChaseRainbow {
    #[must_use]
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
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
        let mut first_hue: u16 = 0;
        for _ in 0..self.repeats {
            for phase in 0..CHASE_PHASES {
                strip.clear();
                let count = strip.num_pixels();
                for index in (phase..count).step_by(CHASE_PHASES) {
                    let color = wheel(pixel_hue(first_hue, index, count));
                    strip.set_pixel_color(index, gamma_corrected(color));
                }
                strip.show();
                delay.delay_ms(self.frame_delay_ms);
                first_hue = first_hue.wrapping_add(HUE_STEP_PER_FRAME);
            }
        }
    }
}

//! Flowing rainbow along the strip.

use embedded_hal::delay::DelayNs;

use crate::color::{gamma, wheel};
use crate::driver::LedDriver;

const DEFAULT_WHEEL_CYCLES: u32 = 5;
const DEFAULT_FRAME_DELAY_MS: u32 = 10;

/// The base hue advances 256 wheel positions per frame, so one full 16-bit
/// wheel revolution spans 256 frames.
const HUE_STEP_PER_FRAME: u32 = 256;
const FRAMES_PER_CYCLE: u32 = 65536 / HUE_STEP_PER_FRAME;

/// Hue of pixel `index`: the base hue offset so that one full wheel
/// revolution stretches along the length of the strip.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn pixel_hue(first_hue: u16, index: usize, count: usize) -> u16 {
    first_hue.wrapping_add((index as u32 * 65536 / count as u32) as u16)
}

/// Sweeps the color wheel along the strip for a bounded number of cycles.
///
/// Each frame maps every pixel's hue by linear offset from a scrolling base
/// hue, converts through the vendor HSV math and gamma table, and renders.
#[derive(Clone, Debug)]
pub struct Rainbow {
    wheel_cycles: u32,
    frame_delay_ms: u32,
}

impl Default for Rainbow {
    fn default() -> Self {
        Self {
            wheel_cycles: DEFAULT_WHEEL_CYCLES,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }
}

impl Rainbow {
    #[must_use]
    pub fn with_wheel_cycles(mut self, wheel_cycles: u32) -> Self {
        self.wheel_cycles = wheel_cycles;
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
        let count = strip.num_pixels();
        for frame in 0..self.wheel_cycles * FRAMES_PER_CYCLE {
            #[allow(clippy::cast_possible_truncation)]
            let first_hue = (frame * HUE_STEP_PER_FRAME) as u16;
            let colors = (0..count).map(|index| wheel(pixel_hue(first_hue, index, count)));
            for (index, color) in gamma(colors).enumerate() {
                strip.set_pixel_color(index, color);
            }
            strip.show();
            delay.delay_ms(self.frame_delay_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pixel_hue_spreads_one_revolution_over_the_strip() {
        assert_eq!(pixel_hue(0, 0, 6), 0);
        assert_eq!(pixel_hue(0, 3, 6), 32768);
        // offsets wrap on top of a nonzero base hue
        assert_eq!(pixel_hue(60000, 3, 6), 60000u16.wrapping_add(32768));
    }
}

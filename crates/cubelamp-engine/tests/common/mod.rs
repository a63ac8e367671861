//! Hardware-free test doubles for the driver and delay seams.

use cubelamp_engine::color::BLACK;
use cubelamp_engine::{LedDriver, Rgb};
use embedded_hal::delay::DelayNs;

/// A strip that records every flushed frame instead of driving hardware.
pub struct RecordingStrip {
    staged: Vec<Rgb>,
    pub frames: Vec<Vec<Rgb>>,
    pub brightness: Option<u8>,
}

impl RecordingStrip {
    pub fn new(num_pixels: usize) -> Self {
        Self::filled(num_pixels, BLACK)
    }

    /// A strip whose staged state starts out as `color`, to make "pixels left
    /// unchanged" observable.
    pub fn filled(num_pixels: usize, color: Rgb) -> Self {
        Self {
            staged: vec![color; num_pixels],
            frames: Vec::new(),
            brightness: None,
        }
    }

    pub fn last_frame(&self) -> &[Rgb] {
        self.frames.last().expect("no frame was rendered")
    }
}

impl LedDriver for RecordingStrip {
    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        self.staged[index] = color;
    }

    fn show(&mut self) {
        self.frames.push(self.staged.clone());
    }

    fn num_pixels(&self) -> usize {
        self.staged.len()
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = Some(brightness);
    }
}

/// Counts frame delays instead of sleeping.
#[derive(Default)]
pub struct CountingDelay {
    pub ms_calls: u32,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, _ms: u32) {
        self.ms_calls += 1;
    }
}

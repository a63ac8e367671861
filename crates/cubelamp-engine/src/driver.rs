//! LED strip driver abstraction layer
//!
//! Provides a trait-based abstraction for LED strip transports, allowing the
//! animation engine to be hardware-agnostic.

use crate::color::{BLACK, Rgb};

/// Abstract LED strip driver.
///
/// Implement this trait to support different hardware platforms. The engine is
/// generic over it, so animations run unchanged against real strips, terminal
/// simulators or recording test doubles.
///
/// Staged colors have no visible effect until [`show`](Self::show) flushes
/// them; `show` is the only operation with an observable external effect.
pub trait LedDriver {
    /// Stage a color for pixel `index`.
    fn set_pixel_color(&mut self, index: usize, color: Rgb);

    /// Flush all staged colors to the device.
    fn show(&mut self);

    /// Fixed pixel count of the device.
    fn num_pixels(&self) -> usize;

    /// Global brightness scaling, applied by the transport on output.
    fn set_brightness(&mut self, brightness: u8);

    /// Stage black for every pixel.
    fn clear(&mut self) {
        for index in 0..self.num_pixels() {
            self.set_pixel_color(index, BLACK);
        }
    }

    /// Stage a whole frame and flush it.
    fn write(&mut self, colors: &[Rgb]) {
        for (index, &color) in colors.iter().enumerate() {
            self.set_pixel_color(index, color);
        }
        self.show();
    }
}

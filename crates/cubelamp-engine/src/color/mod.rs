//! Color model: RGB value type, named palettes and color-wheel helpers.
//!
//! The value type is `smart_leds::RGB8`; hue-to-RGB conversion and gamma
//! correction are the vendor implementations from the same crate.

mod palette;

pub use palette::{
    BLACK, BLUE, CYAN, GREEN, MAGENTA, ORANGE, PALETTE, PINK, Palette, RED, SPIN_PALETTE, WHITE,
    YELLOW,
};

use smart_leds::RGB8;
use smart_leds::hsv::Hsv;

pub use smart_leds::gamma;
pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;

/// Map a 16-bit position on the color wheel to RGB at full saturation and value.
///
/// The wheel wraps: `wheel(0)` and `wheel(u16::MAX + 1)` are the same color.
#[allow(clippy::cast_possible_truncation)]
pub fn wheel(hue: u16) -> Rgb {
    hsv2rgb(Hsv {
        hue: (hue >> 8) as u8,
        sat: 255,
        val: 255,
    })
}

/// Gamma-correct a single color through the vendor gamma table.
pub fn gamma_corrected(color: Rgb) -> Rgb {
    gamma(core::iter::once(color)).next().unwrap_or(color)
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

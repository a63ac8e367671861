use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use cubelamp_engine::color::BLACK;
use cubelamp_engine::{LedDriver, Rgb};

/// Renders the strip as one row of colored blocks on stdout.
///
/// Staged colors become visible only on `show`, matching the staging contract
/// of real strip hardware. Brightness scaling happens here at output time,
/// outside the engine.
pub struct TerminalStrip {
    staged: Vec<Rgb>,
    brightness: u8,
    out: Stdout,
}

impl TerminalStrip {
    pub fn new(num_pixels: usize) -> Self {
        Self {
            staged: vec![BLACK; num_pixels],
            brightness: 255,
            out: io::stdout(),
        }
    }

    /// Move past the strip row so later output starts on a fresh line.
    pub fn finish(&mut self) {
        let _ = queue!(self.out, Print("\n"));
        let _ = self.out.flush();
    }

    fn render(&mut self) -> io::Result<()> {
        let brightness = self.brightness;
        queue!(self.out, MoveToColumn(0))?;
        for &px in &self.staged {
            let c = scaled(px, brightness);
            queue!(
                self.out,
                SetForegroundColor(Color::Rgb { r: c.r, g: c.g, b: c.b }),
                Print("██"),
            )?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

/// Transport-level brightness scaling, applied on output only.
fn scaled(color: Rgb, brightness: u8) -> Rgb {
    if brightness == 255 {
        return color;
    }
    #[allow(clippy::cast_possible_truncation)]
    let scale = |v: u8| ((u16::from(v) * u16::from(brightness)) >> 8) as u8;
    Rgb::new(scale(color.r), scale(color.g), scale(color.b))
}

impl LedDriver for TerminalStrip {
    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        self.staged[index] = color;
    }

    fn show(&mut self) {
        // a vanished stdout is not recoverable mid-animation
        let _ = self.render();
    }

    fn num_pixels(&self) -> usize {
        self.staged.len()
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}

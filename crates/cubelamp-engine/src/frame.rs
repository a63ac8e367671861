//! In-memory pixel buffer and its drawing operations.

use heapless::Vec;

use crate::color::{BLACK, Rgb};
use crate::layout::{CubeLayout, FACES_PER_CUBE};

/// Hard capacity for pixel buffers. [`CubeLayout`] validation guarantees no
/// live layout exceeds it.
pub const MAX_LED_COUNT: usize = 128;

/// Color state for every pixel of the lamp.
///
/// The length is fixed at construction to `layout.led_count()`; drawing
/// operations mutate the buffer in place and never resize it. One frame has
/// exactly one writer at a time — the currently running animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    layout: CubeLayout,
    pixels: Vec<Rgb, MAX_LED_COUNT>,
}

impl Frame {
    /// A frame with every pixel set to `color`.
    pub fn filled(layout: CubeLayout, color: Rgb) -> Self {
        let mut pixels = Vec::new();
        // layout validation caps led_count at MAX_LED_COUNT, so this cannot fail
        let _ = pixels.resize(layout.led_count(), color);
        Self { layout, pixels }
    }

    /// An all-off frame.
    pub fn black(layout: CubeLayout) -> Self {
        Self::filled(layout, BLACK)
    }

    pub fn layout(&self) -> CubeLayout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Color of one pixel. Panics on an out-of-range index.
    pub fn get(&self, index: usize) -> Rgb {
        self.pixels[index]
    }

    /// Write `color` into one pixel slot. Panics on an out-of-range index.
    pub fn set(&mut self, index: usize, color: Rgb) {
        self.pixels[index] = color;
    }

    /// Write `color` to every slot.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Write `color` to every slot of one cube, center included.
    pub fn set_cube(&mut self, cube: usize, color: Rgb) {
        let base = self.layout.cube_base(cube);
        self.pixels[base..base + FACES_PER_CUBE].fill(color);
    }

    /// Write `color` to exactly one side face of one cube.
    pub fn set_cube_side(&mut self, cube: usize, side: usize, color: Rgb) {
        let index = self.layout.side_index(cube, side);
        self.pixels[index] = color;
    }

    /// Fill the whole lamp with `bg`, then light one cube in `fg`.
    pub fn spotlight(&mut self, cube: usize, bg: Rgb, fg: Rgb) {
        self.fill(bg);
        self.set_cube(cube, fg);
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{GREEN, RED, WHITE};
    use pretty_assertions::assert_eq;

    fn one_cube() -> CubeLayout {
        CubeLayout::new(1).unwrap()
    }

    #[test]
    fn black_frame_is_all_off() {
        let frame = Frame::black(one_cube());
        assert_eq!(frame.len(), 6);
        assert!(frame.as_slice().iter().all(|&px| px == BLACK));
    }

    #[test]
    fn set_cube_side_lights_exactly_one_side_slot() {
        let mut frame = Frame::black(one_cube());
        frame.set_cube_side(0, 0, RED);
        for (i, &px) in frame.as_slice().iter().enumerate() {
            if i == 1 {
                assert_eq!(px, RED);
            } else {
                assert_eq!(px, BLACK);
            }
        }
    }

    #[test]
    fn set_cube_covers_center_and_all_sides() {
        let layout = CubeLayout::new(3).unwrap();
        let mut frame = Frame::black(layout);
        frame.set_cube(1, GREEN);
        for (i, &px) in frame.as_slice().iter().enumerate() {
            if (6..12).contains(&i) {
                assert_eq!(px, GREEN);
            } else {
                assert_eq!(px, BLACK);
            }
        }
    }

    #[test]
    fn set_cube_is_idempotent() {
        let layout = CubeLayout::new(2).unwrap();
        let mut once = Frame::black(layout);
        once.set_cube(1, WHITE);
        let mut twice = Frame::black(layout);
        twice.set_cube(1, WHITE);
        twice.set_cube(1, WHITE);
        assert_eq!(once, twice);
    }

    #[test]
    fn spotlight_resets_the_background() {
        let layout = CubeLayout::new(2).unwrap();
        let mut frame = Frame::black(layout);
        frame.spotlight(0, BLACK, RED);
        frame.spotlight(1, BLACK, RED);
        assert!(frame.as_slice()[..6].iter().all(|&px| px == BLACK));
        assert!(frame.as_slice()[6..].iter().all(|&px| px == RED));
    }
}

//! Rotating-side animation.

use embedded_hal::delay::DelayNs;

use crate::color::{BLACK, SPIN_PALETTE};
use crate::driver::LedDriver;
use crate::frame::Frame;
use crate::layout::{CubeLayout, SIDES_PER_CUBE};

const DEFAULT_ITERATIONS: usize = 10;
const DEFAULT_ROTATIONS: usize = 4;
const DEFAULT_FRAME_DELAY_MS: u32 = 100;

/// Lights one side of every cube against black, advancing one side per frame.
///
/// Each cube's foreground comes from the spin palette, offset by the cube
/// index so neighbors rotate in different colors.
#[derive(Clone, Debug)]
pub struct Spin {
    iterations: usize,
    rotations: usize,
    frame_delay_ms: u32,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            rotations: DEFAULT_ROTATIONS,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }
}

impl Spin {
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_rotations(mut self, rotations: usize) -> Self {
        self.rotations = rotations;
        self
    }

    #[must_use]
    pub fn with_frame_delay_ms(mut self, frame_delay_ms: u32) -> Self {
        self.frame_delay_ms = frame_delay_ms;
        self
    }

    pub fn run<D, T>(&self, strip: &mut D, delay: &mut T, layout: CubeLayout)
    where
        D: LedDriver,
        T: DelayNs,
    {
        let mut frame = Frame::black(layout);

        for iteration in 0..self.iterations {
            for _rotation in 0..self.rotations {
                for side in 0..SIDES_PER_CUBE {
                    for cube in 0..layout.cube_count() {
                        let fg = SPIN_PALETTE.at(iteration + cube);
                        frame.set_cube(cube, BLACK);
                        frame.set_cube_side(cube, side, fg);
                    }
                    strip.write(frame.as_slice());
                    delay.delay_ms(self.frame_delay_ms);
                }
            }
        }
    }
}

//! Palette crossfade over every cube.

use embedded_hal::delay::DelayNs;

use crate::color::PALETTE;
use crate::driver::LedDriver;
use crate::frame::Frame;
use crate::layout::CubeLayout;
use crate::transition;

const DEFAULT_STEP_DELAY_MS: u32 = 10;
const DEFAULT_HOLD_MS: u32 = 2000;

/// Cycles every cube through the main palette with smooth fades.
///
/// Adjacent cubes hold adjacent palette entries. Each step fades every cube to
/// its next entry through the transition engine, then holds the settled state.
#[derive(Clone, Debug)]
pub struct FadeCycle {
    steps: usize,
    step_delay_ms: u32,
    hold_ms: u32,
}

impl Default for FadeCycle {
    fn default() -> Self {
        Self {
            // two full laps around the palette
            steps: PALETTE.len() * 2,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            hold_ms: DEFAULT_HOLD_MS,
        }
    }
}

impl FadeCycle {
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    #[must_use]
    pub fn with_step_delay_ms(mut self, step_delay_ms: u32) -> Self {
        self.step_delay_ms = step_delay_ms;
        self
    }

    #[must_use]
    pub fn with_hold_ms(mut self, hold_ms: u32) -> Self {
        self.hold_ms = hold_ms;
        self
    }

    pub fn run<D, T>(&self, strip: &mut D, delay: &mut T, layout: CubeLayout)
    where
        D: LedDriver,
        T: DelayNs,
    {
        let mut current = Frame::black(layout);
        let mut target = Frame::black(layout);

        for step in 0..self.steps {
            for cube in 0..layout.cube_count() {
                current.set_cube(cube, PALETTE.at(step + cube));
                target.set_cube(cube, PALETTE.at(step + cube + 1));
            }
            transition::fade(strip, delay, &mut current, &target, self.step_delay_ms);
            delay.delay_ms(self.hold_ms);
        }
    }
}

//! Single-cube walk animations: instant jumps and smooth slides.

use embedded_hal::delay::DelayNs;

use crate::color::{BLACK, PALETTE};
use crate::driver::LedDriver;
use crate::frame::Frame;
use crate::layout::CubeLayout;
use crate::transition;

const DEFAULT_ITERATIONS: usize = 10;
const DEFAULT_PASSES: usize = 1;
const DEFAULT_HOP_DELAY_MS: u32 = 400;
const DEFAULT_SLIDE_STEP_DELAY_MS: u32 = 5;

/// Walk order shared by [`Hop`] and [`Slide`]: up the full cube range, then
/// back down skipping both ends. The descending leg is empty for lamps of two
/// cubes or fewer; intent for such small lamps is unspecified, so the
/// degenerate walk is kept as-is.
fn walk(cube_count: usize) -> impl Iterator<Item = usize> {
    (0..cube_count).chain((1..cube_count.saturating_sub(1)).rev())
}

/// Lights exactly one cube at a time against black, jumping instantly from
/// cube to cube. The foreground color advances through the main palette once
/// per iteration.
#[derive(Clone, Debug)]
pub struct Hop {
    iterations: usize,
    passes: usize,
    frame_delay_ms: u32,
}

impl Default for Hop {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            passes: DEFAULT_PASSES,
            frame_delay_ms: DEFAULT_HOP_DELAY_MS,
        }
    }
}

impl Hop {
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
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
            let fg = PALETTE.at(iteration);
            for _pass in 0..self.passes {
                for cube in walk(layout.cube_count()) {
                    frame.spotlight(cube, BLACK, fg);
                    strip.write(frame.as_slice());
                    delay.delay_ms(self.frame_delay_ms);
                }
            }
        }
    }
}

/// Same walk as [`Hop`], but every jump fades smoothly through the transition
/// engine instead of switching instantly. The all-black starting frame is
/// rendered once before the walk begins.
#[derive(Clone, Debug)]
pub struct Slide {
    iterations: usize,
    passes: usize,
    step_delay_ms: u32,
}

impl Default for Slide {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            passes: DEFAULT_PASSES,
            step_delay_ms: DEFAULT_SLIDE_STEP_DELAY_MS,
        }
    }
}

impl Slide {
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    #[must_use]
    pub fn with_step_delay_ms(mut self, step_delay_ms: u32) -> Self {
        self.step_delay_ms = step_delay_ms;
        self
    }

    pub fn run<D, T>(&self, strip: &mut D, delay: &mut T, layout: CubeLayout)
    where
        D: LedDriver,
        T: DelayNs,
    {
        let mut current = Frame::black(layout);
        let mut target = Frame::black(layout);
        strip.write(current.as_slice());

        for iteration in 0..self.iterations {
            let fg = PALETTE.at(iteration);
            for _pass in 0..self.passes {
                for cube in walk(layout.cube_count()) {
                    target.spotlight(cube, BLACK, fg);
                    // fade leaves `current` equal to `target`
                    transition::fade(strip, delay, &mut current, &target, self.step_delay_ms);
                }
            }
        }
    }
}

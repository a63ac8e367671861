//! The factory showcase playlist.
//!
//! A program is just a slice of [`Animation`]s run back to back; the outer
//! driver decides when to start one and whether to repeat it.

use embedded_hal::delay::DelayNs;

use crate::animation::{
    Animation, FadeCycle, Hop, Rainbow, Slide, Spin, TheaterChase, TheaterChaseRainbow, Wipe,
};
use crate::color::{BLUE, GREEN, RED, Rgb};
use crate::driver::LedDriver;
use crate::layout::CubeLayout;

/// Half-brightness solid colors for the chase segment.
const CHASE_WHITE: Rgb = Rgb::new(127, 127, 127);
const CHASE_RED: Rgb = Rgb::new(127, 0, 0);
const CHASE_BLUE: Rgb = Rgb::new(0, 0, 127);

pub const SHOWCASE_LEN: usize = 12;

/// The full demonstration playlist: cube routines first, then the strip
/// classics in the order of the original show.
pub fn showcase() -> [Animation; SHOWCASE_LEN] {
    [
        Animation::Hop(Hop::default()),
        Animation::Slide(Slide::default()),
        Animation::Spin(Spin::default()),
        Animation::FadeCycle(FadeCycle::default()),
        Animation::Wipe(Wipe::new(RED)),
        Animation::Wipe(Wipe::new(GREEN)),
        Animation::Wipe(Wipe::new(BLUE)),
        Animation::TheaterChase(TheaterChase::new(CHASE_WHITE)),
        Animation::TheaterChase(TheaterChase::new(CHASE_RED)),
        Animation::TheaterChase(TheaterChase::new(CHASE_BLUE)),
        Animation::Rainbow(Rainbow::default()),
        Animation::TheaterChaseRainbow(TheaterChaseRainbow::default()),
    ]
}

/// Run a playlist of animations back to back.
pub fn run<D, T>(strip: &mut D, delay: &mut T, layout: CubeLayout, program: &[Animation])
where
    D: LedDriver,
    T: DelayNs,
{
    #[cfg(feature = "log")]
    log::debug!("program: {} routines queued", program.len());

    for animation in program {
        animation.run(strip, delay, layout);
    }
}

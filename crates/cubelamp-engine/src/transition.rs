//! Stepwise color-transition engine.
//!
//! Transitions move every channel of every pixel by exactly one unit per tick
//! toward its target, so a fade converges monotonically in at most 255 ticks
//! and no channel ever overshoots or oscillates.

use embedded_hal::delay::DelayNs;

use crate::color::Rgb;
use crate::driver::LedDriver;
use crate::frame::Frame;

/// Move one channel one unit toward `target`.
pub const fn step_channel(current: u8, target: u8) -> u8 {
    if current < target {
        current + 1
    } else if current > target {
        current - 1
    } else {
        current
    }
}

/// Move every channel of a color one unit toward `target`.
pub const fn step_color(current: Rgb, target: Rgb) -> Rgb {
    Rgb::new(
        step_channel(current.r, target.r),
        step_channel(current.g, target.g),
        step_channel(current.b, target.b),
    )
}

/// Advance every pixel of `current` one tick toward `target`.
///
/// Returns `true` when the frame already matched the target before this tick,
/// i.e. nothing moved. Both frames must have the same length.
pub fn step_frame(current: &mut Frame, target: &Frame) -> bool {
    debug_assert_eq!(current.len(), target.len());
    let mut settled = true;
    for (px, want) in current.as_mut_slice().iter_mut().zip(target.as_slice()) {
        if px != want {
            settled = false;
            *px = step_color(*px, *want);
        }
    }
    settled
}

/// Fade the strip from `current` to `target`, one channel unit per tick.
///
/// Every tick pushes the partially advanced buffer to the transport and sleeps
/// `step_delay_ms`. On return `current` equals `target`. When the frames
/// already match, the engine performs zero ticks: no render, no delay.
pub fn fade<D, T>(strip: &mut D, delay: &mut T, current: &mut Frame, target: &Frame, step_delay_ms: u32)
where
    D: LedDriver,
    T: DelayNs,
{
    while !step_frame(current, target) {
        strip.write(current.as_slice());
        delay.delay_ms(step_delay_ms);
    }
}

//! Animation catalogue.
//!
//! Every routine is a finite generator of frames: it is parameterized only by
//! its config struct, runs to completion once started, and terminates after a
//! statically determinable number of frames. Routines are mutually exclusive;
//! exactly one drives the strip at a time.

mod chase;
mod fade_cycle;
mod hop;
mod rainbow;
mod spin;
mod wipe;

pub use chase::{TheaterChase, TheaterChaseRainbow};
pub use fade_cycle::FadeCycle;
pub use hop::{Hop, Slide};
pub use rainbow::Rainbow;
pub use spin::Spin;
pub use wipe::Wipe;

use embedded_hal::delay::DelayNs;

use crate::color::Rgb;
use crate::driver::LedDriver;
use crate::layout::CubeLayout;

const ANIMATION_NAME_FADE_CYCLE: &str = "fade_cycle";
const ANIMATION_NAME_SPIN: &str = "spin";
const ANIMATION_NAME_HOP: &str = "hop";
const ANIMATION_NAME_SLIDE: &str = "slide";
const ANIMATION_NAME_WIPE: &str = "wipe";
const ANIMATION_NAME_THEATER_CHASE: &str = "theater_chase";
const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_THEATER_CHASE_RAINBOW: &str = "theater_chase_rainbow";

/// Animation slot - enum containing all programmed routines.
///
/// Using an enum instead of trait objects keeps the engine free of heap
/// allocations and gives every routine a known size at compile time.
#[derive(Clone, Debug)]
pub enum Animation {
    /// Smooth palette crossfade over every cube
    FadeCycle(FadeCycle),
    /// One lit side rotating around every cube
    Spin(Spin),
    /// A single lit cube jumping along the lamp
    Hop(Hop),
    /// A single lit cube sliding along the lamp with fades
    Slide(Slide),
    /// Solid color filled in one pixel at a time
    Wipe(Wipe),
    /// Theater-marquee chase in a solid color
    TheaterChase(TheaterChase),
    /// Flowing color wheel along the strip
    Rainbow(Rainbow),
    /// Theater-marquee chase with an advancing rainbow hue
    TheaterChaseRainbow(TheaterChaseRainbow),
}

impl Animation {
    /// Run the routine to completion against `strip`.
    pub fn run<D, T>(&self, strip: &mut D, delay: &mut T, layout: CubeLayout)
    where
        D: LedDriver,
        T: DelayNs,
    {
        #[cfg(feature = "log")]
        log::debug!("animation: running {}", self.name().as_str());

        match self {
            Self::FadeCycle(a) => a.run(strip, delay, layout),
            Self::Spin(a) => a.run(strip, delay, layout),
            Self::Hop(a) => a.run(strip, delay, layout),
            Self::Slide(a) => a.run(strip, delay, layout),
            Self::Wipe(a) => a.run(strip, delay),
            Self::TheaterChase(a) => a.run(strip, delay),
            Self::Rainbow(a) => a.run(strip, delay),
            Self::TheaterChaseRainbow(a) => a.run(strip, delay),
        }
    }

    pub fn name(&self) -> AnimationName {
        match self {
            Self::FadeCycle(_) => AnimationName::FadeCycle,
            Self::Spin(_) => AnimationName::Spin,
            Self::Hop(_) => AnimationName::Hop,
            Self::Slide(_) => AnimationName::Slide,
            Self::Wipe(_) => AnimationName::Wipe,
            Self::TheaterChase(_) => AnimationName::TheaterChase,
            Self::Rainbow(_) => AnimationName::Rainbow,
            Self::TheaterChaseRainbow(_) => AnimationName::TheaterChaseRainbow,
        }
    }
}

/// Known animation names that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationName {
    FadeCycle,
    Spin,
    Hop,
    Slide,
    Wipe,
    TheaterChase,
    Rainbow,
    TheaterChaseRainbow,
}

impl AnimationName {
    pub const ALL: [Self; 8] = [
        Self::FadeCycle,
        Self::Spin,
        Self::Hop,
        Self::Slide,
        Self::Wipe,
        Self::TheaterChase,
        Self::Rainbow,
        Self::TheaterChaseRainbow,
    ];

    /// Build the routine with default parameters. `color` is used by the
    /// solid-color routines and ignored by the rest.
    pub fn to_animation(self, color: Rgb) -> Animation {
        match self {
            Self::FadeCycle => Animation::FadeCycle(FadeCycle::default()),
            Self::Spin => Animation::Spin(Spin::default()),
            Self::Hop => Animation::Hop(Hop::default()),
            Self::Slide => Animation::Slide(Slide::default()),
            Self::Wipe => Animation::Wipe(Wipe::new(color)),
            Self::TheaterChase => Animation::TheaterChase(TheaterChase::new(color)),
            Self::Rainbow => Animation::Rainbow(Rainbow::default()),
            Self::TheaterChaseRainbow => {
                Animation::TheaterChaseRainbow(TheaterChaseRainbow::default())
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FadeCycle => ANIMATION_NAME_FADE_CYCLE,
            Self::Spin => ANIMATION_NAME_SPIN,
            Self::Hop => ANIMATION_NAME_HOP,
            Self::Slide => ANIMATION_NAME_SLIDE,
            Self::Wipe => ANIMATION_NAME_WIPE,
            Self::TheaterChase => ANIMATION_NAME_THEATER_CHASE,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::TheaterChaseRainbow => ANIMATION_NAME_THEATER_CHASE_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_FADE_CYCLE => Some(Self::FadeCycle),
            ANIMATION_NAME_SPIN => Some(Self::Spin),
            ANIMATION_NAME_HOP => Some(Self::Hop),
            ANIMATION_NAME_SLIDE => Some(Self::Slide),
            ANIMATION_NAME_WIPE => Some(Self::Wipe),
            ANIMATION_NAME_THEATER_CHASE => Some(Self::TheaterChase),
            ANIMATION_NAME_RAINBOW => Some(Self::Rainbow),
            ANIMATION_NAME_THEATER_CHASE_RAINBOW => Some(Self::TheaterChaseRainbow),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RED;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_round_trip_through_the_registry() {
        for name in AnimationName::ALL {
            assert_eq!(AnimationName::parse_from_str(name.as_str()), Some(name));
            assert_eq!(name.to_animation(RED).name(), name);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(AnimationName::parse_from_str("disco"), None);
        assert_eq!(AnimationName::parse_from_str(""), None);
    }
}

#![cfg_attr(not(test), no_std)]

//! Cube-lamp animation engine
//!
//! Drives a strip of addressable RGB pixels, grouped into logical cubes of
//! six faces, through a catalogue of bounded animations.
//!
//! Architecture layers:
//! - `driver` - hardware abstraction ([`LedDriver`] trait)
//! - `color` - RGB value type, palette tables, color-wheel helpers
//! - `layout` - cube/face to pixel-index addressing
//! - `frame` - in-memory pixel buffer and drawing operations
//! - `transition` - stepwise color-fade engine
//! - `animation` - programmed routines and the [`Animation`] slot enum
//! - `program` - the factory showcase playlist
//!
//! The engine is generic over [`LedDriver`] and the `embedded-hal` delay
//! provider, allowing different hardware backends and hardware-free testing.
//! Execution is strictly single-sequence: one animation owns the strip until
//! it runs to completion, and a frame is never staged before the previous
//! frame's flush returned and its delay elapsed.

pub mod animation;
pub mod color;
pub mod driver;
pub mod frame;
pub mod layout;
pub mod program;
pub mod transition;

// Driver exports
pub use driver::LedDriver;

// Color exports
pub use color::{PALETTE, Rgb, SPIN_PALETTE};

// Addressing exports
pub use layout::{CubeLayout, FACES_PER_CUBE, LayoutError, SIDE_OFFSETS, SIDES_PER_CUBE};

// Frame exports
pub use frame::{Frame, MAX_LED_COUNT};

// Transition exports
pub use transition::{fade, step_color, step_frame};

// Animation exports
pub use animation::{
    Animation, AnimationName, FadeCycle, Hop, Rainbow, Slide, Spin, TheaterChase,
    TheaterChaseRainbow, Wipe,
};

//! Host-side wiring for the cube-lamp animation engine: a terminal transport
//! that renders the strip as colored blocks, and a blocking OS-clock delay.

pub mod delay;
pub mod drivers;

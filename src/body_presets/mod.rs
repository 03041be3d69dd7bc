//! This module contains presets for celestial bodies.
//!
//! The tables use the units astronomers publish them in: distances in
//! astronomical units (or kilometres for moons), angles in degrees and
//! periods in days. Each preset takes a scale factor that converts its
//! distance unit into your scene units, and the degrees are converted to
//! radians once, on construction.
//!
//! Mean motion comes out in radians per day. Pick the
//! [`speed_multiplier`][crate::System::speed_multiplier] accordingly: with
//! elapsed time in seconds, a multiplier of `1.0` shows one day of orbital
//! motion per second.
//!
//! The elements are mean values at the J2000 epoch (or a recent osculating
//! epoch for small bodies). They are good enough to look right, not to
//! navigate by.

mod moons;
mod planets;
mod small_bodies;
mod stars;

pub use moons::*;
pub use planets::*;
pub use small_bodies::*;
pub use stars::*;

//! This module contains presets for stars.
//!
//! "A star is a luminous spheroid of plasma held together by self-gravity."
//!
//! \- [Wikipedia](https://en.wikipedia.org/wiki/Star)

use crate::Body;

/// Returns the Sun.
///
/// The Sun sits still at the centre of the system, so it has no orbit.
pub fn the_sun() -> Body {
    Body::new("The Sun", 6.9634e5, None)
}

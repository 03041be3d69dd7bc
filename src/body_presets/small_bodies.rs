//! This module contains presets for small Solar System bodies: near-Earth
//! objects and comets.

use crate::{Body, OrbitalElements};

/// Returns 99942 Apophis, a near-Earth asteroid.
///
/// `au`: How many scene units one astronomical unit is.
pub fn apophis(au: f64) -> Body {
    let orbit = OrbitalElements::from_degrees(
        0.9224 * au,
        0.1914,
        3.3393,
        126.60,
        203.96,
        142.20,
        323.6,
    );

    Body::new("99942 Apophis", 0.17, Some(orbit))
}

/// Returns 1P/Halley, the best known periodic comet.
///
/// Its eccentricity of about 0.967 is above
/// [`MAX_FAST_SOLVE_ECCENTRICITY`][crate::MAX_FAST_SOLVE_ECCENTRICITY], so
/// animate it with [`advance_precise`][crate::advance_precise]. A
/// [`System`][crate::System] does that on its own.
///
/// `au`: How many scene units one astronomical unit is.
pub fn halleys_comet(au: f64) -> Body {
    let orbit = OrbitalElements::from_degrees(
        17.834 * au,
        0.96714,
        162.26,
        111.33,
        58.42,
        38.38,
        27509.1,
    );

    Body::new("1P/Halley", 5.5, Some(orbit))
}

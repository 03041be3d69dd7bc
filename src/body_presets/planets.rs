//! This module contains presets for the planets of the Solar System.
//!
//! "A planet is a large, rounded astronomical body that is generally required
//! to be in orbit around a star, stellar remnant, or brown dwarf, and is not
//! one itself."
//!
//! \- [Wikipedia](https://en.wikipedia.org/wiki/Planet)
//!
//! Elements from "Keplerian Elements for Approximate Positions of the Major
//! Planets" by E. M. Standish, JPL, valid for 1800 AD to 2050 AD.
//! The argument of periapsis and mean anomaly are derived from the published
//! longitude of perihelion and mean longitude.
//!
//! <https://ssd.jpl.nasa.gov/planets/approx_pos.html>

use crate::{Body, OrbitalElements};

/// Returns Mercury, the closest planet to the Sun.
///
/// `au`: How many scene units one astronomical unit is.
pub fn mercury(au: f64) -> Body {
    let orbit = OrbitalElements::from_degrees(
        0.38709927 * au,
        0.20563593,
        7.00497902,
        29.12703035,
        48.33076593,
        174.79252722,
        87.969,
    );

    Body::new("Mercury", 2.4397e3, Some(orbit))
}

/// Returns Venus, the second planet from the Sun.
///
/// `au`: How many scene units one astronomical unit is.
pub fn venus(au: f64) -> Body {
    let orbit = OrbitalElements::from_degrees(
        0.72333566 * au,
        0.00677672,
        3.39467605,
        54.92262463,
        76.67984255,
        50.37663232,
        224.701,
    );

    Body::new("Venus", 6.0518e3, Some(orbit))
}

/// Returns Earth, the third planet from the Sun.
///
/// `au`: How many scene units one astronomical unit is.
pub fn earth(au: f64) -> Body {
    let orbit = OrbitalElements::from_degrees(
        1.00000261 * au,
        0.01671123,
        -0.00001531,
        102.93768193,
        0.0,
        357.52688973,
        365.256,
    );

    Body::new("Earth", 6.371e3, Some(orbit))
}

/// Returns Mars, the fourth planet from the Sun.
///
/// `au`: How many scene units one astronomical unit is.
pub fn mars(au: f64) -> Body {
    let orbit = OrbitalElements::from_degrees(
        1.52371034 * au,
        0.09339410,
        1.84969142,
        286.49683150,
        49.55953891,
        19.39019754,
        686.980,
    );

    Body::new("Mars", 3.3895e3, Some(orbit))
}

/// Returns Jupiter, the fifth planet from the Sun.
///
/// `au`: How many scene units one astronomical unit is.
pub fn jupiter(au: f64) -> Body {
    let orbit = OrbitalElements::from_degrees(
        5.20288700 * au,
        0.04838624,
        1.30439695,
        274.25457074,
        100.47390909,
        19.66796068,
        4332.589,
    );

    Body::new("Jupiter", 6.9911e4, Some(orbit))
}

/// Returns Saturn, the sixth planet from the Sun.
///
/// `au`: How many scene units one astronomical unit is.
pub fn saturn(au: f64) -> Body {
    let orbit = OrbitalElements::from_degrees(
        9.53667594 * au,
        0.05386179,
        2.48599187,
        338.93645383,
        113.66242448,
        317.35536592,
        10759.22,
    );

    Body::new("Saturn", 5.8232e4, Some(orbit))
}

/// Returns Uranus, the seventh planet from the Sun.
///
/// `au`: How many scene units one astronomical unit is.
pub fn uranus(au: f64) -> Body {
    let orbit = OrbitalElements::from_degrees(
        19.18916464 * au,
        0.04725744,
        0.77263783,
        96.93735127,
        74.01692503,
        142.28382821,
        30685.4,
    );

    Body::new("Uranus", 2.5362e4, Some(orbit))
}

/// Returns Neptune, the eighth planet from the Sun.
///
/// `au`: How many scene units one astronomical unit is.
pub fn neptune(au: f64) -> Body {
    let orbit = OrbitalElements::from_degrees(
        30.06992276 * au,
        0.00859048,
        1.77004347,
        273.18053653,
        131.78422574,
        259.91520804,
        60189.0,
    );

    Body::new("Neptune", 2.4622e4, Some(orbit))
}

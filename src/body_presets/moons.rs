//! This module contains presets for natural satellites.
//!
//! Moon distances are tiny next to planetary ones, so moon presets take a
//! scale in scene units per kilometre rather than per AU. Exaggerating that
//! scale is the usual way to keep a moon visible outside its planet.

use crate::{Body, OrbitalElements};

/// Returns the Moon, Earth's only natural satellite.
///
/// `km`: How many scene units one kilometre is.
pub fn the_moon(km: f64) -> Body {
    let orbit = OrbitalElements::from_degrees(
        3.844e5 * km,
        0.0549,
        5.145,
        318.15,
        125.08,
        135.27,
        27.321661,
    );

    Body::new("The Moon", 1.7374e3, Some(orbit))
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Matrix3x2, OrbitTrait, OrbitalElements};

/// A minimal struct representing a body's Keplerian orbital elements.
///
/// This struct minimizes memory footprint by not caching the orientation
/// transform. Because of this, every position query recomputes it.
/// For anything animated every frame, you might consider using the
/// [`OrbitalElements`] struct instead.
///
/// All fields are public, so this is also the convenient form to build
/// elements field by field before validating them.
///
/// # Example
/// ```
/// use orrery_sim::{CompactOrbitalElements, OrbitTrait};
///
/// let compact = CompactOrbitalElements::new(
///     // Semi-major axis
///     1.0,
///
///     // Eccentricity
///     0.0,
///
///     // Inclination
///     0.0,
///
///     // Argument of periapsis
///     0.0,
///
///     // Longitude of ascending node
///     0.0,
///
///     // Mean anomaly at epoch
///     0.0,
///
///     // Mean motion
///     1.0,
/// );
///
/// assert!(compact.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompactOrbitalElements {
    /// The semi-major axis of the orbit, in scene units.
    ///
    /// In an elliptic orbit, the semi-major axis is the
    /// average of the apoapsis and periapsis.
    ///
    /// Learn more: <https://en.wikipedia.org/wiki/Semi-major_and_semi-minor_axes>
    pub semi_major_axis: f64,

    /// The eccentricity of the orbit.
    ///
    /// Only `[0, 1)` is supported: circles and ellipses.
    ///
    /// See more: <https://en.wikipedia.org/wiki/Orbital_eccentricity>
    pub eccentricity: f64,

    /// The inclination of the orbit, in radians.
    /// The inclination of an orbit is the angle between the plane of the
    /// orbit and the reference plane.
    ///
    /// In simple terms, it tells you how "tilted" the orbit is.
    pub inclination: f64,

    /// The argument of periapsis of the orbit, in radians.
    ///
    /// Wikipedia:
    /// The argument of periapsis is the angle from the body's
    /// ascending node to its periapsis, measured in the direction of
    /// motion.
    /// <https://en.wikipedia.org/wiki/Argument_of_periapsis>
    pub arg_pe: f64,

    /// The longitude of ascending node of the orbit, in radians.
    ///
    /// Wikipedia:
    /// The longitude of ascending node is the angle from a specified
    /// reference direction, called the origin of longitude, to the direction
    /// of the ascending node, as measured in a specified reference plane.
    /// <https://en.wikipedia.org/wiki/Longitude_of_the_ascending_node>
    pub long_asc_node: f64,

    /// The mean anomaly at orbit epoch, in radians.
    ///
    /// Wikipedia:
    /// The mean anomaly at epoch, `M_0`, is defined as the instantaneous mean
    /// anomaly at a given epoch, `t_0`.
    /// <https://en.wikipedia.org/wiki/Mean_anomaly#Mean_anomaly_at_epoch>
    pub mean_anomaly: f64,

    /// The mean motion of the orbit, in radians per unit time.
    ///
    /// <https://en.wikipedia.org/wiki/Mean_motion>
    pub mean_motion: f64,
}

impl CompactOrbitalElements {
    /// Creates a new set of compact orbital elements.
    ///
    /// Angles are in radians. No validation happens here; call
    /// [`OrbitTrait::validate`] if the values come from outside.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        arg_pe: f64,
        long_asc_node: f64,
        mean_anomaly: f64,
        mean_motion: f64,
    ) -> CompactOrbitalElements {
        CompactOrbitalElements {
            semi_major_axis,
            eccentricity,
            inclination,
            arg_pe,
            long_asc_node,
            mean_anomaly,
            mean_motion,
        }
    }
}

impl OrbitTrait for CompactOrbitalElements {
    fn get_transformation_matrix(&self) -> Matrix3x2 {
        Matrix3x2::from_angles(self.inclination, self.arg_pe, self.long_asc_node)
    }

    fn get_semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    fn get_eccentricity(&self) -> f64 {
        self.eccentricity
    }

    fn get_inclination(&self) -> f64 {
        self.inclination
    }

    fn get_arg_pe(&self) -> f64 {
        self.arg_pe
    }

    fn get_long_asc_node(&self) -> f64 {
        self.long_asc_node
    }

    fn get_mean_anomaly_at_epoch(&self) -> f64 {
        self.mean_anomaly
    }

    fn get_mean_motion(&self) -> f64 {
        self.mean_motion
    }
}

impl Default for CompactOrbitalElements {
    /// Creates a unit orbit.
    ///
    /// The unit orbit is a perfect circle of radius 1 and no "tilt",
    /// completing one revolution every 2π time units.
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0)
    }
}

impl From<OrbitalElements> for CompactOrbitalElements {
    fn from(cached: OrbitalElements) -> Self {
        Self {
            semi_major_axis: cached.get_semi_major_axis(),
            eccentricity: cached.get_eccentricity(),
            inclination: cached.get_inclination(),
            arg_pe: cached.get_arg_pe(),
            long_asc_node: cached.get_long_asc_node(),
            mean_anomaly: cached.get_mean_anomaly_at_epoch(),
            mean_motion: cached.get_mean_motion(),
        }
    }
}

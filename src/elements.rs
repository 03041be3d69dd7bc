#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CompactOrbitalElements, Matrix3x2, OrbitTrait};

use core::f64::consts::TAU;

/// A struct representing a body's Keplerian orbital elements, with the
/// orientation transform cached.
///
/// The elements never change after construction, so the transform that
/// tilts the orbital plane into the scene frame is computed once here
/// instead of on every position query.
/// If memory efficiency is your goal, you may consider using the
/// [`CompactOrbitalElements`] struct instead.
///
/// # Example
/// ```
/// use orrery_sim::{OrbitTrait, OrbitalElements};
///
/// let elements = OrbitalElements::new(
///     // Semi-major axis, in scene units
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
///     // Mean motion, in radians per unit time
///     1.0,
/// );
///
/// let elements = OrbitalElements::from_degrees(
///     // Angles in degrees, converted once here
///
///     // Semi-major axis
///     1.0,
///
///     // Eccentricity
///     0.0167,
///
///     // Inclination
///     0.0,
///
///     // Argument of periapsis
///     102.94,
///
///     // Longitude of ascending node
///     0.0,
///
///     // Mean anomaly at epoch
///     357.53,
///
///     // Orbital period
///     365.256,
/// );
/// ```
/// See [OrbitalElements::new] and [OrbitalElements::from_degrees] for more information.
///
/// With the `serde` feature, these serialize in the same shape as
/// [`CompactOrbitalElements`]. The cached transform is never stored and is
/// rebuilt on load.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "CompactOrbitalElements", into = "CompactOrbitalElements")
)]
pub struct OrbitalElements {
    /// The semi-major axis of the orbit, in scene units.
    semi_major_axis: f64,

    /// The eccentricity of the orbit, in `[0, 1)`.
    eccentricity: f64,

    /// The inclination of the orbit, in radians.
    inclination: f64,

    /// The argument of periapsis of the orbit, in radians.
    arg_pe: f64,

    /// The longitude of ascending node of the orbit, in radians.
    long_asc_node: f64,

    /// The mean anomaly at orbit epoch, in radians.
    mean_anomaly: f64,

    /// Radians per unit time.
    mean_motion: f64,

    cache: OrbitCachedCalculations,
}

// -------- MEMO --------
// When updating this struct, please review the following methods:
// `OrbitalElements::get_cached_calculations()`
#[derive(Clone, Debug, PartialEq)]
struct OrbitCachedCalculations {
    /// The transformation matrix to tilt the 2D planar orbit into 3D space.
    transformation_matrix: Matrix3x2,
}

// Initialization and cache management
impl OrbitalElements {
    /// Creates a new set of orbital elements with the given parameters.
    ///
    /// Angles are in radians. If your table of elements is in degrees,
    /// use [`OrbitalElements::from_degrees`] instead.
    ///
    /// # Parameters
    /// - `semi_major_axis`: The semi-major axis of the orbit, in scene units.
    /// - `eccentricity`: The eccentricity of the orbit, in `[0, 1)`.
    /// - `inclination`: The inclination of the orbit, in radians.
    /// - `arg_pe`: The argument of periapsis of the orbit, in radians.
    /// - `long_asc_node`: The longitude of ascending node of the orbit, in radians.
    /// - `mean_anomaly`: The mean anomaly of the orbit at epoch, in radians.
    /// - `mean_motion`: The mean motion, in radians per unit time.
    ///
    /// # Example
    ///
    /// ```
    /// use orrery_sim::{OrbitTrait, OrbitalElements};
    ///
    /// # fn main() {
    /// let semi_major_axis = 2.8;
    /// let eccentricity = 0.2;
    /// let inclination = 1.0;
    /// let argument_of_periapsis = 0.7;
    /// let longitude_of_ascending_node = 4.5;
    /// let mean_anomaly_at_epoch = 2.9;
    /// let mean_motion = 0.01;
    ///
    /// let elements = OrbitalElements::new(
    ///     semi_major_axis,
    ///     eccentricity,
    ///     inclination,
    ///     argument_of_periapsis,
    ///     longitude_of_ascending_node,
    ///     mean_anomaly_at_epoch,
    ///     mean_motion,
    /// );
    ///
    /// assert_eq!(elements.get_semi_major_axis(), semi_major_axis);
    /// assert_eq!(elements.get_eccentricity(), eccentricity);
    /// assert_eq!(elements.get_inclination(), inclination);
    /// assert_eq!(elements.get_arg_pe(), argument_of_periapsis);
    /// assert_eq!(elements.get_long_asc_node(), longitude_of_ascending_node);
    /// assert_eq!(elements.get_mean_anomaly_at_epoch(), mean_anomaly_at_epoch);
    /// assert_eq!(elements.get_mean_motion(), mean_motion);
    /// # }
    /// ```
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        arg_pe: f64,
        long_asc_node: f64,
        mean_anomaly: f64,
        mean_motion: f64,
    ) -> OrbitalElements {
        let cache = Self::get_cached_calculations(inclination, arg_pe, long_asc_node);
        OrbitalElements {
            semi_major_axis,
            eccentricity,
            inclination,
            arg_pe,
            long_asc_node,
            mean_anomaly,
            mean_motion,
            cache,
        }
    }

    /// Creates a new set of orbital elements, deriving the mean motion
    /// from the orbital period.
    ///
    /// Angles are in radians. The mean motion becomes `2π / period`, in
    /// radians per whatever time unit the period is given in.
    pub fn with_period(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        arg_pe: f64,
        long_asc_node: f64,
        mean_anomaly: f64,
        period: f64,
    ) -> OrbitalElements {
        Self::new(
            semi_major_axis,
            eccentricity,
            inclination,
            arg_pe,
            long_asc_node,
            mean_anomaly,
            TAU / period,
        )
    }

    /// Creates a new set of orbital elements, deriving the mean motion
    /// from the gravitational parameter of the parent body.
    ///
    /// The mean motion becomes `sqrt(mu / a^3)`.
    ///
    /// # Mu
    /// Mu is also known as the gravitational parameter, and
    /// is equal to `GM`, where `G` is the gravitational constant,
    /// and `M` is the mass of the parent body.
    /// It must be expressed in the same length unit as the semi-major axis.
    ///
    /// Learn more about the gravitational parameter:
    /// <https://en.wikipedia.org/wiki/Standard_gravitational_parameter>
    ///
    /// # Example
    /// ```
    /// use orrery_sim::{OrbitTrait, OrbitalElements};
    ///
    /// let elements = OrbitalElements::with_gravitational_parameter(
    ///     4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 64.0,
    /// );
    ///
    /// assert_eq!(elements.get_mean_motion(), 1.0);
    /// ```
    pub fn with_gravitational_parameter(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        arg_pe: f64,
        long_asc_node: f64,
        mean_anomaly: f64,
        mu: f64,
    ) -> OrbitalElements {
        let mean_motion = (mu / semi_major_axis.powi(3)).sqrt();
        Self::new(
            semi_major_axis,
            eccentricity,
            inclination,
            arg_pe,
            long_asc_node,
            mean_anomaly,
            mean_motion,
        )
    }

    /// Creates a new set of orbital elements from a table entry in degrees.
    ///
    /// This is the one place degrees are converted to radians. The mean
    /// motion is derived from the period as in [`OrbitalElements::with_period`].
    ///
    /// # Parameters
    /// - `semi_major_axis`: The semi-major axis, already scaled to scene units.
    /// - `eccentricity`: The eccentricity of the orbit, in `[0, 1)`.
    /// - `inclination_deg`: The inclination, in degrees.
    /// - `arg_pe_deg`: The argument of periapsis, in degrees.
    /// - `long_asc_node_deg`: The longitude of ascending node, in degrees.
    /// - `mean_anomaly_deg`: The mean anomaly at epoch, in degrees.
    /// - `period`: The orbital period, in the caller's time unit.
    ///
    /// # Example
    /// ```
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// use orrery_sim::{OrbitTrait, OrbitalElements};
    ///
    /// let elements = OrbitalElements::from_degrees(1.0, 0.0, 90.0, 0.0, 0.0, 0.0, 1.0);
    ///
    /// assert!((elements.get_inclination() - FRAC_PI_2).abs() < 1e-15);
    /// ```
    pub fn from_degrees(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination_deg: f64,
        arg_pe_deg: f64,
        long_asc_node_deg: f64,
        mean_anomaly_deg: f64,
        period: f64,
    ) -> OrbitalElements {
        Self::with_period(
            semi_major_axis,
            eccentricity,
            inclination_deg.to_radians(),
            arg_pe_deg.to_radians(),
            long_asc_node_deg.to_radians(),
            mean_anomaly_deg.to_radians(),
            period,
        )
    }

    /// Returns a copy of these elements with the semi-major axis multiplied
    /// by `scale`.
    ///
    /// Useful for converting a table in AU or kilometres into scene units.
    #[must_use]
    pub fn scaled(&self, scale: f64) -> OrbitalElements {
        OrbitalElements {
            semi_major_axis: self.semi_major_axis * scale,
            ..self.clone()
        }
    }

    fn get_cached_calculations(
        inclination: f64,
        arg_pe: f64,
        long_asc_node: f64,
    ) -> OrbitCachedCalculations {
        OrbitCachedCalculations {
            transformation_matrix: Matrix3x2::from_angles(inclination, arg_pe, long_asc_node),
        }
    }
}

impl OrbitTrait for OrbitalElements {
    #[inline]
    fn get_transformation_matrix(&self) -> Matrix3x2 {
        self.cache.transformation_matrix
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

impl Default for OrbitalElements {
    /// Creates a unit orbit.
    ///
    /// The unit orbit is a perfect circle of radius 1 and no "tilt",
    /// completing one revolution every 2π time units.
    fn default() -> OrbitalElements {
        Self::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0)
    }
}

impl From<CompactOrbitalElements> for OrbitalElements {
    fn from(compact: CompactOrbitalElements) -> Self {
        Self::new(
            compact.semi_major_axis,
            compact.eccentricity,
            compact.inclination,
            compact.arg_pe,
            compact.long_asc_node,
            compact.mean_anomaly,
            compact.mean_motion,
        )
    }
}

//! # Orrery Simulation Core
//! This library crate contains the orbital mechanics behind an interactive
//! solar system viewer: planets, moons and near-Earth objects moving along
//! Keplerian orbits, orbit paths drawn as closed curves, and city markers
//! placed on a rotating globe.
//!
//! Nothing in here renders anything. A render loop (yours) asks this crate
//! where things are, and then puts its meshes, sprites and lines there.
//!
//! ## Getting started
//! This crate provides three small cores and a simulation layer on top:
//! - The **orbit solver** ([`advance`]): propagates an [`OrbitState`] by an
//!   elapsed time step and returns the body's new position. Call it once per
//!   frame per body.
//! - The **orbit sampler** ([`sample`]): turns orbital elements into a closed
//!   polyline for drawing the orbit path. Call it once at setup.
//! - The **geo projector** ([`geo::project`]): turns a latitude and longitude
//!   into a point on a sphere's surface.
//! - The [`System`]: owns a hierarchy of [`Body`]s (moons around planets
//!   around a star) and their orbit states, and advances all of them at once.
//!
//! Orbital elements come in two flavors, both implementing [`OrbitTrait`]:
//! - [`OrbitalElements`]: caches the orientation transform. Use this for
//!   anything that is animated every frame.
//! - [`CompactOrbitalElements`]: stores only the raw elements, and recomputes
//!   the transform on every call.
//!
//! ## Frame of reference
//! Positions are [`glam::DVec3`]s in a Y-up scene frame. An orbit with zero
//! inclination lies flat in the XZ plane, with its periapsis on the +X axis
//! when the argument of periapsis and longitude of ascending node are zero.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//!
//! use orrery_sim::{advance, OrbitState, OrbitalElements};
//!
//! # fn main() {
//! let elements = OrbitalElements::new(1000.0, 0.2, 0.0, 0.0, 0.0, 0.0, 1.0);
//! let mut state = OrbitState::new(&elements);
//!
//! let position = advance(&mut state, &elements, 0.0, 1.0);
//! assert_eq!(position, DVec3::new(800.0, 0.0, 0.0));
//! # }
//! ```

#![warn(missing_docs)]

mod body;
pub mod body_presets;
mod compact_elements;
#[cfg(feature = "serde")]
pub mod config;
mod elements;
pub mod geo;
pub mod sampler;
pub mod solver;
mod state;
mod system;

use core::f64::consts::TAU;

pub use body::Body;
pub use compact_elements::CompactOrbitalElements;
pub use elements::OrbitalElements;
use glam::{DVec2, DVec3};
pub use sampler::{sample, sample_iter, OrbitPath};
pub use solver::{advance, advance_precise};
pub use state::OrbitState;
pub use system::{BodyAddError, BodyRelation, Id, System};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of Newton-Raphson iterations used by the fast Kepler solver.
///
/// There is no convergence check: the solver always runs exactly this many
/// iterations. Ten iterations seeded at the mean anomaly are plenty for
/// eccentricities below [`MAX_FAST_SOLVE_ECCENTRICITY`].
pub const KEPLER_ITERATIONS: u32 = 10;

/// The highest eccentricity the fast, fixed-iteration Kepler solver is
/// meant for.
///
/// Above this, use [`OrbitTrait::try_get_eccentric_anomaly_at_mean_anomaly`]
/// or [`advance_precise`], which iterate until a tolerance is met.
pub const MAX_FAST_SOLVE_ECCENTRICITY: f64 = 0.95;

/// The eccentricity above which the tolerance-checked Kepler solver switches
/// from seeding at the mean anomaly to Danby's seed.
const DANBY_SEED_ECCENTRICITY: f64 = 0.8;

/// A constant used to get the initial seed for the eccentric anomaly in
/// highly eccentric orbits, where seeding at the mean anomaly can make
/// Newton-Raphson bounce around for a long time.
///
/// E_0 = M + k e sign(sin M)
///
/// Source:
/// "The solution of Kepler's equation, I" by J. M. A. Danby and T. M. Burkardt
///
/// <https://doi.org/10.1007/BF01686811>
const DANBY_SEED_FACTOR: f64 = 0.85;

/// A struct representing a 3x2 matrix.
///
/// This struct is used to store the transformation matrix
/// for transforming a 2D vector in the orbital plane into the 3D scene frame.
///
/// Namely, it is used in the [`transform_pqw_vector`][OrbitTrait::transform_pqw_vector]
/// method to tilt a 2D position into 3D, using the orbital parameters.
///
/// Each element is named `eXY`, where `X` is the row and `Y` is the column.
/// Rows are the scene X, Y (up) and Z axes.
///
/// # Example
/// ```
/// use glam::{DVec2, DVec3};
///
/// use orrery_sim::Matrix3x2;
///
/// let matrix = Matrix3x2 {
///    e11: 1.0, e12: 0.0,
///    e21: 0.0, e22: 0.0,
///    e31: 0.0, e32: 1.0,
/// };
///
/// let vec = DVec2::new(1.0, 2.0);
///
/// let result = matrix.dot_vec(vec);
///
/// assert_eq!(result, DVec3::new(1.0, 0.0, 2.0));
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix3x2 {
    // Element XY
    pub e11: f64,
    pub e12: f64,
    pub e21: f64,
    pub e22: f64,
    pub e31: f64,
    pub e32: f64,
}

impl Matrix3x2 {
    /// Builds the orientation transform for the given angles, in radians.
    ///
    /// The in-plane position `(x, y)` is first laid flat as `(x, 0, y)`.
    /// It is then rotated, in this order:
    /// 1. by the argument of periapsis about the orbit normal (scene Y),
    /// 2. by the inclination about the X axis,
    /// 3. by the longitude of ascending node about the scene Y axis.
    ///
    /// The three rotations are folded into a single matrix.
    ///
    /// # Example
    /// ```
    /// use orrery_sim::Matrix3x2;
    ///
    /// let matrix = Matrix3x2::from_angles(0.0, 0.0, 0.0);
    ///
    /// assert_eq!(matrix, Matrix3x2 {
    ///     e11: 1.0, e12: 0.0,
    ///     e21: 0.0, e22: 0.0,
    ///     e31: 0.0, e32: 1.0,
    /// });
    /// ```
    pub fn from_angles(inclination: f64, arg_pe: f64, long_asc_node: f64) -> Matrix3x2 {
        let (sin_inc, cos_inc) = inclination.sin_cos();
        let (sin_arg_pe, cos_arg_pe) = arg_pe.sin_cos();
        let (sin_lan, cos_lan) = long_asc_node.sin_cos();

        Matrix3x2 {
            e11: cos_arg_pe * cos_lan - sin_arg_pe * cos_inc * sin_lan,
            e12: -(sin_arg_pe * cos_lan + cos_arg_pe * cos_inc * sin_lan),

            e21: sin_arg_pe * sin_inc,
            e22: cos_arg_pe * sin_inc,

            e31: cos_arg_pe * sin_lan + sin_arg_pe * cos_inc * cos_lan,
            e32: cos_arg_pe * cos_inc * cos_lan - sin_arg_pe * sin_lan,
        }
    }

    /// Computes a dot product between this matrix and a 2D vector.
    ///
    /// # Example
    /// ```
    /// use glam::{DVec2, DVec3};
    ///
    /// use orrery_sim::Matrix3x2;
    ///
    /// let matrix = Matrix3x2 {
    ///     e11: 1.0, e12: 0.0,
    ///     e21: 0.0, e22: 1.0,
    ///     e31: 1.0, e32: 1.0,
    /// };
    ///
    /// let vec = DVec2::new(1.0, 2.0);
    ///
    /// let result = matrix.dot_vec(vec);
    ///
    /// assert_eq!(result, DVec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn dot_vec(&self, vec: DVec2) -> DVec3 {
        DVec3::new(
            vec.x * self.e11 + vec.y * self.e12,
            vec.x * self.e21 + vec.y * self.e22,
            vec.x * self.e31 + vec.y * self.e32,
        )
    }
}

/// Wraps an angle into the range `[0, 2π)`.
///
/// Negative angles wrap around from the top, so `-0.5` becomes `2π - 0.5`.
/// Applying this twice gives the same result as applying it once.
///
/// # Example
/// ```
/// use std::f64::consts::{PI, TAU};
///
/// use orrery_sim::wrap_two_pi;
///
/// assert!((wrap_two_pi(TAU + 1.0) - 1.0).abs() < 1e-12);
/// assert_eq!(wrap_two_pi(-PI), PI);
/// assert_eq!(wrap_two_pi(TAU), 0.0);
/// ```
#[inline]
pub fn wrap_two_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);

    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// A trait that defines the math shared by every orbital element type.
///
/// This trait is implemented by both [`OrbitalElements`] and
/// [`CompactOrbitalElements`]. The orbit solver and the orbit sampler are
/// written against it, so they work with either.
///
/// # Examples
/// ```
/// use orrery_sim::{CompactOrbitalElements, OrbitTrait, OrbitalElements};
///
/// fn accepts_orbit(orbit: &impl OrbitTrait) {
///     println!("That's an orbit!");
/// }
///
/// fn main() {
///     let elements = OrbitalElements::default();
///     accepts_orbit(&elements);
///
///     let compact = CompactOrbitalElements::default();
///     accepts_orbit(&compact);
/// }
/// ```
pub trait OrbitTrait {
    /// Gets the semi-major axis of the orbit, in scene units.
    fn get_semi_major_axis(&self) -> f64;

    /// Gets the eccentricity of the orbit.
    ///
    /// An eccentricity of 0 means the orbit is a perfect circle.
    /// Between 0 and 1, the orbit is elliptic, and has an oval shape.
    /// Open trajectories (1 and up) are not supported by this crate.
    fn get_eccentricity(&self) -> f64;

    /// Gets the inclination of the orbit, in radians.
    fn get_inclination(&self) -> f64;

    /// Gets the argument of periapsis of the orbit, in radians.
    fn get_arg_pe(&self) -> f64;

    /// Gets the longitude of ascending node of the orbit, in radians.
    fn get_long_asc_node(&self) -> f64;

    /// Gets the mean anomaly at time zero, in radians.
    fn get_mean_anomaly_at_epoch(&self) -> f64;

    /// Gets the mean motion of the orbit, in radians per unit time.
    fn get_mean_motion(&self) -> f64;

    /// Gets the matrix that tilts the flat orbital plane into the scene frame.
    ///
    /// # Performance
    /// [`OrbitalElements`] returns a cached copy. [`CompactOrbitalElements`]
    /// computes it from scratch using six trigonometric operations.
    fn get_transformation_matrix(&self) -> Matrix3x2;

    /// Gets the periapsis distance, `a(1 - e)`.
    fn get_periapsis(&self) -> f64 {
        self.get_semi_major_axis() * (1.0 - self.get_eccentricity())
    }

    /// Gets the apoapsis distance, `a(1 + e)`.
    fn get_apoapsis(&self) -> f64 {
        self.get_semi_major_axis() * (1.0 + self.get_eccentricity())
    }

    /// Gets the semi-latus rectum, `a(1 - e²)`.
    ///
    /// Learn more: <https://en.wikipedia.org/wiki/Ellipse#Semi-latus_rectum>
    fn get_semi_latus_rectum(&self) -> f64 {
        let eccentricity = self.get_eccentricity();
        self.get_semi_major_axis() * (1.0 - eccentricity * eccentricity)
    }

    /// Gets the time it takes to complete one orbit, in the same time unit
    /// as the mean motion.
    ///
    /// # Example
    /// ```
    /// use std::f64::consts::TAU;
    ///
    /// use orrery_sim::{OrbitTrait, OrbitalElements};
    ///
    /// let elements = OrbitalElements::with_period(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 365.25);
    /// assert!((elements.get_orbital_period() - 365.25).abs() < 1e-9);
    /// assert!((elements.get_mean_motion() - TAU / 365.25).abs() < 1e-15);
    /// ```
    fn get_orbital_period(&self) -> f64 {
        TAU / self.get_mean_motion()
    }

    /// Gets the mean anomaly at a given time, wrapped into `[0, 2π)`.
    fn get_mean_anomaly_at_time(&self, t: f64) -> f64 {
        wrap_two_pi(self.get_mean_anomaly_at_epoch() + self.get_mean_motion() * t)
    }

    /// Gets the eccentric anomaly at a given mean anomaly, by solving
    /// Kepler's equation `M = E - e sin E`.
    ///
    /// This runs Newton-Raphson seeded at `E = M` for exactly
    /// [`KEPLER_ITERATIONS`] iterations. There is no convergence check, which
    /// keeps the cost per call fixed. For `e < 0.95` the result is accurate to
    /// well below `1e-6`; above that, use
    /// [`try_get_eccentric_anomaly_at_mean_anomaly`][OrbitTrait::try_get_eccentric_anomaly_at_mean_anomaly].
    ///
    /// The eccentric anomaly is an angular parameter that defines the position
    /// of a body that is moving along an elliptic Kepler orbit.
    ///
    /// \- [Wikipedia](https://en.wikipedia.org/wiki/Eccentric_anomaly)
    fn get_eccentric_anomaly_at_mean_anomaly(&self, mean_anomaly: f64) -> f64 {
        let eccentricity = self.get_eccentricity();
        let mut eccentric_anomaly = mean_anomaly;

        for _ in 0..KEPLER_ITERATIONS {
            eccentric_anomaly -= keplers_equation(mean_anomaly, eccentric_anomaly, eccentricity)
                / keplers_equation_derivative(eccentric_anomaly, eccentricity);
        }

        eccentric_anomaly
    }

    /// Gets the eccentric anomaly at a given mean anomaly, iterating until
    /// the residual of Kepler's equation drops below `tolerance`.
    ///
    /// Unlike the fixed-iteration solver, this one seeds highly eccentric
    /// orbits (`e >= 0.8`) away from the mean anomaly, so it converges in a
    /// handful of steps even for eccentricities very close to 1.
    ///
    /// # Errors
    /// Returns [`KeplerSolveError::NoConvergence`] if the residual is still
    /// above `tolerance` after `max_iterations` Newton-Raphson steps, or if
    /// the iteration produced a non-finite value.
    ///
    /// # Example
    /// ```
    /// use orrery_sim::{OrbitTrait, OrbitalElements};
    ///
    /// let elements = OrbitalElements::new(1.0, 0.98, 0.0, 0.0, 0.0, 0.0, 1.0);
    ///
    /// let ecc_anom = elements
    ///     .try_get_eccentric_anomaly_at_mean_anomaly(0.1, 1e-12, 100)
    ///     .unwrap();
    ///
    /// let residual = ecc_anom - 0.98 * ecc_anom.sin() - 0.1;
    /// assert!(residual.abs() < 1e-12);
    /// ```
    fn try_get_eccentric_anomaly_at_mean_anomaly(
        &self,
        mean_anomaly: f64,
        tolerance: f64,
        max_iterations: u32,
    ) -> Result<f64, KeplerSolveError> {
        let eccentricity = self.get_eccentricity();
        let mut eccentric_anomaly = if eccentricity < DANBY_SEED_ECCENTRICITY {
            mean_anomaly
        } else {
            mean_anomaly + DANBY_SEED_FACTOR * eccentricity * 1f64.copysign(mean_anomaly.sin())
        };
        let mut residual = keplers_equation(mean_anomaly, eccentric_anomaly, eccentricity);
        let mut iterations = 0;

        while iterations < max_iterations {
            if residual.abs() < tolerance {
                return Ok(eccentric_anomaly);
            }

            eccentric_anomaly -=
                residual / keplers_equation_derivative(eccentric_anomaly, eccentricity);
            iterations += 1;

            if !eccentric_anomaly.is_finite() {
                break;
            }

            residual = keplers_equation(mean_anomaly, eccentric_anomaly, eccentricity);
        }

        if residual.abs() < tolerance {
            return Ok(eccentric_anomaly);
        }

        Err(KeplerSolveError::NoConvergence {
            mean_anomaly,
            eccentricity,
            residual,
            iterations,
        })
    }

    /// Gets the true anomaly at a given eccentric anomaly.
    ///
    /// Uses the half-angle form
    /// `ν = 2 atan2(√(1+e) sin(E/2), √(1-e) cos(E/2))`,
    /// which stays well-defined at apoapsis where `tan(E/2)` blows up.
    ///
    /// The true anomaly is the angle between the direction of periapsis
    /// and the current position of the body, as seen from the main focus
    /// of the ellipse.
    ///
    /// \- [Wikipedia](https://en.wikipedia.org/wiki/True_anomaly)
    fn get_true_anomaly_at_eccentric_anomaly(&self, eccentric_anomaly: f64) -> f64 {
        let eccentricity = self.get_eccentricity();
        let (sin_half, cos_half) = (eccentric_anomaly * 0.5).sin_cos();

        2.0 * ((1.0 + eccentricity).sqrt() * sin_half)
            .atan2((1.0 - eccentricity).sqrt() * cos_half)
    }

    /// Gets the true anomaly at a given mean anomaly.
    ///
    /// # Performance
    /// This goes through the Kepler solver, so it costs
    /// [`KEPLER_ITERATIONS`] Newton-Raphson steps.
    fn get_true_anomaly_at_mean_anomaly(&self, mean_anomaly: f64) -> f64 {
        self.get_true_anomaly_at_eccentric_anomaly(
            self.get_eccentric_anomaly_at_mean_anomaly(mean_anomaly),
        )
    }

    /// Gets the distance from the focus at a given eccentric anomaly,
    /// `a(1 - e cos E)`.
    fn get_altitude_at_eccentric_anomaly(&self, eccentric_anomaly: f64) -> f64 {
        self.get_semi_major_axis() * (1.0 - self.get_eccentricity() * eccentric_anomaly.cos())
    }

    /// Gets the distance from the focus at a given true anomaly, using the
    /// polar form of the conic, `a(1 - e²) / (1 + e cos ν)`.
    ///
    /// # Example
    /// ```
    /// use std::f64::consts::PI;
    ///
    /// use orrery_sim::{OrbitTrait, OrbitalElements};
    ///
    /// let elements = OrbitalElements::new(10.0, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0);
    ///
    /// assert!((elements.get_altitude_at_true_anomaly(0.0) - 5.0).abs() < 1e-12);
    /// assert!((elements.get_altitude_at_true_anomaly(PI) - 15.0).abs() < 1e-12);
    /// ```
    fn get_altitude_at_true_anomaly(&self, true_anomaly: f64) -> f64 {
        self.get_semi_latus_rectum() / (1.0 + self.get_eccentricity() * true_anomaly.cos())
    }

    /// Gets the 2D position in the orbital plane at a given true anomaly.
    ///
    /// The X axis points at periapsis.
    fn get_pqw_position_at_true_anomaly(&self, true_anomaly: f64) -> DVec2 {
        let altitude = self.get_altitude_at_true_anomaly(true_anomaly);
        let (sin, cos) = true_anomaly.sin_cos();
        DVec2::new(altitude * cos, altitude * sin)
    }

    /// Gets the 3D position at a given true anomaly in the orbit.
    ///
    /// # Example
    /// ```
    /// use glam::DVec3;
    ///
    /// use orrery_sim::{OrbitTrait, OrbitalElements};
    ///
    /// let elements = OrbitalElements::new(100.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);
    ///
    /// let pos = elements.get_position_at_true_anomaly(0.0);
    ///
    /// assert_eq!(pos, DVec3::new(100.0, 0.0, 0.0));
    /// ```
    #[doc(alias = "get_position_at_angle")]
    fn get_position_at_true_anomaly(&self, true_anomaly: f64) -> DVec3 {
        self.transform_pqw_vector(self.get_pqw_position_at_true_anomaly(true_anomaly))
    }

    /// Gets the 3D position at a given eccentric anomaly in the orbit.
    ///
    /// The radius comes from `a(1 - e cos E)` and the direction from the
    /// true anomaly.
    fn get_position_at_eccentric_anomaly(&self, eccentric_anomaly: f64) -> DVec3 {
        let altitude = self.get_altitude_at_eccentric_anomaly(eccentric_anomaly);
        let true_anomaly = self.get_true_anomaly_at_eccentric_anomaly(eccentric_anomaly);
        let (sin, cos) = true_anomaly.sin_cos();

        self.transform_pqw_vector(DVec2::new(altitude * cos, altitude * sin))
    }

    /// Gets the 3D position at a given mean anomaly in the orbit.
    fn get_position_at_mean_anomaly(&self, mean_anomaly: f64) -> DVec3 {
        self.get_position_at_eccentric_anomaly(
            self.get_eccentric_anomaly_at_mean_anomaly(mean_anomaly),
        )
    }

    /// Gets the 3D position at a given time, measured from the epoch.
    ///
    /// This is stateless: it does not need an [`OrbitState`]. It is handy
    /// for jumping to an arbitrary time, while [`advance`] is the cheaper
    /// path for frame-by-frame animation.
    fn get_position_at_time(&self, t: f64) -> DVec3 {
        self.get_position_at_mean_anomaly(self.get_mean_anomaly_at_time(t))
    }

    /// Transforms a position from the perifocal coordinate (PQW) system into
    /// the 3D scene frame, using the orbital parameters.
    ///
    /// # Perifocal Coordinate (PQW) System
    /// The perifocal coordinate (PQW) system is a frame of reference using
    /// the basis vectors p-hat, q-hat, and w-hat, where p-hat points to the
    /// periapsis, q-hat has a true anomaly 90 degrees more than p-hat, and
    /// w-hat points perpendicular to the orbital plane.
    ///
    /// Learn more: <https://en.wikipedia.org/wiki/Perifocal_coordinate_system>
    fn transform_pqw_vector(&self, position: DVec2) -> DVec3 {
        self.get_transformation_matrix().dot_vec(position)
    }

    /// Checks that the elements describe a bound, well-formed orbit.
    ///
    /// The solver and sampler never call this: they assume valid input.
    /// Call it at the edges where elements come from outside, like
    /// configuration files.
    ///
    /// # Errors
    /// See [`ElementsError`] for the individual failure cases.
    fn validate(&self) -> Result<(), ElementsError> {
        let values = [
            self.get_semi_major_axis(),
            self.get_eccentricity(),
            self.get_inclination(),
            self.get_arg_pe(),
            self.get_long_asc_node(),
            self.get_mean_anomaly_at_epoch(),
            self.get_mean_motion(),
        ];

        if values.iter().any(|value| !value.is_finite()) {
            return Err(ElementsError::NonFinite);
        }

        let eccentricity = self.get_eccentricity();
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(ElementsError::EccentricityOutOfRange(eccentricity));
        }

        let semi_major_axis = self.get_semi_major_axis();
        if semi_major_axis <= 0.0 {
            return Err(ElementsError::NonPositiveSemiMajorAxis(semi_major_axis));
        }

        let mean_motion = self.get_mean_motion();
        if mean_motion <= 0.0 {
            return Err(ElementsError::NonPositiveMeanMotion(mean_motion));
        }

        Ok(())
    }
}

/// An error describing why a set of orbital elements is unusable.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ElementsError {
    /// ### Eccentricity outside of `[0, 1)`.
    /// Only bound, elliptic orbits are supported. Parabolic and hyperbolic
    /// trajectories would need a different Kepler equation.
    #[error("eccentricity {0} is outside of [0, 1)")]
    EccentricityOutOfRange(f64),

    /// ### Semi-major axis of zero or less.
    #[error("semi-major axis must be positive, got {0}")]
    NonPositiveSemiMajorAxis(f64),

    /// ### Mean motion of zero or less.
    /// Retrograde orbits are expressed through an inclination above 90
    /// degrees, not through a negative mean motion.
    #[error("mean motion must be positive, got {0}")]
    NonPositiveMeanMotion(f64),

    /// ### One of the elements is NaN or infinite.
    #[error("orbital elements contain a non-finite value")]
    NonFinite,
}

/// An error from the tolerance-checked Kepler solver.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum KeplerSolveError {
    /// The residual of Kepler's equation never dropped below the tolerance.
    #[error(
        "Kepler's equation did not converge after {iterations} iterations \
        (M = {mean_anomaly}, e = {eccentricity}, residual = {residual})"
    )]
    NoConvergence {
        /// The mean anomaly that was being solved for.
        mean_anomaly: f64,
        /// The eccentricity of the orbit.
        eccentricity: f64,
        /// The residual `E - e sin E - M` at the last iterate.
        residual: f64,
        /// How many Newton-Raphson steps were taken.
        iterations: u32,
    },
}

#[cfg(test)]
mod tests;

#[inline]
fn keplers_equation(mean_anomaly: f64, eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - (eccentricity * eccentric_anomaly.sin()) - mean_anomaly
}
#[inline]
fn keplers_equation_derivative(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    1.0 - (eccentricity * eccentric_anomaly.cos())
}

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{wrap_two_pi, OrbitTrait};

/// The mutable part of an orbiting body: where along its orbit it is now.
///
/// Each animated body owns exactly one of these. It is advanced by
/// [`advance`][crate::advance], which takes it by `&mut`, so a single state
/// can never be advanced from two places at once. States of different bodies
/// share nothing and may be advanced in parallel.
///
/// With the `serde` feature, a loaded mean anomaly is wrapped into `[0, 2π)`.
///
/// # Example
/// ```
/// use orrery_sim::{OrbitState, OrbitalElements};
///
/// let elements = OrbitalElements::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.5, 1.0);
/// let state = OrbitState::new(&elements);
///
/// assert_eq!(state.mean_anomaly(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "StoredOrbitState")
)]
pub struct OrbitState {
    /// Always in `[0, 2π)`.
    pub(crate) mean_anomaly: f64,

    /// Result of the most recent solve. Derived, not authoritative.
    pub(crate) true_anomaly: f64,
}

impl OrbitState {
    /// Creates a state positioned at the orbit's epoch.
    pub fn new(elements: &impl OrbitTrait) -> OrbitState {
        Self::at_mean_anomaly(elements, elements.get_mean_anomaly_at_epoch())
    }

    /// Creates a state positioned at a given mean anomaly, in radians.
    ///
    /// The angle is wrapped into `[0, 2π)`.
    pub fn at_mean_anomaly(elements: &impl OrbitTrait, mean_anomaly: f64) -> OrbitState {
        let mean_anomaly = wrap_two_pi(mean_anomaly);

        OrbitState {
            mean_anomaly,
            true_anomaly: elements.get_true_anomaly_at_mean_anomaly(mean_anomaly),
        }
    }

    /// Gets the current mean anomaly, in `[0, 2π)`.
    pub fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Gets the true anomaly computed by the most recent solve, in radians.
    ///
    /// Handy for displaying orbital phase.
    pub fn true_anomaly(&self) -> f64 {
        self.true_anomaly
    }

    /// Gets the position for the current mean anomaly, without advancing.
    pub fn position(&self, elements: &impl OrbitTrait) -> DVec3 {
        elements.get_position_at_mean_anomaly(self.mean_anomaly)
    }
}

/// The serialized shape of an [`OrbitState`], before the mean anomaly is
/// wrapped.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct StoredOrbitState {
    mean_anomaly: f64,
    true_anomaly: f64,
}

#[cfg(feature = "serde")]
impl From<StoredOrbitState> for OrbitState {
    fn from(stored: StoredOrbitState) -> Self {
        OrbitState {
            mean_anomaly: wrap_two_pi(stored.mean_anomaly),
            true_anomaly: stored.true_anomaly,
        }
    }
}

use crate::OrbitalElements;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A struct representing a celestial body: a star, planet, moon or
/// near-Earth object.
///
/// A body only describes *what* is orbiting and *how*. Where it currently
/// is lives in its [`OrbitState`][crate::OrbitState], owned by the
/// [`System`][crate::System] the body is added to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Body {
    /// The name of the celestial body.
    pub name: String,

    /// The radius of the celestial body, in kilometres.
    pub radius: f64,

    /// The orbit of the celestial body, if it is orbiting one.
    pub orbit: Option<OrbitalElements>,
}

impl Body {
    /// Creates a new `Body` instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the celestial body.
    /// * `radius` - The radius of the celestial body, in kilometres.
    /// * `orbit` - An optional orbit for the celestial body.
    ///
    /// # Returns
    ///
    /// A new `Body` instance.
    pub fn new(name: impl Into<String>, radius: f64, orbit: Option<OrbitalElements>) -> Self {
        Self {
            name: name.into(),
            radius,
            orbit,
        }
    }

    /// Whether this body moves along an orbit.
    pub fn is_orbiting(&self) -> bool {
        self.orbit.is_some()
    }
}

impl Default for Body {
    /// Creates a default `Body` instance.
    ///
    /// Currently, this function returns a motionless Earth.
    /// However, do not rely on this behavior, as it may change in the future.
    fn default() -> Self {
        Self {
            name: "Earth".to_string(),
            radius: 6.371e3,
            orbit: None,
        }
    }
}

//! Loading systems and city tables from JSON.
//!
//! A system file lists bodies the way the tables in astronomy references do:
//! angles in degrees, distances in whatever unit the table uses, and a single
//! `distance_scale` to turn that unit into scene units.
//!
//! ```json
//! {
//!     "speed_multiplier": 10.0,
//!     "distance_scale": 100.0,
//!     "bodies": [
//!         { "name": "Sun", "radius": 696340.0 },
//!         {
//!             "name": "Earth",
//!             "parent": "Sun",
//!             "radius": 6371.0,
//!             "distance_from_sun": 1.0,
//!             "orbit": { "eccentricity": 0.0167, "period": 365.256 }
//!         }
//!     ]
//! }
//! ```
//!
//! Bodies are added in order, so a parent must come before its satellites.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geo::City;
use crate::{
    Body, BodyAddError, CompactOrbitalElements, ElementsError, OrbitTrait, OrbitalElements,
    System,
};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to parse JSON content.
    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_json::Error),

    /// A body's orbital elements don't describe a usable orbit.
    #[error("invalid orbit for body '{body}': {source}")]
    InvalidElements {
        /// The name of the offending body.
        body: String,
        /// What was wrong with the elements.
        #[source]
        source: ElementsError,
    },

    /// A body's orbital period is zero, negative or not a number.
    #[error("invalid orbital period for body '{body}': {period}")]
    InvalidPeriod {
        /// The name of the offending body.
        body: String,
        /// The period as configured.
        period: f64,
    },

    /// The speed multiplier is zero, negative or not a number.
    #[error("speed multiplier must be positive and finite, got {0}")]
    InvalidSpeedMultiplier(f64),

    /// The system refused a body.
    #[error("failed to add body '{body}': {source}")]
    AddBody {
        /// The name of the body that was refused.
        body: String,
        /// Why it was refused.
        #[source]
        source: BodyAddError,
    },

    /// A body names a parent that isn't defined before it.
    #[error("body '{body}' orbits '{parent}', which is not defined before it")]
    UnknownParent {
        /// The name of the orbiting body.
        body: String,
        /// The parent name that couldn't be found.
        parent: String,
    },
}

/// A whole system: the simulation speed, a distance scale and a list of
/// bodies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SystemConfig {
    /// How much faster than real time the orbits move.
    pub speed_multiplier: f64,
    /// Scene units per distance unit used in the body table.
    pub distance_scale: f64,
    /// The bodies, parents before satellites.
    pub bodies: Vec<BodyConfig>,
}

/// One body of the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyConfig {
    /// The body's name, also used to refer to it as a parent.
    pub name: String,
    /// The name of the body this one orbits, if any.
    #[serde(default)]
    pub parent: Option<String>,
    /// The body's radius, in kilometres.
    pub radius: f64,
    /// The semi-major axis of the orbit, in the table's distance unit.
    /// Zero means the body does not orbit anything.
    #[serde(default)]
    pub distance_from_sun: f64,
    /// The shape and orientation of the orbit.
    #[serde(default)]
    pub orbit: OrbitParams,
}

/// Orbit parameters of one body, with angles in degrees.
///
/// Anything left out defaults to zero, except the period, which defaults
/// to one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitParams {
    /// The eccentricity, in `[0, 1)`.
    pub eccentricity: f64,
    /// The inclination, in degrees.
    pub inclination: f64,
    /// The orbital period, in the time unit of the simulation.
    pub period: f64,
    /// The longitude of ascending node, in degrees.
    pub long_asc_node: f64,
    /// The argument of periapsis, in degrees.
    pub arg_pe: f64,
    /// The mean anomaly at epoch, in degrees.
    pub mean_anomaly_at_epoch: f64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
            distance_scale: 1.0,
            bodies: Vec::new(),
        }
    }
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            eccentricity: 0.0,
            inclination: 0.0,
            period: 1.0,
            long_asc_node: 0.0,
            arg_pe: 0.0,
            mean_anomaly_at_epoch: 0.0,
        }
    }
}

impl SystemConfig {
    /// Parses a system from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Reads and parses a system from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config = Self::from_json_str(&contents)?;
        log::info!(
            "loaded {} bodies from {}",
            config.bodies.len(),
            path.display()
        );
        Ok(config)
    }

    /// Builds a [`System`] from this configuration.
    ///
    /// Every orbit is validated and scaled into scene units on the way in.
    ///
    /// # Errors
    /// Fails if the speed multiplier isn't positive, or on the first body
    /// with invalid elements or whose parent is not defined before it.
    pub fn build(&self) -> Result<System, ConfigError> {
        if !(self.speed_multiplier.is_finite() && self.speed_multiplier > 0.0) {
            return Err(ConfigError::InvalidSpeedMultiplier(self.speed_multiplier));
        }

        let mut system = System::new(self.speed_multiplier);

        for body_config in &self.bodies {
            let body = body_config.to_body(self.distance_scale)?;

            let parent = match &body_config.parent {
                Some(parent) => Some(system.get_body_index_with_name(parent).ok_or_else(|| {
                    ConfigError::UnknownParent {
                        body: body_config.name.clone(),
                        parent: parent.clone(),
                    }
                })?),
                None => None,
            };

            system
                .add_body(body, parent)
                .map_err(|(source, body)| ConfigError::AddBody {
                    body: body.name,
                    source,
                })?;
        }

        log::info!("built {system}");
        Ok(system)
    }
}

impl BodyConfig {
    /// Converts this entry into a [`Body`], scaling its distance by
    /// `distance_scale`.
    pub fn to_body(&self, distance_scale: f64) -> Result<Body, ConfigError> {
        let orbit = if self.distance_from_sun > 0.0 {
            Some(self.to_elements(distance_scale)?)
        } else {
            None
        };

        Ok(Body::new(self.name.clone(), self.radius, orbit))
    }

    /// Converts this entry's orbit into validated [`OrbitalElements`].
    pub fn to_elements(&self, distance_scale: f64) -> Result<OrbitalElements, ConfigError> {
        let params = &self.orbit;

        if !(params.period.is_finite() && params.period > 0.0) {
            return Err(ConfigError::InvalidPeriod {
                body: self.name.clone(),
                period: params.period,
            });
        }

        let elements = CompactOrbitalElements::new(
            self.distance_from_sun * distance_scale,
            params.eccentricity,
            params.inclination.to_radians(),
            params.arg_pe.to_radians(),
            params.long_asc_node.to_radians(),
            params.mean_anomaly_at_epoch.to_radians(),
            core::f64::consts::TAU / params.period,
        );

        elements
            .validate()
            .map_err(|source| ConfigError::InvalidElements {
                body: self.name.clone(),
                source,
            })?;

        Ok(elements.into())
    }
}

/// Parses a city table from a JSON array.
///
/// Extra keys on each entry (country, population, ...) are ignored.
///
/// # Example
/// ```
/// use orrery_sim::config::load_cities;
///
/// let cities = load_cities(r#"[
///     { "city": "Lagos", "latitude_deg": 6.4550, "longitude_deg": 3.3841, "country": "Nigeria" }
/// ]"#).unwrap();
///
/// assert_eq!(cities[0].name, "Lagos");
/// ```
pub fn load_cities(json: &str) -> Result<Vec<City>, ConfigError> {
    serde_json::from_str(json).map_err(ConfigError::Parse)
}

/// Reads and parses a city table from a JSON file.
pub fn load_cities_from_path(path: &Path) -> Result<Vec<City>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
    let cities = load_cities(&contents)?;
    log::info!("loaded {} cities from {}", cities.len(), path.display());
    Ok(cities)
}

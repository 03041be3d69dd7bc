//! Latitude/longitude projection onto a sphere.
//!
//! Used for placing city markers and their labels on a globe. The globe's
//! north pole is on +Y. The equator at longitude 0 lands on +X, and
//! longitude -90 (west) lands on +Z.

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Projects a latitude and longitude, in degrees, onto the surface of a
/// sphere of the given radius centred at the origin.
///
/// ```text
/// φ = (90 - latitude) · π/180
/// θ = (longitude + 180) · π/180
///
/// x = -radius · sin φ · cos θ
/// y =  radius · cos φ
/// z =  radius · sin φ · sin θ
/// ```
///
/// Latitude is expected in `[-90, 90]`. Any longitude works, since sine and
/// cosine are periodic, but see [`normalize_longitude`] if you want
/// predictable inputs.
///
/// # Example
/// ```
/// use orrery_sim::geo::project;
///
/// let north_pole = project(90.0, 0.0, 2.0);
///
/// assert!(north_pole.x.abs() < 1e-12);
/// assert!((north_pole.y - 2.0).abs() < 1e-12);
/// assert!(north_pole.z.abs() < 1e-12);
/// ```
pub fn project(latitude_deg: f64, longitude_deg: f64, radius: f64) -> DVec3 {
    let (sin_phi, cos_phi) = (90.0 - latitude_deg).to_radians().sin_cos();
    let (sin_theta, cos_theta) = (longitude_deg + 180.0).to_radians().sin_cos();

    DVec3::new(
        -radius * sin_phi * cos_theta,
        radius * cos_phi,
        radius * sin_phi * sin_theta,
    )
}

/// Projects onto a sphere `height` units above the surface of one with
/// the given radius.
///
/// Markers and labels usually float a little above the globe so they don't
/// z-fight with its surface.
pub fn project_with_height(
    latitude_deg: f64,
    longitude_deg: f64,
    radius: f64,
    height: f64,
) -> DVec3 {
    project(latitude_deg, longitude_deg, radius + height)
}

/// Wraps a longitude, in degrees, into `[-180, 180)`.
///
/// # Example
/// ```
/// use orrery_sim::geo::normalize_longitude;
///
/// assert_eq!(normalize_longitude(190.0), -170.0);
/// assert_eq!(normalize_longitude(-180.0), -180.0);
/// assert_eq!(normalize_longitude(180.0), -180.0);
/// assert_eq!(normalize_longitude(45.0), 45.0);
/// ```
pub fn normalize_longitude(longitude_deg: f64) -> f64 {
    let wrapped = (longitude_deg + 180.0).rem_euclid(360.0) - 180.0;

    if wrapped >= 180.0 {
        -180.0
    } else {
        wrapped
    }
}

/// A point on a globe, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    /// Degrees north of the equator, in `[-90, 90]`.
    pub latitude_deg: f64,
    /// Degrees east of the prime meridian.
    pub longitude_deg: f64,
}

impl GeoPoint {
    /// Creates a new point.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> GeoPoint {
        GeoPoint {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Projects this point onto a sphere; see [`project_with_height`].
    pub fn surface_position(&self, radius: f64, height: f64) -> DVec3 {
        project_with_height(self.latitude_deg, self.longitude_deg, radius, height)
    }
}

/// A labelled city on the globe.
///
/// Deserializes from the city table format, where the name is stored under
/// the `city` key:
///
/// ```json
/// { "city": "Tokyo", "latitude_deg": 35.6897, "longitude_deg": 139.6922 }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct City {
    /// The label shown next to the marker.
    #[cfg_attr(feature = "serde", serde(rename = "city"))]
    pub name: String,
    /// Degrees north of the equator.
    pub latitude_deg: f64,
    /// Degrees east of the prime meridian.
    pub longitude_deg: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(name: impl Into<String>, latitude_deg: f64, longitude_deg: f64) -> City {
        City {
            name: name.into(),
            latitude_deg,
            longitude_deg,
        }
    }

    /// Gets the city's location as a [`GeoPoint`].
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude_deg, self.longitude_deg)
    }

    /// Projects the city onto a globe of the given radius, `height` units
    /// above the surface.
    pub fn surface_position(&self, radius: f64, height: f64) -> DVec3 {
        self.location().surface_position(radius, height)
    }
}

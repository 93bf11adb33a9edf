//! Angle normalization and geographic coordinates
//!
//! Every angle-producing function in this crate funnels its result through
//! [`normalize_degrees`], so callers can rely on the [0, 360) range without
//! re-wrapping.

use serde::{Deserialize, Serialize};

/// Normalize an angle in degrees into the half-open interval [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Geographic location in degrees, with east-positive longitude.
///
/// No validation is performed: latitudes at or extremely near ±90° make the
/// ascendant computation degenerate (the tangent of the latitude diverges),
/// and callers are expected to keep observers away from the poles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in degrees, nominally −90..90
    pub latitude: f64,
    /// Longitude in degrees, east-positive
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a new coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

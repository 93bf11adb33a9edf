//! Sidereal time and the ascendant
//!
//! Greenwich Mean Sidereal Time from the standard polynomial, Local
//! Sidereal Time by adding the observer's east longitude, and the ascendant
//! (the ecliptic longitude rising on the eastern horizon) from the
//! spherical triangle between the horizon, equator, and ecliptic.

use crate::constants::{DEG2RAD, J2000, MEAN_OBLIQUITY_DEG, RAD2DEG};
use crate::coordinates::{normalize_degrees, GeoCoordinate};
use crate::time::julian_centuries;

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
pub fn gmst_degrees(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    normalize_degrees(
        280.460_618_37 + 360.985_647_366_29 * (jd - J2000) + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Local Sidereal Time in degrees for an observer's east-positive longitude.
pub fn lst_degrees(jd: f64, longitude_east: f64) -> f64 {
    normalize_degrees(gmst_degrees(jd) + longitude_east)
}

/// Ecliptic longitude of the ascendant in degrees, [0, 360).
///
/// Uses the fixed mean obliquity of the ecliptic with no nutation
/// correction. At latitude ±90° the tangent term diverges and the result is
/// meaningless; no guard is applied.
pub fn ascendant_longitude(jd: f64, location: &GeoCoordinate) -> f64 {
    let lst = lst_degrees(jd, location.longitude) * DEG2RAD;
    let lat = location.latitude * DEG2RAD;
    let obliquity = MEAN_OBLIQUITY_DEG * DEG2RAD;

    let asc = (-lst.cos()).atan2(lst.sin() * obliquity.cos() + lat.tan() * obliquity.sin());
    normalize_degrees(asc * RAD2DEG)
}

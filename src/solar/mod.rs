//! Apparent ecliptic longitude of the Sun
//!
//! Low-precision solar position: mean longitude and mean anomaly as
//! polynomials in Julian centuries, a three-term equation of center, and a
//! single low-order correction for aberration and nutation in longitude.
//! Accurate to roughly 0.01 degrees, which places the equinoxes and
//! solstices (and therefore every sign boundary) correctly.

use crate::constants::DEG2RAD;
use crate::coordinates::normalize_degrees;
use crate::time::julian_centuries;

/// Apparent ecliptic longitude of the Sun in degrees, [0, 360).
pub fn apparent_longitude(jd: f64) -> f64 {
    let t = julian_centuries(jd);

    // Geometric mean longitude and mean anomaly
    let l0 = normalize_degrees(280.46646 + 36_000.76983 * t + 0.000_3032 * t * t);
    let m = normalize_degrees(357.52911 + 35_999.05029 * t - 0.000_1537 * t * t);
    let m_rad = m * DEG2RAD;

    // Equation of center
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    // Aberration and the dominant nutation term, referred to the ascending
    // node of the Moon's orbit
    let omega = (125.04 - 1934.136 * t) * DEG2RAD;

    normalize_degrees(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{julian_day, CalendarTuple};
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    /// Shortest angular distance in degrees from `angle` to `target`.
    fn separation(angle: f64, target: f64) -> f64 {
        let d = (angle - target).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_meeus_example_25a() {
        // 1992 October 13.0 TD: apparent longitude 199.90895 degrees
        let jd = julian_day(&CalendarTuple::from_date(1992, 10, 13));
        assert_abs_diff_eq!(apparent_longitude(jd), 199.908_95, epsilon = 5e-4);
    }

    #[rstest]
    // Equinox and solstice instants (USNO): the Sun should sit on the
    // 0/90 degree cardinal points to within the series' accuracy.
    #[case(CalendarTuple::new(2000, 3, 20, 7, 35, 0.0), 0.0)]
    #[case(CalendarTuple::new(2000, 6, 21, 1, 48, 0.0), 90.0)]
    #[case(CalendarTuple::new(2024, 3, 20, 3, 6, 0.0), 0.0)]
    #[case(CalendarTuple::new(2024, 6, 20, 20, 51, 0.0), 90.0)]
    fn test_cardinal_points(#[case] cal: CalendarTuple, #[case] expected: f64) {
        let lon = apparent_longitude(julian_day(&cal));
        assert!(
            separation(lon, expected) <= 0.01,
            "solar longitude {} too far from {}",
            lon,
            expected
        );
    }

    #[test]
    fn test_output_range() {
        for i in -200..200 {
            let jd = 2_451_545.0 + i as f64 * 137.25;
            let lon = apparent_longitude(jd);
            assert!((0.0..360.0).contains(&lon), "out of range: {}", lon);
        }
    }

    #[test]
    fn test_advances_about_one_degree_per_day() {
        let jd = 2_460_000.5;
        let d = separation(apparent_longitude(jd + 1.0), apparent_longitude(jd));
        assert!((0.9..1.1).contains(&d), "daily motion {} degrees", d);
    }

    #[test]
    fn test_idempotent() {
        let jd = 2_455_197.5;
        assert_eq!(apparent_longitude(jd), apparent_longitude(jd));
    }
}

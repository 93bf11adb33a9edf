//! Ecliptic longitude of the Moon
//!
//! Truncated Brown/ELP2000 periodic series: five fundamental arguments as
//! polynomials in Julian centuries, plus the 15 largest periodic terms in
//! longitude. Keeping only these terms bounds the error at a few
//! arc-minutes against the full series, which classifies the Moon's zodiac
//! sign and phase correctly; it is not a precision ephemeris.
//!
//! The series is stored as a table of (coefficient, argument-multiplier)
//! tuples and evaluated in a loop, so individual terms can be checked
//! against the published tables.

use crate::constants::DEG2RAD;
use crate::coordinates::normalize_degrees;
use crate::time::julian_centuries;

/// One periodic term: amplitude in degrees and integer multipliers for the
/// arguments D (mean elongation), M (solar mean anomaly), M′ (lunar mean
/// anomaly) and F (argument of latitude), in that order.
type SeriesTerm = (f64, [i32; 4]);

/// The 15 largest-amplitude longitude terms of the lunar theory, in
/// descending order of amplitude.
const LONGITUDE_SERIES: [SeriesTerm; 15] = [
    (6.288_774, [0, 0, 1, 0]),
    (1.274_027, [2, 0, -1, 0]),
    (0.658_314, [2, 0, 0, 0]),
    (0.213_618, [0, 0, 2, 0]),
    (-0.185_116, [0, 1, 0, 0]),
    (-0.114_332, [0, 0, 0, 2]),
    (0.058_793, [2, 0, -2, 0]),
    (0.057_066, [2, -1, -1, 0]),
    (0.053_322, [2, 0, 1, 0]),
    (0.045_758, [2, -1, 0, 0]),
    (-0.040_923, [0, 1, -1, 0]),
    (-0.034_720, [1, 0, 0, 0]),
    (-0.030_383, [0, 1, 1, 0]),
    (0.015_327, [2, 0, 0, -2]),
    (-0.012_528, [0, 0, 1, 2]),
];

/// The five fundamental arguments of the lunar theory, in degrees
/// normalized to [0, 360).
struct FundamentalArguments {
    /// Mean longitude L′
    l_prime: f64,
    /// Mean elongation of the Moon from the Sun, D
    d: f64,
    /// Mean anomaly of the Sun, M
    m: f64,
    /// Mean anomaly of the Moon, M′
    m_prime: f64,
    /// Argument of latitude, F
    f: f64,
}

fn fundamental_arguments(t: f64) -> FundamentalArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    FundamentalArguments {
        l_prime: normalize_degrees(
            218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0,
        ),
        d: normalize_degrees(
            297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
        ),
        m: normalize_degrees(357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
            + t3 / 24_490_000.0),
        m_prime: normalize_degrees(
            134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
                - t4 / 14_712_000.0,
        ),
        f: normalize_degrees(
            93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        ),
    }
}

/// Ecliptic longitude of the Moon in degrees, [0, 360).
pub fn ecliptic_longitude(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let args = fundamental_arguments(t);

    let mut periodic = 0.0;
    for (amplitude, [cd, cm, cmp, cf]) in LONGITUDE_SERIES {
        let arg = (cd as f64 * args.d
            + cm as f64 * args.m
            + cmp as f64 * args.m_prime
            + cf as f64 * args.f)
            * DEG2RAD;
        periodic += amplitude * arg.sin();
    }

    normalize_degrees(args.l_prime + periodic)
}

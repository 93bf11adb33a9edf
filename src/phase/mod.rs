//! Principal lunar phase instants
//!
//! Meeus's phase-of-the-moon algorithm: each lunation since 2000 January 6
//! gets an integer index k, a mean instant from a polynomial in the
//! fractional lunation count, and a short periodic correction: one series
//! for new and full moons, a different one (plus a fixed bias) for the
//! quarters. A single evaluation per phase, no root finding.
//!
//! [`phases_around`] covers the five lunations nearest a calendar month, so
//! the nearest past and future occurrence of every phase kind relative to
//! any day in that month is present without re-querying.

use crate::constants::{DEG2RAD, LUNATIONS_PER_YEAR, SYNODIC_MONTH};
use crate::coordinates::normalize_degrees;
use crate::time::datetime_from_julian_day;
use crate::Result;
use chrono::{DateTime, Datelike, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// One of the four principal lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
    /// Defensive default for an unrecognized phase index. The search
    /// functions never produce it.
    Unknown,
}

impl PhaseKind {
    /// Map a phase index (0 = new .. 3 = last quarter) to its kind.
    fn from_index(index: u32) -> Self {
        match index {
            0 => PhaseKind::NewMoon,
            1 => PhaseKind::FirstQuarter,
            2 => PhaseKind::FullMoon,
            3 => PhaseKind::LastQuarter,
            _ => PhaseKind::Unknown,
        }
    }
}

/// A phase instant paired with its kind. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseEvent {
    /// The instant of the phase, in Universal Time
    pub instant: DateTime<Utc>,
    /// Which principal phase occurs at that instant
    pub kind: PhaseKind,
}

/// One correction term: amplitude in days, the power of the eccentricity
/// factor E applied to it, and integer multipliers for M (solar mean
/// anomaly), M′ (lunar mean anomaly) and F (argument of latitude).
struct CorrectionTerm {
    amplitude: f64,
    e_power: u32,
    m: i32,
    m_prime: i32,
    f: i32,
}

const fn term(amplitude: f64, e_power: u32, m: i32, m_prime: i32, f: i32) -> CorrectionTerm {
    CorrectionTerm {
        amplitude,
        e_power,
        m,
        m_prime,
        f,
    }
}

/// Leading correction terms for new moons.
const NEW_MOON_TERMS: [CorrectionTerm; 7] = [
    term(-0.407_20, 0, 0, 1, 0),
    term(0.172_41, 1, 1, 0, 0),
    term(0.016_08, 0, 0, 2, 0),
    term(0.010_39, 0, 0, 0, 2),
    term(0.007_39, 1, -1, 1, 0),
    term(-0.005_14, 1, 1, 1, 0),
    term(0.002_08, 2, 2, 0, 0),
];

/// Leading correction terms for full moons.
const FULL_MOON_TERMS: [CorrectionTerm; 7] = [
    term(-0.406_14, 0, 0, 1, 0),
    term(0.173_02, 1, 1, 0, 0),
    term(0.016_14, 0, 0, 2, 0),
    term(0.010_43, 0, 0, 0, 2),
    term(0.007_34, 1, -1, 1, 0),
    term(-0.005_15, 1, 1, 1, 0),
    term(0.002_09, 2, 2, 0, 0),
];

/// Leading correction terms shared by the first and last quarters.
const QUARTER_TERMS: [CorrectionTerm; 7] = [
    term(-0.628_01, 0, 0, 1, 0),
    term(0.171_72, 1, 1, 0, 0),
    term(-0.011_83, 1, 1, 1, 0),
    term(0.008_62, 0, 0, 2, 0),
    term(0.008_04, 0, 0, 0, 2),
    term(0.004_54, 1, -1, 1, 0),
    term(0.002_04, 2, 2, 0, 0),
];

/// Extra offset for the quarter phases: added for the first quarter,
/// subtracted for the last.
const QUARTER_BIAS_DAYS: f64 = 0.003_25;

/// Corrected Julian Day of one phase of lunation `k`.
///
/// `phase_index` selects the phase within the lunation:
/// 0 = new, 1 = first quarter, 2 = full, 3 = last quarter.
fn phase_jd(k: i64, phase_index: u32) -> f64 {
    let kf = k as f64 + phase_index as f64 * 0.25;
    let t = kf / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean instant of the phase
    let mean_jd = 2_451_550.097_66 + SYNODIC_MONTH * kf + 0.000_154_37 * t2
        - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    // Eccentricity of Earth's orbit, damping the solar-anomaly terms
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    // Fundamental arguments at the mean instant
    let m = normalize_degrees(2.5534 + 29.105_356_70 * kf - 0.000_001_4 * t2
        - 0.000_000_11 * t3)
        * DEG2RAD;
    let m_prime = normalize_degrees(
        201.5643 + 385.816_935_28 * kf + 0.010_758_2 * t2 + 0.000_012_38 * t3
            - 0.000_000_058 * t4,
    ) * DEG2RAD;
    let f = normalize_degrees(
        160.7108 + 390.670_502_84 * kf - 0.001_611_8 * t2 - 0.000_002_27 * t3
            + 0.000_000_011 * t4,
    ) * DEG2RAD;

    let series: &[CorrectionTerm; 7] = match phase_index {
        0 => &NEW_MOON_TERMS,
        2 => &FULL_MOON_TERMS,
        _ => &QUARTER_TERMS,
    };

    let mut correction = 0.0;
    for term in series {
        let arg = term.m as f64 * m + term.m_prime as f64 * m_prime + term.f as f64 * f;
        correction += term.amplitude * e.powi(term.e_power as i32) * arg.sin();
    }

    correction += match phase_index {
        1 => QUARTER_BIAS_DAYS,
        3 => -QUARTER_BIAS_DAYS,
        _ => 0.0,
    };

    mean_jd + correction
}

/// Lunation index nearest a calendar month (k = 0 is the new moon of
/// 2000 January 6).
fn lunation_near(year: i32, month: u32) -> i64 {
    let fractional_year = year as f64 + (month as f64 - 0.5) / 12.0;
    ((fractional_year - 2000.0) * LUNATIONS_PER_YEAR).round() as i64
}

/// All principal phase instants across the five lunations nearest the given
/// calendar month.
///
/// Returns 20 events (5 lunations × 4 phases), sorted ascending by instant.
/// The window spans slightly more than one cycle on either side of the
/// month, so every phase kind occurs at least three times and the nearest
/// occurrence of each kind relative to any day of the month is included.
pub fn phases_around(year: i32, month: u32) -> Result<Vec<PhaseEvent>> {
    let k = lunation_near(year, month);
    debug!(
        "phase window for {:04}-{:02}: lunations {}..={}",
        year,
        month,
        k - 2,
        k + 2
    );

    let mut events = Vec::with_capacity(20);
    for offset in -2..=2 {
        for phase_index in 0..4 {
            events.push(PhaseEvent {
                instant: datetime_from_julian_day(phase_jd(k + offset, phase_index))?,
                kind: PhaseKind::from_index(phase_index),
            });
        }
    }

    events.sort_by_key(|event| event.instant);
    Ok(events)
}

/// All principal phase instants within `[start, end)`.
///
/// Starts from the lunations covering the endpoints' months, widened by one
/// cycle on each side so boundary phases are not missed, then filters to
/// the requested range. Sorted ascending by instant; empty when the range
/// is empty.
pub fn phases_in_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<PhaseEvent>> {
    if start >= end {
        return Ok(Vec::new());
    }

    let k_first = lunation_near(start.year(), start.month()) - 1;
    let k_last = lunation_near(end.year(), end.month()) + 1;
    debug!(
        "phase range {} .. {}: lunations {}..={}",
        start, end, k_first, k_last
    );

    let mut events = Vec::new();
    for k in k_first..=k_last {
        for phase_index in 0..4 {
            let instant = datetime_from_julian_day(phase_jd(k, phase_index))?;
            if instant >= start && instant < end {
                events.push(PhaseEvent {
                    instant,
                    kind: PhaseKind::from_index(phase_index),
                });
            }
        }
    }

    events.sort_by_key(|event| event.instant);
    Ok(events)
}

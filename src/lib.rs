//! Ecliptica: ecliptic positions of the Sun and Moon, the ascendant, and
//! lunar phase times.
//!
//! This crate provides the handful of positional-astronomy calculations a
//! horoscope or almanac service needs: calendar timestamp to Julian Day
//! conversion, the apparent ecliptic longitude of the Sun, the ecliptic
//! longitude of the Moon, the ascendant for a place and time, and the exact
//! instants of the four principal lunar phases around a calendar month.
//!
//! All angles are degrees normalized into [0, 360). All timestamps are
//! Universal Time; callers convert from local time zones before calling in.
//! Every function is pure and depends only on its arguments, so results are
//! reproducible and safe to compute from any number of threads.
//!
//! Precision is bounded by the truncated trigonometric series used: about
//! 0.01 degrees for the Sun and a few arc-minutes for the Moon. That is
//! enough to classify zodiac signs and lunar phases, not to point a
//! telescope.

use thiserror::Error;

pub mod ascendant;
pub mod constants;
pub mod coordinates;
pub mod lunar;
pub mod phase;
pub mod solar;
pub mod time;

// Re-export commonly used types
pub use coordinates::GeoCoordinate;
pub use phase::{PhaseEvent, PhaseKind};
pub use time::CalendarTuple;

/// Main error type for the ecliptica library
#[derive(Debug, Error)]
pub enum EclipticaError {
    #[error("Julian Day {0} is outside the representable calendar range")]
    InstantOutOfRange(f64),
}

/// Result type for ecliptica operations
pub type Result<T> = std::result::Result<T, EclipticaError>;

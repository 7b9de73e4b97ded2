//! Degrees-minutes-seconds and decimal-degree conversions.
//!
//! Decimal degrees are always rounded to 7 fractional digits (about 1 cm on
//! the ground). Seconds produced by [`to_dms`] are rounded to 4 digits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AngleError;

/// Fractional digits kept on every decimal-degree value.
pub const DD_PRECISION: i32 = 7;

/// Fractional digits kept on the seconds component of a [`Dms`].
pub const SEC_PRECISION: i32 = 4;

/// An angle in degrees, minutes and seconds.
///
/// Only `deg` carries a sign by convention; nothing here enforces it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub deg: i32,
    pub min: i32,
    pub sec: f64,
}

impl Dms {
    /// Checked constructor.
    ///
    /// Rejects minutes outside `0..60`, seconds outside `[0, 60)` and degrees
    /// beyond ±180. The degree bound is the longitude one; latitude's ±90 is
    /// checked by [`crate::tie_point::TiePoint::validate`].
    pub fn new(deg: i32, min: i32, sec: f64) -> Result<Self, AngleError> {
        let dms = Self { deg, min, sec };
        dms.validate()?;
        Ok(dms)
    }

    /// Check that every component is in its conventional range.
    pub fn validate(&self) -> Result<(), AngleError> {
        if !(-180..=180).contains(&self.deg) {
            return Err(AngleError::MalformedDms(format!(
                "degrees out of range: {}",
                self.deg
            )));
        }
        if !(0..60).contains(&self.min) {
            return Err(AngleError::MalformedDms(format!(
                "minutes out of range: {}",
                self.min
            )));
        }
        if !self.sec.is_finite() || !(0.0..60.0).contains(&self.sec) {
            return Err(AngleError::MalformedDms(format!(
                "seconds out of range: {}",
                self.sec
            )));
        }
        Ok(())
    }

    pub fn to_decimal_degrees(&self) -> f64 {
        to_decimal_degrees(self)
    }
}

impl From<f64> for Dms {
    fn from(dd: f64) -> Self {
        to_dms(dd)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{:02}'{:.4}\"", self.deg, self.min, self.sec)
    }
}

/// Round `value` to `places` fractional digits.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// DMS -> decimal degrees, rounded to [`DD_PRECISION`] places.
pub fn to_decimal_degrees(dms: &Dms) -> f64 {
    let dd = dms.deg as f64 + dms.min as f64 / 60.0 + dms.sec / 3600.0;
    round_to(dd, DD_PRECISION)
}

/// Decimal degrees -> DMS.
///
/// Degrees and minutes are truncated toward zero, not floored, so a negative
/// angle such as -10.25 gives `deg = -10, min = -15` rather than `deg = -11`.
/// Round-tripping is only guaranteed for non-negative angles.
pub fn to_dms(dd: f64) -> Dms {
    let deg = dd.trunc();
    let minutes = (dd - deg) * 60.0;
    let min = minutes.trunc();
    let sec = round_to((minutes - min) * 60.0, SEC_PRECISION);
    Dms {
        deg: deg as i32,
        min: min as i32,
        sec,
    }
}

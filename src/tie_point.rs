use serde::{Deserialize, Serialize};

use crate::angle::{to_decimal_degrees, Dms};
use crate::error::AngleError;
use crate::point::{CartesianPoint, GeoPoint};

/// A survey monument known in both the local grid and geographic coordinates.
///
/// `k_longitude` and `k_latitude` are grid units per arc-second along each
/// axis; they are supplied with the monument, never derived.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TiePoint {
    pub name: String,
    pub easting: f64,
    pub northing: f64,
    pub latitude: Dms,
    pub longitude: Dms,
    pub k_latitude: f64,
    pub k_longitude: f64,
}

impl TiePoint {
    /// Grid position (easting, northing).
    pub fn grid(&self) -> CartesianPoint {
        CartesianPoint::new(self.easting, self.northing)
    }

    /// Geographic position in decimal degrees.
    pub fn geo(&self) -> GeoPoint {
        GeoPoint::new(
            to_decimal_degrees(&self.longitude),
            to_decimal_degrees(&self.latitude),
        )
    }

    /// Check both DMS angles. Latitude must also lie within ±90°.
    pub fn validate(&self) -> Result<(), AngleError> {
        self.latitude.validate()?;
        self.longitude.validate()?;
        let lat = to_decimal_degrees(&self.latitude);
        if lat.abs() > 90.0 {
            return Err(AngleError::MalformedDms(format!(
                "latitude out of range: {}",
                self.latitude
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample() -> TiePoint {
    TiePoint {
        name: "BLLM 1".to_string(),
        easting: 500_000.0,
        northing: 500_000.0,
        latitude: Dms {
            deg: 10,
            min: 0,
            sec: 0.0,
        },
        longitude: Dms {
            deg: 123,
            min: 30,
            sec: 0.0,
        },
        k_latitude: 1.0,
        k_longitude: 1.0,
    }
}

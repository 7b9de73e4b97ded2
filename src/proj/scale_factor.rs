//! Linear scale-factor projection around a tie point.
//!
//! inverse: λ = λ₀ + (x - x₀) / (3600·kλ),  φ = φ₀ + (y - y₀) / (3600·kφ)
//! forward: x = x₀ + (λ - λ₀)·3600·kλ,       y = y₀ + (φ - φ₀)·3600·kφ
//!
//! Flat-earth approximation, only meaningful over a single parcel. Inverse
//! results are rounded to 7 decimal places.

use crate::angle::{round_to, DD_PRECISION};
use crate::error::ProjError;
use crate::log::warn;
use crate::point::{CartesianPoint, GeoPoint};
use crate::proj::GridProjection;
use crate::tie_point::TiePoint;

const ARC_SECONDS_PER_DEGREE: f64 = 3600.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactorGrid {
    origin: GeoPoint,
    reference: CartesianPoint,
    k_lon: f64,
    k_lat: f64,
}

impl ScaleFactorGrid {
    /// `origin` and `reference` are the same monument in geographic and grid
    /// coordinates. Zero or non-finite scale factors are rejected.
    pub fn new(
        origin: GeoPoint,
        reference: CartesianPoint,
        k_lon: f64,
        k_lat: f64,
    ) -> Result<Self, ProjError> {
        check_scale_factor("k_longitude", k_lon)?;
        check_scale_factor("k_latitude", k_lat)?;
        Ok(Self {
            origin,
            reference,
            k_lon,
            k_lat,
        })
    }

    pub fn from_tie_point(tie_point: &TiePoint) -> Result<Self, ProjError> {
        Self::new(
            tie_point.geo(),
            tie_point.grid(),
            tie_point.k_longitude,
            tie_point.k_latitude,
        )
    }

    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    pub fn reference(&self) -> CartesianPoint {
        self.reference
    }
}

fn check_scale_factor(name: &str, k: f64) -> Result<(), ProjError> {
    if k == 0.0 || !k.is_finite() {
        warn!("rejecting scale factor {name}={k}");
        return Err(ProjError::InvalidScaleFactor(format!(
            "{name} must be finite and non-zero, got {k}"
        )));
    }
    Ok(())
}

impl GridProjection for ScaleFactorGrid {
    fn forward(&self, geo: GeoPoint) -> Result<CartesianPoint, ProjError> {
        let x = self.reference.x
            + (geo.longitude - self.origin.longitude) * ARC_SECONDS_PER_DEGREE * self.k_lon;
        let y = self.reference.y
            + (geo.latitude - self.origin.latitude) * ARC_SECONDS_PER_DEGREE * self.k_lat;
        Ok(CartesianPoint::new(x, y))
    }

    fn inverse(&self, point: CartesianPoint) -> Result<GeoPoint, ProjError> {
        let lon = self.origin.longitude
            + (point.x - self.reference.x) / (ARC_SECONDS_PER_DEGREE * self.k_lon);
        let lat = self.origin.latitude
            + (point.y - self.reference.y) / (ARC_SECONDS_PER_DEGREE * self.k_lat);
        Ok(GeoPoint::new(
            round_to(lon, DD_PRECISION),
            round_to(lat, DD_PRECISION),
        ))
    }
}

/// Back-project one grid point to decimal degrees relative to `tie_point`.
///
/// `reference` is the tie point's grid position; it is passed separately so a
/// caller can project against a fixed reference while walking a traverse.
pub fn project(
    tie_point: &TiePoint,
    reference: CartesianPoint,
    k_lon: f64,
    k_lat: f64,
    point: CartesianPoint,
) -> Result<GeoPoint, ProjError> {
    ScaleFactorGrid::new(tie_point.geo(), reference, k_lon, k_lat)?.inverse(point)
}

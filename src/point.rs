//! Coordinate types shared by the resolver, the projector and the calculator.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A local grid coordinate (easting, northing) or a delta between two of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
}

impl CartesianPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length when the point is read as a delta.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for CartesianPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for CartesianPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<CartesianPoint> for (f64, f64) {
    fn from(p: CartesianPoint) -> Self {
        (p.x, p.y)
    }
}

/// Geographic coordinate in decimal degrees, longitude first.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(p: GeoPoint) -> Self {
        (p.longitude, p.latitude)
    }
}

/// Geographic coordinate in decimal degrees, latitude first.
///
/// Same numbers as [`GeoPoint`] in the axis order web map libraries expect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeoPoint> for MapPoint {
    fn from(p: GeoPoint) -> Self {
        Self {
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }
}

impl From<MapPoint> for (f64, f64) {
    fn from(p: MapPoint) -> Self {
        (p.latitude, p.longitude)
    }
}

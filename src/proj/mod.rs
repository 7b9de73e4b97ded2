pub mod scale_factor;

use crate::error::ProjError;
use crate::point::{CartesianPoint, GeoPoint};

/// Mapping between a local grid and geographic decimal degrees.
pub trait GridProjection: Send + Sync {
    /// Forward: geographic (lon, lat) -> grid (x, y)
    fn forward(&self, geo: GeoPoint) -> Result<CartesianPoint, ProjError>;

    /// Inverse: grid (x, y) -> geographic (lon, lat)
    fn inverse(&self, point: CartesianPoint) -> Result<GeoPoint, ProjError>;

    /// Batch forward transform.
    fn forward_batch(&self, coords: &[GeoPoint]) -> Result<Vec<CartesianPoint>, ProjError> {
        coords.iter().map(|&g| self.forward(g)).collect()
    }

    /// Batch inverse transform.
    fn inverse_batch(&self, coords: &[CartesianPoint]) -> Result<Vec<GeoPoint>, ProjError> {
        coords.iter().map(|&p| self.inverse(p)).collect()
    }
}

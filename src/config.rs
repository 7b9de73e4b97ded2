//! JSON records for tie points and traverse lines.
//!
//! Tie points are stored as a list of
//! `{name, easting, northing, latitude, longitude, k_latitude, k_longitude}`
//! objects with `{deg, min, sec}` angles. Traverse lines use the
//! `{ns, deg, min, ew, dist}` record shape.

use crate::error::BoundaryError;
use crate::tie_point::TiePoint;
use crate::traverse::{LineRecord, TraverseLine};

/// Decode a JSON list of tie points, rejecting malformed angles.
pub fn load_tie_points(json: &str) -> Result<Vec<TiePoint>, BoundaryError> {
    let points: Vec<TiePoint> = serde_json::from_str(json)?;
    for tp in &points {
        tp.validate()?;
    }
    Ok(points)
}

/// Encode tie points as pretty-printed JSON.
pub fn tie_points_to_json(points: &[TiePoint]) -> Result<String, BoundaryError> {
    Ok(serde_json::to_string_pretty(points)?)
}

pub fn find_tie_point<'a>(points: &'a [TiePoint], name: &str) -> Option<&'a TiePoint> {
    points.iter().find(|tp| tp.name == name)
}

/// Decode a JSON list of traverse line records.
///
/// A record with an unknown direction code fails with its index.
pub fn load_traverse(json: &str) -> Result<Vec<TraverseLine>, BoundaryError> {
    let records: Vec<LineRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, r)| {
            TraverseLine::try_from(r).map_err(|source| BoundaryError::Line { index, source })
        })
        .collect()
}

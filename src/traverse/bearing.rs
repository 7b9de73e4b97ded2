//! Bearing resolver: one traverse line to a local grid delta.
//!
//! Quadrant bearings are measured from the N/S axis toward E/W:
//!   Δx = ±d·sin(θ)   (+ toward E)
//!   Δy = ±d·cos(θ)   (+ toward N)
//! with θ = deg + min/60 in radians.

use crate::point::CartesianPoint;
use crate::traverse::{Cardinal, TraverseLine};

/// Resolve a traverse line into a (Δx, Δy) delta.
pub fn resolve(line: &TraverseLine) -> CartesianPoint {
    match *line {
        TraverseLine::Cardinal {
            direction,
            distance,
        } => match direction {
            Cardinal::DueNorth => CartesianPoint::new(0.0, distance),
            Cardinal::DueSouth => CartesianPoint::new(0.0, -distance),
            Cardinal::DueEast => CartesianPoint::new(distance, 0.0),
            Cardinal::DueWest => CartesianPoint::new(-distance, 0.0),
        },
        TraverseLine::Bearing {
            ns,
            deg,
            min,
            ew,
            distance,
        } => {
            let angle = (deg as f64 + min / 60.0).to_radians();
            CartesianPoint::new(
                ew.sign() * distance * angle.sin(),
                ns.sign() * distance * angle.cos(),
            )
        }
    }
}

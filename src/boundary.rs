//! Boundary calculator: walks a traverse from its tie point and back-projects
//! every corner.

use rayon::prelude::*;

use crate::error::BoundaryError;
use crate::log::debug;
use crate::point::{CartesianPoint, GeoPoint, MapPoint};
use crate::proj::scale_factor::ScaleFactorGrid;
use crate::proj::GridProjection;
use crate::tie_point::TiePoint;
use crate::traverse::bearing;
use crate::traverse::TraverseLine;

/// Knobs for [`calculate_boundary_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundaryOptions {
    /// Prepend the tie point to every output sequence so the tie line is drawn.
    pub include_tie_point: bool,
    /// Grid-unit shift applied to the geographic outputs only.
    pub adjustment: CartesianPoint,
}

/// Corners of a traverse in grid, geographic and map axis order.
///
/// The three sequences are index-aligned. Without
/// [`BoundaryOptions::include_tie_point`] point `i` is the end of line `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Boundary {
    pub cartesian: Vec<CartesianPoint>,
    pub geographic: Vec<GeoPoint>,
    pub map: Vec<MapPoint>,
    origin: CartesianPoint,
    line_count: usize,
    perimeter: f64,
}

/// Misclosure of the last corner against the tie point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Closure {
    pub dx: f64,
    pub dy: f64,
    pub linear_error: f64,
    /// Sum of traverse distances.
    pub perimeter: f64,
    /// `perimeter / linear_error`, as in "1 in 5000". `None` when the traverse
    /// closes exactly.
    pub precision: Option<f64>,
}

impl Boundary {
    pub fn len(&self) -> usize {
        self.cartesian.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cartesian.is_empty()
    }

    pub fn into_parts(self) -> (Vec<CartesianPoint>, Vec<GeoPoint>, Vec<MapPoint>) {
        (self.cartesian, self.geographic, self.map)
    }

    /// Closure error of the traverse, or `None` when it has no lines.
    ///
    /// Only reported; nothing is adjusted.
    pub fn closure(&self) -> Option<Closure> {
        if self.line_count == 0 {
            return None;
        }
        let last = *self.cartesian.last()?;
        let miss = last - self.origin;
        let linear_error = miss.length();
        let precision = (linear_error > 0.0).then(|| self.perimeter / linear_error);
        Some(Closure {
            dx: miss.x,
            dy: miss.y,
            linear_error,
            perimeter: self.perimeter,
            precision,
        })
    }
}

/// Compute the boundary of `lines` starting at `tie_point`.
pub fn calculate_boundary(
    tie_point: &TiePoint,
    lines: &[TraverseLine],
) -> Result<Boundary, BoundaryError> {
    calculate_boundary_with(tie_point, lines, &BoundaryOptions::default())
}

/// Compute the boundary of `lines` starting at `tie_point`.
///
/// Grid corners accumulate along the traverse; geographic corners are
/// projected against the tie point's own grid position, not the previous
/// corner. The traverse is never closed automatically.
pub fn calculate_boundary_with(
    tie_point: &TiePoint,
    lines: &[TraverseLine],
    options: &BoundaryOptions,
) -> Result<Boundary, BoundaryError> {
    let grid = ScaleFactorGrid::from_tie_point(tie_point)?;
    let origin = tie_point.grid();

    debug!(
        "calculating boundary from tie point {:?}: {} lines",
        tie_point.name,
        lines.len()
    );

    let mut cartesian = Vec::with_capacity(lines.len() + 1);
    if options.include_tie_point {
        cartesian.push(origin);
    }

    let mut cursor = origin;
    let mut perimeter = 0.0;
    for line in lines {
        cursor = cursor + bearing::resolve(line);
        perimeter += line.distance();
        cartesian.push(cursor);
    }

    let geographic = cartesian
        .iter()
        .map(|&p| grid.inverse(p + options.adjustment))
        .collect::<Result<Vec<_>, _>>()?;
    let map = geographic.iter().map(|&g| MapPoint::from(g)).collect();

    Ok(Boundary {
        cartesian,
        geographic,
        map,
        origin,
        line_count: lines.len(),
        perimeter,
    })
}

/// Compute several parcels tied to the same monument in parallel.
///
/// Results keep the input order. If any parcel fails, the error of the
/// earliest failing parcel is returned.
pub fn calculate_boundaries<P>(
    tie_point: &TiePoint,
    parcels: &[P],
    options: &BoundaryOptions,
) -> Result<Vec<Boundary>, BoundaryError>
where
    P: AsRef<[TraverseLine]> + Sync,
{
    let results: Vec<Result<Boundary, BoundaryError>> = parcels
        .par_iter()
        .map(|lines| calculate_boundary_with(tie_point, lines.as_ref(), options))
        .collect();
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjError;
    use crate::tie_point::sample;
    use crate::traverse::{Cardinal, EastWest, NorthSouth};
    use approx::assert_relative_eq;

    fn square_lot() -> Vec<TraverseLine> {
        vec![
            TraverseLine::cardinal(Cardinal::DueNorth, 10.0),
            TraverseLine::cardinal(Cardinal::DueEast, 10.0),
            TraverseLine::cardinal(Cardinal::DueSouth, 10.0),
            TraverseLine::cardinal(Cardinal::DueWest, 10.0),
        ]
    }

    #[test]
    fn test_single_bearing_line() {
        let tp = sample();
        let lines = [TraverseLine::bearing(NorthSouth::N, 45, 0.0, EastWest::E, 100.0)];
        let b = calculate_boundary(&tp, &lines).unwrap();

        assert_eq!(b.len(), 1);
        assert_relative_eq!(b.cartesian[0].x, 500_070.71, epsilon = 1e-2);
        assert_relative_eq!(b.cartesian[0].y, 500_070.71, epsilon = 1e-2);
        assert_relative_eq!(b.geographic[0].longitude, 123.5197, epsilon = 1e-4);
        assert_relative_eq!(b.geographic[0].latitude, 10.0197, epsilon = 1e-4);
    }

    #[test]
    fn test_due_north_keeps_longitude() {
        let tp = sample();
        let lines = [TraverseLine::cardinal(Cardinal::DueNorth, 50.0)];
        let b = calculate_boundary(&tp, &lines).unwrap();

        assert_eq!(b.cartesian[0], CartesianPoint::new(500_000.0, 500_050.0));
        assert_eq!(b.geographic[0].longitude, 123.5);
        assert_relative_eq!(b.geographic[0].latitude, 10.013_888_9, epsilon = 1e-7);
    }

    #[test]
    fn test_outputs_index_aligned() {
        let tp = sample();
        let mut lines = square_lot();
        lines.push(TraverseLine::bearing(NorthSouth::S, 12, 30.0, EastWest::W, 7.5));
        let b = calculate_boundary(&tp, &lines).unwrap();

        assert_eq!(b.cartesian.len(), lines.len());
        assert_eq!(b.geographic.len(), lines.len());
        assert_eq!(b.map.len(), lines.len());
        for (g, m) in b.geographic.iter().zip(&b.map) {
            assert_eq!((m.latitude, m.longitude), (g.latitude, g.longitude));
        }
    }

    #[test]
    fn test_cursor_accumulates() {
        let tp = sample();
        let b = calculate_boundary(&tp, &square_lot()).unwrap();
        let expected = [
            (500_000.0, 500_010.0),
            (500_010.0, 500_010.0),
            (500_010.0, 500_000.0),
            (500_000.0, 500_000.0),
        ];
        for (p, (x, y)) in b.cartesian.iter().zip(expected) {
            assert_eq!(*p, CartesianPoint::new(x, y));
        }
        // last corner lands back on the tie point
        assert_eq!(b.geographic[3], tp.geo());
    }

    #[test]
    fn test_idempotent() {
        let tp = sample();
        let lines = [
            TraverseLine::bearing(NorthSouth::N, 12, 17.0, EastWest::W, 33.3),
            TraverseLine::bearing(NorthSouth::S, 81, 2.5, EastWest::E, 101.01),
        ];
        let a = calculate_boundary(&tp, &lines).unwrap();
        let b = calculate_boundary(&tp, &lines).unwrap();
        for (p, q) in a.cartesian.iter().zip(&b.cartesian) {
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_traverse() {
        let b = calculate_boundary(&sample(), &[]).unwrap();
        assert!(b.is_empty());
        assert!(b.closure().is_none());
    }

    #[test]
    fn test_zero_scale_factor_aborts() {
        let mut tp = sample();
        tp.k_latitude = 0.0;
        let err = calculate_boundary(&tp, &square_lot()).unwrap_err();
        assert!(matches!(
            err,
            BoundaryError::Projection(ProjError::InvalidScaleFactor(_))
        ));
    }

    #[test]
    fn test_include_tie_point() {
        let tp = sample();
        let options = BoundaryOptions {
            include_tie_point: true,
            ..Default::default()
        };
        let b = calculate_boundary_with(&tp, &square_lot(), &options).unwrap();
        assert_eq!(b.len(), 5);
        assert_eq!(b.cartesian[0], tp.grid());
        assert_eq!(b.geographic[0], tp.geo());
        assert_eq!(b.map[0], MapPoint::from(tp.geo()));
        assert_eq!(b.cartesian[1], CartesianPoint::new(500_000.0, 500_010.0));
    }

    #[test]
    fn test_adjustment_shifts_geographic_only() {
        let tp = sample();
        let lines = [TraverseLine::cardinal(Cardinal::DueNorth, 50.0)];
        let options = BoundaryOptions {
            adjustment: CartesianPoint::new(36.0, -36.0),
            ..Default::default()
        };
        let plain = calculate_boundary(&tp, &lines).unwrap();
        let shifted = calculate_boundary_with(&tp, &lines, &options).unwrap();

        assert_eq!(plain.cartesian, shifted.cartesian);
        assert_relative_eq!(shifted.geographic[0].longitude, 123.51, epsilon = 1e-7);
        assert_relative_eq!(
            shifted.geographic[0].latitude,
            plain.geographic[0].latitude - 0.01,
            epsilon = 1e-7
        );
    }

    #[test]
    fn test_closed_traverse() {
        let b = calculate_boundary(&sample(), &square_lot()).unwrap();
        let c = b.closure().unwrap();
        assert_eq!(c.linear_error, 0.0);
        assert_eq!(c.perimeter, 40.0);
        assert!(c.precision.is_none());
    }

    #[test]
    fn test_misclosure() {
        let lines = [
            TraverseLine::cardinal(Cardinal::DueEast, 100.0),
            TraverseLine::cardinal(Cardinal::DueWest, 99.0),
        ];
        let b = calculate_boundary(&sample(), &lines).unwrap();
        let c = b.closure().unwrap();
        assert_relative_eq!(c.dx, 1.0, epsilon = 1e-9);
        assert_relative_eq!(c.dy, 0.0);
        assert_relative_eq!(c.linear_error, 1.0, epsilon = 1e-9);
        assert_relative_eq!(c.precision.unwrap(), 199.0, epsilon = 1e-6);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let tp = sample();
        let parcels: Vec<Vec<TraverseLine>> = (1..=8)
            .map(|i| {
                vec![
                    TraverseLine::bearing(NorthSouth::N, 10 * i, 0.0, EastWest::E, 20.0),
                    TraverseLine::cardinal(Cardinal::DueSouth, i as f64),
                ]
            })
            .collect();
        let options = BoundaryOptions::default();
        let all = calculate_boundaries(&tp, &parcels, &options).unwrap();
        assert_eq!(all.len(), parcels.len());
        for (b, lines) in all.iter().zip(&parcels) {
            assert_eq!(*b, calculate_boundary(&tp, lines).unwrap());
        }
    }

    #[test]
    fn test_parallel_propagates_error() {
        let mut tp = sample();
        tp.k_longitude = 0.0;
        let parcels = vec![square_lot(), square_lot()];
        assert!(calculate_boundaries(&tp, &parcels, &BoundaryOptions::default()).is_err());
    }
}

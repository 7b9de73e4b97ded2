//! PyO3 binding for calculate_boundary.

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::angle::Dms;
use crate::boundary::{self, BoundaryOptions};
use crate::error::BoundaryError;
use crate::point::CartesianPoint;
use crate::tie_point::TiePoint;
use crate::traverse::TraverseLine;

fn required<'py, T: FromPyObject<'py>>(d: &Bound<'py, PyDict>, key: &str) -> PyResult<T> {
    d.get_item(key)?
        .ok_or_else(|| PyKeyError::new_err(format!("missing key '{key}'")))?
        .extract()
}

fn optional<'py, T: FromPyObject<'py> + Default>(
    d: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<T> {
    match d.get_item(key)? {
        Some(v) if !v.is_none() => v.extract(),
        _ => Ok(T::default()),
    }
}

fn extract_dms(d: &Bound<'_, PyDict>) -> PyResult<Dms> {
    Ok(Dms {
        deg: required(d, "deg")?,
        min: required(d, "min")?,
        sec: required(d, "sec")?,
    })
}

fn extract_tie_point(d: &Bound<'_, PyDict>) -> PyResult<TiePoint> {
    let latitude: Bound<'_, PyDict> = required(d, "latitude")?;
    let longitude: Bound<'_, PyDict> = required(d, "longitude")?;
    Ok(TiePoint {
        name: optional(d, "name")?,
        easting: required(d, "easting")?,
        northing: required(d, "northing")?,
        latitude: extract_dms(&latitude)?,
        longitude: extract_dms(&longitude)?,
        k_latitude: required(d, "k_latitude")?,
        k_longitude: required(d, "k_longitude")?,
    })
}

fn extract_line(index: usize, d: &Bound<'_, PyDict>) -> PyResult<TraverseLine> {
    let ns: String = required(d, "ns")?;
    let ew: String = optional(d, "ew")?;
    TraverseLine::from_codes(
        &ns,
        optional(d, "deg")?,
        optional(d, "min")?,
        &ew,
        required(d, "dist")?,
    )
    .map_err(|source| {
        let err = BoundaryError::Line { index, source };
        PyValueError::new_err(err.to_string())
    })
}

/// Compute the boundary of a technical description.
///
/// Args:
///     tie_point: Dict with name, easting, northing, latitude, longitude
///         ({deg, min, sec} dicts), k_latitude and k_longitude.
///     lines: List of {ns, deg, min, ew, dist} dicts. Due lines use
///         ns = "DN", "DS", "DE" or "DW" and may omit deg, min and ew.
///     include_tie_point: Prepend the tie point to every output list.
///     x_adjustment: Easting shift applied to the geographic outputs.
///     y_adjustment: Northing shift applied to the geographic outputs.
///
/// Returns:
///     Tuple of (points, geographic, map) lists of coordinate pairs:
///     (easting, northing), (longitude, latitude) and (latitude, longitude).
#[pyfunction]
#[pyo3(signature = (tie_point, lines, include_tie_point=false, x_adjustment=0.0, y_adjustment=0.0))]
#[allow(clippy::type_complexity)]
pub fn calculate_boundary(
    py: Python<'_>,
    tie_point: &Bound<'_, PyDict>,
    lines: Vec<Bound<'_, PyDict>>,
    include_tie_point: bool,
    x_adjustment: f64,
    y_adjustment: f64,
) -> PyResult<(Vec<(f64, f64)>, Vec<(f64, f64)>, Vec<(f64, f64)>)> {
    let tie_point = extract_tie_point(tie_point)?;
    let lines = lines
        .iter()
        .enumerate()
        .map(|(i, d)| extract_line(i, d))
        .collect::<PyResult<Vec<_>>>()?;
    let options = BoundaryOptions {
        include_tie_point,
        adjustment: CartesianPoint::new(x_adjustment, y_adjustment),
    };

    let result = py.allow_threads(move || {
        boundary::calculate_boundary_with(&tie_point, &lines, &options)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    })?;

    let (points, geographic, map) = result.into_parts();
    Ok((
        points.into_iter().map(Into::into).collect(),
        geographic.into_iter().map(Into::into).collect(),
        map.into_iter().map(Into::into).collect(),
    ))
}

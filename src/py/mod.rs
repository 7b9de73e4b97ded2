use pyo3::prelude::*;

use crate::angle;

mod boundary;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(boundary::calculate_boundary, m)?)?;
    m.add_function(wrap_pyfunction!(dms_to_dd, m)?)?;
    m.add_function(wrap_pyfunction!(dd_to_dms, m)?)?;
    Ok(())
}

/// Convert degrees, minutes and seconds to decimal degrees (7 places).
#[pyfunction]
fn dms_to_dd(deg: i32, min: i32, sec: f64) -> f64 {
    angle::to_decimal_degrees(&angle::Dms { deg, min, sec })
}

/// Convert decimal degrees to a (deg, min, sec) tuple.
///
/// Degrees and minutes truncate toward zero.
#[pyfunction]
fn dd_to_dms(dd: f64) -> (i32, i32, f64) {
    let dms = angle::to_dms(dd);
    (dms.deg, dms.min, dms.sec)
}

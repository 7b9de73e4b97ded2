//! Plot land-survey technical descriptions.
//!
//! A technical description is a list of bearing-and-distance lines walked
//! from a tie point. [`boundary::calculate_boundary`] turns it into corner
//! coordinates on the local grid, in decimal degrees, and in the
//! latitude-first order map widgets expect.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod log;

pub mod angle;
pub mod boundary;
pub mod config;
pub mod error;
pub mod point;
pub mod proj;
pub mod tie_point;
pub mod traverse;
#[cfg(feature = "python")]
mod py;

pub use boundary::{calculate_boundary, Boundary, BoundaryOptions};
pub use error::BoundaryError;
pub use tie_point::TiePoint;
pub use traverse::TraverseLine;

/// Python extension module.
#[cfg(feature = "python")]
#[pymodule]
fn lotplot(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}

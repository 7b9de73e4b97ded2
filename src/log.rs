//! `debug!` and `warn!` for the boundary pipeline.
//!
//! Build with `--features tracing` to route them to a `tracing` subscriber
//! (scale-factor rejections, per-run line counts). In a default build every
//! call site compiles away.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};

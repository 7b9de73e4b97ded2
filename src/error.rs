use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AngleError {
    #[error("Malformed DMS angle: {0}")]
    MalformedDms(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BearingError {
    #[error("Invalid bearing: {0}")]
    InvalidBearing(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    #[error("Invalid scale factor: {0}")]
    InvalidScaleFactor(String),
}

#[derive(Error, Debug)]
pub enum BoundaryError {
    /// `index` is zero-based; the message counts lines from 1.
    #[error("Traverse line {}: {source}", .index + 1)]
    Line {
        index: usize,
        #[source]
        source: BearingError,
    },

    #[error("Projection error: {0}")]
    Projection(#[from] ProjError),

    #[error("Angle error: {0}")]
    Angle(#[from] AngleError),

    #[error("Invalid record: {0}")]
    Config(#[from] serde_json::Error),
}

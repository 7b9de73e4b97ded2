//! Traverse lines: the legs of a technical description.

pub mod bearing;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BearingError;

/// Axis a due-cardinal line runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cardinal {
    DueNorth,
    DueSouth,
    DueEast,
    DueWest,
}

impl Cardinal {
    /// Record code ("DN", "DS", "DE", "DW").
    pub fn code(&self) -> &'static str {
        match self {
            Self::DueNorth => "DN",
            Self::DueSouth => "DS",
            Self::DueEast => "DE",
            Self::DueWest => "DW",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DueNorth => "Due North",
            Self::DueSouth => "Due South",
            Self::DueEast => "Due East",
            Self::DueWest => "Due West",
        }
    }
}

impl FromStr for Cardinal {
    type Err = BearingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DN" => Ok(Self::DueNorth),
            "DS" => Ok(Self::DueSouth),
            "DE" => Ok(Self::DueEast),
            "DW" => Ok(Self::DueWest),
            other => Err(BearingError::InvalidBearing(format!(
                "unknown cardinal direction '{other}'"
            ))),
        }
    }
}

/// Reference meridian direction a quadrant bearing is measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NorthSouth {
    N,
    S,
}

impl NorthSouth {
    /// Sign of the northing delta.
    pub fn sign(&self) -> f64 {
        match self {
            Self::N => 1.0,
            Self::S => -1.0,
        }
    }
}

impl FromStr for NorthSouth {
    type Err = BearingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "N" => Ok(Self::N),
            "S" => Ok(Self::S),
            other => Err(BearingError::InvalidBearing(format!(
                "expected N or S, got '{other}'"
            ))),
        }
    }
}

/// Direction a quadrant bearing turns toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EastWest {
    E,
    W,
}

impl EastWest {
    /// Sign of the easting delta.
    pub fn sign(&self) -> f64 {
        match self {
            Self::E => 1.0,
            Self::W => -1.0,
        }
    }
}

impl FromStr for EastWest {
    type Err = BearingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "E" => Ok(Self::E),
            "W" => Ok(Self::W),
            other => Err(BearingError::InvalidBearing(format!(
                "expected E or W, got '{other}'"
            ))),
        }
    }
}

/// One leg of a traverse.
///
/// Ranges (`deg` in 0..=90, `min` in [0, 60), non-negative distance) are the
/// caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LineRecord", into = "LineRecord")]
pub enum TraverseLine {
    Cardinal {
        direction: Cardinal,
        distance: f64,
    },
    Bearing {
        ns: NorthSouth,
        deg: u32,
        min: f64,
        ew: EastWest,
        distance: f64,
    },
}

impl TraverseLine {
    pub fn cardinal(direction: Cardinal, distance: f64) -> Self {
        Self::Cardinal {
            direction,
            distance,
        }
    }

    pub fn bearing(ns: NorthSouth, deg: u32, min: f64, ew: EastWest, distance: f64) -> Self {
        Self::Bearing {
            ns,
            deg,
            min,
            ew,
            distance,
        }
    }

    /// Build a line from its record codes.
    ///
    /// `ns` is one of N, S, DN, DS, DE, DW (case-insensitive). For the due
    /// codes `deg`, `min` and `ew` are ignored.
    pub fn from_codes(
        ns: &str,
        deg: u32,
        min: f64,
        ew: &str,
        distance: f64,
    ) -> Result<Self, BearingError> {
        if let Ok(direction) = ns.parse::<Cardinal>() {
            return Ok(Self::cardinal(direction, distance));
        }
        let ns = ns.parse::<NorthSouth>()?;
        let ew = ew.parse::<EastWest>()?;
        Ok(Self::bearing(ns, deg, min, ew, distance))
    }

    pub fn distance(&self) -> f64 {
        match *self {
            Self::Cardinal { distance, .. } | Self::Bearing { distance, .. } => distance,
        }
    }
}

impl fmt::Display for TraverseLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cardinal {
                direction,
                distance,
            } => write!(f, "{}, {:.2}", direction.name(), distance),
            Self::Bearing {
                ns,
                deg,
                min,
                ew,
                distance,
            } => write!(f, "{ns:?} {deg:02}-{min:02} {ew:?}, {distance:.2}"),
        }
    }
}

/// Flat record form of a [`TraverseLine`]: `{ns, deg, min, ew, dist}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub ns: String,
    #[serde(default)]
    pub deg: u32,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub ew: String,
    pub dist: f64,
}

impl TryFrom<LineRecord> for TraverseLine {
    type Error = BearingError;

    fn try_from(r: LineRecord) -> Result<Self, Self::Error> {
        Self::from_codes(&r.ns, r.deg, r.min, &r.ew, r.dist)
    }
}

impl From<TraverseLine> for LineRecord {
    fn from(line: TraverseLine) -> Self {
        match line {
            TraverseLine::Cardinal {
                direction,
                distance,
            } => Self {
                ns: direction.code().to_string(),
                deg: 0,
                min: 0.0,
                ew: String::new(),
                dist: distance,
            },
            TraverseLine::Bearing {
                ns,
                deg,
                min,
                ew,
                distance,
            } => Self {
                ns: format!("{ns:?}"),
                deg,
                min,
                ew: format!("{ew:?}"),
                dist: distance,
            },
        }
    }
}

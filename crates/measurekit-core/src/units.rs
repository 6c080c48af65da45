//! Distance unit handling
//!
//! Geodesic distances are computed in meters and converted to the unit the
//! host selected at control construction. Supports the unit set common to
//! slippy-map distance tooling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance unit selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// Kilometers
    Kilometers,
    /// Statute miles
    Miles,
    /// Nautical miles
    NauticalMiles,
    /// Meters
    Meters,
    /// Feet
    Feet,
}

impl Default for DistanceUnit {
    fn default() -> Self {
        Self::Kilometers
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kilometers => write!(f, "km"),
            Self::Miles => write!(f, "mi"),
            Self::NauticalMiles => write!(f, "nmi"),
            Self::Meters => write!(f, "m"),
            Self::Feet => write!(f, "ft"),
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kilometers" | "kilometres" | "km" => Ok(Self::Kilometers),
            "miles" | "mi" => Ok(Self::Miles),
            "nauticalmiles" | "nautical_miles" | "nmi" => Ok(Self::NauticalMiles),
            "meters" | "metres" | "m" => Ok(Self::Meters),
            "feet" | "ft" => Ok(Self::Feet),
            _ => Err(format!("Unknown distance unit: {}", s)),
        }
    }
}

impl DistanceUnit {
    /// Meters contained in one of this unit
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            Self::Kilometers => 1_000.0,
            Self::Miles => 1_609.344,
            Self::NauticalMiles => 1_852.0,
            Self::Meters => 1.0,
            Self::Feet => 0.3048,
        }
    }

    /// Convert a raw meter distance into this unit
    pub fn from_meters(&self, meters: f64) -> f64 {
        meters / self.meters_per_unit()
    }

    /// Convert a value in this unit back to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        value * self.meters_per_unit()
    }
}

//! Well-known reference temperatures for landmark annotation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core_types::units::Temperature;

/// Fixed, named reference point on the temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Waypoint {
    /// Water freezes, 0°C
    Freezing,
    /// Human body temperature, 37°C
    Body,
    /// Water boils, 100°C
    Boiling,
}

impl Waypoint {
    /// All waypoints, coldest first
    pub const ALL: [Waypoint; 3] = [Waypoint::Freezing, Waypoint::Body, Waypoint::Boiling];

    /// The fixed temperature this waypoint stands for
    #[must_use]
    pub fn resolve(self) -> Temperature {
        match self {
            Waypoint::Freezing => Temperature::celsius(0.0),
            Waypoint::Body => Temperature::celsius(37.0),
            Waypoint::Boiling => Temperature::celsius(100.0),
        }
    }

    /// Human-readable label for annotation
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Waypoint::Freezing => "Freezing",
            Waypoint::Body => "Body Temperature",
            Waypoint::Boiling => "Boiling",
        }
    }

    /// The waypoint whose resolved value equals `value` exactly, or `None`.
    /// Comparison is exact canonical equality: a value produced by chained
    /// arithmetic that lands merely near a waypoint will not match.
    #[must_use]
    pub fn identify(value: Temperature) -> Option<Waypoint> {
        Self::ALL.into_iter().find(|w| w.resolve() == value)
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

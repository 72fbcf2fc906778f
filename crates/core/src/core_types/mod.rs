//! Core types and utilities

pub mod bands;
pub mod units;
pub mod waypoints;

pub use bands::{BandQueryError, TemperatureBand};
pub use units::{Temperature, TemperatureUnit, UnitSystem};
pub use waypoints::Waypoint;

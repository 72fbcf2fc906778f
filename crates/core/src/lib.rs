//! Thermometer Slider Core Library
//!
//! Toolkit-agnostic model for a thermometer-shaped temperature entry control.
//! Provides a unit-safe temperature value type with canonical Celsius
//! arithmetic, semantic temperature bands ("frigid" through "sweltering"),
//! well-known waypoints (freezing, body temperature, boiling), and the pure
//! track geometry that maps values to normalized slider positions and back.
//!
//! Rendering, gesture recognition and event dispatch belong to the host
//! toolkit. Everything in this crate is an immutable value computation, so a
//! front end can drive it from any coordinate or event system.

// Core types and utilities
pub mod core_types;

// Slider track geometry (value <-> normalized position)
pub mod slider;

// Re-export core types
pub use core_types::{Temperature, TemperatureUnit, UnitSystem};
pub use core_types::{BandQueryError, TemperatureBand};
pub use core_types::Waypoint;

// Re-export slider geometry
pub use slider::{SliderTrack, TrackError};

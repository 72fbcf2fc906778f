//! Pure slider-track geometry
//!
//! Maps temperatures to normalized track positions and back, lays out tick
//! marks and waypoint markers. Positions run 0.0 at the track's low end to
//! 1.0 at its high end; a vertical thermometer rendering simply inverts the
//! axis. Nothing here touches a rendering or event API, so any host
//! toolkit's own coordinate and gesture machinery can drive it.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::core_types::{BandQueryError, Temperature, TemperatureBand, TemperatureUnit, Waypoint};

/// The value range of a slider, with the display unit it was authored in
///
/// Mapping runs on canonical magnitudes, so the track bounds and the values
/// being mapped may carry different units.
///
/// # Example
/// ```
/// use thermo_slider_core::{SliderTrack, Temperature};
///
/// let track = SliderTrack::new(Temperature::celsius(0.0), Temperature::celsius(40.0))?;
/// assert!((track.position_of(Temperature::celsius(10.0)) - 0.25).abs() < 1e-12);
/// assert_eq!(track.value_at(0.5), Temperature::celsius(20.0));
/// # Ok::<(), thermo_slider_core::TrackError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderTrack {
    low: Temperature,
    high: Temperature,
}

impl SliderTrack {
    /// Create a track spanning `low..high`.
    ///
    /// # Errors
    /// Returns [`TrackError::EmptyRange`] unless `low` is strictly below
    /// `high` on the canonical scale.
    pub fn new(low: Temperature, high: Temperature) -> Result<Self, TrackError> {
        if low.as_celsius() < high.as_celsius() {
            Ok(SliderTrack { low, high })
        } else {
            Err(TrackError::EmptyRange { low, high })
        }
    }

    /// Low end of the track
    #[must_use]
    pub fn low(self) -> Temperature {
        self.low
    }

    /// High end of the track
    #[must_use]
    pub fn high(self) -> Temperature {
        self.high
    }

    /// Display unit the track was authored in; values coming back out of the
    /// track carry this unit
    #[must_use]
    pub fn unit(self) -> TemperatureUnit {
        self.low.unit()
    }

    /// Track span in canonical degrees; strictly positive by construction
    #[must_use]
    pub fn span(self) -> f64 {
        self.high.as_celsius() - self.low.as_celsius()
    }

    /// Normalized position of a value on the track, clamped to [0, 1]
    #[must_use]
    pub fn position_of(self, value: Temperature) -> f64 {
        let raw = (value.as_celsius() - self.low.as_celsius()) / self.span();
        if !(0.0..=1.0).contains(&raw) {
            debug!(%value, position = raw, "value off track, clamping");
        }
        raw.clamp(0.0, 1.0)
    }

    /// The temperature at a normalized position, in the track's display
    /// unit. Positions outside [0, 1] (a drag past either end) clamp to the
    /// nearest end.
    #[must_use]
    pub fn value_at(self, position: f64) -> Temperature {
        let t = position.clamp(0.0, 1.0);
        let celsius = self.low.as_celsius() + t * self.span();
        Temperature::celsius(celsius).to_unit(self.unit())
    }

    /// The nearest in-track temperature, in the track's display unit
    #[must_use]
    pub fn clamp(self, value: Temperature) -> Temperature {
        value.clamp(self.low, self.high).to_unit(self.unit())
    }

    /// Hash-mark layout: normalized positions of every multiple of
    /// `interval` (in the track's display unit) that falls on the track.
    /// Non-positive or non-finite intervals yield no marks.
    #[must_use]
    pub fn tick_positions(self, interval: f64) -> Vec<f64> {
        if interval <= 0.0 || !interval.is_finite() {
            return Vec::new();
        }
        let unit = self.unit();
        let low = self.low.in_unit(unit);
        let high = self.high.in_unit(unit);
        // Slack absorbs round-off at the tube ends so boundary marks survive
        // unit round-trips
        let slack = (high - low) * 1e-9;
        let first = ((low - slack) / interval).ceil() as i64;
        let last = ((high + slack) / interval).floor() as i64;
        (first..=last)
            .map(|k| self.position_of(Temperature::new(k as f64 * interval, unit)))
            .collect()
    }

    /// Waypoints falling on the track, with their normalized positions,
    /// coldest first
    #[must_use]
    pub fn waypoint_markers(self) -> Vec<(f64, Waypoint)> {
        Waypoint::ALL
            .into_iter()
            .filter(|w| {
                let t = w.resolve();
                self.low <= t && t <= self.high
            })
            .map(|w| (self.position_of(w.resolve()), w))
            .collect()
    }

    /// Band containing the temperature at a normalized position, for fill
    /// coloring
    ///
    /// # Errors
    /// A Kelvin-authored track has no band table and yields
    /// [`BandQueryError::KelvinUnsupported`].
    pub fn band_at(self, position: f64) -> Result<Option<TemperatureBand>, BandQueryError> {
        TemperatureBand::classify(self.value_at(position))
    }
}

/// Errors raised when constructing a slider track
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackError {
    /// Low bound is not strictly below the high bound
    EmptyRange {
        /// Offending low bound
        low: Temperature,
        /// Offending high bound
        high: Temperature,
    },
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::EmptyRange { low, high } => {
                write!(f, "empty slider range: {low} is not below {high}")
            }
        }
    }
}

impl std::error::Error for TrackError {}

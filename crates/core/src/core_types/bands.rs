//! Semantic temperature bands ("frigid" through "sweltering")
//!
//! Each band is a closed interval of magnitudes, authored separately for
//! the metric and imperial tables. The tables are NOT conversions of one
//! another: metric frigid \[-15, 0\] °C converts to \[5, 32\] °F, but the
//! imperial table defines frigid as \[10, 30\] °F. Both tables ship as
//! authored; reconciling them is a product decision.
//!
//! Adjacent bands share their boundary magnitude and containment is
//! inclusive on both ends, so a value exactly on a shared boundary sits in
//! both neighbours. [`TemperatureBand::classify`] resolves the tie by
//! returning the first match in [`TemperatureBand::ALL`] order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core_types::units::{Temperature, TemperatureUnit, UnitSystem};

/// Named temperature range, ordered coldest to hottest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureBand {
    /// Well below freezing
    Frigid,
    /// Around and just above freezing
    Cold,
    /// Chilly to mild
    Chilly,
    /// Mild to warm
    Warm,
    /// Hot
    Hot,
    /// Oppressively hot
    Sweltering,
}

impl TemperatureBand {
    /// All bands in classification order. [`TemperatureBand::classify`]
    /// walks this array, which is what makes shared-boundary values resolve
    /// to the lower band.
    pub const ALL: [TemperatureBand; 6] = [
        TemperatureBand::Frigid,
        TemperatureBand::Cold,
        TemperatureBand::Chilly,
        TemperatureBand::Warm,
        TemperatureBand::Hot,
        TemperatureBand::Sweltering,
    ];

    /// Closed `(min, max)` interval for this band in the given unit system.
    /// Infallible; both tables cover every band.
    #[must_use]
    pub fn bounds_in(self, system: UnitSystem) -> (f64, f64) {
        match system {
            UnitSystem::Metric => match self {
                TemperatureBand::Frigid => (-15.0, 0.0),
                TemperatureBand::Cold => (0.0, 10.0),
                TemperatureBand::Chilly => (10.0, 16.0),
                TemperatureBand::Warm => (16.0, 24.0),
                TemperatureBand::Hot => (24.0, 32.0),
                TemperatureBand::Sweltering => (32.0, 43.0),
            },
            UnitSystem::Imperial => match self {
                TemperatureBand::Frigid => (10.0, 30.0),
                TemperatureBand::Cold => (30.0, 50.0),
                TemperatureBand::Chilly => (50.0, 61.0),
                TemperatureBand::Warm => (61.0, 75.0),
                TemperatureBand::Hot => (75.0, 90.0),
                TemperatureBand::Sweltering => (90.0, 110.0),
            },
        }
    }

    /// Closed `(min, max)` interval for this band in the given unit.
    ///
    /// # Errors
    /// Kelvin magnitudes have no band table and yield
    /// [`BandQueryError::KelvinUnsupported`].
    pub fn bounds(self, unit: TemperatureUnit) -> Result<(f64, f64), BandQueryError> {
        match unit.system() {
            Some(system) => Ok(self.bounds_in(system)),
            None => Err(BandQueryError::KelvinUnsupported),
        }
    }

    /// Arithmetic mean of the band's bounds, as a temperature carrying `unit`
    ///
    /// # Errors
    /// Kelvin magnitudes have no band table and yield
    /// [`BandQueryError::KelvinUnsupported`].
    pub fn average(self, unit: TemperatureUnit) -> Result<Temperature, BandQueryError> {
        let (min, max) = self.bounds(unit)?;
        Ok(Temperature::new((min + max) / 2.0, unit))
    }

    /// Whether the value's magnitude, in its own unit, lies within this
    /// band's interval (inclusive on both ends)
    ///
    /// # Errors
    /// Kelvin-constructed values cannot be tested against a band table and
    /// yield [`BandQueryError::KelvinUnsupported`].
    pub fn contains(self, value: Temperature) -> Result<bool, BandQueryError> {
        let (min, max) = self.bounds(value.unit())?;
        let amount = value.amount();
        Ok(amount >= min && amount <= max)
    }

    /// The first band in [`TemperatureBand::ALL`] order containing the
    /// value, or `None` when the value falls outside all six bands.
    /// An out-of-range value is ordinary control flow, not an error.
    ///
    /// # Errors
    /// Kelvin-constructed values yield
    /// [`BandQueryError::KelvinUnsupported`].
    pub fn classify(value: Temperature) -> Result<Option<TemperatureBand>, BandQueryError> {
        for band in Self::ALL {
            if band.contains(value)? {
                return Ok(Some(band));
            }
        }
        Ok(None)
    }

    /// Fixed descriptive label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TemperatureBand::Frigid => "frigid",
            TemperatureBand::Cold => "cold",
            TemperatureBand::Chilly => "chilly to mild",
            TemperatureBand::Warm => "mild to warm",
            TemperatureBand::Hot => "hot",
            TemperatureBand::Sweltering => "sweltering",
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised by band-table queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandQueryError {
    /// Band tables exist for Celsius and Fahrenheit magnitudes only
    KelvinUnsupported,
}

impl fmt::Display for BandQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandQueryError::KelvinUnsupported => {
                write!(f, "band bounds are not defined for Kelvin")
            }
        }
    }
}

impl std::error::Error for BandQueryError {}

//! Unit-safe temperature values with canonical Celsius arithmetic
//!
//! A [`Temperature`] remembers the unit it was entered in, but every
//! comparison and arithmetic operation runs on a canonical
//! Celsius-equivalent magnitude derived once at construction. Cross-unit
//! operations are therefore well-defined without repeated conversion
//! passes: `fahrenheit(32.0) == celsius(0.0)` holds exactly.
//!
//! # Design Philosophy
//! - Magnitudes are f64; the canonical form is the single pivot for
//!   conversion, ordering and subtraction
//! - Equality is exact (bit-for-bit) on the canonical magnitude, with no
//!   epsilon. Values derived through chained arithmetic may fail to equal
//!   a nominally identical constant; callers that need a tolerance must
//!   compare magnitudes themselves
//! - Total ordering via `f64::total_cmp` (NaN ordered after all values)
//! - Construction is total: the control feeds raw user input, so no
//!   absolute-zero validation is applied
//! - Serde support for persisting control state

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

use crate::core_types::waypoints::Waypoint;

/// Celsius to Kelvin conversion offset (0°C = 273.15 K)
const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

/// Degrees Fahrenheit per degree Celsius
const FAHRENHEIT_SCALE: f64 = 1.8;

/// Fahrenheit reading at 0°C
const FAHRENHEIT_OFFSET: f64 = 32.0;

// ============================================================================
// UNITS AND UNIT SYSTEMS
// ============================================================================

/// Temperature scale a magnitude is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius, the canonical scale
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin, absolute scale
    Kelvin,
}

impl TemperatureUnit {
    /// Display abbreviation. The degree sign is kept on Kelvin to match the
    /// control's label convention.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "°K",
        }
    }

    /// The unit system whose band table applies to magnitudes in this unit.
    /// Kelvin belongs to neither table and returns `None`.
    #[must_use]
    pub fn system(self) -> Option<UnitSystem> {
        match self {
            TemperatureUnit::Celsius => Some(UnitSystem::Metric),
            TemperatureUnit::Fahrenheit => Some(UnitSystem::Imperial),
            TemperatureUnit::Kelvin => None,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Unit system selecting which band-bound table applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Celsius-based band table
    Metric,
    /// Fahrenheit-based band table
    Imperial,
}

// ============================================================================
// TEMPERATURE VALUE
// ============================================================================

/// An immutable temperature value: a canonical Celsius-equivalent magnitude
/// plus the unit the value was constructed in
///
/// # Example
/// ```
/// use thermo_slider_core::{Temperature, TemperatureUnit};
///
/// let entered = Temperature::new(68.0, TemperatureUnit::Fahrenheit);
/// assert_eq!(entered.unit(), TemperatureUnit::Fahrenheit);
/// assert!((entered.as_celsius() - 20.0).abs() < 1e-9);
///
/// // Equality and ordering ignore the unit each side was entered in
/// assert_eq!(Temperature::fahrenheit(32.0), Temperature::celsius(0.0));
/// assert!(Temperature::kelvin(300.0) > Temperature::celsius(25.0));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Temperature {
    /// Canonical Celsius-equivalent magnitude
    celsius: f64,
    /// Unit the value was constructed in; used for display and band lookup
    unit: TemperatureUnit,
}

impl Temperature {
    /// Create a temperature from a magnitude in the given unit. Always
    /// succeeds; the canonical Celsius form is derived here, once.
    #[must_use]
    pub fn new(amount: f64, unit: TemperatureUnit) -> Self {
        let celsius = match unit {
            TemperatureUnit::Celsius => amount,
            TemperatureUnit::Fahrenheit => (amount - FAHRENHEIT_OFFSET) / FAHRENHEIT_SCALE,
            TemperatureUnit::Kelvin => amount - CELSIUS_KELVIN_OFFSET,
        };
        Temperature { celsius, unit }
    }

    /// Celsius-tagged value
    #[must_use]
    pub fn celsius(amount: f64) -> Self {
        Self::new(amount, TemperatureUnit::Celsius)
    }

    /// Fahrenheit-tagged value
    #[must_use]
    pub fn fahrenheit(amount: f64) -> Self {
        Self::new(amount, TemperatureUnit::Fahrenheit)
    }

    /// Kelvin-tagged value
    #[must_use]
    pub fn kelvin(amount: f64) -> Self {
        Self::new(amount, TemperatureUnit::Kelvin)
    }

    /// Unit the value was constructed in
    #[must_use]
    pub fn unit(self) -> TemperatureUnit {
        self.unit
    }

    /// Magnitude in the value's own unit
    #[must_use]
    pub fn amount(self) -> f64 {
        self.in_unit(self.unit)
    }

    /// Canonical Celsius-equivalent magnitude
    #[inline]
    #[must_use]
    pub fn as_celsius(self) -> f64 {
        self.celsius
    }

    /// Magnitude in any target unit. Total; all three units are always
    /// convertible.
    #[must_use]
    pub fn in_unit(self, target: TemperatureUnit) -> f64 {
        match target {
            TemperatureUnit::Celsius => self.celsius,
            TemperatureUnit::Fahrenheit => self.celsius * FAHRENHEIT_SCALE + FAHRENHEIT_OFFSET,
            TemperatureUnit::Kelvin => self.celsius + CELSIUS_KELVIN_OFFSET,
        }
    }

    /// The same temperature re-tagged with a different display unit. The
    /// canonical magnitude is carried over unchanged, so the result compares
    /// equal to `self`.
    #[must_use]
    pub fn to_unit(self, target: TemperatureUnit) -> Self {
        Temperature {
            celsius: self.celsius,
            unit: target,
        }
    }

    /// The waypoint this value coincides with, if any. Exact canonical
    /// comparison; see [`Waypoint::identify`].
    #[must_use]
    pub fn waypoint(self) -> Option<Waypoint> {
        Waypoint::identify(self)
    }
}

// Temperature - Temperature: canonical difference, re-expressed in the left
// operand's unit regardless of the right operand's unit.
impl Sub for Temperature {
    type Output = Temperature;
    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature {
            celsius: self.celsius - rhs.celsius,
            unit: self.unit,
        }
    }
}

// Equality is exact on the canonical magnitude and independent of the unit
// each value was constructed with. No epsilon.
impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool {
        self.celsius == other.celsius
    }
}

impl Eq for Temperature {}

impl PartialOrd for Temperature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Temperature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.celsius.total_cmp(&other.celsius)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}{}", self.amount(), self.unit.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        let freezing = Temperature::celsius(0.0);
        assert_eq!(freezing.in_unit(TemperatureUnit::Fahrenheit), 32.0);

        let boiling = Temperature::celsius(100.0);
        assert_eq!(boiling.in_unit(TemperatureUnit::Fahrenheit), 212.0);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        let freezing = Temperature::celsius(0.0);
        assert_eq!(freezing.in_unit(TemperatureUnit::Kelvin), 273.15);
    }

    #[test]
    fn test_round_trip_through_any_unit() {
        for unit in [
            TemperatureUnit::Celsius,
            TemperatureUnit::Fahrenheit,
            TemperatureUnit::Kelvin,
        ] {
            for via in [
                TemperatureUnit::Celsius,
                TemperatureUnit::Fahrenheit,
                TemperatureUnit::Kelvin,
            ] {
                let original = Temperature::new(21.5, unit);
                let back = Temperature::new(original.in_unit(via), via).in_unit(unit);
                assert!(
                    (back - 21.5).abs() < 1e-9,
                    "{unit:?} via {via:?} drifted: {back}"
                );
            }
        }
    }

    #[test]
    fn test_equality_is_unit_independent() {
        assert_eq!(Temperature::fahrenheit(32.0), Temperature::celsius(0.0));
        assert_eq!(Temperature::kelvin(273.15), Temperature::celsius(0.0));
    }

    #[test]
    fn test_equality_is_exact() {
        assert_ne!(Temperature::celsius(99.9), Temperature::celsius(100.0));
    }

    #[test]
    fn test_ordering_on_canonical_magnitude() {
        // 80°F = 26.67°C, between the two Celsius values
        let cool = Temperature::celsius(20.0);
        let mid = Temperature::fahrenheit(80.0);
        let hot = Temperature::celsius(30.0);
        assert!(cool < mid);
        assert!(mid < hot);
        assert_eq!(cool.max(hot), hot);
    }

    #[test]
    fn test_subtract_keeps_left_unit() {
        let diff = Temperature::celsius(10.0) - Temperature::fahrenheit(32.0);
        assert_eq!(diff.unit(), TemperatureUnit::Celsius);
        assert_eq!(diff.amount(), 10.0);
        assert_eq!(diff, Temperature::celsius(10.0) - Temperature::celsius(0.0));
    }

    #[test]
    fn test_retag_preserves_canonical_value() {
        let entered = Temperature::celsius(25.0);
        let shown = entered.to_unit(TemperatureUnit::Fahrenheit);
        assert_eq!(shown, entered);
        assert!((shown.amount() - 77.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_one_decimal_with_abbreviation() {
        assert_eq!(Temperature::celsius(21.46).to_string(), "21.5°C");
        assert_eq!(Temperature::fahrenheit(70.0).to_string(), "70.0°F");
        assert_eq!(Temperature::kelvin(300.0).to_string(), "300.0°K");
    }

    #[test]
    fn test_kelvin_has_no_band_system() {
        assert_eq!(TemperatureUnit::Celsius.system(), Some(UnitSystem::Metric));
        assert_eq!(
            TemperatureUnit::Fahrenheit.system(),
            Some(UnitSystem::Imperial)
        );
        assert_eq!(TemperatureUnit::Kelvin.system(), None);
    }
}

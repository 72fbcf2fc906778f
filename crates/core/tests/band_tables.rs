//! Classification behavior across the metric and imperial band tables
use thermo_slider_core::{
    BandQueryError, Temperature, TemperatureBand, TemperatureUnit, UnitSystem, Waypoint,
};

#[test]
fn test_band_tables_are_contiguous() {
    // Adjacent bands share their boundary magnitude in both tables
    for system in [UnitSystem::Metric, UnitSystem::Imperial] {
        for pair in TemperatureBand::ALL.windows(2) {
            let (_, upper) = pair[0].bounds_in(system);
            let (lower, _) = pair[1].bounds_in(system);
            assert_eq!(
                upper, lower,
                "{:?}/{:?} boundary mismatch in {system:?}",
                pair[0], pair[1]
            );
        }
    }
}

#[test]
fn test_imperial_table_is_not_a_conversion_of_metric() {
    // Metric frigid [-15, 0]°C converts to [5, 32]°F; the imperial table is
    // authored independently as [10, 30]°F. Both ship as authored.
    let (min_c, max_c) = TemperatureBand::Frigid.bounds_in(UnitSystem::Metric);
    let min_f = Temperature::celsius(min_c).in_unit(TemperatureUnit::Fahrenheit);
    let max_f = Temperature::celsius(max_c).in_unit(TemperatureUnit::Fahrenheit);
    assert_eq!((min_f, max_f), (5.0, 32.0));
    assert_eq!(
        TemperatureBand::Frigid.bounds_in(UnitSystem::Imperial),
        (10.0, 30.0)
    );
}

#[test]
fn test_classification_reference_points() {
    assert_eq!(
        TemperatureBand::classify(Temperature::celsius(5.0)),
        Ok(Some(TemperatureBand::Cold))
    );
    // 0°C sits on the frigid/cold boundary; enumeration order picks frigid
    assert_eq!(
        TemperatureBand::classify(Temperature::celsius(0.0)),
        Ok(Some(TemperatureBand::Frigid))
    );
    // Fahrenheit values classify against the imperial table
    assert_eq!(
        TemperatureBand::classify(Temperature::fahrenheit(50.0)),
        Ok(Some(TemperatureBand::Cold))
    );
}

#[test]
fn test_every_band_contains_its_average() {
    for unit in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit] {
        for band in TemperatureBand::ALL {
            let avg = band.average(unit).unwrap();
            assert_eq!(avg.unit(), unit);
            assert_eq!(
                band.contains(avg),
                Ok(true),
                "{band:?} average {avg} escaped its bounds"
            );
            // Averages sit strictly inside, never on a shared boundary
            assert_eq!(TemperatureBand::classify(avg), Ok(Some(band)));
        }
    }
}

#[test]
fn test_kelvin_is_rejected_with_explicit_error() {
    let err = TemperatureBand::Hot
        .bounds(TemperatureUnit::Kelvin)
        .unwrap_err();
    assert_eq!(err, BandQueryError::KelvinUnsupported);
    assert_eq!(err.to_string(), "band bounds are not defined for Kelvin");

    assert_eq!(
        TemperatureBand::Hot.average(TemperatureUnit::Kelvin),
        Err(BandQueryError::KelvinUnsupported)
    );
    assert_eq!(
        TemperatureBand::Hot.contains(Temperature::kelvin(300.0)),
        Err(BandQueryError::KelvinUnsupported)
    );
    assert_eq!(
        TemperatureBand::classify(Temperature::kelvin(300.0)),
        Err(BandQueryError::KelvinUnsupported)
    );
}

#[test]
fn test_waypoint_reference_points() {
    assert_eq!(
        Temperature::celsius(100.0).waypoint(),
        Some(Waypoint::Boiling)
    );
    assert_eq!(Temperature::celsius(99.9).waypoint(), None);
    assert_eq!(Temperature::celsius(37.0).waypoint(), Some(Waypoint::Body));
}

use clap::Parser;
use thermo_slider_core::{SliderTrack, Temperature, TemperatureBand, TemperatureUnit};

/// Thermometer slider demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "thermo-slider-demo")]
#[command(about = "Headless thermometer slider demo", long_about = None)]
struct Args {
    /// Temperature magnitude to enter
    #[arg(short, long, default_value_t = 21.5)]
    amount: f64,

    /// Unit: c(elsius), f(ahrenheit) or k(elvin)
    #[arg(short, long, default_value = "c")]
    unit: String,

    /// Track low bound, in the same unit
    #[arg(long, default_value_t = 0.0)]
    low: f64,

    /// Track high bound, in the same unit
    #[arg(long, default_value_t = 40.0)]
    high: f64,

    /// Tick interval in track units (0 disables hash marks)
    #[arg(short, long, default_value_t = 5.0)]
    ticks: f64,

    /// Thermometer height in rows
    #[arg(short, long, default_value_t = 21)]
    rows: usize,
}

fn main() {
    let args = Args::parse();

    let unit = match args.unit.to_lowercase().as_str() {
        "f" | "fahrenheit" => TemperatureUnit::Fahrenheit,
        "k" | "kelvin" => TemperatureUnit::Kelvin,
        _ => TemperatureUnit::Celsius,
    };

    let value = Temperature::new(args.amount, unit);

    println!("=== Thermometer Slider Demo ===\n");
    println!("Entered: {value}");
    println!("  Celsius:    {:.2}", value.in_unit(TemperatureUnit::Celsius));
    println!("  Fahrenheit: {:.2}", value.in_unit(TemperatureUnit::Fahrenheit));
    println!("  Kelvin:     {:.2}", value.in_unit(TemperatureUnit::Kelvin));

    match TemperatureBand::classify(value) {
        Ok(Some(band)) => println!("Feels: {band}"),
        Ok(None) => println!("Feels: off the scale"),
        Err(err) => println!("Feels: unavailable ({err})"),
    }

    if let Some(waypoint) = value.waypoint() {
        println!("Waypoint: {waypoint}");
    }

    let low = Temperature::new(args.low, unit);
    let high = Temperature::new(args.high, unit);
    let track = match SliderTrack::new(low, high) {
        Ok(track) => track,
        Err(err) => {
            eprintln!("Invalid track: {err}");
            std::process::exit(1);
        }
    };

    let fill = track.position_of(value);
    println!(
        "\nTrack {} .. {}  (fill {:.0}%)\n",
        track.low(),
        track.high(),
        fill * 100.0
    );

    render_thermometer(track, value, args.ticks, args.rows);
}

/// Draw a vertical ASCII thermometer: mercury column, hash marks and
/// waypoint labels, high end at the top.
fn render_thermometer(track: SliderTrack, value: Temperature, tick_interval: f64, rows: usize) {
    let rows = rows.max(2);
    let fill = track.position_of(value);

    // Snap a normalized position onto a row (row 0 is the top of the tube)
    let to_row = |position: f64| ((1.0 - position) * (rows - 1) as f64).round() as usize;

    let mut labels = vec![""; rows];
    for (position, waypoint) in track.waypoint_markers() {
        labels[to_row(position)] = waypoint.label();
    }
    let mut has_tick = vec![false; rows];
    for position in track.tick_positions(tick_interval) {
        has_tick[to_row(position)] = true;
    }

    for row in 0..rows {
        let position = 1.0 - row as f64 / (rows - 1) as f64;
        let mercury = if position <= fill { '#' } else { ' ' };
        let tick = if has_tick[row] { '-' } else { ' ' };
        let label = if labels[row].is_empty() {
            String::new()
        } else {
            format!("  < {}", labels[row])
        };
        println!("  {tick}|{mercury}| {}{label}", track.value_at(position));
    }
}

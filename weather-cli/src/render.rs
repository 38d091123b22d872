use std::fmt::{Display, Write};

use chrono::TimeZone;
use weather_core::{Glyph, TemperatureUnit, WeatherReading};

/// Human-readable report: condition glyph followed by one field per line.
pub fn report<Tz: TimeZone>(
    location: &str,
    reading: &WeatherReading,
    unit: TemperatureUnit,
    tz: &Tz,
) -> String
where
    Tz::Offset: Display,
{
    let glyph = Glyph::for_description(&reading.condition);
    let place = match reading.location_name.as_deref() {
        Some(name) if !name.eq_ignore_ascii_case(location) => format!("{location} ({name})"),
        _ => location.to_string(),
    };

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", glyph.art());
    let _ = writeln!(out, "Location: {place}");
    let _ = writeln!(out, "Weather: {}", reading.condition);
    let _ = writeln!(out, "Temperature: {:.2}{}", reading.temperature(unit), unit.symbol());
    let _ = writeln!(out, "Sunrise: {}", reading.sunrise_clock(tz));
    let _ = writeln!(out, "Sunset: {}", reading.sunset_clock(tz));
    out
}

use crate::query::WeatherUnit;
use std::fmt::Display;

/// A validated snapshot of current conditions for one place. Exists only long
/// enough to be rendered into the report string.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub location_name: String,
    pub description: Option<String>,
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<i64>,
    pub pressure: Option<i64>,
    pub wind_speed: Option<f64>,
    pub rain_last_hour: Option<f64>,
    pub visibility: Option<i64>,
}

fn value_or_na<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "n/a".to_string(),
    }
}

impl WeatherObservation {
    /// Render the fixed report handed back to the agent. Missing numerics
    /// show as `n/a`, a missing description as `unknown conditions`.
    pub fn report(&self, unit: WeatherUnit) -> String {
        let temp = unit.temperature_label();
        let wind = unit.wind_speed_label();

        format!(
            "Weather in {}:\n\
             - Temperature: {}{} (feels like {}{})\n\
             - Conditions: {}\n\
             - Humidity: {}%\n\
             - Wind speed: {} {}\n\
             - Pressure: {} hPa\n\n\
             Stay tuned for personalized weather suggestions!",
            self.location_name,
            value_or_na(&self.temperature),
            temp,
            value_or_na(&self.feels_like),
            temp,
            self.description.as_deref().unwrap_or("unknown conditions"),
            value_or_na(&self.humidity),
            value_or_na(&self.wind_speed),
            wind,
            value_or_na(&self.pressure),
        )
    }
}

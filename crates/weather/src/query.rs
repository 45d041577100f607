use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unit system passed straight through to the provider's `units` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
pub enum WeatherUnit {
    #[default]
    #[serde(rename = "metric")]
    #[strum(serialize = "metric")]
    Metric,
    #[serde(rename = "imperial")]
    #[strum(serialize = "imperial")]
    Imperial,
}

impl WeatherUnit {
    pub fn temperature_label(&self) -> &'static str {
        match self {
            WeatherUnit::Metric => "°C",
            WeatherUnit::Imperial => "°F",
        }
    }

    pub fn wind_speed_label(&self) -> &'static str {
        match self {
            WeatherUnit::Metric => "m/s",
            WeatherUnit::Imperial => "mph",
        }
    }
}

/// One lookup request. Deserialized directly from the model's tool-call
/// arguments, so `unit` must default when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherQuery {
    pub location: String,
    #[serde(default)]
    pub unit: WeatherUnit,
}

impl WeatherQuery {
    pub fn new<T: Into<String>>(location: T, unit: WeatherUnit) -> Self {
        Self {
            location: location.into(),
            unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unit_defaults_to_metric() {
        let query: WeatherQuery = serde_json::from_value(json!({"location": "Paris"})).unwrap();
        assert_eq!(query.unit, WeatherUnit::Metric);
    }

    #[test]
    fn test_unit_parses_imperial() {
        let query: WeatherQuery =
            serde_json::from_value(json!({"location": "Dallas", "unit": "imperial"})).unwrap();
        assert_eq!(query.unit, WeatherUnit::Imperial);
    }

    #[test]
    fn test_missing_location_is_rejected() {
        let result: Result<WeatherQuery, _> =
            serde_json::from_value(json!({"unit": "metric"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_unit_display_matches_provider_values() {
        assert_eq!(WeatherUnit::Metric.to_string(), "metric");
        assert_eq!(WeatherUnit::Imperial.to_string(), "imperial");
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(WeatherUnit::Metric.temperature_label(), "°C");
        assert_eq!(WeatherUnit::Imperial.wind_speed_label(), "mph");
    }
}

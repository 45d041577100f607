use crate::{error::WeatherError, observation::WeatherObservation};
use either::Either;
use serde::Deserialize;

/// Wire schema of the provider's current-weather payload. Every field the
/// report does not strictly need is optional; defaulting happens when the
/// observation is built, not here.
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    /// Status code. The provider sends a number on success and a string
    /// (e.g. `"404"`) on errors.
    #[serde(with = "either::serde_untagged")]
    pub cod: Either<i64, String>,
    /// Error description accompanying a non-success `cod`.
    pub message: Option<String>,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub main: Option<MainMetrics>,
    pub wind: Option<Wind>,
    pub rain: Option<Rain>,
    pub visibility: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherCondition {
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MainMetrics {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<i64>,
    pub pressure: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct Rain {
    #[serde(rename = "1h")]
    pub last_hour: Option<f64>,
}

impl CurrentWeatherResponse {
    fn is_success(&self) -> bool {
        match &self.cod {
            Either::Left(code) => *code == 200,
            Either::Right(code) => code == "200",
        }
    }

    /// Validate the payload and build the domain observation. A non-success
    /// status becomes a `Provider` error carrying the API's own message.
    pub fn into_observation(self, queried_location: &str) -> Result<WeatherObservation, WeatherError> {
        if !self.is_success() {
            return Err(WeatherError::Provider {
                message: self
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        let main = self.main;
        Ok(WeatherObservation {
            location_name: self
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| queried_location.to_string()),
            description: self
                .weather
                .into_iter()
                .next()
                .and_then(|c| c.description)
                .filter(|d| !d.is_empty()),
            temperature: main.as_ref().and_then(|m| m.temp),
            feels_like: main.as_ref().and_then(|m| m.feels_like),
            humidity: main.as_ref().and_then(|m| m.humidity),
            pressure: main.as_ref().and_then(|m| m.pressure),
            wind_speed: self.wind.and_then(|w| w.speed),
            rain_last_hour: self.rain.and_then(|r| r.last_hour),
            visibility: self.visibility,
        })
    }
}

use crate::{
    error::WeatherError, observation::WeatherObservation, query::WeatherQuery,
    response::CurrentWeatherResponse,
};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Blocking client for the provider's current-weather endpoint. One GET per
/// lookup, no retries, default timeouts.
#[derive(Clone)]
pub struct WeatherClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The API key stays out of debug output.
        f.debug_struct("WeatherClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl WeatherClient {
    pub fn new<T: Into<String>>(api_key: T) -> Self {
        // Error statuses still carry a JSON body with `cod` and `message`,
        // so they must come back as responses rather than errors.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        Self {
            agent,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn set_base_url<T: Into<String>>(mut self, base_url: T) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current conditions. Trims and title-cases the location before
    /// sending it, the way users expect "new york" to resolve.
    pub fn fetch(&self, query: &WeatherQuery) -> Result<WeatherObservation, WeatherError> {
        let location = normalize_location(&query.location);
        log::debug!("weather lookup: q={} units={}", location, query.unit);

        let mut response = self
            .agent
            .get(&self.base_url)
            .query("q", &location)
            .query("appid", &self.api_key)
            .query("units", &query.unit.to_string())
            .call()
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        let payload: CurrentWeatherResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| WeatherError::Schema(e.to_string()))?;

        payload.into_observation(&location)
    }
}

/// Trim surrounding whitespace and title-case each alphabetic run, so
/// "  new york " becomes "New York" and "kuala-lumpur" becomes
/// "Kuala-Lumpur".
pub fn normalize_location(location: &str) -> String {
    let mut out = String::with_capacity(location.len());
    let mut prev_alpha = false;
    for c in location.trim().chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

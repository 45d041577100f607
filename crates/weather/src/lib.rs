//! Current-weather lookups against the OpenWeatherMap API, exposed both as a
//! plain client and as an agent tool.

pub mod client;
mod error;
pub mod observation;
pub mod query;
pub mod response;
pub mod tool;

pub use client::{WeatherClient, DEFAULT_BASE_URL};
pub use error::WeatherError;
pub use observation::WeatherObservation;
pub use query::{WeatherQuery, WeatherUnit};
pub use tool::WeatherLookupTool;

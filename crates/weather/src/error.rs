/// Failure taxonomy for one weather lookup. Transport and schema problems are
/// local faults; `Provider` carries the message the weather API itself
/// reported alongside a non-success status code.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    Provider { message: String },

    #[error("unexpected response shape: {0}")]
    Schema(String),
}

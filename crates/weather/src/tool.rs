use crate::{
    client::WeatherClient, error::WeatherError, observation::WeatherObservation,
    query::WeatherQuery,
};
use breeze_core::tool::{ToolCallError, ToolCallResult, ToolT};
use serde_json::{json, Value};

/// The agent-facing weather capability. Every outcome is a string the model
/// can weave into its reply; lookups never raise past this boundary.
#[derive(Debug)]
pub struct WeatherLookupTool {
    client: WeatherClient,
}

impl WeatherLookupTool {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    pub fn lookup(&self, query: &WeatherQuery) -> String {
        render_outcome(self.client.fetch(query), query)
    }
}

fn render_outcome(
    result: Result<WeatherObservation, WeatherError>,
    query: &WeatherQuery,
) -> String {
    match result {
        Ok(observation) => observation.report(query.unit),
        Err(WeatherError::Provider { message }) => {
            format!("Error fetching weather: {}", message)
        }
        Err(e) => format!("Failed to fetch weather: {}", e),
    }
}

impl ToolT for WeatherLookupTool {
    fn name(&self) -> &'static str {
        "get_weather"
    }

    fn description(&self) -> &'static str {
        "Fetches real-time weather data for a given location."
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "City or place name, e.g. 'Paris' or 'Paris, US'"
                },
                "unit": {
                    "type": "string",
                    "enum": ["metric", "imperial"],
                    "description": "Unit system for the report (default metric)"
                }
            },
            "required": ["location"]
        })
    }

    fn run(&self, args: Value) -> Result<ToolCallResult, ToolCallError> {
        let query: WeatherQuery = serde_json::from_value(args)?;
        Ok(Value::String(self.lookup(&query)))
    }
}

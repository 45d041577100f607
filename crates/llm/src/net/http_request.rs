use crate::error::LLMError;
use serde_json::Value;

pub(crate) struct HTTPRequest {}

impl HTTPRequest {
    /// POSTs a JSON body and returns the raw response text. Non-2xx bodies
    /// are returned as-is so callers can parse provider error envelopes.
    pub async fn request_with_headers(
        url: &str,
        body: Value,
        headers: Vec<(String, String)>,
    ) -> Result<String, LLMError> {
        let client = reqwest::Client::new();
        let mut request = client.post(url).json(&body);
        for (name, value) in headers {
            request = request.header(&name, &value);
        }
        let response = request.send().await?;
        let text = response.text().await?;
        Ok(text)
    }
}

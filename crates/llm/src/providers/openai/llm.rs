use super::{api::OpenAIAPI, model::OpenAIModel};
use crate::{
    common::openai_types::{
        OpenAIStyleChatCompletionRequest, OpenAIStyleChatCompletionResponse,
        OpenAIStyleErrorResponse, OpenAIStyleTool,
    },
    error::{LLMError, LLMProviderError},
    llm::{
        ChatCompletionOptions, ChatCompletionResponse, ChatMessage, ChatResponseMessage, Tool, LLM,
    },
    net::http_request::HTTPRequest,
    utils,
};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAIError {
    #[error("API error: {0}")]
    Api(String),
    #[error("Parsing error: {0}")]
    Parsing(String),
    #[error("Authentication error: API key not set")]
    Authentication,
    #[error("{0}")]
    Provider(String),
    #[error("LLM Error: {0}")]
    GenericLLMError(#[from] LLMError),
}

impl LLMProviderError for OpenAIError {}

/// Client for any OpenAI-compatible chat-completions endpoint. Point
/// `base_url` at Google's compatibility layer to talk to Gemini models.
#[derive(Debug, Clone)]
pub struct OpenAI {
    base_url: String,
    api_key: Option<String>,
    pub model: Option<OpenAIModel>,
}

impl Default for OpenAI {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".into(),
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            model: Some(OpenAIModel::GPT4OMini),
        }
    }
}

impl OpenAI {
    pub fn new() -> Self {
        Default::default()
    }

    fn model(&self) -> Result<String, LLMError> {
        self.model
            .clone()
            .map(|m| m.to_string())
            .ok_or_else(|| LLMError::Configuration("Model not set".to_string()))
    }

    fn api_key(&self) -> Result<String, OpenAIError> {
        self.api_key.clone().ok_or(OpenAIError::Authentication)
    }

    pub fn set_base_url<T: Into<String>>(mut self, base_url: T) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn set_api_key<T: Into<String>>(mut self, api_key: T) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn set_model(mut self, model: OpenAIModel) -> Self {
        self.model = Some(model);
        self
    }

    async fn make_request(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> Result<String, OpenAIError> {
        let api_key = self.api_key()?;
        let headers = vec![("Authorization".to_string(), format!("Bearer {}", api_key))];

        HTTPRequest::request_with_headers(url, body, headers)
            .await
            .map_err(|e| OpenAIError::Api(e.to_string()))
    }

    fn parse_response(&self, text: &str) -> Result<ChatResponseMessage, OpenAIError> {
        match serde_json::from_str::<OpenAIStyleChatCompletionResponse>(text) {
            Ok(response) => {
                let choice = response
                    .choices
                    .into_iter()
                    .next()
                    .ok_or_else(|| OpenAIError::Parsing("No choices in response".to_string()))?;
                Ok(choice.message.into())
            }
            Err(_) => {
                // Not a completion; try the provider's error envelope.
                if let Ok(envelope) = serde_json::from_str::<OpenAIStyleErrorResponse>(text) {
                    Err(OpenAIError::Provider(envelope.error.message))
                } else {
                    Err(OpenAIError::Parsing(format!(
                        "Unrecognized response: {}",
                        text
                    )))
                }
            }
        }
    }
}

#[async_trait]
impl LLM for OpenAI {
    type Error = OpenAIError;

    fn name(&self) -> &'static str {
        "OpenAI"
    }

    fn model_name(&self) -> String {
        self.model
            .clone()
            .map(|m| m.to_string())
            .unwrap_or_default()
    }

    fn supports_tools(&self) -> bool {
        if let Some(ref model) = self.model {
            return model.supports_tools();
        }
        false
    }

    async fn chat_completion_with_tools(
        &self,
        messages: Vec<ChatMessage>,
        tools: Option<&[Tool]>,
        options: Option<ChatCompletionOptions>,
    ) -> Result<ChatCompletionResponse, Self::Error> {
        let model = self.model().map_err(OpenAIError::GenericLLMError)?;

        let mut body = OpenAIStyleChatCompletionRequest::from_chat_messages(messages, model.clone())
            .set_chat_options(options.unwrap_or_default());

        if let Some(tools) = tools {
            if !tools.is_empty() {
                let wire_tools: Vec<OpenAIStyleTool> =
                    tools.iter().map(OpenAIStyleTool::from).collect();
                body = body.set_tools(wire_tools);
            }
        }

        let url = utils::create_model_url(&self.base_url, OpenAIAPI::ChatCompletion);
        log::debug!("chat completion request: model={} url={}", model, url);

        let text = self.make_request(&url, serde_json::json!(body)).await?;
        let message = self.parse_response(&text)?;

        Ok(ChatCompletionResponse {
            model,
            message,
            done_reason: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_configuration() {
        let llm = OpenAI {
            base_url: "https://api.openai.com/v1".into(),
            api_key: None,
            model: Some(OpenAIModel::GPT4OMini),
        };
        assert_eq!(llm.name(), "OpenAI");
        assert_eq!(llm.model_name(), "gpt-4o-mini");
        assert!(llm.supports_tools());
    }

    #[test]
    fn test_builder_setters() {
        let llm = OpenAI::new()
            .set_base_url("https://generativelanguage.googleapis.com/v1beta/openai")
            .set_api_key("test-key")
            .set_model(OpenAIModel::Gemini20Flash);
        assert_eq!(llm.model_name(), "gemini-2.0-flash");
        assert_eq!(llm.api_key().unwrap(), "test-key");
    }

    #[test]
    fn test_missing_api_key_is_authentication_error() {
        let llm = OpenAI {
            base_url: "https://api.openai.com/v1".into(),
            api_key: None,
            model: Some(OpenAIModel::GPT4OMini),
        };
        assert!(matches!(
            llm.api_key().unwrap_err(),
            OpenAIError::Authentication
        ));
    }

    #[test]
    fn test_parse_response_success() {
        let llm = OpenAI::new().set_api_key("k");
        let text = json!({
            "id": "chatcmpl-1",
            "model": "gemini-2.0-flash",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Sunny in Paris."},
                "finish_reason": "stop"
            }]
        })
        .to_string();

        let message = llm.parse_response(&text).unwrap();
        assert_eq!(message.content, "Sunny in Paris.");
        assert!(message.tool_calls.is_empty());
    }

    #[test]
    fn test_parse_response_error_envelope() {
        let llm = OpenAI::new().set_api_key("k");
        let text = json!({
            "error": {"message": "API key not valid", "type": "invalid_request_error"}
        })
        .to_string();

        match llm.parse_response(&text).unwrap_err() {
            OpenAIError::Provider(message) => assert_eq!(message, "API key not valid"),
            other => panic!("expected Provider error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_response_garbage() {
        let llm = OpenAI::new().set_api_key("k");
        assert!(matches!(
            llm.parse_response("<html>bad gateway</html>").unwrap_err(),
            OpenAIError::Parsing(_)
        ));
    }

    #[test]
    fn test_parse_response_no_choices() {
        let llm = OpenAI::new().set_api_key("k");
        let text = json!({"id": "x", "model": "m", "choices": []}).to_string();
        assert!(matches!(
            llm.parse_response(&text).unwrap_err(),
            OpenAIError::Parsing(_)
        ));
    }
}

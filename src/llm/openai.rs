use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::llm::prompts::GenerationRequest;
use crate::llm::provider::LlmProvider;

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| "gpt-4".to_string()),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let request_body = ChatRequest {
            model: self.model.clone(),
            temperature: 0.3,
            max_tokens: 4000,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system_prompt(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.to_prompt(),
                },
            ],
        };

        let response = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::LlmApi(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::LlmApi(format!(
                "OpenAI API error ({}): {}",
                status, body
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::LlmApi(format!("Failed to parse OpenAI response: {}", e)))?;

        if let Some(error) = result.error {
            return Err(Error::LlmApi(error.message));
        }

        let text = result
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(Error::LlmApi("Empty response from OpenAI".to_string()));
        }

        Ok(text)
    }

    fn name(&self) -> &str {
        "OpenAI"
    }
}

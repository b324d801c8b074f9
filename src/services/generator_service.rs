use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::constants::QUIZ_GENERATION_PROMPT;
use crate::errors::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Ask the model for quiz questions about `text`. Returns the raw reply.
    async fn generate(&self, text: &str, credential: &SecretString) -> AppResult<String>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Calls the OpenAI chat completions endpoint.
pub struct OpenAiQuestionGenerator {
    client: Client,
    api_base: String,
    model: String,
    timeout: Duration,
}

impl OpenAiQuestionGenerator {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_base: config.openai_api_base.trim_end_matches('/').to_string(),
            model: config.openai_model.clone(),
            timeout: Duration::from_secs(config.openai_timeout_seconds),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[async_trait]
impl QuestionGenerator for OpenAiQuestionGenerator {
    async fn generate(&self, text: &str, credential: &SecretString) -> AppResult<String> {
        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": QUIZ_GENERATION_PROMPT },
                { "role": "user", "content": text }
            ]
        });

        log::info!(
            "Requesting quiz questions from model {} ({} characters of source text)",
            self.model,
            text.chars().count()
        );

        let res = self
            .client
            .post(self.completions_url())
            .bearer_auth(credential.expose_secret())
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = res.status();
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("Model provider rejected the supplied API key");
            return Err(AppError::Authentication);
        }
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            log::error!("Model provider returned {}: {}", status, body);
            return Err(AppError::ExternalService(format!(
                "OpenAI API Error {}: {}",
                status, body
            )));
        }

        let body: ChatCompletionResponse = res
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("Invalid OpenAI response: {}", e)))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::ExternalService("OpenAI response contained no message content".to_string())
            })
    }
}

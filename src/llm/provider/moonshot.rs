// src/llm/provider/moonshot.rs
// Moonshot (Kimi) chat completions provider (OpenAI-compatible)

use super::{ChatMessage, LlmProvider, ProviderMetadata, ProviderResponse};
use crate::config::FunConfig;
use crate::error::{FunError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tracing::debug;

pub struct MoonshotProvider {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

impl MoonshotProvider {
    pub fn new(endpoint: String, api_key: Option<String>, model: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
            model,
        })
    }

    pub fn from_config(config: &FunConfig) -> Result<Self> {
        Self::new(
            config.chat_completions_url(),
            config.api_key.clone(),
            config.model.clone(),
            config.provider_timeout(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Pull the first choice's text and usage out of an OpenAI-shaped body
pub(crate) fn parse_completion(raw: &Value, model: &str, latency_ms: i64) -> Result<ProviderResponse> {
    if !raw.is_object() {
        return Err(FunError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            raw
        )));
    }

    let content = raw["choices"][0]["message"]["content"]
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    let usage = &raw["usage"];
    let metadata = ProviderMetadata {
        model_version: raw["model"].as_str().unwrap_or(model).to_string(),
        input_tokens: usage["prompt_tokens"].as_i64(),
        output_tokens: usage["completion_tokens"].as_i64(),
        total_tokens: usage["total_tokens"].as_i64(),
        latency_ms,
        finish_reason: raw["choices"][0]["finish_reason"]
            .as_str()
            .map(|s| s.to_string()),
    };

    Ok(ProviderResponse { content, metadata })
}

#[async_trait]
impl LlmProvider for MoonshotProvider {
    fn name(&self) -> &'static str {
        "moonshot"
    }

    async fn chat(&self, messages: Vec<ChatMessage>, temperature: f32) -> Result<ProviderResponse> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(FunError::MissingApiKey(self.name()))?;

        let start = Instant::now();

        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": temperature,
        });

        debug!(
            "Moonshot request: model={} temperature={} messages={}",
            self.model,
            temperature,
            messages.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(FunError::ProviderStatus {
                provider: self.name(),
                status: status.as_u16(),
                body: error_text,
            });
        }

        let text = response.text().await?;
        let raw: Value = serde_json::from_str(&text)
            .map_err(|e| FunError::MalformedResponse(e.to_string()))?;
        let latency_ms = start.elapsed().as_millis() as i64;

        let parsed = parse_completion(&raw, &self.model, latency_ms)?;
        debug!(
            "Moonshot response: latency={}ms tokens={:?} finish={:?}",
            parsed.metadata.latency_ms, parsed.metadata.total_tokens, parsed.metadata.finish_reason
        );
        Ok(parsed)
    }
}

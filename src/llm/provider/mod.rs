// src/llm/provider/mod.rs
// LLM provider trait and message types for chat completions
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod moonshot;

pub use moonshot::MoonshotProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Message format sent to the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Unified response from any provider
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// First choice's content; `None` when the provider returned no text
    pub content: Option<String>,
    pub metadata: ProviderMetadata,
}

/// Metadata returned by provider
#[derive(Debug, Clone, Default)]
pub struct ProviderMetadata {
    pub model_version: String,
    pub input_tokens: Option<i64>,
    pub output_tokens: Option<i64>,
    pub total_tokens: Option<i64>,
    pub latency_ms: i64,
    pub finish_reason: Option<String>,
}

/// Chat-completion provider interface
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging/debugging
    fn name(&self) -> &'static str;

    /// One chat completion. Transport, status and body-shape failures are errors;
    /// a well-formed response without content is `Ok` with `content: None`.
    async fn chat(&self, messages: Vec<ChatMessage>, temperature: f32)
        -> Result<ProviderResponse>;
}

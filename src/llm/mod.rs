// src/llm/mod.rs
// LLM module exports and submodule declarations

pub mod provider;

pub use provider::{
    ChatMessage, LlmProvider, MoonshotProvider, ProviderMetadata, ProviderResponse, Role,
};

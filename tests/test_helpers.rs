// tests/test_helpers.rs
#![allow(dead_code)]

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use eleme_fun::error::{FunError, Result};
use eleme_fun::llm::{ChatMessage, LlmProvider, ProviderMetadata, ProviderResponse};
use eleme_fun::storage::{KeyValueStore, MemoryKvStore, SqliteKvStore};
use eleme_fun::AppState;

/// What the stub provider answers with
#[derive(Clone)]
pub enum Script {
    Reply(String),
    Empty,
    Fail,
}

pub struct StubProvider {
    script: Script,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(Script::Reply(text.to_string()))
    }

    pub fn failing() -> Arc<Self> {
        Self::new(Script::Fail)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn chat(&self, _messages: Vec<ChatMessage>, _temperature: f32) -> Result<ProviderResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Reply(text) => Ok(ProviderResponse {
                content: Some(text.clone()),
                metadata: ProviderMetadata::default(),
            }),
            Script::Empty => Ok(ProviderResponse {
                content: None,
                metadata: ProviderMetadata::default(),
            }),
            Script::Fail => Err(FunError::ProviderStatus {
                provider: "stub",
                status: 503,
                body: "unavailable".to_string(),
            }),
        }
    }
}

/// Fresh in-memory SQLite store with the schema applied
pub async fn sqlite_store() -> Arc<SqliteKvStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory SQLite pool.");
    let store = SqliteKvStore::new(pool);
    store.run_migrations().await.expect("migrate local_storage");
    Arc::new(store)
}

/// AppState over a stub provider and an in-memory store, with no spin delay
pub async fn create_test_app_state(provider: Arc<StubProvider>) -> Arc<AppState> {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryKvStore::new());
    create_test_app_state_with(provider, store, Duration::ZERO).await
}

pub async fn create_test_app_state_with(
    provider: Arc<StubProvider>,
    store: Arc<dyn KeyValueStore>,
    spin_duration: Duration,
) -> Arc<AppState> {
    Arc::new(AppState::assemble(provider, store, spin_duration).await)
}

// src/state.rs
// Shared application state: one instance of every widget, wired to one gateway and one store

use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::comments::CommentBoard;
use crate::config::FunConfig;
use crate::error::Result;
use crate::generation::Gateway;
use crate::llm::{LlmProvider, MoonshotProvider};
use crate::menu::{MenuReactions, MenuWidget};
use crate::storage::{KeyValueStore, SqliteKvStore};
use crate::wheel::WheelService;
use crate::widgets::{EasterEggWidget, FactWidget, FoodWidget, JokeWidget};

pub struct AppState {
    // -------- Generation --------
    pub gateway: Gateway,

    // -------- Widgets --------
    pub jokes: JokeWidget,
    pub facts: FactWidget,
    pub food: FoodWidget,
    pub menu: MenuWidget,
    pub easter_egg: EasterEggWidget,
    pub wheel: WheelService,

    // -------- Persistence --------
    pub comments: CommentBoard,
}

impl AppState {
    /// Assemble every component from an injected provider and store
    pub async fn assemble(
        provider: Arc<dyn LlmProvider>,
        store: Arc<dyn KeyValueStore>,
        spin_duration: Duration,
    ) -> Self {
        let gateway = Gateway::new(provider);
        let comments = CommentBoard::load(store.clone()).await;

        Self {
            jokes: JokeWidget::new(gateway.clone()),
            facts: FactWidget::new(gateway.clone()),
            food: FoodWidget::new(gateway.clone()),
            menu: MenuWidget::new(gateway.clone(), MenuReactions::new(store)),
            easter_egg: EasterEggWidget::new(gateway.clone()),
            wheel: WheelService::new(gateway.clone(), spin_duration),
            comments,
            gateway,
        }
    }
}

/// Build state from configuration: Moonshot provider plus SQLite storage
pub async fn create_app_state(config: &FunConfig) -> Result<Arc<AppState>> {
    if !config.has_api_key() {
        warn!("MOONSHOT_API_KEY is not set; all generations will use backup texts");
    }

    let provider: Arc<dyn LlmProvider> = Arc::new(MoonshotProvider::from_config(config)?);
    let store: Arc<dyn KeyValueStore> = Arc::new(
        SqliteKvStore::connect(&config.database_url, config.sqlite_max_connections).await?,
    );

    Ok(Arc::new(
        AppState::assemble(provider, store, config.spin_duration()).await,
    ))
}

// src/menu/mod.rs
// Fictional menu generator with persisted reactions

pub mod reactions;

use rand::Rng;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::generation::backup::BACKUP_MENU;
use crate::generation::{Gateway, GenerationCategory, GenerationSource};
use crate::widgets::InFlight;

pub use reactions::{MenuReactions, Reaction, ReactionMap};

pub const GENERATED_DESCRIPTION: &str = "一道充满想象力的创意料理，每一口都是惊喜的体验";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: String,
    pub reaction: Option<Reaction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuBoard {
    pub items: Vec<MenuItem>,
    pub source: GenerationSource,
    pub notice: Option<String>,
    pub likes: usize,
    pub dislikes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReactionUpdate {
    pub name: String,
    pub reaction: Option<Reaction>,
    pub likes: usize,
    pub dislikes: usize,
}

fn random_price() -> String {
    format!("¥{}", rand::rng().random_range(50..250))
}

fn tally(items: &[MenuItem], reaction: Reaction) -> usize {
    items.iter().filter(|i| i.reaction == Some(reaction)).count()
}

pub struct MenuWidget {
    gateway: Gateway,
    reactions: MenuReactions,
    in_flight: InFlight,
    current: Mutex<Vec<MenuItem>>,
}

impl MenuWidget {
    pub fn new(gateway: Gateway, reactions: MenuReactions) -> Self {
        Self {
            gateway,
            reactions,
            in_flight: InFlight::new(),
            current: Mutex::new(Vec::new()),
        }
    }

    pub async fn current(&self) -> Vec<MenuItem> {
        self.current.lock().await.clone()
    }

    /// One generated item on success; the three canned items when the provider fails
    pub async fn generate(&self) -> Result<MenuBoard> {
        let _guard = self.in_flight.begin("menu generator")?;
        let saved = self.reactions.load().await;

        let (items, source, notice) = match self
            .gateway
            .generate(GenerationCategory::FictionalMenu, None)
            .await
        {
            Ok(name) => {
                let reaction = saved.get(&name).copied();
                let item = MenuItem {
                    name,
                    description: GENERATED_DESCRIPTION.to_string(),
                    price: random_price(),
                    reaction,
                };
                (vec![item], GenerationSource::Provider, None)
            }
            Err(e) => {
                tracing::warn!("Menu generation failed, using backup menu: {}", e);
                let items = BACKUP_MENU
                    .iter()
                    .map(|b| MenuItem {
                        name: b.name.to_string(),
                        description: b.description.to_string(),
                        price: b.price.to_string(),
                        reaction: saved.get(b.name).copied(),
                    })
                    .collect();
                (
                    items,
                    GenerationSource::Backup,
                    Some(GenerationCategory::FictionalMenu.failure_notice().to_string()),
                )
            }
        };

        let board = MenuBoard {
            likes: tally(&items, Reaction::Like),
            dislikes: tally(&items, Reaction::Dislike),
            items: items.clone(),
            source,
            notice,
        };
        *self.current.lock().await = items;
        Ok(board)
    }

    /// Toggle a reaction on an item by name and persist it
    pub async fn react(&self, name: &str, reaction: Reaction) -> Result<ReactionUpdate> {
        let stored = self.reactions.toggle(name, reaction).await?;

        let mut current = self.current.lock().await;
        for item in current.iter_mut().filter(|i| i.name == name) {
            item.reaction = stored;
        }

        Ok(ReactionUpdate {
            name: name.to_string(),
            reaction: stored,
            likes: tally(&current, Reaction::Like),
            dislikes: tally(&current, Reaction::Dislike),
        })
    }
}

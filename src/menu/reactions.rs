// src/menu/reactions.rs
// Like/dislike per generated menu item, keyed by the item's literal name

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{FunError, Result};
use crate::storage::{load_json_or_default, save_json, KeyValueStore, MENU_REACTIONS_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reaction::Like => f.write_str("like"),
            Reaction::Dislike => f.write_str("dislike"),
        }
    }
}

impl FromStr for Reaction {
    type Err = FunError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "like" | "liked" => Ok(Reaction::Like),
            "dislike" | "disliked" => Ok(Reaction::Dislike),
            other => Err(FunError::InvalidInput(format!("unknown reaction: {other}"))),
        }
    }
}

pub type ReactionMap = BTreeMap<String, Reaction>;

/// Repository over the stored reaction map. Every operation reads the full
/// map, merges, and writes it back.
#[derive(Clone)]
pub struct MenuReactions {
    store: Arc<dyn KeyValueStore>,
    // Serializes read-modify-write of the stored map
    write_lock: Arc<Mutex<()>>,
}

impl MenuReactions {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn load(&self) -> ReactionMap {
        load_json_or_default(self.store.as_ref(), MENU_REACTIONS_KEY).await
    }

    pub async fn get(&self, name: &str) -> Option<Reaction> {
        self.load().await.get(name).copied()
    }

    /// Apply a reaction; applying the one already recorded clears it.
    /// Returns the reaction now stored for `name`.
    pub async fn toggle(&self, name: &str, reaction: Reaction) -> Result<Option<Reaction>> {
        let _write = self.write_lock.lock().await;
        let mut map = self.load().await;
        let next = match map.get(name) {
            Some(current) if *current == reaction => None,
            _ => Some(reaction),
        };

        match next {
            Some(r) => {
                map.insert(name.to_string(), r);
            }
            None => {
                map.remove(name);
            }
        }

        save_json(self.store.as_ref(), MENU_REACTIONS_KEY, &map).await?;
        debug!("Reaction for {:?} is now {:?}", name, next);
        Ok(next)
    }
}

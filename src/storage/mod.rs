// src/storage/mod.rs
// Key/value persistence standing in for per-browser local storage

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

/// Key holding the comment list
pub const COMMENTS_KEY: &str = "foodComments";
/// Key holding the menu reaction map
pub const MENU_REACTIONS_KEY: &str = "menuReactions";

/// Whole-value string storage. Writers overwrite the full value.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// Read and parse a JSON value. Missing, unreadable or unparsable values fall
/// back to `T::default()` and are logged.
pub async fn load_json_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match store.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!("Failed to read {}: {}", key, e);
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to parse stored {}: {}", key, e);
            T::default()
        }
    }
}

/// Serialize and overwrite the stored value
pub async fn save_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.put(key, &raw).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_load_json_missing_key_defaults() {
        let store = MemoryKvStore::new();
        let value: Vec<String> = load_json_or_default(&store, "nothing").await;
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn test_load_json_corrupt_value_defaults() {
        let store = MemoryKvStore::new();
        store.put("k", "{not json").await.unwrap();
        let value: BTreeMap<String, String> = load_json_or_default(&store, "k").await;
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = MemoryKvStore::new();
        save_json(&store, "k", &vec!["a", "b"]).await.unwrap();
        let value: Vec<String> = load_json_or_default(&store, "k").await;
        assert_eq!(value, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some(r#"["a","b"]"#));
    }
}

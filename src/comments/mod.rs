// src/comments/mod.rs
// Comment board persisted as one JSON list, newest first

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{FunError, Result};
use crate::storage::{load_json_or_default, save_json, KeyValueStore, COMMENTS_KEY};

pub const MAX_COMMENT_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    #[serde(alias = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "likes")]
    pub like_count: u32,
    #[serde(alias = "isLiked")]
    pub liked_by_viewer: bool,
}

impl Comment {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            created_at: Utc::now(),
            like_count: 0,
            liked_by_viewer: false,
        }
    }

    pub fn toggle_like(&mut self) {
        if self.liked_by_viewer {
            self.like_count = self.like_count.saturating_sub(1);
        } else {
            self.like_count += 1;
        }
        self.liked_by_viewer = !self.liked_by_viewer;
    }
}

/// Accepts at most 100 characters (as typed) and something besides whitespace.
/// Returns the trimmed text.
pub fn validate_comment(raw: &str) -> Result<String> {
    let chars = raw.chars().count();
    if chars > MAX_COMMENT_CHARS {
        return Err(FunError::InvalidInput(format!(
            "comment is {chars} characters, limit is {MAX_COMMENT_CHARS}"
        )));
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FunError::InvalidInput("comment is empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Relative age label shown next to a comment
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "刚刚".to_string()
    } else if minutes < 60 {
        format!("{minutes}分钟前")
    } else if hours < 24 {
        format!("{hours}小时前")
    } else if days < 7 {
        format!("{days}天前")
    } else {
        created_at.format("%Y-%m-%d").to_string()
    }
}

pub struct CommentBoard {
    store: Arc<dyn KeyValueStore>,
    comments: Mutex<Vec<Comment>>,
}

impl CommentBoard {
    /// Load the persisted list; unreadable data starts an empty board
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let comments: Vec<Comment> = load_json_or_default(store.as_ref(), COMMENTS_KEY).await;
        debug!("Loaded {} comments", comments.len());
        Self {
            store,
            comments: Mutex::new(comments),
        }
    }

    pub async fn list(&self) -> Vec<Comment> {
        self.comments.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.comments.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.comments.lock().await.is_empty()
    }

    pub async fn add(&self, raw: &str) -> Result<Comment> {
        let text = validate_comment(raw)?;
        let comment = Comment::new(text);

        let mut comments = self.comments.lock().await;
        let mut updated = Vec::with_capacity(comments.len() + 1);
        updated.push(comment.clone());
        updated.extend(comments.iter().cloned());

        save_json(self.store.as_ref(), COMMENTS_KEY, &updated).await?;
        *comments = updated;
        info!("Comment {} added", comment.id);
        Ok(comment)
    }

    /// Flip the viewer's like on one comment, adjusting the count by one
    pub async fn toggle_like(&self, id: &str) -> Result<Comment> {
        let mut comments = self.comments.lock().await;
        let mut updated = comments.clone();
        let comment = updated
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| FunError::NotFound(format!("comment {id}")))?;
        comment.toggle_like();
        let result = comment.clone();

        save_json(self.store.as_ref(), COMMENTS_KEY, &updated).await?;
        *comments = updated;
        Ok(result)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut comments = self.comments.lock().await;
        if !comments.iter().any(|c| c.id == id) {
            return Err(FunError::NotFound(format!("comment {id}")));
        }
        let updated: Vec<Comment> = comments.iter().filter(|c| c.id != id).cloned().collect();

        save_json(self.store.as_ref(), COMMENTS_KEY, &updated).await?;
        *comments = updated;
        info!("Comment {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_validate_length_boundary() {
        let exactly = "吃".repeat(100);
        assert_eq!(validate_comment(&exactly).unwrap(), exactly);

        let over = "吃".repeat(101);
        assert!(matches!(validate_comment(&over), Err(FunError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_blank_and_trims() {
        assert!(validate_comment("   ").is_err());
        assert!(validate_comment("").is_err());
        assert_eq!(validate_comment("  好吃  ").unwrap(), "好吃");
    }

    #[test]
    fn test_toggle_like_adjusts_by_one() {
        let mut comment = Comment::new("hi".into());
        comment.toggle_like();
        assert_eq!((comment.like_count, comment.liked_by_viewer), (1, true));
        comment.toggle_like();
        assert_eq!((comment.like_count, comment.liked_by_viewer), (0, false));
    }

    #[test]
    fn test_relative_time_labels() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::seconds(30), now), "刚刚");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5分钟前");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3小时前");
        assert_eq!(relative_time(now - Duration::days(2), now), "2天前");
        assert_eq!(relative_time(now - Duration::days(30), now), "2024-05-11");
    }

    #[test]
    fn test_reads_legacy_browser_format() {
        let raw = r#"[{"id":"1718000000000","text":"好吃","timestamp":"2024-06-10T06:13:20.000Z","likes":2,"isLiked":true}]"#;
        let comments: Vec<Comment> = serde_json::from_str(raw).unwrap();
        assert_eq!(comments[0].like_count, 2);
        assert!(comments[0].liked_by_viewer);
        assert_eq!(comments[0].id, "1718000000000");
    }
}

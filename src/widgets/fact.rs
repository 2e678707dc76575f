// src/widgets/fact.rs
// Food fact widget with a capped "knowledge level"

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::InFlight;
use crate::error::{FunError, Result};
use crate::generation::{Gateway, Generation, GenerationCategory};

pub const MAX_KNOWLEDGE_LEVEL: u32 = 100;
/// Every Nth provider fact gets the sparkle effect
pub const FACT_EFFECT_EVERY: u64 = 3;
/// Level gained when the viewer likes the current fact
pub const LIKE_BONUS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeLevel {
    Novice,
    Apprentice,
    Expert,
    Master,
}

impl KnowledgeLevel {
    pub fn from_level(level: u32) -> Self {
        match level {
            0..30 => KnowledgeLevel::Novice,
            30..60 => KnowledgeLevel::Apprentice,
            60..90 => KnowledgeLevel::Expert,
            _ => KnowledgeLevel::Master,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KnowledgeLevel::Novice => "知识新手",
            KnowledgeLevel::Apprentice => "知识学徒",
            KnowledgeLevel::Expert => "知识达人",
            KnowledgeLevel::Master => "知识大师",
        }
    }
}

/// How the viewer passed the current fact on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareKind {
    Copy,
    Share,
}

impl ShareKind {
    pub fn bonus(self) -> u32 {
        match self {
            ShareKind::Copy => 2,
            ShareKind::Share => 3,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FactReveal {
    #[serde(flatten)]
    pub generation: Generation,
    pub fact_count: u64,
    pub knowledge_level: u32,
    pub rank: KnowledgeLevel,
    pub rank_label: &'static str,
    pub sparkle: bool,
}

/// Progress after a like or share
#[derive(Debug, Clone, Serialize)]
pub struct FactStanding {
    pub fact_count: u64,
    pub knowledge_level: u32,
    pub rank: KnowledgeLevel,
    pub rank_label: &'static str,
    pub liked: bool,
}

#[derive(Debug, Default)]
struct FactProgress {
    fact_count: u64,
    knowledge_level: u32,
    // A fact (provider or backup) is on display
    showing: bool,
    liked: bool,
}

impl FactProgress {
    fn raise(&mut self, amount: u32) {
        self.knowledge_level = (self.knowledge_level + amount).min(MAX_KNOWLEDGE_LEVEL);
    }

    fn standing(&self) -> FactStanding {
        let rank = KnowledgeLevel::from_level(self.knowledge_level);
        FactStanding {
            fact_count: self.fact_count,
            knowledge_level: self.knowledge_level,
            rank,
            rank_label: rank.label(),
            liked: self.liked,
        }
    }
}

pub struct FactWidget {
    gateway: Gateway,
    in_flight: InFlight,
    progress: Mutex<FactProgress>,
}

impl FactWidget {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            in_flight: InFlight::new(),
            progress: Mutex::new(FactProgress::default()),
        }
    }

    pub async fn standing(&self) -> FactStanding {
        self.progress.lock().await.standing()
    }

    pub async fn next(&self) -> Result<FactReveal> {
        let _guard = self.in_flight.begin("fact widget")?;
        self.progress.lock().await.liked = false;

        let generation = self.gateway.generate_or_backup(GenerationCategory::Fact).await;

        let mut progress = self.progress.lock().await;
        progress.showing = true;
        let sparkle = if generation.is_backup() {
            false
        } else {
            progress.fact_count += 1;
            progress.raise(1);
            progress.fact_count % FACT_EFFECT_EVERY == 0
        };

        let rank = KnowledgeLevel::from_level(progress.knowledge_level);
        Ok(FactReveal {
            generation,
            fact_count: progress.fact_count,
            knowledge_level: progress.knowledge_level,
            rank,
            rank_label: rank.label(),
            sparkle,
        })
    }

    /// Toggle the like on the current fact; only liking earns the bonus
    pub async fn like(&self) -> Result<FactStanding> {
        let mut progress = self.progress.lock().await;
        if !progress.showing {
            return Err(FunError::InvalidInput("no fact to like yet".to_string()));
        }

        progress.liked = !progress.liked;
        if progress.liked {
            progress.raise(LIKE_BONUS);
        }
        Ok(progress.standing())
    }

    /// Bonus for copying or sharing the current fact
    pub async fn shared(&self, kind: ShareKind) -> Result<FactStanding> {
        let mut progress = self.progress.lock().await;
        if !progress.showing {
            return Err(FunError::InvalidInput("no fact to share yet".to_string()));
        }

        progress.raise(kind.bonus());
        Ok(progress.standing())
    }
}

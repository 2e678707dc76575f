// src/widgets/easter_egg.rs
// Floating easter-egg button; its look escalates with the click count

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

use super::InFlight;
use crate::error::Result;
use crate::generation::{Gateway, Generation, GenerationCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonTier {
    Dormant,
    Warm,
    Lively,
    Rainbow,
}

impl ButtonTier {
    pub fn from_clicks(clicks: u64) -> Self {
        match clicks {
            0 => ButtonTier::Dormant,
            1..5 => ButtonTier::Warm,
            5..10 => ButtonTier::Lively,
            _ => ButtonTier::Rainbow,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EggReveal {
    #[serde(flatten)]
    pub generation: Generation,
    pub click_count: u64,
    pub tier: ButtonTier,
}

pub struct EasterEggWidget {
    gateway: Gateway,
    in_flight: InFlight,
    clicks: AtomicU64,
}

impl EasterEggWidget {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            in_flight: InFlight::new(),
            clicks: AtomicU64::new(0),
        }
    }

    pub fn click_count(&self) -> u64 {
        self.clicks.load(Ordering::Relaxed)
    }

    pub fn tier(&self) -> ButtonTier {
        ButtonTier::from_clicks(self.click_count())
    }

    /// Every press counts, even one rejected because a reveal is still loading
    pub async fn press(&self) -> Result<EggReveal> {
        let click_count = self.clicks.fetch_add(1, Ordering::Relaxed) + 1;
        let _guard = self.in_flight.begin("easter egg")?;

        let generation = self
            .gateway
            .generate_or_backup(GenerationCategory::EasterEgg)
            .await;

        Ok(EggReveal {
            generation,
            click_count,
            tier: ButtonTier::from_clicks(click_count),
        })
    }
}

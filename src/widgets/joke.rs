// src/widgets/joke.rs

use serde::Serialize;
use tokio::sync::Mutex;

use super::InFlight;
use crate::error::Result;
use crate::generation::{Gateway, Generation, GenerationCategory};

/// Every Nth provider joke gets the confetti effect
pub const JOKE_EFFECT_EVERY: u64 = 5;

#[derive(Debug, Clone, Serialize)]
pub struct JokeReveal {
    #[serde(flatten)]
    pub generation: Generation,
    pub joke_count: u64,
    pub celebrate: bool,
}

pub struct JokeWidget {
    gateway: Gateway,
    in_flight: InFlight,
    joke_count: Mutex<u64>,
}

impl JokeWidget {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            in_flight: InFlight::new(),
            joke_count: Mutex::new(0),
        }
    }

    pub async fn joke_count(&self) -> u64 {
        *self.joke_count.lock().await
    }

    /// Only provider jokes advance the counter; backup jokes leave it alone
    pub async fn next(&self) -> Result<JokeReveal> {
        let _guard = self.in_flight.begin("joke widget")?;
        let generation = self.gateway.generate_or_backup(GenerationCategory::Joke).await;

        let mut count = self.joke_count.lock().await;
        let celebrate = if generation.is_backup() {
            false
        } else {
            *count += 1;
            *count % JOKE_EFFECT_EVERY == 0
        };

        Ok(JokeReveal {
            generation,
            joke_count: *count,
            celebrate,
        })
    }
}

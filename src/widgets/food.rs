// src/widgets/food.rs

use super::InFlight;
use crate::error::Result;
use crate::generation::{Gateway, Generation, GenerationCategory};

/// Free-form dish recommendation, independent of the wheel
pub struct FoodWidget {
    gateway: Gateway,
    in_flight: InFlight,
}

impl FoodWidget {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            in_flight: InFlight::new(),
        }
    }

    pub async fn recommend(&self) -> Result<Generation> {
        let _guard = self.in_flight.begin("food recommender")?;
        Ok(self
            .gateway
            .generate_or_backup(GenerationCategory::RandomFood)
            .await)
    }
}

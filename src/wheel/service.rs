// src/wheel/service.rs
// Async driver: begin spin, wait out the animation, commit, fetch an elaboration

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::selector::{Achievement, SpinPlan, WheelSelector, WheelState};
use super::FoodCategory;
use crate::generation::{Gateway, Generation};

#[derive(Debug, Clone, Serialize)]
pub struct SpinReport {
    pub plan: SpinPlan,
    pub category: FoodCategory,
    pub elaboration: Generation,
    pub celebrate: bool,
    pub achievements: Vec<&'static str>,
    pub share_text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpinOutcome {
    Completed(Box<SpinReport>),
    /// A spin was already in flight; nothing changed
    Ignored,
}

pub fn share_text(category: &FoodCategory, elaboration: &str) -> String {
    format!("今天吃{}！{}", category.name, elaboration)
}

pub struct WheelService {
    selector: Arc<Mutex<WheelSelector>>,
    gateway: Gateway,
    spin_duration: Duration,
}

impl WheelService {
    pub fn new(gateway: Gateway, spin_duration: Duration) -> Self {
        Self {
            selector: Arc::new(Mutex::new(WheelSelector::new())),
            gateway,
            spin_duration,
        }
    }

    pub async fn snapshot(&self) -> WheelState {
        self.selector.lock().await.state().clone()
    }

    pub async fn unlocked_achievements(&self) -> Vec<Achievement> {
        self.selector.lock().await.unlocked().collect()
    }

    /// Run one spin end to end. The lock is released while the animation delay
    /// and the provider call are pending, so concurrent requests see `is_spinning`.
    /// The delay and commit run on their own task: a caller that stops waiting
    /// still leaves the wheel settled and idle.
    pub async fn spin(&self) -> SpinOutcome {
        let plan = match self.selector.lock().await.begin_spin() {
            Some(plan) => plan,
            None => {
                debug!("Spin requested while wheel is spinning; ignored");
                return SpinOutcome::Ignored;
            }
        };

        debug!(
            "Spin #{} adds {}° (target {}°)",
            plan.spin_number, plan.added_rotation, plan.target_rotation
        );

        let settle = {
            let selector = self.selector.clone();
            let delay = self.spin_duration;
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let commit = selector.lock().await.commit(&plan);
                for achievement in &commit.achievements {
                    info!("Achievement unlocked: {}", achievement.label());
                }
                commit
            })
        };

        let commit = match settle.await {
            Ok(commit) => commit,
            Err(e) => {
                warn!("Spin #{} settle task failed: {}", plan.spin_number, e);
                self.selector.lock().await.commit(&plan)
            }
        };

        let elaboration = self.gateway.elaborate(commit.category.name).await;
        let share_text = share_text(&commit.category, &elaboration.text);

        SpinOutcome::Completed(Box::new(SpinReport {
            plan,
            category: commit.category,
            elaboration,
            celebrate: commit.celebrate,
            achievements: commit.achievements.iter().map(|a| a.label()).collect(),
            share_text,
        }))
    }
}

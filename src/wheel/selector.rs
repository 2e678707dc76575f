// src/wheel/selector.rs
// Idle -> Spinning -> Idle state machine over the cumulative wheel rotation

use serde::Serialize;
use std::collections::BTreeSet;

use super::{category_at, spin_rotation, FoodCategory, CELEBRATION_EVERY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Achievement {
    FirstSpin,
    SpinEnthusiast,
    SpinMaster,
    SpinLegend,
}

impl Achievement {
    pub const ALL: [Achievement; 4] = [
        Achievement::FirstSpin,
        Achievement::SpinEnthusiast,
        Achievement::SpinMaster,
        Achievement::SpinLegend,
    ];

    /// Spin count that unlocks this achievement (exact match only)
    pub fn threshold(self) -> u64 {
        match self {
            Achievement::FirstSpin => 1,
            Achievement::SpinEnthusiast => 10,
            Achievement::SpinMaster => 50,
            Achievement::SpinLegend => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Achievement::FirstSpin => "首次旋转",
            Achievement::SpinEnthusiast => "旋转达人",
            Achievement::SpinMaster => "旋转大师",
            Achievement::SpinLegend => "旋转传奇",
        }
    }
}

/// Session-scoped wheel state; never persisted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WheelState {
    pub spin_count: u64,
    pub rotation_degrees: f64,
    pub selected: Option<FoodCategory>,
    pub is_spinning: bool,
}

impl Default for WheelState {
    fn default() -> Self {
        Self {
            spin_count: 0,
            rotation_degrees: 0.0,
            selected: None,
            is_spinning: false,
        }
    }
}

/// What one accepted spin will land on
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpinPlan {
    /// 1-based spin number, equal to the spin count after this spin
    pub spin_number: u64,
    pub added_rotation: f64,
    pub target_rotation: f64,
    pub category: FoodCategory,
}

/// Result of settling a spin once the animation delay elapsed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinCommit {
    pub category: FoodCategory,
    pub celebrate: bool,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Default)]
pub struct WheelSelector {
    state: WheelState,
    unlocked: BTreeSet<Achievement>,
}

impl WheelSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn unlocked(&self) -> impl Iterator<Item = Achievement> + '_ {
        self.unlocked.iter().copied()
    }

    /// Start a spin. Returns `None` (and changes nothing) while a spin is in flight.
    pub fn begin_spin(&mut self) -> Option<SpinPlan> {
        if self.state.is_spinning {
            return None;
        }

        let added_rotation = spin_rotation(self.state.spin_count);
        let target_rotation = self.state.rotation_degrees + added_rotation;
        let category = category_at(target_rotation);

        self.state.is_spinning = true;
        self.state.selected = None;
        self.state.rotation_degrees = target_rotation;
        self.state.spin_count += 1;

        Some(SpinPlan {
            spin_number: self.state.spin_count,
            added_rotation,
            target_rotation,
            category,
        })
    }

    /// Settle the in-flight spin: expose the selection and evaluate celebration/achievements
    pub fn commit(&mut self, plan: &SpinPlan) -> SpinCommit {
        self.state.selected = Some(plan.category);
        self.state.is_spinning = false;

        let count = self.state.spin_count;
        let achievements: Vec<Achievement> = Achievement::ALL
            .into_iter()
            .filter(|a| a.threshold() == count && self.unlocked.insert(*a))
            .collect();

        SpinCommit {
            category: plan.category,
            celebrate: count % CELEBRATION_EVERY == 0,
            achievements,
        }
    }
}

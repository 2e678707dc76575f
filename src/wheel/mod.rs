// src/wheel/mod.rs
// Food wheel: fixed categories and the golden-angle rotation math

pub mod selector;
pub mod service;

use serde::Serialize;

pub use selector::{Achievement, SpinCommit, SpinPlan, WheelSelector, WheelState};
pub use service::{SpinOutcome, SpinReport, WheelService};

/// Golden-angle increment between successive spins, in degrees
pub const GOLDEN_ANGLE: f64 = 137.5;
/// Five full turns added to every spin
pub const BASE_SPIN_DEGREES: f64 = 1800.0;
pub const SEGMENT_COUNT: usize = 12;
pub const SEGMENT_DEGREES: f64 = 360.0 / SEGMENT_COUNT as f64;
/// Every Nth spin triggers the cosmetic celebration
pub const CELEBRATION_EVERY: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodCategory {
    pub name: &'static str,
    pub emoji: &'static str,
    pub color_tag: &'static str,
}

/// Wheel segments in clockwise order starting at the pointer
pub const FOOD_CATEGORIES: [FoodCategory; SEGMENT_COUNT] = [
    FoodCategory { name: "火锅", emoji: "🍲", color_tag: "bg-red-500" },
    FoodCategory { name: "烧烤", emoji: "🍖", color_tag: "bg-orange-500" },
    FoodCategory { name: "日料", emoji: "🍣", color_tag: "bg-pink-500" },
    FoodCategory { name: "川菜", emoji: "🌶️", color_tag: "bg-red-600" },
    FoodCategory { name: "粤菜", emoji: "🥟", color_tag: "bg-green-500" },
    FoodCategory { name: "西餐", emoji: "🍽️", color_tag: "bg-blue-500" },
    FoodCategory { name: "韩料", emoji: "🍜", color_tag: "bg-yellow-500" },
    FoodCategory { name: "甜品", emoji: "🍰", color_tag: "bg-purple-500" },
    FoodCategory { name: "快餐", emoji: "🍔", color_tag: "bg-yellow-600" },
    FoodCategory { name: "素食", emoji: "🥗", color_tag: "bg-green-400" },
    FoodCategory { name: "海鲜", emoji: "🦐", color_tag: "bg-cyan-500" },
    FoodCategory { name: "小吃", emoji: "🥨", color_tag: "bg-amber-500" },
];

/// `(n × 137.5) mod 360`, always in [0, 360)
pub fn increment_angle(spin_count: u64) -> f64 {
    (spin_count as f64 * GOLDEN_ANGLE).rem_euclid(360.0)
}

/// Degrees added by the spin with the given prior spin count
pub fn spin_rotation(spin_count: u64) -> f64 {
    BASE_SPIN_DEGREES + increment_angle(spin_count)
}

/// Segment under the pointer (fixed at the top) for a cumulative rotation.
/// Half a segment is added so ties at a boundary go to the segment the pointer enters.
pub fn selected_index(rotation_degrees: f64) -> usize {
    let remainder = rotation_degrees.rem_euclid(360.0);
    let slot = ((360.0 - remainder + SEGMENT_DEGREES / 2.0) / SEGMENT_DEGREES).floor() as usize;
    slot % SEGMENT_COUNT
}

pub fn category_at(rotation_degrees: f64) -> FoodCategory {
    FOOD_CATEGORIES[selected_index(rotation_degrees)]
}

pub fn find_category(name: &str) -> Option<FoodCategory> {
    FOOD_CATEGORIES.iter().copied().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_angle_range() {
        for n in 0..2000u64 {
            let angle = increment_angle(n);
            assert!((0.0..360.0).contains(&angle), "n={n} angle={angle}");
            assert_eq!(angle, (n as f64 * 137.5) % 360.0);
        }
        assert_eq!(increment_angle(0), 0.0);
        assert_eq!(increment_angle(1), 137.5);
        assert_eq!(increment_angle(3), 52.5);
    }

    #[test]
    fn test_selected_index_per_segment() {
        // Remainder 0 lands on the first category
        assert_eq!(selected_index(0.0), 0);
        assert_eq!(category_at(0.0).name, "火锅");

        let expected = [0, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        for (k, want) in expected.iter().enumerate() {
            assert_eq!(selected_index(k as f64 * 30.0), *want, "k={k}");
        }
    }

    #[test]
    fn test_selected_index_depends_only_on_remainder() {
        for base in [0.0, 17.5, 137.5, 299.9] {
            let idx = selected_index(base);
            for turns in 1..10 {
                assert_eq!(selected_index(base + 360.0 * turns as f64), idx);
            }
        }
    }

    #[test]
    fn test_half_segment_boundary() {
        assert_eq!(selected_index(15.0), 0);
        assert_eq!(selected_index(15.5), 11);
        assert_eq!(selected_index(14.5), 0);
    }

    #[test]
    fn test_find_category() {
        assert_eq!(find_category("甜品").map(|c| c.emoji), Some("🍰"));
        assert!(find_category("披萨").is_none());
    }
}

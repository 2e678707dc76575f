// tests/wheel_test.rs

mod test_helpers;

use std::sync::Arc;
use std::time::Duration;

use eleme_fun::generation::backup::elaboration_for;
use eleme_fun::generation::{Gateway, GenerationSource};
use eleme_fun::wheel::{SpinOutcome, WheelService, FOOD_CATEGORIES};
use test_helpers::StubProvider;

fn completed(outcome: SpinOutcome) -> eleme_fun::wheel::SpinReport {
    match outcome {
        SpinOutcome::Completed(report) => *report,
        SpinOutcome::Ignored => panic!("spin was ignored"),
    }
}

#[tokio::test]
async fn test_spin_sequence_and_backup_elaboration() {
    let provider = StubProvider::failing();
    let wheel = WheelService::new(Gateway::new(provider.clone()), Duration::ZERO);

    let first = completed(wheel.spin().await);
    assert_eq!(first.category.name, "火锅");
    assert_eq!(first.elaboration.source, GenerationSource::Backup);
    assert!(first.elaboration.notice.is_none());
    assert_eq!(first.elaboration.text, elaboration_for("火锅"));
    assert_eq!(first.share_text, format!("今天吃火锅！{}", elaboration_for("火锅")));
    assert_eq!(first.achievements, vec!["首次旋转"]);

    let second = completed(wheel.spin().await);
    assert_eq!(second.category.name, "甜品");
    assert_eq!(second.plan.target_rotation, 3737.5);
    assert!(second.achievements.is_empty());

    let state = wheel.snapshot().await;
    assert_eq!(state.spin_count, 2);
    assert!(!state.is_spinning);
    assert_eq!(state.selected.map(|c| c.name), Some("甜品"));
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_provider_elaboration_is_used_when_available() {
    let provider = StubProvider::replying("推荐鸳鸯锅，麻辣清汤都能吃到！");
    let wheel = WheelService::new(Gateway::new(provider), Duration::ZERO);

    let report = completed(wheel.spin().await);
    assert_eq!(report.elaboration.source, GenerationSource::Provider);
    assert_eq!(report.elaboration.text, "推荐鸳鸯锅，麻辣清汤都能吃到！");
}

#[tokio::test]
async fn test_spin_while_in_flight_is_ignored() {
    let wheel = Arc::new(WheelService::new(
        Gateway::new(StubProvider::failing()),
        Duration::from_millis(300),
    ));

    let running = {
        let wheel = wheel.clone();
        tokio::spawn(async move { wheel.spin().await })
    };

    // Wait for the first spin to take the wheel
    while !wheel.snapshot().await.is_spinning {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    let during = wheel.snapshot().await;

    assert!(matches!(wheel.spin().await, SpinOutcome::Ignored));
    assert_eq!(wheel.snapshot().await, during);
    assert_eq!(during.spin_count, 1);
    assert_eq!(during.rotation_degrees, 1800.0);
    assert!(during.selected.is_none());

    let report = completed(running.await.unwrap());
    assert_eq!(report.plan.spin_number, 1);
    assert_eq!(wheel.snapshot().await.spin_count, 1);
}

#[tokio::test]
async fn test_every_outcome_is_a_known_category() {
    let wheel = WheelService::new(Gateway::new(StubProvider::failing()), Duration::ZERO);
    let mut celebrations = 0;
    for _ in 0..25 {
        let report = completed(wheel.spin().await);
        assert!(FOOD_CATEGORIES.contains(&report.category));
        assert_eq!(report.elaboration.text, elaboration_for(report.category.name));
        if report.celebrate {
            celebrations += 1;
        }
    }
    assert_eq!(celebrations, 5);
    assert_eq!(wheel.unlocked_achievements().await.len(), 2);
}

#[tokio::test]
async fn test_abandoned_spin_still_settles() {
    let wheel = WheelService::new(
        Gateway::new(StubProvider::failing()),
        Duration::from_millis(200),
    );

    // Caller stops waiting mid-animation
    let abandoned = tokio::time::timeout(Duration::from_millis(20), wheel.spin()).await;
    assert!(abandoned.is_err());
    assert!(wheel.snapshot().await.is_spinning);

    tokio::time::sleep(Duration::from_millis(500)).await;

    let state = wheel.snapshot().await;
    assert!(!state.is_spinning);
    assert_eq!(state.spin_count, 1);
    assert_eq!(state.selected.map(|c| c.name), Some("火锅"));

    let next = completed(wheel.spin().await);
    assert_eq!(next.plan.spin_number, 2);
    assert_eq!(next.category.name, "甜品");
}

use momentum::cache::{PanelCache, PanelCacheKey, PanelResponse};
use momentum::panel::synthesize;
use momentum::scoring::{Pillar, ScoreResult};
use momentum::series::Timeframe;
use std::cell::Cell;
use std::time::Duration;

fn key(version: &str) -> PanelCacheKey {
    PanelCacheKey {
        user: "user-1".to_string(),
        timeframe: Timeframe::Month,
        pillar: Pillar::Career,
        anchor_id: "2024-05-01".to_string(),
        algorithm_version: version.to_string(),
    }
}

fn response() -> PanelResponse {
    let result = ScoreResult {
        score: 42.0,
        tags: vec!["Sun-Saturn Square".to_string()],
    };
    PanelResponse {
        panel: synthesize(&result, Pillar::Career, Timeframe::Month),
        score: result.score,
        tags: result.tags,
        anchor_id: "2024-05-01".to_string(),
    }
}

#[test]
fn test_hit_and_miss_counters() {
    let cache = PanelCache::new(10, Duration::from_secs(60));
    assert!(cache.get(&key("v1")).is_none());
    cache.insert(key("v1"), response());
    assert_eq!(cache.get(&key("v1")), Some(response()));
    assert!(cache.get(&key("v2")).is_none());
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.misses(), 2);
}

#[test]
fn test_compute_runs_once() {
    let cache = PanelCache::default();
    let calls = Cell::new(0);
    for _ in 0..3 {
        let got = cache
            .get_or_try_insert_with(key("v1"), || {
                calls.set(calls.get() + 1);
                Ok::<_, String>(response())
            })
            .unwrap();
        assert_eq!(got.score, 42.0);
    }
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_errors_are_not_cached() {
    let cache = PanelCache::default();
    let failed = cache.get_or_try_insert_with(key("v1"), || Err::<PanelResponse, _>("boom"));
    assert!(failed.is_err());
    assert!(cache.get(&key("v1")).is_none());
}

#[test]
fn test_composite_key() {
    assert_eq!(key("v0.9.7").composite(), "user-1:Month:Career:2024-05-01:v0.9.7");
}

#[test]
fn test_response_json_is_camel_case() {
    let json = serde_json::to_value(response()).unwrap();
    assert_eq!(json["anchorId"], "2024-05-01");
    assert_eq!(json["score"], 42.0);
}

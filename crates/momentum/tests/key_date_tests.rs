mod common;

use common::{at, snapshot, MovingSunProvider};
use momentum::ephemeris::Body;
use momentum::key_dates::find_next_key_date;
use momentum::scoring::Pillar;

#[test]
fn test_finds_first_new_opposition() {
    // Natal Sun at 0°, the rest at 200°; the transit Sun starts at 30° and
    // only reaches a major aspect (opposing natal Sun) on day 15.
    let natal = snapshot(at(1990, 1, 1), &[(Body::Sun, 0.0)], 200.0);
    let found = find_next_key_date(&MovingSunProvider, &natal, at(2024, 1, 1), 30, Pillar::Overall)
        .unwrap()
        .unwrap();
    assert_eq!(found.date, "2024-01-16");
    assert_eq!(found.tag, "Sun-Sun Opposition");
}

#[test]
fn test_no_key_date_inside_window() {
    let natal = snapshot(at(1990, 1, 1), &[(Body::Sun, 0.0)], 200.0);
    let found =
        find_next_key_date(&MovingSunProvider, &natal, at(2024, 1, 1), 10, Pillar::Overall).unwrap();
    assert!(found.is_none());
}

use momentum::aspects::{
    all_matches, angular_distance, calculate_aspect, match_aspect, min_aspect_spacing, Aspect,
    HitStrength, ASPECTS, ORB_MODERATE,
};

#[test]
fn test_angular_distance_symmetric_and_bounded() {
    let mut a = 0.0;
    while a < 360.0 {
        let mut b = 0.0;
        while b < 360.0 {
            let d = angular_distance(a, b);
            assert_eq!(d, angular_distance(b, a));
            assert!((0.0..=180.0).contains(&d), "dist({a}, {b}) = {d}");
            b += 7.5;
        }
        a += 7.5;
    }
}

#[test]
fn test_angular_distance_wraps() {
    assert_eq!(angular_distance(359.0, 1.0), 2.0);
    assert_eq!(angular_distance(10.0, 190.0), 180.0);
}

#[test]
fn test_exact_conjunction_and_opposition_are_strong() {
    let conj = calculate_aspect(100.0, 100.0).unwrap();
    assert_eq!(conj.aspect, Aspect::Conjunction);
    assert_eq!(conj.strength, HitStrength::Strong);
    assert_eq!(all_matches(0.0), vec![Aspect::Conjunction]);

    let opp = calculate_aspect(100.0, 280.0).unwrap();
    assert_eq!(opp.aspect, Aspect::Opposition);
    assert_eq!(opp.strength, HitStrength::Strong);
    assert_eq!(all_matches(180.0), vec![Aspect::Opposition]);
}

#[test]
fn test_orb_boundaries() {
    let strong = match_aspect(92.0).unwrap();
    assert_eq!(strong.aspect, Aspect::Square);
    assert_eq!(strong.strength, HitStrength::Strong);

    let moderate = match_aspect(94.0).unwrap();
    assert_eq!(moderate.aspect, Aspect::Square);
    assert_eq!(moderate.strength, HitStrength::Moderate);
    assert_eq!(moderate.delta, 4.0);

    assert!(match_aspect(95.0).is_none());
    assert!(match_aspect(30.0).is_none());
    assert!(match_aspect(150.0).is_none());
}

#[test]
fn test_square_moon_mars() {
    let hit = calculate_aspect(100.0, 10.0).unwrap();
    assert_eq!(hit.aspect, Aspect::Square);
    assert_eq!(hit.delta, 0.0);
}

#[test]
fn test_table_spacing_prevents_double_matches() {
    assert!(min_aspect_spacing() > 2.0 * ORB_MODERATE);

    for tenth in 0..=1800 {
        let separation = f64::from(tenth) / 10.0;
        let matches = all_matches(separation);
        assert!(matches.len() <= 1, "{separation}° matches {matches:?}");
        assert_eq!(match_aspect(separation).map(|h| h.aspect), matches.first().copied());
    }
}

#[test]
fn test_aspect_names_round_trip() {
    for aspect in ASPECTS {
        assert_eq!(Aspect::from_name(aspect.name()), Some(aspect));
    }
    assert_eq!(Aspect::from_name("Quincunx"), None);
}

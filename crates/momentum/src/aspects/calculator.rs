use crate::aspects::types::{Aspect, AspectHit, HitStrength, ASPECTS, ORB_MODERATE, ORB_STRONG};

/// Shortest arc between two longitudes, in [0, 180]
pub fn angular_distance(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// First aspect in table order whose orb contains `separation`.
///
/// Relies on the table spacing so that the first match is the only match;
/// `min_aspect_spacing` exposes the spacing for checks.
pub fn match_aspect(separation: f64) -> Option<AspectHit> {
    ASPECTS.iter().find_map(|&aspect| {
        let delta = (separation - aspect.angle()).abs();
        if delta > ORB_MODERATE {
            return None;
        }
        let strength = if delta <= ORB_STRONG {
            HitStrength::Strong
        } else {
            HitStrength::Moderate
        };
        Some(AspectHit {
            aspect,
            delta,
            strength,
        })
    })
}

/// Aspect between two longitudes
pub fn calculate_aspect(lon1: f64, lon2: f64) -> Option<AspectHit> {
    match_aspect(angular_distance(lon1, lon2))
}

/// Every aspect whose orb contains `separation`, ignoring table order
pub fn all_matches(separation: f64) -> Vec<Aspect> {
    ASPECTS
        .iter()
        .copied()
        .filter(|a| (separation - a.angle()).abs() <= ORB_MODERATE)
        .collect()
}

/// Smallest gap between any two aspect angles
pub fn min_aspect_spacing() -> f64 {
    let mut min = f64::MAX;
    for (i, a) in ASPECTS.iter().enumerate() {
        for b in &ASPECTS[i + 1..] {
            min = min.min((a.angle() - b.angle()).abs());
        }
    }
    min
}

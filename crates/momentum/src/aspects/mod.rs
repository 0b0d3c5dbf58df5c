pub mod calculator;
pub mod types;

pub use calculator::{
    all_matches, angular_distance, calculate_aspect, match_aspect, min_aspect_spacing,
};
pub use types::{Aspect, AspectHit, HitStrength, ASPECTS, ORB_MODERATE, ORB_STRONG};

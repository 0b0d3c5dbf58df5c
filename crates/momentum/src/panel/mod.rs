pub mod synthesizer;
pub mod templates;
pub mod types;

pub use synthesizer::{generate_panel_data, parse_tag, synthesize, TagParts};
pub use types::{Advice, How, Overview, PanelData, What, WhyItem};

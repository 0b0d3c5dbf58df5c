use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub title: String,
    pub summary: String,
}

/// One driver behind the score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhyItem {
    pub driver: String,
    pub evidence: String,
    pub impact: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct What {
    pub themes: Vec<String>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub domain: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct How {
    #[serde(rename = "do")]
    pub do_: Vec<Advice>,
    pub avoid: Vec<Advice>,
}

/// Narrative panel for one anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelData {
    pub overview: Overview,
    pub why: Vec<WhyItem>,
    pub what: What,
    pub how: How,
}

use serde::Deserialize;

/// Body of `POST /chart`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    pub birth_date: Option<String>,
    pub birth_time: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// `YYYY-MM-DD` or RFC 3339
    pub start_date: Option<String>,
    pub days: Option<u32>,
    /// Only `Day` is served here; month and year grids come from `/chart/anchors`
    pub timeframe: Option<String>,
    pub pillar: Option<String>,
}

/// Body of `POST /chart/anchors`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorsRequest {
    pub birth_date: Option<String>,
    pub birth_time: Option<String>,
    pub start_year: Option<i32>,
}

/// Body of `POST /chart/days`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaysRequest {
    pub birth_date: Option<String>,
    pub birth_time: Option<String>,
    /// `YYYY-MM`
    pub month: Option<String>,
    pub pillar: Option<String>,
}

/// Body of `POST /api/panel`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelRequest {
    pub birth_date: Option<String>,
    pub birth_time: Option<String>,
    pub user_id: Option<String>,
    pub timeframe: Option<String>,
    pub pillar: Option<String>,
    /// Anchor id, `YYYY-MM-DD`
    pub id: Option<String>,
}

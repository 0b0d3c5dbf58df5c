use crate::error::{missing_fields, ApiError};
use crate::requests::{AnchorsRequest, ChartRequest, DaysRequest, PanelRequest};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use momentum::anchors::{parse_anchor_id, parse_month};
use momentum::natal::{birth_instant, natal_chart};
use momentum::panel::synthesize;
use momentum::{
    calculate_score, calculate_series, AnchorBuilder, Anchors, MomentumError, MomentumPoint,
    PanelCacheKey, PanelResponse, Pillar, PositionProvider, Timeframe,
};
use std::sync::Arc;

/// Upper bound on `days` for a single `/chart` request
pub const MAX_CHART_DAYS: u32 = 3_660;

type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn root() -> &'static str {
    "Momentum API is running"
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(req)| req)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

async fn run_blocking<T, F>(state: Arc<AppState>, job: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&AppState) -> Result<T, ApiError> + Send + 'static,
{
    let out = tokio::task::spawn_blocking(move || job(state.as_ref())).await??;
    Ok(Json(out))
}

fn pillar_or_default(name: Option<&str>) -> Pillar {
    name.map(Pillar::from_name_lossy).unwrap_or_default()
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

fn parse_start_date(value: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(midnight(date));
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ApiError::BadRequest(format!("Invalid startDate: {value}")))
}

/// Daily series over `days` days from `startDate`
pub fn chart_series(state: &AppState, req: ChartRequest) -> Result<Vec<MomentumPoint>, ApiError> {
    missing_fields(&[
        ("birthDate", req.birth_date.is_none()),
        ("lat", req.lat.is_none()),
        ("lon", req.lon.is_none()),
    ])?;
    let birth_date = req.birth_date.as_deref().unwrap_or_default();
    if let Some(name) = req.timeframe.as_deref() {
        let timeframe = name.parse::<Timeframe>()?;
        if timeframe != Timeframe::Day {
            return Err(ApiError::BadRequest(format!(
                "/chart serves daily series only; use /chart/anchors for {timeframe}"
            )));
        }
    }
    let days = req.days.unwrap_or(state.settings.chart.default_days);
    if days > MAX_CHART_DAYS {
        return Err(ApiError::BadRequest(format!(
            "days must be at most {MAX_CHART_DAYS}"
        )));
    }

    let start = match req.start_date.as_deref() {
        Some(value) => parse_start_date(value)?,
        None => {
            let today = Utc::now().date_naive();
            midnight(today) - Duration::days(i64::from(state.settings.chart.lookback_days))
        }
    };
    let pillar = pillar_or_default(req.pillar.as_deref());
    log::debug!(
        "Chart for {} at ({:?}, {:?}): {} days from {}",
        birth_date,
        req.lat,
        req.lon,
        days,
        start.format("%Y-%m-%d")
    );

    let natal = natal_chart(
        &state.provider,
        birth_date,
        Some(state.birth_time(req.birth_time.as_deref())),
    )?;
    let instants: Vec<DateTime<Utc>> = (0..days)
        .map(|i| start + Duration::days(i64::from(i)))
        .collect();
    let transits = state
        .provider
        .snapshots(&instants)
        .map_err(MomentumError::from)?;
    Ok(calculate_series(
        &natal,
        &transits,
        Timeframe::Day,
        pillar,
        None,
    ))
}

/// Year and month grids starting at `startYear` (birth year by default)
pub fn anchor_grids(state: &AppState, req: AnchorsRequest) -> Result<Anchors, ApiError> {
    missing_fields(&[("birthDate", req.birth_date.is_none())])?;
    let birth_date = req.birth_date.as_deref().unwrap_or_default();
    let time = state.birth_time(req.birth_time.as_deref());

    let start_year = match req.start_year {
        Some(year) => year,
        None => birth_instant(birth_date, Some(time))?.year(),
    };
    let natal = natal_chart(&state.provider, birth_date, Some(time))?;
    let builder = AnchorBuilder::new(Arc::clone(&state.provider))
        .with_span_years(state.settings.chart.anchor_years);
    Ok(builder.generate_anchors(&natal, start_year)?)
}

/// Days of `month`, normalized to the month anchor
pub fn day_expansion(state: &AppState, req: DaysRequest) -> Result<Vec<MomentumPoint>, ApiError> {
    missing_fields(&[
        ("birthDate", req.birth_date.is_none()),
        ("month", req.month.is_none()),
    ])?;
    let birth_date = req.birth_date.as_deref().unwrap_or_default();
    let (year, month) = parse_month(req.month.as_deref().unwrap_or_default())?;
    let pillar = pillar_or_default(req.pillar.as_deref());

    let natal = natal_chart(
        &state.provider,
        birth_date,
        Some(state.birth_time(req.birth_time.as_deref())),
    )?;
    let builder = AnchorBuilder::new(Arc::clone(&state.provider));
    Ok(builder.expand_days(&natal, year, month, pillar)?)
}

/// Narrative panel for one anchor, memoized per user and algorithm version
pub fn panel_for_anchor(state: &AppState, req: PanelRequest) -> Result<PanelResponse, ApiError> {
    missing_fields(&[
        ("birthDate", req.birth_date.is_none()),
        ("id", req.id.is_none()),
    ])?;
    let birth_date = req.birth_date.unwrap_or_default();
    let anchor_id = req.id.unwrap_or_default();
    let time = state.birth_time(req.birth_time.as_deref()).to_string();
    let timeframe = match req.timeframe.as_deref() {
        Some(name) => name.parse::<Timeframe>()?,
        None => Timeframe::default(),
    };
    let pillar = pillar_or_default(req.pillar.as_deref());

    let key = PanelCacheKey {
        user: req
            .user_id
            .unwrap_or_else(|| format!("{}T{}", birth_date, time)),
        timeframe,
        pillar,
        anchor_id: anchor_id.clone(),
        algorithm_version: state.settings.panel.algorithm_version.clone(),
    };

    state.cache.get_or_try_insert_with(key, || {
        let at = parse_anchor_id(&anchor_id)?;
        let natal = natal_chart(&state.provider, &birth_date, Some(&time))?;
        let transit = state.provider.snapshot(at).map_err(MomentumError::from)?;
        let result = calculate_score(&natal, &transit, pillar);
        Ok::<_, ApiError>(PanelResponse {
            panel: synthesize(&result, pillar, timeframe),
            score: result.score,
            tags: result.tags,
            anchor_id: anchor_id.clone(),
        })
    })
}

pub async fn chart(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChartRequest>, JsonRejection>,
) -> ApiResult<Vec<MomentumPoint>> {
    let req = body(payload)?;
    run_blocking(state, move |s| chart_series(s, req)).await
}

pub async fn anchors(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnchorsRequest>, JsonRejection>,
) -> ApiResult<Anchors> {
    let req = body(payload)?;
    run_blocking(state, move |s| anchor_grids(s, req)).await
}

pub async fn days(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DaysRequest>, JsonRejection>,
) -> ApiResult<Vec<MomentumPoint>> {
    let req = body(payload)?;
    run_blocking(state, move |s| day_expansion(s, req)).await
}

pub async fn panel(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PanelRequest>, JsonRejection>,
) -> ApiResult<PanelResponse> {
    let req = body(payload)?;
    run_blocking(state, move |s| panel_for_anchor(s, req)).await
}

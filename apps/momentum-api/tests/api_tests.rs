use axum::body::Body as HttpBody;
use axum::extract::State;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use momentum::ephemeris::{Body, EphemerisError, PlanetPosition, PositionProvider};
use momentum::Pillar;
use momentum_api::requests::{AnchorsRequest, ChartRequest, DaysRequest, PanelRequest};
use momentum_api::routes;
use momentum_api::{build_router, ApiError, AppState};
use momentum_config::Settings;
use std::sync::Arc;
use tower::ServiceExt;

/// Every body at 0° at every instant
struct StillProvider;

impl PositionProvider for StillProvider {
    fn positions(&self, _at: DateTime<Utc>) -> Result<Vec<PlanetPosition>, EphemerisError> {
        Ok(Body::ALL.iter().map(|&b| PlanetPosition::new(b, 0.0)).collect())
    }
}

struct FailingProvider;

impl PositionProvider for FailingProvider {
    fn positions(&self, at: DateTime<Utc>) -> Result<Vec<PlanetPosition>, EphemerisError> {
        Err(EphemerisError::UnsupportedDate {
            datetime: at,
            min_year: 1000,
            max_year: 3000,
        })
    }
}

fn state_with(provider: Arc<dyn PositionProvider>) -> Arc<AppState> {
    let mut settings = Settings::default();
    settings.chart.anchor_years = 2;
    Arc::new(AppState::new(settings, provider))
}

fn still_state() -> Arc<AppState> {
    state_with(Arc::new(StillProvider))
}

fn panel_request(id: &str) -> PanelRequest {
    PanelRequest {
        birth_date: Some("1990-05-15".to_string()),
        user_id: Some("user-7".to_string()),
        timeframe: Some("Month".to_string()),
        pillar: Some("Career".to_string()),
        id: Some(id.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_root_is_alive() {
    assert_eq!(routes::root().await, "Momentum API is running");
    let _router = build_router(still_state());
}

#[test]
fn test_chart_lists_missing_fields() {
    let req = ChartRequest {
        birth_date: Some("1990-05-15".to_string()),
        ..Default::default()
    };
    let err = routes::chart_series(&still_state(), req).unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "Missing required fields: lat, lon");
}

#[tokio::test]
async fn test_chart_series_covers_requested_days() {
    let req = ChartRequest {
        birth_date: Some("1990-05-15".to_string()),
        birth_time: Some("08:30".to_string()),
        lat: Some(51.5),
        lon: Some(-0.1),
        start_date: Some("2024-03-01".to_string()),
        days: Some(10),
        timeframe: Some("Day".to_string()),
        pillar: None,
    };
    let Json(points) = routes::chart(State(still_state()), Ok(Json(req)))
        .await
        .unwrap();
    assert_eq!(points.len(), 10);
    assert_eq!(points[0].date, "2024-03-01");
    assert_eq!(points[9].date, "2024-03-10");
    assert!(points.iter().all(|p| (0.0..=100.0).contains(&p.score)));
}

#[test]
fn test_chart_rejects_bad_birth_date() {
    let req = ChartRequest {
        birth_date: Some("15/05/1990".to_string()),
        lat: Some(0.0),
        lon: Some(0.0),
        start_date: Some("2024-03-01".to_string()),
        days: Some(3),
        ..Default::default()
    };
    let err = routes::chart_series(&still_state(), req).unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_chart_rejects_oversized_range() {
    let req = ChartRequest {
        birth_date: Some("1990-05-15".to_string()),
        lat: Some(0.0),
        lon: Some(0.0),
        days: Some(routes::MAX_CHART_DAYS + 1),
        ..Default::default()
    };
    let err = routes::chart_series(&still_state(), req).unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_provider_failure_is_internal() {
    let req = ChartRequest {
        birth_date: Some("1990-05-15".to_string()),
        lat: Some(0.0),
        lon: Some(0.0),
        days: Some(3),
        ..Default::default()
    };
    let err = routes::chart_series(&state_with(Arc::new(FailingProvider)), req).unwrap_err();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message(), "Internal Server Error");
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_anchor_grids_use_configured_span() {
    let req = AnchorsRequest {
        birth_date: Some("1990-05-15".to_string()),
        ..Default::default()
    };
    let anchors = routes::anchor_grids(&still_state(), req).unwrap();
    assert_eq!(anchors.years.len(), Pillar::ALL.len());
    let years = &anchors.years[&Pillar::Overall];
    assert_eq!(years.len(), 2);
    assert_eq!(years[0].date, "1990-01-01");
    assert_eq!(anchors.months[&Pillar::Money].len(), 24);
}

#[test]
fn test_day_expansion_for_leap_february() {
    let req = DaysRequest {
        birth_date: Some("1990-05-15".to_string()),
        month: Some("2024-02".to_string()),
        pillar: Some("Money".to_string()),
        ..Default::default()
    };
    let points = routes::day_expansion(&still_state(), req).unwrap();
    assert_eq!(points.len(), 29);
    assert_eq!(points[28].date, "2024-02-29");
}

#[test]
fn test_day_expansion_rejects_bad_month() {
    let req = DaysRequest {
        birth_date: Some("1990-05-15".to_string()),
        month: Some("2024-13".to_string()),
        ..Default::default()
    };
    let err = routes::day_expansion(&still_state(), req).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn test_panel_requires_birth_date_and_id() {
    let err = routes::panel_for_anchor(&still_state(), PanelRequest::default()).unwrap_err();
    assert_eq!(err.message(), "Missing required fields: birthDate, id");
}

#[test]
fn test_panel_bad_anchor_id_is_internal() {
    let err = routes::panel_for_anchor(&still_state(), panel_request("2024-99-01")).unwrap_err();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_panel_unknown_timeframe_is_client_error() {
    let mut req = panel_request("2024-05-01");
    req.timeframe = Some("Week".to_string());
    let err = routes::panel_for_anchor(&still_state(), req).unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_panel_is_served_from_cache() {
    let state = still_state();
    let Json(first) = routes::panel(State(state.clone()), Ok(Json(panel_request("2024-05-01"))))
        .await
        .unwrap();
    let Json(second) = routes::panel(State(state.clone()), Ok(Json(panel_request("2024-05-01"))))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.anchor_id, "2024-05-01");
    assert_eq!(first.score, 100.0);
    assert!(first.tags.contains(&"Sun-Sun Conjunction".to_string()));
    assert_eq!(state.cache.misses(), 1);
    assert_eq!(state.cache.hits(), 1);
}

#[test]
fn test_chart_rejects_month_timeframe() {
    let req = ChartRequest {
        birth_date: Some("1990-05-15".to_string()),
        lat: Some(0.0),
        lon: Some(0.0),
        days: Some(3),
        timeframe: Some("Month".to_string()),
        ..Default::default()
    };
    let err = routes::chart_series(&still_state(), req).unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert!(err.message().contains("/chart/anchors"));
}

#[test]
fn test_chart_rejects_unknown_timeframe() {
    let req = ChartRequest {
        birth_date: Some("1990-05-15".to_string()),
        lat: Some(0.0),
        lon: Some(0.0),
        timeframe: Some("Week".to_string()),
        ..Default::default()
    };
    let err = routes::chart_series(&still_state(), req).unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cross_origin_preflight_is_allowed() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/panel")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(HttpBody::empty())
        .unwrap();
    let response = build_router(still_state()).oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|v| v.to_str().ok());
    assert_eq!(allow_origin, Some("*"));
}

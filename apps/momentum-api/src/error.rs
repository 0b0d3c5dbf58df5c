use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use momentum::MomentumError;
use serde_json::json;

/// Request failure as seen by HTTP clients
#[derive(Debug)]
pub enum ApiError {
    MissingFields(Vec<&'static str>),
    BadRequest(String),
    /// Details are logged; the client only sees a generic body
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::MissingFields(fields) => {
                format!("Missing required fields: {}", fields.join(", "))
            }
            ApiError::BadRequest(message) => message.clone(),
            ApiError::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}

impl From<MomentumError> for ApiError {
    fn from(err: MomentumError) -> Self {
        match err {
            MomentumError::InvalidBirthDate { .. }
            | MomentumError::InvalidMonth { .. }
            | MomentumError::UnknownPillar { .. }
            | MomentumError::UnknownTimeframe { .. } => ApiError::BadRequest(err.to_string()),
            // Provider failures and unparseable anchor ids are server-side
            MomentumError::Ephemeris(_) | MomentumError::InvalidAnchorId { .. } => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("computation task failed: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            log::error!("{}", detail);
        }
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

/// Names whose flag is set, in order
pub fn missing_fields(checks: &[(&'static str, bool)]) -> Result<(), ApiError> {
    let missing: Vec<&'static str> = checks
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::MissingFields(missing))
    }
}

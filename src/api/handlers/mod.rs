use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use serde::{Deserialize, Serialize};

use crate::database::SqliteSource;
use crate::errors::AnalyzerError;
use crate::services::analysis::Analyzer;

pub mod matches;
pub mod players;
pub mod rankings;

pub struct AppState {
    pub analyzer: Analyzer<SqliteSource>,
}

#[derive(Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct TrendParams {
    pub days: Option<i64>,
}

#[derive(Deserialize)]
pub struct TopParams {
    pub metric: Option<String>,
    pub limit: Option<usize>,
    pub min_matches: Option<i64>,
}

#[derive(Deserialize)]
pub struct CompareParams {
    /// Comma separated player ids
    pub ids: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub struct ApiError(AnalyzerError);

impl From<AnalyzerError> for ApiError {
    fn from(err: AnalyzerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            error!("Request failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(ErrorBody { error: self.0.to_string() })).into_response()
    }
}

/// 200 with the body, or 404 when the entity has no rows.
pub fn found_or_404<T: Serialize>(value: Option<T>) -> Response {
    match value {
        Some(v) => Json(v).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

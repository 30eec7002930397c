use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::{found_or_404, ApiError, AppState, LimitParams, TrendParams};
use crate::database::PlayerId;

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<PlayerId>,
) -> Result<Response, ApiError> {
    Ok(found_or_404(state.analyzer.player_profile(player_id)?))
}

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<PlayerId>,
) -> Result<Response, ApiError> {
    Ok(found_or_404(state.analyzer.statistics_summary(player_id)?))
}

pub async fn get_shots(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<PlayerId>,
) -> Result<Response, ApiError> {
    Ok(Json(state.analyzer.shot_distribution(player_id)?).into_response())
}

pub async fn get_rally(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<PlayerId>,
) -> Result<Response, ApiError> {
    Ok(Json(state.analyzer.rally_analysis(player_id)?).into_response())
}

pub async fn get_tournament_types(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<PlayerId>,
) -> Result<Response, ApiError> {
    Ok(Json(state.analyzer.tournament_type_performance(player_id)?).into_response())
}

pub async fn get_recent(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<PlayerId>,
    Query(params): Query<LimitParams>,
) -> Result<Response, ApiError> {
    let limit = params
        .limit
        .unwrap_or(state.analyzer.config().analysis.recent_matches_limit)
        .clamp(1, 100);
    Ok(Json(state.analyzer.recent_matches(player_id, limit)?).into_response())
}

pub async fn get_trends(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<PlayerId>,
    Query(params): Query<TrendParams>,
) -> Result<Response, ApiError> {
    let days = params
        .days
        .unwrap_or(state.analyzer.config().analysis.trend_days)
        .max(0);
    Ok(Json(state.analyzer.performance_trends(player_id, days)?).into_response())
}

pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<PlayerId>,
) -> Result<Response, ApiError> {
    Ok(found_or_404(state.analyzer.scouting_report(player_id)?))
}

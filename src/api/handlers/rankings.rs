use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::{found_or_404, ApiError, AppState, CompareParams, TopParams};
use crate::database::PlayerId;

pub async fn get_top(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopParams>,
) -> Result<Response, ApiError> {
    let defaults = &state.analyzer.config().analysis;
    let metric = params.metric.unwrap_or_else(|| "win_percentage".to_string());
    let limit = params.limit.unwrap_or(defaults.top_limit).clamp(1, 1000);
    let min_matches = params.min_matches.unwrap_or(defaults.top_min_matches);

    Ok(Json(state.analyzer.top_performers(&metric, limit, min_matches)?).into_response())
}

pub async fn get_comparison(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareParams>,
) -> Result<Response, ApiError> {
    let ids = parse_ids(params.ids.as_deref().unwrap_or(""));
    Ok(Json(state.analyzer.compare_players(&ids)?).into_response())
}

pub async fn get_head_to_head(
    State(state): State<Arc<AppState>>,
    Path((player1_id, player2_id)): Path<(PlayerId, PlayerId)>,
) -> Result<Response, ApiError> {
    Ok(found_or_404(state.analyzer.head_to_head(player1_id, player2_id)?))
}

// Unparseable entries are dropped; too few survivors surface as InsufficientInput.
fn parse_ids(raw: &str) -> Vec<PlayerId> {
    raw.split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect()
}

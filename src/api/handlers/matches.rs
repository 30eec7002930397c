use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::{found_or_404, ApiError, AppState};
use crate::database::{MatchId, TournamentId};

pub async fn get_match(
    State(state): State<Arc<AppState>>,
    Path(match_id): Path<MatchId>,
) -> Result<Response, ApiError> {
    Ok(found_or_404(state.analyzer.match_insights(match_id)?))
}

pub async fn get_tournaments(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    Ok(Json(state.analyzer.tournament_overview()?).into_response())
}

pub async fn get_tournament(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> Result<Response, ApiError> {
    Ok(found_or_404(state.analyzer.tournament_performance(tournament_id)?))
}

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    matches::{get_match, get_tournament, get_tournaments},
    players::{
        get_profile, get_rally, get_recent, get_report, get_shots, get_summary, get_tournament_types,
        get_trends,
    },
    rankings::{get_comparison, get_head_to_head, get_top},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players/:id/profile", get(get_profile))
        .route("/api/players/:id/summary", get(get_summary))
        .route("/api/players/:id/shots", get(get_shots))
        .route("/api/players/:id/rally", get(get_rally))
        .route("/api/players/:id/tournament-types", get(get_tournament_types))
        .route("/api/players/:id/recent", get(get_recent))
        .route("/api/players/:id/trends", get(get_trends))
        .route("/api/players/:id/report", get(get_report))
        .route("/api/top", get(get_top))
        .route("/api/compare", get(get_comparison))
        .route("/api/head-to-head/:player1_id/:player2_id", get(get_head_to_head))
        .route("/api/matches/:id", get(get_match))
        .route("/api/tournaments", get(get_tournaments))
        .route("/api/tournaments/:id", get(get_tournament))
        .with_state(state)
}

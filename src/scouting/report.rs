use anyhow::Result;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use super::traits::{classify, Strength, Weakness};
use crate::aggregates::{self, RecentMatch, TournamentTypeRecord};
use crate::config::AppConfig;
use crate::database::{PlayerId, StatsSource};
use crate::metrics::{age_on, RallyAnalysis, RecentForm, ShotDistribution};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerInfo {
    pub name: String,
    pub nationality: String,
    pub age: Option<i32>,
    pub ranking: Option<i64>,
    pub dominant_hand: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceOverview {
    pub total_matches: i64,
    pub win_percentage: f64,
    pub recent_form: RecentForm,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayingStyle {
    pub shot_distribution: ShotDistribution,
    pub rally_preference: RallyAnalysis,
    pub strengths: Vec<Strength>,
    pub weaknesses: Vec<Weakness>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoutingReport {
    pub player_info: PlayerInfo,
    pub performance_overview: PerformanceOverview,
    pub playing_style: PlayingStyle,
    pub tournament_performance: Vec<TournamentTypeRecord>,
    pub recent_matches: Vec<RecentMatch>,
}

/// Full scouting report as of `today`; `None` for an unknown player.
pub fn scouting_report<S: StatsSource + ?Sized>(
    source: &S,
    player_id: PlayerId,
    today: NaiveDate,
    config: &AppConfig,
) -> Result<Option<ScoutingReport>> {
    let Some(player) = source.player(player_id)? else {
        return Ok(None);
    };

    let participations = source.participations(player_id)?;
    let rows = source.player_statistics(player_id)?;
    debug!(
        "Scouting player {}: {} matches, {} statistics rows",
        player_id,
        participations.len(),
        rows.len()
    );

    let profile = aggregates::player::build_profile(player.clone(), &participations);
    let summary = aggregates::player::summarize_statistics(&rows);
    let shots = ShotDistribution::from_totals(aggregates::player::sum_shots(&rows));
    let rally = RallyAnalysis::from_totals(aggregates::player::sum_rallies(&rows));
    let tournament_performance = aggregates::player::group_by_tournament_type(&participations, &rows);
    let recent_matches =
        aggregates::player::build_recent_matches(&participations, &rows, config.analysis.recent_form_window);

    let traits = classify(summary.as_ref(), &shots, &rally, &config.scouting);
    let recent_form = RecentForm::from_results(recent_matches.iter().map(|m| m.is_winner));

    Ok(Some(ScoutingReport {
        player_info: PlayerInfo {
            name: player.full_name(),
            nationality: player.nationality.clone().unwrap_or_default(),
            age: age_on(player.birth_date.as_deref(), today),
            ranking: player.world_ranking,
            dominant_hand: player.dominant_hand.clone(),
        },
        performance_overview: PerformanceOverview {
            total_matches: profile.as_ref().map_or(0, |p| p.total_matches),
            win_percentage: profile.as_ref().map_or(0.0, |p| p.win_percentage),
            recent_form,
        },
        playing_style: PlayingStyle {
            shot_distribution: shots,
            rally_preference: rally,
            strengths: traits.strengths,
            weaknesses: traits.weaknesses,
        },
        tournament_performance,
        recent_matches,
    }))
}

use chrono::NaiveDate;
use serde::Serialize;

use crate::database::{
    Game, MatchHeader, MatchId, MatchParticipant, MatchStatistics, Player, PlayerId, Tournament,
    TournamentId,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    #[serde(flatten)]
    pub player: Player,
    pub total_matches: i64,
    pub matches_won: i64,
    pub win_percentage: f64,
    pub avg_match_duration: Option<f64>,
    pub last_match_date: Option<NaiveDate>,
    pub tournaments_played: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSummary {
    pub total_matches: i64,
    pub avg_serves: Option<f64>,
    pub ace_percentage: Option<f64>,
    pub fault_percentage: Option<f64>,
    pub avg_winners: Option<f64>,
    pub avg_unforced_errors: Option<f64>,
    pub winner_to_error_ratio: Option<f64>,
    pub points_won_percentage: Option<f64>,
    pub total_smashes: i64,
    pub total_clears: i64,
    pub total_drops: i64,
    pub total_net_shots: i64,
    pub short_rally_success: Option<f64>,
    pub medium_rally_success: Option<f64>,
    pub long_rally_success: Option<f64>,
}

/// Shot-type sums across all of a player's completed matches
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShotTotals {
    pub total_smashes: i64,
    pub total_clears: i64,
    pub total_drops: i64,
    pub total_drives: i64,
    pub total_net_shots: i64,
    pub total_lobs: i64,
    pub total_kills: i64,
    pub total_winners: i64,
    pub total_unforced_errors: i64,
    pub total_matches: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RallyTotals {
    pub total_short_rallies: i64,
    pub short_rallies_won: i64,
    pub total_medium_rallies: i64,
    pub medium_rallies_won: i64,
    pub total_long_rallies: i64,
    pub long_rallies_won: i64,
    pub total_matches: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentTypeRecord {
    pub tournament_type: Option<String>,
    pub matches_played: i64,
    pub matches_won: i64,
    pub win_percentage: f64,
    pub avg_points_won_pct: Option<f64>,
    pub avg_match_duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentMatch {
    pub match_id: MatchId,
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub match_date: NaiveDate,
    pub match_time: Option<String>,
    pub round: Option<String>,
    pub duration_minutes: Option<i64>,
    pub opponent_id: Option<PlayerId>,
    pub opponent_name: Option<String>,
    pub opponent_nationality: Option<String>,
    pub is_winner: bool,
    pub points_won: Option<i64>,
    pub points_played: Option<i64>,
    pub winners: Option<i64>,
    pub unforced_errors: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerMatchStatistics {
    pub player_name: String,
    #[serde(flatten)]
    pub statistics: MatchStatistics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchInsights {
    pub match_info: MatchHeader,
    pub players: Vec<MatchParticipant>,
    pub games: Vec<Game>,
    pub statistics: Vec<PlayerMatchStatistics>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentPerformance {
    #[serde(flatten)]
    pub tournament: Tournament,
    pub total_matches: i64,
    pub total_players: i64,
    pub avg_match_duration: Option<f64>,
    pub longest_match: Option<i64>,
    pub shortest_match: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentOverview {
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub location: Option<String>,
    pub tournament_type: Option<String>,
    pub matches: i64,
    pub players: i64,
    pub avg_duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub match_id: MatchId,
    pub match_date: NaiveDate,
    pub is_winner: bool,
    pub duration_minutes: Option<i64>,
    pub points_won_pct: Option<f64>,
    pub winners: Option<i64>,
    pub unforced_errors: Option<i64>,
    pub ace_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadToHead {
    pub player1_id: PlayerId,
    pub player1_name: Option<String>,
    pub player2_id: PlayerId,
    pub player2_name: Option<String>,
    pub total_matches: i64,
    pub player1_wins: i64,
    pub player2_wins: i64,
    pub last_meeting: Option<NaiveDate>,
}

/// One row of a population ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlayer {
    pub rank: usize,
    pub player_id: PlayerId,
    pub player_name: String,
    pub nationality: Option<String>,
    pub gender: Option<String>,
    pub world_ranking: Option<i64>,
    pub total_matches: i64,
    pub matches_won: i64,
    pub win_percentage: f64,
    pub metric_value: Option<f64>,
}

use chrono::NaiveDate;
use serde::Serialize;

pub type PlayerId = i64;
pub type MatchId = i64;
pub type TournamentId = i64;

pub const COMPLETED_STATUS: &str = "COMPLETED";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub nationality: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
    pub height_cm: Option<i64>,
    pub weight_kg: Option<i64>,
    pub dominant_hand: Option<String>,
    pub world_ranking: Option<i64>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tournament {
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub location: Option<String>,
    pub country: Option<String>,
    pub tournament_type: Option<String>,
    pub surface: Option<String>,
    pub prize_money: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

/// Match row joined with its tournament's descriptive columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchHeader {
    pub match_id: MatchId,
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub location: Option<String>,
    pub tournament_type: Option<String>,
    pub match_date: NaiveDate,
    pub match_time: Option<String>,
    pub round: Option<String>,
    pub court: Option<String>,
    pub match_type: Option<String>,
    pub best_of: Option<i64>,
    pub duration_minutes: Option<i64>,
    pub winner_id: Option<PlayerId>,
    pub status: String,
    pub temperature_celsius: Option<f64>,
    pub humidity_percent: Option<f64>,
}

/// One player's side of a completed match, with the opponent and tournament resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participation {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub tournament_type: Option<String>,
    pub match_date: NaiveDate,
    pub match_time: Option<String>,
    pub round: Option<String>,
    pub duration_minutes: Option<i64>,
    pub is_winner: bool,
    pub opponent_id: Option<PlayerId>,
    pub opponent_name: Option<String>,
    pub opponent_nationality: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchParticipant {
    pub participant_id: i64,
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub partner_id: Option<PlayerId>,
    pub team_position: i64,
    pub is_winner: bool,
    pub player_name: String,
    pub nationality: Option<String>,
    pub world_ranking: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub game_id: i64,
    pub match_id: MatchId,
    pub game_number: i64,
    pub team1_score: i64,
    pub team2_score: i64,
    pub winner_team: Option<i64>,
    pub duration_minutes: Option<i64>,
    pub max_rally_length: Option<i64>,
}

/// Raw per-(match, player) counters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchStatistics {
    pub stat_id: i64,
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub total_serves: i64,
    pub service_aces: i64,
    pub service_faults: i64,
    pub short_serves: i64,
    pub long_serves: i64,
    pub flick_serves: i64,
    pub total_shots: i64,
    pub winners: i64,
    pub unforced_errors: i64,
    pub forced_errors: i64,
    pub smashes: i64,
    pub clears: i64,
    pub drops: i64,
    pub drives: i64,
    pub net_shots: i64,
    pub lobs: i64,
    pub kills: i64,
    pub net_points_won: i64,
    pub net_points_played: i64,
    pub backcourt_points_won: i64,
    pub backcourt_points_played: i64,
    pub short_rallies_won: i64,
    pub medium_rallies_won: i64,
    pub long_rallies_won: i64,
    pub short_rallies_played: i64,
    pub medium_rallies_played: i64,
    pub long_rallies_played: i64,
    pub points_won: i64,
    pub points_played: i64,
}

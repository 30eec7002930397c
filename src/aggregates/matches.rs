use std::collections::{HashMap, HashSet};

use anyhow::Result;

use super::averaging::mean_duration;
use super::types::{
    HeadToHead, MatchInsights, PlayerMatchStatistics, TournamentOverview, TournamentPerformance,
};
use crate::database::{MatchId, Participation, PlayerId, StatsSource, Tournament, TournamentId};

pub fn match_insights<S: StatsSource + ?Sized>(source: &S, match_id: MatchId) -> Result<Option<MatchInsights>> {
    let Some(match_info) = source.match_header(match_id)? else {
        return Ok(None);
    };

    let statistics = source
        .match_statistics(match_id)?
        .into_iter()
        .map(|(player_name, statistics)| PlayerMatchStatistics { player_name, statistics })
        .collect();

    Ok(Some(MatchInsights {
        match_info,
        players: source.match_participants(match_id)?,
        games: source.match_games(match_id)?,
        statistics,
    }))
}

/// Completed matches of a tournament, one entry per match
fn distinct_matches(participations: &[Participation]) -> Vec<&Participation> {
    let mut seen = HashSet::new();
    participations
        .iter()
        .filter(|p| seen.insert(p.match_id))
        .collect()
}

pub fn tournament_performance<S: StatsSource + ?Sized>(
    source: &S,
    tournament_id: TournamentId,
) -> Result<Option<TournamentPerformance>> {
    let Some(tournament) = source.tournament(tournament_id)? else {
        return Ok(None);
    };
    let participations = source.tournament_participations(tournament_id)?;

    Ok(Some(summarize_tournament(tournament, &participations)))
}

pub fn summarize_tournament(tournament: Tournament, participations: &[Participation]) -> TournamentPerformance {
    let matches = distinct_matches(participations);
    let players: HashSet<PlayerId> = participations.iter().map(|p| p.player_id).collect();
    let durations: Vec<i64> = matches.iter().filter_map(|p| p.duration_minutes).collect();

    TournamentPerformance {
        tournament,
        total_matches: matches.len() as i64,
        total_players: players.len() as i64,
        avg_match_duration: mean_duration(durations.iter().copied().map(Some)),
        longest_match: durations.iter().copied().max(),
        shortest_match: durations.iter().copied().min(),
    }
}

pub fn tournament_overview<S: StatsSource + ?Sized>(source: &S) -> Result<Vec<TournamentOverview>> {
    let tournaments = source.tournaments()?;
    let participations = source.all_participations()?;

    let mut by_tournament: HashMap<TournamentId, Vec<Participation>> = HashMap::new();
    for p in participations {
        by_tournament.entry(p.tournament_id).or_default().push(p);
    }

    let mut overview: Vec<TournamentOverview> = tournaments
        .into_iter()
        .map(|t| {
            let rows = by_tournament.remove(&t.tournament_id).unwrap_or_default();
            let summary = summarize_tournament(t, &rows);
            TournamentOverview {
                tournament_id: summary.tournament.tournament_id,
                tournament_name: summary.tournament.tournament_name,
                location: summary.tournament.location,
                tournament_type: summary.tournament.tournament_type,
                matches: summary.total_matches,
                players: summary.total_players,
                avg_duration: summary.avg_match_duration,
            }
        })
        .collect();

    overview.sort_by(|a, b| b.matches.cmp(&a.matches));
    Ok(overview)
}

pub fn head_to_head<S: StatsSource + ?Sized>(
    source: &S,
    player1_id: PlayerId,
    player2_id: PlayerId,
) -> Result<Option<HeadToHead>> {
    let meetings: Vec<Participation> = source
        .participations(player1_id)?
        .into_iter()
        .filter(|p| p.opponent_id == Some(player2_id))
        .collect();

    if meetings.is_empty() {
        return Ok(None);
    }

    let player2_name = source.player(player2_id)?.map(|p| p.full_name());
    let player1_name = source.player(player1_id)?.map(|p| p.full_name());

    Ok(Some(build_head_to_head(player1_id, player1_name, player2_id, player2_name, &meetings)))
}

pub fn build_head_to_head(
    player1_id: PlayerId,
    player1_name: Option<String>,
    player2_id: PlayerId,
    player2_name: Option<String>,
    meetings: &[Participation],
) -> HeadToHead {
    let player1_wins = meetings.iter().filter(|p| p.is_winner).count() as i64;

    HeadToHead {
        player1_id,
        player1_name,
        player2_id,
        player2_name,
        total_matches: meetings.len() as i64,
        player1_wins,
        player2_wins: meetings.len() as i64 - player1_wins,
        last_meeting: meetings.iter().map(|p| p.match_date).max(),
    }
}

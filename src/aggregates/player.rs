use std::collections::{BTreeMap, HashMap, HashSet};

use anyhow::Result;
use chrono::NaiveDate;
use log::debug;

use super::averaging::{flag_percentage, mean, mean_duration, mean_ratio_pct, nullable_ratio};
use super::types::{
    PlayerProfile, RallyTotals, RecentMatch, ShotTotals, StatisticsSummary, TournamentTypeRecord,
    TrendPoint,
};
use crate::database::{MatchId, MatchStatistics, Participation, Player, PlayerId, StatsSource};

pub fn player_profile<S: StatsSource + ?Sized>(source: &S, player_id: PlayerId) -> Result<Option<PlayerProfile>> {
    let Some(player) = source.player(player_id)? else {
        return Ok(None);
    };
    let participations = source.participations(player_id)?;
    debug!("Player {} has {} completed matches", player_id, participations.len());

    Ok(build_profile(player, &participations))
}

/// Profile over completed matches; `None` when there are none.
pub fn build_profile(player: Player, participations: &[Participation]) -> Option<PlayerProfile> {
    if participations.is_empty() {
        return None;
    }

    let matches_won = participations.iter().filter(|p| p.is_winner).count() as i64;
    let tournaments: HashSet<_> = participations.iter().map(|p| p.tournament_id).collect();

    Some(PlayerProfile {
        player,
        total_matches: participations.len() as i64,
        matches_won,
        win_percentage: flag_percentage(participations.iter().map(|p| p.is_winner)),
        avg_match_duration: mean_duration(participations.iter().map(|p| p.duration_minutes)),
        last_match_date: participations.iter().map(|p| p.match_date).max(),
        tournaments_played: tournaments.len() as i64,
    })
}

pub fn statistics_summary<S: StatsSource + ?Sized>(
    source: &S,
    player_id: PlayerId,
) -> Result<Option<StatisticsSummary>> {
    let rows = source.player_statistics(player_id)?;
    Ok(summarize_statistics(&rows))
}

pub fn summarize_statistics(rows: &[MatchStatistics]) -> Option<StatisticsSummary> {
    if rows.is_empty() {
        return None;
    }

    let avg = |f: fn(&MatchStatistics) -> i64| mean(rows.iter().map(|r| Some(f(r) as f64)));

    Some(StatisticsSummary {
        total_matches: rows.len() as i64,
        avg_serves: avg(|r| r.total_serves),
        ace_percentage: mean_ratio_pct(rows, |r| nullable_ratio(r.service_aces, r.total_serves)),
        fault_percentage: mean_ratio_pct(rows, |r| nullable_ratio(r.service_faults, r.total_serves)),
        avg_winners: avg(|r| r.winners),
        avg_unforced_errors: avg(|r| r.unforced_errors),
        winner_to_error_ratio: mean(rows.iter().map(|r| nullable_ratio(r.winners, r.unforced_errors))),
        points_won_percentage: mean_ratio_pct(rows, |r| nullable_ratio(r.points_won, r.points_played)),
        total_smashes: rows.iter().map(|r| r.smashes).sum(),
        total_clears: rows.iter().map(|r| r.clears).sum(),
        total_drops: rows.iter().map(|r| r.drops).sum(),
        total_net_shots: rows.iter().map(|r| r.net_shots).sum(),
        short_rally_success: mean_ratio_pct(rows, |r| {
            nullable_ratio(r.short_rallies_won, r.short_rallies_played)
        }),
        medium_rally_success: mean_ratio_pct(rows, |r| {
            nullable_ratio(r.medium_rallies_won, r.medium_rallies_played)
        }),
        long_rally_success: mean_ratio_pct(rows, |r| {
            nullable_ratio(r.long_rallies_won, r.long_rallies_played)
        }),
    })
}

pub fn shot_totals<S: StatsSource + ?Sized>(source: &S, player_id: PlayerId) -> Result<ShotTotals> {
    let rows = source.player_statistics(player_id)?;
    Ok(sum_shots(&rows))
}

pub fn sum_shots(rows: &[MatchStatistics]) -> ShotTotals {
    rows.iter().fold(ShotTotals::default(), |mut acc, r| {
        acc.total_smashes += r.smashes;
        acc.total_clears += r.clears;
        acc.total_drops += r.drops;
        acc.total_drives += r.drives;
        acc.total_net_shots += r.net_shots;
        acc.total_lobs += r.lobs;
        acc.total_kills += r.kills;
        acc.total_winners += r.winners;
        acc.total_unforced_errors += r.unforced_errors;
        acc.total_matches += 1;
        acc
    })
}

pub fn rally_totals<S: StatsSource + ?Sized>(source: &S, player_id: PlayerId) -> Result<RallyTotals> {
    let rows = source.player_statistics(player_id)?;
    Ok(sum_rallies(&rows))
}

pub fn sum_rallies(rows: &[MatchStatistics]) -> RallyTotals {
    rows.iter().fold(RallyTotals::default(), |mut acc, r| {
        acc.total_short_rallies += r.short_rallies_played;
        acc.short_rallies_won += r.short_rallies_won;
        acc.total_medium_rallies += r.medium_rallies_played;
        acc.medium_rallies_won += r.medium_rallies_won;
        acc.total_long_rallies += r.long_rallies_played;
        acc.long_rallies_won += r.long_rallies_won;
        acc.total_matches += 1;
        acc
    })
}

fn index_by_match(rows: &[MatchStatistics]) -> HashMap<MatchId, &MatchStatistics> {
    rows.iter().map(|r| (r.match_id, r)).collect()
}

pub fn tournament_type_performance<S: StatsSource + ?Sized>(
    source: &S,
    player_id: PlayerId,
) -> Result<Vec<TournamentTypeRecord>> {
    let participations = source.participations(player_id)?;
    let rows = source.player_statistics(player_id)?;
    Ok(group_by_tournament_type(&participations, &rows))
}

/// Per tournament type, most played first. Ties keep type-name order.
pub fn group_by_tournament_type(
    participations: &[Participation],
    rows: &[MatchStatistics],
) -> Vec<TournamentTypeRecord> {
    let stats = index_by_match(rows);
    let mut groups: BTreeMap<Option<String>, Vec<&Participation>> = BTreeMap::new();
    for p in participations {
        groups.entry(p.tournament_type.clone()).or_default().push(p);
    }

    let mut records: Vec<TournamentTypeRecord> = groups
        .into_iter()
        .map(|(tournament_type, group)| {
            let points_ratios = group.iter().map(|p| {
                stats
                    .get(&p.match_id)
                    .and_then(|s| nullable_ratio(s.points_won, s.points_played))
            });

            TournamentTypeRecord {
                tournament_type,
                matches_played: group.len() as i64,
                matches_won: group.iter().filter(|p| p.is_winner).count() as i64,
                win_percentage: flag_percentage(group.iter().map(|p| p.is_winner)),
                avg_points_won_pct: mean(points_ratios).map(|m| m * 100.0),
                avg_match_duration: mean_duration(group.iter().map(|p| p.duration_minutes)),
            }
        })
        .collect();

    records.sort_by(|a, b| b.matches_played.cmp(&a.matches_played));
    records
}

pub fn recent_matches<S: StatsSource + ?Sized>(
    source: &S,
    player_id: PlayerId,
    limit: usize,
) -> Result<Vec<RecentMatch>> {
    let participations = source.participations(player_id)?;
    let rows = source.player_statistics(player_id)?;
    Ok(build_recent_matches(&participations, &rows, limit))
}

/// `participations` must already be newest first, as [`StatsSource`] returns them.
pub fn build_recent_matches(
    participations: &[Participation],
    rows: &[MatchStatistics],
    limit: usize,
) -> Vec<RecentMatch> {
    let stats = index_by_match(rows);

    participations
        .iter()
        .take(limit)
        .map(|p| {
            let s = stats.get(&p.match_id);
            RecentMatch {
                match_id: p.match_id,
                tournament_id: p.tournament_id,
                tournament_name: p.tournament_name.clone(),
                match_date: p.match_date,
                match_time: p.match_time.clone(),
                round: p.round.clone(),
                duration_minutes: p.duration_minutes,
                opponent_id: p.opponent_id,
                opponent_name: p.opponent_name.clone(),
                opponent_nationality: p.opponent_nationality.clone(),
                is_winner: p.is_winner,
                points_won: s.map(|s| s.points_won),
                points_played: s.map(|s| s.points_played),
                winners: s.map(|s| s.winners),
                unforced_errors: s.map(|s| s.unforced_errors),
            }
        })
        .collect()
}

pub fn performance_trends<S: StatsSource + ?Sized>(
    source: &S,
    player_id: PlayerId,
    days: i64,
    today: NaiveDate,
) -> Result<Vec<TrendPoint>> {
    let participations = source.participations(player_id)?;
    let rows = source.player_statistics(player_id)?;
    Ok(build_trends(&participations, &rows, trend_cutoff(today, days)))
}

/// Earliest date inside a `days` window ending `today`; windows reaching past
/// the calendar range start at its first day.
pub fn trend_cutoff(today: NaiveDate, days: i64) -> NaiveDate {
    chrono::Duration::try_days(days)
        .and_then(|window| today.checked_sub_signed(window))
        .unwrap_or(NaiveDate::MIN)
}

pub fn build_trends(
    participations: &[Participation],
    rows: &[MatchStatistics],
    cutoff: NaiveDate,
) -> Vec<TrendPoint> {
    let stats = index_by_match(rows);

    participations
        .iter()
        .filter(|p| p.match_date >= cutoff)
        .map(|p| {
            let s = stats.get(&p.match_id);
            TrendPoint {
                match_id: p.match_id,
                match_date: p.match_date,
                is_winner: p.is_winner,
                duration_minutes: p.duration_minutes,
                points_won_pct: s
                    .and_then(|s| nullable_ratio(s.points_won, s.points_played))
                    .map(|r| r * 100.0),
                winners: s.map(|s| s.winners),
                unforced_errors: s.map(|s| s.unforced_errors),
                ace_pct: s
                    .and_then(|s| nullable_ratio(s.service_aces, s.total_serves))
                    .map(|r| r * 100.0),
            }
        })
        .collect()
}

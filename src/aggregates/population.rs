use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use log::debug;

use super::types::RankedPlayer;
use crate::aggregates::averaging::flag_percentage;
use crate::database::{MatchStatistics, Participation, Player, PlayerId, StatsSource};
use crate::errors::AnalyzerResult;
use crate::ranking::RankingMetric;

/// Ranks every player with at least `min_matches` completed matches by
/// `metric_key`, best first, keeping the first `limit` rows.
pub fn population_aggregate<S: StatsSource + ?Sized>(
    source: &S,
    metric_key: &str,
    min_matches: i64,
    limit: usize,
) -> AnalyzerResult<Vec<RankedPlayer>> {
    let metric: RankingMetric = metric_key.parse()?;

    let players = source.players()?;
    let participations = source.all_participations()?;
    let statistics = source.all_statistics()?;
    debug!(
        "Ranking {} players by {} over {} participations",
        players.len(),
        metric,
        participations.len()
    );

    Ok(rank_players(metric, &players, &participations, &statistics, min_matches, limit))
}

pub fn rank_players(
    metric: RankingMetric,
    players: &[Player],
    participations: &[Participation],
    statistics: &[MatchStatistics],
    min_matches: i64,
    limit: usize,
) -> Vec<RankedPlayer> {
    let mut matches_by_player: HashMap<PlayerId, Vec<&Participation>> = HashMap::new();
    for p in participations {
        matches_by_player.entry(p.player_id).or_default().push(p);
    }
    let mut stats_by_player: HashMap<PlayerId, Vec<&MatchStatistics>> = HashMap::new();
    for s in statistics {
        stats_by_player.entry(s.player_id).or_default().push(s);
    }

    let mut ranked: Vec<RankedPlayer> = players
        .iter()
        .filter_map(|player| {
            let matches = matches_by_player.get(&player.player_id)?;
            if (matches.len() as i64) < min_matches {
                return None;
            }

            // Only statistics of matches the player actually took part in count.
            let played: HashSet<_> = matches.iter().map(|p| p.match_id).collect();
            let stats: Vec<&MatchStatistics> = stats_by_player
                .get(&player.player_id)
                .map(|rows| rows.iter().copied().filter(|s| played.contains(&s.match_id)).collect())
                .unwrap_or_default();

            Some(RankedPlayer {
                rank: 0,
                player_id: player.player_id,
                player_name: player.full_name(),
                nationality: player.nationality.clone(),
                gender: player.gender.clone(),
                world_ranking: player.world_ranking,
                total_matches: matches.len() as i64,
                matches_won: matches.iter().filter(|p| p.is_winner).count() as i64,
                win_percentage: flag_percentage(matches.iter().map(|p| p.is_winner)),
                metric_value: metric.evaluate(matches, &stats),
            })
        })
        .collect();

    // Stable sort: equal values keep player-id order; absent values sink to the bottom.
    ranked.sort_by(|a, b| compare_metric_desc(a.metric_value, b.metric_value));
    ranked.truncate(limit);
    for (idx, row) in ranked.iter_mut().enumerate() {
        row.rank = idx + 1;
    }

    ranked
}

fn compare_metric_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

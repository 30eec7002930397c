use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::Serialize;

use crate::aggregates::{self, PlayerProfile, RankedPlayer, StatisticsSummary};
use crate::database::{Player, PlayerId, StatsSource};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::metrics::{RallyAnalysis, RallyLength, ShotDistribution};

const MIN_COMPARED_PLAYERS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotSplit {
    pub smash: f64,
    pub clear: f64,
    pub drop: f64,
    pub net_shot: f64,
}

/// Side-by-side view of one player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub name: String,
    pub nationality: String,
    pub ranking: Option<i64>,
    pub matches_played: i64,
    pub win_percentage: f64,
    pub points_won_percentage: Option<f64>,
    pub winner_to_error_ratio: Option<f64>,
    pub ace_percentage: Option<f64>,
    pub preferred_rally_length: RallyLength,
    pub shot_distribution: ShotSplit,
}

pub type ComparisonResult = BTreeMap<PlayerId, ComparisonEntry>;

pub fn top_performers<S: StatsSource + ?Sized>(
    source: &S,
    metric: &str,
    limit: usize,
    min_matches: i64,
) -> AnalyzerResult<Vec<RankedPlayer>> {
    aggregates::population_aggregate(source, metric, min_matches, limit)
}

pub fn compare_players<S: StatsSource + ?Sized>(source: &S, ids: &[PlayerId]) -> AnalyzerResult<ComparisonResult> {
    // Repeated ids collapse into one entry, so only distinct ids count.
    let distinct: BTreeSet<PlayerId> = ids.iter().copied().collect();
    if distinct.len() < MIN_COMPARED_PLAYERS {
        return Err(AnalyzerError::InsufficientInput {
            required: MIN_COMPARED_PLAYERS,
            provided: distinct.len(),
        });
    }

    let mut result = ComparisonResult::new();
    for player_id in distinct {
        debug!("Composing comparison entry for player {}", player_id);

        let player = source.player(player_id)?;
        let profile = match &player {
            Some(player) => {
                let participations = source.participations(player_id)?;
                aggregates::player::build_profile(player.clone(), &participations)
            }
            None => None,
        };

        let rows = source.player_statistics(player_id)?;
        let summary = aggregates::player::summarize_statistics(&rows);
        let shots = ShotDistribution::from_totals(aggregates::player::sum_shots(&rows));
        let rally = RallyAnalysis::from_totals(aggregates::player::sum_rallies(&rows));

        result.insert(
            player_id,
            build_entry(player.as_ref(), profile.as_ref(), summary.as_ref(), &shots, &rally),
        );
    }

    Ok(result)
}

pub fn build_entry(
    player: Option<&Player>,
    profile: Option<&PlayerProfile>,
    summary: Option<&StatisticsSummary>,
    shots: &ShotDistribution,
    rally: &RallyAnalysis,
) -> ComparisonEntry {
    ComparisonEntry {
        name: player.map(Player::full_name).unwrap_or_default(),
        nationality: player
            .and_then(|p| p.nationality.clone())
            .unwrap_or_default(),
        ranking: player.and_then(|p| p.world_ranking),
        matches_played: profile.map_or(0, |p| p.total_matches),
        win_percentage: profile.map_or(0.0, |p| p.win_percentage),
        points_won_percentage: summary.and_then(|s| s.points_won_percentage),
        winner_to_error_ratio: summary.and_then(|s| s.winner_to_error_ratio),
        ace_percentage: summary.and_then(|s| s.ace_percentage),
        preferred_rally_length: rally.preferred_rally_length,
        shot_distribution: ShotSplit {
            smash: shots.smash_percentage,
            clear: shots.clear_percentage,
            drop: shots.drop_percentage,
            net_shot: shots.net_shot_percentage,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::{RallyTotals, ShotTotals};

    #[test]
    fn test_entry_defaults_for_player_without_matches() {
        let player = Player {
            player_id: 4,
            first_name: "Carolina".to_string(),
            last_name: "Marin".to_string(),
            nationality: Some("ESP".to_string()),
            birth_date: None,
            gender: Some("F".to_string()),
            height_cm: None,
            weight_kg: None,
            dominant_hand: Some("L".to_string()),
            world_ranking: Some(3),
        };
        let shots = ShotDistribution::from_totals(ShotTotals::default());
        let rally = RallyAnalysis::from_totals(RallyTotals::default());

        let entry = build_entry(Some(&player), None, None, &shots, &rally);

        assert_eq!(entry.name, "Carolina Marin");
        assert_eq!(entry.nationality, "ESP");
        assert_eq!(entry.ranking, Some(3));
        assert_eq!(entry.matches_played, 0);
        assert_eq!(entry.win_percentage, 0.0);
        assert_eq!(entry.ace_percentage, None);
        assert_eq!(entry.preferred_rally_length, RallyLength::Short);
        assert_eq!(entry.shot_distribution.smash, 0.0);
    }

    #[test]
    fn test_entry_for_unknown_player_is_blank() {
        let shots = ShotDistribution::from_totals(ShotTotals::default());
        let rally = RallyAnalysis::from_totals(RallyTotals::default());

        let entry = build_entry(None, None, None, &shots, &rally);

        assert_eq!(entry.name, "");
        assert_eq!(entry.nationality, "");
        assert_eq!(entry.ranking, None);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::aggregates::averaging::{flag_percentage, mean, mean_ratio_pct, nullable_ratio, round2};
use crate::database::{MatchStatistics, Participation};
use crate::errors::AnalyzerError;

/// Metrics a population can be ranked by. Each key maps to one fixed
/// aggregation over a player's completed matches and statistics rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMetric {
    WinPercentage,
    TotalMatches,
    AvgPointsWon,
    WinnerRatio,
    AcePercentage,
}

impl RankingMetric {
    pub const ALL: [RankingMetric; 5] = [
        RankingMetric::WinPercentage,
        RankingMetric::TotalMatches,
        RankingMetric::AvgPointsWon,
        RankingMetric::WinnerRatio,
        RankingMetric::AcePercentage,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            RankingMetric::WinPercentage => "win_percentage",
            RankingMetric::TotalMatches => "total_matches",
            RankingMetric::AvgPointsWon => "avg_points_won",
            RankingMetric::WinnerRatio => "winner_ratio",
            RankingMetric::AcePercentage => "ace_percentage",
        }
    }

    pub fn valid_keys() -> Vec<&'static str> {
        Self::ALL.iter().map(RankingMetric::key).collect()
    }

    /// Metric value rounded to two decimals; `None` when every row had a zero denominator.
    pub fn evaluate(&self, matches: &[&Participation], stats: &[&MatchStatistics]) -> Option<f64> {
        let value = match self {
            RankingMetric::WinPercentage => Some(flag_percentage(matches.iter().map(|p| p.is_winner))),
            RankingMetric::TotalMatches => Some(matches.len() as f64),
            RankingMetric::AvgPointsWon => {
                mean_ratio_pct(stats, |s| nullable_ratio(s.points_won, s.points_played))
            }
            RankingMetric::WinnerRatio => mean(stats.iter().map(|s| nullable_ratio(s.winners, s.unforced_errors))),
            RankingMetric::AcePercentage => {
                mean_ratio_pct(stats, |s| nullable_ratio(s.service_aces, s.total_serves))
            }
        };
        value.map(round2)
    }
}

impl FromStr for RankingMetric {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| AnalyzerError::InvalidMetric {
                metric: s.to_string(),
                valid: Self::valid_keys(),
            })
    }
}

impl fmt::Display for RankingMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn played(won: bool) -> Participation {
        Participation {
            player_id: 1,
            match_id: 1,
            tournament_id: 1,
            tournament_name: "India Open".to_string(),
            tournament_type: None,
            match_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            match_time: None,
            round: None,
            duration_minutes: None,
            is_winner: won,
            opponent_id: None,
            opponent_name: None,
            opponent_nationality: None,
        }
    }

    #[test]
    fn test_every_key_parses_back() {
        for metric in RankingMetric::ALL {
            assert_eq!(metric.key().parse::<RankingMetric>().unwrap(), metric);
        }
    }

    #[test]
    fn test_unknown_key_is_rejected_with_valid_keys() {
        let err = "bogus_metric".parse::<RankingMetric>().unwrap_err();

        match err {
            AnalyzerError::InvalidMetric { metric, valid } => {
                assert_eq!(metric, "bogus_metric");
                assert_eq!(valid.len(), 5);
                assert!(valid.contains(&"ace_percentage"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_evaluate_formulas() {
        let (a, b, c) = (played(true), played(false), played(true));
        let matches = vec![&a, &b, &c];
        let s1 = MatchStatistics { winners: 12, unforced_errors: 6, points_won: 30, points_played: 40, ..Default::default() };
        let s2 = MatchStatistics { winners: 5, unforced_errors: 0, service_aces: 1, total_serves: 10, ..Default::default() };
        let stats = vec![&s1, &s2];

        assert_eq!(RankingMetric::WinPercentage.evaluate(&matches, &stats), Some(66.67));
        assert_eq!(RankingMetric::TotalMatches.evaluate(&matches, &stats), Some(3.0));
        assert_eq!(RankingMetric::AvgPointsWon.evaluate(&matches, &stats), Some(75.0));
        assert_eq!(RankingMetric::WinnerRatio.evaluate(&matches, &stats), Some(2.0));
        assert_eq!(RankingMetric::AcePercentage.evaluate(&matches, &stats), Some(10.0));
    }

    #[test]
    fn test_evaluate_without_statistics() {
        let a = played(true);
        assert_eq!(RankingMetric::WinnerRatio.evaluate(&[&a], &[]), None);
    }
}

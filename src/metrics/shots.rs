use serde::Serialize;

use crate::aggregates::averaging::round2;
use crate::aggregates::ShotTotals;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotDistribution {
    #[serde(flatten)]
    pub totals: ShotTotals,
    pub smash_percentage: f64,
    pub clear_percentage: f64,
    pub drop_percentage: f64,
    pub drive_percentage: f64,
    pub net_shot_percentage: f64,
    pub lob_percentage: f64,
    pub kill_percentage: f64,
    pub total_shots: i64,
    /// `+inf` when the player made winners but no unforced errors
    #[serde(serialize_with = "super::serialize_unbounded")]
    pub winner_to_error_ratio: f64,
}

impl ShotDistribution {
    /// Ratio-of-sums over every match, unlike the per-match means in the statistics summary.
    pub fn from_totals(totals: ShotTotals) -> Self {
        let total_shots = totals.total_smashes
            + totals.total_clears
            + totals.total_drops
            + totals.total_drives
            + totals.total_net_shots
            + totals.total_lobs
            + totals.total_kills;

        let share = |count: i64| {
            if total_shots > 0 {
                round2(count as f64 / total_shots as f64 * 100.0)
            } else {
                0.0
            }
        };

        Self {
            smash_percentage: share(totals.total_smashes),
            clear_percentage: share(totals.total_clears),
            drop_percentage: share(totals.total_drops),
            drive_percentage: share(totals.total_drives),
            net_shot_percentage: share(totals.total_net_shots),
            lob_percentage: share(totals.total_lobs),
            kill_percentage: share(totals.total_kills),
            total_shots,
            winner_to_error_ratio: winner_to_error_ratio(totals.total_winners, totals.total_unforced_errors),
            totals,
        }
    }

    pub fn percentages(&self) -> [f64; 7] {
        [
            self.smash_percentage,
            self.clear_percentage,
            self.drop_percentage,
            self.drive_percentage,
            self.net_shot_percentage,
            self.lob_percentage,
            self.kill_percentage,
        ]
    }
}

fn winner_to_error_ratio(winners: i64, unforced_errors: i64) -> f64 {
    if unforced_errors > 0 {
        round2(winners as f64 / unforced_errors as f64)
    } else if winners > 0 {
        f64::INFINITY
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn totals(shots: [i64; 7], winners: i64, errors: i64) -> ShotTotals {
        ShotTotals {
            total_smashes: shots[0],
            total_clears: shots[1],
            total_drops: shots[2],
            total_drives: shots[3],
            total_net_shots: shots[4],
            total_lobs: shots[5],
            total_kills: shots[6],
            total_winners: winners,
            total_unforced_errors: errors,
            total_matches: 1,
        }
    }

    #[test]
    fn test_distribution_example() {
        let dist = ShotDistribution::from_totals(totals([30, 20, 10, 10, 10, 10, 10], 20, 10));

        assert_eq!(dist.total_shots, 90);
        assert_eq!(dist.smash_percentage, 33.33);
        assert_eq!(dist.clear_percentage, 22.22);
        assert_eq!(dist.kill_percentage, 11.11);
        assert_eq!(dist.winner_to_error_ratio, 2.0);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        for shots in [[30, 20, 10, 10, 10, 10, 10], [1, 1, 1, 0, 0, 0, 0], [7, 3, 11, 2, 9, 4, 13]] {
            let dist = ShotDistribution::from_totals(totals(shots, 1, 1));
            let sum: f64 = dist.percentages().iter().sum();
            assert_abs_diff_eq!(sum, 100.0, epsilon = 0.1);
        }
    }

    #[test]
    fn test_no_shots_means_all_zero() {
        let dist = ShotDistribution::from_totals(ShotTotals::default());

        assert_eq!(dist.total_shots, 0);
        assert!(dist.percentages().iter().all(|&p| p == 0.0));
        assert_eq!(dist.winner_to_error_ratio, 0.0);
    }

    #[test]
    fn test_error_free_ratio_is_infinite() {
        let dist = ShotDistribution::from_totals(totals([5, 0, 0, 0, 0, 0, 0], 4, 0));
        assert_eq!(dist.winner_to_error_ratio, f64::INFINITY);

        let json = serde_json::to_value(&dist).unwrap();
        assert_eq!(json["winner_to_error_ratio"], "Infinity");
    }

    #[test]
    fn test_ratio_is_finite_with_errors() {
        let dist = ShotDistribution::from_totals(totals([5, 0, 0, 0, 0, 0, 0], 0, 3));
        assert_eq!(dist.winner_to_error_ratio, 0.0);

        let dist = ShotDistribution::from_totals(totals([5, 0, 0, 0, 0, 0, 0], 7, 3));
        assert_eq!(dist.winner_to_error_ratio, 2.33);
    }
}

use std::fmt;

use serde::Serialize;

use crate::aggregates::averaging::round2;
use crate::aggregates::RallyTotals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RallyLength {
    Short,
    Medium,
    Long,
}

impl fmt::Display for RallyLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RallyLength::Short => "short",
            RallyLength::Medium => "medium",
            RallyLength::Long => "long",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RallyAnalysis {
    #[serde(flatten)]
    pub totals: RallyTotals,
    pub short_rally_win_rate: f64,
    pub medium_rally_win_rate: f64,
    pub long_rally_win_rate: f64,
    pub preferred_rally_length: RallyLength,
}

fn win_rate(won: i64, played: i64) -> f64 {
    if played > 0 {
        round2(won as f64 / played as f64 * 100.0)
    } else {
        0.0
    }
}

impl RallyAnalysis {
    pub fn from_totals(totals: RallyTotals) -> Self {
        let short = win_rate(totals.short_rallies_won, totals.total_short_rallies);
        let medium = win_rate(totals.medium_rallies_won, totals.total_medium_rallies);
        let long = win_rate(totals.long_rallies_won, totals.total_long_rallies);

        Self {
            short_rally_win_rate: short,
            medium_rally_win_rate: medium,
            long_rally_win_rate: long,
            preferred_rally_length: preferred_length(short, medium, long),
            totals,
        }
    }
}

/// Bucket with the highest win rate; on a tie the earlier of short, medium, long wins.
fn preferred_length(short: f64, medium: f64, long: f64) -> RallyLength {
    let mut best = (RallyLength::Short, short);
    for candidate in [(RallyLength::Medium, medium), (RallyLength::Long, long)] {
        if candidate.1 > best.1 {
            best = candidate;
        }
    }
    best.0
}

use std::fmt;

use serde::Serialize;

use crate::aggregates::StatisticsSummary;
use crate::config::ScoutingSettings;
use crate::metrics::{RallyAnalysis, ShotDistribution};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Accuracy,
    Serving,
    Attacking,
    Endurance,
    QuickFinishing,
}

impl Strength {
    pub fn description(&self) -> &'static str {
        match self {
            Strength::Accuracy => "Excellent shot accuracy and low error rate",
            Strength::Serving => "Strong serving game",
            Strength::Attacking => "Aggressive attacking style",
            Strength::Endurance => "Strong endurance and long rally performance",
            Strength::QuickFinishing => "Quick point finishing ability",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Weakness {
    Errors,
    Serving,
}

impl Weakness {
    pub fn description(&self) -> &'static str {
        match self {
            Weakness::Errors => "High unforced error rate",
            Weakness::Serving => "Weak serving game",
        }
    }
}

impl fmt::Display for Weakness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Classification {
    pub strengths: Vec<Strength>,
    pub weaknesses: Vec<Weakness>,
}

/// Applies the fixed thresholds. A rule whose input is absent is skipped;
/// the rally rule always contributes exactly one of endurance or quick finishing.
pub fn classify(
    summary: Option<&StatisticsSummary>,
    shots: &ShotDistribution,
    rally: &RallyAnalysis,
    thresholds: &ScoutingSettings,
) -> Classification {
    let mut out = Classification::default();

    if let Some(ratio) = summary.and_then(|s| s.winner_to_error_ratio) {
        if ratio > thresholds.accuracy_ratio {
            out.strengths.push(Strength::Accuracy);
        } else if ratio < thresholds.error_ratio {
            out.weaknesses.push(Weakness::Errors);
        }
    }

    if let Some(ace_pct) = summary.and_then(|s| s.ace_percentage) {
        if ace_pct > thresholds.strong_ace_pct {
            out.strengths.push(Strength::Serving);
        } else if ace_pct < thresholds.weak_ace_pct {
            out.weaknesses.push(Weakness::Serving);
        }
    }

    if shots.smash_percentage > thresholds.attacking_smash_pct {
        out.strengths.push(Strength::Attacking);
    }

    if rally.long_rally_win_rate > rally.short_rally_win_rate {
        out.strengths.push(Strength::Endurance);
    } else {
        out.strengths.push(Strength::QuickFinishing);
    }

    out
}

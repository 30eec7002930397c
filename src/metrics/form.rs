use std::fmt;

use serde::Serialize;

/// Recent-form band, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RecentForm {
    #[serde(rename = "No recent data")]
    NoRecentData,
    Poor,
    Average,
    Good,
    Excellent,
}

impl RecentForm {
    pub fn from_win_rate(win_rate: f64) -> Self {
        if win_rate >= 80.0 {
            RecentForm::Excellent
        } else if win_rate >= 60.0 {
            RecentForm::Good
        } else if win_rate >= 40.0 {
            RecentForm::Average
        } else {
            RecentForm::Poor
        }
    }

    /// Form over a window of match outcomes (`true` = won).
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let (wins, total) = results
            .into_iter()
            .fold((0usize, 0usize), |(wins, total), won| (wins + usize::from(won), total + 1));

        if total == 0 {
            return RecentForm::NoRecentData;
        }
        Self::from_win_rate(wins as f64 / total as f64 * 100.0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecentForm::NoRecentData => "No recent data",
            RecentForm::Poor => "Poor",
            RecentForm::Average => "Average",
            RecentForm::Good => "Good",
            RecentForm::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for RecentForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

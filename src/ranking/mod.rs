pub mod compare;
pub mod metric;

pub use compare::{compare_players, top_performers, ComparisonEntry, ComparisonResult, ShotSplit};
pub use metric::RankingMetric;

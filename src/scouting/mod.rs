pub mod report;
pub mod traits;

pub use report::{scouting_report, PerformanceOverview, PlayerInfo, PlayingStyle, ScoutingReport};
pub use traits::{classify, Classification, Strength, Weakness};

//! Raw aggregates computed directly over store rows.

pub mod averaging;
pub mod matches;
pub mod player;
pub mod population;
pub mod types;

pub use matches::{head_to_head, match_insights, tournament_overview, tournament_performance};
pub use player::{
    performance_trends, player_profile, rally_totals, recent_matches, shot_totals, statistics_summary,
    tournament_type_performance,
};
pub use population::population_aggregate;
pub use types::*;

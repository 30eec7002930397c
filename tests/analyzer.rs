mod common;

use badminton_stats::config::AppConfig;
use badminton_stats::database::{create_memory_pool, SqliteSource};
use badminton_stats::errors::AnalyzerError;
use badminton_stats::metrics::{RallyLength, RecentForm};
use badminton_stats::scouting::{Strength, Weakness};
use badminton_stats::services::analysis::Analyzer;
use approx::assert_abs_diff_eq;
use chrono::NaiveDate;

use common::{reference_date, seeded_analyzer};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_profile_counts_completed_matches_only() {
    let analyzer = seeded_analyzer();

    let profile = analyzer.player_profile(1).unwrap().unwrap();

    assert_eq!(profile.total_matches, 3);
    assert_eq!(profile.matches_won, 2);
    assert_eq!(profile.win_percentage, 66.67);
    assert_abs_diff_eq!(profile.avg_match_duration.unwrap(), 160.0 / 3.0, epsilon = 1e-9);
    assert_eq!(profile.last_match_date, Some(date(2024, 7, 20)));
    assert_eq!(profile.tournaments_played, 2);
}

#[test]
fn test_profile_is_empty_for_players_without_matches() {
    let analyzer = seeded_analyzer();

    assert!(analyzer.player_profile(4).unwrap().is_none());
    assert!(analyzer.player_profile(999).unwrap().is_none());
}

#[test]
fn test_statistics_summary_uses_null_safe_means() {
    let analyzer = seeded_analyzer();

    let summary = analyzer.statistics_summary(1).unwrap().unwrap();

    assert_eq!(summary.total_matches, 3);
    // the zero-serve match contributes nothing to the ace mean
    assert_abs_diff_eq!(summary.ace_percentage.unwrap(), 11.0, epsilon = 1e-9);
    assert_abs_diff_eq!(summary.winner_to_error_ratio.unwrap(), 2.25, epsilon = 1e-9);
    assert_eq!(summary.total_smashes, 30);
    assert_eq!(summary.total_net_shots, 10);
    assert_abs_diff_eq!(summary.short_rally_success.unwrap(), (80.0 + 100.0 + 50.0) / 3.0, epsilon = 1e-9);

    assert!(analyzer.statistics_summary(4).unwrap().is_none());
}

#[test]
fn test_shot_distribution_end_to_end() {
    let analyzer = seeded_analyzer();

    let shots = analyzer.shot_distribution(1).unwrap();

    assert_eq!(shots.total_shots, 90);
    assert_eq!(shots.smash_percentage, 33.33);
    assert_eq!(shots.clear_percentage, 22.22);
    assert_eq!(shots.winner_to_error_ratio, 2.0);
    assert_eq!(shots.totals.total_matches, 3);

    let sum: f64 = shots.percentages().iter().sum();
    assert_abs_diff_eq!(sum, 100.0, epsilon = 0.1);
}

#[test]
fn test_shot_distribution_without_rows_is_all_zero() {
    let analyzer = seeded_analyzer();

    let shots = analyzer.shot_distribution(3).unwrap();

    assert_eq!(shots.total_shots, 0);
    assert!(shots.percentages().iter().all(|pct| *pct == 0.0));
    assert_eq!(shots.winner_to_error_ratio, 0.0);
}

#[test]
fn test_rally_analysis_prefers_short_rallies() {
    let analyzer = seeded_analyzer();

    let rally = analyzer.rally_analysis(1).unwrap();

    assert_eq!(rally.short_rally_win_rate, 80.0);
    assert_eq!(rally.medium_rally_win_rate, 30.0);
    assert_eq!(rally.long_rally_win_rate, 20.0);
    assert_eq!(rally.preferred_rally_length, RallyLength::Short);
}

#[test]
fn test_tournament_type_performance() {
    let analyzer = seeded_analyzer();

    let records = analyzer.tournament_type_performance(1).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].tournament_type.as_deref(), Some("BWF_SUPER_1000"));
    assert_eq!(records[0].matches_played, 2);
    assert_eq!(records[0].win_percentage, 100.0);
    assert_eq!(records[1].tournament_type.as_deref(), Some("BWF_SUPER_750"));
    assert_eq!(records[1].win_percentage, 0.0);
}

#[test]
fn test_recent_matches_are_newest_first() {
    let analyzer = seeded_analyzer();

    let recent = analyzer.recent_matches(1, 2).unwrap();

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].match_id, 3);
    assert_eq!(recent[0].opponent_name.as_deref(), Some("Kento Momota"));
    assert_eq!(recent[0].winners, Some(5));
    assert!(recent[1].is_winner);
}

#[test]
fn test_recent_matches_on_the_same_day_order_by_time() {
    let analyzer = seeded_analyzer();

    let recent = analyzer.recent_matches(1, 10).unwrap();

    let ids: Vec<_> = recent.iter().map(|m| m.match_id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(recent[1].match_date, recent[2].match_date);
    assert_eq!(recent[1].match_time.as_deref(), Some("19:30"));
}

#[test]
fn test_recent_form() {
    let analyzer = seeded_analyzer();

    assert_eq!(analyzer.recent_form(1).unwrap(), RecentForm::Good);
    assert_eq!(analyzer.recent_form(3).unwrap(), RecentForm::Poor);
    assert_eq!(analyzer.recent_form(4).unwrap(), RecentForm::NoRecentData);
}

#[test]
fn test_match_insights() {
    let analyzer = seeded_analyzer();

    let insights = analyzer.match_insights(1).unwrap().unwrap();

    assert_eq!(insights.match_info.tournament_name, "All England Open");
    assert_eq!(insights.match_info.winner_id, Some(1));
    let players: Vec<_> = insights.players.iter().map(|p| p.player_id).collect();
    assert_eq!(players, vec![1, 2]);
    let games: Vec<_> = insights.games.iter().map(|g| g.game_number).collect();
    assert_eq!(games, vec![1, 2]);
    assert_eq!(insights.statistics.len(), 2);

    assert!(analyzer.match_insights(999).unwrap().is_none());
}

#[test]
fn test_top_performers_by_win_percentage() {
    let analyzer = seeded_analyzer();

    let top = analyzer.top_performers("win_percentage", 10, 2).unwrap();

    let ids: Vec<_> = top.iter().map(|p| p.player_id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(top[0].rank, 1);
    assert_eq!(top[0].metric_value, Some(66.67));
    assert_eq!(top[1].metric_value, Some(50.0));
}

#[test]
fn test_top_performers_ignore_scheduled_matches() {
    let analyzer = seeded_analyzer();

    let top = analyzer.top_performers("ace_percentage", 10, 1).unwrap();

    assert_eq!(top[0].player_id, 1);
    assert_eq!(top[0].metric_value, Some(11.0));
    assert_eq!(top[1].metric_value, Some(2.08));
    // player 3 has no statistics rows
    assert_eq!(top[2].player_id, 3);
    assert_eq!(top[2].metric_value, None);
}

#[test]
fn test_top_performers_rejects_unknown_metric() {
    let analyzer = seeded_analyzer();

    let err = analyzer.top_performers("bogus_metric", 10, 0).unwrap_err();

    match err {
        AnalyzerError::InvalidMetric { metric, valid } => {
            assert_eq!(metric, "bogus_metric");
            assert!(valid.contains(&"winner_ratio"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_compare_requires_two_players() {
    let analyzer = seeded_analyzer();

    for ids in [vec![], vec![1], vec![1, 1]] {
        let err = analyzer.compare_players(&ids).unwrap_err();
        assert!(matches!(err, AnalyzerError::InsufficientInput { required: 2, .. }));
    }
}

#[test]
fn test_compare_players() {
    let analyzer = seeded_analyzer();

    let comparison = analyzer.compare_players(&[1, 2]).unwrap();

    assert_eq!(comparison.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    let axelsen = &comparison[&1];
    assert_eq!(axelsen.name, "Viktor Axelsen");
    assert_eq!(axelsen.matches_played, 3);
    assert_eq!(axelsen.preferred_rally_length, RallyLength::Short);
    assert_eq!(axelsen.shot_distribution.smash, 33.33);
}

#[test]
fn test_scouting_report() {
    let analyzer = seeded_analyzer();

    let report = analyzer.scouting_report(1).unwrap().unwrap();

    assert_eq!(report.player_info.name, "Viktor Axelsen");
    assert_eq!(report.player_info.age, Some(30));
    assert_eq!(report.performance_overview.total_matches, 3);
    assert_eq!(report.performance_overview.recent_form, RecentForm::Good);

    let style = &report.playing_style;
    assert!(style.strengths.contains(&Strength::Accuracy));
    assert!(style.strengths.contains(&Strength::Attacking));
    assert!(style.strengths.contains(&Strength::QuickFinishing));
    assert!(!style.strengths.contains(&Strength::Endurance));
    assert!(!style.weaknesses.contains(&Weakness::Errors));
    assert_eq!(report.recent_matches.len(), 3);
}

#[test]
fn test_scouting_report_weak_serving() {
    let analyzer = seeded_analyzer();

    let report = analyzer.scouting_report(2).unwrap().unwrap();

    assert_eq!(report.playing_style.weaknesses, vec![Weakness::Serving]);
}

#[test]
fn test_scouting_report_for_player_without_matches() {
    let analyzer = seeded_analyzer();

    let report = analyzer.scouting_report(4).unwrap().unwrap();
    assert_eq!(report.performance_overview.total_matches, 0);
    assert_eq!(report.performance_overview.recent_form, RecentForm::NoRecentData);
    assert_eq!(report.player_info.age, None);

    assert!(analyzer.scouting_report(999).unwrap().is_none());
}

#[test]
fn test_malformed_birth_date_yields_no_age() {
    let analyzer = seeded_analyzer();

    let report = analyzer.scouting_report(3).unwrap().unwrap();

    assert_eq!(report.player_info.age, None);
}

#[test]
fn test_tournament_performance() {
    let analyzer = seeded_analyzer();

    let all_england = analyzer.tournament_performance(1).unwrap().unwrap();
    assert_eq!(all_england.total_matches, 2);
    assert_eq!(all_england.total_players, 3);
    assert_eq!(all_england.avg_match_duration, Some(45.0));
    assert_eq!(all_england.longest_match, Some(50));

    let japan = analyzer.tournament_performance(2).unwrap().unwrap();
    assert_eq!(japan.total_matches, 1);

    assert!(analyzer.tournament_performance(999).unwrap().is_none());
}

#[test]
fn test_tournament_overview_busiest_first() {
    let analyzer = seeded_analyzer();

    let overview = analyzer.tournament_overview().unwrap();

    let ids: Vec<_> = overview.iter().map(|t| t.tournament_id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(overview[0].matches, 2);
}

#[test]
fn test_performance_trends_window() {
    let analyzer = seeded_analyzer();

    let trends = analyzer.performance_trends(1, 30).unwrap();

    assert_eq!(trends.len(), 1);
    assert_eq!(trends[0].match_id, 3);
    assert_abs_diff_eq!(trends[0].points_won_pct.unwrap(), 15.0 / 36.0 * 100.0, epsilon = 1e-9);
    assert_eq!(trends[0].ace_pct, None);

    assert_eq!(analyzer.performance_trends(1, 365).unwrap().len(), 3);
}

#[test]
fn test_performance_trends_with_unbounded_window() {
    let analyzer = seeded_analyzer();

    assert_eq!(analyzer.performance_trends(1, 1_000_000_000).unwrap().len(), 3);
    assert_eq!(analyzer.performance_trends(1, i64::MAX).unwrap().len(), 3);
}

#[test]
fn test_head_to_head() {
    let analyzer = seeded_analyzer();

    let record = analyzer.head_to_head(1, 2).unwrap().unwrap();

    assert_eq!(record.total_matches, 2);
    assert_eq!(record.player1_wins, 1);
    assert_eq!(record.player2_wins, 1);
    assert_eq!(record.last_meeting, Some(date(2024, 7, 20)));
    assert_eq!(record.player2_name.as_deref(), Some("Kento Momota"));

    // the scheduled rematch does not count
    let record = analyzer.head_to_head(1, 3).unwrap().unwrap();
    assert_eq!(record.total_matches, 1);
    assert_eq!(record.player1_wins, 1);

    assert!(analyzer.head_to_head(2, 3).unwrap().is_none());
}

#[test]
fn test_missing_tables_surface_as_data_source_errors() {
    let source = SqliteSource::new(create_memory_pool().unwrap());
    let analyzer = Analyzer::new(source, AppConfig::new()).with_today(reference_date());

    let err = analyzer.player_profile(1).unwrap_err();

    assert!(matches!(err, AnalyzerError::DataSource(_)));
    assert!(!err.is_client_error());
}

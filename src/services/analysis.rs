use chrono::{Local, NaiveDate};
use log::info;

use crate::aggregates::{
    self, HeadToHead, MatchInsights, PlayerProfile, RankedPlayer, RecentMatch, StatisticsSummary,
    TournamentOverview, TournamentPerformance, TournamentTypeRecord, TrendPoint,
};
use crate::config::AppConfig;
use crate::database::{MatchId, PlayerId, StatsSource, TournamentId};
use crate::errors::AnalyzerResult;
use crate::metrics::{RallyAnalysis, RecentForm, ShotDistribution};
use crate::ranking::{self, ComparisonResult};
use crate::scouting::{self, ScoutingReport};

/// Every public metrics operation over one read-only source.
pub struct Analyzer<S: StatsSource> {
    source: S,
    config: AppConfig,
    today: Option<NaiveDate>,
}

impl<S: StatsSource> Analyzer<S> {
    pub fn new(source: S, config: AppConfig) -> Self {
        Self {
            source,
            config,
            today: None,
        }
    }

    /// Fixes the reference date used for ages and trend windows.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn player_profile(&self, player_id: PlayerId) -> AnalyzerResult<Option<PlayerProfile>> {
        Ok(aggregates::player_profile(&self.source, player_id)?)
    }

    pub fn statistics_summary(&self, player_id: PlayerId) -> AnalyzerResult<Option<StatisticsSummary>> {
        Ok(aggregates::statistics_summary(&self.source, player_id)?)
    }

    pub fn shot_distribution(&self, player_id: PlayerId) -> AnalyzerResult<ShotDistribution> {
        let totals = aggregates::shot_totals(&self.source, player_id)?;
        Ok(ShotDistribution::from_totals(totals))
    }

    pub fn rally_analysis(&self, player_id: PlayerId) -> AnalyzerResult<RallyAnalysis> {
        let totals = aggregates::rally_totals(&self.source, player_id)?;
        Ok(RallyAnalysis::from_totals(totals))
    }

    pub fn tournament_type_performance(&self, player_id: PlayerId) -> AnalyzerResult<Vec<TournamentTypeRecord>> {
        Ok(aggregates::tournament_type_performance(&self.source, player_id)?)
    }

    pub fn recent_matches(&self, player_id: PlayerId, limit: usize) -> AnalyzerResult<Vec<RecentMatch>> {
        Ok(aggregates::recent_matches(&self.source, player_id, limit)?)
    }

    pub fn recent_form(&self, player_id: PlayerId) -> AnalyzerResult<RecentForm> {
        let recent = self.recent_matches(player_id, self.config.analysis.recent_form_window)?;
        Ok(RecentForm::from_results(recent.iter().map(|m| m.is_winner)))
    }

    pub fn match_insights(&self, match_id: MatchId) -> AnalyzerResult<Option<MatchInsights>> {
        Ok(aggregates::match_insights(&self.source, match_id)?)
    }

    pub fn tournament_performance(&self, tournament_id: TournamentId) -> AnalyzerResult<Option<TournamentPerformance>> {
        Ok(aggregates::tournament_performance(&self.source, tournament_id)?)
    }

    pub fn tournament_overview(&self) -> AnalyzerResult<Vec<TournamentOverview>> {
        Ok(aggregates::tournament_overview(&self.source)?)
    }

    pub fn performance_trends(&self, player_id: PlayerId, days: i64) -> AnalyzerResult<Vec<TrendPoint>> {
        Ok(aggregates::performance_trends(&self.source, player_id, days, self.today())?)
    }

    pub fn head_to_head(&self, player1_id: PlayerId, player2_id: PlayerId) -> AnalyzerResult<Option<HeadToHead>> {
        Ok(aggregates::head_to_head(&self.source, player1_id, player2_id)?)
    }

    pub fn top_performers(&self, metric: &str, limit: usize, min_matches: i64) -> AnalyzerResult<Vec<RankedPlayer>> {
        info!("Ranking top {} players by {} (min {} matches)", limit, metric, min_matches);
        ranking::top_performers(&self.source, metric, limit, min_matches)
    }

    pub fn compare_players(&self, ids: &[PlayerId]) -> AnalyzerResult<ComparisonResult> {
        info!("Comparing players {:?}", ids);
        ranking::compare_players(&self.source, ids)
    }

    pub fn scouting_report(&self, player_id: PlayerId) -> AnalyzerResult<Option<ScoutingReport>> {
        info!("Generating scouting report for player {}", player_id);
        Ok(scouting::scouting_report(&self.source, player_id, self.today(), &self.config)?)
    }
}

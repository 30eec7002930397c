pub mod aggregates;
pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod export;
pub mod metrics;
pub mod ranking;
pub mod scouting;
pub mod services;

use anyhow::{anyhow, Result};
use clap::Parser;
use serde::Serialize;
use std::path::Path;

use crate::cli::{Cli, Command};
use crate::config::{resolve_database_path, AppConfig};
use crate::database::SqliteSource;
use crate::services::analysis::Analyzer;
use crate::services::server::ServerService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_serve(db_path: String, port: Option<u16>) -> Result<()> {
    let config = AppConfig::new();
    let port = port.unwrap_or(config.server.default_port);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, db_path, config);
        service.run().await
    })
}

pub fn open_analyzer(db_path: &str) -> Result<Analyzer<SqliteSource>> {
    let pool = database::create_pool(db_path)?;
    Ok(Analyzer::new(SqliteSource::new(pool), AppConfig::new()))
}

fn emit<T: Serialize>(data: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => export::export_json(data, path),
        None => {
            println!("{}", export::to_pretty_json(data)?);
            Ok(())
        }
    }
}

pub fn handle_command(cli: Cli) -> Result<()> {
    let db_path = resolve_database_path(cli.db.as_deref());

    match cli.command {
        Command::Serve { port } => handle_serve(db_path, port),
        command => {
            let analyzer = open_analyzer(&db_path)?;
            handle_query(&analyzer, command, cli.output.as_deref())
        }
    }
}

fn handle_query(analyzer: &Analyzer<SqliteSource>, command: Command, output: Option<&Path>) -> Result<()> {
    let defaults = &analyzer.config().analysis;

    match command {
        Command::Profile { player_id } => emit(&analyzer.player_profile(player_id)?, output),
        Command::Summary { player_id } => emit(&analyzer.statistics_summary(player_id)?, output),
        Command::Shots { player_id } => emit(&analyzer.shot_distribution(player_id)?, output),
        Command::Rally { player_id } => emit(&analyzer.rally_analysis(player_id)?, output),
        Command::Recent { player_id, limit } => {
            let limit = limit.unwrap_or(defaults.recent_matches_limit);
            emit(&analyzer.recent_matches(player_id, limit)?, output)
        }
        Command::TournamentTypes { player_id } => {
            emit(&analyzer.tournament_type_performance(player_id)?, output)
        }
        Command::Report { player_id } => emit(&analyzer.scouting_report(player_id)?, output),
        Command::Top { metric, limit, min_matches } => {
            let limit = limit.unwrap_or(defaults.top_limit);
            let min_matches = min_matches.unwrap_or(defaults.top_min_matches);
            emit(&analyzer.top_performers(&metric, limit, min_matches)?, output)
        }
        Command::Compare { player_ids } => emit(&analyzer.compare_players(&player_ids)?, output),
        Command::Match { match_id } => emit(&analyzer.match_insights(match_id)?, output),
        Command::Tournament { tournament_id } => {
            emit(&analyzer.tournament_performance(tournament_id)?, output)
        }
        Command::Tournaments => emit(&analyzer.tournament_overview()?, output),
        Command::Trends { player_id, days } => {
            let days = days.unwrap_or(defaults.trend_days);
            emit(&analyzer.performance_trends(player_id, days)?, output)
        }
        Command::HeadToHead { player1_id, player2_id } => {
            emit(&analyzer.head_to_head(player1_id, player2_id)?, output)
        }
        Command::Serve { .. } => Err(anyhow!("serve is not a query command")),
    }
}

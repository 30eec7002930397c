#![allow(dead_code)]

use anyhow::{Context, Result};
use chrono::NaiveDate;

use badminton_stats::config::AppConfig;
use badminton_stats::database::{create_memory_pool, get_connection, SqliteSource};
use badminton_stats::services::analysis::Analyzer;

const SCHEMA_SQL: &str = include_str!("schema.sql");
const FIXTURES_SQL: &str = include_str!("fixtures.sql");

/// In-memory source with the fixture schema only.
pub fn empty_source() -> Result<SqliteSource> {
    let pool = create_memory_pool()?;
    let conn = get_connection(&pool)?;
    conn.execute_batch(SCHEMA_SQL)
        .context("Failed to create fixture schema")?;
    drop(conn);
    Ok(SqliteSource::new(pool))
}

/// In-memory source seeded with four players, two tournaments and four matches.
pub fn seeded_source() -> Result<SqliteSource> {
    let source = empty_source()?;
    let conn = get_connection(source.pool())?;
    conn.execute_batch(FIXTURES_SQL)
        .context("Failed to load fixtures")?;
    drop(conn);
    Ok(source)
}

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
}

pub fn seeded_analyzer() -> Analyzer<SqliteSource> {
    let source = seeded_source().unwrap();
    Analyzer::new(source, AppConfig::new()).with_today(reference_date())
}

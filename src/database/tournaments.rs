use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::{Tournament, TournamentId};

const TOURNAMENT_COLUMNS: &str = "tournament_id, tournament_name, location, country, tournament_type, surface, prize_money, start_date, end_date, status";

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        tournament_id: row.get(0)?,
        tournament_name: row.get(1)?,
        location: row.get(2)?,
        country: row.get(3)?,
        tournament_type: row.get(4)?,
        surface: row.get(5)?,
        prize_money: row.get(6)?,
        start_date: row.get(7)?,
        end_date: row.get(8)?,
        status: row.get(9)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: TournamentId) -> Result<Option<Tournament>> {
    let sql = format!("SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE tournament_id = ?1");

    conn.query_row(&sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Tournament>> {
    let sql = format!("SELECT {TOURNAMENT_COLUMNS} FROM tournaments ORDER BY tournament_id");

    let mut stmt = conn.prepare(&sql).context("Failed to prepare tournament listing")?;
    let rows = stmt
        .query_map([], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list tournaments")?;

    Ok(rows)
}

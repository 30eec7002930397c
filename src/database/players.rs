use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::{Player, PlayerId};

const PLAYER_COLUMNS: &str = "player_id, first_name, last_name, nationality, birth_date, gender, height_cm, weight_kg, dominant_hand, world_ranking";

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        player_id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        nationality: row.get(3)?,
        birth_date: row.get(4)?,
        gender: row.get(5)?,
        height_cm: row.get(6)?,
        weight_kg: row.get(7)?,
        dominant_hand: row.get(8)?,
        world_ranking: row.get(9)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: PlayerId) -> Result<Option<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE player_id = ?1");

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY player_id");

    let mut stmt = conn.prepare(&sql).context("Failed to prepare player listing")?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list players")?;

    Ok(rows)
}

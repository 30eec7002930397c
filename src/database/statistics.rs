use anyhow::{Context, Result};
use rusqlite::{params, Params};

use super::connection::DbConn;
use super::models::{MatchId, MatchStatistics, PlayerId, COMPLETED_STATUS};

const STAT_COLUMNS: &str = "
    ms.stat_id, ms.match_id, ms.player_id, ms.total_serves, ms.service_aces, ms.service_faults,
    ms.short_serves, ms.long_serves, ms.flick_serves, ms.total_shots, ms.winners, ms.unforced_errors,
    ms.forced_errors, ms.smashes, ms.clears, ms.drops, ms.drives, ms.net_shots, ms.lobs, ms.kills,
    ms.net_points_won, ms.net_points_played, ms.backcourt_points_won, ms.backcourt_points_played,
    ms.short_rallies_won, ms.medium_rallies_won, ms.long_rallies_won, ms.short_rallies_played,
    ms.medium_rallies_played, ms.long_rallies_played, ms.points_won, ms.points_played";

const STAT_COLUMN_COUNT: usize = 32;

pub(crate) fn parse_statistics_row(row: &rusqlite::Row) -> rusqlite::Result<MatchStatistics> {
    // Counters are nullable in older dumps; a missing counter contributes nothing.
    let counter = |idx: usize| -> rusqlite::Result<i64> { Ok(row.get::<_, Option<i64>>(idx)?.unwrap_or(0)) };

    Ok(MatchStatistics {
        stat_id: row.get(0)?,
        match_id: row.get(1)?,
        player_id: row.get(2)?,
        total_serves: counter(3)?,
        service_aces: counter(4)?,
        service_faults: counter(5)?,
        short_serves: counter(6)?,
        long_serves: counter(7)?,
        flick_serves: counter(8)?,
        total_shots: counter(9)?,
        winners: counter(10)?,
        unforced_errors: counter(11)?,
        forced_errors: counter(12)?,
        smashes: counter(13)?,
        clears: counter(14)?,
        drops: counter(15)?,
        drives: counter(16)?,
        net_shots: counter(17)?,
        lobs: counter(18)?,
        kills: counter(19)?,
        net_points_won: counter(20)?,
        net_points_played: counter(21)?,
        backcourt_points_won: counter(22)?,
        backcourt_points_played: counter(23)?,
        short_rallies_won: counter(24)?,
        medium_rallies_won: counter(25)?,
        long_rallies_won: counter(26)?,
        short_rallies_played: counter(27)?,
        medium_rallies_played: counter(28)?,
        long_rallies_played: counter(29)?,
        points_won: counter(30)?,
        points_played: counter(31)?,
    })
}

fn query_completed<P: Params>(conn: &mut DbConn, filter: &str, params: P) -> Result<Vec<MatchStatistics>> {
    let sql = format!(
        "SELECT {STAT_COLUMNS}
         FROM match_statistics ms
         JOIN matches m ON m.match_id = ms.match_id
         WHERE m.status = '{COMPLETED_STATUS}' AND {filter}
         ORDER BY ms.match_id"
    );

    let mut stmt = conn.prepare(&sql).context("Failed to prepare statistics query")?;
    let rows = stmt
        .query_map(params, parse_statistics_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to read match statistics")?;

    Ok(rows)
}

/// Statistics rows of one player, restricted to completed matches
pub fn list_for_player(conn: &mut DbConn, player_id: PlayerId) -> Result<Vec<MatchStatistics>> {
    query_completed(conn, "ms.player_id = ?1", params![player_id])
}

pub fn list_all_completed(conn: &mut DbConn) -> Result<Vec<MatchStatistics>> {
    query_completed(conn, "1 = 1", [])
}

/// Both sides' statistics for one match, paired with the player's display name
pub fn list_for_match(conn: &mut DbConn, match_id: MatchId) -> Result<Vec<(String, MatchStatistics)>> {
    let sql = format!(
        "SELECT {STAT_COLUMNS}, p.first_name || ' ' || p.last_name
         FROM match_statistics ms
         JOIN players p ON ms.player_id = p.player_id
         WHERE ms.match_id = ?1
         ORDER BY ms.stat_id"
    );

    let mut stmt = conn.prepare(&sql).context("Failed to prepare match statistics query")?;
    let rows = stmt
        .query_map(params![match_id], |row| {
            let stats = parse_statistics_row(row)?;
            let name: String = row.get(STAT_COLUMN_COUNT)?;
            Ok((name, stats))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list match statistics")?;

    Ok(rows)
}

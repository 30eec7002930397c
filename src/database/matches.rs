use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension, Params};

use super::connection::DbConn;
use super::models::{
    Game, MatchHeader, MatchId, MatchParticipant, Participation, PlayerId, TournamentId, COMPLETED_STATUS,
};

// One row per (player, completed match). The opponent join assumes singles;
// grouping keeps a single row per side even if the participant table drifts.
fn participation_sql(filter: &str) -> String {
    format!(
        "
        SELECT
            mp.player_id,
            m.match_id,
            m.tournament_id,
            t.tournament_name,
            t.tournament_type,
            m.match_date,
            m.match_time,
            m.round,
            m.duration_minutes,
            mp.is_winner,
            opp.player_id,
            p_opp.first_name || ' ' || p_opp.last_name,
            p_opp.nationality
        FROM match_participants mp
        JOIN matches m ON m.match_id = mp.match_id
        JOIN tournaments t ON t.tournament_id = m.tournament_id
        LEFT JOIN match_participants opp ON opp.match_id = mp.match_id AND opp.player_id != mp.player_id
        LEFT JOIN players p_opp ON p_opp.player_id = opp.player_id
        WHERE m.status = '{COMPLETED_STATUS}' AND {filter}
        GROUP BY mp.match_id, mp.player_id
        ORDER BY m.match_date DESC, m.match_time DESC, m.match_id DESC
        "
    )
}

fn parse_participation_row(row: &rusqlite::Row) -> rusqlite::Result<Participation> {
    Ok(Participation {
        player_id: row.get(0)?,
        match_id: row.get(1)?,
        tournament_id: row.get(2)?,
        tournament_name: row.get(3)?,
        tournament_type: row.get(4)?,
        match_date: row.get(5)?,
        match_time: row.get(6)?,
        round: row.get(7)?,
        duration_minutes: row.get(8)?,
        is_winner: row.get(9)?,
        opponent_id: row.get(10)?,
        opponent_name: row.get(11)?,
        opponent_nationality: row.get(12)?,
    })
}

fn query_participations<P: Params>(conn: &mut DbConn, filter: &str, params: P) -> Result<Vec<Participation>> {
    let sql = participation_sql(filter);

    let mut stmt = conn.prepare(&sql).context("Failed to prepare participation query")?;
    let rows = stmt
        .query_map(params, parse_participation_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to read participations")?;

    Ok(rows)
}

/// Completed matches of one player, newest first
pub fn list_participations_for_player(conn: &mut DbConn, player_id: PlayerId) -> Result<Vec<Participation>> {
    query_participations(conn, "mp.player_id = ?1", params![player_id])
}

pub fn list_participations_for_tournament(
    conn: &mut DbConn,
    tournament_id: TournamentId,
) -> Result<Vec<Participation>> {
    query_participations(conn, "m.tournament_id = ?1", params![tournament_id])
}

pub fn list_all_participations(conn: &mut DbConn) -> Result<Vec<Participation>> {
    query_participations(conn, "1 = 1", [])
}

pub fn find_header(conn: &mut DbConn, match_id: MatchId) -> Result<Option<MatchHeader>> {
    let sql = "
        SELECT
            m.match_id, m.tournament_id, t.tournament_name, t.location, t.tournament_type,
            m.match_date, m.match_time, m.round, m.court, m.match_type, m.best_of,
            m.duration_minutes, m.winner_id, m.status, m.temperature_celsius, m.humidity_percent
        FROM matches m
        JOIN tournaments t ON m.tournament_id = t.tournament_id
        WHERE m.match_id = ?1
    ";

    conn.query_row(sql, params![match_id], |row| {
        Ok(MatchHeader {
            match_id: row.get(0)?,
            tournament_id: row.get(1)?,
            tournament_name: row.get(2)?,
            location: row.get(3)?,
            tournament_type: row.get(4)?,
            match_date: row.get(5)?,
            match_time: row.get(6)?,
            round: row.get(7)?,
            court: row.get(8)?,
            match_type: row.get(9)?,
            best_of: row.get(10)?,
            duration_minutes: row.get(11)?,
            winner_id: row.get(12)?,
            status: row.get(13)?,
            temperature_celsius: row.get(14)?,
            humidity_percent: row.get(15)?,
        })
    })
    .optional()
    .context("Failed to query match by id")
}

pub fn list_participants(conn: &mut DbConn, match_id: MatchId) -> Result<Vec<MatchParticipant>> {
    let sql = "
        SELECT
            mp.participant_id, mp.match_id, mp.player_id, mp.partner_id, mp.team_position, mp.is_winner,
            p.first_name || ' ' || p.last_name, p.nationality, p.world_ranking
        FROM match_participants mp
        JOIN players p ON mp.player_id = p.player_id
        WHERE mp.match_id = ?1
        ORDER BY mp.team_position, mp.participant_id
    ";

    let mut stmt = conn.prepare(sql).context("Failed to prepare participant query")?;
    let rows = stmt
        .query_map(params![match_id], |row| {
            Ok(MatchParticipant {
                participant_id: row.get(0)?,
                match_id: row.get(1)?,
                player_id: row.get(2)?,
                partner_id: row.get(3)?,
                team_position: row.get(4)?,
                is_winner: row.get(5)?,
                player_name: row.get(6)?,
                nationality: row.get(7)?,
                world_ranking: row.get(8)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list match participants")?;

    Ok(rows)
}

pub fn list_games(conn: &mut DbConn, match_id: MatchId) -> Result<Vec<Game>> {
    let sql = "
        SELECT game_id, match_id, game_number, team1_score, team2_score, winner_team, duration_minutes, max_rally_length
        FROM games
        WHERE match_id = ?1
        ORDER BY game_number
    ";

    let mut stmt = conn.prepare(sql).context("Failed to prepare game query")?;
    let rows = stmt
        .query_map(params![match_id], |row| {
            Ok(Game {
                game_id: row.get(0)?,
                match_id: row.get(1)?,
                game_number: row.get(2)?,
                team1_score: row.get(3)?,
                team2_score: row.get(4)?,
                winner_team: row.get(5)?,
                duration_minutes: row.get(6)?,
                max_rally_length: row.get(7)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list games")?;

    Ok(rows)
}

use anyhow::Result;

use super::connection::{get_connection, DbPool};
use super::models::{
    Game, MatchHeader, MatchId, MatchParticipant, MatchStatistics, Participation, Player, PlayerId,
    Tournament, TournamentId,
};
use super::{matches, players, statistics, tournaments};

/// Read-only row access the aggregates are computed from.
///
/// Only completed matches are ever returned by the participation and
/// statistics methods; everything else is passed through as stored.
pub trait StatsSource {
    fn player(&self, player_id: PlayerId) -> Result<Option<Player>>;
    fn players(&self) -> Result<Vec<Player>>;

    /// Completed matches of a player, newest first (date, then time)
    fn participations(&self, player_id: PlayerId) -> Result<Vec<Participation>>;
    fn tournament_participations(&self, tournament_id: TournamentId) -> Result<Vec<Participation>>;
    fn all_participations(&self) -> Result<Vec<Participation>>;

    fn player_statistics(&self, player_id: PlayerId) -> Result<Vec<MatchStatistics>>;
    fn all_statistics(&self) -> Result<Vec<MatchStatistics>>;

    fn match_header(&self, match_id: MatchId) -> Result<Option<MatchHeader>>;
    fn match_participants(&self, match_id: MatchId) -> Result<Vec<MatchParticipant>>;
    fn match_games(&self, match_id: MatchId) -> Result<Vec<Game>>;
    fn match_statistics(&self, match_id: MatchId) -> Result<Vec<(String, MatchStatistics)>>;

    fn tournament(&self, tournament_id: TournamentId) -> Result<Option<Tournament>>;
    fn tournaments(&self) -> Result<Vec<Tournament>>;
}

/// SQLite-backed source; every call checks out its own pooled connection
#[derive(Clone)]
pub struct SqliteSource {
    pool: DbPool,
}

impl SqliteSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl StatsSource for SqliteSource {
    fn player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let mut conn = get_connection(&self.pool)?;
        players::find_by_id(&mut conn, player_id)
    }

    fn players(&self) -> Result<Vec<Player>> {
        let mut conn = get_connection(&self.pool)?;
        players::list_all(&mut conn)
    }

    fn participations(&self, player_id: PlayerId) -> Result<Vec<Participation>> {
        let mut conn = get_connection(&self.pool)?;
        matches::list_participations_for_player(&mut conn, player_id)
    }

    fn tournament_participations(&self, tournament_id: TournamentId) -> Result<Vec<Participation>> {
        let mut conn = get_connection(&self.pool)?;
        matches::list_participations_for_tournament(&mut conn, tournament_id)
    }

    fn all_participations(&self) -> Result<Vec<Participation>> {
        let mut conn = get_connection(&self.pool)?;
        matches::list_all_participations(&mut conn)
    }

    fn player_statistics(&self, player_id: PlayerId) -> Result<Vec<MatchStatistics>> {
        let mut conn = get_connection(&self.pool)?;
        statistics::list_for_player(&mut conn, player_id)
    }

    fn all_statistics(&self) -> Result<Vec<MatchStatistics>> {
        let mut conn = get_connection(&self.pool)?;
        statistics::list_all_completed(&mut conn)
    }

    fn match_header(&self, match_id: MatchId) -> Result<Option<MatchHeader>> {
        let mut conn = get_connection(&self.pool)?;
        matches::find_header(&mut conn, match_id)
    }

    fn match_participants(&self, match_id: MatchId) -> Result<Vec<MatchParticipant>> {
        let mut conn = get_connection(&self.pool)?;
        matches::list_participants(&mut conn, match_id)
    }

    fn match_games(&self, match_id: MatchId) -> Result<Vec<Game>> {
        let mut conn = get_connection(&self.pool)?;
        matches::list_games(&mut conn, match_id)
    }

    fn match_statistics(&self, match_id: MatchId) -> Result<Vec<(String, MatchStatistics)>> {
        let mut conn = get_connection(&self.pool)?;
        statistics::list_for_match(&mut conn, match_id)
    }

    fn tournament(&self, tournament_id: TournamentId) -> Result<Option<Tournament>> {
        let mut conn = get_connection(&self.pool)?;
        tournaments::find_by_id(&mut conn, tournament_id)
    }

    fn tournaments(&self) -> Result<Vec<Tournament>> {
        let mut conn = get_connection(&self.pool)?;
        tournaments::list_all(&mut conn)
    }
}

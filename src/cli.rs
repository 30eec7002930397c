use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "badminton statistics analyzer")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH, then badminton.db)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Write the JSON result to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Player identity with match totals
    Profile { player_id: i64 },
    /// Averaged serve, shot and rally counters
    Summary { player_id: i64 },
    /// Shot-type distribution
    Shots { player_id: i64 },
    /// Win rate per rally length
    Rally { player_id: i64 },
    /// Most recent completed matches
    Recent {
        player_id: i64,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Results grouped by tournament type
    TournamentTypes { player_id: i64 },
    /// Full scouting report
    Report { player_id: i64 },
    /// Rank the population by a metric
    Top {
        /// One of: win_percentage, total_matches, avg_points_won, winner_ratio, ace_percentage
        #[arg(short, long, default_value = "win_percentage")]
        metric: String,
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(long)]
        min_matches: Option<i64>,
    },
    /// Side-by-side comparison of two or more players
    Compare {
        #[arg(num_args = 0..)]
        player_ids: Vec<i64>,
    },
    /// Detailed view of one match
    Match { match_id: i64 },
    /// Statistics of one tournament
    Tournament { tournament_id: i64 },
    /// All tournaments, busiest first
    Tournaments,
    /// Per-match results within a recent window
    Trends {
        player_id: i64,
        #[arg(short, long)]
        days: Option<i64>,
    },
    /// Record between two players
    HeadToHead { player1_id: i64, player2_id: i64 },
    /// Start the read-only JSON API
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

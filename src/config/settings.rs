#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub recent_form_window: usize,
    pub recent_matches_limit: usize,
    pub top_limit: usize,
    pub top_min_matches: i64,
    pub trend_days: i64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            recent_form_window: 5,
            recent_matches_limit: 10,
            top_limit: 10,
            top_min_matches: 5,
            trend_days: 90,
        }
    }
}

/// Thresholds used to classify strengths and weaknesses in scouting reports
#[derive(Debug, Clone)]
pub struct ScoutingSettings {
    pub accuracy_ratio: f64,
    pub error_ratio: f64,
    pub strong_ace_pct: f64,
    pub weak_ace_pct: f64,
    pub attacking_smash_pct: f64,
}

impl Default for ScoutingSettings {
    fn default() -> Self {
        Self {
            accuracy_ratio: 1.5,
            error_ratio: 0.8,
            strong_ace_pct: 8.0,
            weak_ace_pct: 3.0,
            attacking_smash_pct: 25.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub default_port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { default_port: 3000 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub analysis: AnalysisSettings,
    pub scouting: ScoutingSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            analysis: AnalysisSettings::default(),
            scouting: ScoutingSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

const DEFAULT_DATABASE_PATH: &str = "badminton.db";

/// Resolves the database file: explicit flag, then `DATABASE_PATH`, then the default.
pub fn resolve_database_path(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var("DATABASE_PATH").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
}

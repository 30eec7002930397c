pub mod settings;

pub use settings::{resolve_database_path, AnalysisSettings, AppConfig, ScoutingSettings, ServerSettings};

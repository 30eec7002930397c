use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Renders any computed structure as pretty JSON.
pub fn to_pretty_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize analysis")
}

/// Writes pretty JSON to `path`, creating parent directories as needed.
pub fn export_json<T: Serialize, P: AsRef<Path>>(data: &T, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create export directory {}", parent.display()))?;
    }

    let json = to_pretty_json(data)?;
    fs::write(path, json).with_context(|| format!("Failed to write export file {}", path.display()))?;

    info!("Analysis exported to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ShotDistribution;
    use crate::aggregates::ShotTotals;

    #[test]
    fn test_export_writes_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("shots.json");

        let dist = ShotDistribution::from_totals(ShotTotals {
            total_smashes: 3,
            total_clears: 1,
            total_winners: 2,
            ..Default::default()
        });

        export_json(&dist, &path).unwrap();
        let loaded: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(loaded["total_shots"], 4);
        assert_eq!(loaded["smash_percentage"], 75.0);
        assert_eq!(loaded["winner_to_error_ratio"], "Infinity");
    }
}

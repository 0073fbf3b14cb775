use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::state::DashboardSnapshot;

pub fn load_snapshot(path: &Path) -> Result<DashboardSnapshot> {
    let parse: fn(&str) -> Result<DashboardSnapshot> =
        match path.extension().and_then(|value| value.to_str()) {
            Some("toml") => parse_toml,
            Some("json") => parse_json,
            other => {
                return Err(Error::UnsupportedSnapshotFormat(
                    other.unwrap_or("unknown").to_string(),
                ))
            }
        };

    let contents = fs::read_to_string(path).map_err(|err| {
        Error::SnapshotIo(format!(
            "failed to read snapshot '{}': {}",
            path.display(),
            err
        ))
    })?;
    parse(&contents)
}

fn parse_toml(contents: &str) -> Result<DashboardSnapshot> {
    toml::from_str(contents)
        .map_err(|err| Error::SnapshotParse(format!("failed to parse TOML: {}", err)))
}

fn parse_json(contents: &str) -> Result<DashboardSnapshot> {
    serde_json::from_str(contents)
        .map_err(|err| Error::SnapshotParse(format!("failed to parse JSON: {}", err)))
}

//! Persisted user preferences (lives in the OS config directory).

use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::controller::{clamp_edge_threshold, DEFAULT_EDGE_THRESHOLD};
use crate::error::Result;
use crate::model::Gregorian;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// First column of the grid.
    pub week_start: Weekday,
    pub dim_weekends: bool,
    /// Sections from either end of the window that trigger growth.
    pub edge_threshold: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            dim_weekends: true,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }
}

impl AppSettings {
    pub fn calendar(&self) -> Gregorian {
        Gregorian::new(self.week_start)
    }

    /// `settings.json` in the platform config dir, or the working directory
    /// when no home directory can be found.
    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "CompositionalCalendar") {
            proj_dirs.config_dir().join("settings.json")
        } else {
            PathBuf::from(".").join("settings.json")
        }
    }

    /// Load settings, falling back to defaults if the file is missing or
    /// unreadable. Out-of-range values are clamped.
    pub fn load(path: &Path) -> Self {
        let mut settings = Self::read(path);
        settings.edge_threshold = clamp_edge_threshold(settings.edge_threshold);
        settings
    }

    fn read(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed settings {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("Failed to read settings {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        log::debug!("Saved settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("compositional-calendar-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("roundtrip");
        let settings = AppSettings {
            week_start: Weekday::Mon,
            dim_weekends: false,
            edge_threshold: 2,
        };
        settings.save(&path).unwrap();
        assert_eq!(AppSettings::load(&path), settings);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = temp_path("missing");
        assert_eq!(AppSettings::load(&path), AppSettings::default());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{ "week_start": "Mon" }"#).unwrap();
        assert_eq!(settings.week_start, Weekday::Mon);
        assert!(settings.dim_weekends);
        assert_eq!(settings.edge_threshold, DEFAULT_EDGE_THRESHOLD);
    }

    #[test]
    fn oversized_edge_threshold_is_clamped_on_load() {
        let path = temp_path("threshold");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "edge_threshold": 30 }"#).unwrap();
        assert_eq!(
            AppSettings::load(&path).edge_threshold,
            crate::controller::MAX_EDGE_THRESHOLD
        );
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn malformed_json_gives_defaults() {
        let path = temp_path("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppSettings::load(&path), AppSettings::default());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}

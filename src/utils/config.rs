use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub io: IoConfig,
    pub cleaning: CleaningOptions,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// The two constants the cleaning steps depend on. Passed into
/// `clean_table` explicitly rather than read from globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningOptions {
    pub most_recent_year: String,
    pub missing_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            io: IoConfig {
                input_path: PathBuf::from(
                    "./data/MinCan _Past and Present Productive Mines of Canada, 1950-2022_March2024.csv",
                ),
                output_path: PathBuf::from("./data/mines.csv"),
            },
            cleaning: CleaningOptions {
                most_recent_year: "2022".to_string(),
                missing_label: "N/A".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> crate::utils::errors::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::utils::errors::MineCleanerError::ConfigError(e.to_string()))?;
        toml::from_str(&content)
            .map_err(|e| crate::utils::errors::MineCleanerError::ConfigError(e.to_string()))
    }

    pub fn load_or_default(path: Option<&str>) -> Self {
        if let Some(p) = path {
            Self::load_from_file(p).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_production_constants() {
        let config = AppConfig::default();
        assert_eq!(config.cleaning.most_recent_year, "2022");
        assert_eq!(config.cleaning.missing_label, "N/A");
        assert_eq!(config.io.output_path, PathBuf::from("./data/mines.csv"));
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let config = AppConfig::load_or_default(Some("no_such_config.toml"));
        assert_eq!(config.cleaning.most_recent_year, "2022");
    }

    #[test]
    fn load_from_file_parses_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[io]
input_path = "./in.csv"
output_path = "./out.csv"

[cleaning]
most_recent_year = "2023"
missing_label = "N/A"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.cleaning.most_recent_year, "2023");
        assert_eq!(config.logging.level, "debug");
    }
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::ingest::Sources;
use crate::{Error, Result};

pub const DEFAULT_DATABASE: &str = "food_waste.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    pub database: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub sources: Sources,
}

impl DashboardConfig {
    pub fn database_path(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    /// Explicit `[sources]` entries win over files found in `data_dir`
    pub fn sources(&self) -> Sources {
        let from_dir = self
            .data_dir
            .as_deref()
            .map(Sources::from_dir)
            .unwrap_or_default();
        self.sources.clone().or(from_dir)
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, database: Option<PathBuf>, data_dir: Option<PathBuf>) -> Self {
        if database.is_some() {
            self.database = database;
        }
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        self
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("fooddash.toml")
}

pub fn load_config(path: Option<&Path>) -> Result<Option<DashboardConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: DashboardConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &DashboardConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    let contents = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;

    #[test]
    fn test_sources_prefer_explicit_entries() {
        let config: DashboardConfig = toml::from_str(
            r#"
            database = "out/dash.db"
            data_dir = "data"

            [sources]
            claims = "exports/claims_2025.csv"
            "#,
        )
        .unwrap();

        let sources = config.sources();
        assert_eq!(config.database_path(), PathBuf::from("out/dash.db"));
        assert_eq!(sources.path_for(Table::Claims), Some(Path::new("exports/claims_2025.csv")));
        assert_eq!(sources.path_for(Table::Providers), Some(Path::new("data/providers.csv")));
    }

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml"))).unwrap().is_none());
    }

    #[test]
    fn test_write_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fooddash.toml");
        let config = DashboardConfig {
            data_dir: Some(PathBuf::from("data")),
            ..Default::default()
        };

        write_config(&path, &config, false).unwrap();
        assert!(write_config(&path, &config, false).is_err());
        write_config(&path, &config, true).unwrap();

        assert_eq!(load_config(Some(&path)).unwrap(), Some(config));
    }

    #[test]
    fn test_overrides_and_defaults() {
        let config = DashboardConfig::default().with_overrides(None, Some(PathBuf::from("csv")));
        assert_eq!(config.database_path(), PathBuf::from(DEFAULT_DATABASE));
        assert!(!config.sources().is_empty());
        assert!(DashboardConfig::default().sources().is_empty());
    }
}

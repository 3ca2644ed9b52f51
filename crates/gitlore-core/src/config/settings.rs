use std::path::PathBuf;

use git2::Config;

use crate::error::CoreError;
use crate::model::{BranchFilter, WalkMode};

#[derive(Debug, Clone, Default)]
pub struct LoreConfig {
    pub index_path: Option<PathBuf>,
    pub id_prefix: String,
    pub branches: Vec<String>,
    pub min_score: f32,
    pub walk: WalkMode,
}

impl LoreConfig {
    /// Read config from the [gitlore] section of a git config.
    pub fn load(config: &Config) -> Result<Self, CoreError> {
        let mut branches = Vec::new();
        if let Ok(mut entries) = config.multivar("gitlore.branch", None) {
            while let Some(Ok(entry)) = entries.next() {
                if let Some(value) = entry.value() {
                    branches.push(value.to_string());
                }
            }
        }

        let min_score = match config.get_string("gitlore.minScore") {
            Ok(raw) => raw
                .trim()
                .parse::<f32>()
                .map_err(|e| CoreError::Config(format!("gitlore.minScore '{raw}': {e}")))?,
            Err(_) => 0.0,
        };

        let walk = match config.get_string("gitlore.walk") {
            Ok(raw) => raw.trim().parse()?,
            Err(_) => WalkMode::default(),
        };

        Ok(Self {
            index_path: config.get_path("gitlore.indexPath").ok(),
            id_prefix: config.get_string("gitlore.idPrefix").unwrap_or_default(),
            branches,
            min_score,
            walk,
        })
    }

    /// Read the user's global/system config, or defaults if there is none.
    pub fn load_default() -> Result<Self, CoreError> {
        match Config::open_default() {
            Ok(config) => Self::load(&config),
            Err(e) => {
                tracing::debug!("No default git config: {e}");
                Ok(Self::default())
            }
        }
    }

    pub fn branch_filter(&self) -> BranchFilter {
        BranchFilter::from_names(self.branches.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_file(tmp: &TempDir) -> Config {
        Config::open(&tmp.path().join("config")).unwrap()
    }

    #[test]
    fn test_load_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = config_file(&tmp);
        let loaded = LoreConfig::load(&config).unwrap();
        assert_eq!(loaded.index_path, None);
        assert_eq!(loaded.id_prefix, "");
        assert!(loaded.branches.is_empty());
        assert_eq!(loaded.min_score, 0.0);
        assert_eq!(loaded.walk, WalkMode::BranchTips);
        assert_eq!(loaded.branch_filter(), BranchFilter::All);
    }

    #[test]
    fn test_load_values() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_file(&tmp);
        config.set_str("gitlore.indexPath", "/tmp/lore").unwrap();
        config.set_str("gitlore.idPrefix", "core").unwrap();
        config.set_multivar("gitlore.branch", "^$", "main").unwrap();
        config.set_multivar("gitlore.branch", "^$", "release").unwrap();
        config.set_str("gitlore.minScore", "0.5").unwrap();
        config.set_str("gitlore.walk", "head").unwrap();

        let loaded = LoreConfig::load(&config).unwrap();
        assert_eq!(loaded.index_path, Some(PathBuf::from("/tmp/lore")));
        assert_eq!(loaded.id_prefix, "core");
        assert_eq!(loaded.branches, vec!["main", "release"]);
        assert_eq!(loaded.min_score, 0.5);
        assert_eq!(loaded.walk, WalkMode::Head);
        assert!(loaded.branch_filter().matches("release"));
        assert!(!loaded.branch_filter().matches("dev"));
    }

    #[test]
    fn test_invalid_min_score_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_file(&tmp);
        config.set_str("gitlore.minScore", "high").unwrap();
        assert!(matches!(
            LoreConfig::load(&config),
            Err(CoreError::Config(_))
        ));
    }
}

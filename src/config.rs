//! Configuration for the induction engine.
//!
//! All configuration is optional; the engine runs with sensible
//! defaults when no config is supplied. Configs load from a TOML
//! string or file handed in by the caller.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiftError};

/// Top-level induction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InductionConfig {
    /// Sort inference configuration.
    pub sorts: SortConfig,
    /// Per-action fan-out configuration.
    pub parallel: ParallelConfig,
}

/// Which position grouping drives sort inference.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortSource {
    /// Group objects by action-parameter position (the default).
    #[default]
    Actions,
    /// Group objects by fluent-argument position; for corpora where
    /// action parameter information is unavailable.
    Fluents,
}

/// Sort inference configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SortConfig {
    /// Position grouping to infer sorts from.
    pub source: SortSource,
}

/// Per-action fan-out configuration.
///
/// Schemas are independent, so the per-action phase can map over
/// action names in parallel. Below `min_actions` the serial path is
/// used to avoid fan-out overhead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParallelConfig {
    /// Whether to fan out per action name. Requires the `parallel`
    /// cargo feature; ignored without it.
    pub enabled: bool,
    /// Minimum number of distinct action names before fanning out.
    pub min_actions: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_actions: 4,
        }
    }
}

impl InductionConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SiftError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InductionConfig::default();
        assert_eq!(config.sorts.source, SortSource::Actions);
        assert!(!config.parallel.enabled);
        assert_eq!(config.parallel.min_actions, 4);
    }

    #[test]
    fn test_from_toml_str_partial() {
        let config = InductionConfig::from_toml_str(
            r#"
            [sorts]
            source = "fluents"
            "#,
        )
        .unwrap();
        assert_eq!(config.sorts.source, SortSource::Fluents);
        // Unspecified sections keep their defaults.
        assert_eq!(config.parallel, ParallelConfig::default());
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = InductionConfig::from_toml_str("= broken");
        assert!(matches!(result, Err(SiftError::Config { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sift.toml");
        fs::write(
            &path,
            r#"
            [parallel]
            enabled = true
            min_actions = 2
            "#,
        )
        .unwrap();

        let config = InductionConfig::load(&path).unwrap();
        assert!(config.parallel.enabled);
        assert_eq!(config.parallel.min_actions, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = InductionConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(SiftError::Config { .. })));
    }
}

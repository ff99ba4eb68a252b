//! Top-level digitgrid configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{MatrixConfig, SanitizerConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`DIGITGRID_*`)
/// 3. Project config (`digitgrid.toml` in project root)
/// 4. User config (`~/.digitgrid/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GridConfig {
    pub sanitizer: SanitizerConfig,
    pub matrix: MatrixConfig,
}

/// Overrides supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub pattern_timeout_ms: Option<u64>,
    pub single_row_threshold: Option<usize>,
    pub max_cells: Option<usize>,
    pub threads: Option<usize>,
}

impl GridConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): programmatic overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &GridConfig) -> Result<(), ConfigError> {
        if config.sanitizer.pattern_timeout_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "sanitizer.pattern_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.matrix.max_cells == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "matrix.max_cells".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.digitgrid/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".digitgrid").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut GridConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GridConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut GridConfig, other: &GridConfig) {
        if other.sanitizer.pattern_timeout_ms.is_some() {
            base.sanitizer.pattern_timeout_ms = other.sanitizer.pattern_timeout_ms;
        }
        if other.matrix.single_row_threshold.is_some() {
            base.matrix.single_row_threshold = other.matrix.single_row_threshold;
        }
        if other.matrix.max_cells.is_some() {
            base.matrix.max_cells = other.matrix.max_cells;
        }
        if other.matrix.threads.is_some() {
            base.matrix.threads = other.matrix.threads;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `DIGITGRID_<SECTION>_<FIELD>`. Unparseable values are rejected.
    fn apply_env_overrides(config: &mut GridConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_value::<u64>("DIGITGRID_SANITIZER_PATTERN_TIMEOUT_MS")? {
            config.sanitizer.pattern_timeout_ms = Some(v);
        }
        if let Some(v) = env_value::<usize>("DIGITGRID_MATRIX_SINGLE_ROW_THRESHOLD")? {
            config.matrix.single_row_threshold = Some(v);
        }
        if let Some(v) = env_value::<usize>("DIGITGRID_MATRIX_MAX_CELLS")? {
            config.matrix.max_cells = Some(v);
        }
        if let Some(v) = env_value::<usize>("DIGITGRID_MATRIX_THREADS")? {
            config.matrix.threads = Some(v);
        }
        Ok(())
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut GridConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.pattern_timeout_ms {
            config.sanitizer.pattern_timeout_ms = Some(v);
        }
        if let Some(v) = overrides.single_row_threshold {
            config.matrix.single_row_threshold = Some(v);
        }
        if let Some(v) = overrides.max_cells {
            config.matrix.max_cells = Some(v);
        }
        if let Some(v) = overrides.threads {
            config.matrix.threads = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse an environment variable, if set.
fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: key.to_string(),
                message: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_only_overrides_set_fields() {
        let mut base = GridConfig::default();
        base.matrix.max_cells = Some(10);
        let mut other = GridConfig::default();
        other.matrix.threads = Some(4);

        GridConfig::merge(&mut base, &other);

        assert_eq!(base.matrix.max_cells, Some(10));
        assert_eq!(base.matrix.threads, Some(4));
    }

    #[test]
    fn overrides_win() {
        let mut config = GridConfig::default();
        config.matrix.single_row_threshold = Some(100);
        let overrides = ConfigOverrides {
            single_row_threshold: Some(50),
            ..Default::default()
        };
        GridConfig::apply_overrides(&mut config, &overrides);
        assert_eq!(config.matrix.effective_single_row_threshold(), 50);
    }
}

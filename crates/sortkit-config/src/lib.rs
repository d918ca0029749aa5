//! Configuration management for sortkit
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the binary)
//! 2. Environment variables (SORTKIT_<SECTION>__<KEY>)
//! 3. sortkit.local.toml (gitignored, local overrides)
//! 4. sortkit.toml (git-tracked, project config)
//! 5. ~/.config/sortkit/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use sortkit::Strategy;
use std::fmt;
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main sortkit configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortkitConfig {
    pub project: ProjectConfig,
    pub sort: SortConfig,
    pub demo: DemoConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "sortkit-project".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub strategy: Strategy,
    /// Longest input the CLI will accept. List sorting is cubic.
    pub max_len: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Standalone,
            max_len: 10_000,
        }
    }
}

/// Inputs for the `demo` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub numbers: Vec<i64>,
    pub characters: String,
    pub linked_list: Vec<i64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            numbers: vec![10, 3, -5, 0],
            characters: "AsDfGh".to_string(),
            linked_list: vec![10, 3, -5, 0],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub stats: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl SortkitConfig {
    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Parse a single TOML file without merging any other source
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check values the type system can't
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sort.max_len == 0 {
            return Err(ConfigError::ValidationError(
                "sort.max_len must be greater than zero".to_string(),
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        let demo_inputs = [
            ("demo.numbers", self.demo.numbers.len()),
            ("demo.characters", self.demo.characters.chars().count()),
            ("demo.linked_list", self.demo.linked_list.len()),
        ];
        for (key, len) in demo_inputs {
            self.check_len(key, len)?;
        }

        Ok(())
    }

    /// Reject inputs longer than `sort.max_len`
    pub fn check_len(&self, what: &str, len: usize) -> Result<(), ConfigError> {
        if len > self.sort.max_len {
            return Err(ConfigError::ValidationError(format!(
                "{what} has {len} elements, more than sort.max_len ({})",
                self.sort.max_len
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use test_case::test_case;

    #[test]
    fn test_default_config() {
        let config = SortkitConfig::default();
        assert_eq!(config.sort.strategy, Strategy::Standalone);
        assert_eq!(config.sort.max_len, 10_000);
        assert_eq!(config.demo.numbers, vec![10, 3, -5, 0]);
        assert_eq!(config.demo.characters, "AsDfGh");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.stats);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SortkitConfig = toml::from_str(
            r#"
[sort]
strategy = "inherited"
"#,
        )
        .unwrap();

        assert_eq!(config.sort.strategy, Strategy::Inherited);
        assert_eq!(config.sort.max_len, 10_000);
        assert_eq!(config.logging.level, "info");
    }

    #[test_case("trace"; "trace")]
    #[test_case("DEBUG"; "upper case")]
    #[test_case("warn"; "warn")]
    fn test_valid_log_levels(level: &str) {
        let mut config = SortkitConfig::default();
        config.logging.level = level.to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = SortkitConfig::default();
        config.logging.level = "loud".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_zero_max_len_rejected() {
        let mut config = SortkitConfig::default();
        config.sort.max_len = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_demo_input_longer_than_max_len() {
        let mut config = SortkitConfig::default();
        config.sort.max_len = 3;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("demo.numbers"));
    }

    #[test]
    fn test_from_toml_file_errors() {
        let temp_dir = tempdir().expect("Failed to create temp dir");

        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(
            SortkitConfig::from_toml_file(&missing),
            Err(ConfigError::ReadError { .. })
        ));

        let broken = temp_dir.path().join("broken.toml");
        std::fs::write(&broken, "[sort\nstrategy = ").unwrap();
        assert!(matches!(
            SortkitConfig::from_toml_file(&broken),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let config = SortkitConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: SortkitConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}

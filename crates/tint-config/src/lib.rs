//! Configuration management for Tint.
//!
//! Parses `tint.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [catalogs]
//! include = ["l10n/*.arb"]
//! skip_metadata = true
//!
//! [validate]
//! fail_on_issues = true
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override whether non-fatal issues fail validation.
    pub fail_on_issues: Option<bool>,
    /// Override whether `@`-prefixed metadata keys are skipped.
    pub skip_metadata: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tint.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog configuration (patterns are relative strings from TOML).
    catalogs: CatalogsConfigRaw,
    /// Validation configuration.
    pub validate: ValidateConfig,

    /// Resolved catalog configuration (set after loading).
    #[serde(skip)]
    pub catalogs_resolved: CatalogsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw catalog configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CatalogsConfigRaw {
    include: Option<Vec<String>>,
    skip_metadata: Option<bool>,
}

/// Resolved catalog configuration with absolute patterns.
#[derive(Debug, Clone)]
pub struct CatalogsConfig {
    /// Glob patterns for catalog files.
    pub include: Vec<String>,
    /// Skip keys starting with `@` (ARB metadata).
    pub skip_metadata: bool,
}

impl Default for CatalogsConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            skip_metadata: true,
        }
    }
}

impl CatalogsConfig {
    /// Expand include patterns into catalog file paths.
    ///
    /// Paths are sorted and deduplicated so runs are reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid or a matched path cannot be read.
    pub fn expand(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut paths = Vec::new();
        for pattern in &self.include {
            for entry in glob::glob(pattern)? {
                let path = entry?;
                if path.is_file() {
                    paths.push(path);
                }
            }
        }
        paths.sort();
        paths.dedup();
        Ok(paths)
    }
}

/// Validation configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Whether unrecognized tags or attributes fail validation.
    pub fail_on_issues: bool,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            fail_on_issues: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Invalid glob pattern.
    #[error("Invalid catalog pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Unreadable path while expanding a pattern.
    #[error("Catalog pattern error: {0}")]
    Glob(#[from] glob::GlobError),
}

impl Config {
    /// Load configuration, letting `cli_settings` override file values.
    ///
    /// An explicit `config_path` must exist. Without one, the nearest
    /// `tint.toml` in the working directory or its ancestors is used, and
    /// defaults apply when there is none.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => find_config_file(),
        };

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(settings) = cli_settings {
            config.override_with(settings);
        }
        Ok(config)
    }

    fn override_with(&mut self, settings: &CliSettings) {
        if let Some(fail_on_issues) = settings.fail_on_issues {
            self.validate.fail_on_issues = fail_on_issues;
        }
        if let Some(skip_metadata) = settings.skip_metadata {
            self.catalogs_resolved.skip_metadata = skip_metadata;
        }
    }

    fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(&std::fs::read_to_string(&path)?)?;
        let base = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(base)?;
        config.config_path = Some(path);
        Ok(config)
    }

    /// Resolve relative patterns against the config directory and validate them.
    fn resolve_paths(&mut self, base: &Path) -> Result<(), ConfigError> {
        let mut include = Vec::new();
        for pattern in self.catalogs.include.iter().flatten() {
            if pattern.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "catalogs.include patterns cannot be empty".to_owned(),
                ));
            }
            let resolved = base.join(pattern).to_string_lossy().into_owned();
            glob::Pattern::new(&resolved)?;
            include.push(resolved);
        }

        self.catalogs_resolved = CatalogsConfig {
            include,
            skip_metadata: self.catalogs.skip_metadata.unwrap_or(true),
        };
        Ok(())
    }
}

/// Nearest `tint.toml` in the working directory or its ancestors.
fn find_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalogs_resolved.include.is_empty());
        assert!(config.catalogs_resolved.skip_metadata);
        assert!(config.validate.fail_on_issues);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.validate.fail_on_issues);
    }

    #[test]
    fn test_parse_validate_config() {
        let toml = r"
[validate]
fail_on_issues = false
";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.validate.fail_on_issues);
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[catalogs]
include = ["l10n/*.arb", "extra/app_en.json"]
skip_metadata = false
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project")).unwrap();

        assert_eq!(
            config.catalogs_resolved.include,
            vec![
                "/project/l10n/*.arb".to_owned(),
                "/project/extra/app_en.json".to_owned()
            ]
        );
        assert!(!config.catalogs_resolved.skip_metadata);
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        let toml = r#"
[catalogs]
include = [" "]
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.resolve_paths(Path::new("/project")).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let toml = r#"
[catalogs]
include = ["l10n/[*.arb"]
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.resolve_paths(Path::new("/project")).unwrap_err();
        assert!(matches!(err, ConfigError::Pattern(_)));
    }

    #[test]
    fn test_cli_settings_override_file_values() {
        let mut config = Config::default();
        config.override_with(&CliSettings {
            fail_on_issues: Some(false),
            ..Default::default()
        });

        assert!(!config.validate.fail_on_issues);
        assert!(config.catalogs_resolved.skip_metadata); // Unchanged
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let err = Config::load(Some(Path::new("/nonexistent/tint.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_and_expand_catalogs() {
        let dir = tempfile::tempdir().unwrap();
        let l10n = dir.path().join("l10n");
        std::fs::create_dir(&l10n).unwrap();
        std::fs::write(l10n.join("app_fr.arb"), "{}").unwrap();
        std::fs::write(l10n.join("app_en.arb"), "{}").unwrap();
        std::fs::write(l10n.join("notes.txt"), "").unwrap();

        let config_path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &config_path,
            "[catalogs]\ninclude = [\"l10n/*.arb\"]\n",
        )
        .unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        assert_eq!(config.config_path, Some(config_path));

        let paths = config.catalogs_resolved.expand().unwrap();
        assert_eq!(paths, vec![l10n.join("app_en.arb"), l10n.join("app_fr.arb")]);
    }
}

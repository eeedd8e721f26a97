use crate::error::{GoCliError, Result};
use crate::model::{DEFAULT_DATABASE_URL, DEFAULT_PORT, DEFAULT_PROJECT_NAME};
use crate::templates::Profile;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TOOLCHAIN: &str = "go";

/// Overrides the config directory (mostly for tests and CI).
pub const CONFIG_DIR_ENV: &str = "GOCLI_CONFIG_DIR";

/// Optional user configuration, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GoCliConfig {
    /// Program used for `mod init` / `mod tidy`
    #[serde(default = "default_toolchain")]
    pub toolchain: String,

    /// Profile used when `--profile` is not given
    #[serde(default)]
    pub profile: Profile,

    #[serde(default)]
    pub defaults: PromptDefaults,
}

/// Values offered when the operator just presses enter.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PromptDefaults {
    #[serde(default = "default_project_name")]
    pub project_name: String,

    #[serde(default = "default_port")]
    pub port: String,

    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_toolchain() -> String {
    DEFAULT_TOOLCHAIN.to_string()
}

fn default_project_name() -> String {
    DEFAULT_PROJECT_NAME.to_string()
}

fn default_port() -> String {
    DEFAULT_PORT.to_string()
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            port: default_port(),
            database_url: default_database_url(),
        }
    }
}

impl Default for GoCliConfig {
    fn default() -> Self {
        Self {
            toolchain: default_toolchain(),
            profile: Profile::default(),
            defaults: PromptDefaults::default(),
        }
    }
}

impl GoCliConfig {
    /// Where the config lives: `$GOCLI_CONFIG_DIR`, else the platform config dir.
    pub fn config_dir() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Some(PathBuf::from(dir));
            }
        }
        ProjectDirs::from("com", "gocli", "gocli").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GoCliError::Io)?;
        let config: GoCliConfig = serde_json::from_str(&content).map_err(GoCliError::Config)?;
        Ok(config.normalized())
    }

    /// Loads from the resolved config dir. Never fails: problems are logged and
    /// defaults are used instead.
    pub fn load_or_default() -> Self {
        let Some(dir) = Self::config_dir() else {
            return Self::default();
        };

        match Self::load(&dir) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config in {}: {}", dir.display(), e);
                Self::default()
            }
        }
    }

    /// Blank strings fall back to the built-in defaults, so prompts always have a
    /// non-empty value to offer.
    fn normalized(mut self) -> Self {
        fn or_default(value: &mut String, default: fn() -> String) {
            if value.trim().is_empty() {
                *value = default();
            }
        }

        or_default(&mut self.toolchain, default_toolchain);
        or_default(&mut self.defaults.project_name, default_project_name);
        or_default(&mut self.defaults.port, default_port);
        or_default(&mut self.defaults.database_url, default_database_url);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GoCliConfig::default();
        assert_eq!(config.toolchain, "go");
        assert_eq!(config.profile, Profile::Full);
        assert_eq!(config.defaults.project_name, "app");
        assert_eq!(config.defaults.port, "8080");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = GoCliConfig::load(temp.path()).unwrap();
        assert_eq!(config, GoCliConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{
                "toolchain": "/opt/go/bin/go",
                "profile": "minimal",
                "defaults": {
                    "project_name": "github.com/acme/api",
                    "port": "3000",
                    "database_url": "postgres://acme@db/acme"
                }
            }"#,
        )
        .unwrap();

        let config = GoCliConfig::load(temp.path()).unwrap();
        assert_eq!(config.toolchain, "/opt/go/bin/go");
        assert_eq!(config.profile, Profile::Minimal);
        assert_eq!(config.defaults.project_name, "github.com/acme/api");
        assert_eq!(config.defaults.port, "3000");
        assert_eq!(config.defaults.database_url, "postgres://acme@db/acme");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "defaults": { "port": "9999" } }"#,
        )
        .unwrap();

        let config = GoCliConfig::load(temp.path()).unwrap();
        assert_eq!(config.toolchain, "go");
        assert_eq!(config.defaults.port, "9999");
        assert_eq!(config.defaults.project_name, "app");
    }

    #[test]
    fn test_blank_values_are_replaced() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "toolchain": "  ", "defaults": { "project_name": "" } }"#,
        )
        .unwrap();

        let config = GoCliConfig::load(temp.path()).unwrap();
        assert_eq!(config.toolchain, "go");
        assert_eq!(config.defaults.project_name, "app");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        let err = GoCliConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, GoCliError::Config(_)));
    }

    #[test]
    fn test_unknown_profile_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "profile": "Enterprise" }"#,
        )
        .unwrap();

        assert!(matches!(
            GoCliConfig::load(temp.path()),
            Err(GoCliError::Config(_))
        ));
    }
}

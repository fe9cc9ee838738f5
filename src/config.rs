use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The demo account the wizard configures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Subdomain of the installed account; not editable in the wizard
    #[serde(default = "default_subdomain")]
    pub subdomain: String,
    /// Where to learn how to generate an API token
    #[serde(default = "default_docs_url")]
    pub docs_url: String,
}

fn default_subdomain() -> String {
    "demo-studio-sandbox".to_string()
}

fn default_docs_url() -> String {
    "https://support.zendesk.com/hc/en-us/articles/4408889192858".to_string()
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            subdomain: default_subdomain(),
            docs_url: default_docs_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval, also the redraw rate while idle
    #[serde(default = "default_refresh_rate")]
    pub refresh_rate_ms: u64,
}

fn default_refresh_rate() -> u64 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate(),
        }
    }
}

/// Delays of the simulated operations, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_generate_context_ms")]
    pub generate_context_ms: u64,
    #[serde(default = "default_import_macros_ms")]
    pub import_macros_ms: u64,
    #[serde(default = "default_import_fields_ms")]
    pub import_fields_ms: u64,
    #[serde(default = "default_import_views_ms")]
    pub import_views_ms: u64,
    #[serde(default = "default_import_articles_ms")]
    pub import_articles_ms: u64,
}

fn default_generate_context_ms() -> u64 {
    1500
}

fn default_import_macros_ms() -> u64 {
    2000
}

fn default_import_fields_ms() -> u64 {
    1500
}

fn default_import_views_ms() -> u64 {
    1500
}

fn default_import_articles_ms() -> u64 {
    2500
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generate_context_ms: default_generate_context_ms(),
            import_macros_ms: default_import_macros_ms(),
            import_fields_ms: default_import_fields_ms(),
            import_views_ms: default_import_views_ms(),
            import_articles_ms: default_import_articles_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to log to file in TUI mode (false = stderr for debugging)
    #[serde(default = "default_log_to_file")]
    pub to_file: bool,

    /// Directory for log files; empty means the platform default
    #[serde(default)]
    pub directory: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_log_to_file(),
            directory: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from embedded defaults, the user config file, an
    /// explicit file, and `KICKSTART__` environment variables, in that order.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        // User config in ~/.config/kickstart/ (optional global overrides)
        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("KICKSTART")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Path of the optional per-user config file
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kickstart").join("config.toml"))
    }

    /// Effective configuration rendered as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    /// Get absolute path to the logs directory
    pub fn logs_path(&self) -> PathBuf {
        if !self.logging.directory.is_empty() {
            let path = PathBuf::from(&self.logging.directory);
            return if path.is_absolute() {
                path
            } else {
                std::env::current_dir().unwrap_or_default().join(path)
            };
        }
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .map(|dir| dir.join("kickstart").join("logs"))
            .unwrap_or_else(|| {
                std::env::current_dir()
                    .unwrap_or_default()
                    .join(".kickstart")
                    .join("logs")
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: AccountConfig::default(),
            ui: UiConfig::default(),
            simulation: SimulationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.account.subdomain, "demo-studio-sandbox");
        assert_eq!(config.ui.refresh_rate_ms, 100);
        assert_eq!(config.simulation.generate_context_ms, 1500);
        assert_eq!(config.simulation.import_articles_ms, 2500);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.to_file);
    }

    #[test]
    fn test_load_explicit_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[simulation]\nimport_macros_ms = 10\n\n[account]\nsubdomain = \"acme\""
        )
        .unwrap();

        let config = Config::load(file.path().to_str()).unwrap();
        assert_eq!(config.simulation.import_macros_ms, 10);
        assert_eq!(config.simulation.import_views_ms, 1500);
        assert_eq!(config.account.subdomain, "acme");
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        const VAR: &str = "KICKSTART__SIMULATION__IMPORT_ARTICLES_MS";
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[simulation]\nimport_articles_ms = 10").unwrap();

        std::env::set_var(VAR, "7");
        let loaded = Config::load(file.path().to_str());
        std::env::remove_var(VAR);

        let config = loaded.unwrap();
        assert_eq!(config.simulation.import_articles_ms, 7);
        assert_eq!(config.simulation.import_macros_ms, 2000);
    }

    #[test]
    fn test_logs_path_uses_configured_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.logging.directory = temp_dir.path().to_string_lossy().to_string();
        assert_eq!(config.logs_path(), temp_dir.path());
    }

    #[test]
    fn test_logs_path_default_ends_with_logs() {
        let config = Config::default();
        assert!(config.logs_path().ends_with("logs"));
    }

    #[test]
    fn test_to_toml_round_trips_sections() {
        let toml_str = Config::default().to_toml().unwrap();
        assert!(toml_str.contains("[simulation]"));
        assert!(toml_str.contains("subdomain = \"demo-studio-sandbox\""));
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.simulation.import_fields_ms, 1500);
    }
}

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub prediction: PredictionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

/// CSV sources: the read-only catalog and the one-time seed of the store
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    pub products_csv: Option<String>,
    pub seed_transactions_csv: Option<String>,
}

/// External prediction service; `/api/predict/*` answers 503 without it
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PredictionConfig {
    pub base_url: Option<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[database]
path = "target/db/app.db"

[data]
products_csv = "data/products.csv"
seed_transactions_csv = "data/transactions.csv"

[prediction]
# base_url = "http://127.0.0.1:5000/api"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve a configured path: absolute as is, relative against the
/// executable directory (current directory as a last resort)
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(path_str)
}

/// Get the database file path from configuration
pub fn get_database_path(config: &Config) -> PathBuf {
    resolve_path(&config.database.path)
}

impl PredictionConfig {
    /// Configured base URL, blank treated as absent
    pub fn base_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(
            config.data.products_csv.as_deref(),
            Some("data/products.csv")
        );
        assert_eq!(config.prediction.base_url(), None);
    }

    #[test]
    fn test_minimal_config_fills_defaults() {
        let config: Config = toml::from_str("[database]\npath = \"app.db\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.data.seed_transactions_csv.is_none());
        assert!(config.prediction.base_url.is_none());
    }

    #[test]
    fn test_blank_prediction_url_is_absent() {
        let config: Config = toml::from_str(
            "[database]\npath = \"app.db\"\n[prediction]\nbase_url = \"  \"\n",
        )
        .unwrap();
        assert_eq!(config.prediction.base_url(), None);
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let absolute = std::env::temp_dir().join("app.db");
        let resolved = resolve_path(&absolute.to_string_lossy());
        assert_eq!(resolved, absolute);
        assert!(resolve_path("data/products.csv").ends_with("data/products.csv"));
    }
}

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Path of the persisted JSON document
    pub data_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATA_PATH` overrides the default location under the platform
    /// data directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let data_path = match env::var("DATA_PATH") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_data_path()?,
        };

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            data_path,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            data_path: PathBuf::from("appdata.json"),
        }
    }
}

/// `<platform data dir>/bikelog/appdata.json`
fn default_data_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
    Ok(base.join("bikelog").join("appdata.json"))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine platform data directory; set DATA_PATH")]
    NoDataDir,
}

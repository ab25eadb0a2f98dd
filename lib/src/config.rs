use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuchClientConfig {
    pub backend: BackendConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the catalog service
    pub base_url: String,
    /// Path of the REST resource under the base URL
    pub rest_path: String,
    /// Accept self-signed certificates (local development backends)
    pub accept_invalid_certs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result page size, fixed for the session
    pub page_size: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:3000".to_string(),
            rest_path: "/rest".to_string(),
            accept_invalid_certs: false,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

impl BuchClientConfig {
    /// Default configuration file locations in order of preference, current
    /// directory first, then the XDG config directory.
    #[must_use]
    pub fn get_default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        paths.push(PathBuf::from("buch-client.toml"));
        paths.push(PathBuf::from("config/buch-client.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("buch-client").join("config.toml"));
        }

        paths
    }

    /// Load configuration with priority: environment variables over the
    /// first configuration file found over the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_file::<&str>(None)
    }

    /// Load configuration with a specific config file
    pub fn load_with_file<P: AsRef<Path>>(config_file: Option<P>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Start with defaults
        builder = builder.add_source(Config::try_from(&Self::default())?);

        if let Some(file_path) = config_file {
            if file_path.as_ref().exists() {
                builder = builder.add_source(File::from(file_path.as_ref()));
            }
        } else {
            for config_path in Self::get_default_config_paths() {
                if config_path.exists() {
                    builder = builder.add_source(File::from(config_path));
                    break;
                }
            }
        }

        // BUCH_CLIENT_BACKEND__BASE_URL and friends
        builder = builder.add_source(
            Environment::with_prefix("BUCH_CLIENT")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

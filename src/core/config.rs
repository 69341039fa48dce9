use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, RiskIntelError};

/// Process settings for the lookup service and the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "Settings::default_app_name")]
    pub app_name: String,

    /// Prefix for the HTTP routes
    #[serde(default = "Settings::default_api_prefix")]
    pub api_prefix: String,

    /// Location of the generated snapshot
    #[serde(default = "Settings::default_dataset_path")]
    pub dataset_path: PathBuf,

    #[serde(default = "Settings::default_log_level")]
    pub log_level: String,

    /// Risk level label -> numeric score used by the summary projection
    #[serde(default = "Settings::default_risk_level_scale")]
    pub risk_level_scale: HashMap<String, u32>,
}

impl Settings {
    fn default_app_name() -> String { "Crypturity Wallet Risk API".to_string() }
    fn default_api_prefix() -> String { "/api/v1".to_string() }
    fn default_dataset_path() -> PathBuf { PathBuf::from("data/wallet_risk_dataset.json") }
    fn default_log_level() -> String { "INFO".to_string() }

    pub fn default_risk_level_scale() -> HashMap<String, u32> {
        let mut scale = HashMap::new();
        scale.insert("BAJO".to_string(), 25);
        scale.insert("MEDIO".to_string(), 50);
        scale.insert("ALTO".to_string(), 75);
        scale.insert("CRÍTICO".to_string(), 100);
        scale
    }

    /// Defaults, then `CONFIG_PATH` (or `config.toml`) if present, then env overrides.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let path = Path::new(&config_path);
        let base = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        let settings = base.with_env_overrides().normalized();
        settings.validate()?;
        Ok(settings)
    }

    /// Load a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            RiskIntelError::Configuration(format!("{}: {}", path.display(), e))
        })
    }

    /// Apply `APP_NAME`, `API_PREFIX`, `DATASET_PATH` and `LOG_LEVEL`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(value) = std::env::var("APP_NAME") {
            self.app_name = value;
        }
        if let Ok(value) = std::env::var("API_PREFIX") {
            self.api_prefix = value;
        }
        if let Ok(value) = std::env::var("DATASET_PATH") {
            self.dataset_path = PathBuf::from(value);
        }
        if let Ok(value) = std::env::var("LOG_LEVEL") {
            self.log_level = value;
        }
        self
    }

    pub fn normalized(mut self) -> Self {
        self.api_prefix = normalize_api_prefix(&self.api_prefix);
        self.log_level = self.log_level.to_uppercase();
        self.dataset_path = expand_home(&self.dataset_path);
        self
    }

    /// `log_level` as a tracing filter directive.
    pub fn log_filter(&self) -> String {
        match self.log_level.to_uppercase().as_str() {
            "CRITICAL" | "ERROR" => "error",
            "WARNING" | "WARN" => "warn",
            "DEBUG" => "debug",
            "TRACE" => "trace",
            _ => "info",
        }
        .to_string()
    }

    pub fn validate(&self) -> Result<()> {
        if self.risk_level_scale.is_empty() {
            return Err(RiskIntelError::Configuration(
                "risk_level_scale must map at least one level".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: Self::default_app_name(),
            api_prefix: Self::default_api_prefix(),
            dataset_path: Self::default_dataset_path(),
            log_level: Self::default_log_level(),
            risk_level_scale: Self::default_risk_level_scale(),
        }
    }
}

fn normalize_api_prefix(prefix: &str) -> String {
    let prefixed = if prefix.starts_with('/') {
        prefix.to_string()
    } else {
        format!("/{}", prefix)
    };
    let trimmed = prefixed.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

fn expand_home(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };
    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/") {
        rest
    } else {
        return path.to_path_buf();
    };
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(rest),
        Err(_) => path.to_path_buf(),
    }
}

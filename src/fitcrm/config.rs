use crate::error::{FitcrmError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_API_URL: &str = "https://wger.de/api/v2/exercise/";
const DEFAULT_LANGUAGE: u32 = 2;
const DEFAULT_LIMIT: u32 = 5;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Intermediary used to reach the exercise API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relay {
    /// `https://api.allorigins.win/raw?url=<target>`
    #[default]
    Allorigins,
    /// `https://corsproxy.io/?url=<target>`
    Corsproxy,
    /// Call the API directly.
    Direct,
}

impl Relay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relay::Allorigins => "allorigins",
            Relay::Corsproxy => "corsproxy",
            Relay::Direct => "direct",
        }
    }

    /// Base URL that takes the target as its `url` query parameter.
    pub fn endpoint(&self) -> Option<&'static str> {
        match self {
            Relay::Allorigins => Some("https://api.allorigins.win/raw"),
            Relay::Corsproxy => Some("https://corsproxy.io/"),
            Relay::Direct => None,
        }
    }
}

impl fmt::Display for Relay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relay {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allorigins" => Ok(Relay::Allorigins),
            "corsproxy" => Ok(Relay::Corsproxy),
            "direct" | "none" => Ok(Relay::Direct),
            other => Err(format!(
                "Unknown relay '{}' (expected allorigins, corsproxy or direct)",
                other
            )),
        }
    }
}

/// Configuration for fitcrm, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FitcrmConfig {
    #[serde(default)]
    pub relay: Relay,

    /// Exercise listing endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Wger language id (2 = English)
    #[serde(default = "default_language")]
    pub language: u32,

    /// Page size requested from the API
    #[serde(default = "default_limit")]
    pub limit: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Name of the roster file (without `.json`)
    #[serde(default = "default_storage_slot")]
    pub storage_slot: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_language() -> u32 {
    DEFAULT_LANGUAGE
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_storage_slot() -> String {
    crate::store::fs::DEFAULT_SLOT.to_string()
}

impl Default for FitcrmConfig {
    fn default() -> Self {
        Self {
            relay: Relay::default(),
            api_url: default_api_url(),
            language: DEFAULT_LANGUAGE,
            limit: DEFAULT_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            storage_slot: default_storage_slot(),
        }
    }
}

impl FitcrmConfig {
    pub const KEYS: [&'static str; 6] = [
        "relay",
        "api-url",
        "language",
        "limit",
        "timeout-secs",
        "storage-slot",
    ];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FitcrmError::Io)?;
        let config: FitcrmConfig =
            serde_json::from_str(&content).map_err(FitcrmError::Serialization)?;
        Ok(config)
    }

    /// Like [`FitcrmConfig::load`], but a malformed file yields the defaults
    /// (logged) so it can still be repaired with `config set`.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        match Self::load(&config_dir) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "config unreadable, using defaults");
                Self::default()
            }
        }
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FitcrmError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FitcrmError::Serialization)?;
        fs::write(config_path, content).map_err(FitcrmError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "relay" => Some(self.relay.to_string()),
            "api-url" => Some(self.api_url.clone()),
            "language" => Some(self.language.to_string()),
            "limit" => Some(self.limit.to_string()),
            "timeout-secs" => Some(self.timeout_secs.to_string()),
            "storage-slot" => Some(self.storage_slot.clone()),
            _ => None,
        }
    }

    /// Validates and applies one setting, returning its normalized value.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<String, String> {
        match key {
            "relay" => self.relay = value.parse()?,
            "api-url" => {
                reqwest::Url::parse(value).map_err(|e| format!("Invalid api-url: {}", e))?;
                self.api_url = value.to_string();
            }
            "language" => self.language = parse_positive(key, value)?,
            "limit" => self.limit = parse_positive(key, value)?,
            "timeout-secs" => self.timeout_secs = u64::from(parse_positive(key, value)?),
            "storage-slot" => {
                let slot = value.trim();
                if slot.is_empty() || slot.contains(['/', '\\']) {
                    return Err(format!("Invalid storage-slot: '{}'", value));
                }
                self.storage_slot = slot.to_string();
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(self.get(key).unwrap_or_default())
    }

    /// `key = value` lines for every setting.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn parse_positive(key: &str, value: &str) -> std::result::Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} must be a positive whole number", key)),
    }
}

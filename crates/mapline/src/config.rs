use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_BASE_URL;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "mapline";

/// Color used for route segments when neither the CLI nor the config
/// chooses one.
pub const DEFAULT_ROUTE_COLOR: &str = "red";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlay: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `mapline config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents =
            format!("# Mapline configuration — https://github.com/mklab-se/mapline\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "server.base_url" => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    anyhow::bail!(
                        "Invalid base URL: {value}. Must start with 'http://' or 'https://'."
                    );
                }
                self.server.get_or_insert_with(ServerConfig::default).base_url =
                    Some(value.trim_end_matches('/').to_string());
            }
            "defaults.color" => {
                if value.trim().is_empty() {
                    anyhow::bail!("Invalid color: must be non-empty.");
                }
                self.defaults.get_or_insert_with(DefaultsConfig::default).color =
                    Some(value.to_string());
            }
            "defaults.underlay" => {
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .underlay = Some(value.to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: server.base_url, defaults.color, defaults.underlay"
            ),
        }
        Ok(())
    }

    /// Base URL of the routing service; an explicit CLI choice wins over
    /// the config, which wins over the built-in default.
    pub fn resolve_base_url(&self, cli: Option<&str>) -> String {
        cli.map(str::to_string)
            .or_else(|| self.server.as_ref().and_then(|s| s.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Route display color with the same CLI-over-config precedence.
    pub fn resolve_color(&self, cli: Option<&str>) -> String {
        cli.map(str::to_string)
            .or_else(|| self.defaults.as_ref().and_then(|d| d.color.clone()))
            .unwrap_or_else(|| DEFAULT_ROUTE_COLOR.to_string())
    }

    /// Underlay image reference, if any was configured or given.
    pub fn resolve_underlay(&self, cli: Option<&str>) -> Option<String> {
        cli.map(str::to_string)
            .or_else(|| self.defaults.as_ref().and_then(|d| d.underlay.clone()))
    }
}

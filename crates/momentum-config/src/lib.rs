use serde::Deserialize;
use std::fs;

pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Days in a `/chart` series when the request gives none
    pub default_days: u32,
    /// How far before today a default range starts
    pub lookback_days: u32,
    pub default_birth_time: String,
    /// Years covered by the anchor grids
    pub anchor_years: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            default_days: 90,
            lookback_days: 45,
            default_birth_time: "12:00".to_string(),
            anchor_years: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    pub algorithm_version: String,
    pub cache_capacity: u64,
    pub cache_ttl_secs: u64,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            algorithm_version: "v0.9.7".to_string(),
            cache_capacity: 1_000,
            cache_ttl_secs: 3_600,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub chart: ChartSettings,
    pub panel: PanelSettings,
}

impl Settings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Try common relative paths for `configs/momentum.toml`.
pub fn read_config_toml_text() -> Option<String> {
    let paths = ["configs/momentum.toml", "../../configs/momentum.toml"];
    paths.iter().find_map(|p| fs::read_to_string(p).ok())
}

pub fn parse_settings(text: &str) -> anyhow::Result<Settings> {
    toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse momentum.toml: {e}"))
}

/// Apply a `PORT` value on top of the file settings
pub fn apply_port_override(settings: &mut Settings, port: Option<&str>) -> anyhow::Result<()> {
    if let Some(raw) = port {
        settings.server.port = raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{PORT_ENV} must be a port number, got {raw:?}"))?;
    }
    Ok(())
}

/// File settings (or defaults when no file exists), then environment overrides.
pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = match read_config_toml_text() {
        Some(text) => parse_settings(&text)?,
        None => {
            log::warn!("configs/momentum.toml not found, using defaults");
            Settings::default()
        }
    };
    let port = std::env::var(PORT_ENV).ok();
    apply_port_override(&mut settings, port.as_deref())?;
    Ok(settings)
}

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::GarmentColor;
use crate::consts::{
    DEFAULT_OVERLAY_HEIGHT, DEFAULT_OVERLAY_WIDTH, DEFAULT_OVERLAY_X, DEFAULT_OVERLAY_Y,
    DEFAULT_REMOVAL_ENDPOINT, DEFAULT_REMOVAL_TIMEOUT_SECS, ENV_REMOVAL_API_KEY,
    ENV_REMOVAL_API_URL,
};
use crate::error::{Result, TailorError};
use crate::geometry::{Point, Size};
use crate::removal::RemovalTier;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DesignerConfig {
    #[serde(default)]
    pub removal: RemovalConfig,
    #[serde(default)]
    pub placement: PlacementConfig,
    #[serde(default)]
    pub garment: GarmentConfig,
}

impl DesignerConfig {
    /// Read a TOML config file. Missing sections fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TailorError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TailorError::Config(e.to_string()))
    }

    /// Override the endpoint and key from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Same as [`apply_env`](Self::apply_env) with an explicit lookup.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_REMOVAL_API_URL).filter(|v| !v.trim().is_empty()) {
            self.removal.endpoint = url;
        }
        if let Some(key) = lookup(ENV_REMOVAL_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.removal.api_key = Some(key);
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RemovalConfig {
    pub endpoint: String,
    /// Pre-shared key sent in the `X-Api-Key` header. Blank counts as unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub tier: RemovalTier,
    /// Seconds before a request is abandoned; 0 disables the timeout.
    pub timeout_secs: u64,
}

impl RemovalConfig {
    /// The configured key, unless it is blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Request timeout. `timeout_secs = 0` means no timeout.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for RemovalConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_REMOVAL_ENDPOINT.to_string(),
            api_key: None,
            tier: RemovalTier::default(),
            timeout_secs: DEFAULT_REMOVAL_TIMEOUT_SECS,
        }
    }
}

/// Where a freshly imported overlay lands, before the user moves it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlacementConfig {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height).clamped()
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            x: DEFAULT_OVERLAY_X,
            y: DEFAULT_OVERLAY_Y,
            width: DEFAULT_OVERLAY_WIDTH,
            height: DEFAULT_OVERLAY_HEIGHT,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GarmentConfig {
    pub color: GarmentColor,
}

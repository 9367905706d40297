use std::{fs, path::Path};

use anyhow::{Context, Result};
use frameloop_core::SchedulerConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl AppConfig {
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("failed to parse config '{}'", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(text)?;
        Ok(cfg)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Overrides FRAMELOOP_LOG when set.
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// 0 = uncapped.
    #[serde(default = "default_frame_cap_hz")]
    pub frame_cap_hz: u32,
    /// Run until ctrl-c when unset.
    #[serde(default)]
    pub run_seconds: Option<f64>,
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    #[serde(default = "default_restitution")]
    pub restitution: f64,
    #[serde(default = "default_drop_height")]
    pub drop_height: f64,
}

fn default_frame_cap_hz() -> u32 { 120 }
fn default_gravity() -> f64 { 9.81 }
fn default_restitution() -> f64 { 0.8 }
fn default_drop_height() -> f64 { 10.0 }

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frame_cap_hz: default_frame_cap_hz(),
            run_seconds: None,
            gravity: default_gravity(),
            restitution: default_restitution(),
            drop_height: default_drop_height(),
        }
    }
}

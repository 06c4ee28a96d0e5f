// src/config/settings.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://web-production-f9705.up.railway.app/api";
const ENV_PREFIX: &str = "MNAV";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub api_base: String,
    pub request_timeout_secs: u64,
    /// Delays before leaving loading steps 1, 2 and 3.
    pub step_delays_ms: Vec<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: 120,
            step_delays_ms: vec![500, 1000, 800],
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mnav").join("settings.ron"))
    }

    /// Defaults, then the settings file if present, then `MNAV_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path().as_deref())
    }

    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            let name = path.to_string_lossy();
            builder = builder.add_source(
                ::config::File::new(&name, ::config::FileFormat::Ron).required(false),
            );
        }

        let settings: Settings = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")?;

        settings.validated()
    }

    fn validated(mut self) -> Result<Self> {
        let base = self.api_base.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(anyhow!("api_base must not be empty"));
        }
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(anyhow!("api_base must be an http(s) URL: {}", base));
        }
        self.api_base = base.to_string();

        if self.step_delays_ms.len() != 3 {
            return Err(anyhow!(
                "step_delays_ms needs exactly 3 entries, got {}",
                self.step_delays_ms.len()
            ));
        }

        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn step_delays(&self) -> [Duration; 3] {
        let mut delays = [Duration::ZERO; 3];
        for (slot, ms) in delays.iter_mut().zip(&self.step_delays_ms) {
            *slot = Duration::from_millis(*ms);
        }
        delays
    }
}

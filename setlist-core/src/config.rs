use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Default bind address for `setlist serve`
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

/// Configuration for the setlist service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetlistConfig {
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSection {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,

    /// Allow any CORS origin instead of localhost only
    #[serde(default)]
    pub cors_permissive: bool,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3030))
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors_permissive: false,
        }
    }
}

impl SetlistConfig {
    /// Load config from the default path, then apply environment overrides.
    ///
    /// A missing file is not an error: the defaults are used instead.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load config from an explicit path (no environment overrides).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        toml::from_str(&content).context("Failed to parse config file (invalid TOML)")
    }

    /// Config file path: `$SETLIST_CONFIG` or ~/.setlist/config.toml
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var("SETLIST_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".setlist/config.toml")
    }

    /// `SETLIST_BIND` replaces `server.bind`
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(bind) = env::var("SETLIST_BIND") {
            self.server.bind = bind
                .parse()
                .context(format!("SETLIST_BIND is not a socket address: {}", bind))?;
        }
        Ok(())
    }

    /// Render as TOML (for `setlist config show`)
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }
}

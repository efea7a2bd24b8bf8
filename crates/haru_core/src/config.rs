//! Configuration types for Haru.
//!
//! This module provides the [`Config`] struct which stores the hosted
//! store endpoint and related settings. Configuration is persisted as TOML
//! (typically at `~/.config/haru/config.toml` on Unix systems).
//!
//! # Key Configuration Fields
//!
//! - `store_url`: base URL of the hosted backend
//! - `api_key`: anonymous API key sent with every request
//! - `posts_table` / `images_bucket`: remote table and bucket names
//! - `seed_demo_data`: whether an empty store is seeded with demo entries
//!
//! # Example
//!
//! ```ignore
//! use haru_core::config::Config;
//!
//! let config = Config::new("https://example.supabase.co", "anon-key");
//! config.save()?;
//!
//! let loaded = Config::load()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// `Config` is a data structure that represents the parts of Haru that the
/// user can configure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the hosted backend (no trailing slash)
    pub store_url: String,

    /// Anonymous API key for the hosted backend
    pub api_key: String,

    /// Name of the remote posts table
    #[serde(default = "default_posts_table")]
    pub posts_table: String,

    /// Name of the remote image bucket
    #[serde(default = "default_images_bucket")]
    pub images_bucket: String,

    /// Seed an empty store with the demo entries on first refresh
    #[serde(default)]
    pub seed_demo_data: bool,
}

fn default_posts_table() -> String {
    Config::DEFAULT_POSTS_TABLE.to_string()
}

fn default_images_bucket() -> String {
    Config::DEFAULT_IMAGES_BUCKET.to_string()
}

impl Config {
    /// Standard name of the posts table
    pub const DEFAULT_POSTS_TABLE: &'static str = "posts";

    /// Standard name of the image bucket
    pub const DEFAULT_IMAGES_BUCKET: &'static str = "images";

    /// Create a new config for a backend endpoint with default table and
    /// bucket names.
    pub fn new(store_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            store_url: store_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            posts_table: default_posts_table(),
            images_bucket: default_images_bucket(),
            seed_demo_data: false,
        }
    }

    /// Parse a config from its TOML representation.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the config to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// Filesystem-backed load/save - not available on WASM, where the frontend
// passes the endpoint in directly.
#[cfg(not(target_arch = "wasm32"))]
impl Config {
    /// Default config file location: `{config_dir}/haru/config.toml`.
    pub fn default_path() -> Result<std::path::PathBuf> {
        let dir = dirs::config_dir().ok_or(crate::error::HaruError::NoConfigDir)?;
        Ok(dir.join("haru").join("config.toml"))
    }

    /// Load the config from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load the config from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save the config to the default location, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    /// Save the config to an explicit path, creating parent directories
    /// as needed.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

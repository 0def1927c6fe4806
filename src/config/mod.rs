// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[site]` - Base URL and shared header/footer partials
//! - `[gallery]` - Photo folder, discovery strategy order, extensions,
//!   injected photo list
//! - `[forms]` - Options offered by the sign-up forms
//! - `[store]` - Document store project and credentials
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag or `COMMUNITY_SITE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use community_site::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.gallery.folder = "Images/events/".to_string();
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::gallery::discovery::Strategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Where the site lives and which shared partials it uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub base_url: String,
    pub header_partial: String,
    pub footer_partial: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            header_partial: DEFAULT_HEADER_PARTIAL.to_string(),
            footer_partial: DEFAULT_FOOTER_PARTIAL.to_string(),
        }
    }
}

/// Photo gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Photo folder relative to the site base URL.
    pub folder: String,

    /// Discovery strategies, attempted in this order.
    pub strategies: Vec<Strategy>,

    /// Recognized image extensions, leading dot included.
    pub extensions: Vec<String>,

    /// Percent-encode file names before joining them onto the folder URL.
    pub encode_names: bool,

    /// Whether Home/End jump to the first/last photo in the lightbox.
    pub home_end_keys: bool,

    /// Photo list provided by the hosting page, used as the last fallback.
    pub photo_sources: Vec<String>,

    /// Thumbnails fetched concurrently after the grid is rendered.
    pub thumbnail_concurrency: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            folder: DEFAULT_GALLERY_FOLDER.to_string(),
            strategies: Strategy::DEFAULT_ORDER.to_vec(),
            extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            encode_names: true,
            home_end_keys: true,
            photo_sources: Vec::new(),
            thumbnail_concurrency: DEFAULT_THUMBNAIL_CONCURRENCY,
        }
    }
}

impl GalleryConfig {
    /// Thumbnail concurrency clamped to the supported range.
    pub fn clamped_concurrency(&self) -> usize {
        self.thumbnail_concurrency
            .clamp(MIN_THUMBNAIL_CONCURRENCY, MAX_THUMBNAIL_CONCURRENCY)
    }
}

/// Options offered by the sign-up forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormsConfig {
    pub programs: Vec<String>,
    pub interests: Vec<String>,
    pub frequencies: Vec<String>,
}

impl Default for FormsConfig {
    fn default() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| (*v).to_string()).collect()
        }
        Self {
            programs: owned(DEFAULT_PROGRAMS),
            interests: owned(DEFAULT_INTERESTS),
            frequencies: owned(DEFAULT_FREQUENCIES),
        }
    }
}

/// Document store settings. Without a project id, records stay in memory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub database: String,
    pub endpoint: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            api_key: None,
            database: DEFAULT_STORE_DATABASE.to_string(),
            endpoint: DEFAULT_STORE_ENDPOINT.to_string(),
        }
    }
}

/// Root configuration, one field per `settings.toml` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub forms: FormsConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// SPDX-License-Identifier: MPL-2.0
//! Photo discovery.
//!
//! Hosts differ in what they expose, so the photo list is found by trying a
//! chain of strategies in order until one of them yields photos:
//!
//! 1. [`Strategy::DirectoryIndex`]: scrape the folder's auto-generated index
//!    page for links.
//! 2. [`Strategy::Manifest`]: read `manifest.json`, a flat JSON array of
//!    file names, from the folder.
//! 3. [`Strategy::Injected`]: use the list provided by the hosting page
//!    (`photo_sources` in the config).
//!
//! A failing strategy is logged and treated as empty. Discovery itself never
//! fails: when every strategy comes back empty the result is an empty list,
//! which the grid renders as an explanatory placeholder.

use super::names::{leaf_name, normalize, ExtensionList};
use super::resolve::UrlResolver;
use super::PhotoItem;
use crate::config::GalleryConfig;
use crate::error::Result;
use crate::site::{html, Fetcher};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use url::Url;

/// A way of enumerating the photo folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    DirectoryIndex,
    Manifest,
    Injected,
}

impl Strategy {
    pub const DEFAULT_ORDER: [Strategy; 3] = [
        Strategy::DirectoryIndex,
        Strategy::Manifest,
        Strategy::Injected,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::DirectoryIndex => "directory-index",
            Strategy::Manifest => "manifest",
            Strategy::Injected => "injected",
        };
        f.write_str(name)
    }
}

/// Everything discovery needs, resolved from the configuration.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    pub resolver: UrlResolver,
    pub strategies: Vec<Strategy>,
    pub extensions: ExtensionList,
    pub injected: Vec<String>,
}

impl DiscoveryConfig {
    pub fn from_config(base: &Url, gallery: &GalleryConfig) -> Result<Self> {
        Ok(Self {
            resolver: UrlResolver::new(base, &gallery.folder, gallery.encode_names)?,
            strategies: gallery.strategies.clone(),
            extensions: ExtensionList::new(&gallery.extensions),
            injected: gallery.photo_sources.clone(),
        })
    }
}

/// Outcome of a discovery run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub items: Vec<PhotoItem>,
    /// The strategy that produced `items`, `None` if all came back empty.
    pub strategy: Option<Strategy>,
}

/// Runs the configured strategies one after another and returns the first
/// non-empty result.
pub async fn discover<F: Fetcher>(fetcher: &F, config: &DiscoveryConfig) -> Discovery {
    for &strategy in &config.strategies {
        let names = match run_strategy(fetcher, config, strategy).await {
            Ok(names) => names,
            Err(err) => {
                tracing::debug!(%strategy, %err, "discovery strategy failed");
                Vec::new()
            }
        };

        if names.is_empty() {
            tracing::debug!(%strategy, "no photos, trying next strategy");
            continue;
        }

        tracing::info!(%strategy, count = names.len(), "photos discovered");
        return Discovery {
            items: names.into_iter().map(PhotoItem::new).collect(),
            strategy: Some(strategy),
        };
    }

    tracing::info!(folder = %config.resolver.folder(), "no photos found");
    Discovery::default()
}

async fn run_strategy<F: Fetcher>(
    fetcher: &F,
    config: &DiscoveryConfig,
    strategy: Strategy,
) -> Result<Vec<String>> {
    match strategy {
        Strategy::DirectoryIndex => from_directory_index(fetcher, config).await,
        Strategy::Manifest => from_manifest(fetcher, config).await,
        Strategy::Injected => Ok(from_injected(&config.injected, &config.extensions)),
    }
}

/// Reads the folder URL as a browsable index page.
pub async fn from_directory_index<F: Fetcher>(
    fetcher: &F,
    config: &DiscoveryConfig,
) -> Result<Vec<String>> {
    let folder = config.resolver.folder();
    let markup = fetcher.fetch_text(folder).await?;
    Ok(names_from_index(&markup, folder, &config.extensions))
}

/// Extracts image names from the links of an index page.
pub fn names_from_index(markup: &str, folder: &Url, extensions: &ExtensionList) -> Vec<String> {
    let names = html::anchors(markup)
        .into_iter()
        .map(|anchor| anchor.href)
        .filter(|href| !href.is_empty() && href != "../")
        .filter_map(|href| leaf_name(&href, folder));
    normalize(names, extensions)
}

/// Reads `manifest.json` from the folder.
pub async fn from_manifest<F: Fetcher>(
    fetcher: &F,
    config: &DiscoveryConfig,
) -> Result<Vec<String>> {
    let url = config.resolver.manifest_url()?;
    let body = fetcher.fetch_text(&url).await?;
    parse_manifest(&body, &config.extensions)
}

/// Parses a manifest body. Anything but a JSON array yields no photos;
/// non-string entries are stringified.
pub fn parse_manifest(body: &str, extensions: &ExtensionList) -> Result<Vec<String>> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    let names = entries.into_iter().map(|entry| match entry {
        Value::String(name) => name,
        other => other.to_string(),
    });
    Ok(normalize(names, extensions))
}

/// Filters the list supplied by the hosting page.
pub fn from_injected(names: &[String], extensions: &ExtensionList) -> Vec<String> {
    normalize(names.iter().cloned(), extensions)
}

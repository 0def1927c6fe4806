// SPDX-License-Identifier: MPL-2.0
//! Resource fetching seam.
//!
//! Gallery discovery, thumbnail loading and the partial loader only talk to a
//! [`Fetcher`]. The production [`HttpFetcher`] speaks HTTP(S) and reads
//! `file:` URLs from disk; [`MemoryFetcher`] serves canned bodies.
//!
//! No timeout is applied: a request that never completes leaves its caller
//! pending.

use crate::error::{Error, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::HashMap;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use url::Url;

const USER_AGENT: &str = concat!("CommunitySite/", env!("CARGO_PKG_VERSION"));

/// Characters escaped in the hrefs of a synthesized directory listing.
const HREF_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Something that can retrieve the body of a URL.
pub trait Fetcher: Clone + Send + Sync + 'static {
    /// Fetches a text body. Non-success statuses are errors.
    fn fetch_text(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;

    /// Fetches a binary body. Non-success statuses are errors.
    fn fetch_bytes(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Network and local-disk fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    async fn get(&self, url: &Url) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Http(format!(
                "HTTP status: {} for {url}",
                response.status()
            )));
        }
        Ok(response)
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String> {
        if url.scheme() == "file" {
            return read_local_text(url).await;
        }
        Ok(self.get(url).await?.text().await?)
    }

    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        if url.scheme() == "file" {
            let path = local_path(url)?;
            return Ok(tokio::fs::read(&path).await?);
        }
        Ok(self.get(url).await?.bytes().await?.to_vec())
    }
}

fn local_path(url: &Url) -> Result<std::path::PathBuf> {
    url.to_file_path()
        .map_err(|()| Error::Url(format!("not a local path: {url}")))
}

/// Reads a local file, or renders a directory as an index page the way a
/// web server with auto-indexing would.
async fn read_local_text(url: &Url) -> Result<String> {
    let path = local_path(url)?;
    let metadata = tokio::fs::metadata(&path).await?;
    if metadata.is_dir() {
        return directory_listing(&path).await;
    }
    Ok(tokio::fs::read_to_string(&path).await?)
}

async fn directory_listing(dir: &Path) -> Result<String> {
    let mut entries = Vec::new();
    let mut reader = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false);
        entries.push((name, is_dir));
    }
    entries.sort();

    let mut html = String::from("<html><body><pre>\n<a href=\"../\">../</a>\n");
    for (name, is_dir) in entries {
        let href = utf8_percent_encode(&name, HREF_SEGMENT).to_string();
        let suffix = if is_dir { "/" } else { "" };
        html.push_str(&format!("<a href=\"{href}{suffix}\">{name}{suffix}</a>\n"));
    }
    html.push_str("</pre></body></html>\n");
    Ok(html)
}

/// In-memory fetcher serving fixed bodies keyed by absolute URL.
///
/// Unknown URLs fail like a 404 would.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    bodies: Arc<HashMap<String, Vec<u8>>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a body for `url`.
    #[must_use]
    pub fn with_body(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        Arc::make_mut(&mut self.bodies).insert(url.to_string(), body.into());
        self
    }

    fn lookup(&self, url: &Url) -> Result<&[u8]> {
        self.bodies
            .get(url.as_str())
            .map(Vec::as_slice)
            .ok_or_else(|| Error::Http(format!("HTTP status: 404 Not Found for {url}")))
    }
}

impl Fetcher for MemoryFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String> {
        let body = self.lookup(url)?;
        String::from_utf8(body.to_vec()).map_err(|e| Error::Parse(e.to_string()))
    }

    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        Ok(self.lookup(url)?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn memory_fetcher_serves_registered_bodies() {
        let fetcher = MemoryFetcher::new().with_body("https://example.org/a.txt", "hello");
        let url = Url::parse("https://example.org/a.txt").unwrap();
        assert_eq!(fetcher.fetch_text(&url).await.unwrap(), "hello");
        assert_eq!(fetcher.fetch_bytes(&url).await.unwrap(), b"hello".to_vec());
    }

    #[tokio::test]
    async fn memory_fetcher_fails_for_unknown_urls() {
        let fetcher = MemoryFetcher::new();
        let url = Url::parse("https://example.org/missing").unwrap();
        assert!(matches!(fetcher.fetch_text(&url).await, Err(Error::Http(_))));
    }

    #[tokio::test]
    async fn local_directory_renders_as_index_page() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("b photo.jpg"), b"x").unwrap();
        fs::write(dir.path().join("a.png"), b"x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let fetcher = HttpFetcher::new().expect("client");
        let url = Url::from_directory_path(dir.path()).unwrap();
        let html = fetcher.fetch_text(&url).await.expect("listing");

        assert!(html.contains("<a href=\"a.png\">a.png</a>"));
        assert!(html.contains("<a href=\"b%20photo.jpg\">b photo.jpg</a>"));
        assert!(html.contains("<a href=\"nested/\">nested/</a>"));
    }

    #[tokio::test]
    async fn local_file_is_read_from_disk() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("manifest.json");
        fs::write(&path, "[\"a.jpg\"]").unwrap();

        let fetcher = HttpFetcher::new().expect("client");
        let url = Url::from_file_path(&path).unwrap();
        assert_eq!(fetcher.fetch_text(&url).await.unwrap(), "[\"a.jpg\"]");
    }

    #[tokio::test]
    async fn missing_local_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let fetcher = HttpFetcher::new().expect("client");
        let url = Url::from_file_path(dir.path().join("nope.json")).unwrap();
        assert!(matches!(fetcher.fetch_text(&url).await, Err(Error::Io(_))));
    }
}

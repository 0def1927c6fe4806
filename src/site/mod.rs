// SPDX-License-Identifier: MPL-2.0
//! Site plumbing shared by the gallery and the page chrome: the fetching
//! seam, HTML scanning, and the shared header/footer partials.

pub mod fetch;
pub mod html;
pub mod partials;

pub use fetch::{Fetcher, HttpFetcher, MemoryFetcher};
pub use partials::{NavLink, Partials};

use crate::error::{Error, Result};
use url::Url;

/// Parses the site location. Anything that is not an absolute URL is taken
/// as a local path and turned into a `file:` URL; directories get a trailing
/// slash so relative paths resolve inside them.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    match Url::parse(raw) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let path = std::fs::canonicalize(raw)?;
            let url = if path.is_dir() {
                Url::from_directory_path(&path)
            } else {
                Url::from_file_path(&path)
            };
            url.map_err(|()| Error::Url(format!("not a usable path: {}", path.display())))
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_are_kept() {
        let url = parse_base_url("https://example.org/club/").unwrap();
        assert_eq!(url.as_str(), "https://example.org/club/");
    }

    #[test]
    fn local_directories_become_file_urls() {
        let dir = tempfile::tempdir().unwrap();
        let url = parse_base_url(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(url.scheme(), "file");
        assert!(url.path().ends_with('/'));
    }

    #[test]
    fn missing_local_path_is_an_error() {
        assert!(parse_base_url("definitely/not/here").is_err());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Photo URL resolution.
//!
//! The folder is resolved against the site base URL (the location of the page
//! hosting the gallery), never against a fixed root, so a site served from a
//! sub-path keeps working. File names are joined onto the folder URL.

use crate::config::MANIFEST_FILE;
use crate::error::Result;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

/// Characters escaped when a file name becomes a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlResolver {
    folder: Url,
    encode_names: bool,
}

impl UrlResolver {
    /// Resolves `folder` against `base`. The folder URL always ends with `/`.
    pub fn new(base: &Url, folder: &str, encode_names: bool) -> Result<Self> {
        let mut folder = base.join(folder)?;
        if !folder.path().ends_with('/') {
            let path = format!("{}/", folder.path());
            folder.set_path(&path);
        }
        folder.set_query(None);
        folder.set_fragment(None);
        Ok(Self {
            folder,
            encode_names,
        })
    }

    pub fn folder(&self) -> &Url {
        &self.folder
    }

    pub fn manifest_url(&self) -> Result<Url> {
        Ok(self.folder.join(MANIFEST_FILE)?)
    }

    /// Absolute URL of the photo called `name`.
    pub fn photo_url(&self, name: &str) -> Result<Url> {
        if self.encode_names {
            let segment = utf8_percent_encode(name, PATH_SEGMENT).to_string();
            Ok(self.folder.join(&segment)?)
        } else {
            Ok(self.folder.join(name)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn folder_resolves_relative_to_page_location() {
        let resolver =
            UrlResolver::new(&base("https://example.org/club/gallery.html"), "Images/photoAlbum/", true)
                .unwrap();
        assert_eq!(
            resolver.folder().as_str(),
            "https://example.org/club/Images/photoAlbum/"
        );
    }

    #[test]
    fn folder_gains_trailing_slash() {
        let resolver =
            UrlResolver::new(&base("https://example.org/"), "Images/photoAlbum", true).unwrap();
        assert_eq!(resolver.folder().as_str(), "https://example.org/Images/photoAlbum/");
        assert_eq!(
            resolver.manifest_url().unwrap().as_str(),
            "https://example.org/Images/photoAlbum/manifest.json"
        );
    }

    #[test]
    fn encoded_names_tolerate_reserved_characters() {
        let resolver = UrlResolver::new(&base("https://example.org/"), "pics/", true).unwrap();
        assert_eq!(
            resolver.photo_url("team #1: 50% fun?.jpg").unwrap().as_str(),
            "https://example.org/pics/team%20%231%3A%2050%25%20fun%3F.jpg"
        );
    }

    #[test]
    fn unencoded_names_are_joined_as_written() {
        let resolver = UrlResolver::new(&base("https://example.org/"), "pics/", false).unwrap();
        assert_eq!(
            resolver.photo_url("a b.jpg").unwrap().as_str(),
            "https://example.org/pics/a%20b.jpg"
        );
        assert_eq!(
            resolver.photo_url("x.jpg#frag").unwrap().as_str(),
            "https://example.org/pics/x.jpg#frag"
        );
    }

    #[test]
    fn local_folders_resolve_to_file_urls() {
        let resolver = UrlResolver::new(&base("file:///srv/site/"), "Images/", true).unwrap();
        assert_eq!(
            resolver.photo_url("a.png").unwrap().as_str(),
            "file:///srv/site/Images/a.png"
        );
    }
}

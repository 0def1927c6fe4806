// SPDX-License-Identifier: MPL-2.0
//! Photo gallery: discovery of the photo folder, the thumbnail grid model and
//! the lightbox session. Nothing in here touches the UI.

pub mod discovery;
pub mod grid;
pub mod names;
pub mod resolve;
pub mod session;

pub use discovery::{discover, Discovery, DiscoveryConfig, Strategy};
pub use grid::{GridModel, Thumbnail};
pub use names::{natural_cmp, normalize, ExtensionList};
pub use resolve::UrlResolver;
pub use session::{GallerySession, LightboxKey};

/// A discovered photo, identified by its decoded file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoItem {
    pub name: String,
}

impl PhotoItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Vector images go through the SVG renderer instead of the raster one.
    pub fn is_vector(&self) -> bool {
        self.name.to_lowercase().ends_with(".svg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_detection_ignores_case() {
        assert!(PhotoItem::new("Logo.SVG").is_vector());
        assert!(!PhotoItem::new("logo.svg.png").is_vector());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Grid model: what the gallery container shows for a list of photos.

use super::resolve::UrlResolver;
use super::PhotoItem;
use url::Url;

/// i18n key of the message shown when no photos were found.
pub const EMPTY_MESSAGE_KEY: &str = "gallery-empty";

/// One clickable thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Position in the item list, used to open the lightbox.
    pub index: usize,
    pub name: String,
    /// `None` when the name cannot form a URL; the tile stays a placeholder.
    pub url: Option<Url>,
    pub vector: bool,
}

impl Thumbnail {
    /// 1-based number used in the accessible label ("Open image N").
    pub fn label_number(&self) -> usize {
        self.index + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridModel {
    /// Single explanatory node for an empty gallery.
    Placeholder { message_key: &'static str },
    Thumbnails(Vec<Thumbnail>),
}

impl GridModel {
    pub fn len(&self) -> usize {
        match self {
            GridModel::Placeholder { .. } => 1,
            GridModel::Thumbnails(thumbs) => thumbs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn thumbnails(&self) -> &[Thumbnail] {
        match self {
            GridModel::Placeholder { .. } => &[],
            GridModel::Thumbnails(thumbs) => thumbs,
        }
    }
}

/// Builds the grid for `items`. Rendering the same list twice yields the
/// same model; previous content is always fully replaced.
pub fn render(items: &[PhotoItem], resolver: &UrlResolver) -> GridModel {
    if items.is_empty() {
        return GridModel::Placeholder {
            message_key: EMPTY_MESSAGE_KEY,
        };
    }

    let thumbnails = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let url = match resolver.photo_url(&item.name) {
                Ok(url) => Some(url),
                Err(err) => {
                    tracing::debug!(name = %item.name, %err, "photo URL not resolvable");
                    None
                }
            };
            Thumbnail {
                index,
                name: item.name.clone(),
                url,
                vector: item.is_vector(),
            }
        })
        .collect();

    GridModel::Thumbnails(thumbnails)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> UrlResolver {
        let base = Url::parse("https://example.org/").unwrap();
        UrlResolver::new(&base, "Images/photoAlbum/", true).unwrap()
    }

    fn items(names: &[&str]) -> Vec<PhotoItem> {
        names.iter().map(|n| PhotoItem::new(*n)).collect()
    }

    #[test]
    fn empty_list_renders_exactly_one_placeholder() {
        let model = render(&[], &resolver());
        assert_eq!(
            model,
            GridModel::Placeholder {
                message_key: EMPTY_MESSAGE_KEY
            }
        );
        assert_eq!(model.len(), 1);
        assert!(model.thumbnails().is_empty());
    }

    #[test]
    fn one_thumbnail_per_item_with_distinct_indices() {
        let model = render(&items(&["a.jpg", "b.svg", "c.png"]), &resolver());
        let thumbs = model.thumbnails();
        assert_eq!(thumbs.len(), 3);
        let indices: Vec<usize> = thumbs.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(thumbs[2].label_number(), 3);
        assert!(thumbs[1].vector);
        assert_eq!(
            thumbs[0].url.as_ref().map(Url::as_str),
            Some("https://example.org/Images/photoAlbum/a.jpg")
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let list = items(&["x 1.jpg", "x 2.jpg"]);
        assert_eq!(render(&list, &resolver()), render(&list, &resolver()));
    }
}

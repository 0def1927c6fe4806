// SPDX-License-Identifier: MPL-2.0
//! Shared header and footer fragments.
//!
//! Both fragments are fetched relative to the site base URL. A fragment that
//! cannot be fetched is simply absent; nothing is reported to the user.
//! Navigation links inside the header's `.main-nav` element are marked active
//! by comparing file names with the page being shown.

use super::fetch::Fetcher;
use super::html;
use crate::config::SiteConfig;
use url::Url;

/// Class of the header element that holds the site navigation.
pub const NAV_CLASS: &str = "main-nav";

/// Page name used when a path ends with `/`.
pub const INDEX_PAGE: &str = "index.html";

/// A navigation link from the header fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    /// Lowercased last path segment of `href`.
    pub page: String,
    pub active: bool,
}

/// Loaded fragments. `None` means the fetch failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partials {
    pub header: Option<Vec<NavLink>>,
    pub footer: Option<Vec<String>>,
}

impl Partials {
    /// Recomputes the active flags of the header links.
    pub fn set_current_page(&mut self, current: &str) {
        if let Some(links) = self.header.as_mut() {
            mark_active(links, current);
        }
    }
}

/// File name of the page at `path`, lowercased; `index.html` for a
/// directory path.
pub fn current_page(path: &str) -> String {
    match path.rsplit('/').next() {
        Some(last) if !last.is_empty() => last.to_lowercase(),
        _ => INDEX_PAGE.to_string(),
    }
}

/// Lowercased last `/`-separated segment of an href.
pub fn link_page(href: &str) -> String {
    href.rsplit('/').next().unwrap_or_default().to_lowercase()
}

/// Whether a link to `page` designates the `current` page.
pub fn is_active(page: &str, current: &str) -> bool {
    page == current || (current == INDEX_PAGE && (page.is_empty() || page == "./"))
}

pub fn mark_active(links: &mut [NavLink], current: &str) {
    for link in links {
        link.active = is_active(&link.page, current);
    }
}

/// Extracts the navigation links of a header fragment, none active.
pub fn parse_header(markup: &str) -> Vec<NavLink> {
    html::anchors_in_class(markup, NAV_CLASS)
        .into_iter()
        .map(|anchor| NavLink {
            page: link_page(&anchor.href),
            label: anchor.text,
            href: anchor.href,
            active: false,
        })
        .collect()
}

/// Extracts the visible text lines of a footer fragment.
pub fn parse_footer(markup: &str) -> Vec<String> {
    html::text_content(markup)
}

/// Fetches and parses both fragments.
pub async fn load<F: Fetcher>(fetcher: &F, base: &Url, site: &SiteConfig) -> Partials {
    let header = fetch_partial(fetcher, base, &site.header_partial)
        .await
        .map(|markup| parse_header(&markup));
    let footer = fetch_partial(fetcher, base, &site.footer_partial)
        .await
        .map(|markup| parse_footer(&markup));
    Partials { header, footer }
}

async fn fetch_partial<F: Fetcher>(fetcher: &F, base: &Url, relative: &str) -> Option<String> {
    let url = match base.join(relative) {
        Ok(url) => url,
        Err(err) => {
            tracing::debug!(partial = relative, %err, "invalid partial path");
            return None;
        }
    };
    match fetcher.fetch_text(&url).await {
        Ok(markup) => Some(markup),
        Err(err) => {
            tracing::debug!(%url, %err, "partial not loaded");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::fetch::MemoryFetcher;

    const HEADER: &str = r#"<header class="site-header">
  <nav class="main-nav">
    <a href="./">Home</a>
    <a href="programs.html">Programs</a>
    <a href="/club/Gallery.html">Gallery</a>
    <a href="contact.html">Contact</a>
  </nav>
</header>"#;

    fn link(page: &str) -> NavLink {
        NavLink {
            href: page.to_string(),
            label: page.to_string(),
            page: link_page(page),
            active: false,
        }
    }

    #[test]
    fn current_page_defaults_to_index() {
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("/club/"), "index.html");
        assert_eq!(current_page("/club/Programs.HTML"), "programs.html");
    }

    #[test]
    fn link_page_takes_last_segment() {
        assert_eq!(link_page("../site/Contact.html"), "contact.html");
        assert_eq!(link_page("./"), "");
        assert_eq!(link_page(""), "");
    }

    #[test]
    fn index_matches_empty_and_dot_links() {
        assert!(is_active("", "index.html"));
        assert!(is_active("./", "index.html"));
        assert!(is_active("index.html", "index.html"));
        assert!(!is_active("", "programs.html"));
    }

    #[test]
    fn mark_active_sets_exactly_matching_links() {
        let mut links = vec![link("index.html"), link("programs.html"), link("contact.html")];
        mark_active(&mut links, "programs.html");
        let active: Vec<bool> = links.iter().map(|l| l.active).collect();
        assert_eq!(active, vec![false, true, false]);

        mark_active(&mut links, "contact.html");
        let active: Vec<bool> = links.iter().map(|l| l.active).collect();
        assert_eq!(active, vec![false, false, true]);
    }

    #[test]
    fn header_links_are_parsed_with_pages() {
        let links = parse_header(HEADER);
        let pages: Vec<&str> = links.iter().map(|l| l.page.as_str()).collect();
        assert_eq!(pages, vec!["", "programs.html", "gallery.html", "contact.html"]);
        assert_eq!(links[2].label, "Gallery");
    }

    #[tokio::test]
    async fn load_fetches_both_partials_relative_to_base() {
        let fetcher = MemoryFetcher::new()
            .with_body("https://example.org/club/header.html", HEADER)
            .with_body(
                "https://example.org/club/footer.html",
                "<footer><p>Community Center</p></footer>",
            );
        let base = Url::parse("https://example.org/club/").unwrap();

        let mut partials = load(&fetcher, &base, &SiteConfig::default()).await;
        partials.set_current_page(&current_page(base.path()));

        let header = partials.header.expect("header loaded");
        assert!(header[0].active, "home link is active on the index page");
        assert!(header[1..].iter().all(|l| !l.active));
        assert_eq!(partials.footer, Some(vec!["Community Center".to_string()]));
    }

    #[tokio::test]
    async fn failed_partials_are_left_empty() {
        let fetcher = MemoryFetcher::new();
        let base = Url::parse("https://example.org/").unwrap();
        let partials = load(&fetcher, &base, &SiteConfig::default()).await;
        assert_eq!(partials, Partials::default());
    }
}

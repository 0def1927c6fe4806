// SPDX-License-Identifier: MPL-2.0
//! File name recognition, ordering and normalization.

use crate::config::DEFAULT_IMAGE_EXTENSIONS;
use percent_encoding::percent_decode_str;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::iter::Peekable;
use std::str::Chars;
use url::Url;

/// Case-insensitive allow-list of file name suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionList(Vec<String>);

impl ExtensionList {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            extensions
                .into_iter()
                .map(|ext| ext.as_ref().to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
        )
    }

    /// Returns true if `name` ends with one of the extensions.
    pub fn matches(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.0.iter().any(|ext| lower.ends_with(ext.as_str()))
    }
}

impl Default for ExtensionList {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_EXTENSIONS)
    }
}

/// Orders names the way a person reads them: case-insensitively, with runs
/// of digits compared by value (`img2` before `img10`).
///
/// Names that only differ by case or leading zeros fall back to byte order
/// so the result never depends on input order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    compare_folded(a, b).then_with(|| a.cmp(b))
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let run_a = take_digits(&mut a);
                let run_b = take_digits(&mut b);
                match compare_digit_runs(&run_a, &run_b) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(ca), Some(cb)) => {
                a.next();
                b.next();
                match ca.to_lowercase().cmp(cb.to_lowercase()) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Keeps recognized image names, drops exact duplicates and sorts with
/// [`natural_cmp`].
pub fn normalize<I>(names: I, extensions: &ExtensionList) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut kept: Vec<String> = names
        .into_iter()
        .filter(|name| !name.is_empty() && extensions.matches(name))
        .filter(|name| seen.insert(name.clone()))
        .collect();
    kept.sort_by(|a, b| natural_cmp(a, b));
    kept
}

/// Extracts the decoded file name an href points at.
///
/// The href is resolved against `base` and the last path segment is
/// percent-decoded. Hrefs that cannot be resolved fall back to splitting the
/// raw text. Returns `None` when the href designates a directory.
pub fn leaf_name(href: &str, base: &Url) -> Option<String> {
    let raw = match base.join(href) {
        Ok(url) => {
            let path = url.path().replace('\\', "/");
            last_segment(&path).to_string()
        }
        Err(_) => {
            let without_suffix = href.split(['?', '#']).next().unwrap_or_default();
            let last = last_segment(without_suffix);
            if last.is_empty() {
                href.to_string()
            } else {
                last.to_string()
            }
        }
    };

    let decoded = percent_decode_str(&raw)
        .decode_utf8()
        .map(|name| name.into_owned())
        .unwrap_or(raw);

    Some(decoded).filter(|name| !name.is_empty())
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| natural_cmp(a, b));
        v
    }

    #[test]
    fn digits_compare_by_value() {
        assert_eq!(
            sorted(&["img10.jpg", "img2.jpg", "img1.jpg"]),
            vec!["img1.jpg", "img2.jpg", "img10.jpg"]
        );
    }

    #[test]
    fn comparison_ignores_case() {
        assert_eq!(
            sorted(&["beach.jpg", "Apple.jpg", "cat.jpg"]),
            vec!["Apple.jpg", "beach.jpg", "cat.jpg"]
        );
    }

    #[test]
    fn case_only_differences_are_ordered_deterministically() {
        assert_eq!(sorted(&["a.jpg", "A.jpg"]), sorted(&["A.jpg", "a.jpg"]));
        assert_eq!(natural_cmp("a.jpg", "a.jpg"), Ordering::Equal);
    }

    #[test]
    fn leading_zeros_compare_equal_by_value() {
        assert_eq!(compare_folded("img007", "img7"), Ordering::Equal);
        assert_eq!(compare_folded("img008", "img7"), Ordering::Greater);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        assert_eq!(natural_cmp("img", "img1"), Ordering::Less);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let exts = ExtensionList::default();
        assert!(exts.matches("PHOTO.JPG"));
        assert!(exts.matches("scan.Jfif"));
        assert!(exts.matches("logo.svg"));
        assert!(!exts.matches("notes.txt"));
        assert!(!exts.matches("jpg"));
    }

    #[test]
    fn normalize_filters_dedupes_and_sorts() {
        let names = ["b10.png", "readme.txt", "b2.png", "b10.png", "", "a.JPG"]
            .iter()
            .map(|s| s.to_string());
        assert_eq!(
            normalize(names, &ExtensionList::default()),
            vec!["a.JPG", "b2.png", "b10.png"]
        );
    }

    /// Every ordering of `items`, by Heap's algorithm.
    fn permutations(items: &[&str]) -> Vec<Vec<String>> {
        fn heap(k: usize, items: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
            if k <= 1 {
                out.push(items.clone());
                return;
            }
            heap(k - 1, items, out);
            for i in 0..k - 1 {
                if k % 2 == 0 {
                    items.swap(i, k - 1);
                } else {
                    items.swap(0, k - 1);
                }
                heap(k - 1, items, out);
            }
        }
        let mut items: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        heap(items.len(), &mut items, &mut out);
        out
    }

    #[test]
    fn normalize_ignores_input_order() {
        let input = [
            "img10.jpg",
            "IMG2.jpg",
            "img2.jpg",
            "a.png",
            "img2.jpg",
            "notes.txt",
            "img02.jpg",
        ];
        let exts = ExtensionList::default();
        let expected = normalize(input.iter().map(|s| s.to_string()), &exts);

        let orderings = permutations(&input);
        assert_eq!(orderings.len(), 5040);
        for ordering in orderings {
            let output = normalize(ordering.clone(), &exts);
            assert_eq!(output, expected, "input {ordering:?}");
        }

        let unique: HashSet<&String> = expected.iter().collect();
        assert_eq!(unique.len(), expected.len());
        assert!(expected
            .windows(2)
            .all(|pair| natural_cmp(&pair[0], &pair[1]) == Ordering::Less));
    }

    #[test]
    fn leaf_name_decodes_percent_escapes() {
        let base = Url::parse("https://example.org/Images/photoAlbum/").unwrap();
        assert_eq!(
            leaf_name("summer%20picnic.png", &base).as_deref(),
            Some("summer picnic.png")
        );
        assert_eq!(
            leaf_name("/Images/photoAlbum/a.jpg?v=2#top", &base).as_deref(),
            Some("a.jpg")
        );
    }

    #[test]
    fn leaf_name_normalizes_backslashes() {
        let base = Url::parse("https://example.org/Images/").unwrap();
        assert_eq!(leaf_name("album\\b.png", &base).as_deref(), Some("b.png"));
    }

    #[test]
    fn leaf_name_skips_directories_and_sort_links() {
        let base = Url::parse("https://example.org/Images/photoAlbum/").unwrap();
        assert_eq!(leaf_name("/Images/", &base), None);
        assert_eq!(leaf_name("?C=N;O=D", &base), None);
    }

    #[test]
    fn leaf_name_falls_back_when_href_cannot_be_joined() {
        let base = Url::parse("data:text/plain,x").unwrap();
        assert_eq!(
            leaf_name("dir/my%20pic.gif?x=1", &base).as_deref(),
            Some("my pic.gif")
        );
    }
}

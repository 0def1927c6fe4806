// SPDX-License-Identifier: MPL-2.0
//! Tolerant scanning of HTML fragments.
//!
//! Directory index pages and the shared header/footer partials are HTML, not
//! XML: end tags may be missing and void elements are never closed. The
//! reader runs with end-name checks disabled and keeps its own element stack
//! so that a stray `<br>` or `<img>` does not swallow the rest of the page.
//! Scanning stops at the first hard syntax error, keeping what was found.

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Reader;
use std::borrow::Cow;

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text is not visible content.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// An `<a href>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Raw `href` attribute value (entities decoded, percent-escapes kept).
    pub href: String,
    /// Visible text, whitespace-collapsed.
    pub text: String,
}

/// Returns every anchor carrying an `href`.
pub fn anchors(markup: &str) -> Vec<Anchor> {
    scan_anchors(markup, None)
}

/// Returns the anchors nested inside any element whose `class` list contains
/// `class`.
pub fn anchors_in_class(markup: &str, class: &str) -> Vec<Anchor> {
    scan_anchors(markup, Some(class))
}

/// Returns the non-empty visible text runs, in document order.
pub fn text_content(markup: &str) -> Vec<String> {
    let mut reader = html_reader(markup);
    let mut open: Vec<String> = Vec::new();
    let mut lines = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => push_open(&mut open, element_name(&e)),
            Ok(Event::End(e)) => {
                let name = lowercase(e.name().as_ref());
                pop_open(&mut open, &name);
            }
            Ok(Event::Text(t)) => {
                if open
                    .iter()
                    .any(|name| RAW_TEXT_ELEMENTS.contains(&name.as_str()))
                {
                    continue;
                }
                let text = collapse_whitespace(&decode_text(&t));
                if !text.is_empty() {
                    lines.push(text);
                }
            }
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
    }
    lines
}

fn html_reader(markup: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(markup);
    let config = reader.config_mut();
    config.trim_text(true);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    reader
}

fn scan_anchors(markup: &str, scope_class: Option<&str>) -> Vec<Anchor> {
    let mut reader = html_reader(markup);
    let mut open: Vec<String> = Vec::new();
    // Stack depth of the element that opened the class scope.
    let mut scope_depth: Option<usize> = None;
    let mut current: Option<Anchor> = None;
    let mut found = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = element_name(&e);
                if scope_depth.is_none() && scope_class.is_some_and(|c| has_class(&e, c)) {
                    scope_depth = Some(open.len());
                }
                let in_scope = scope_class.is_none() || scope_depth.is_some();
                if name == "a" {
                    // An unclosed anchor ends where the next one starts.
                    if let Some(anchor) = current.take() {
                        found.push(anchor);
                    }
                    if in_scope {
                        current = href(&e).map(|href| Anchor {
                            href,
                            text: String::new(),
                        });
                    }
                }
                push_open(&mut open, name);
            }
            Ok(Event::Empty(e)) => {
                let in_scope = scope_class.is_none() || scope_depth.is_some();
                if in_scope && element_name(&e) == "a" {
                    if let Some(href) = href(&e) {
                        found.push(Anchor {
                            href,
                            text: String::new(),
                        });
                    }
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(anchor) = current.as_mut() {
                    let text = decode_text(&t);
                    if !anchor.text.is_empty() {
                        anchor.text.push(' ');
                    }
                    anchor.text.push_str(&collapse_whitespace(&text));
                }
            }
            Ok(Event::End(e)) => {
                let name = lowercase(e.name().as_ref());
                if name == "a" {
                    if let Some(anchor) = current.take() {
                        found.push(anchor);
                    }
                }
                if let Some(pos) = pop_open(&mut open, &name) {
                    if scope_depth.is_some_and(|depth| pos <= depth) {
                        scope_depth = None;
                    }
                }
            }
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
    }

    if let Some(anchor) = current.take() {
        found.push(anchor);
    }
    found
}

fn push_open(open: &mut Vec<String>, name: String) {
    if !VOID_ELEMENTS.contains(&name.as_str()) {
        open.push(name);
    }
}

/// Pops up to and including the innermost element named `name`.
/// Returns its former depth, or `None` for an unmatched end tag.
fn pop_open(open: &mut Vec<String>, name: &str) -> Option<usize> {
    let pos = open.iter().rposition(|n| n == name)?;
    open.truncate(pos);
    Some(pos)
}

fn element_name(e: &BytesStart<'_>) -> String {
    lowercase(e.name().as_ref())
}

fn lowercase(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_ascii_lowercase()
}

fn attribute_value(attr: &Attribute<'_>) -> String {
    attr.unescape_value()
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned())
}

fn find_attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.html_attributes()
        .with_checks(false)
        .flatten()
        .find(|attr| attr.key.as_ref().eq_ignore_ascii_case(key))
        .map(|attr| attribute_value(&attr))
}

fn href(e: &BytesStart<'_>) -> Option<String> {
    find_attribute(e, b"href")
}

fn has_class(e: &BytesStart<'_>, class: &str) -> bool {
    find_attribute(e, b"class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

fn decode_text(t: &BytesText<'_>) -> String {
    t.unescape()
        .map(Cow::into_owned)
        .unwrap_or_else(|_| String::from_utf8_lossy(t).into_owned())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

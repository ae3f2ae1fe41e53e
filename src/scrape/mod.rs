//! Markup selection over parsed documents.
//!
//! Selection follows a (tag, class attribute, ordinal) contract: an element
//! matches when its raw `class` attribute equals the requested string
//! exactly, and the ordinal picks among matches in document order. Zero
//! matches, or an ordinal past the last match, is a
//! [`MarketError::NotFound`]; an element with no text is an empty string,
//! which is a valid extraction result.

use scraper::{ElementRef, Selector};

use crate::core::MarketError;

pub(crate) mod normalize;

fn tag_selector(tag: &str) -> Selector {
    Selector::parse(tag).expect("tag name is a valid selector")
}

/// All descendants of `scope` with the given tag whose `class` attribute is
/// exactly `class_attr`, in document order.
pub(crate) fn select_all<'a>(
    scope: ElementRef<'a>,
    tag: &str,
    class_attr: &str,
) -> Vec<ElementRef<'a>> {
    let selector = tag_selector(tag);
    scope
        .select(&selector)
        .filter(|el| el.value().attr("class") == Some(class_attr))
        .collect()
}

/// The `index`-th match of (`tag`, `class_attr`) under `scope`.
pub(crate) fn select_nth<'a>(
    scope: ElementRef<'a>,
    tag: &str,
    class_attr: &str,
    index: usize,
) -> Result<ElementRef<'a>, MarketError> {
    let selector = tag_selector(tag);
    scope
        .select(&selector)
        .filter(|el| el.value().attr("class") == Some(class_attr))
        .nth(index)
        .ok_or_else(|| {
            MarketError::NotFound(format!("<{tag} class=\"{class_attr}\"> (match {index})"))
        })
}

/// All descendants of `scope` with the given tag, regardless of class.
pub(crate) fn all_tag<'a>(scope: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    let selector = tag_selector(tag);
    scope.select(&selector).collect()
}

/// The `index`-th descendant of `scope` with the given tag.
pub(crate) fn nth_tag<'a>(
    scope: ElementRef<'a>,
    tag: &str,
    index: usize,
) -> Result<ElementRef<'a>, MarketError> {
    let selector = tag_selector(tag);
    scope
        .select(&selector)
        .nth(index)
        .ok_or_else(|| MarketError::NotFound(format!("<{tag}> (match {index})")))
}

/// The element's text with nested tags flattened: every text node under it,
/// concatenated in document order with no separators inserted.
pub(crate) fn flat_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// An attribute's value, if the element carries it.
pub(crate) fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

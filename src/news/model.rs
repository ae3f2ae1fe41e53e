use serde::Serialize;

/// A single scraped headline.
///
/// Headlines keep the casing they had on the page, trimmed of surrounding
/// whitespace. Duplicate detection compares a lowercased,
/// whitespace-collapsed form, so display text and duplicate identity can
/// differ in case only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// The headline as displayed on the source page.
    pub headline: String,
    /// The link the headline points at.
    pub link: String,
}

/// A headline attributed to the source it was first seen on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributedNewsItem {
    /// The source site the headline was kept from.
    pub source: String,
    /// The headline as displayed there.
    pub headline: String,
    /// The link it points at.
    pub link: String,
}

/// Normalized form of a headline used for duplicate comparison.
pub(crate) fn dedup_key(headline: &str) -> String {
    headline
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Headlines from one source page, in document order.
///
/// Within a source, headlines are unique by their exact text: inserting a
/// headline the page already produced replaces the earlier link but keeps
/// the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceNews {
    items: Vec<NewsItem>,
}

impl SourceNews {
    /// Adds a headline, replacing the link of an identical earlier one.
    pub fn insert(&mut self, headline: impl Into<String>, link: impl Into<String>) {
        let headline = headline.into();
        let link = link.into();
        if let Some(existing) = self.items.iter_mut().find(|it| it.headline == headline) {
            existing.link = link;
        } else {
            self.items.push(NewsItem { headline, link });
        }
    }

    /// The link for an exact headline, if present.
    #[must_use]
    pub fn get(&self, headline: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|it| it.headline == headline)
            .map(|it| it.link.as_str())
    }

    /// The headlines in document order.
    #[must_use]
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// News for one security, keyed by source site.
///
/// Sources keep the order they were merged in, which makes the
/// cross-source deduplication below deterministic: "first seen" means first
/// in merge order, then first in document order within a source.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewsResult {
    sources: Vec<(String, SourceNews)>,
}

impl NewsResult {
    /// Merges one source's headlines into the result.
    ///
    /// If the source is already present, its headlines are merged with
    /// last-wins semantics per headline; otherwise the source is appended.
    pub fn insert_source(&mut self, name: impl Into<String>, news: SourceNews) {
        let name = name.into();
        if let Some((_, existing)) = self.sources.iter_mut().find(|(n, _)| *n == name) {
            for item in news.items {
                existing.insert(item.headline, item.link);
            }
        } else {
            self.sources.push((name, news));
        }
    }

    /// The headlines for one source, if it was queried.
    #[must_use]
    pub fn get(&self, source: &str) -> Option<&SourceNews> {
        self.sources
            .iter()
            .find(|(n, _)| n == source)
            .map(|(_, news)| news)
    }

    /// The per-source results in merge order.
    pub fn sources(&self) -> impl Iterator<Item = (&str, &SourceNews)> {
        self.sources.iter().map(|(n, s)| (n.as_str(), s))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.iter().all(|(_, s)| s.is_empty())
    }

    /// Flattens all sources into one list, dropping headlines that are
    /// case/whitespace-insensitive duplicates of an earlier one. The
    /// first-seen (source, headline, link) triple is kept.
    #[must_use]
    pub fn dedup_across_sources(&self) -> Vec<AttributedNewsItem> {
        let mut seen = std::collections::HashSet::new();
        let mut merged = Vec::new();
        for (source, news) in &self.sources {
            for item in news.items() {
                if seen.insert(dedup_key(&item.headline)) {
                    merged.push(AttributedNewsItem {
                        source: source.clone(),
                        headline: item.headline.clone(),
                        link: item.link.clone(),
                    });
                }
            }
        }
        merged
    }
}

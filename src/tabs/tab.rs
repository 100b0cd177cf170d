// SPDX-License-Identifier: MPL-2.0
//! The tab record.

use crate::tabs::site::{self, SiteStyle};
use rand::Rng;

/// Inclusive range the billed amount is drawn from at construction.
pub const AMOUNT_RANGE: std::ops::RangeInclusive<u32> = 10_000..=99_999;

/// Process-unique identifier for a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(u64);

impl TabId {
    /// Allocates a new unique tab ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

/// One open browsing session, rendered as a card in the switcher.
///
/// Immutable once constructed; a tab leaves the system by being removed from
/// the [`TabStore`](crate::tabs::TabStore). Background color and image key
/// are derived from the URL through the site-style table rather than stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    id: TabId,
    title: String,
    url: String,
    favicon_glyph: String,
    is_private: bool,
    amount: u32,
}

impl Tab {
    /// Creates a tab with a randomly drawn amount.
    ///
    /// The amount is fixed here and never recomputed for the lifetime of the
    /// tab.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        favicon_glyph: impl Into<String>,
    ) -> Self {
        let amount = rand::rng().random_range(AMOUNT_RANGE);
        Self::with_amount(title, url, favicon_glyph, amount)
    }

    /// Creates a tab with an explicit amount. Useful when the caller needs a
    /// deterministic value, e.g. in tests.
    pub fn with_amount(
        title: impl Into<String>,
        url: impl Into<String>,
        favicon_glyph: impl Into<String>,
        amount: u32,
    ) -> Self {
        Self {
            id: TabId::new(),
            title: title.into(),
            url: url.into(),
            favicon_glyph: favicon_glyph.into(),
            is_private: false,
            amount,
        }
    }

    /// Marks the tab as a private browsing session.
    #[must_use]
    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    #[must_use]
    pub fn id(&self) -> TabId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn favicon_glyph(&self) -> &str {
        &self.favicon_glyph
    }

    #[must_use]
    pub fn is_private(&self) -> bool {
        self.is_private
    }

    #[must_use]
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Visual style derived from the URL.
    #[must_use]
    pub fn style(&self) -> &'static SiteStyle {
        site::style_for(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Tab::with_amount("a", "https://apple.com", "🌐", 10_000);
        let b = Tab::with_amount("b", "https://apple.com", "🌐", 10_000);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn random_amount_stays_in_range() {
        for _ in 0..32 {
            let tab = Tab::new("t", "https://apple.com", "🌐");
            assert!(AMOUNT_RANGE.contains(&tab.amount()));
        }
    }

    #[test]
    fn explicit_amount_is_kept_verbatim() {
        let tab = Tab::with_amount("t", "https://apple.com", "🌐", 42_424);
        assert_eq!(tab.amount(), 42_424);
    }

    #[test]
    fn tabs_are_not_private_by_default() {
        let tab = Tab::with_amount("t", "https://apple.com", "🌐", 10_000);
        assert!(!tab.is_private());
        assert!(tab.clone().private().is_private());
    }

    #[test]
    fn style_follows_url() {
        let github = Tab::with_amount("t", "https://github.com", "🌐", 10_000);
        let unknown = Tab::with_amount("t", "https://example.invalid", "🌐", 10_000);
        assert_ne!(github.style().color, unknown.style().color);
    }
}

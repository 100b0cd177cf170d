// SPDX-License-Identifier: MPL-2.0
//! Seed data and the fixed page list used by the "new tab" action.

use crate::tabs::Tab;
use rand::prelude::IndexedRandom;

const FAVICON_GLYPH: &str = "🌐";

/// Fixed (title, url) list. The first fourteen entries seed the switcher at
/// startup; the "new tab" action draws a random entry from the same list.
const SAMPLE_PAGES: &[(&str, &str)] = &[
    (
        "Summary for Vanguard Windsor Fund - Yah...",
        "https://finance.yahoo.com",
    ),
    (
        "How to Increase All System Font Size in Mac OS X...",
        "https://osxdaily.com",
    ),
    (
        "Quick Screen Sharing from Terminal is Suddenly...",
        "https://9to5mac.com",
    ),
    (
        "iPhone Screen Turned Black and Stopped Working?",
        "https://apple.com",
    ),
    (
        "The Threat Remains - Dragon Age Inquisition Walkthrough Part 1 Opening...",
        "https://google.com",
    ),
    (
        "GitHub - Where the world builds software",
        "https://github.com",
    ),
    (
        "Stack Overflow - Where Developers Learn",
        "https://stackoverflow.com",
    ),
    (
        "Apple Developer Documentation",
        "https://developer.apple.com",
    ),
    ("Swift Programming Language", "https://swift.org"),
    ("Xcode - Apple Developer", "https://xcode.com"),
    (
        "Reddit - The Front Page of the Internet",
        "https://reddit.com",
    ),
    ("Twitter - What's happening?", "https://twitter.com"),
    ("YouTube - Watch, Listen, Stream", "https://youtube.com"),
    ("Netflix - Watch TV Shows Online", "https://netflix.com"),
];

/// Builds the tabs the application boots with.
#[must_use]
pub fn seed_tabs() -> Vec<Tab> {
    SAMPLE_PAGES
        .iter()
        .map(|(title, url)| Tab::new(*title, *url, FAVICON_GLYPH))
        .collect()
}

/// Creates a fresh tab for a random page from the fixed list.
#[must_use]
pub fn random_tab() -> Tab {
    let (title, url) = SAMPLE_PAGES
        .choose(&mut rand::rng())
        .expect("page list is never empty");
    Tab::new(*title, *url, FAVICON_GLYPH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::tab::AMOUNT_RANGE;

    #[test]
    fn seed_contains_fourteen_tabs() {
        assert_eq!(seed_tabs().len(), 14);
    }

    #[test]
    fn seed_tabs_have_distinct_urls() {
        let tabs = seed_tabs();
        for (i, a) in tabs.iter().enumerate() {
            for b in &tabs[i + 1..] {
                assert_ne!(a.url(), b.url());
            }
        }
    }

    #[test]
    fn seed_amounts_stay_in_range() {
        for tab in seed_tabs() {
            assert!(AMOUNT_RANGE.contains(&tab.amount()));
        }
    }

    #[test]
    fn random_tab_comes_from_the_fixed_list() {
        for _ in 0..16 {
            let tab = random_tab();
            assert!(SAMPLE_PAGES.iter().any(|(_, url)| *url == tab.url()));
        }
    }
}

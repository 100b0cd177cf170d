// SPDX-License-Identifier: MPL-2.0
//! Static site-style lookup.
//!
//! Maps a tab's URL to its card color and background-image key through one
//! ordered table with an explicit fallback entry, replacing the string
//! comparison chains the original prototype grew over time. Image keys
//! resolve against the embedded `assets/cards/` folder and fall back to the
//! flat color when no asset is shipped for a key.

use iced::widget::image;
use iced::Color;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/cards/"]
struct CardArt;

/// Visual identity of a site: card color plus background-image key.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteStyle {
    pub color: Color,
    pub image_key: &'static str,
}

// iOS system colors, matching the palette the mockups were designed against.
const PURPLE: Color = Color::from_rgb(0.686, 0.322, 0.871);
const BLUE: Color = Color::from_rgb(0.0, 0.478, 1.0);
const GREEN: Color = Color::from_rgb(0.204, 0.780, 0.349);
const ORANGE: Color = Color::from_rgb(1.0, 0.584, 0.0);
const RED: Color = Color::from_rgb(1.0, 0.231, 0.188);
const INDIGO: Color = Color::from_rgb(0.345, 0.337, 0.839);
const TEAL: Color = Color::from_rgb(0.188, 0.690, 0.780);
const PINK: Color = Color::from_rgb(1.0, 0.176, 0.333);
const MINT: Color = Color::from_rgb(0.0, 0.780, 0.745);
const CYAN: Color = Color::from_rgb(0.196, 0.678, 0.902);
const GRAY: Color = Color::from_rgb(0.557, 0.557, 0.576);

/// Style applied to URLs absent from the table.
pub const FALLBACK_STYLE: SiteStyle = SiteStyle {
    color: GRAY,
    image_key: "1",
};

/// Ordered URL → style table. Image keys repeat past the seventh entry
/// because only seven background assets ever existed.
const SITE_STYLES: &[(&str, SiteStyle)] = &[
    (
        "https://finance.yahoo.com",
        SiteStyle {
            color: PURPLE,
            image_key: "1",
        },
    ),
    (
        "https://osxdaily.com",
        SiteStyle {
            color: BLUE,
            image_key: "2",
        },
    ),
    (
        "https://9to5mac.com",
        SiteStyle {
            color: GREEN,
            image_key: "3",
        },
    ),
    (
        "https://apple.com",
        SiteStyle {
            color: ORANGE,
            image_key: "4",
        },
    ),
    (
        "https://google.com",
        SiteStyle {
            color: RED,
            image_key: "5",
        },
    ),
    (
        "https://github.com",
        SiteStyle {
            color: INDIGO,
            image_key: "6",
        },
    ),
    (
        "https://stackoverflow.com",
        SiteStyle {
            color: TEAL,
            image_key: "7",
        },
    ),
    (
        "https://developer.apple.com",
        SiteStyle {
            color: PINK,
            image_key: "1",
        },
    ),
    (
        "https://swift.org",
        SiteStyle {
            color: MINT,
            image_key: "2",
        },
    ),
    (
        "https://xcode.com",
        SiteStyle {
            color: CYAN,
            image_key: "3",
        },
    ),
    (
        "https://reddit.com",
        SiteStyle {
            color: GRAY,
            image_key: "4",
        },
    ),
    (
        "https://twitter.com",
        SiteStyle {
            color: GRAY,
            image_key: "5",
        },
    ),
    (
        "https://youtube.com",
        SiteStyle {
            color: GRAY,
            image_key: "6",
        },
    ),
    (
        "https://netflix.com",
        SiteStyle {
            color: GRAY,
            image_key: "7",
        },
    ),
];

/// Looks up the style for a URL, falling back to [`FALLBACK_STYLE`].
#[must_use]
pub fn style_for(url: &str) -> &'static SiteStyle {
    SITE_STYLES
        .iter()
        .find(|(key, _)| *key == url)
        .map(|(_, style)| style)
        .unwrap_or(&FALLBACK_STYLE)
}

/// Resolves a background-image key against the embedded card art.
///
/// Returns `None` when no asset is shipped for the key; the card then renders
/// its flat site color instead.
#[must_use]
pub fn card_image(key: &str) -> Option<image::Handle> {
    let filename = format!("{key}.png");
    CardArt::get(&filename)
        .map(|content| image::Handle::from_bytes(content.data.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_url_resolves_to_its_style() {
        let style = style_for("https://finance.yahoo.com");
        assert_eq!(style.color, PURPLE);
        assert_eq!(style.image_key, "1");
    }

    #[test]
    fn unknown_url_falls_back_to_default() {
        let style = style_for("https://example.invalid");
        assert_eq!(*style, FALLBACK_STYLE);
    }

    #[test]
    fn image_keys_cycle_through_the_seven_assets() {
        for (_, style) in SITE_STYLES {
            let key: u32 = style.image_key.parse().expect("numeric image key");
            assert!((1..=7).contains(&key));
        }
    }

    #[test]
    fn missing_card_art_yields_none() {
        // No art is shipped for key "0"; lookup must degrade, not panic.
        assert!(card_image("0").is_none());
    }
}

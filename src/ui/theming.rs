// SPDX-License-Identifier: MPL-2.0
//! Theme modes and the color scheme consumed by the views.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Canvas behind the card stack.
    pub canvas: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    /// Translucent chrome on cards (amount strip, badge).
    pub card_chrome: Color,
    /// Text on the card chrome.
    pub card_chrome_text: Color,
}

impl ColorScheme {
    /// Light theme: the sage canvas from the mockups.
    #[must_use]
    pub fn light() -> Self {
        Self {
            canvas: palette::CANVAS_SAGE,
            text_primary: palette::BLACK,
            text_secondary: palette::GRAY_700,
            card_chrome: Color {
                a: crate::ui::design_tokens::opacity::CARD_CHROME,
                ..palette::WHITE
            },
            card_chrome_text: palette::BLACK,
        }
    }

    /// Dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            canvas: palette::GRAY_900,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            card_chrome: Color {
                a: crate::ui::design_tokens::opacity::CARD_CHROME,
                ..palette::GRAY_900
            },
            card_chrome_text: palette::WHITE,
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Dark) = dark_light::detect() {
            Self::dark()
        } else {
            Self::light() // The mockups are light-first
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::System => Self::from_system(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

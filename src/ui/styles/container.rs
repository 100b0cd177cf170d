// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface painted in the tab's site color, with the stack shadow when
/// requested.
pub fn card(color: Color, with_shadow: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::CARD.into(),
            ..Border::default()
        },
        shadow: if with_shadow { shadow::CARD } else { shadow::NONE },
        ..Default::default()
    }
}

/// Translucent chrome strip along a card's top edge.
pub fn card_strip(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Amount badge hanging from the strip, rounded at the bottom.
pub fn amount_badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: iced::border::Radius {
                top_left: radius::NONE,
                top_right: radius::NONE,
                bottom_right: radius::BADGE,
                bottom_left: radius::BADGE,
            },
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Full-window canvas behind a screen.
pub fn canvas(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Toast notification surface.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.base.color)),
            border: Border {
                color: accent,
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Rendering of a single tab card.
//!
//! The x-axis tilt of the original layout is approximated by foreshortening
//! the card's height with the cosine of its rotation angle; Iced has no 3-D
//! transform, and for a stack of mostly-occluded cards the squash reads the
//! same.

use super::component::Message;
use super::layout::{self, CardTransform};
use super::ViewMode;
use crate::i18n::I18n;
use crate::tabs::{site, Tab};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, image, Column, Container, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Context required to render one card.
pub struct CardEnv<'a> {
    pub i18n: &'a I18n,
    pub tab: &'a Tab,
    pub mode: ViewMode,
    pub tapped: bool,
    pub transform: CardTransform,
    pub scheme: &'a ColorScheme,
    /// Stacked cards below the first one cast the soft separation shadow;
    /// suppressed in the grouped view.
    pub shadowed: bool,
}

pub fn view<'a>(env: CardEnv<'a>) -> Element<'a, Message> {
    let style = env.tab.style();
    let tilt = env.transform.rotation_degrees.to_radians().cos().abs();
    let height = (layout::CARD_HEIGHT * tilt).max(1.0);

    // Background: embedded art when present, otherwise the flat site color
    // painted by the container behind it.
    let surface: Element<'a, Message> = match site::card_image(style.image_key) {
        Some(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(surface);

    // Amount chrome and the close affordance only exist in the normal view.
    if env.mode == ViewMode::Normal {
        layers = layers.push(amount_chrome(&env));
        layers = layers.push(close_affordance(&env));
        if env.tab.is_private() {
            layers = layers.push(private_badge(&env));
        }
        if env.tapped {
            layers = layers.push(open_affordance(&env));
        }
    }

    let body = Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .max_width(sizing::CARD_MAX_WIDTH)
        .clip(true)
        .style(styles::container::card(style.color, env.shadowed));

    button(body)
        .padding(0.0)
        .style(styles::button::bare)
        .on_press(Message::CardPressed(env.tab.id()))
        .into()
}

/// White strip across the top edge with the amount badge hanging below it.
fn amount_chrome<'a>(env: &CardEnv<'a>) -> Element<'a, Message> {
    let strip = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::AMOUNT_STRIP_HEIGHT))
        .style(styles::container::card_strip(env.scheme.card_chrome));

    let amount_text = Text::new(format!(
        "{}{}",
        env.i18n.tr("switcher-currency-prefix"),
        env.tab.amount()
    ))
    .size(typography::AMOUNT)
    .color(env.scheme.card_chrome_text);

    let badge = Container::new(amount_text)
        .width(Length::Fixed(sizing::AMOUNT_BADGE_WIDTH))
        .height(Length::Fixed(sizing::AMOUNT_BADGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::amount_badge(env.scheme.card_chrome));

    let chrome = Column::new()
        .align_x(alignment::Horizontal::Center)
        .push(strip)
        .push(badge);

    Container::new(chrome)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .into()
}

fn close_affordance<'a>(env: &CardEnv<'a>) -> Element<'a, Message> {
    let close = button(
        Text::new("✕")
            .size(typography::CAPTION)
            .color(palette::WHITE),
    )
    .width(Length::Fixed(sizing::CLOSE_BUTTON))
    .height(Length::Fixed(sizing::CLOSE_BUTTON))
    .padding(spacing::XXS)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_SUBTLE,
        opacity::OVERLAY_MEDIUM,
    ))
    .on_press(Message::CloseRequested(env.tab.id()));

    Container::new(close)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::XS)
        .into()
}

fn private_badge<'a>(env: &CardEnv<'a>) -> Element<'a, Message> {
    let badge = Text::new(env.i18n.tr("tab-private-badge"))
        .size(typography::CAPTION)
        .color(palette::WHITE);

    Container::new(badge)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::XS)
        .into()
}

/// "Open" pill shown on the flattened card.
fn open_affordance<'a>(env: &CardEnv<'a>) -> Element<'a, Message> {
    let open = button(
        Text::new(env.i18n.tr("switcher-open-tab")).size(typography::BODY),
    )
    .padding([spacing::XXS, spacing::LG])
    .style(styles::button::primary)
    .on_press(Message::OpenRequested(env.tab.id()));

    Container::new(open)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

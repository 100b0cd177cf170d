// SPDX-License-Identifier: MPL-2.0
//! View composition for the tab switcher screen.
//!
//! Cards are absolutely positioned inside a `Stack` whose child order doubles
//! as the z-order, because rows and columns cannot express the negative
//! spacing the overlapping stack needs. All positions come from the pure
//! layout module.

use super::card::{self, CardEnv};
use super::component::{Message, State};
use super::layout::{self, CardTransform};
use super::ViewMode;
use crate::i18n::I18n;
use crate::tabs::Tab;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::font::Weight;
use iced::widget::{mouse_area, scrollable, Column, Container, Space, Stack, Text};
use iced::{alignment, Element, Font, Length, Padding};

/// Context required to render the switcher.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub tabs: &'a [Tab],
    pub state: &'a State,
    pub scheme: &'a ColorScheme,
}

pub fn view<'a>(env: ViewEnv<'a>) -> Element<'a, Message> {
    if env.tabs.is_empty() {
        return empty_state(&env);
    }

    let mut content = Column::new().width(Length::Fill).height(Length::Fill);

    // The running total is only shown in the grouped view.
    if env.state.view_mode() == ViewMode::Pinched {
        content = content.push(bill_header(&env));
    }

    content = content.push(card_stack(&env));

    mouse_area(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Message::BackgroundPressed)
    .into()
}

/// "YOUR TOTAL BILL" plus the animated amount.
fn bill_header<'a>(env: &ViewEnv<'a>) -> Element<'a, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::default()
    };

    let label = Text::new(env.i18n.tr("switcher-total-bill-label"))
        .size(typography::TOTAL_LABEL)
        .color(env.scheme.text_primary);

    let total = Text::new(format!(
        "{}{}",
        env.i18n.tr("switcher-currency-prefix"),
        env.state.displayed_total()
    ))
    .size(typography::TOTAL_DISPLAY)
    .font(bold)
    .color(env.scheme.text_primary);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(label)
            .push(total),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .padding(Padding {
        top: sizing::BILL_HEADER_TOP,
        bottom: sizing::BILL_HEADER_BOTTOM,
        ..Padding::ZERO
    })
    .into()
}

/// The scrollable, overlapping stack of cards.
fn card_stack<'a>(env: &ViewEnv<'a>) -> Element<'a, Message> {
    let spacing_value = env.state.stack_spacing();

    let transforms: Vec<CardTransform> = env
        .tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| layout::card_transform(&env.state.card_context(index, tab.id())))
        .collect();
    let positions = layout::stack_positions(&transforms, spacing_value);
    let total_height = layout::content_height(&transforms, spacing_value) + layout::CARD_HEIGHT;

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(total_height));

    // Push order is paint order, so index i draws above everything before
    // it, which is exactly the z-order the transforms prescribe.
    for ((tab, transform), y) in env.tabs.iter().zip(&transforms).zip(&positions) {
        let card = card::view(CardEnv {
            i18n: env.i18n,
            tab,
            mode: env.state.view_mode(),
            tapped: env.state.is_tapped(tab.id()),
            transform: *transform,
            scheme: env.scheme,
            shadowed: transform.z_order > 0 && env.state.view_mode() == ViewMode::Normal,
        });

        stack = stack.push(
            Container::new(card)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .padding(Padding {
                    top: *y,
                    left: spacing::MD,
                    right: spacing::MD,
                    ..Padding::ZERO
                }),
        );
    }

    scrollable(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| Message::Scrolled(-viewport.absolute_offset().y))
        .into()
}

fn empty_state<'a>(env: &ViewEnv<'a>) -> Element<'a, Message> {
    let title = Text::new(env.i18n.tr("switcher-empty-title"))
        .size(typography::TITLE_MD)
        .color(env.scheme.text_primary);
    let subtitle = Text::new(env.i18n.tr("switcher-empty-subtitle"))
        .size(typography::BODY)
        .color(env.scheme.text_secondary);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(Space::new().width(Length::Shrink).height(Length::Fixed(spacing::XL)));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

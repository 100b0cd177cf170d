// SPDX-License-Identifier: MPL-2.0
//! Content screen for the currently open tab.
//!
//! A stand-in for a real page: the tab's site color fills the window with
//! the page title on top, plus the affordance to return to the switcher.

use crate::i18n::I18n;
use crate::tabs::Tab;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Color, Element, Length};

#[derive(Debug, Clone, Copy)]
pub enum Message {
    BackToTabs,
}

pub fn view<'a>(tab: &'a Tab, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(format!("{} {}", tab.favicon_glyph(), tab.title()))
        .size(typography::TITLE_MD)
        .color(palette::WHITE);

    let url = Text::new(tab.url())
        .size(typography::BODY)
        .color(Color {
            a: 0.8,
            ..palette::WHITE
        });

    let back = button(Text::new(i18n.tr("content-back-to-tabs")).size(typography::BODY))
        .padding([spacing::XXS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::BackToTabs);

    let page = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(url);

    let layout = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .push(
            Container::new(back)
                .align_x(alignment::Horizontal::Center)
                .padding(spacing::XXL),
        );

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::canvas(tab.style().color))
        .into()
}

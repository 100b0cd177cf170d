// SPDX-License-Identifier: MPL-2.0
//! Toast rendering for visible notifications.

use super::{Manager, Message};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the visible toasts stacked in the bottom-right corner.
pub fn view<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);

    for notification in manager.visible() {
        let body = Text::new(i18n.tr(notification.message_key())).size(typography::BODY);

        let dismiss = button(
            Text::new("✕")
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .style(styles::button::bare)
        .on_press(Message::Dismiss(notification.id()));

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(body)
            .push(dismiss);

        column = column.push(
            Container::new(row)
                .width(Length::Fixed(sizing::TOAST_WIDTH))
                .padding(spacing::SM)
                .style(styles::container::toast(notification.severity().color())),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

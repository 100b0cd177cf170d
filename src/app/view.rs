// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen, the new-tab affordance, and any visible
//! toasts layered on top.

use super::{Message, Screen};
use crate::i18n::I18n;
use crate::tabs::{TabId, TabStore};
use crate::ui::content;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications;
use crate::ui::styles;
use crate::ui::switcher;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub store: &'a TabStore,
    pub switcher: &'a switcher::State,
    pub selected_tab: Option<TabId>,
    pub scheme: &'a ColorScheme,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen_view: Element<'_, Message> = match ctx.screen {
        Screen::Switcher => view_switcher(&ctx),
        Screen::TabContent => view_content(&ctx),
    };

    if ctx.notifications.has_notifications() {
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(screen_view)
            .push(notifications::toast::view(ctx.notifications, ctx.i18n).map(Message::Notification))
            .into()
    } else {
        screen_view
    }
}

fn view_switcher<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let stack_view = switcher::view::view(switcher::ViewEnv {
        i18n: ctx.i18n,
        tabs: ctx.store.all(),
        state: ctx.switcher,
        scheme: ctx.scheme,
    })
    .map(Message::Switcher);

    let new_tab = button(Text::new("+").size(typography::TITLE_MD))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::NewTab);

    let layered = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(stack_view)
        .push(
            Container::new(new_tab)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD),
        );

    Container::new(layered)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::canvas(ctx.scheme.canvas))
        .into()
}

fn view_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let selected = ctx.selected_tab.and_then(|id| ctx.store.get(id));

    match selected {
        Some(tab) => content::view(tab, ctx.i18n).map(Message::Content),
        // Defensive: with no resolvable selection the switcher is the only
        // sensible surface.
        None => view_switcher(ctx),
    }
}

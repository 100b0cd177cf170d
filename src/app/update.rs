// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The handlers mutate state through an [`UpdateContext`] of borrows so the
//! root `App::update` stays a thin dispatcher.

use super::Screen;
use crate::feedback::Conductor;
use crate::tabs::{sample, TabId, TabStore};
use crate::ui::notifications;
use crate::ui::switcher;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub store: &'a mut TabStore,
    pub switcher: &'a mut switcher::State,
    pub selected_tab: &'a mut Option<TabId>,
    pub feedback: &'a mut Conductor,
    pub notifications: &'a mut notifications::Manager,
}

/// Routes a switcher message through the component and applies its effect.
pub fn handle_switcher_message(
    ctx: &mut UpdateContext<'_>,
    message: switcher::Message,
    now: Instant,
) {
    let effect = ctx.switcher.update(message, ctx.store, ctx.feedback, now);
    apply_switcher_effect(ctx, effect);
}

fn apply_switcher_effect(ctx: &mut UpdateContext<'_>, effect: switcher::Effect) {
    match effect {
        switcher::Effect::None => {}
        switcher::Effect::OpenTab(id) => {
            // The id may refer to a tab closed in the same frame; only
            // navigate when it still exists.
            if ctx.store.get(id).is_some() {
                *ctx.selected_tab = Some(id);
                *ctx.screen = Screen::TabContent;
            }
        }
        switcher::Effect::CloseTab(id) => handle_tab_closed(ctx, id),
    }
}

/// Removes a tab and applies the selection fallback: the first remaining tab
/// becomes current, and with no tabs left the switcher screen is shown.
pub fn handle_tab_closed(ctx: &mut UpdateContext<'_>, id: TabId) {
    if ctx.store.remove(id).is_none() {
        return;
    }
    ctx.switcher.tab_removed(id);

    if *ctx.selected_tab == Some(id) {
        *ctx.selected_tab = ctx.store.first_id();
        if ctx.selected_tab.is_none() {
            *ctx.screen = Screen::Switcher;
        }
    }
}

/// Creates a tab for a random page from the fixed list.
pub fn handle_new_tab(ctx: &mut UpdateContext<'_>, now: Instant) {
    let id = ctx.store.add(sample::random_tab());
    ctx.switcher.tab_added(ctx.store, now);
    if ctx.selected_tab.is_none() {
        *ctx.selected_tab = Some(id);
    }
}

/// Advances scheduled animation work and toast expiry.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    ctx.switcher.tick(ctx.store, ctx.feedback, now);
    ctx.notifications.tick();
}

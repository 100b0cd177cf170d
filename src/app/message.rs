// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::content;
use crate::ui::notifications;
use crate::ui::switcher;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Switcher(switcher::Message),
    Content(content::Message),
    Notification(notifications::Message),
    /// Create a tab for a random page from the fixed list.
    NewTab,
    /// Periodic tick driving the scheduler and toast expiry.
    Tick(Instant),
    /// The window was resized; the switcher needs the viewport height for
    /// its rotation interpolation.
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}

// SPDX-License-Identifier: MPL-2.0
//! Switcher component encapsulating interaction state and update logic.
//!
//! The state machine has three phases: `Normal`, `TransitioningToPinched`
//! (the staged reveal is running) and `Pinched`. All deferred work — staged
//! card reveals, count-up emissions, pinch settling — goes through the
//! [`Scheduler`] so a conflicting transition can cancel it wholesale, and
//! `now` is always passed in from the caller.

use crate::config::Config;
use crate::feedback::{Conductor, Strength};
use crate::scheduler::Scheduler;
use crate::tabs::{TabId, TabStore};
use crate::ui::components::animated_counter::{self, AnimatedCounter, COUNTER_STEPS};
use crate::ui::switcher::layout::{self, CardContext};
use crate::ui::switcher::ViewMode;
use iced::{keyboard, mouse};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Pinch-in scale below which the grouped view is entered.
pub const PINCH_IN_THRESHOLD: f32 = 0.8;

/// Pinch-out scale above which the grouped view is left.
pub const PINCH_OUT_THRESHOLD: f32 = 1.2;

/// Delay before the first card settles during the staged reveal.
pub const REVEAL_BASE_DELAY: Duration = Duration::from_millis(400);

/// Additional delay per card index during the staged reveal.
pub const REVEAL_STEP_DELAY: Duration = Duration::from_millis(100);

// Desktop pinch synthesis: each Ctrl+wheel notch scales by this factor, and
// the gesture counts as ended once no notch arrives for the settle delay.
const PINCH_WHEEL_FACTOR: f32 = 1.1;
const PINCH_SETTLE_DELAY: Duration = Duration::from_millis(200);

const DOUBLE_TAP_THRESHOLD: Duration = Duration::from_millis(350);

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Normal,
    /// Pinched layout is active but the staged reveal has not finished.
    TransitioningToPinched,
    Pinched,
}

/// Messages emitted by switcher widgets and routed raw events.
#[derive(Debug, Clone)]
pub enum Message {
    /// Single tap on a card.
    CardPressed(TabId),
    /// The tapped card's open affordance was activated.
    OpenRequested(TabId),
    /// A card's close affordance was activated.
    CloseRequested(TabId),
    /// Press on the switcher background (double-tap detection).
    BackgroundPressed,
    /// Scroll offset change; content top relative to the viewport top.
    Scrolled(f32),
    RawEvent(iced::Event),
}

/// Side effects the application should perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Navigate to the tab's content screen.
    OpenTab(TabId),
    /// Remove the tab from the store.
    CloseTab(TabId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskGroup {
    Reveal,
    Counter,
    PinchSettle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimedEvent {
    RevealCard(usize),
    CounterStep(u64),
    PinchSettled,
}

/// Mutable view-state of the switcher screen.
pub struct State {
    phase: Phase,
    tapped: Option<TabId>,
    scroll_offset: f32,
    settled: BTreeSet<usize>,
    reveal_remaining: usize,
    pinch_in_progress: bool,
    pinch_scale: f32,
    ctrl_held: bool,
    last_background_press: Option<Instant>,
    viewport_height: f32,
    pinched_spacing: f32,
    counter_duration: Duration,
    counter: AnimatedCounter,
    scheduler: Scheduler<TaskGroup, TimedEvent>,
}

impl State {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            phase: Phase::Normal,
            tapped: None,
            scroll_offset: 0.0,
            settled: BTreeSet::new(),
            reveal_remaining: 0,
            pinch_in_progress: false,
            pinch_scale: 1.0,
            ctrl_held: false,
            last_background_press: None,
            viewport_height: 720.0,
            pinched_spacing: config.pinched_stack_spacing(),
            counter_duration: config.counter_duration(),
            counter: AnimatedCounter::new(),
            scheduler: Scheduler::new(),
        }
    }

    /// Handles a message, returning the side effect for the application.
    pub fn update(
        &mut self,
        message: Message,
        store: &TabStore,
        feedback: &mut Conductor,
        now: Instant,
    ) -> Effect {
        match message {
            Message::CardPressed(id) => {
                self.toggle_tapped(id, feedback);
                Effect::None
            }
            Message::OpenRequested(id) => {
                if self.phase == Phase::Normal {
                    Effect::OpenTab(id)
                } else {
                    Effect::None
                }
            }
            Message::CloseRequested(id) => {
                if self.phase == Phase::Normal {
                    if self.tapped == Some(id) {
                        self.tapped = None;
                    }
                    Effect::CloseTab(id)
                } else {
                    Effect::None
                }
            }
            Message::BackgroundPressed => {
                let is_double = self
                    .last_background_press
                    .is_some_and(|last| now.duration_since(last) <= DOUBLE_TAP_THRESHOLD);
                if is_double {
                    self.last_background_press = None;
                    self.double_tapped(store, feedback, now);
                } else {
                    self.last_background_press = Some(now);
                }
                Effect::None
            }
            Message::Scrolled(offset) => {
                self.scroll_offset = offset;
                Effect::None
            }
            Message::RawEvent(event) => {
                self.handle_raw_event(&event, store, feedback, now);
                Effect::None
            }
        }
    }

    /// Drains due scheduled work. Called from the application tick.
    pub fn tick(&mut self, store: &TabStore, feedback: &mut Conductor, now: Instant) {
        for event in self.scheduler.drain_due(now) {
            match event {
                TimedEvent::RevealCard(index) => {
                    self.settled.insert(index);
                    feedback.pulse(Strength::Medium);
                    self.reveal_remaining = self.reveal_remaining.saturating_sub(1);
                    if self.reveal_remaining == 0 && self.phase == Phase::TransitioningToPinched {
                        self.phase = Phase::Pinched;
                    }
                }
                TimedEvent::CounterStep(value) => self.counter.apply(value),
                TimedEvent::PinchSettled => {
                    let scale = self.pinch_scale;
                    self.pinch_in_progress = false;
                    self.pinch_scale = 1.0;
                    self.pinch_ended(scale, store, feedback, now);
                }
            }
        }
    }

    /// Applies the end of a pinch gesture with its final scale.
    pub fn pinch_ended(
        &mut self,
        scale: f32,
        store: &TabStore,
        feedback: &mut Conductor,
        now: Instant,
    ) {
        if scale < PINCH_IN_THRESHOLD && self.phase == Phase::Normal {
            self.enter_pinched(store, feedback, now);
        } else if scale > PINCH_OUT_THRESHOLD && self.phase != Phase::Normal {
            self.exit_pinched(feedback);
        }
    }

    /// Double-tap toggle, symmetric to the pinch thresholds.
    pub fn double_tapped(&mut self, store: &TabStore, feedback: &mut Conductor, now: Instant) {
        match self.phase {
            Phase::Normal => self.enter_pinched(store, feedback, now),
            Phase::TransitioningToPinched | Phase::Pinched => self.exit_pinched(feedback),
        }
    }

    /// Called after the application appended a tab to the store.
    ///
    /// In the grouped view the total is re-animated and the new card's
    /// settle is scheduled like a one-card reveal.
    pub fn tab_added(&mut self, store: &TabStore, now: Instant) {
        if self.phase == Phase::Normal {
            return;
        }
        let new_index = store.len().saturating_sub(1);
        self.reveal_remaining += 1;
        self.scheduler.schedule(
            TaskGroup::Reveal,
            REVEAL_BASE_DELAY,
            now,
            TimedEvent::RevealCard(new_index),
        );
        self.start_counter(store.total_amount(), now);
    }

    /// Called after the application removed a tab from the store.
    pub fn tab_removed(&mut self, id: TabId) {
        if self.tapped == Some(id) {
            self.tapped = None;
        }
    }

    fn toggle_tapped(&mut self, id: TabId, feedback: &mut Conductor) {
        // Cards are not individually tappable outside the normal view.
        if self.phase != Phase::Normal {
            return;
        }
        feedback.pulse(Strength::Medium);
        if self.tapped == Some(id) {
            self.tapped = None;
        } else {
            self.tapped = Some(id);
        }
    }

    fn enter_pinched(&mut self, store: &TabStore, feedback: &mut Conductor, now: Instant) {
        self.tapped = None;
        self.settled.clear();
        self.scheduler.cancel(TaskGroup::Reveal);

        let count = store.len();
        self.reveal_remaining = count;
        if count == 0 {
            self.phase = Phase::Pinched;
        } else {
            self.phase = Phase::TransitioningToPinched;
            for index in 0..count {
                self.scheduler.schedule(
                    TaskGroup::Reveal,
                    reveal_delay(index),
                    now,
                    TimedEvent::RevealCard(index),
                );
            }
        }

        self.start_counter(store.total_amount(), now);
        feedback.pulse(Strength::Medium);
    }

    fn exit_pinched(&mut self, feedback: &mut Conductor) {
        self.phase = Phase::Normal;
        self.settled.clear();
        self.reveal_remaining = 0;
        self.scheduler.cancel(TaskGroup::Reveal);
        self.scheduler.cancel(TaskGroup::Counter);
        feedback.pulse(Strength::Medium);
    }

    /// Registers the count-up emissions for `target`, cancelling any
    /// sequence still in flight so stale steps can never land afterwards.
    fn start_counter(&mut self, target: u64, now: Instant) {
        self.scheduler.cancel(TaskGroup::Counter);
        let values = animated_counter::step_values(target, COUNTER_STEPS);
        let offsets = animated_counter::emission_offsets(self.counter_duration, COUNTER_STEPS);
        for (value, offset) in values.into_iter().zip(offsets) {
            self.scheduler
                .schedule(TaskGroup::Counter, offset, now, TimedEvent::CounterStep(value));
        }
    }

    fn handle_raw_event(
        &mut self,
        event: &iced::Event,
        store: &TabStore,
        feedback: &mut Conductor,
        now: Instant,
    ) {
        match event {
            iced::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                self.ctrl_held = modifiers.control();
            }
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Space),
                ..
            }) => {
                self.double_tapped(store, feedback, now);
            }
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => {
                if self.phase == Phase::Normal {
                    self.tapped = None;
                }
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) if self.ctrl_held => {
                let y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y,
                };
                if y != 0.0 {
                    self.pinch_step(y > 0.0, now);
                }
            }
            _ => {}
        }
    }

    /// One notch of the synthesized pinch: scale accumulates and the settle
    /// task is pushed back until the notches stop.
    fn pinch_step(&mut self, zoom_in: bool, now: Instant) {
        self.pinch_in_progress = true;
        if zoom_in {
            self.pinch_scale *= PINCH_WHEEL_FACTOR;
        } else {
            self.pinch_scale /= PINCH_WHEEL_FACTOR;
        }
        self.scheduler.cancel(TaskGroup::PinchSettle);
        self.scheduler.schedule(
            TaskGroup::PinchSettle,
            PINCH_SETTLE_DELAY,
            now,
            TimedEvent::PinchSettled,
        );
    }

    // ── Accessors used by the view and the application ──

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        match self.phase {
            Phase::Normal => ViewMode::Normal,
            Phase::TransitioningToPinched | Phase::Pinched => ViewMode::Pinched,
        }
    }

    #[must_use]
    pub fn tapped(&self) -> Option<TabId> {
        self.tapped
    }

    #[must_use]
    pub fn is_tapped(&self, id: TabId) -> bool {
        self.tapped == Some(id)
    }

    #[must_use]
    pub fn is_settled(&self, index: usize) -> bool {
        self.settled.contains(&index)
    }

    #[must_use]
    pub fn settled_count(&self) -> usize {
        self.settled.len()
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    #[must_use]
    pub fn pinch_in_progress(&self) -> bool {
        self.pinch_in_progress
    }

    #[must_use]
    pub fn displayed_total(&self) -> u64 {
        self.counter.displayed()
    }

    #[must_use]
    pub fn pinched_spacing(&self) -> f32 {
        self.pinched_spacing
    }

    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        if height > 0.0 {
            self.viewport_height = height;
        }
    }

    /// Whether the tick subscription needs to keep running.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Layout context for the card at `index` with identity `id`.
    #[must_use]
    pub fn card_context(&self, index: usize, id: TabId) -> CardContext {
        CardContext {
            index,
            mode: self.view_mode(),
            tapped: self.is_tapped(id),
            settled: self.is_settled(index),
            scroll_offset: self.scroll_offset,
            viewport_height: self.viewport_height,
        }
    }

    /// Stack spacing for the current mode.
    #[must_use]
    pub fn stack_spacing(&self) -> f32 {
        layout::stack_spacing(self.view_mode(), self.pinched_spacing)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Delay before the card at `index` settles during the staged reveal.
#[must_use]
pub fn reveal_delay(index: usize) -> Duration {
    REVEAL_BASE_DELAY + REVEAL_STEP_DELAY * index as u32
}

/// Total duration of a staged reveal over `count` cards.
#[must_use]
pub fn reveal_duration(count: usize) -> Duration {
    match count {
        0 => Duration::ZERO,
        n => reveal_delay(n - 1),
    }
}

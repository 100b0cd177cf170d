// SPDX-License-Identifier: MPL-2.0
//! Discrete tactile feedback pulses.
//!
//! The original hardware target pairs every state transition and reveal step
//! with a haptic impact. Desktop machines have no haptic engine, so the
//! conductor records the pulses instead; tests observe the counter and a
//! future platform backend can hook the same call site.

/// Impact strength, mirroring the coarse levels haptic engines expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strength {
    Light,
    #[default]
    Medium,
    Heavy,
}

/// Fire-and-forget feedback sink. Pulses have no return value and cannot
/// fail; the conductor only keeps a tally.
#[derive(Debug, Default)]
pub struct Conductor {
    pulses: u64,
}

impl Conductor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits one feedback pulse.
    pub fn pulse(&mut self, _strength: Strength) {
        self.pulses += 1;
    }

    /// Total pulses emitted since construction.
    #[must_use]
    pub fn pulse_count(&self) -> u64 {
        self.pulses
    }
}

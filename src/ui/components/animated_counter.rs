// SPDX-License-Identifier: MPL-2.0
//! Step-based count-up animation for the grouped view's total.
//!
//! The displayed value walks to the target over a fixed number of equal time
//! steps. The math lives in free functions so the emission sequence can be
//! tested without a clock; the owning component schedules the emissions and
//! feeds them back through [`AnimatedCounter::apply`].

use std::time::Duration;

/// Number of interpolation steps per animation.
pub const COUNTER_STEPS: u32 = 20;

/// Values emitted while animating to `target`.
///
/// Step k emits `min(k * increment, target)` with
/// `increment = max(1, target / steps)`, so the sequence is non-decreasing,
/// has `steps + 1` entries, and always lands exactly on the target no matter
/// how the integer division rounds.
#[must_use]
pub fn step_values(target: u64, steps: u32) -> Vec<u64> {
    let steps = steps.max(1);
    let increment = (target / u64::from(steps)).max(1);
    (0..=u64::from(steps))
        .map(|k| (k * increment).min(target))
        .collect()
}

/// Offsets from the trigger instant at which each emission fires.
///
/// Emission k is due at `k * (duration / steps)`.
#[must_use]
pub fn emission_offsets(duration: Duration, steps: u32) -> Vec<Duration> {
    let steps = steps.max(1);
    let step_duration = duration / steps;
    (0..=steps).map(|k| step_duration * k).collect()
}

/// The currently displayed value of the count-up label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimatedCounter {
    displayed: u64,
}

impl AnimatedCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one scheduled emission.
    pub fn apply(&mut self, value: u64) {
        self.displayed = value;
    }

    #[must_use]
    pub fn displayed(self) -> u64 {
        self.displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_has_steps_plus_one_entries() {
        assert_eq!(step_values(1000, COUNTER_STEPS).len(), 21);
        assert_eq!(step_values(0, COUNTER_STEPS).len(), 21);
    }

    #[test]
    fn sequence_ends_exactly_at_target() {
        for target in [0_u64, 1, 7, 19, 20, 21, 999, 135_499, 1_399_986] {
            let values = step_values(target, COUNTER_STEPS);
            assert_eq!(*values.last().unwrap(), target, "target {target}");
        }
    }

    #[test]
    fn sequence_is_non_decreasing() {
        for target in [0_u64, 3, 42, 100_000] {
            let values = step_values(target, COUNTER_STEPS);
            for pair in values.windows(2) {
                assert!(pair[1] >= pair[0], "target {target}");
            }
        }
    }

    #[test]
    fn zero_target_emits_only_zero() {
        assert!(step_values(0, COUNTER_STEPS).iter().all(|&v| v == 0));
    }

    #[test]
    fn small_target_ties_at_minimum_increment() {
        // Targets below the step count still advance by at least one and
        // saturate early.
        let values = step_values(5, COUNTER_STEPS);
        assert_eq!(values[0], 0);
        assert_eq!(values[5], 5);
        assert!(values[6..].iter().all(|&v| v == 5));
    }

    #[test]
    fn rounding_never_overshoots_before_the_last_step() {
        let values = step_values(999, COUNTER_STEPS);
        for &value in &values {
            assert!(value <= 999);
        }
        // 999 / 20 = 49; intermediate steps fall short and the clamp on the
        // final step closes the gap.
        assert_eq!(values[20], 999);
    }

    #[test]
    fn offsets_divide_the_duration_evenly() {
        let offsets = emission_offsets(Duration::from_millis(800), COUNTER_STEPS);
        assert_eq!(offsets.len(), 21);
        assert_eq!(offsets[0], Duration::ZERO);
        assert_eq!(offsets[1], Duration::from_millis(40));
        assert_eq!(offsets[20], Duration::from_millis(800));
    }

    #[test]
    fn counter_tracks_applied_values() {
        let mut counter = AnimatedCounter::new();
        assert_eq!(counter.displayed(), 0);
        counter.apply(120);
        assert_eq!(counter.displayed(), 120);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.

pub mod animated_counter;

pub use animated_counter::AnimatedCounter;

// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`switcher`] - The stacked-card tab switcher with its gesture state
//!   machine and pure layout math
//! - [`content`] - Flat content screen for the currently open tab
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (animated counter)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`notifications`] - Toast notification system
//! - [`styles`] - Centralized widget styling
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod content;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod switcher;
pub mod theming;

// SPDX-License-Identifier: MPL-2.0
//! Pure layout math for the card stack.
//!
//! Everything here is a total function of the interaction state; the
//! component feeds it per-card context and the view renders the resulting
//! transforms. Keeping the arithmetic free of widget types makes the rules
//! directly testable.

use crate::ui::switcher::ViewMode;

/// Rendered card height.
pub const CARD_HEIGHT: f32 = 200.0;

/// Vertical stacking step between consecutive cards.
pub const CARD_STACK_STEP: f32 = 8.0;

/// Extra drop applied to a card once its staged reveal has settled.
pub const SETTLED_DROP: f32 = 40.0;

/// Padding inserted above a tapped card to separate it from the stack.
pub const TAPPED_TOP_PADDING: f32 = 100.0;

/// Padding inserted below a tapped card.
pub const TAPPED_BOTTOM_PADDING: f32 = 125.0;

/// Card overlap in the normal stacked view.
pub const NORMAL_STACK_SPACING: f32 = -100.0;

/// Rotation of a card sitting at the top of the viewport.
pub const TOP_ROTATION_DEGREES: f32 = -5.0;

/// Rotation of a card at or beyond the maximum distance.
pub const BOTTOM_ROTATION_DEGREES: f32 = -40.0;

/// Y position the rotation interpolation measures distance from; accounts
/// for the header area above the first card.
pub const ROTATION_TOP_REFERENCE: f32 = 200.0;

/// Fraction of the viewport height over which rotation reaches its maximum.
pub const ROTATION_DISTANCE_FACTOR: f32 = 0.6;

/// Padding above the first card in the scrollable stack.
pub const STACK_TOP_PADDING: f32 = 20.0;

/// Per-card layout inputs.
#[derive(Debug, Clone, Copy)]
pub struct CardContext {
    pub index: usize,
    pub mode: ViewMode,
    pub tapped: bool,
    /// Whether the staged reveal has settled this card (pinched view only).
    pub settled: bool,
    /// Content top relative to the viewport top; at or below zero once the
    /// user has scrolled down.
    pub scroll_offset: f32,
    pub viewport_height: f32,
}

/// Visual transform of one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub vertical_offset: f32,
    pub rotation_degrees: f32,
    pub top_padding: f32,
    pub bottom_padding: f32,
    pub z_order: usize,
}

/// Stack spacing for the given mode. The pinched value is configurable; the
/// normal value is fixed.
#[must_use]
pub fn stack_spacing(mode: ViewMode, pinched_spacing: f32) -> f32 {
    match mode {
        ViewMode::Normal => NORMAL_STACK_SPACING,
        ViewMode::Pinched => pinched_spacing,
    }
}

/// Computes the visual transform for one card.
#[must_use]
pub fn card_transform(ctx: &CardContext) -> CardTransform {
    let base_offset = ctx.index as f32 * CARD_STACK_STEP;
    let vertical_offset = if ctx.mode == ViewMode::Pinched && ctx.settled {
        base_offset + SETTLED_DROP
    } else {
        base_offset
    };

    let rotation_degrees = match ctx.mode {
        ViewMode::Pinched => 0.0,
        ViewMode::Normal if ctx.tapped => 0.0,
        ViewMode::Normal => {
            rotation_for_position(ctx.index, ctx.scroll_offset, ctx.viewport_height)
        }
    };

    let (top_padding, bottom_padding) = if ctx.tapped && ctx.mode == ViewMode::Normal {
        (TAPPED_TOP_PADDING, TAPPED_BOTTOM_PADDING)
    } else {
        (0.0, 0.0)
    };

    CardTransform {
        vertical_offset,
        rotation_degrees,
        top_padding,
        bottom_padding,
        z_order: ctx.index,
    }
}

/// Interpolated rotation for an untapped card in the normal view.
///
/// The card's on-screen position is its base stack position shifted by the
/// scroll offset; its distance past the top reference is normalized against
/// `ROTATION_DISTANCE_FACTOR` of the viewport height and clamped to [0, 1],
/// then mapped linearly from −5° to −40°.
#[must_use]
pub fn rotation_for_position(index: usize, scroll_offset: f32, viewport_height: f32) -> f32 {
    let base_position = index as f32 * (CARD_HEIGHT + NORMAL_STACK_SPACING);
    let current_position = base_position + scroll_offset;
    let distance_from_top = current_position - ROTATION_TOP_REFERENCE;

    let max_distance = (viewport_height * ROTATION_DISTANCE_FACTOR).max(f32::EPSILON);
    let normalized = (distance_from_top / max_distance).clamp(0.0, 1.0);

    TOP_ROTATION_DEGREES + normalized * (BOTTOM_ROTATION_DEGREES - TOP_ROTATION_DEGREES)
}

/// Resolves the absolute Y position of each card in the scrollable content.
///
/// Cards flow top to bottom through `CARD_HEIGHT + spacing` (negative
/// spacing overlaps them) plus any inserted tap padding; the per-card
/// vertical offset shifts the rendered position without affecting the flow
/// of later cards, matching offset semantics in the original layout system.
#[must_use]
pub fn stack_positions(transforms: &[CardTransform], spacing: f32) -> Vec<f32> {
    let mut positions = Vec::with_capacity(transforms.len());
    let mut flow_y = STACK_TOP_PADDING;

    for (i, transform) in transforms.iter().enumerate() {
        flow_y += transform.top_padding;
        positions.push(flow_y + transform.vertical_offset);
        flow_y += CARD_HEIGHT + transform.bottom_padding;
        if i + 1 < transforms.len() {
            flow_y += spacing;
        }
    }

    positions
}

/// Total content height required by the stack, including settled drops.
#[must_use]
pub fn content_height(transforms: &[CardTransform], spacing: f32) -> f32 {
    let positions = stack_positions(transforms, spacing);
    positions
        .iter()
        .fold(STACK_TOP_PADDING, |acc, &y| acc.max(y + CARD_HEIGHT))
}

//! Visual state projection: thumb position in, colors and icon scale out.

use crate::style::ColorSet;
use iconswitch_core::{lerp_color, Color};
use serde::{Deserialize, Serialize};

/// How much the icons shrink with the thumb halfway across.
pub const ICON_SHRINK_AT_CENTER: f32 = 0.3;

/// Everything the renderer needs that depends on thumb position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwitchVisuals {
    /// Left icon tint
    pub left_tint: Color,
    /// Right icon tint
    pub right_tint: Color,
    /// Thumb fill
    pub thumb_color: Color,
    /// Left icon scale (both axes)
    pub left_scale: f32,
    /// Right icon scale (both axes)
    pub right_scale: f32,
}

/// Project a thumb position onto visuals.
///
/// Overshoot outside [0, 1] is ignored: the position is clamped first.
#[must_use]
pub fn project(colors: &ColorSet, position: f32) -> SwitchVisuals {
    let p = if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    };

    let closeness_to_center = 1.0 - (p - 0.5).abs() / 0.5;
    let icon_scale = ICON_SHRINK_AT_CENTER.mul_add(-closeness_to_center, 1.0);

    SwitchVisuals {
        left_tint: lerp_color(p, colors.active_tint_left, colors.inactive_tint_left),
        right_tint: lerp_color(p, colors.inactive_tint_right, colors.active_tint_right),
        thumb_color: lerp_color(p, colors.thumb_color_left, colors.thumb_color_right),
        left_scale: icon_scale,
        right_scale: icon_scale,
    }
}

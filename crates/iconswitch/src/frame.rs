//! Snapshot of everything a renderer needs for one frame.

use crate::visuals::SwitchVisuals;
use iconswitch_core::{Color, PillGeometry, Point, Rect};
use serde::{Deserialize, Serialize};

/// Render-ready state of a switch.
///
/// Rects are in host coordinates: the centering translation is already
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwitchFrame {
    /// Offset of the switch body inside the measured box
    pub translation: Point,
    /// Thumb left edge in switch coordinates
    pub thumb_left: f32,
    /// Fractional thumb position, unclamped
    pub position: f32,
    /// Thumb bounds
    pub thumb_rect: Rect,
    /// Left icon bounds before scaling
    pub left_icon_rect: Rect,
    /// Right icon bounds before scaling
    pub right_icon_rect: Rect,
    /// Position-derived colors and scales
    pub visuals: SwitchVisuals,
    /// Dimensions handed to the background pill
    pub pill: PillGeometry,
    /// Pill fill
    pub background: Color,
    /// Checked state at the time of the snapshot
    pub checked: bool,
}

impl SwitchFrame {
    /// Thumb center in host coordinates.
    #[must_use]
    pub fn thumb_center(&self) -> Point {
        self.thumb_rect.center()
    }

    /// Thumb radius.
    #[must_use]
    pub fn thumb_radius(&self) -> f32 {
        self.thumb_rect.width / 2.0
    }
}

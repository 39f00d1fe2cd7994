//! Geometry engine: every layout constant of the switch derived from the
//! icon size.

use crate::style::Side;
use iconswitch_core::{Rect, Size, SwitchError, MAX_THUMB_TRAVEL_PX};
use serde::{Deserialize, Serialize};

/// Icon size used when the style does not specify one.
pub const DEFAULT_ICON_SIZE_DP: f32 = 18.0;

/// Icon sizes below this are raised to it.
pub const MIN_ICON_SIZE_DP: f32 = 12.0;

/// Derived layout of a switch, in integer pixels.
///
/// Immutable; a new value is computed whenever the icon size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchGeometry {
    /// Effective icon size (never below `min_icon_size`)
    pub icon_size: i32,
    /// Minimum icon size it was computed with
    pub min_icon_size: i32,
    /// Width of the switch body
    pub switch_width: i32,
    /// Height of the switch body
    pub switch_height: i32,
    /// Horizontal inset of each icon from its end
    pub icon_offset: i32,
    /// Icon top edge
    pub icon_top: i32,
    /// Icon bottom edge
    pub icon_bottom: i32,
    /// Thumb diameter
    pub thumb_diameter: i32,
    /// Thumb left edge with the left side selected
    pub thumb_start_left: i32,
    /// Thumb left edge with the right side selected
    pub thumb_end_left: i32,
    /// `thumb_end_left - thumb_start_left`, always positive
    pub thumb_travel: i32,
}

/// Compute the switch geometry for an icon size.
///
/// # Errors
///
/// Returns [`SwitchError::InvalidConfiguration`] when the resulting thumb
/// travel is not positive or exceeds [`MAX_THUMB_TRAVEL_PX`].
pub fn compute_geometry(icon_size: i32, min_icon_size: i32) -> Result<SwitchGeometry, SwitchError> {
    // Widened so oversized icons are reported instead of overflowing.
    let size = i64::from(icon_size.max(min_icon_size));

    let switch_width = size * 4;
    let switch_height = size * 2;

    let icon_offset = (size as f64 * 0.6).round() as i64;
    let icon_top = (switch_height - size) / 2;
    let thumb_radius = switch_height / 2;
    let icon_half = size / 2;
    let thumb_start_left = icon_offset + icon_half - thumb_radius;
    let thumb_end_left = switch_width - icon_offset - icon_half - thumb_radius;
    let thumb_travel = thumb_end_left - thumb_start_left;

    if thumb_travel <= 0 || thumb_travel > i64::from(MAX_THUMB_TRAVEL_PX) {
        return Err(SwitchError::InvalidConfiguration {
            icon_size,
            min_icon_size,
            travel: i32::try_from(thumb_travel).unwrap_or(i32::MAX),
        });
    }

    // Travel is bounded, so every value below fits comfortably in i32.
    let narrow = |v: i64| v as i32;
    Ok(SwitchGeometry {
        icon_size: narrow(size),
        min_icon_size,
        switch_width: narrow(switch_width),
        switch_height: narrow(switch_height),
        icon_offset: narrow(icon_offset),
        icon_top: narrow(icon_top),
        icon_bottom: narrow(icon_top + size),
        thumb_diameter: narrow(switch_height),
        thumb_start_left: narrow(thumb_start_left),
        thumb_end_left: narrow(thumb_end_left),
        thumb_travel: narrow(thumb_travel),
    })
}

impl SwitchGeometry {
    /// Space reserved on each side for the thumb to overshoot while settling.
    #[must_use]
    pub fn overshoot_padding(&self) -> i32 {
        (self.thumb_diameter as f32 * 0.1).round() as i32
    }

    /// Size the switch asks the host for.
    #[must_use]
    pub fn desired_size(&self) -> Size {
        Size::new(
            (self.switch_width + self.overshoot_padding() * 2) as f32,
            self.switch_height as f32,
        )
    }

    /// Thumb left edge at one end of the track.
    #[must_use]
    pub const fn endpoint_left(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.thumb_start_left,
            Side::Right => self.thumb_end_left,
        }
    }

    /// Thumb left edge for a fractional position.
    #[must_use]
    pub fn left_for_position(&self, position: f32) -> f32 {
        (self.thumb_travel as f32).mul_add(position, self.thumb_start_left as f32)
    }

    /// Fractional position for a thumb left edge.
    #[must_use]
    pub fn position_for_left(&self, left: f32) -> f32 {
        (left - self.thumb_start_left as f32) / self.thumb_travel as f32
    }

    /// Clamp a thumb left edge to the travel range.
    #[must_use]
    pub fn clamp_left(&self, left: f32) -> f32 {
        left.clamp(self.thumb_start_left as f32, self.thumb_end_left as f32)
    }

    /// Bounds of the left icon in switch coordinates.
    #[must_use]
    pub fn left_icon_rect(&self) -> Rect {
        Rect::new(
            self.icon_offset as f32,
            self.icon_top as f32,
            self.icon_size as f32,
            self.icon_size as f32,
        )
    }

    /// Bounds of the right icon in switch coordinates.
    #[must_use]
    pub fn right_icon_rect(&self) -> Rect {
        let left = self.switch_width - self.icon_offset - self.icon_size;
        Rect::new(
            left as f32,
            self.icon_top as f32,
            self.icon_size as f32,
            self.icon_size as f32,
        )
    }

    /// Bounds of the thumb for a given left edge.
    #[must_use]
    pub fn thumb_rect(&self, left: f32) -> Rect {
        let diameter = self.thumb_diameter as f32;
        Rect::new(left, 0.0, diameter, diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_geometry_for_default_icon() {
        let g = compute_geometry(18, 12).unwrap();
        assert_eq!(g.icon_size, 18);
        assert_eq!(g.switch_width, 72);
        assert_eq!(g.switch_height, 36);
        assert_eq!(g.thumb_diameter, 36);
        assert_eq!(g.icon_offset, 11);
        assert_eq!(g.icon_top, 9);
        assert_eq!(g.icon_bottom, 27);
        assert_eq!(g.thumb_start_left, 2);
        assert_eq!(g.thumb_end_left, 34);
        assert_eq!(g.thumb_travel, 32);
    }

    #[test]
    fn test_icon_size_raised_to_minimum() {
        let g = compute_geometry(4, 12).unwrap();
        assert_eq!(g.icon_size, 12);
        assert_eq!(g.min_icon_size, 12);
        assert_eq!(g.switch_width, 48);
    }

    #[test]
    fn test_zero_icon_size_is_invalid() {
        let err = compute_geometry(0, 0).unwrap_err();
        assert_eq!(
            err,
            SwitchError::InvalidConfiguration {
                icon_size: 0,
                min_icon_size: 0,
                travel: 0
            }
        );
    }

    #[test]
    fn test_negative_icon_size_is_invalid() {
        assert!(compute_geometry(-5, -10).is_err());
    }

    #[test]
    fn test_huge_icon_size_is_invalid() {
        let err = compute_geometry(600_000_000, 12).unwrap_err();
        assert!(matches!(
            err,
            SwitchError::InvalidConfiguration { icon_size: 600_000_000, travel, .. } if travel > MAX_THUMB_TRAVEL_PX
        ));
        assert!(compute_geometry(i32::MAX, i32::MAX).is_err());
    }

    #[test]
    fn test_largest_icon_size_fits() {
        // travel is 1.8 x size for even sizes divisible by 5
        let g = compute_geometry(582_540, 1).unwrap();
        assert!(g.thumb_travel <= MAX_THUMB_TRAVEL_PX);
        assert!(g.desired_size().width < i32::MAX as f32);
        assert!(compute_geometry(582_550, 1).is_err());
    }

    #[test]
    fn test_smallest_valid_icon() {
        let g = compute_geometry(1, 1).unwrap();
        assert!(g.thumb_travel > 0);
    }

    #[test]
    fn test_desired_size_includes_overshoot() {
        let g = compute_geometry(18, 12).unwrap();
        assert_eq!(g.overshoot_padding(), 4);
        assert_eq!(g.desired_size(), Size::new(80.0, 36.0));
    }

    #[test]
    fn test_position_left_conversion() {
        let g = compute_geometry(18, 12).unwrap();
        assert_eq!(g.left_for_position(0.0), 2.0);
        assert_eq!(g.left_for_position(1.0), 34.0);
        assert_eq!(g.left_for_position(0.5), 18.0);
        assert_eq!(g.position_for_left(34.0), 1.0);
        assert_eq!(g.position_for_left(10.0), 0.25);
        assert_eq!(g.endpoint_left(Side::Left), 2);
        assert_eq!(g.endpoint_left(Side::Right), 34);
    }

    #[test]
    fn test_clamp_left() {
        let g = compute_geometry(18, 12).unwrap();
        assert_eq!(g.clamp_left(-50.0), 2.0);
        assert_eq!(g.clamp_left(500.0), 34.0);
        assert_eq!(g.clamp_left(20.0), 20.0);
    }

    #[test]
    fn test_child_rects() {
        let g = compute_geometry(18, 12).unwrap();
        assert_eq!(g.left_icon_rect(), Rect::new(11.0, 9.0, 18.0, 18.0));
        assert_eq!(g.right_icon_rect(), Rect::new(43.0, 9.0, 18.0, 18.0));
        assert_eq!(g.thumb_rect(2.0), Rect::new(2.0, 0.0, 36.0, 36.0));
    }

    #[test]
    fn test_icons_are_centered_under_thumb_endpoints() {
        let g = compute_geometry(24, 12).unwrap();
        let radius = g.thumb_diameter / 2;
        let left_center = g.left_icon_rect().center().x;
        let right_center = g.right_icon_rect().center().x;
        assert!((left_center - (g.thumb_start_left + radius) as f32).abs() <= 1.0);
        assert!((right_center - (g.thumb_end_left + radius) as f32).abs() <= 1.0);
    }

    proptest! {
        #[test]
        fn prop_positive_icon_sizes_are_valid(icon in 1i32..2000, min in 1i32..100) {
            let g = compute_geometry(icon, min).unwrap();
            prop_assert!(g.thumb_travel > 0);
            prop_assert_eq!(g.thumb_travel, g.thumb_end_left - g.thumb_start_left);
            prop_assert!(g.icon_size >= min);
            prop_assert!(g.icon_bottom <= g.switch_height);
        }

        #[test]
        fn prop_position_roundtrip(icon in 1i32..500, p in 0.0f32..=1.0) {
            let g = compute_geometry(icon, 1).unwrap();
            let back = g.position_for_left(g.left_for_position(p));
            prop_assert!((back - p).abs() < 1e-4);
        }
    }
}

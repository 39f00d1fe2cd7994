//! Error types for iconswitch-core.

use thiserror::Error;

/// Largest thumb travel a switch may have; keeps every derived coordinate
/// well inside `i32` and exactly representable as `f32`.
pub const MAX_THUMB_TRAVEL_PX: i32 = 1 << 20;

/// Errors raised while configuring a switch.
///
/// Gesture handling never fails; only setup can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwitchError {
    /// The icon size leaves no room for the thumb to travel, or is too
    /// large to lay out.
    #[error(
        "invalid configuration: icon size {icon_size}px (min {min_icon_size}px) gives thumb travel {travel}px, expected 1..={}px",
        MAX_THUMB_TRAVEL_PX
    )]
    InvalidConfiguration {
        /// Requested icon size in pixels
        icon_size: i32,
        /// Minimum icon size in pixels
        min_icon_size: i32,
        /// Resulting thumb travel distance, saturated to `i32`
        travel: i32,
    },
}

//! Core types for the IconSwitch toggle.
//!
//! This crate provides the leaf building blocks the switch is assembled from:
//! - Color representation and interpolation: [`Color`], [`lerp_color`]
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Host sizing modes: [`MeasureSpec`]
//! - Pointer input: [`PointerEvent`], [`VelocityTracker`]
//! - Settle physics: [`Spring`]
//! - Rendering seam: [`Canvas`]

mod animation;
mod canvas;
mod color;
mod constraints;
mod error;
mod event;
mod geometry;
mod velocity;

pub use animation::{Spring, SpringConfig};
pub use canvas::{Canvas, DrawCommand, IconSlot, PillGeometry, RecordingCanvas};
pub use color::{lerp_color, Color, ColorParseError};
pub use constraints::MeasureSpec;
pub use error::{SwitchError, MAX_THUMB_TRAVEL_PX};
pub use event::{PointerEvent, PointerId, PointerKind};
pub use geometry::{Point, Rect, Size};
pub use velocity::{VelocityTracker, VELOCITY_HORIZON_MS};

/// Convert density-independent pixels to pixels, rounding to nearest.
#[must_use]
pub fn dp_to_px(dp: f32, density: f32) -> i32 {
    (density * dp).round() as i32
}

//! Pointer input events.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    /// Pointer pressed
    Down,
    /// Pointer moved while pressed
    Move,
    /// Pointer released
    Up,
    /// Gesture cancelled by the host (e.g., a parent took over the stream)
    Cancel,
}

/// A single pointer event in switch-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Event phase
    pub kind: PointerKind,
    /// Pointer that produced the event
    #[serde(default)]
    pub pointer_id: PointerId,
    /// Position
    pub position: Point,
    /// Event time in milliseconds, monotonic within a gesture
    pub timestamp_ms: u64,
}

impl PointerEvent {
    /// Create an event for the default pointer.
    #[must_use]
    pub const fn new(kind: PointerKind, x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self {
            kind,
            pointer_id: PointerId(0),
            position: Point::new(x, y),
            timestamp_ms,
        }
    }

    /// Pointer down at (x, y).
    #[must_use]
    pub const fn down(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerKind::Down, x, y, timestamp_ms)
    }

    /// Pointer moved to (x, y).
    #[must_use]
    pub const fn moved(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerKind::Move, x, y, timestamp_ms)
    }

    /// Pointer released at (x, y).
    #[must_use]
    pub const fn up(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerKind::Up, x, y, timestamp_ms)
    }

    /// Gesture cancelled.
    #[must_use]
    pub const fn cancel(timestamp_ms: u64) -> Self {
        Self::new(PointerKind::Cancel, 0.0, 0.0, timestamp_ms)
    }

    /// Use a specific pointer id.
    #[must_use]
    pub const fn with_pointer(mut self, pointer_id: PointerId) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    /// Shift the event position, e.g. from host to switch-local coordinates.
    #[must_use]
    pub fn translated(mut self, dx: f32, dy: f32) -> Self {
        self.position = Point::new(self.position.x + dx, self.position.y + dy);
        self
    }
}

//! Rendering seam: the switch paints through [`Canvas`] and never draws
//! pixels itself.

use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Which of the two icons a draw call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconSlot {
    /// Icon on the left end of the track
    Left,
    /// Icon on the right end of the track
    Right,
}

/// Dimensions the background pill is told to render at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillGeometry {
    /// Icon size in pixels
    pub icon_size: f32,
    /// Total measured width
    pub width: f32,
    /// Total measured height
    pub height: f32,
}

/// Drawing surface provided by the host renderer.
pub trait Canvas {
    /// Fill the rounded background pill.
    fn fill_pill(&mut self, pill: PillGeometry, color: Color);

    /// Draw an icon inside `rect`, tinted and scaled about its center.
    fn draw_icon(&mut self, slot: IconSlot, rect: Rect, tint: Color, scale: f32);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
}

/// A recorded draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Background pill
    Pill {
        /// Pill dimensions
        pill: PillGeometry,
        /// Fill color
        color: Color,
    },
    /// Tinted icon
    Icon {
        /// Which icon
        slot: IconSlot,
        /// Unscaled bounds
        rect: Rect,
        /// Tint color
        tint: Color,
        /// Uniform scale
        scale: f32,
    },
    /// Filled circle
    Circle {
        /// Center
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        color: Color,
    },
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Useful for tests and for shipping draw lists to another process.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_pill(&mut self, pill: PillGeometry, color: Color) {
        self.commands.push(DrawCommand::Pill { pill, color });
    }

    fn draw_icon(&mut self, slot: IconSlot, rect: Rect, tint: Color, scale: f32) {
        self.commands.push(DrawCommand::Icon {
            slot,
            rect,
            tint,
            scale,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}

//! The icon switch widget: checked state, listener and the glue between
//! pointer input, the drag controller and the visual projection.

use crate::drag::{DragController, DragOutcome, GestureConfig, GestureState};
use crate::frame::SwitchFrame;
use crate::layout::{compute_geometry, SwitchGeometry};
use crate::style::{ColorSet, Side, SwitchStyle};
use crate::visuals::{project, SwitchVisuals};
use iconswitch_core::{
    Canvas, IconSlot, MeasureSpec, PillGeometry, Point, PointerEvent, Size, SwitchError,
};
use std::fmt;
use tracing::debug;

/// Receives checked-state changes.
pub trait CheckedListener {
    /// Called with the new checked value, once per actual change.
    fn on_check_changed(&mut self, checked: bool);
}

impl<F: FnMut(bool)> CheckedListener for F {
    fn on_check_changed(&mut self, checked: bool) {
        self(checked);
    }
}

/// What a pointer event did to the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The switch consumed the event
    pub handled: bool,
    /// The host should schedule a frame
    pub needs_frame: bool,
    /// New checked value, when the event changed it
    pub changed: Option<bool>,
}

/// Two-state switch with a draggable thumb between two icons.
///
/// Checked means the right side is selected.
pub struct IconSwitch {
    style: SwitchStyle,
    colors: ColorSet,
    geometry: SwitchGeometry,
    drag: DragController,
    checked: Side,
    visuals: SwitchVisuals,
    listener: Option<Box<dyn CheckedListener>>,
    specs: (MeasureSpec, MeasureSpec),
    measured: Size,
    translation: Point,
}

impl IconSwitch {
    /// Create a switch with gesture thresholds for the style's density.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::InvalidConfiguration`] if the icon size
    /// leaves the thumb no room to travel.
    pub fn new(style: SwitchStyle) -> Result<Self, SwitchError> {
        let config = GestureConfig::for_density(style.density);
        Self::with_gesture_config(style, config)
    }

    /// Create a switch with explicit gesture thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::InvalidConfiguration`] if the icon size
    /// leaves the thumb no room to travel.
    pub fn with_gesture_config(
        style: SwitchStyle,
        config: GestureConfig,
    ) -> Result<Self, SwitchError> {
        let geometry = compute_geometry(style.icon_size_px(), style.min_icon_size_px())?;
        let checked = style.default_selection;
        let colors = style.color_set();
        let drag = DragController::new(config, geometry, checked);
        let visuals = project(&colors, drag.position());

        let mut switch = Self {
            style,
            colors,
            geometry,
            drag,
            checked,
            visuals,
            listener: None,
            specs: (MeasureSpec::Unspecified, MeasureSpec::Unspecified),
            measured: Size::ZERO,
            translation: Point::ORIGIN,
        };
        switch.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        debug!(?checked, width = geometry.switch_width, height = geometry.switch_height, "switch created");
        Ok(switch)
    }

    /// Install the listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl CheckedListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Whether the right side is selected.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked == Side::Right
    }

    /// Selected side.
    #[must_use]
    pub const fn selected_side(&self) -> Side {
        self.checked
    }

    /// Select a side. No-op when already selected; otherwise behaves like a
    /// tap, including the listener call.
    pub fn set_checked(&mut self, checked: bool) -> bool {
        if self.is_checked() == checked {
            return self.drag.needs_frame();
        }
        self.flip()
    }

    /// Flip the checked state. Returns whether frames are needed.
    pub fn toggle(&mut self) -> bool {
        self.flip()
    }

    fn flip(&mut self) -> bool {
        let target = self.checked.opposite();
        let needs_frame = self.drag.settle_to(target, 0.0);
        self.commit(target);
        self.refresh_visuals();
        needs_frame
    }

    fn commit(&mut self, side: Side) -> Option<bool> {
        if side == self.checked {
            return None;
        }
        self.checked = side;
        let checked = self.is_checked();
        debug!(checked, "checked state changed");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_check_changed(checked);
        }
        Some(checked)
    }

    fn refresh_visuals(&mut self) {
        self.visuals = project(&self.colors, self.drag.position());
    }

    /// Change the icon size in pixels.
    ///
    /// Keeps the fractional thumb position and re-runs the last measure. On
    /// error the switch is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::InvalidConfiguration`] if the new size leaves
    /// the thumb no room to travel.
    pub fn set_icon_size(&mut self, icon_size: i32) -> Result<(), SwitchError> {
        let geometry = compute_geometry(icon_size, self.style.min_icon_size_px())?;
        self.style.icon_size = Some(icon_size);
        self.geometry = geometry;
        self.drag.set_geometry(geometry);
        let (width, height) = self.specs;
        self.measure(width, height);
        self.refresh_visuals();
        debug!(icon_size = geometry.icon_size, width = geometry.switch_width, "geometry recomputed");
        Ok(())
    }

    /// Resolve the measured size and center the switch body inside it.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let desired = self.geometry.desired_size();
        let size = Size::new(width.resolve(desired.width), height.resolve(desired.height));

        let measured_width = size.width as i32;
        let measured_height = size.height as i32;
        self.translation = Point::new(
            (measured_width / 2 - self.geometry.switch_width / 2) as f32,
            (measured_height / 2 - self.geometry.switch_height / 2) as f32,
        );
        self.specs = (width, height);
        self.measured = size;
        size
    }

    /// Feed one pointer event in host coordinates.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> EventResponse {
        let local = event.translated(-self.translation.x, -self.translation.y);
        let outcome = self.drag.handle(&local, self.checked);

        let changed = match outcome {
            DragOutcome::Tap { target } | DragOutcome::Release { target, .. } => {
                self.commit(target)
            }
            _ => None,
        };
        if !matches!(outcome, DragOutcome::None | DragOutcome::Captured) {
            self.refresh_visuals();
        }

        EventResponse {
            handled: outcome != DragOutcome::None,
            needs_frame: self.drag.needs_frame(),
            changed,
        }
    }

    /// Advance the settle animation. Returns whether another frame is
    /// needed.
    pub fn on_frame(&mut self, timestamp_ms: u64) -> bool {
        let tick = self.drag.on_frame(timestamp_ms);
        if tick.moved {
            self.refresh_visuals();
        }
        tick.needs_frame
    }

    /// Whether a settle is running.
    #[must_use]
    pub const fn needs_frame(&self) -> bool {
        self.drag.needs_frame()
    }

    /// Style the switch was built from, with any icon size change applied.
    #[must_use]
    pub const fn style(&self) -> &SwitchStyle {
        &self.style
    }

    /// Current geometry.
    #[must_use]
    pub const fn geometry(&self) -> &SwitchGeometry {
        &self.geometry
    }

    /// Current gesture state.
    #[must_use]
    pub const fn gesture_state(&self) -> GestureState {
        self.drag.state()
    }

    /// Fractional thumb position.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.drag.position()
    }

    /// Thumb left edge in switch coordinates.
    #[must_use]
    pub const fn thumb_left(&self) -> f32 {
        self.drag.thumb_left()
    }

    /// Last projected visuals.
    #[must_use]
    pub const fn visuals(&self) -> &SwitchVisuals {
        &self.visuals
    }

    /// Size from the last measure.
    #[must_use]
    pub const fn measured_size(&self) -> Size {
        self.measured
    }

    /// Offset of the switch body inside the measured box.
    #[must_use]
    pub const fn translation(&self) -> Point {
        self.translation
    }

    /// Render-ready snapshot.
    #[must_use]
    pub fn frame(&self) -> SwitchFrame {
        let t = self.translation;
        let thumb_left = self.drag.thumb_left();
        SwitchFrame {
            translation: t,
            thumb_left,
            position: self.drag.position(),
            thumb_rect: self.geometry.thumb_rect(thumb_left).offset(t),
            left_icon_rect: self.geometry.left_icon_rect().offset(t),
            right_icon_rect: self.geometry.right_icon_rect().offset(t),
            visuals: self.visuals,
            pill: PillGeometry {
                icon_size: self.geometry.icon_size as f32,
                width: self.measured.width,
                height: self.measured.height,
            },
            background: self.style.background_color,
            checked: self.is_checked(),
        }
    }

    /// Paint background, thumb and both icons, in that order.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        let frame = self.frame();
        let v = frame.visuals;
        canvas.fill_pill(frame.pill, frame.background);
        canvas.fill_circle(frame.thumb_center(), frame.thumb_radius(), v.thumb_color);
        canvas.draw_icon(IconSlot::Left, frame.left_icon_rect, v.left_tint, v.left_scale);
        canvas.draw_icon(IconSlot::Right, frame.right_icon_rect, v.right_tint, v.right_scale);
    }
}

impl fmt::Debug for IconSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconSwitch")
            .field("checked", &self.is_checked())
            .field("position", &self.drag.position())
            .field("state", &self.drag.state())
            .field("geometry", &self.geometry)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

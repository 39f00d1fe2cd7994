//! Drag controller: the gesture state machine that turns pointer events into
//! thumb motion.
//!
//! ```text
//!            down                 |dx| >= slop
//!   Idle ──────────▶ Capturing ──────────────▶ Dragging
//!    ▲                  │  up                     │ up
//!    │  at rest         ▼                         ▼
//!    └──────────── Settling ◀─────────────────────┘
//! ```
//!
//! Cancel returns to `Idle` from any state. A down while settling aborts the
//! settle and captures the thumb where it stands.
//!
//! Release classification is ordered: tap first, then fling, then the
//! nearest side. A short flick that stays under the fling velocity is a tap.

use crate::layout::SwitchGeometry;
use crate::style::Side;
use iconswitch_core::{
    dp_to_px, Point, PointerEvent, PointerId, PointerKind, Spring, SpringConfig, VelocityTracker,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Velocity is reported in pixels per this many milliseconds.
pub const VELOCITY_UNITS_MS: f32 = 1000.0;

/// Platform-typical touch slop.
pub const DEFAULT_TOUCH_SLOP_DP: f32 = 8.0;

/// Platform-typical minimum fling velocity, per second.
pub const DEFAULT_MIN_FLING_VELOCITY_DP: f32 = 50.0;

/// Cap on the velocity handed to the settle spring, per second.
pub const DEFAULT_MAX_SETTLE_VELOCITY_DP: f32 = 2000.0;

/// Frame interval assumed for the first tick of a settle.
const NOMINAL_FRAME_MS: u64 = 16;

/// Longest time step fed to the spring in one tick.
const MAX_FRAME_MS: u64 = 50;

/// Settle completes once within this many pixels (and px/s) of the target.
const SETTLE_PRECISION_PX: f64 = 0.5;

/// Thresholds supplied by the host platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Pointer travel (px) before a press stops being a tap and starts a drag
    pub touch_slop: f32,
    /// Release speed (px/s) at or above which the gesture is a fling
    pub min_fling_velocity: f32,
    /// Largest speed (px/s) the settle animation starts with
    pub max_settle_velocity: f32,
    /// Settle spring
    pub spring: SpringConfig,
}

impl GestureConfig {
    /// Standard thresholds scaled to a display density.
    #[must_use]
    pub fn for_density(density: f32) -> Self {
        Self {
            touch_slop: dp_to_px(DEFAULT_TOUCH_SLOP_DP, density) as f32,
            min_fling_velocity: dp_to_px(DEFAULT_MIN_FLING_VELOCITY_DP, density) as f32,
            max_settle_velocity: dp_to_px(DEFAULT_MAX_SETTLE_VELOCITY_DP, density) as f32,
            spring: SpringConfig::SETTLE,
        }
    }

    /// Set the touch slop.
    #[must_use]
    pub const fn touch_slop(mut self, px: f32) -> Self {
        self.touch_slop = px;
        self
    }

    /// Set the minimum fling velocity.
    #[must_use]
    pub const fn min_fling_velocity(mut self, px_per_second: f32) -> Self {
        self.min_fling_velocity = px_per_second;
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::for_density(1.0)
    }
}

/// Gesture phase of the thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GestureState {
    /// Nothing in progress
    #[default]
    Idle,
    /// Pointer down, not yet past the slop horizontally
    Capturing,
    /// Thumb follows the pointer
    Dragging,
    /// Thumb animating to an endpoint
    Settling,
}

/// How a release picked its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReleaseKind {
    /// Velocity direction decided
    Fling,
    /// Closest endpoint decided
    Nearest,
}

/// Observable result of one pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Nothing observable changed
    None,
    /// A new gesture captured the thumb
    Captured,
    /// The thumb moved; visuals must be recomputed
    Moved,
    /// A tap; the thumb now settles to `target`, the opposite of the
    /// checked side
    Tap {
        /// Endpoint the thumb settles to
        target: Side,
    },
    /// A drag or fling ended; the thumb now settles to `target`
    Release {
        /// Endpoint the thumb settles to
        target: Side,
        /// Horizontal release velocity (px/s)
        velocity: f32,
        /// Which rule chose the target
        kind: ReleaseKind,
    },
    /// The gesture was cancelled
    Cancelled,
}

/// Result of a frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTick {
    /// The thumb moved during this tick
    pub moved: bool,
    /// Another frame is needed
    pub needs_frame: bool,
}

/// Per-gesture bookkeeping, dropped on up and cancel.
#[derive(Debug)]
struct ActiveGesture {
    pointer_id: PointerId,
    down: Point,
    left_at_down: f32,
    is_click: bool,
    tracker: VelocityTracker,
}

#[derive(Debug)]
struct Settle {
    target: Side,
    spring: Spring,
    last_frame_ms: Option<u64>,
}

/// Owns thumb position and gesture state.
#[derive(Debug)]
pub struct DragController {
    config: GestureConfig,
    geometry: SwitchGeometry,
    state: GestureState,
    thumb_left: f32,
    gesture: Option<ActiveGesture>,
    settle: Option<Settle>,
}

impl DragController {
    /// Create a controller with the thumb resting at `side`.
    #[must_use]
    pub fn new(config: GestureConfig, geometry: SwitchGeometry, side: Side) -> Self {
        Self {
            config,
            geometry,
            state: GestureState::Idle,
            thumb_left: geometry.endpoint_left(side) as f32,
            gesture: None,
            settle: None,
        }
    }

    /// Gesture thresholds.
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Current gesture state.
    #[must_use]
    pub const fn state(&self) -> GestureState {
        self.state
    }

    /// Current thumb left edge in switch coordinates.
    #[must_use]
    pub const fn thumb_left(&self) -> f32 {
        self.thumb_left
    }

    /// Current thumb position; 0.0 is left, 1.0 is right.
    ///
    /// May leave [0, 1] briefly while a settle overshoots.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.geometry.position_for_left(self.thumb_left)
    }

    /// Endpoint the running settle is heading for.
    #[must_use]
    pub fn settle_target(&self) -> Option<Side> {
        self.settle.as_ref().map(|s| s.target)
    }

    /// Whether the host should schedule another frame.
    #[must_use]
    pub const fn needs_frame(&self) -> bool {
        self.settle.is_some()
    }

    /// Swap in new geometry, keeping the fractional position.
    ///
    /// An active drag keeps tracking from its rescaled anchor; a running
    /// settle restarts toward the same side from the rescaled position.
    pub fn set_geometry(&mut self, geometry: SwitchGeometry) {
        let old = self.geometry;
        let position = self.position();
        self.geometry = geometry;
        self.thumb_left = geometry.left_for_position(position);

        if let Some(gesture) = self.gesture.as_mut() {
            let anchor = old.position_for_left(gesture.left_at_down);
            gesture.left_at_down = geometry.left_for_position(anchor);
        }
        if let Some(target) = self.settle_target() {
            self.settle = None;
            self.settle_to(target, 0.0);
        }
    }

    /// Dispatch one pointer event.
    ///
    /// `checked` is the side currently selected; a tap settles to its
    /// opposite.
    pub fn handle(&mut self, event: &PointerEvent, checked: Side) -> DragOutcome {
        match event.kind {
            PointerKind::Down => self.on_down(event),
            PointerKind::Move => self.on_move(event),
            PointerKind::Up => self.on_up(event, checked),
            PointerKind::Cancel => self.on_cancel(),
        }
    }

    fn on_down(&mut self, event: &PointerEvent) -> DragOutcome {
        // The thumb follows one pointer at a time; extra fingers are ignored.
        if self
            .gesture
            .as_ref()
            .is_some_and(|g| g.pointer_id != event.pointer_id)
        {
            return DragOutcome::None;
        }

        if let Some(settle) = self.settle.take() {
            debug!(side = ?settle.target, left = self.thumb_left, "settle interrupted");
        }

        let mut tracker = VelocityTracker::new();
        tracker.add_sample(event.position, event.timestamp_ms);
        self.gesture = Some(ActiveGesture {
            pointer_id: event.pointer_id,
            down: event.position,
            left_at_down: self.thumb_left,
            is_click: true,
            tracker,
        });
        self.state = GestureState::Capturing;
        trace!(x = event.position.x, y = event.position.y, "thumb captured");
        DragOutcome::Captured
    }

    fn on_move(&mut self, event: &PointerEvent) -> DragOutcome {
        let slop = self.config.touch_slop;
        let Some(gesture) = self.gesture.as_mut() else {
            return DragOutcome::None;
        };
        if gesture.pointer_id != event.pointer_id {
            return DragOutcome::None;
        }

        gesture.tracker.add_sample(event.position, event.timestamp_ms);
        if gesture.is_click && event.position.distance_squared(&gesture.down) >= slop * slop {
            gesture.is_click = false;
        }

        let dx = event.position.x - gesture.down.x;
        if self.state == GestureState::Capturing && dx.abs() >= slop {
            self.state = GestureState::Dragging;
            debug!(dx, "drag started");
        }
        if self.state != GestureState::Dragging {
            return DragOutcome::None;
        }

        let left = self.geometry.clamp_left(gesture.left_at_down + dx);
        if (left - self.thumb_left).abs() > f32::EPSILON {
            self.thumb_left = left;
            DragOutcome::Moved
        } else {
            DragOutcome::None
        }
    }

    fn on_up(&mut self, event: &PointerEvent, checked: Side) -> DragOutcome {
        let Some(gesture) = self.gesture.as_mut() else {
            return DragOutcome::None;
        };
        if gesture.pointer_id != event.pointer_id {
            return DragOutcome::None;
        }

        gesture.tracker.add_sample(event.position, event.timestamp_ms);
        let velocity = gesture.tracker.velocity(VELOCITY_UNITS_MS).x;
        let is_click = gesture.is_click;
        // The tracker lives exactly as long as the gesture.
        self.gesture = None;

        let is_fling = velocity.abs() >= self.config.min_fling_velocity;
        if is_click && !is_fling {
            let target = checked.opposite();
            debug!(?target, velocity, "tap");
            self.settle_to(target, 0.0);
            return DragOutcome::Tap { target };
        }

        let (target, kind) = if is_fling {
            let side = if velocity > 0.0 { Side::Right } else { Side::Left };
            (side, ReleaseKind::Fling)
        } else {
            let side = if self.position() > 0.5 {
                Side::Right
            } else {
                Side::Left
            };
            (side, ReleaseKind::Nearest)
        };
        debug!(?target, ?kind, velocity, position = self.position(), "release");

        let launch = if is_fling { velocity } else { 0.0 };
        self.settle_to(target, launch);
        DragOutcome::Release {
            target,
            velocity,
            kind,
        }
    }

    fn on_cancel(&mut self) -> DragOutcome {
        let had_gesture = self.gesture.take().is_some();
        let had_settle = self.settle.take().is_some();
        self.state = GestureState::Idle;
        if had_gesture || had_settle {
            debug!(left = self.thumb_left, "gesture cancelled");
        }
        DragOutcome::Cancelled
    }

    /// Start animating the thumb to `side`.
    ///
    /// `velocity` (px/s) launches the spring; it is capped by
    /// [`GestureConfig::max_settle_velocity`]. Returns whether frames are
    /// needed; a thumb already resting on the target goes straight to
    /// `Idle`.
    pub fn settle_to(&mut self, side: Side, velocity: f32) -> bool {
        self.gesture = None;
        let target = f64::from(self.geometry.endpoint_left(side));
        let launch = f64::from(velocity.clamp(
            -self.config.max_settle_velocity,
            self.config.max_settle_velocity,
        ));

        if (f64::from(self.thumb_left) - target).abs() < f64::EPSILON && launch == 0.0 {
            self.settle = None;
            self.state = GestureState::Idle;
            return false;
        }

        let pad = f64::from(self.geometry.overshoot_padding());
        let min = f64::from(self.geometry.thumb_start_left) - pad;
        let max = f64::from(self.geometry.thumb_end_left) + pad;
        let mut spring = Spring::new(f64::from(self.thumb_left))
            .with_config(self.config.spring)
            .with_precision(SETTLE_PRECISION_PX)
            .with_velocity(launch)
            .with_bounds(min, max);
        spring.set_target(target);

        debug!(?side, from = self.thumb_left, to = target, launch, "settle started");
        self.settle = Some(Settle {
            target: side,
            spring,
            last_frame_ms: None,
        });
        self.state = GestureState::Settling;
        true
    }

    /// Advance the settle animation to `timestamp_ms`.
    pub fn on_frame(&mut self, timestamp_ms: u64) -> FrameTick {
        let Some(settle) = self.settle.as_mut() else {
            return FrameTick::default();
        };

        let elapsed_ms = settle
            .last_frame_ms
            .map_or(NOMINAL_FRAME_MS, |last| timestamp_ms.saturating_sub(last))
            .min(MAX_FRAME_MS);
        settle.last_frame_ms = Some(timestamp_ms);
        if elapsed_ms == 0 {
            return FrameTick {
                moved: false,
                needs_frame: true,
            };
        }

        settle.spring.update(elapsed_ms as f64 / 1000.0);
        let left = settle.spring.value as f32;
        let moved = (left - self.thumb_left).abs() > f32::EPSILON;
        self.thumb_left = left;
        trace!(left, elapsed_ms, "settle tick");

        if settle.spring.at_rest {
            debug!(side = ?settle.target, "settled");
            self.settle = None;
            self.state = GestureState::Idle;
            return FrameTick {
                moved,
                needs_frame: false,
            };
        }

        FrameTick {
            moved,
            needs_frame: true,
        }
    }
}

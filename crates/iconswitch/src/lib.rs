//! IconSwitch: a two-state toggle with a draggable thumb sliding between two
//! icons.
//!
//! ```
//! use iconswitch::{IconSwitch, PointerEvent, SwitchStyle};
//!
//! let mut switch = IconSwitch::new(SwitchStyle::default()).unwrap();
//! switch.set_listener(|checked| println!("checked: {checked}"));
//!
//! // Tap inside the switch body (host coordinates)
//! switch.handle_pointer(&PointerEvent::down(24.0, 18.0, 0));
//! let response = switch.handle_pointer(&PointerEvent::up(24.0, 18.0, 60));
//! assert_eq!(response.changed, Some(true));
//!
//! let mut now = 60;
//! while switch.on_frame(now) {
//!     now += 16;
//! }
//! assert_eq!(switch.position(), 1.0);
//! ```

pub mod drag;
pub mod error;
pub mod frame;
pub mod layout;
pub mod style;
pub mod switch;
pub mod visuals;

pub use drag::{DragController, DragOutcome, FrameTick, GestureConfig, GestureState, ReleaseKind};
pub use error::ConfigError;
pub use frame::SwitchFrame;
pub use layout::{compute_geometry, SwitchGeometry, DEFAULT_ICON_SIZE_DP, MIN_ICON_SIZE_DP};
pub use style::{ColorSet, Side, SwitchStyle, DEFAULT_ACCENT, DEFAULT_BACKGROUND};
pub use switch::{CheckedListener, EventResponse, IconSwitch};
pub use visuals::{project, SwitchVisuals, ICON_SHRINK_AT_CENTER};

pub use iconswitch_core::{
    dp_to_px, lerp_color, Canvas, Color, ColorParseError, DrawCommand, IconSlot, MeasureSpec,
    PillGeometry, Point, PointerEvent, PointerId, PointerKind, RecordingCanvas, Rect, Size,
    SwitchError, MAX_THUMB_TRAVEL_PX,
};

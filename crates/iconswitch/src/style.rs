//! Switch styling and configuration loading.
//!
//! A [`SwitchStyle`] is the external configuration of a switch: icon size,
//! the eight colors and the initially selected side. It can be built in code
//! or loaded from YAML:
//!
//! ```yaml
//! icon_size: 48
//! icon_left: ic_sun
//! icon_right: ic_moon
//! inactive_tint_left: "#ff4081"
//! active_tint_left: "#ffffff"
//! thumb_color_left: "#ff4081"
//! thumb_color_right: "#3f51b5"
//! default_selection: right
//! ```

use crate::error::ConfigError;
use crate::layout::{DEFAULT_ICON_SIZE_DP, MIN_ICON_SIZE_DP};
use iconswitch_core::{dp_to_px, Color};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default accent used for inactive tints and the thumb.
pub const DEFAULT_ACCENT: Color = Color::rgb(0xff, 0x40, 0x81);

/// Default pill background.
pub const DEFAULT_BACKGROUND: Color = Color::rgb(0xee, 0xee, 0xee);

/// One end of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Left end; thumb position 0.0
    #[default]
    #[serde(alias = "LEFT")]
    Left,
    /// Right end; thumb position 1.0
    #[serde(alias = "RIGHT")]
    Right,
}

impl Side {
    /// The other end.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Thumb position of this end.
    #[must_use]
    pub const fn position(self) -> f32 {
        match self {
            Self::Left => 0.0,
            Self::Right => 1.0,
        }
    }

    /// Side for a checked flag; checked means the right side is selected.
    #[must_use]
    pub const fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Right
        } else {
            Self::Left
        }
    }
}

/// Colors the projector interpolates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSet {
    /// Left icon tint while the right side is selected
    pub inactive_tint_left: Color,
    /// Left icon tint while the left side is selected
    pub active_tint_left: Color,
    /// Right icon tint while the left side is selected
    pub inactive_tint_right: Color,
    /// Right icon tint while the right side is selected
    pub active_tint_right: Color,
    /// Thumb fill with the left side selected
    pub thumb_color_left: Color,
    /// Thumb fill with the right side selected
    pub thumb_color_right: Color,
}

impl ColorSet {
    /// Accent-tinted inactive icons and thumb, white active icons.
    #[must_use]
    pub const fn from_accent(accent: Color) -> Self {
        Self {
            inactive_tint_left: accent,
            active_tint_left: Color::WHITE,
            inactive_tint_right: accent,
            active_tint_right: Color::WHITE,
            thumb_color_left: accent,
            thumb_color_right: accent,
        }
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::from_accent(DEFAULT_ACCENT)
    }
}

/// External configuration of a switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitchStyle {
    /// Display density used to resolve dp defaults
    pub density: f32,
    /// Icon size in pixels; `None` uses 18dp
    pub icon_size: Option<i32>,
    /// Opaque reference to the left icon drawable
    pub icon_left: Option<String>,
    /// Opaque reference to the right icon drawable
    pub icon_right: Option<String>,
    /// Left icon tint while inactive
    pub inactive_tint_left: Color,
    /// Left icon tint while active
    pub active_tint_left: Color,
    /// Right icon tint while inactive
    pub inactive_tint_right: Color,
    /// Right icon tint while active
    pub active_tint_right: Color,
    /// Pill background color
    pub background_color: Color,
    /// Thumb color with the left side selected
    pub thumb_color_left: Color,
    /// Thumb color with the right side selected
    pub thumb_color_right: Color,
    /// Side selected at construction
    pub default_selection: Side,
}

impl Default for SwitchStyle {
    fn default() -> Self {
        let colors = ColorSet::default();
        Self {
            density: 1.0,
            icon_size: None,
            icon_left: None,
            icon_right: None,
            inactive_tint_left: colors.inactive_tint_left,
            active_tint_left: colors.active_tint_left,
            inactive_tint_right: colors.inactive_tint_right,
            active_tint_right: colors.active_tint_right,
            background_color: DEFAULT_BACKGROUND,
            thumb_color_left: colors.thumb_color_left,
            thumb_color_right: colors.thumb_color_right,
            default_selection: Side::Left,
        }
    }
}

impl SwitchStyle {
    /// Create the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the icon size in pixels.
    #[must_use]
    pub const fn icon_size(mut self, px: i32) -> Self {
        self.icon_size = Some(px);
        self
    }

    /// Set the display density.
    #[must_use]
    pub const fn density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Set the initially selected side.
    #[must_use]
    pub const fn default_selection(mut self, side: Side) -> Self {
        self.default_selection = side;
        self
    }

    /// Replace all six interpolated colors.
    #[must_use]
    pub const fn colors(mut self, colors: ColorSet) -> Self {
        self.inactive_tint_left = colors.inactive_tint_left;
        self.active_tint_left = colors.active_tint_left;
        self.inactive_tint_right = colors.inactive_tint_right;
        self.active_tint_right = colors.active_tint_right;
        self.thumb_color_left = colors.thumb_color_left;
        self.thumb_color_right = colors.thumb_color_right;
        self
    }

    /// Set the pill background color.
    #[must_use]
    pub const fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the icon references.
    #[must_use]
    pub fn icons(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.icon_left = Some(left.into());
        self.icon_right = Some(right.into());
        self
    }

    /// Use one accent for inactive tints and both thumb colors, parsed from
    /// a hex string.
    pub fn accent_hex(self, hex: &str) -> Result<Self, ConfigError> {
        let accent = Color::from_hex(hex)?;
        Ok(self.colors(ColorSet::from_accent(accent)))
    }

    /// The interpolated colors as a set.
    #[must_use]
    pub const fn color_set(&self) -> ColorSet {
        ColorSet {
            inactive_tint_left: self.inactive_tint_left,
            active_tint_left: self.active_tint_left,
            inactive_tint_right: self.inactive_tint_right,
            active_tint_right: self.active_tint_right,
            thumb_color_left: self.thumb_color_left,
            thumb_color_right: self.thumb_color_right,
        }
    }

    /// Requested icon size in pixels.
    #[must_use]
    pub fn icon_size_px(&self) -> i32 {
        self.icon_size
            .unwrap_or_else(|| dp_to_px(DEFAULT_ICON_SIZE_DP, self.density))
    }

    /// Smallest icon size the geometry will use, in pixels.
    #[must_use]
    pub fn min_icon_size_px(&self) -> i32 {
        dp_to_px(MIN_ICON_SIZE_DP, self.density)
    }

    /// Parse and validate a YAML style.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let style: Self = serde_yaml_ng::from_str(yaml)?;
        style.validate()?;
        Ok(style)
    }

    /// Read a YAML style from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "density".to_string(),
                message: format!("must be a positive number, got {}", self.density),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite_and_position() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
        assert_eq!(Side::Left.position(), 0.0);
        assert_eq!(Side::Right.position(), 1.0);
        assert_eq!(Side::from_checked(true), Side::Right);
        assert_eq!(Side::from_checked(false), Side::Left);
    }

    #[test]
    fn test_default_style_matches_widget_defaults() {
        let style = SwitchStyle::default();
        assert_eq!(style.default_selection, Side::Left);
        assert_eq!(style.icon_size_px(), 18);
        assert_eq!(style.min_icon_size_px(), 12);
        assert_eq!(style.active_tint_left, Color::WHITE);
        assert_eq!(style.inactive_tint_right, DEFAULT_ACCENT);
        assert_eq!(style.thumb_color_left, style.inactive_tint_left);
    }

    #[test]
    fn test_density_scales_defaults() {
        let style = SwitchStyle::new().density(2.0);
        assert_eq!(style.icon_size_px(), 36);
        assert_eq!(style.min_icon_size_px(), 24);
    }

    #[test]
    fn test_builder() {
        let colors = ColorSet::from_accent(Color::rgb(1, 2, 3));
        let style = SwitchStyle::new()
            .icon_size(40)
            .default_selection(Side::Right)
            .colors(colors)
            .background_color(Color::BLACK)
            .icons("sun", "moon");
        assert_eq!(style.icon_size_px(), 40);
        assert_eq!(style.color_set(), colors);
        assert_eq!(style.background_color, Color::BLACK);
        assert_eq!(style.icon_left.as_deref(), Some("sun"));
        assert_eq!(style.icon_right.as_deref(), Some("moon"));
    }

    #[test]
    fn test_accent_hex() {
        let style = SwitchStyle::new().accent_hex("#3f51b5").unwrap();
        assert_eq!(style.thumb_color_right, Color::rgb(0x3f, 0x51, 0xb5));
        assert_eq!(style.active_tint_left, Color::WHITE);
        assert!(matches!(
            SwitchStyle::new().accent_hex("#12"),
            Err(ConfigError::Color(_))
        ));
    }

    #[test]
    fn test_from_yaml_partial() {
        let style = SwitchStyle::from_yaml(
            r##"
icon_size: 48
thumb_color_right: "#3f51b5"
default_selection: RIGHT
"##,
        )
        .unwrap();
        assert_eq!(style.icon_size, Some(48));
        assert_eq!(style.thumb_color_right, Color::rgb(0x3f, 0x51, 0xb5));
        assert_eq!(style.default_selection, Side::Right);
        assert_eq!(style.thumb_color_left, DEFAULT_ACCENT);
    }

    #[test]
    fn test_from_yaml_argb_color() {
        let style = SwitchStyle::from_yaml("background_color: \"#80000000\"").unwrap();
        assert_eq!(style.background_color, Color::argb(0x80, 0, 0, 0));
    }

    #[test]
    fn test_from_yaml_rejects_bad_color() {
        let err = SwitchStyle::from_yaml("active_tint_left: \"#zzzzzz\"").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_field() {
        assert!(SwitchStyle::from_yaml("thumb_colour: \"#ffffff\"").is_err());
    }

    #[test]
    fn test_from_yaml_rejects_bad_density() {
        let err = SwitchStyle::from_yaml("density: 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "density"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let style = SwitchStyle::new()
            .icon_size(30)
            .icons("a", "b")
            .default_selection(Side::Right);
        let yaml = style.to_yaml().unwrap();
        assert_eq!(SwitchStyle::from_yaml(&yaml).unwrap(), style);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = SwitchStyle::load("/nonexistent/iconswitch/style.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

//! ARGB color representation and channel-wise interpolation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 8-bit ARGB color.
///
/// Serialized as a hex string: `#AARRGGBB`, or `#RRGGBB` for opaque colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Alpha component [0, 255]
    pub a: u8,
    /// Red component [0, 255]
    pub r: u8,
    /// Green component [0, 255]
    pub g: u8,
    /// Blue component [0, 255]
    pub b: u8,
}

impl Color {
    /// Create a color from alpha, red, green and blue channels.
    #[must_use]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create an opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xff, r, g, b)
    }

    /// Unpack a `0xAARRGGBB` integer.
    #[must_use]
    pub const fn from_argb_u32(packed: u32) -> Self {
        Self {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` integer.
    #[must_use]
    pub const fn to_argb_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parse a hex color string (e.g., "#ff0000" or "80ff0000").
    ///
    /// Supports 6-character RGB and 8-character ARGB formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorParseError::InvalidHex)
        };

        match hex.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::argb(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Convert to hex string, dropping the alpha byte when opaque.
    #[must_use]
    pub fn to_hex(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            self.to_hex_with_alpha()
        }
    }

    /// Convert to `#aarrggbb`.
    #[must_use]
    pub fn to_hex_with_alpha(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.a, self.r, self.g, self.b
        )
    }

    /// Channel-wise linear interpolation towards `other`.
    ///
    /// `t` is clamped to [0.0, 1.0]; each channel is rounded to the nearest
    /// integer.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Self {
            a: lerp_channel(self.a, other.a, t),
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
        }
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White color
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    /// Transparent color
    pub const TRANSPARENT: Self = Self::argb(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex_with_alpha())
    }
}

/// Interpolate between `from` and `to` at progress `t`.
///
/// Total: never fails, `t` outside [0, 1] is clamped.
#[must_use]
pub fn lerp_color(t: f32, from: Color, to: Color) -> Color {
    from.lerp(&to, t)
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let from = f32::from(from);
    let to = f32::from(to);
    (to - from).mul_add(t, from).round().clamp(0.0, 255.0) as u8
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Invalid hex characters
    #[error("invalid hex characters")]
    InvalidHex,
    /// Invalid string length
    #[error("invalid hex string length (expected 6 or 8)")]
    InvalidLength,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color_constants() {
        assert_eq!(Color::BLACK.to_argb_u32(), 0xff00_0000);
        assert_eq!(Color::WHITE.to_argb_u32(), 0xffff_ffff);
        assert_eq!(Color::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_color_from_hex_rgb() {
        let c = Color::from_hex("#ff8000").unwrap();
        assert_eq!(c, Color::rgb(0xff, 0x80, 0x00));

        let c2 = Color::from_hex("00ff00").unwrap();
        assert_eq!(c2.g, 0xff);
        assert_eq!(c2.a, 0xff);
    }

    #[test]
    fn test_color_from_hex_argb() {
        let c = Color::from_hex("#80ff0000").unwrap();
        assert_eq!(c.a, 0x80);
        assert_eq!(c.r, 0xff);
        assert_eq!(c.g, 0);
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert_eq!(Color::from_hex("#gg0000"), Err(ColorParseError::InvalidHex));
        assert_eq!(Color::from_hex("#ff"), Err(ColorParseError::InvalidLength));
        assert_eq!(Color::from_hex("#ééé"), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::rgb(0xff, 0, 0).to_hex(), "#ff0000");
        assert_eq!(Color::argb(0x80, 0, 0xff, 0).to_hex(), "#8000ff00");
        assert_eq!(Color::rgb(1, 2, 3).to_hex_with_alpha(), "#ff010203");
    }

    #[test]
    fn test_color_packed_roundtrip() {
        let c = Color::from_argb_u32(0x1234_5678);
        assert_eq!(c, Color::argb(0x12, 0x34, 0x56, 0x78));
        assert_eq!(c.to_argb_u32(), 0x1234_5678);
    }

    #[test]
    fn test_color_string_conversions() {
        let c = Color::try_from("#ff4081".to_string()).unwrap();
        assert_eq!(c, Color::rgb(0xff, 0x40, 0x81));
        assert_eq!(String::from(c), "#ff4081");
        assert!(Color::try_from("nope".to_string()).is_err());
    }

    #[test]
    fn test_color_parse_error_display() {
        assert_eq!(ColorParseError::InvalidHex.to_string(), "invalid hex characters");
        assert!(ColorParseError::InvalidLength
            .to_string()
            .contains("expected 6 or 8"));
    }

    #[test]
    fn test_lerp_midpoint_rounds_to_nearest() {
        let mid = lerp_color(0.5, Color::BLACK, Color::WHITE);
        // 127.5 rounds away from zero
        assert_eq!(mid, Color::rgb(128, 128, 128));
    }

    #[test]
    fn test_lerp_clamps_progress() {
        let a = Color::rgb(10, 20, 30);
        let b = Color::rgb(200, 100, 0);
        assert_eq!(lerp_color(-3.0, a, b), a);
        assert_eq!(lerp_color(7.5, a, b), b);
        assert_eq!(lerp_color(f32::NAN, a, b), a);
    }

    #[test]
    fn test_lerp_interpolates_alpha() {
        let a = Color::argb(0, 0, 0, 0);
        let b = Color::argb(200, 0, 0, 0);
        assert_eq!(lerp_color(0.25, a, b).a, 50);
    }

    fn any_color() -> impl Strategy<Value = Color> {
        any::<u32>().prop_map(Color::from_argb_u32)
    }

    proptest! {
        #[test]
        fn prop_lerp_endpoints(a in any_color(), b in any_color()) {
            prop_assert_eq!(lerp_color(0.0, a, b), a);
            prop_assert_eq!(lerp_color(1.0, a, b), b);
        }

        #[test]
        fn prop_lerp_monotonic_per_channel(
            a in any_color(),
            b in any_color(),
            t1 in 0.0f32..=1.0,
            t2 in 0.0f32..=1.0,
        ) {
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            let c1 = lerp_color(lo, a, b);
            let c2 = lerp_color(hi, a, b);
            for (from, to, x1, x2) in [
                (a.a, b.a, c1.a, c2.a),
                (a.r, b.r, c1.r, c2.r),
                (a.g, b.g, c1.g, c2.g),
                (a.b, b.b, c1.b, c2.b),
            ] {
                if from <= to {
                    prop_assert!(x1 <= x2);
                } else {
                    prop_assert!(x1 >= x2);
                }
            }
        }

        #[test]
        fn prop_hex_roundtrip(c in any_color()) {
            prop_assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
        }
    }
}

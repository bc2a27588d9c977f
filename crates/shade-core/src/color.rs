use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// A compact ARGB color.
///
/// - **Size:** 4 bytes.
/// - **Layout:** `0xAARRGGBB` (A in bits 31..24, B in bits 7..0).
///
/// Equality and hashing are bitwise over the packed value: two colors are
/// equal exactly when all four channels match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct ColorValue(pub u32);

impl ColorValue {
    /// Fully transparent (alpha = 0).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Wrap an already packed `0xAARRGGBB` value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create a color from alpha, red, green and blue channels, in that order.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Create an opaque color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Create a color from untrusted integer components (alpha, red, green,
    /// blue).
    ///
    /// Components outside `0..=255` are rejected, never clamped.
    pub fn try_from_argb(a: i32, r: i32, g: i32, b: i32) -> Result<Self, ColorError> {
        fn channel(name: &str, value: i32) -> Result<u8, ColorError> {
            u8::try_from(value).map_err(|_| {
                ColorError::invalid_argument(format!(
                    "{name} component {value} is outside 0..=255"
                ))
            })
        }

        Ok(Self::from_argb(
            channel("alpha", a)?,
            channel("red", r)?,
            channel("green", g)?,
            channel("blue", b)?,
        ))
    }

    /// The packed `0xAARRGGBB` value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Alpha as a fraction in `[0.0, 1.0]`.
    #[inline]
    pub fn opacity(self) -> f32 {
        f32::from(self.alpha()) / 255.0
    }

    /// Same color channels with a replaced alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((a as u32) << 24))
    }

    /// Whether the color is fully opaque.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 255
    }
}

impl From<u32> for ColorValue {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<ColorValue> for u32 {
    fn from(color: ColorValue) -> Self {
        color.0
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(0x{:08X})", self.0)
    }
}

/// Parses `#RRGGBB`, `#AARRGGBB`, the same with a `0x` prefix, or bare hex
/// digits. Six digits imply an opaque color.
impl FromStr for ColorValue {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::invalid_argument(format!(
                "expected 6 or 8 hex digits in {s:?}, found {}",
                digits.len()
            )));
        }
        if let Some(pos) = digits.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_argument(format!(
                "invalid hex digit at position {pos} in {s:?}"
            )));
        }

        let packed = u32::from_str_radix(digits, 16)
            .map_err(|err| ColorError::invalid_argument(format!("{s:?}: {err}")))?;
        if digits.len() == 6 {
            Ok(Self(0xFF00_0000 | packed))
        } else {
            Ok(Self(packed))
        }
    }
}

//! # Color Module
//!
//! This crate provides the RGBA color value used by Quire's fill and stroke
//! styles. Colors are stored as straight (non-premultiplied) 8-bit sRGB
//! components, which is what shape styles compare for equality and what the
//! rasterizer consumes.
//!
//! A color is considered *visible* when its alpha channel is non-zero. Fill
//! and stroke primitives are only created for visible colors.
//!
//! # Examples
//!
//! ```
//! use quire_color::Color;
//!
//! let accent = Color::from_hex("#2196F3");
//! assert!(accent.is_visible());
//! assert!(!accent.with_alpha(0).is_visible());
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use core::{
    fmt::{self, Display},
    str::FromStr,
};

mod parse;

use parse::{parse_hex_color, parse_hex_color_runtime};

/// An sRGB color with a straight alpha channel, 8 bits per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "alloc::string::String", into = "alloc::string::String")
)]
pub struct Color {
    /// Red component (0-255)
    pub red: u8,
    /// Green component (0-255)
    pub green: u8,
    /// Blue component (0-255)
    pub blue: u8,
    /// Alpha component (0 = transparent, 255 = opaque)
    pub alpha: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Black color.
    pub const BLACK: Self = Self::from_hex("#000000");
    /// White color.
    pub const WHITE: Self = Self::from_hex("#FFFFFF");
    /// Material red.
    pub const RED: Self = Self::from_hex("#F44336");
    /// Material blue.
    pub const BLUE: Self = Self::from_hex("#2196F3");
    /// Material green.
    pub const GREEN: Self = Self::from_hex("#4CAF50");
    /// Material orange.
    pub const ORANGE: Self = Self::from_hex("#FF9800");
    /// Material grey.
    pub const GREY: Self = Self::from_hex("#9E9E9E");

    /// Creates a color from 8-bit red, green, blue and alpha components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from 8-bit red, green and blue components.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 0xFF)
    }

    /// Creates a new color from a hexadecimal color string.
    ///
    /// Accepts `RRGGBB` or `RRGGBBAA`, optionally prefixed by `#` or `0x`.
    ///
    /// # Panics
    ///
    /// Panics if the string is malformed. Intended for constants; use
    /// [`Color::try_from_hex`] for runtime input.
    #[must_use]
    pub const fn from_hex(hex: &str) -> Self {
        let [red, green, blue, alpha] = parse_hex_color(hex);
        Self::new(red, green, blue, alpha)
    }

    /// Attempts to create a color from a hexadecimal string without panicking.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly six or eight
    /// hexadecimal digits or contains invalid characters.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        let [red, green, blue, alpha] = parse_hex_color_runtime(hex)?;
        Ok(Self::new(red, green, blue, alpha))
    }

    /// Creates an opaque color from a packed 0xRRGGBB value.
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Returns this color with the alpha channel replaced.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    /// Returns this color with the alpha channel set from a `0.0..=1.0` opacity.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::suboptimal_flops
    )]
    pub fn with_opacity(self, opacity: f32) -> Self {
        // no_std has no f32::round
        self.with_alpha((opacity.clamp(0.0, 1.0) * 255.0 + 0.5) as u8)
    }

    /// Returns `true` when the color contributes any coverage (alpha > 0).
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.alpha > 0
    }

    /// Returns `true` when the color is fully opaque.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        self.alpha == 0xFF
    }

    /// Returns the components normalized to `0.0..=1.0`, in RGBA order.
    #[must_use]
    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            f32::from(self.red) / 255.0,
            f32::from(self.green) / 255.0,
            f32::from(self.blue) / 255.0,
            f32::from(self.alpha) / 255.0,
        ]
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::rgb(value.0, value.1, value.2)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8, u8)) -> Self {
        Self::new(value.0, value.1, value.2, value.3)
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl FromStr for Color {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}

impl TryFrom<alloc::string::String> for Color {
    type Error = HexColorError;

    fn try_from(value: alloc::string::String) -> Result<Self, Self::Error> {
        Self::try_from_hex(&value)
    }
}

impl From<Color> for alloc::string::String {
    fn from(color: Color) -> Self {
        alloc::format!("{color}")
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)?;
        if !self.is_opaque() {
            write!(f, "{:02X}", self.alpha)?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexColorError {
    /// The provided string does not have 6 or 8 hexadecimal digits.
    InvalidLength,
    /// A non-hexadecimal character was encountered at the provided index.
    InvalidDigit(usize),
}

impl Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => f.write_str("expected 6 or 8 hexadecimal digits"),
            Self::InvalidDigit(index) => {
                write!(f, "invalid hexadecimal digit at byte index {index}")
            }
        }
    }
}

impl core::error::Error for HexColorError {}

//! RGB colors and the contrast resolver.
//!
//! Text drawn on a user-chosen background (document header, table header,
//! totals band) picks its color here so that arbitrary brand colors never
//! produce unreadable text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::FakturaError;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB` (case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, FakturaError> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || FakturaError::Theme(format!("invalid hex color '{hex}'"));

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// `#RRGGBB`, upper case.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels scaled to 0.0–1.0, as PDF color operators expect.
    pub fn to_unit(&self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    pub fn luminance(&self) -> f64 {
        relative_luminance(*self)
    }
}

impl FromStr for Rgb {
    type Err = FakturaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// WCAG relative luminance in `[0, 1]` (gamma-corrected sRGB,
/// coefficients 0.2126 / 0.7152 / 0.0722).
pub fn relative_luminance(color: Rgb) -> f64 {
    fn linear(channel: u8) -> f64 {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linear(color.r) + 0.7152 * linear(color.g) + 0.0722 * linear(color.b)
}

/// Relative luminance of a hex color string.
pub fn luminance(hex: &str) -> Result<f64, FakturaError> {
    Rgb::from_hex(hex).map(relative_luminance)
}

/// A background is dark when its luminance is below 0.5.
pub fn is_dark(color: Rgb) -> bool {
    relative_luminance(color) < 0.5
}

/// Pick the text color for `background`: `dark` on light backgrounds,
/// `light` on dark ones.
///
/// ```
/// use qrfaktura::theme::*;
///
/// let navy: Rgb = "#0B1F3A".parse().unwrap();
/// assert_eq!(resolve_text_color(navy, Rgb::BLACK, Rgb::WHITE), Rgb::WHITE);
/// assert_eq!(resolve_text_color(Rgb::WHITE, Rgb::BLACK, Rgb::WHITE), Rgb::BLACK);
/// ```
pub fn resolve_text_color(background: Rgb, dark: Rgb, light: Rgb) -> Rgb {
    if is_dark(background) { light } else { dark }
}

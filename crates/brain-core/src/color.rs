use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// 8-bit sRGB color, serialized as a lowercase `#rrggbb` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the `#` is optional, hex digits are case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Malformed(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::Malformed(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel mean of two colors, rounded half up.
    pub fn blend(self, other: Rgb) -> Rgb {
        let mid = |a: u8, b: u8| ((u16::from(a) + u16::from(b) + 1) / 2) as u8;
        Rgb::new(mid(self.r, other.r), mid(self.g, other.g), mid(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

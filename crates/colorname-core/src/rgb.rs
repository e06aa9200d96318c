//! Rgb - A single point in the 8-bit RGB color cube
//!
//! `Rgb` is both the query type (one sampled pixel) and the color stored
//! in each palette entry. Components are `u8`, so the [0, 255] range is
//! enforced by construction; the fallible constructors exist for callers
//! holding wider integers or text.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// An (R, G, B) triplet with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black (0, 0, 0)
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white (255, 255, 255)
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a new color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from wide integers, rejecting anything outside [0, 255].
    pub fn try_from_components(r: i64, g: i64, b: i64) -> Result<Self> {
        let channel = |name: &str, v: i64| {
            u8::try_from(v)
                .map_err(|_| Error::InvalidQuery(format!("{name} component {v} is outside [0, 255]")))
        };
        Ok(Self::new(channel("red", r)?, channel("green", g)?, channel("blue", b)?))
    }

    /// Components as a fixed array, in R, G, B order.
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidQuery(s.to_string()));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::InvalidQuery(s.to_string()))
        };
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Strict structured parsing of a query color.
///
/// Accepted forms:
/// - `r,g,b` with optional whitespace, e.g. `12, 34, 56`
/// - `(r, g, b)`
/// - `#rrggbb`
///
/// Each decimal component must be an integer in [0, 255]. Nothing else is
/// accepted; in particular, the input is never evaluated.
impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }

        let inner = match (trimmed.strip_prefix('('), trimmed.ends_with(')')) {
            (Some(rest), true) => &rest[..rest.len() - 1],
            (None, false) => trimmed,
            _ => return Err(Error::InvalidQuery(s.to_string())),
        };

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(Error::InvalidQuery(s.to_string()));
        }

        let mut out = [0u8; 3];
        for (slot, part) in out.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::InvalidQuery(s.to_string()));
            }
            *slot = part
                .parse()
                .map_err(|_| Error::InvalidQuery(s.to_string()))?;
        }
        Ok(Self::from(out))
    }
}

//! RGBA color values.
//!
//! Components are floats in `[0, 1]`. Out-of-range or non-finite input is
//! rejected rather than clamped, so a caller bug surfaces at the call site.

use crate::error::{Error, Result};
use serde::Serialize;

/// An RGB color with straight (non-premultiplied) alpha.
///
/// Only [`Rgba::new`] and the helpers built on it create a color, so every
/// value held by a page has components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub(crate) r: f32,
    pub(crate) g: f32,
    pub(crate) b: f32,
    pub(crate) a: f32,
}

fn check_component(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid(format!("color component {} must be in [0, 1], got {}", name, value)))
    }
}

impl Rgba {
    /// Create a color, validating every component.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagecraft::color::Rgba;
    ///
    /// let red = Rgba::new(1.0, 0.0, 0.0, 0.4).unwrap();
    /// assert_eq!(red.a(), 0.4);
    /// assert!(Rgba::new(1.2, 0.0, 0.0, 1.0).is_err());
    /// ```
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Result<Self> {
        check_component("r", r)?;
        check_component("g", g)?;
        check_component("b", b)?;
        check_component("a", a)?;
        Ok(Self { r, g, b, a })
    }

    /// Red channel (0.0 - 1.0).
    pub fn r(&self) -> f32 {
        self.r
    }

    /// Green channel (0.0 - 1.0).
    pub fn g(&self) -> f32 {
        self.g
    }

    /// Blue channel (0.0 - 1.0).
    pub fn b(&self) -> f32 {
        self.b
    }

    /// Alpha, 0.0 transparent to 1.0 opaque.
    pub fn a(&self) -> f32 {
        self.a
    }

    /// Create an opaque color.
    pub fn opaque(r: f32, g: f32, b: f32) -> Result<Self> {
        Self::new(r, g, b, 1.0)
    }

    /// Opaque black.
    pub const fn black() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }

    /// Opaque white.
    pub const fn white() -> Self {
        Self {
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: 1.0,
        }
    }

    /// Opaque red.
    pub const fn red() -> Self {
        Self {
            r: 1.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }

    /// Opaque blue.
    pub const fn blue() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 1.0,
            a: 1.0,
        }
    }

    /// Parse `#rrggbb` (leading `#` optional) as an opaque color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::from_hex_alpha(hex, 1.0)
    }

    /// Parse `#rrggbb` with an explicit alpha.
    pub fn from_hex_alpha(hex: &str, alpha: f32) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::invalid(format!("expected #rrggbb, got '{}'", hex)));
        }
        let channel = |range: std::ops::Range<usize>| -> Result<f32> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| Error::invalid(format!("invalid hex color '{}'", hex)))
        };
        Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, alpha)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, alpha: f32) -> Result<Self> {
        Self::new(self.r, self.g, self.b, alpha)
    }

    /// True when alpha is exactly 1.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_bounds() {
        assert!(Rgba::new(0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(Rgba::new(1.0, 1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(matches!(Rgba::new(-0.1, 0.0, 0.0, 1.0), Err(Error::InvalidParameter(_))));
        assert!(matches!(Rgba::new(0.0, 0.0, 0.0, 1.5), Err(Error::InvalidParameter(_))));
        assert!(Rgba::new(f32::NAN, 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_from_hex() {
        let c = Rgba::from_hex("#333333").unwrap();
        assert!((c.r() - 0.2).abs() < 1e-6);
        assert!(c.is_opaque());

        let c = Rgba::from_hex_alpha("ff8f00", 0.5).unwrap();
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1.0, 143.0 / 255.0, 0.0, 0.5));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Rgba::from_hex("#12345").is_err());
        assert!(Rgba::from_hex("#gggggg").is_err());
        assert!(Rgba::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_with_alpha_validates() {
        assert!(Rgba::red().with_alpha(0.15).is_ok());
        assert!(Rgba::red().with_alpha(2.0).is_err());
        assert!(Rgba::red().with_alpha(f32::INFINITY).is_err());
    }

    #[test]
    fn test_every_constructor_stays_in_range() {
        let in_range = |c: Rgba| {
            [c.r(), c.g(), c.b(), c.a()]
                .iter()
                .all(|v| (0.0..=1.0).contains(v))
        };
        let named = [Rgba::black(), Rgba::white(), Rgba::red(), Rgba::blue()];
        assert!(named.iter().all(|c| in_range(*c)));
        assert!(in_range(Rgba::from_hex("#ffffff").unwrap()));
        assert!(in_range(Rgba::from_hex_alpha("#000000", 0.0).unwrap()));

        for (r, g, b, a) in [(2.0, 0.0, 0.0, 1.0), (0.0, -1.0, 0.0, 1.0), (0.0, 0.0, 0.0, 7.0)] {
            assert!(Rgba::new(r, g, b, a).is_err());
        }
        assert!(Rgba::opaque(1.0, 1.0, 1.5).is_err());
    }
}

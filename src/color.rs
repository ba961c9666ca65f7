//! Saturating 8-bit RGB color arithmetic.
//!
//! Channel values live in [0, 255]. Addition and scalar multiplication clamp
//! at the bounds instead of wrapping, so accumulating many light and
//! reflection contributions can never overflow a channel.

use std::ops::{Add, AddAssign, Mul};

/// RGB color with saturating channel arithmetic.
///
/// Alpha is not part of the color; the renderer writes a fixed 255 alpha
/// when it stores a color into the pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    /// Red channel in [0, 255]
    pub r: u8,
    /// Green channel in [0, 255]
    pub g: u8,
    /// Blue channel in [0, 255]
    pub b: u8,
}

/// Background color returned for rays that hit nothing.
pub const BACKGROUND: Color = Color { r: 0, g: 0, b: 0 };

impl Color {
    /// Create a color from individual channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color {
            r: self.r.saturating_add(rhs.r),
            g: self.g.saturating_add(rhs.g),
            b: self.b.saturating_add(rhs.b),
        }
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    /// Scale each channel by `f`, clamping the result to [0, 255].
    ///
    /// Negative factors clamp to 0 rather than wrapping.
    fn mul(self, f: f32) -> Color {
        Color {
            r: (self.r as f32 * f).clamp(0.0, 255.0) as u8,
            g: (self.g as f32 * f).clamp(0.0, 255.0) as u8,
            b: (self.b as f32 * f).clamp(0.0, 255.0) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_saturates() {
        let a = Color::new(200, 100, 0);
        let b = Color::new(100, 100, 5);
        assert_eq!(a + b, Color::new(255, 200, 5));
    }

    #[test]
    fn test_scalar_multiply_clamps() {
        let c = Color::new(200, 10, 128);
        assert_eq!(c * 2.0, Color::new(255, 20, 255));
        assert_eq!(c * 0.5, Color::new(100, 5, 64));
        assert_eq!(c * -1.0, Color::new(0, 0, 0));
    }

    #[test]
    fn test_default_is_background() {
        assert_eq!(Color::default(), BACKGROUND);
    }
}

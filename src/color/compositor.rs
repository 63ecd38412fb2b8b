//! Color compositing
//!
//! Effects work with linear float colors whose channels may exceed `1.0`.
//! Before a color reaches the strip it is normalized, scaled by the effect
//! intensity and compensated so the total output power never exceeds one
//! fully lit channel.

use super::Rgb;

/// Linear color with float channels
///
/// Channels are expected to be non-negative but are not bounded above.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl LinearRgb {
    pub const OFF: Self = Self::new(0.0, 0.0, 0.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Brightest channel value
    pub fn max_channel(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Sum of all channels
    pub fn sum(self) -> f32 {
        self.r + self.g + self.b
    }

    /// Multiply every channel by `factor`
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    #[must_use]
    fn divide(self, divisor: f32) -> Self {
        Self::new(self.r / divisor, self.g / divisor, self.b / divisor)
    }

    /// Returns `true` when every channel is finite and non-negative
    pub fn is_valid(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|channel| channel.is_finite() && *channel >= 0.0)
    }

    /// Convert to 8-bit channels in the strip's native order.
    ///
    /// The strip expects green first, so the logical red and green channels
    /// are swapped. Channels are truncated toward zero.
    pub fn to_grb8(self) -> Rgb {
        Rgb {
            r: channel_to_u8(self.g),
            g: channel_to_u8(self.r),
            b: channel_to_u8(self.b),
        }
    }
}

/// Float cast saturates and maps NaN to zero.
fn channel_to_u8(channel: f32) -> u8 {
    (channel * 255.0) as u8
}

/// Normalize `color`, apply `intensity` and compensate the output power.
///
/// 1. If the brightest channel exceeds `1.0`, every channel is divided by it.
/// 2. Every channel is multiplied by `intensity`.
/// 3. If the channel sum exceeds `1.0`, every channel is divided by the sum.
///
/// For valid inputs every output channel lies within `[0, 1]`.
pub fn composite(color: LinearRgb, intensity: f32) -> LinearRgb {
    let mut out = color;

    let peak = out.max_channel();
    if peak > 1.0 {
        out = out.divide(peak);
    }

    out = out.scale(intensity);

    let power = out.sum();
    if power > 1.0 {
        out = out.divide(power);
    }

    out
}

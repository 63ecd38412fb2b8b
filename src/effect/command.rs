use core::fmt;

use crate::color::LinearRgb;
use crate::config::MIN_SPEED;

const EFFECT_NAME_FLASH: &str = "flash";
const EFFECT_NAME_STROBE: &str = "strobe";
const EFFECT_NAME_UNKNOWN: &str = "unknown";

const EFFECT_CODE_FLASH: i32 = 1;
const EFFECT_CODE_STROBE: i32 = 2;

/// Effect variants that can be requested.
///
/// Codes other than the known ones are kept as `Unknown` and played as a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    /// Sine shaped fade in and out
    Flash,
    /// Hard on/off blinking
    Strobe,
    /// Unrecognized wire code
    Unknown(i32),
}

impl EffectKind {
    pub const fn from_code(code: i32) -> Self {
        match code {
            EFFECT_CODE_FLASH => Self::Flash,
            EFFECT_CODE_STROBE => Self::Strobe,
            other => Self::Unknown(other),
        }
    }

    pub const fn code(self) -> i32 {
        match self {
            Self::Flash => EFFECT_CODE_FLASH,
            Self::Strobe => EFFECT_CODE_STROBE,
            Self::Unknown(code) => code,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flash => EFFECT_NAME_FLASH,
            Self::Strobe => EFFECT_NAME_STROBE,
            Self::Unknown(_) => EFFECT_NAME_UNKNOWN,
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "{} ({})", self.as_str(), code),
            _ => f.write_str(self.as_str()),
        }
    }
}

/// Parameter that violates the command invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidParameter {
    /// Speed is below [`MIN_SPEED`] or not finite
    Speed,
    /// Repeat count is below one
    Count,
    /// Intensity is negative or not finite
    Intensity,
    /// A color channel is negative or not finite
    Color,
}

impl InvalidParameter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Speed => "invalid speed",
            Self::Count => "invalid count",
            Self::Intensity => "invalid intensity",
            Self::Color => "invalid color",
        }
    }
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single queued effect with its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectCommand {
    pub kind: EffectKind,
    /// Number of repetitions, at least one
    pub repeat_count: u32,
    /// Overall brightness scalar
    pub intensity: f32,
    /// Inversely scales every hold of the effect
    pub speed: f32,
    pub color: LinearRgb,
}

impl EffectCommand {
    /// Create a command with default parameters: one repetition, full
    /// intensity, normal speed, pure red.
    pub const fn new(kind: EffectKind) -> Self {
        Self {
            kind,
            repeat_count: 1,
            intensity: 1.0,
            speed: 1.0,
            color: LinearRgb::RED,
        }
    }

    #[must_use]
    pub const fn with_repeat_count(mut self, repeat_count: u32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    #[must_use]
    pub const fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    #[must_use]
    pub const fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: LinearRgb) -> Self {
        self.color = color;
        self
    }

    /// Speed must be finite and at least [`MIN_SPEED`], otherwise the flash
    /// sweep and the holds grow without bound.
    pub fn has_valid_speed(&self) -> bool {
        self.speed.is_finite() && self.speed >= MIN_SPEED
    }

    /// Check every command invariant
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        if !self.has_valid_speed() {
            return Err(InvalidParameter::Speed);
        }
        if self.repeat_count < 1 {
            return Err(InvalidParameter::Count);
        }
        if !(self.intensity.is_finite() && self.intensity >= 0.0) {
            return Err(InvalidParameter::Intensity);
        }
        if !self.color.is_valid() {
            return Err(InvalidParameter::Color);
        }
        Ok(())
    }
}

//! Player configuration
//!
//! Timing constants of the effects and the fixed capacities of the crate.

use embassy_time::Duration;

/// Maximum number of commands waiting to be played.
pub const QUEUE_CAPACITY: usize = 20;

/// Maximum number of effect objects accepted in one payload.
pub const MAX_BATCH: usize = 32;

/// Slowest accepted effect speed.
///
/// Keeps the flash sweep under about 32k steps and every hold within `u32`
/// microseconds.
pub const MIN_SPEED: f32 = 1e-3;

/// Length of the reference strip.
pub const DEFAULT_LED_COUNT: usize = 241;

/// Timings used by the renderer and the player loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectTimings {
    /// Hold between two flash sweep steps
    pub tick: Duration,
    /// Dark pause after each flash sweep, divided by speed
    pub flash_gap: Duration,
    /// Strobe on and off phase length, divided by speed
    pub strobe_period: Duration,
    /// Flash phase increment at speed 1.0
    pub phase_step: f32,
    /// Flash phase upper bound (exclusive)
    pub phase_end: f32,
    /// Hold after every player iteration
    pub idle: Duration,
}

impl EffectTimings {
    pub const fn new() -> Self {
        Self {
            tick: Duration::from_millis(10),
            flash_gap: Duration::from_millis(50),
            strobe_period: Duration::from_millis(100),
            phase_step: 0.1,
            phase_end: 3.1415,
            idle: Duration::from_millis(10),
        }
    }
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self::new()
    }
}

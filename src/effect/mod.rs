//! Effect commands and the renderer that plays them
//!
//! Every effect is a blocking sequence of frame writes and holds. A hold is an
//! `await` on the delay provider, so the executor can run other tasks (like
//! request ingestion) while an effect plays, but the effect itself is never
//! preempted or abandoned.

mod command;
mod flash;
mod strobe;

use core::fmt;

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

pub use command::{EffectCommand, EffectKind, InvalidParameter};

use crate::OutputDriver;
use crate::color::Rgb;
use crate::config::EffectTimings;

/// Reasons a command was dropped without rendering
///
/// These never stop the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderWarning {
    /// The effect code is not known
    UnknownKind(i32),
    /// The speed would stall the effect
    InvalidSpeed,
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(code) => write!(f, "unknown effect {}", code),
            Self::InvalidSpeed => f.write_str("invalid speed"),
        }
    }
}

/// Plays effect commands on an output driver
///
/// The renderer holds no per-effect state; each call to [`render`] runs one
/// command from its first frame to its trailing off frame.
///
/// [`render`]: EffectRenderer::render
pub struct EffectRenderer<O: OutputDriver, D: DelayNs> {
    output: O,
    delay: D,
    timings: EffectTimings,
}

impl<O: OutputDriver, D: DelayNs> EffectRenderer<O, D> {
    pub fn new(output: O, delay: D, timings: EffectTimings) -> Self {
        Self {
            output,
            delay,
            timings,
        }
    }

    /// Render one command to completion
    pub async fn render(&mut self, command: &EffectCommand) -> Result<(), RenderWarning> {
        match command.kind {
            EffectKind::Unknown(code) => return Err(RenderWarning::UnknownKind(code)),
            _ if !command.has_valid_speed() => return Err(RenderWarning::InvalidSpeed),
            EffectKind::Flash => self.flash(command).await,
            EffectKind::Strobe => self.strobe(command).await,
        }
        Ok(())
    }

    /// Hold for one idle tick
    pub async fn idle(&mut self) {
        let idle = self.timings.idle;
        self.hold(idle).await;
    }

    pub fn timings(&self) -> &EffectTimings {
        &self.timings
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Fill the strip with one color and show it
    fn write(&mut self, color: Rgb) {
        self.output.fill(color);
        self.output.show();
    }

    async fn hold(&mut self, duration: Duration) {
        let micros = u32::try_from(duration.as_micros()).unwrap_or(u32::MAX);
        self.delay.delay_us(micros).await;
    }
}

/// Divide a base duration by the effect speed.
///
/// Speed must already be validated against [`MIN_SPEED`](crate::config::MIN_SPEED).
fn speed_scaled(base: Duration, speed: f32) -> Duration {
    let micros = base.as_micros() as f32 / speed;
    Duration::from_micros(micros as u64)
}

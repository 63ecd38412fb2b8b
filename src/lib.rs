#![no_std]

//! Queued flash/strobe effect player for 1D LED strips.
//!
//! Layers, leaves first:
//! - `color` - linear color compositing and conversion to the strip byte order
//! - `queue` - bounded, critical-section guarded FIFO of effect commands
//! - `effect` - command model and the async effect renderer
//! - `ingest` - JSON payload parsing, validation and admission into the queue
//! - `player` - render loop that drains the queue one command at a time
//! - `driver` - frame buffer adapter over `smart-leds` writers

pub mod color;
pub mod config;
pub mod driver;
pub mod effect;
pub mod ingest;
pub mod player;
pub mod queue;

pub use color::{LinearRgb, Rgb, composite};
pub use config::{DEFAULT_LED_COUNT, EffectTimings, MAX_BATCH, MIN_SPEED, QUEUE_CAPACITY};
pub use driver::StripDriver;
pub use effect::{EffectCommand, EffectKind, EffectRenderer, InvalidParameter, RenderWarning};
pub use ingest::{EffectRequest, HttpResponse, IngestError, IngestReport, submit};
pub use player::{EffectPlayer, PlayOutcome};
pub use queue::{CommandQueue, EffectQueue};

pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The renderer is generic over this trait.
pub trait OutputDriver {
    /// Set every pixel of the frame to `color`.
    ///
    /// The color is already in the strip's native channel order.
    fn fill(&mut self, color: Rgb);

    /// Push the current frame to the LEDs
    fn show(&mut self);
}

impl<T: OutputDriver + ?Sized> OutputDriver for &mut T {
    fn fill(&mut self, color: Rgb) {
        (**self).fill(color);
    }

    fn show(&mut self) {
        (**self).show();
    }
}

//! Frame buffer adapter for `smart-leds` writers
//!
//! Owns the strip's frame buffer, so nothing else in the crate holds pixel
//! state. Any `SmartLedsWrite` implementation (RMT, SPI, bit-banged) can back
//! it.

use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{OFF, Rgb};

/// Output driver for a strip of `N` LEDs
pub struct StripDriver<W, const N: usize> {
    writer: W,
    frame: [Rgb; N],
}

impl<W, const N: usize> StripDriver<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    /// Create a driver with a dark frame
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [OFF; N],
        }
    }

    /// Current frame contents
    pub fn frame(&self) -> &[Rgb; N] {
        &self.frame
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W, const N: usize> OutputDriver for StripDriver<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn fill(&mut self, color: Rgb) {
        self.frame.fill(color);
    }

    fn show(&mut self) {
        if self.writer.write(self.frame.iter().copied()).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[StripDriver.show] failed to write frame");
        }
    }
}

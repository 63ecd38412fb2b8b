//! Flash effect
//!
//! Each repetition sweeps the phase over half a sine period, so the color
//! fades in and back out, followed by a short dark pause.

use embedded_hal_async::delay::DelayNs;

use super::{EffectCommand, EffectRenderer, speed_scaled};
use crate::OutputDriver;
use crate::color::{OFF, composite};

impl<O: OutputDriver, D: DelayNs> EffectRenderer<O, D> {
    pub(super) async fn flash(&mut self, command: &EffectCommand) {
        let step = self.timings.phase_step * command.speed;
        let phase_end = self.timings.phase_end;
        let tick = self.timings.tick;
        let gap = speed_scaled(self.timings.flash_gap, command.speed);
        // phase i * step for every i with i * step < phase_end
        let steps = libm::ceilf(phase_end / step) as u32;

        for _ in 0..command.repeat_count {
            for i in 0..steps {
                let brightness = libm::sinf(i as f32 * step);
                let color = composite(command.color.scale(brightness), command.intensity);
                self.write(color.to_grb8());
                self.hold(tick).await;
            }

            self.write(OFF);
            self.hold(gap).await;
        }

        self.write(OFF);
    }
}

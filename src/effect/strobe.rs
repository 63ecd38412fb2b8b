use embedded_hal_async::delay::DelayNs;

use super::{EffectCommand, EffectRenderer, speed_scaled};
use crate::OutputDriver;
use crate::color::{OFF, composite};

impl<O: OutputDriver, D: DelayNs> EffectRenderer<O, D> {
    /// Blink the composited color `repeat_count` times.
    ///
    /// The color is composited once; on and off phases last the same time.
    pub(super) async fn strobe(&mut self, command: &EffectCommand) {
        let color = composite(command.color, command.intensity).to_grb8();
        let period = speed_scaled(self.timings.strobe_period, command.speed);

        for _ in 0..command.repeat_count {
            self.write(color);
            self.hold(period).await;
            self.write(OFF);
            self.hold(period).await;
        }

        self.write(OFF);
    }
}

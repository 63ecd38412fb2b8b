//! Render loop
//!
//! Drains the command queue one effect per iteration. Each iteration ends with
//! an idle hold, which gives the request handler a chance to run even when the
//! queue is empty.

use embedded_hal_async::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::effect::{EffectCommand, EffectKind, EffectRenderer, RenderWarning};
use crate::queue::Receiver;

/// What happened during one player iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The queue was empty
    Idle,
    /// An effect was rendered to completion
    Played(EffectKind),
    /// A command was popped and discarded without rendering
    Dropped(RenderWarning),
}

/// Effect player - owns the renderer and consumes the queue
pub struct EffectPlayer<'a, O: OutputDriver, D: DelayNs, const SIZE: usize> {
    commands: Receiver<'a, EffectCommand, SIZE>,
    renderer: EffectRenderer<O, D>,
}

impl<'a, O: OutputDriver, D: DelayNs, const SIZE: usize> EffectPlayer<'a, O, D, SIZE> {
    pub fn new(commands: Receiver<'a, EffectCommand, SIZE>, renderer: EffectRenderer<O, D>) -> Self {
        Self { commands, renderer }
    }

    /// Run one iteration: play at most one queued effect, then idle.
    pub async fn poll(&mut self) -> PlayOutcome {
        let outcome = match self.commands.pop() {
            Some(command) => self.play(&command).await,
            None => PlayOutcome::Idle,
        };

        self.renderer.idle().await;
        outcome
    }

    /// Play queued effects forever
    pub async fn run(&mut self) -> ! {
        loop {
            self.poll().await;
        }
    }

    async fn play(&mut self, command: &EffectCommand) -> PlayOutcome {
        #[cfg(feature = "esp32-log")]
        println!("[EffectPlayer.play] playing {}", command.kind);

        match self.renderer.render(command).await {
            Ok(()) => PlayOutcome::Played(command.kind),
            Err(warning) => {
                #[cfg(feature = "esp32-log")]
                println!("[EffectPlayer.play] dropped command: {}", warning);
                PlayOutcome::Dropped(warning)
            }
        }
    }

    pub fn renderer(&self) -> &EffectRenderer<O, D> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut EffectRenderer<O, D> {
        &mut self.renderer
    }
}

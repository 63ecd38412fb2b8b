#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;
use myrtio_effect_player::{EffectRenderer, EffectTimings, OutputDriver, Rgb};

pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Something the renderer did, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Show(Rgb),
    /// Hold in microseconds
    Hold(u32),
}

/// Shared log of driver and delay activity
#[derive(Clone, Default)]
pub struct Timeline(Rc<RefCell<Vec<Event>>>);

impl Timeline {
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn shows(&self) -> Vec<Rgb> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Show(color) => Some(*color),
                Event::Hold(_) => None,
            })
            .collect()
    }

    pub fn holds(&self) -> Vec<u32> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Hold(micros) => Some(*micros),
                Event::Show(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }
}

pub struct RecordingDriver {
    pending: Rgb,
    timeline: Timeline,
}

impl OutputDriver for RecordingDriver {
    fn fill(&mut self, color: Rgb) {
        self.pending = color;
    }

    fn show(&mut self) {
        self.timeline.push(Event::Show(self.pending));
    }
}

/// Delay that returns immediately and records the requested hold
pub struct RecordingDelay {
    timeline: Timeline,
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.timeline.push(Event::Hold(ns / 1000));
    }

    async fn delay_us(&mut self, us: u32) {
        self.timeline.push(Event::Hold(us));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.timeline.push(Event::Hold(ms.saturating_mul(1000)));
    }
}

pub type RecordingRenderer = EffectRenderer<RecordingDriver, RecordingDelay>;

pub fn recording_renderer() -> (RecordingRenderer, Timeline) {
    let timeline = Timeline::default();
    let renderer = EffectRenderer::new(
        RecordingDriver {
            pending: OFF,
            timeline: timeline.clone(),
        },
        RecordingDelay {
            timeline: timeline.clone(),
        },
        EffectTimings::default(),
    );
    (renderer, timeline)
}

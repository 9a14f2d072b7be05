//! Headless collaborator implementations
//!
//! Deterministic stand-ins for the windowed backend: a manually driven
//! clock, a scripted event queue, a canvas that records the latest frame's
//! draw calls, and null sinks. Tests and the demo binary run against these.

use std::cell::Cell;
use std::collections::VecDeque;

use super::{Canvas, Clock, Event, EventSource, Rect, TextPainter};
use crate::sim::color::Color;

/// Clock advanced by the test/demo harness. With a nonzero `step`, every
/// sample also advances the clock, so each host tick sees fresh time.
pub struct ManualClock {
    ms: Cell<u64>,
    step: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            ms: Cell::new(0),
            step: 0,
        }
    }

    /// Clock that advances by `step` ms on every sample.
    pub fn with_step(step: u64) -> Self {
        Self {
            ms: Cell::new(0),
            step,
        }
    }

    pub fn set(&self, ms: u64) {
        self.ms.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.ms.set(self.ms.get() + ms);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        let now = self.ms.get();
        self.ms.set(now + self.step);
        now
    }
}

/// Event source that replays a fixed queue, then reports no events.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }
}

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Clear(Color),
    FillRect(Rect, Color),
    OutlineRect(Rect, Color),
    FillCircle { cx: i32, cy: i32, radius: i32, color: Color },
    Present,
}

/// Canvas that records the latest frame. `clear` starts a new frame, so
/// after a host loop finishes `ops` holds the final rendered scene.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// All fill-rect calls of the recorded frame, in draw order.
    pub fn fill_rects(&self) -> Vec<(Rect, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect(r, c) => Some((*r, *c)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }

    fn outline_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::OutlineRect(rect, color));
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        self.ops.push(DrawOp::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn present(&mut self) {
        self.ops.push(DrawOp::Present);
    }
}

/// Canvas that discards everything (demo runs)
#[derive(Debug, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self, _color: Color) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
    fn outline_rect(&mut self, _rect: Rect, _color: Color) {}
    fn fill_circle(&mut self, _cx: i32, _cy: i32, _radius: i32, _color: Color) {}
    fn present(&mut self) {}
}

/// Text painter with a fixed-size glyph cell; records what was drawn.
#[derive(Debug, Default)]
pub struct RecordingText {
    pub drawn: Vec<(String, Color, i32, i32)>,
}

impl RecordingText {
    pub const GLYPH_W: i32 = 8;
    pub const GLYPH_H: i32 = 16;

    pub fn new() -> Self {
        Self::default()
    }
}

impl TextPainter for RecordingText {
    fn measure(&self, text: &str) -> Option<(i32, i32)> {
        Some((text.len() as i32 * Self::GLYPH_W, Self::GLYPH_H))
    }

    fn draw(&mut self, text: &str, color: Color, x: i32, y: i32) {
        self.drawn.push((text.to_string(), color, x, y));
    }
}

/// Text painter with no font: measurement always fails, draws are dropped.
#[derive(Debug, Default)]
pub struct NullText;

impl TextPainter for NullText {
    fn measure(&self, _text: &str) -> Option<(i32, i32)> {
        None
    }

    fn draw(&mut self, _text: &str, _color: Color, _x: i32, _y: i32) {}
}

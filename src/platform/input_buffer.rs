//=========================================================================
// Input Buffer
//=========================================================================
//
// Per-frame aggregation of platform input into one ordered stream.
//
// - discrete events (keys, clicks, wheel, close) keep arrival order;
//   consecutive duplicates are dropped
// - cursor motion is coalesced: a move directly after another move
//   replaces it, so the stream never holds two moves in a row
//
// Every event carries the instant the platform received it. The buffer
// is drained at every frame boundary (RedrawRequested).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Instant;

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, TimedEvent};

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    events: Vec<TimedEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    /// Records a cursor move, replacing an immediately preceding one.
    pub(crate) fn push_motion(&mut self, event: InputEvent, at: Instant) {
        match self.events.last_mut() {
            Some(last) if last.event.is_motion() => *last = TimedEvent::new(event, at),
            _ => self.events.push(TimedEvent::new(event, at)),
        }
    }

    /// Appends a discrete input unless it repeats the previous one.
    ///
    /// Clicks compare without position, so a press is only dropped when
    /// the same button was pressed again with no release in between.
    pub(crate) fn push_discrete(&mut self, event: InputEvent, at: Instant) {
        if self.events.last().map(|last| &last.event) != Some(&event) {
            self.events.push(TimedEvent::new(event, at));
        }
    }

    /// Takes this frame's events, or `None` when nothing was buffered.
    pub(crate) fn drain(&mut self) -> Option<Vec<TimedEvent>> {
        if self.is_empty() {
            return None;
        }

        let capacity = self.events.capacity();
        Some(std::mem::replace(&mut self.events, Vec::with_capacity(capacity)))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

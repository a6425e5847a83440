//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side receiver with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → input_batches → TickControl
//
// Bounded polling prevents starvation of the tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::TimedEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects platform events once per tick.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<TimedEvent>>,
}

impl EventCollector {
    const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
        }
    }

    /// Drains pending platform messages, at most `MAX_EVENTS_PER_FRAME`.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.input_batches.clear();
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!("Event queue backlog: drained {} messages this tick", drained);
        }

        TickControl::Continue
    }

    /// Input batches collected this tick, in arrival order.
    #[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crossbeam_channel::unbounded;
    use std::time::Instant;

    fn inputs(events: Vec<InputEvent>) -> PlatformEvent {
        let now = Instant::now();
        PlatformEvent::Inputs(events.into_iter().map(|e| TimedEvent::new(e, now)).collect())
    }

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn collect_aggregates_multiple_messages() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(inputs(vec![InputEvent::key_down(KeyCode::KeyA)])).unwrap();
        tx.send(inputs(vec![InputEvent::MouseMoved { x: 10.0, y: 20.0 }])).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(collector.batches().len(), 2);
    }

    #[test]
    fn batches_keep_arrival_order() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(inputs(vec![
            InputEvent::click(5.0, 5.0),
            InputEvent::MouseMoved { x: 9.0, y: 9.0 },
        ]))
        .unwrap();
        tx.send(inputs(vec![InputEvent::key_down(KeyCode::Enter)])).unwrap();
        collector.collect_frame();

        let batches = collector.take_batches();
        let order: Vec<InputEvent> = batches.into_iter().flatten().map(|t| t.event).collect();
        assert_eq!(
            order,
            vec![
                InputEvent::click(5.0, 5.0),
                InputEvent::MouseMoved { x: 9.0, y: 9.0 },
                InputEvent::key_down(KeyCode::Enter),
            ]
        );
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn collect_clears_previous_batches() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(inputs(vec![InputEvent::key_down(KeyCode::Space)])).unwrap();
        collector.collect_frame();
        assert_eq!(collector.batches().len(), 1);

        tx.send(inputs(vec![])).unwrap();
        collector.collect_frame();
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn collect_exits_on_shutdown() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Shutdown).unwrap();
        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_exits_on_disconnect() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);
        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_is_bounded_per_tick() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        for _ in 0..150 {
            tx.send(inputs(vec![InputEvent::key_down(KeyCode::KeyA)])).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.batches().len(), 100);
        collector.collect_frame();
        assert_eq!(collector.batches().len(), 50);
    }
}

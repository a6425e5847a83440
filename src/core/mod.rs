//=========================================================================
// Core Loop
//
// Drives the scene controller on the logic (non-platform) thread.
//
// Responsibilities:
// - Receive input batches from the platform via crossbeam channel
// - Dispatch every event to the controller, one at a time, in arrival
//   order, timed at the instant the platform received it
// - Publish one read-only frame snapshot per tick
// - Maintain deterministic pacing using a fixed tick rate (TPS)
//
// Notes:
// The loop owns all controller and engine state. It stops when the
// controller stops or the platform goes away; dropping the snapshot
// sender then tells the platform to close its window.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod clock;
pub mod input;
pub(crate) mod platform_bridge;
pub mod scene;
pub mod ui;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::render::FrameSnapshot;
use input::TimedEvent;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use scene::SceneController;

//=== CoreLoop ============================================================

/// Fixed-rate driver for a [`SceneController`].
pub(crate) struct CoreLoop {
    controller: SceneController,
    tick: Duration,
}

impl CoreLoop {
    const DEFAULT_TICK: Duration = Duration::from_nanos(1_000_000_000 / 60);

    /// A rate whose period does not fit a `Duration` falls back to 60 TPS.
    pub(crate) fn new(controller: SceneController, tps: f64) -> Self {
        let tick = Duration::try_from_secs_f64(1.0 / tps).unwrap_or_else(|_| {
            warn!("Unusable tick rate {}, falling back to 60 TPS", tps);
            Self::DEFAULT_TICK
        });
        Self { controller, tick }
    }

    /// Spawns the logic thread.
    ///
    /// Each tick:
    ///  1. Collects platform input
    ///  2. Dispatches events to the controller
    ///  3. Publishes a snapshot
    ///  4. Sleeps to maintain fixed pacing
    pub(crate) fn spawn(
        self,
        receiver: Receiver<PlatformEvent>,
        frames: Sender<FrameSnapshot>,
    ) -> thread::JoinHandle<()> {
        thread::spawn(move || self.run(receiver, frames))
    }

    fn run(mut self, receiver: Receiver<PlatformEvent>, frames: Sender<FrameSnapshot>) {
        let mut collector = EventCollector::new(receiver);
        info!("Core loop started (tick {:?})", self.tick);

        loop {
            let frame_start = Instant::now();

            //--- Step 1: Gather platform events ----------------------------
            if collector.collect_frame() == TickControl::Exit {
                info!("Platform gone, core loop exiting");
                break;
            }

            //--- Step 2: Dispatch ------------------------------------------
            if !self.dispatch(collector.take_batches()) {
                info!("Controller stopped, core loop exiting");
                break;
            }

            //--- Step 3: Publish -------------------------------------------
            if !self.publish(&frames) {
                info!("Snapshot channel closed, core loop exiting");
                break;
            }

            //--- Step 4: Maintain deterministic pacing ---------------------
            let elapsed = frame_start.elapsed();
            if elapsed < self.tick {
                thread::sleep(self.tick - elapsed);
            }
        }
    }

    /// Feeds every collected event to the controller. Returns `false` once
    /// the controller stopped; remaining events are discarded.
    fn dispatch(&mut self, batches: Vec<Vec<TimedEvent>>) -> bool {
        for timed in batches.into_iter().flatten() {
            self.controller.handle_event_at(&timed.event, timed.at);
            if !self.controller.is_running() {
                return false;
            }
        }
        true
    }

    /// Sends this tick's snapshot. A full channel drops the frame; a
    /// closed one ends the loop.
    fn publish(&self, frames: &Sender<FrameSnapshot>) -> bool {
        let Some(frame) = self.controller.advance_frame() else {
            return false;
        };

        match frames.try_send(frame) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                debug!("Renderer behind, frame dropped");
                true
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!("Renderer disconnected");
                false
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::scene::SceneKind;
    use crate::games::WordCorpus;
    use crossbeam_channel::{bounded, unbounded};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn core_loop() -> CoreLoop {
        CoreLoop::new(controller(), 240.0)
    }

    fn stamped(events: Vec<InputEvent>) -> Vec<TimedEvent> {
        let now = Instant::now();
        events.into_iter().map(|e| TimedEvent::new(e, now)).collect()
    }

    fn inputs(events: Vec<InputEvent>) -> PlatformEvent {
        PlatformEvent::Inputs(stamped(events))
    }

    fn controller() -> SceneController {
        let corpus = WordCorpus::parse("alpha beta gamma delta").expect("words");
        SceneController::new(
            corpus,
            Box::new(ManualClock::new()),
            Box::new(SmallRng::seed_from_u64(42)),
        )
    }

    #[test]
    fn tick_follows_tps() {
        let core = CoreLoop::new(controller(), 250.0);
        assert_eq!(core.tick, Duration::from_millis(4));
    }

    #[test]
    fn unrepresentable_tick_falls_back() {
        let core = CoreLoop::new(controller(), 1e-300);
        assert_eq!(core.tick, CoreLoop::DEFAULT_TICK);
    }

    #[test]
    fn dispatch_stops_at_quit() {
        let mut core = core_loop();
        let keep_going = core.dispatch(vec![stamped(vec![
            InputEvent::key_down(KeyCode::Space),
            InputEvent::key_down(KeyCode::Escape),
            InputEvent::click(60.0, 35.0),
        ])]);

        assert!(!keep_going);
        assert_eq!(core.controller.active_scene(), SceneKind::Menu);
    }

    #[test]
    fn dispatch_times_events_at_their_stamp() {
        let mut core = core_loop();
        let t0 = Instant::now();
        let at = |event: InputEvent, t: Instant| TimedEvent::new(event, t);

        assert!(core.dispatch(vec![vec![
            at(InputEvent::key_down(KeyCode::Space), t0),
            at(InputEvent::click(265.0, 365.0), t0),
            at(InputEvent::click(640.0, 430.0), t0),
        ]]));
        assert_eq!(core.controller.active_scene(), SceneKind::Reaction);

        let wait = core.controller.reaction().engine().wait_duration();
        let pressed = t0 + wait + Duration::from_millis(90);
        assert!(core.dispatch(vec![vec![at(InputEvent::click(640.0, 430.0), pressed)]]));

        assert_eq!(core.controller.reaction().engine().last_reaction_ms(), Some(90));
    }

    #[test]
    fn publish_sends_current_scene() {
        let core = core_loop();
        let (tx, rx) = unbounded();

        assert!(core.publish(&tx));
        assert_eq!(rx.try_recv().map(|f| f.scene), Ok(SceneKind::Intro));
    }

    #[test]
    fn publish_tolerates_full_channel() {
        let core = core_loop();
        let (tx, rx) = bounded(1);

        assert!(core.publish(&tx));
        assert!(core.publish(&tx));
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn publish_fails_when_renderer_is_gone() {
        let core = core_loop();
        let (tx, rx) = unbounded();
        drop(rx);
        assert!(!core.publish(&tx));
    }

    #[test]
    fn thread_exits_on_escape_and_drops_frames_sender() {
        let (event_tx, event_rx) = unbounded();
        let (frame_tx, frame_rx) = unbounded();
        let handle = core_loop().spawn(event_rx, frame_tx);

        event_tx.send(inputs(vec![InputEvent::key_down(KeyCode::Escape)])).unwrap();
        handle.join().expect("core thread panicked");

        // Drain whatever was published before the quit, then observe the close.
        while frame_rx.try_recv().is_ok() {}
        assert!(frame_rx.recv().is_err());
    }

    #[test]
    fn thread_exits_when_platform_disconnects() {
        let (event_tx, event_rx) = unbounded::<PlatformEvent>();
        let (frame_tx, _frame_rx) = unbounded();
        let handle = core_loop().spawn(event_rx, frame_tx);

        drop(event_tx);
        handle.join().expect("core thread panicked");
    }
}

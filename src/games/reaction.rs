//=========================================================================
// Reaction Engine
//=========================================================================
//
// Timing state machine for the reaction-time test.
//
// Architecture:
// ```text
//   Idle ──click──> Waiting ──(elapsed >= wait)──> Ready ──click──> Idle
//                      │                                  (time stored)
//                      └──click (elapsed < wait)──> Failed ──click──> Idle
// ```
//
// Readiness is never scheduled. It is derived by comparing monotonic
// timestamps whenever the phase is queried or a click arrives, so no
// timer thread is involved.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;

//=== Constants ===========================================================

/// Wait durations are drawn (in whole seconds) from this half-open range.
const WAIT_SECONDS: std::ops::Range<u64> = 1..5;

//=== Phase ===============================================================

/// Observable phase of the reaction test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the player to start an attempt.
    Idle,

    /// Attempt started, the go signal has not been given yet.
    Waiting,

    /// The wait duration has elapsed; the next click is measured.
    Ready,

    /// The player clicked before the go signal.
    Failed,
}

//=== ClickOutcome ========================================================

/// Result of feeding one click into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A new attempt started (Idle → Waiting).
    Started,

    /// Clicked before the go signal (Waiting → Failed).
    FalseStart,

    /// Clicked after the go signal; carries the reaction time in ms.
    Measured(u64),

    /// Failure acknowledged, engine reset (Failed → Idle).
    Reset,
}

//--- Internal state ------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Armed {
    Idle,
    Waiting { since: Instant },
    Failed,
}

//=== ReactionEngine ======================================================

/// Pure state holder for the reaction-time test.
///
/// Every time-dependent method takes `now` explicitly, so callers decide
/// which clock drives the engine.
#[derive(Debug, Clone)]
pub struct ReactionEngine {
    armed: Armed,
    wait_duration: Duration,
    last_reaction_ms: Option<u64>,
}

impl ReactionEngine {
    /// Creates an idle engine with the shortest wait duration.
    pub fn new() -> Self {
        Self {
            armed: Armed::Idle,
            wait_duration: Duration::from_secs(WAIT_SECONDS.start),
            last_reaction_ms: None,
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Returns to `Idle` and draws a fresh wait duration.
    pub fn setup<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.armed = Armed::Idle;
        self.draw_wait_duration(rng);
        debug!("Reaction test reset (wait: {:?})", self.wait_duration);
    }

    /// Applies a click at `now` and reports what it did.
    pub fn click<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> ClickOutcome {
        match self.armed {
            Armed::Idle => {
                self.draw_wait_duration(rng);
                self.armed = Armed::Waiting { since: now };
                debug!("Reaction attempt started (wait: {:?})", self.wait_duration);
                ClickOutcome::Started
            }

            Armed::Waiting { since } => {
                let elapsed = now.saturating_duration_since(since);
                if elapsed < self.wait_duration {
                    self.armed = Armed::Failed;
                    debug!("False start after {:?}", elapsed);
                    return ClickOutcome::FalseStart;
                }

                let reaction = elapsed - self.wait_duration;
                let ms = u64::try_from(reaction.as_millis()).unwrap_or(u64::MAX);
                self.last_reaction_ms = Some(ms);
                self.armed = Armed::Idle;
                debug!("Reaction measured: {} ms", ms);
                ClickOutcome::Measured(ms)
            }

            Armed::Failed => {
                self.setup(rng);
                ClickOutcome::Reset
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Phase as observed at `now`. `Waiting` reads as `Ready` once the wait
    /// duration has elapsed.
    pub fn phase(&self, now: Instant) -> Phase {
        match self.armed {
            Armed::Idle => Phase::Idle,
            Armed::Failed => Phase::Failed,
            Armed::Waiting { since } => {
                if now.saturating_duration_since(since) >= self.wait_duration {
                    Phase::Ready
                } else {
                    Phase::Waiting
                }
            }
        }
    }

    pub fn wait_duration(&self) -> Duration {
        self.wait_duration
    }

    /// Timestamp of the current attempt's start, if one is running.
    pub fn phase_start_time(&self) -> Option<Instant> {
        match self.armed {
            Armed::Waiting { since } => Some(since),
            _ => None,
        }
    }

    pub fn last_reaction_ms(&self) -> Option<u64> {
        self.last_reaction_ms
    }

    //--- Internal Helpers -------------------------------------------------

    fn draw_wait_duration<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.wait_duration = Duration::from_secs(rng.random_range(WAIT_SECONDS));
    }
}

impl Default for ReactionEngine {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

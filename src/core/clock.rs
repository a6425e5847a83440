//=========================================================================
// Clock
//=========================================================================
//
// Monotonic time source injected into the scene controller.
//
// Production code reads `Instant::now()`; tests drive a `ManualClock`
// forward explicitly so timing windows are deterministic.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

//=== Clock Trait =========================================================

/// Source of monotonic timestamps.
pub trait Clock: Send {
    fn now(&self) -> Instant;
}

//=== SystemClock =========================================================

/// Wall-clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

//=== ManualClock =========================================================

/// Clock that only moves when told to.
///
/// Clones share the same offset, so a test can keep a handle while the
/// controller owns the boxed original.
///
/// ```
/// use std::time::Duration;
/// use mindbench::core::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// let start = clock.now();
///
/// handle.advance(Duration::from_millis(250));
/// assert_eq!(clock.now() - start, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset_nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset_nanos: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Moves every clone of this clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.offset_nanos.fetch_add(nanos, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + Duration::from_nanos(self.offset_nanos.load(Ordering::SeqCst))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

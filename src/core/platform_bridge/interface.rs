//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages crossing the thread boundary in both directions.
//
//   platform ──PlatformEvent──> core
//   core ─────FrameSnapshot───> platform
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::TimedEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// One frame of input in arrival order. Consecutive cursor moves are
    /// already coalesced into the last one.
    Inputs(Vec<TimedEvent>),

    /// The platform cannot continue (window creation failed).
    Shutdown,
}

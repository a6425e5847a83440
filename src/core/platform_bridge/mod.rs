//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the platform layer (winit) and the core loop, so the
// window backend can change without touching scene logic.
//
// Components:
// - `interface`: messages crossing the thread boundary
// - `event_collector`: core-side event collection and buffering
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;

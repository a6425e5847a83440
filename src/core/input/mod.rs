//=========================================================================
// Input Types
//=========================================================================
//
// Platform-independent input vocabulary shared by the platform layer
// (producer) and the scene controller (consumer).
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton, TimedEvent};

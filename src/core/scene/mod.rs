//=========================================================================
// Scene System
//=========================================================================
//
// Exactly one scene is active at a time. The controller routes each input
// event to it and applies the transition it returns.
//
// Architecture:
//   SceneController
//     ├─ active: SceneKind
//     └─ scenes: Intro, Menu, Reaction, DigitSpan, WordRecognition
//
// Flow:
//   handle_event() → active Scene::handle_event() → SceneTransition
//   advance_frame() → active Scene::view() → FrameSnapshot
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Instant;

use rand::RngCore;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::ui::ClickRegion;
use crate::render::SceneView;

//=== Module Declarations =================================================

mod controller;
mod digit_span;
mod intro;
mod menu;
mod reaction;
mod word_recognition;

//=== Public API ==========================================================

pub use controller::SceneController;
pub use digit_span::{DigitSpanScene, Prompt};
pub use intro::IntroScene;
pub use menu::MenuScene;
pub use reaction::ReactionScene;
pub use word_recognition::WordRecognitionScene;

//=== SceneKind ===========================================================

/// Identifies one of the application's screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Intro,
    Menu,
    Reaction,
    DigitSpan,
    WordRecognition,
}

//=== SceneTransition =====================================================

/// What the controller should do after a scene handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneTransition {
    /// Keep the current scene active.
    #[default]
    Stay,

    /// Make another scene active (its `on_enter` runs immediately).
    Switch(SceneKind),
}

//=== SceneContext ========================================================

/// Per-event services handed to scenes by the controller.
pub struct SceneContext<'a> {
    /// Timestamp of the event being handled.
    pub now: Instant,

    /// Shared random source for every engine.
    pub rng: &'a mut dyn RngCore,
}

//=== Scene Trait =========================================================

/// Behavior of a single screen.
///
/// Quit events never reach a scene; the controller consumes them first.
pub trait Scene: Send {
    /// Called once each time the scene becomes active.
    fn on_enter(&mut self, _context: &mut SceneContext<'_>) {}

    /// Reacts to one input event.
    fn handle_event(&mut self, event: &InputEvent, context: &mut SceneContext<'_>)
        -> SceneTransition;

    /// Read-only drawing state at `now`.
    fn view(&self, now: Instant) -> SceneView;

    /// Clickable regions, used for hover reporting.
    fn regions(&self) -> &[ClickRegion] {
        &[]
    }
}

//=========================================================================
// Render Collaborator
//=========================================================================
//
// Read-only per-frame snapshots produced by the scene controller and the
// renderers that consume them.
//
// Architecture:
// ```text
//   SceneController::advance_frame() ──> FrameSnapshot ──> Renderer
//        (logic thread)                   (channel)        (main thread)
// ```
//
// Snapshots own their data so they can cross the thread boundary.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod title;

//=== Public API ==========================================================

pub use title::TitleRenderer;

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::scene::SceneKind;
use crate::games::Phase;

//=== FrameSnapshot =======================================================

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub scene: SceneKind,
    pub view: SceneView,
    /// Label of the region under the cursor in the active scene.
    pub hovered: Option<&'static str>,
}

//=== SceneView ===========================================================

/// Scene-specific drawing state.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneView {
    Intro,

    Menu,

    Reaction {
        phase: Phase,
        /// Text on the reaction pad.
        label: String,
        last_reaction_ms: Option<u64>,
    },

    DigitSpan {
        score: u32,
        session_active: bool,
        /// The number to memorize, present only while it is on display.
        challenge: Option<String>,
        /// Display time left for the visible challenge.
        time_remaining: Option<Duration>,
        /// Text box contents: typed input when focused, a prompt otherwise.
        text: String,
        focused: bool,
    },

    WordRecognition {
        score: u32,
        word: String,
    },
}

//=== Renderer ============================================================

/// Consumer of frame snapshots.
pub trait Renderer {
    fn render(&mut self, frame: &FrameSnapshot);
}

//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use mindbench::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Application
pub use crate::app::{App, AppBuilder};
pub use crate::config::AppConfig;
pub use crate::error::{AppError, CorpusError, PlatformError};

// Time
pub use crate::core::clock::{Clock, ManualClock, SystemClock};

// Input
pub use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton, TimedEvent};

// Scenes
pub use crate::core::scene::{Scene, SceneContext, SceneController, SceneKind, SceneTransition};

// Games
pub use crate::games::{
    AnswerOutcome, ClickOutcome, DigitSpanEngine, Phase, ReactionEngine, WordAnswer, WordCorpus,
    WordRecognitionEngine,
};

// Rendering
pub use crate::render::{FrameSnapshot, Renderer, SceneView, TitleRenderer};

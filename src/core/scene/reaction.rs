//=========================================================================
// Reaction Scene
//=========================================================================
//
// Hosts the reaction-time engine behind a single large pad. The pad label
// follows the engine phase; a fresh engine is created on every entry.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Instant;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{Scene, SceneContext, SceneKind, SceneTransition};
use crate::core::input::InputEvent;
use crate::core::ui::{hit_test, layout, ClickRegion};
use crate::games::{ClickOutcome, Phase, ReactionEngine};
use crate::render::SceneView;

//=== Labels ==============================================================

pub const LABEL_BEGIN: &str = "Click to Begin!";
pub const LABEL_WAIT: &str = "Wait!";
pub const LABEL_GO: &str = "GO!";
pub const LABEL_FAILED: &str = "Woah! Try again!";

//=== ReactionScene =======================================================

#[derive(Debug, Default)]
pub struct ReactionScene {
    engine: ReactionEngine,
    last_outcome: Option<ClickOutcome>,
}

impl ReactionScene {
    pub fn engine(&self) -> &ReactionEngine {
        &self.engine
    }

    /// Pad text for the given phase.
    fn label(&self, phase: Phase) -> String {
        match phase {
            Phase::Idle => match self.last_outcome {
                Some(ClickOutcome::Measured(ms)) => format!("{} ms", ms),
                _ => LABEL_BEGIN.to_string(),
            },
            Phase::Waiting => LABEL_WAIT.to_string(),
            Phase::Ready => LABEL_GO.to_string(),
            Phase::Failed => LABEL_FAILED.to_string(),
        }
    }
}

impl Scene for ReactionScene {
    fn on_enter(&mut self, context: &mut SceneContext<'_>) {
        self.engine = ReactionEngine::new();
        self.engine.setup(context.rng);
        self.last_outcome = None;
        debug!("Reaction test armed (wait {:?})", self.engine.wait_duration());
    }

    fn handle_event(&mut self, event: &InputEvent, context: &mut SceneContext<'_>) -> SceneTransition {
        let Some((x, y)) = event.click_position() else {
            return SceneTransition::Stay;
        };

        match hit_test(&layout::REACTION, x, y) {
            Some(layout::BACK) => SceneTransition::Switch(SceneKind::Menu),
            Some(layout::REACTION_PAD) => {
                let outcome = self.engine.click(context.now, context.rng);
                match outcome {
                    ClickOutcome::Measured(ms) => info!("Reaction measured: {} ms", ms),
                    ClickOutcome::FalseStart => debug!("False start"),
                    _ => {}
                }
                self.last_outcome = Some(outcome);
                SceneTransition::Stay
            }
            _ => SceneTransition::Stay,
        }
    }

    fn view(&self, now: Instant) -> SceneView {
        let phase = self.engine.phase(now);
        SceneView::Reaction {
            phase,
            label: self.label(phase),
            last_reaction_ms: self.engine.last_reaction_ms(),
        }
    }

    fn regions(&self) -> &[ClickRegion] {
        &layout::REACTION
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

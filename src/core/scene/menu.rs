//=========================================================================
// Menu Scene
//=========================================================================

use std::time::Instant;

use super::{Scene, SceneContext, SceneKind, SceneTransition};
use crate::core::input::InputEvent;
use crate::core::ui::{hit_test, layout, ClickRegion};
use crate::render::SceneView;

/// Game selection screen.
#[derive(Debug, Default)]
pub struct MenuScene;

impl Scene for MenuScene {
    fn handle_event(&mut self, event: &InputEvent, _context: &mut SceneContext<'_>) -> SceneTransition {
        let Some((x, y)) = event.click_position() else {
            return SceneTransition::Stay;
        };

        match hit_test(&layout::MENU, x, y) {
            Some(layout::REACTION_TIME) => SceneTransition::Switch(SceneKind::Reaction),
            Some(layout::NUMBER_MEMORY) => SceneTransition::Switch(SceneKind::DigitSpan),
            Some(layout::VERBAL_MEMORY) => SceneTransition::Switch(SceneKind::WordRecognition),
            Some(layout::BACK) => SceneTransition::Switch(SceneKind::Intro),
            _ => SceneTransition::Stay,
        }
    }

    fn view(&self, _now: Instant) -> SceneView {
        SceneView::Menu
    }

    fn regions(&self) -> &[ClickRegion] {
        &layout::MENU
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Intro Scene
//=========================================================================

use std::time::Instant;

use super::{Scene, SceneContext, SceneKind, SceneTransition};
use crate::core::input::InputEvent;
use crate::render::SceneView;

/// Title screen: any key, mouse button or wheel opens the menu.
#[derive(Debug, Default)]
pub struct IntroScene;

impl Scene for IntroScene {
    fn handle_event(&mut self, event: &InputEvent, _context: &mut SceneContext<'_>) -> SceneTransition {
        match event {
            InputEvent::KeyDown { .. } | InputEvent::MouseButtonDown { .. } | InputEvent::MouseWheel => {
                SceneTransition::Switch(SceneKind::Menu)
            }
            _ => SceneTransition::Stay,
        }
    }

    fn view(&self, _now: Instant) -> SceneView {
        SceneView::Intro
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

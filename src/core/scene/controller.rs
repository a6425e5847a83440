//=========================================================================
// Scene Controller
//=========================================================================
//
// Owns every scene and exactly one active scene key.
//
// Responsibilities:
// - Route input events to the active scene, one at a time
// - Apply scene transitions and run `on_enter` exactly once per entry
// - Stop on Escape or window close from any scene
// - Produce read-only frame snapshots
//
// The controller owns no loop; `CoreLoop` drives it once per tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Instant;

use log::{debug, info, trace};
use rand::RngCore;

//=== Internal Dependencies ===============================================

use super::{
    DigitSpanScene, IntroScene, MenuScene, ReactionScene, Scene, SceneContext, SceneKind,
    SceneTransition, WordRecognitionScene,
};
use crate::core::clock::Clock;
use crate::core::input::InputEvent;
use crate::core::ui::hit_test;
use crate::games::WordCorpus;
use crate::render::FrameSnapshot;

//=== SceneSet ============================================================

/// Storage for all scenes; scenes keep their state between activations.
struct SceneSet {
    intro: IntroScene,
    menu: MenuScene,
    reaction: ReactionScene,
    digit_span: DigitSpanScene,
    word_recognition: WordRecognitionScene,
}

impl SceneSet {
    fn get(&self, kind: SceneKind) -> &dyn Scene {
        match kind {
            SceneKind::Intro => &self.intro,
            SceneKind::Menu => &self.menu,
            SceneKind::Reaction => &self.reaction,
            SceneKind::DigitSpan => &self.digit_span,
            SceneKind::WordRecognition => &self.word_recognition,
        }
    }

    fn get_mut(&mut self, kind: SceneKind) -> &mut dyn Scene {
        match kind {
            SceneKind::Intro => &mut self.intro,
            SceneKind::Menu => &mut self.menu,
            SceneKind::Reaction => &mut self.reaction,
            SceneKind::DigitSpan => &mut self.digit_span,
            SceneKind::WordRecognition => &mut self.word_recognition,
        }
    }
}

//=== SceneController =====================================================

/// Finite-state navigation between the intro, the menu and the games.
pub struct SceneController {
    active: SceneKind,
    running: bool,
    scenes: SceneSet,
    clock: Box<dyn Clock>,
    rng: Box<dyn RngCore + Send>,
    /// Last known cursor position, for hover reporting.
    cursor: Option<(f32, f32)>,
}

impl SceneController {
    //--- Construction -----------------------------------------------------

    /// Creates a running controller on the intro screen.
    ///
    /// The corpus is shuffled once here with the injected random source.
    pub fn new(corpus: WordCorpus, clock: Box<dyn Clock>, mut rng: Box<dyn RngCore + Send>) -> Self {
        let word_recognition = WordRecognitionScene::new(corpus, &mut *rng);
        info!(
            "Scene controller ready ({} words)",
            word_recognition.engine().vocabulary_len()
        );

        Self {
            active: SceneKind::Intro,
            running: true,
            scenes: SceneSet {
                intro: IntroScene,
                menu: MenuScene,
                reaction: ReactionScene::default(),
                digit_span: DigitSpanScene::new(),
                word_recognition,
            },
            clock,
            rng,
            cursor: None,
        }
    }

    //--- Event Dispatch ---------------------------------------------------

    /// Handles one input event at the clock's current time.
    pub fn handle_event(&mut self, event: &InputEvent) {
        let now = self.clock.now();
        self.handle_event_at(event, now);
    }

    /// Handles one input event that arrived at `at`. Scenes see `at` as the
    /// event time. Does nothing once the controller stopped.
    ///
    /// `at` must come from the same time base as the controller's clock.
    pub fn handle_event_at(&mut self, event: &InputEvent, at: Instant) {
        if !self.running {
            return;
        }

        if event.is_quit() {
            info!("Quit requested from {:?}", self.active);
            self.running = false;
            return;
        }

        match event {
            InputEvent::MouseMoved { x, y } | InputEvent::MouseButtonDown { x, y, .. } => {
                self.cursor = Some((*x, *y));
            }
            _ => {}
        }

        trace!("{:?} <- {:?}", self.active, event);

        let transition = {
            let mut context = SceneContext {
                now: at,
                rng: &mut *self.rng,
            };
            self.scenes.get_mut(self.active).handle_event(event, &mut context)
        };

        if let SceneTransition::Switch(next) = transition {
            self.enter(next, at);
        }
    }

    fn enter(&mut self, next: SceneKind, now: Instant) {
        info!("Scene transition: {:?} -> {:?}", self.active, next);
        self.active = next;

        let mut context = SceneContext {
            now,
            rng: &mut *self.rng,
        };
        self.scenes.get_mut(next).on_enter(&mut context);
        debug!("Entered {:?}", next);
    }

    //--- Frame Hook -------------------------------------------------------

    /// Read-only snapshot of the active scene, or `None` once stopped.
    pub fn advance_frame(&self) -> Option<FrameSnapshot> {
        if !self.running {
            return None;
        }

        let scene = self.scenes.get(self.active);
        let hovered = self
            .cursor
            .and_then(|(x, y)| hit_test(scene.regions(), x, y));

        Some(FrameSnapshot {
            scene: self.active,
            view: scene.view(self.clock.now()),
            hovered,
        })
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn active_scene(&self) -> SceneKind {
        self.active
    }

    pub fn reaction(&self) -> &ReactionScene {
        &self.scenes.reaction
    }

    pub fn digit_span(&self) -> &DigitSpanScene {
        &self.scenes.digit_span
    }

    pub fn word_recognition(&self) -> &WordRecognitionScene {
        &self.scenes.word_recognition
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Word Recognition Scene
//=========================================================================

use std::time::Instant;

use log::{debug, info};
use rand::Rng;

use super::{Scene, SceneContext, SceneKind, SceneTransition};
use crate::core::input::InputEvent;
use crate::core::ui::{hit_test, layout, ClickRegion};
use crate::games::{AnswerOutcome, WordAnswer, WordCorpus, WordRecognitionEngine};
use crate::render::SceneView;

/// Verbal memory screen with "New" and "Shown" buttons.
#[derive(Debug)]
pub struct WordRecognitionScene {
    engine: WordRecognitionEngine,
}

impl WordRecognitionScene {
    /// Builds the engine once; the shuffled vocabulary is kept for the
    /// lifetime of the application.
    pub fn new<R: Rng + ?Sized>(corpus: WordCorpus, rng: &mut R) -> Self {
        Self {
            engine: WordRecognitionEngine::new(corpus, rng),
        }
    }

    pub fn engine(&self) -> &WordRecognitionEngine {
        &self.engine
    }
}

impl Scene for WordRecognitionScene {
    fn on_enter(&mut self, context: &mut SceneContext<'_>) {
        self.engine.setup(context.rng);
    }

    fn handle_event(&mut self, event: &InputEvent, context: &mut SceneContext<'_>) -> SceneTransition {
        let Some((x, y)) = event.click_position() else {
            return SceneTransition::Stay;
        };

        let Some(label) = hit_test(&layout::WORD_RECOGNITION, x, y) else {
            return SceneTransition::Stay;
        };
        if label == layout::BACK {
            return SceneTransition::Switch(SceneKind::Menu);
        }

        if let Ok(answer) = label.parse::<WordAnswer>() {
            let score = self.engine.score();
            match self.engine.submit(answer, context.rng) {
                AnswerOutcome::Correct => debug!("{} was right, score {}", answer, score + 1),
                AnswerOutcome::Restarted => info!("Verbal memory run ended at score {}", score),
            }
        }
        SceneTransition::Stay
    }

    fn view(&self, _now: Instant) -> SceneView {
        SceneView::WordRecognition {
            score: self.engine.score(),
            word: self.engine.current_word().to_string(),
        }
    }

    fn regions(&self) -> &[ClickRegion] {
        &layout::WORD_RECOGNITION
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

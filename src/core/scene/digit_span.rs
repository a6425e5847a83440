//=========================================================================
// Digit Span Scene
//=========================================================================
//
// Number memory screen: a text box takes the start command and the
// answers, and the current challenge is shown for the engine's display
// window after every start or correct answer.
//
// Text box rules:
// - click inside focuses and clears it, click outside unfocuses it
// - typing needs focus and is blocked while the challenge is on display
// - Enter + "start" begins a session, Enter + digits submits an answer
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{Scene, SceneContext, SceneKind, SceneTransition};
use crate::core::input::{InputEvent, KeyCode, Modifiers};
use crate::core::ui::{hit_test, layout, ClickRegion};
use crate::games::{AnswerOutcome, DigitSpanEngine};
use crate::render::SceneView;

//=== Constants ===========================================================

const START_COMMAND: &str = "start";

//=== Prompt ==============================================================

/// Placeholder shown in the unfocused text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Start,
    Answer,
    Retry,
}

impl Prompt {
    pub fn text(self) -> &'static str {
        match self {
            Self::Start => "Write \"start\" and press enter to begin!",
            Self::Answer => "Write the number here!",
            Self::Retry => "Click again and write \"start\"",
        }
    }
}

//=== DigitSpanScene ======================================================

#[derive(Debug)]
pub struct DigitSpanScene {
    engine: DigitSpanEngine,
    input: String,
    focused: bool,
    prompt: Prompt,
    /// When the current challenge went on display.
    shown_since: Option<Instant>,
}

impl DigitSpanScene {
    pub fn new() -> Self {
        Self {
            engine: DigitSpanEngine::new(),
            input: String::new(),
            focused: false,
            prompt: Prompt::Start,
            shown_since: None,
        }
    }

    pub fn engine(&self) -> &DigitSpanEngine {
        &self.engine
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn prompt(&self) -> Prompt {
        self.prompt
    }

    /// Display time left for the challenge, `None` once it is hidden.
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        let since = self.shown_since?;
        self.engine
            .display_window()
            .checked_sub(now.saturating_duration_since(since))
            .filter(|left| !left.is_zero())
    }

    fn challenge_visible(&self, now: Instant) -> bool {
        self.time_remaining(now).is_some()
    }

    //--- Event Handling ---------------------------------------------------

    fn handle_click(&mut self, x: f32, y: f32) -> SceneTransition {
        match hit_test(&layout::DIGIT_SPAN, x, y) {
            Some(layout::BACK) => return SceneTransition::Switch(SceneKind::Menu),
            Some(layout::TEXT_BOX) => {
                self.focused = true;
                self.input.clear();
            }
            _ => {
                if self.focused {
                    self.focused = false;
                    self.input.clear();
                }
                self.prompt = if self.engine.session_active() {
                    Prompt::Answer
                } else {
                    Prompt::Start
                };
            }
        }
        SceneTransition::Stay
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: Modifiers, context: &mut SceneContext<'_>) {
        if !self.focused {
            return;
        }

        match key {
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter if !self.engine.session_active() => {
                if self.input.to_lowercase() == START_COMMAND {
                    self.engine.start_session();
                    self.shown_since = Some(context.now);
                    self.input.clear();
                    info!("Number memory session started");
                }
            }
            KeyCode::Enter => self.submit_answer(context),
            _ => {
                if modifiers.is_chord() || self.challenge_visible(context.now) {
                    return;
                }
                if let Some(c) = key.to_char() {
                    self.input.push(c);
                }
            }
        }
    }

    fn submit_answer(&mut self, context: &mut SceneContext<'_>) {
        let answer = self.input.trim();
        if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
            return;
        }

        let answer = answer.to_string();
        self.input.clear();

        match self.engine.submit(&answer, context.rng) {
            AnswerOutcome::Correct => {
                debug!("Correct answer, score {}", self.engine.score());
                self.shown_since = Some(context.now);
            }
            AnswerOutcome::Restarted => {
                info!("Number memory run ended");
                self.shown_since = None;
                self.focused = false;
                self.prompt = Prompt::Retry;
            }
        }
    }
}

impl Default for DigitSpanScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for DigitSpanScene {
    fn on_enter(&mut self, context: &mut SceneContext<'_>) {
        self.engine.setup(context.rng);
        self.input.clear();
        self.focused = false;
        self.prompt = Prompt::Start;
        self.shown_since = None;
    }

    fn handle_event(&mut self, event: &InputEvent, context: &mut SceneContext<'_>) -> SceneTransition {
        match event {
            InputEvent::MouseButtonDown { x, y, .. } => self.handle_click(*x, *y),
            InputEvent::KeyDown { key, modifiers } => {
                self.handle_key(*key, *modifiers, context);
                SceneTransition::Stay
            }
            _ => SceneTransition::Stay,
        }
    }

    fn view(&self, now: Instant) -> SceneView {
        let time_remaining = self.time_remaining(now);
        let text = if self.focused {
            self.input.clone()
        } else {
            self.prompt.text().to_string()
        };

        SceneView::DigitSpan {
            score: self.engine.score(),
            session_active: self.engine.session_active(),
            challenge: time_remaining.map(|_| self.engine.current_challenge().to_string()),
            time_remaining,
            text,
            focused: self.focused,
        }
    }

    fn regions(&self) -> &[ClickRegion] {
        &layout::DIGIT_SPAN
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const TEXT_BOX: (f32, f32) = (640.0, 530.0);
    const ELSEWHERE: (f32, f32) = (640.0, 150.0);

    struct Harness {
        scene: DigitSpanScene,
        rng: SmallRng,
        now: Instant,
    }

    impl Harness {
        fn new() -> Self {
            let mut rng = SmallRng::seed_from_u64(42);
            let mut scene = DigitSpanScene::new();
            let now = Instant::now();
            scene.on_enter(&mut SceneContext { now, rng: &mut rng });
            Self { scene, rng, now }
        }

        fn send(&mut self, event: InputEvent) -> SceneTransition {
            let mut context = SceneContext {
                now: self.now,
                rng: &mut self.rng,
            };
            self.scene.handle_event(&event, &mut context)
        }

        fn click(&mut self, (x, y): (f32, f32)) -> SceneTransition {
            self.send(InputEvent::click(x, y))
        }

        fn type_text(&mut self, text: &str) {
            for c in text.chars() {
                self.send(InputEvent::key_down(key_for(c)));
            }
        }

        fn enter(&mut self) {
            self.send(InputEvent::key_down(KeyCode::Enter));
        }

        fn wait(&mut self, by: Duration) {
            self.now += by;
        }

        fn start(&mut self) {
            self.click(TEXT_BOX);
            self.type_text("start");
            self.enter();
        }

        fn wait_out_display(&mut self) {
            let window = self.scene.engine().display_window();
            self.wait(window + Duration::from_millis(1));
        }
    }

    fn key_for(c: char) -> KeyCode {
        use KeyCode::*;
        match c {
            '0' => Digit0, '1' => Digit1, '2' => Digit2, '3' => Digit3, '4' => Digit4,
            '5' => Digit5, '6' => Digit6, '7' => Digit7, '8' => Digit8, '9' => Digit9,
            's' => KeyS, 't' => KeyT, 'a' => KeyA, 'r' => KeyR, 'x' => KeyX,
            ' ' => Space,
            other => panic!("no key for {:?}", other),
        }
    }

    //=====================================================================
    // Text Box
    //=====================================================================

    #[test]
    fn typing_requires_focus() {
        let mut h = Harness::new();
        h.type_text("12");
        assert_eq!(h.scene.input(), "");

        h.click(TEXT_BOX);
        h.type_text("12");
        assert_eq!(h.scene.input(), "12");
    }

    #[test]
    fn backspace_deletes_last_character() {
        let mut h = Harness::new();
        h.click(TEXT_BOX);
        h.type_text("star");
        h.send(InputEvent::key_down(KeyCode::Backspace));
        assert_eq!(h.scene.input(), "sta");
    }

    #[test]
    fn clicking_elsewhere_unfocuses_and_prompts() {
        let mut h = Harness::new();
        h.click(TEXT_BOX);
        h.type_text("st");
        h.click(ELSEWHERE);

        assert!(!h.scene.is_focused());
        assert_eq!(h.scene.prompt(), Prompt::Start);
        match h.scene.view(h.now) {
            SceneView::DigitSpan { text, focused, .. } => {
                assert_eq!(text, Prompt::Start.text());
                assert!(!focused);
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn chords_do_not_type() {
        let mut h = Harness::new();
        h.click(TEXT_BOX);
        h.send(InputEvent::KeyDown {
            key: KeyCode::KeyA,
            modifiers: Modifiers::CTRL,
        });
        assert_eq!(h.scene.input(), "");
    }

    //=====================================================================
    // Session Flow
    //=====================================================================

    #[test]
    fn start_command_shows_the_challenge() {
        let mut h = Harness::new();
        h.start();

        assert!(h.scene.engine().session_active());
        assert_eq!(h.scene.input(), "");
        assert!(h.scene.challenge_visible(h.now));

        h.wait_out_display();
        assert!(!h.scene.challenge_visible(h.now));
    }

    #[test]
    fn other_commands_do_not_start() {
        let mut h = Harness::new();
        h.click(TEXT_BOX);
        h.type_text("star");
        h.enter();
        assert!(!h.scene.engine().session_active());
        assert_eq!(h.scene.input(), "star");
    }

    #[test]
    fn typing_is_blocked_while_challenge_is_visible() {
        let mut h = Harness::new();
        h.start();
        h.type_text("5");
        assert_eq!(h.scene.input(), "");

        h.wait_out_display();
        h.type_text("5");
        assert_eq!(h.scene.input(), "5");
    }

    #[test]
    fn correct_answer_redisplays_longer_challenge() {
        let mut h = Harness::new();
        h.start();
        h.wait_out_display();

        let answer = h.scene.engine().current_challenge().to_string();
        h.type_text(&answer);
        h.enter();

        assert_eq!(h.scene.engine().score(), 1);
        assert_eq!(h.scene.engine().current_challenge().len(), 2);
        assert!(h.scene.is_focused());
        match h.scene.view(h.now) {
            SceneView::DigitSpan { challenge, time_remaining, .. } => {
                assert_eq!(challenge.as_deref(), Some(h.scene.engine().current_challenge()));
                assert_eq!(time_remaining, Some(h.scene.engine().display_window()));
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn padded_answer_is_trimmed() {
        let mut h = Harness::new();
        h.start();
        h.wait_out_display();

        let answer = h.scene.engine().current_challenge().to_string();
        h.type_text(&format!(" {} ", answer));
        h.enter();
        assert_eq!(h.scene.engine().score(), 1);
    }

    #[test]
    fn non_numeric_answer_is_ignored() {
        let mut h = Harness::new();
        h.start();
        h.wait_out_display();
        h.type_text("x");
        h.enter();

        assert!(h.scene.engine().session_active());
        assert_eq!(h.scene.input(), "x");
    }

    #[test]
    fn wrong_answer_ends_the_run() {
        let mut h = Harness::new();
        h.start();
        h.wait_out_display();

        let wrong = if h.scene.engine().current_challenge() == "1" { "2" } else { "1" };
        h.type_text(wrong);
        h.enter();

        assert!(!h.scene.engine().session_active());
        assert!(!h.scene.is_focused());
        assert_eq!(h.scene.prompt(), Prompt::Retry);
        assert_eq!(h.scene.engine().attempts(), 2);
        assert!(!h.scene.challenge_visible(h.now));
    }

    #[test]
    fn back_returns_to_menu() {
        let mut h = Harness::new();
        assert_eq!(h.click((60.0, 35.0)), SceneTransition::Switch(SceneKind::Menu));
    }
}

//=========================================================================
// Digit Span Engine
//=========================================================================
//
// Number memory test: the player memorizes a number shown for a short
// time and types it back. Every correct answer adds one digit and gives
// a little more display time; a single mistake restarts the run.
//
// Difficulty:
//   floor = 10^k  →  challenge drawn from [floor, floor*10 - 1]  →  floor *= 10
//
// The challenge is built digit by digit (leading digit 1-9, the rest 0-9),
// which is exactly a uniform draw over that range without an integer
// width limit.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;
use rand::Rng;

//=== Internal Dependencies ===============================================

use super::AnswerOutcome;

//=== Constants ===========================================================

const INITIAL_DISPLAY_SECS: f64 = 1.7;
const DISPLAY_STEP_SECS: f64 = 0.2;

//=== DigitSpanEngine =====================================================

/// Pure state holder for the number memory test.
#[derive(Debug, Clone)]
pub struct DigitSpanEngine {
    score: u32,
    /// Exponent of `digit_range_floor` (floor = 10^exponent).
    floor_exponent: u32,
    current_challenge: String,
    display_duration: f64,
    session_active: bool,
    attempts: u32,
}

impl DigitSpanEngine {
    /// Creates an engine with initial values and no challenge drawn yet.
    ///
    /// Call [`setup`](Self::setup) before use.
    pub fn new() -> Self {
        Self {
            score: 0,
            floor_exponent: 0,
            current_challenge: String::new(),
            display_duration: INITIAL_DISPLAY_SECS,
            session_active: false,
            attempts: 0,
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Unconditional full reset followed by a fresh one-digit challenge.
    pub fn setup<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.score = 0;
        self.floor_exponent = 0;
        self.display_duration = INITIAL_DISPLAY_SECS;
        self.session_active = false;
        self.attempts += 1;
        self.assign_challenge(rng);
        debug!("Digit span reset (attempt {})", self.attempts);
    }

    /// Marks the session as started (the player typed the start command).
    pub fn start_session(&mut self) {
        self.session_active = true;
    }

    /// Draws a uniform number in `[floor, floor*10 - 1]`, then grows the
    /// floor by one decade.
    pub fn assign_challenge<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let len = self.floor_exponent as usize + 1;
        let mut challenge = String::with_capacity(len);

        challenge.push(digit_char(rng.random_range(1..=9)));
        for _ in 1..len {
            challenge.push(digit_char(rng.random_range(0..=9)));
        }

        self.current_challenge = challenge;
        self.floor_exponent += 1;
        debug!("New {}-digit challenge", len);
    }

    //--- Answering --------------------------------------------------------

    /// Exact string comparison against the live challenge.
    pub fn check(&self, answer: &str) -> bool {
        answer == self.current_challenge
    }

    /// Scores the answer: a correct one advances difficulty, a wrong one
    /// restarts the whole run.
    pub fn submit<R: Rng + ?Sized>(&mut self, answer: &str, rng: &mut R) -> AnswerOutcome {
        if self.check(answer) {
            self.score += 1;
            self.assign_challenge(rng);
            self.display_duration += DISPLAY_STEP_SECS;
            AnswerOutcome::Correct
        } else {
            debug!("Wrong answer at score {}", self.score);
            self.setup(rng);
            AnswerOutcome::Restarted
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current lower bound of the next draw, or `None` once it no longer
    /// fits in a `u128`.
    pub fn digit_range_floor(&self) -> Option<u128> {
        10u128.checked_pow(self.floor_exponent)
    }

    pub fn current_challenge(&self) -> &str {
        &self.current_challenge
    }

    /// Display time in seconds.
    pub fn display_duration(&self) -> f64 {
        self.display_duration
    }

    /// Display time as a [`Duration`] for timestamp comparisons.
    pub fn display_window(&self) -> Duration {
        Duration::from_secs_f64(self.display_duration)
    }

    pub fn session_active(&self) -> bool {
        self.session_active
    }

    /// Number of times [`setup`](Self::setup) has run.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl Default for DigitSpanEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn digit_char(digit: u32) -> char {
    char::from_digit(digit, 10).unwrap_or('0')
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn engine() -> (DigitSpanEngine, SmallRng) {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut engine = DigitSpanEngine::new();
        engine.setup(&mut rng);
        (engine, rng)
    }

    fn answer_correctly(engine: &mut DigitSpanEngine, rng: &mut SmallRng) -> AnswerOutcome {
        let answer = engine.current_challenge().to_string();
        engine.submit(&answer, rng)
    }

    //=====================================================================
    // Setup
    //=====================================================================

    #[test]
    fn setup_draws_one_digit_challenge() {
        let (engine, _) = engine();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.current_challenge().len(), 1);
        assert_ne!(engine.current_challenge(), "0");
        assert_eq!(engine.digit_range_floor(), Some(10));
        assert!(!engine.session_active());
        assert_abs_diff_eq!(engine.display_duration(), 1.7, epsilon = 1e-9);
    }

    #[test]
    fn setup_counts_attempts() {
        let (mut engine, mut rng) = engine();
        assert_eq!(engine.attempts(), 1);
        engine.setup(&mut rng);
        assert_eq!(engine.attempts(), 2);
    }

    #[test]
    fn start_session_is_cleared_by_setup() {
        let (mut engine, mut rng) = engine();
        engine.start_session();
        assert!(engine.session_active());

        engine.setup(&mut rng);
        assert!(!engine.session_active());
    }

    //=====================================================================
    // Challenge Generation
    //=====================================================================

    #[test]
    fn challenges_stay_within_decade() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let mut engine = DigitSpanEngine::new();
            engine.setup(&mut rng);
            for expected_len in 2..=6usize {
                engine.assign_challenge(&mut rng);
                let challenge = engine.current_challenge();
                assert_eq!(challenge.len(), expected_len);
                assert!(!challenge.starts_with('0'), "leading zero in {}", challenge);
                assert!(challenge.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn single_digit_challenges_cover_one_to_nine() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        let mut engine = DigitSpanEngine::new();
        for _ in 0..500 {
            engine.setup(&mut rng);
            seen.insert(engine.current_challenge().to_string());
        }
        let expected: std::collections::HashSet<String> =
            (1..=9).map(|d: u32| d.to_string()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn long_challenges_exceed_integer_width() {
        let (mut engine, mut rng) = engine();
        for _ in 0..45 {
            engine.assign_challenge(&mut rng);
        }
        assert_eq!(engine.current_challenge().len(), 46);
        assert_eq!(engine.digit_range_floor(), None);
    }

    //=====================================================================
    // Answering
    //=====================================================================

    #[test]
    fn check_is_exact_string_equality() {
        let (engine, _) = engine();
        let challenge = engine.current_challenge().to_string();
        assert!(engine.check(&challenge));
        assert!(!engine.check(&format!(" {}", challenge)));
        assert!(!engine.check(&format!("{}0", challenge)));
    }

    #[test]
    fn correct_answers_grow_floor_and_duration() {
        let (mut engine, mut rng) = engine();
        for n in 1..=8u32 {
            assert_eq!(answer_correctly(&mut engine, &mut rng), AnswerOutcome::Correct);
            assert_eq!(engine.score(), n);
            assert_eq!(engine.digit_range_floor(), Some(10u128.pow(n + 1)));
            assert_eq!(engine.current_challenge().len(), n as usize + 1);
            assert_abs_diff_eq!(engine.display_duration(), 1.7 + 0.2 * n as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn wrong_answer_restarts_at_any_score() {
        for correct in [0u32, 1, 5] {
            let (mut engine, mut rng) = engine();
            engine.start_session();
            for _ in 0..correct {
                answer_correctly(&mut engine, &mut rng);
            }

            assert_eq!(engine.submit("not a number", &mut rng), AnswerOutcome::Restarted);
            assert_eq!(engine.score(), 0);
            assert_eq!(engine.digit_range_floor(), Some(10));
            assert_eq!(engine.current_challenge().len(), 1);
            assert!(!engine.session_active());
            assert_abs_diff_eq!(engine.display_duration(), 1.7, epsilon = 1e-9);
        }
    }

    #[test]
    fn display_window_matches_duration() {
        let (mut engine, mut rng) = engine();
        answer_correctly(&mut engine, &mut rng);
        assert_abs_diff_eq!(engine.display_window().as_secs_f64(), 1.9, epsilon = 1e-6);
    }
}

//=========================================================================
// Mini-Game Engines
//=========================================================================
//
// Pure state holders for the three benchmarks. Engines never render and
// never poll input: scenes drive them with explicit method calls and
// pass in the current time and a random source.
//
// Components:
// - `reaction`: reaction-time state machine
// - `digit_span`: number memory with growing challenges
// - `word_recognition`: verbal memory with a review scheduler
// - `corpus`: word list loading
//
//=========================================================================

//=== Module Declarations =================================================

pub mod corpus;
pub mod digit_span;
pub mod reaction;
pub mod word_recognition;

//=== Public API ==========================================================

pub use corpus::WordCorpus;
pub use digit_span::DigitSpanEngine;
pub use reaction::{ClickOutcome, Phase, ReactionEngine};
pub use word_recognition::{WordAnswer, WordRecognitionEngine, SESSION_WINDOW};

//=== AnswerOutcome =======================================================

/// Result of submitting an answer to a memory engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Answer accepted; the session continues.
    Correct,

    /// Answer rejected; the session was restarted from scratch.
    Restarted,
}

//=========================================================================
// Word Recognition Engine
//=========================================================================
//
// Verbal memory test: words stream past one at a time and the player
// answers whether each one is new or was already shown this session.
//
// Architecture:
// ```text
//   vocabulary (shuffled once)
//        │ setup(): random 1000-word window
//        ▼
//   session_words ──[score]──> current_word <──replay── shown_words
//                                   │
//                      submit(New | Shown) → check → score / restart
// ```
//
// The review scheduler flips a fair coin after every correct answer:
// replay a previously shown word, or advance to the next unseen one.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::corpus::WordCorpus;
use super::AnswerOutcome;

//=== Constants ===========================================================

/// Number of words in one session window.
pub const SESSION_WINDOW: usize = 1000;

//=== WordAnswer ==========================================================

/// The two answers a player can give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordAnswer {
    New,
    Shown,
}

impl WordAnswer {
    /// Button label for this answer.
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Shown => "Shown",
        }
    }
}

impl fmt::Display for WordAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown answer label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown answer {0:?}")]
pub struct UnknownAnswer(pub String);

impl FromStr for WordAnswer {
    type Err = UnknownAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "Shown" => Ok(Self::Shown),
            other => Err(UnknownAnswer(other.to_owned())),
        }
    }
}

//=== WordRecognitionEngine ===============================================

/// Pure state holder for the verbal memory test.
#[derive(Debug, Clone)]
pub struct WordRecognitionEngine {
    vocabulary: Vec<String>,
    session_start: usize,
    session_len: usize,
    shown_words: HashSet<String>,
    /// Same words as `shown_words`, kept indexable for uniform sampling.
    shown_order: Vec<String>,
    score: u32,
    current_word: String,
}

impl WordRecognitionEngine {
    /// Takes ownership of the corpus and shuffles it once.
    ///
    /// Call [`setup`](Self::setup) before use.
    pub fn new<R: Rng + ?Sized>(corpus: WordCorpus, rng: &mut R) -> Self {
        let mut vocabulary = corpus.into_words();
        vocabulary.shuffle(rng);

        let session_len = vocabulary.len().min(SESSION_WINDOW);
        let current_word = vocabulary[0].clone();

        Self {
            vocabulary,
            session_start: 0,
            session_len,
            shown_words: HashSet::new(),
            shown_order: Vec::new(),
            score: 0,
            current_word,
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Resets score and shown set, then slices a fresh session window.
    pub fn setup<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.score = 0;
        self.shown_words.clear();
        self.shown_order.clear();

        self.session_start = if self.vocabulary.len() > self.session_len + 1 {
            rng.random_range(1..self.vocabulary.len() - self.session_len)
        } else {
            0
        };
        self.current_word = self.session_words()[0].clone();

        debug!(
            "Word session window at offset {} ({} words)",
            self.session_start, self.session_len
        );
    }

    //--- Answering --------------------------------------------------------

    /// `New` is right iff the current word was never shown this session;
    /// `Shown` is right iff it was.
    pub fn check(&self, answer: WordAnswer) -> bool {
        let seen = self.is_shown(&self.current_word);
        match answer {
            WordAnswer::New => !seen,
            WordAnswer::Shown => seen,
        }
    }

    /// Scores the answer and schedules the next word, or restarts the
    /// session on a mistake.
    pub fn submit<R: Rng + ?Sized>(&mut self, answer: WordAnswer, rng: &mut R) -> AnswerOutcome {
        if !self.check(answer) {
            debug!("Wrong word answer at score {}", self.score);
            self.setup(rng);
            return AnswerOutcome::Restarted;
        }

        self.score += 1;
        if self.shown_words.insert(self.current_word.clone()) {
            self.shown_order.push(self.current_word.clone());
        }
        self.next_word(rng);
        AnswerOutcome::Correct
    }

    /// Picks the next prompt: a replay of a shown word or the next word of
    /// the session, with even odds.
    ///
    /// A one-element shown set is replayed as-is. Once the score runs past
    /// the session window only replays remain.
    pub fn next_word<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let exhausted = self.score as usize >= self.session_len;
        let replay = !self.shown_order.is_empty() && (exhausted || rng.random_bool(0.5));

        if replay {
            self.current_word = self.pick_review(rng);
        } else {
            self.current_word = self.session_words()[self.score as usize].clone();
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn session_words(&self) -> &[String] {
        &self.vocabulary[self.session_start..self.session_start + self.session_len]
    }

    pub fn is_shown(&self, word: &str) -> bool {
        self.shown_words.contains(word)
    }

    pub fn shown_count(&self) -> usize {
        self.shown_order.len()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    //--- Internal Helpers -------------------------------------------------

    fn pick_review<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        if self.shown_order.len() == 1 {
            return self.shown_order[0].clone();
        }

        // Two or more distinct words: terminates with probability 1.
        loop {
            if let Some(word) = self.shown_order.choose(rng) {
                if *word != self.current_word {
                    return word.clone();
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//! A single game from first guess to win or loss

use crate::animation::{Clock, Jiggle, RowReveal, SystemClock};
use crate::core::{GRID_SIZE, GuessRow, NUM_ATTEMPTS, Word, evaluate};
use crate::wordlists::WordBank;
use rand::Rng;
use rand::rngs::StdRng;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Turn state, derived from the outcome and the active reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Typing a guess
    Accepting,
    /// A submitted guess is still flipping; input is ignored
    Revealing,
    /// The game is finished and its reveal has completed
    Over,
}

/// Result of pressing submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// Input blocked or shorter than a full word
    Ignored,
    /// Full-length word that is not in the word bank
    InvalidWord,
    /// Guess stored and reveal started; `attempt` is the 1-based guess number
    Accepted { attempt: usize, row: GuessRow },
}

/// One game: target word, board, input buffer and animations
///
/// The word bank, clock and random number generator are injected so games can
/// be replayed deterministically.
pub struct GameSession<'a, C = SystemClock, R = StdRng> {
    bank: &'a WordBank,
    clock: C,
    rng: R,
    target: Word,
    rows: [GuessRow; NUM_ATTEMPTS],
    attempt: usize,
    input: String,
    outcome: Outcome,
    reveal: Option<RowReveal>,
    jiggle: Option<Jiggle>,
}

impl<'a, C: Clock, R: Rng> GameSession<'a, C, R> {
    /// Start a game with a target drawn from `bank`
    pub fn new(bank: &'a WordBank, clock: C, mut rng: R) -> Self {
        let target = bank.pick_random_target(&mut rng).clone();
        Self::with_target(bank, clock, rng, target)
    }

    /// Start a game with a known target; later restarts draw from `bank`
    pub fn with_target(bank: &'a WordBank, clock: C, rng: R, target: Word) -> Self {
        log::debug!("target word: {target}");

        Self {
            bank,
            clock,
            rng,
            target,
            rows: [GuessRow::EMPTY; NUM_ATTEMPTS],
            attempt: 0,
            input: String::with_capacity(GRID_SIZE),
            outcome: Outcome::InProgress,
            reveal: None,
            jiggle: None,
        }
    }

    /// Append a letter to the current guess
    ///
    /// Returns false (and changes nothing) while input is blocked, when the
    /// guess is already full, or if `ch` is not an ASCII letter.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.is_input_blocked() || self.input.len() >= GRID_SIZE || !ch.is_ascii_alphabetic() {
            return false;
        }

        self.input.push(ch.to_ascii_uppercase());
        true
    }

    /// Remove the last letter of the current guess
    pub fn delete_letter(&mut self) -> bool {
        if self.is_input_blocked() {
            return false;
        }

        self.input.pop().is_some()
    }

    /// Submit the current guess
    ///
    /// A word missing from the bank starts the shake and leaves the board,
    /// the attempt counter and the input untouched. A valid word is evaluated,
    /// stored and revealed; the attempt counter advances immediately while
    /// input stays blocked until the reveal finishes.
    pub fn submit_guess(&mut self) -> SubmitResult {
        if self.is_input_blocked() || self.input.len() != GRID_SIZE {
            return SubmitResult::Ignored;
        }

        let now = self.clock.now_ms();
        let Some(guess) = self.bank.get(&self.input) else {
            log::debug!("rejected guess {}: not in word list", self.input);
            self.jiggle = Some(Jiggle::start(now));
            return SubmitResult::InvalidWord;
        };

        let row = evaluate(guess, &self.target);
        self.rows[self.attempt] = row;
        self.reveal = Some(RowReveal::new(self.attempt, &row, now));

        if *guess == self.target {
            self.outcome = Outcome::Won;
        } else if self.attempt == NUM_ATTEMPTS - 1 {
            self.outcome = Outcome::Lost;
        }

        self.attempt += 1;
        self.input.clear();
        self.jiggle = None;
        log::debug!("guess {} {guess} {}", self.attempt, row.to_emoji());

        SubmitResult::Accepted {
            attempt: self.attempt,
            row,
        }
    }

    /// Advance animations to the clock's current time
    ///
    /// Returns the outcome on the tick where the game becomes over.
    pub fn tick(&mut self) -> Option<Outcome> {
        let now = self.clock.now_ms();

        if self.jiggle.is_some_and(|jiggle| jiggle.is_expired(now)) {
            self.jiggle = None;
        }

        let reveal = self.reveal.as_mut()?;
        reveal.update(now);
        if !reveal.is_completed() {
            return None;
        }

        self.reveal = None;
        if !self.outcome.is_decided() {
            return None;
        }

        log::info!(
            "game over: {:?} after {} guesses, target {}",
            self.outcome,
            self.attempt,
            self.target
        );
        Some(self.outcome)
    }

    /// Throw the current game away and start a new one
    ///
    /// Allowed at any time; an in-flight reveal is dropped without completing.
    pub fn restart(&mut self) {
        self.target = self.bank.pick_random_target(&mut self.rng).clone();
        self.rows = [GuessRow::EMPTY; NUM_ATTEMPTS];
        self.attempt = 0;
        self.input.clear();
        self.outcome = Outcome::InProgress;
        self.reveal = None;
        self.jiggle = None;
        log::debug!("restarted, target word: {}", self.target);
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.reveal_in_progress() {
            Phase::Revealing
        } else if self.outcome.is_decided() {
            Phase::Over
        } else {
            Phase::Accepting
        }
    }

    /// True while typing and submitting are ignored
    #[must_use]
    pub fn is_input_blocked(&self) -> bool {
        self.outcome.is_decided() || self.reveal_in_progress()
    }

    fn reveal_in_progress(&self) -> bool {
        self.reveal
            .as_ref()
            .is_some_and(|reveal| !reveal.is_completed())
    }

    /// Current horizontal shake of the input row
    #[must_use]
    pub fn jiggle_offset(&self) -> i32 {
        self.jiggle
            .map_or(0, |jiggle| jiggle.offset(self.clock.now_ms()))
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of guesses submitted so far
    #[inline]
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[GuessRow; NUM_ATTEMPTS] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub const fn reveal(&self) -> Option<&RowReveal> {
        self.reveal.as_ref()
    }
}

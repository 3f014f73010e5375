use std::time::{Duration, Instant};

use itertools::Itertools;

use crate::input::{InputBuffer, Letter};
use crate::language::WordList;
use crate::round::{Finish, Phase, Round};
use crate::word_queue::WordQueue;

/// What a typed character did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The round is over, the key was dropped.
    Ignored,
    Typed,
    /// Space submitted the target word.
    Accepted { word: String },
    /// Space submitted something other than the target.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct GameSettings {
    pub lookahead: usize,
    pub round_length: Duration,
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            lookahead: 6,
            round_length: Duration::from_secs(crate::round::DEFAULT_ROUND_SECS),
            seed: None,
        }
    }
}

/// Everything the screen needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub phase: Phase,
    pub letters: Vec<Letter>,
    pub upcoming: String,
    pub typed: String,
    pub wpm: u32,
    pub remaining: Duration,
    pub completed_words: u32,
    pub finish: Option<Finish>,
}

/// The game controller: one round, its input buffer and its word queue.
#[derive(Debug)]
pub struct Game {
    queue: WordQueue,
    input: InputBuffer,
    round: Round,
}

impl Game {
    pub fn new(words: WordList, settings: &GameSettings) -> Self {
        let queue = match settings.seed {
            Some(seed) => WordQueue::with_seed(words, settings.lookahead, seed),
            None => WordQueue::new(words, settings.lookahead),
        };
        Self {
            queue,
            input: InputBuffer::new(),
            round: Round::new(settings.round_length),
        }
    }

    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn completed_words(&self) -> u32 {
        self.round.completed_words()
    }

    pub fn target(&self) -> &str {
        self.queue.target()
    }

    pub fn upcoming(&self) -> impl Iterator<Item = &str> {
        self.queue.upcoming()
    }

    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    /// Handles any key other than backspace.
    pub fn type_char(&mut self, c: char, now: Instant) -> KeyOutcome {
        self.round.expire_if_due(now);
        if self.round.is_over() {
            return KeyOutcome::Ignored;
        }

        if !self.round.has_started() {
            self.round.start(now);
            log::info!("round started, target `{}`", self.queue.target());
        }

        self.input.push(c);
        if c != ' ' {
            return KeyOutcome::Typed;
        }

        if self.input.matches(self.queue.target()) {
            self.round.record_word();
            let word = self.queue.advance();
            self.input.clear();
            log::debug!(
                "accepted `{word}` ({} so far), next `{}`",
                self.round.completed_words(),
                self.queue.target()
            );
            KeyOutcome::Accepted { word }
        } else {
            log::debug!(
                "rejected `{}` for `{}`",
                self.input.as_str().trim(),
                self.queue.target()
            );
            KeyOutcome::Rejected
        }
    }

    pub fn backspace(&mut self) {
        if !self.round.is_over() {
            self.input.backspace();
        }
    }

    /// Periodic wake-up. Returns the finish if this tick ended the round.
    pub fn tick(&mut self, now: Instant) -> Option<Finish> {
        self.round.expire_if_due(now)
    }

    /// Ends a running round early.
    pub fn end(&mut self, now: Instant) -> Option<Finish> {
        let was_running = self.round.phase() == Phase::Running;
        let finish = self.round.finalize(now);
        if was_running {
            if let Some(f) = finish {
                log::info!("round ended early: {} words, {} wpm", f.words, f.wpm);
            }
        }
        finish
    }

    /// Throws the current round away and deals a fresh set of words.
    /// Works from any phase, including mid-round.
    pub fn restart(&mut self) {
        self.round.reset();
        self.input.clear();
        self.queue.initialize();
        log::info!("round restarted");
    }

    pub fn view(&self, now: Instant) -> GameView {
        GameView {
            phase: self.round.phase(),
            letters: self.input.classify(self.queue.target()),
            upcoming: self.queue.upcoming().join(" "),
            typed: self.input.as_str().to_string(),
            wpm: self.round.wpm(now),
            remaining: self.round.remaining(now),
            completed_words: self.round.completed_words(),
            finish: self.round.finish(),
        }
    }
}

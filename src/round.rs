use std::time::{Duration, Instant};

use crate::scoring::{self, words_per_minute};

pub const DEFAULT_ROUND_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    NotStarted,
    Running,
    Over,
}

/// Score frozen at the moment a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finish {
    pub wpm: u32,
    pub words: u32,
    pub elapsed: Duration,
}

/// Timing and scoring for one round.
///
/// Derived values (elapsed, remaining, live wpm) are computed from the
/// instant passed in, never stored.
#[derive(Debug, Clone)]
pub struct Round {
    duration: Duration,
    started_at: Option<Instant>,
    completed_words: u32,
    finish: Option<Finish>,
}

impl Default for Round {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_ROUND_SECS))
    }
}

impl Round {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
            completed_words: 0,
            finish: None,
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.started_at, self.finish) {
            (_, Some(_)) => Phase::Over,
            (Some(_), None) => Phase::Running,
            (None, None) => Phase::NotStarted,
        }
    }

    pub fn is_over(&self) -> bool {
        self.finish.is_some()
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Begins the clock. Only meaningful before the first keystroke.
    pub fn start(&mut self, now: Instant) {
        if self.phase() == Phase::NotStarted {
            self.started_at = Some(now);
        }
    }

    pub fn record_word(&mut self) {
        if self.phase() == Phase::Running {
            self.completed_words += 1;
        }
    }

    pub fn completed_words(&self) -> u32 {
        self.completed_words
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn finish(&self) -> Option<Finish> {
        self.finish
    }

    /// Time spent in the round, capped at its length.
    pub fn elapsed(&self, now: Instant) -> Duration {
        if let Some(finish) = self.finish {
            return finish.elapsed;
        }
        match self.started_at {
            Some(start) => now.saturating_duration_since(start).min(self.duration),
            None => Duration::ZERO,
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        scoring::remaining(self.duration, self.elapsed(now))
    }

    pub fn wpm(&self, now: Instant) -> u32 {
        match self.finish {
            Some(finish) => finish.wpm,
            None => words_per_minute(self.completed_words, self.elapsed(now)),
        }
    }

    /// Ends the round if its time is up. Returns the finish only when this
    /// call was the one that ended it.
    pub fn expire_if_due(&mut self, now: Instant) -> Option<Finish> {
        if self.phase() == Phase::Running && self.remaining(now).is_zero() {
            let finish = self.finalize(now);
            log::info!(
                "round expired: {} words, {} wpm",
                self.completed_words,
                self.wpm(now)
            );
            return finish;
        }
        None
    }

    /// Freezes the score. Calling it again returns the same frozen result;
    /// calling it before the round started does nothing.
    pub fn finalize(&mut self, now: Instant) -> Option<Finish> {
        match self.phase() {
            Phase::NotStarted => None,
            Phase::Over => self.finish,
            Phase::Running => {
                let elapsed = self.elapsed(now);
                let finish = Finish {
                    wpm: words_per_minute(self.completed_words, elapsed),
                    words: self.completed_words,
                    elapsed,
                };
                self.finish = Some(finish);
                Some(finish)
            }
        }
    }

    /// A fresh round of the same length.
    pub fn reset(&mut self) {
        *self = Self::new(self.duration);
    }
}

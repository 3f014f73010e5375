use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::language::WordList;

/// The word being typed plus a fixed-length lookahead of upcoming words.
///
/// Every slot is an independent uniform pick from the word list, so repeats
/// are possible.
#[derive(Debug)]
pub struct WordQueue {
    words: WordList,
    lookahead: usize,
    target: String,
    upcoming: VecDeque<String>,
    rng: StdRng,
}

impl WordQueue {
    /// `lookahead` counts the target too: a queue of 6 shows one target and
    /// five upcoming words. Values below 1 are treated as 1.
    pub fn new(words: WordList, lookahead: usize) -> Self {
        Self::with_rng(words, lookahead, StdRng::from_entropy())
    }

    pub fn with_seed(words: WordList, lookahead: usize, seed: u64) -> Self {
        Self::with_rng(words, lookahead, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: WordList, lookahead: usize, rng: StdRng) -> Self {
        let mut queue = Self {
            words,
            lookahead: lookahead.max(1),
            target: String::new(),
            upcoming: VecDeque::new(),
            rng,
        };
        queue.initialize();
        queue
    }

    /// Refill the target and every upcoming slot from scratch.
    pub fn initialize(&mut self) {
        self.target = self.next_random();
        self.upcoming = (1..self.lookahead).map(|_| self.next_random()).collect();
    }

    /// Promote the head of the lookahead to target and top up the tail.
    /// Returns the word that was just completed.
    pub fn advance(&mut self) -> String {
        let next = match self.upcoming.pop_front() {
            Some(word) => word,
            None => self.next_random(),
        };
        if self.lookahead > 1 {
            let tail = self.next_random();
            self.upcoming.push_back(tail);
        }
        std::mem::replace(&mut self.target, next)
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn upcoming(&self) -> impl Iterator<Item = &str> {
        self.upcoming.iter().map(String::as_str)
    }

    pub fn upcoming_len(&self) -> usize {
        self.upcoming.len()
    }

    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    fn next_random(&mut self) -> String {
        self.words.pick(&mut self.rng).to_string()
    }
}

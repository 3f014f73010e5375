use itertools::{EitherOrBoth, Itertools};

/// How a single letter of the target word renders against what was typed.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    /// Not reached yet.
    Pending,
    /// Typed past the end of the target.
    Extra,
}

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Letter {
    pub char: char,
    pub outcome: Outcome,
}

/// Characters typed so far for the current target word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Drops the last character. Empty stays empty.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Submission check: surrounding whitespace is ignored, the rest must be
    /// an exact match.
    pub fn matches(&self, target: &str) -> bool {
        self.text.trim() == target
    }

    /// Per-letter classification of `target` against the buffer, followed by
    /// any overflow the player typed beyond the target.
    pub fn classify(&self, target: &str) -> Vec<Letter> {
        target
            .chars()
            .zip_longest(self.text.chars())
            .map(|pair| match pair {
                EitherOrBoth::Both(want, got) => Letter {
                    char: want,
                    outcome: if want == got {
                        Outcome::Correct
                    } else {
                        Outcome::Incorrect
                    },
                },
                EitherOrBoth::Left(want) => Letter {
                    char: want,
                    outcome: Outcome::Pending,
                },
                EitherOrBoth::Right(got) => Letter {
                    char: got,
                    outcome: Outcome::Extra,
                },
            })
            .collect()
    }
}

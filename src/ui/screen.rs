use ratatui::{buffer::Buffer, layout::Rect};

use crate::{
    game::GameView,
    round::Phase,
    ui::{render_results, render_typing},
};

/// A UI Screen boundary: draws one phase of the game
pub trait Screen {
    fn render(&self, view: &GameView, area: Rect, buf: &mut Buffer);
}

/// Typing screen - target word, lookahead, live wpm and countdown
pub struct TypingScreen;

impl Screen for TypingScreen {
    fn render(&self, view: &GameView, area: Rect, buf: &mut Buffer) {
        render_typing(view, area, buf);
    }
}

/// Results screen - the frozen score and the restart hint
pub struct ResultsScreen;

impl Screen for ResultsScreen {
    fn render(&self, view: &GameView, area: Rect, buf: &mut Buffer) {
        render_results(view, area, buf);
    }
}

/// Helper to construct the appropriate screen for the current phase
pub fn current_screen(phase: Phase) -> Box<dyn Screen> {
    match phase {
        Phase::NotStarted | Phase::Running => Box::new(TypingScreen),
        Phase::Over => Box::new(ResultsScreen),
    }
}

pub mod screen;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    game::GameView,
    input::Outcome,
    round::Phase,
    scoring::{format_remaining, is_warning},
};

const HORIZONTAL_MARGIN: u16 = 5;

/// Trims `words` at a word boundary so it fits in `max` columns.
pub fn fit_to_width(words: &str, max: usize) -> String {
    if words.width() <= max {
        return words.to_string();
    }
    let mut out = String::new();
    for word in words.split(' ') {
        let extra = if out.is_empty() { 0 } else { 1 };
        // leave a column for the ellipsis
        if out.width() + extra + word.width() + 1 > max {
            break;
        }
        if extra == 1 {
            out.push(' ');
        }
        out.push_str(word);
    }
    out.push('…');
    out
}

fn centered_rows(area: Rect, rows: u16) -> Vec<Rect> {
    let pad = area.height.saturating_sub(rows) / 2;
    let mut constraints = vec![Constraint::Length(pad)];
    constraints.extend((0..rows).map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));

    Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints(constraints)
        .split(area)
        .iter()
        .skip(1)
        .take(rows as usize)
        .copied()
        .collect()
}

fn line(text: impl Into<Line<'static>>, area: Rect, buf: &mut Buffer) {
    let text: Line = text.into();
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .render(area, buf);
}

pub fn render_typing(view: &GameView, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let green_bold_style = bold_style.fg(Color::Green);
    let red_bold_style = bold_style.fg(Color::Red);
    let dim_bold_style = bold_style.add_modifier(Modifier::DIM);
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let rows = centered_rows(area, 9);

    line(Span::styled("wordrace", bold_style), rows[0], buf);
    if view.phase == Phase::NotStarted {
        line(Span::styled("Start typing!", italic_style), rows[1], buf);
    }

    let mut spans: Vec<Span> = view
        .letters
        .iter()
        .map(|letter| match letter.outcome {
            Outcome::Correct => Span::styled(letter.char.to_string(), green_bold_style),
            Outcome::Incorrect => Span::styled(letter.char.to_string(), red_bold_style),
            Outcome::Pending => Span::styled(letter.char.to_string(), bold_style),
            Outcome::Extra => Span::styled(
                match letter.char {
                    ' ' => "·".to_owned(),
                    c => c.to_string(),
                },
                red_bold_style.add_modifier(Modifier::UNDERLINED),
            ),
        })
        .collect();

    let word_width: usize = spans.iter().map(Span::width).sum();
    let room = (rows[3].width as usize).saturating_sub(word_width + 2);
    if !view.upcoming.is_empty() && room > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(fit_to_width(&view.upcoming, room), dim_bold_style));
    }
    line(Line::from(spans), rows[3], buf);

    line(
        Span::styled(view.typed.replace(' ', "·"), dim_style),
        rows[4],
        buf,
    );

    line(format!("Current WPM: {}", view.wpm), rows[6], buf);

    let timer_style = if is_warning(view.remaining) {
        bold_style.fg(Color::Yellow)
    } else {
        Style::default()
    };
    line(
        Span::styled(
            format!("Time Remaining: {} seconds", format_remaining(view.remaining)),
            timer_style,
        ),
        rows[7],
        buf,
    );

    line(
        Span::styled("(tab) end round / (esc) quit", italic_style),
        rows[8],
        buf,
    );
}

pub fn render_results(view: &GameView, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);
    let magenta_style = Style::default().fg(Color::Magenta);

    let (wpm, words, secs) = match view.finish {
        Some(finish) => (finish.wpm, finish.words, finish.elapsed.as_secs_f64()),
        None => (view.wpm, view.completed_words, 0.0),
    };

    let rows = centered_rows(area, 6);

    line(Span::styled("Time is up!", bold_style), rows[0], buf);
    line(
        Span::styled(format!("Your WPM is: {wpm}"), bold_style.patch(magenta_style)),
        rows[2],
        buf,
    );
    line(format!("{words} words in {secs:.1} seconds"), rows[3], buf);
    line(
        Span::styled("(r) restart / (esc) quit", italic_style),
        rows[5],
        buf,
    );
}

impl Widget for &GameView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        screen::current_screen(self.phase).render(self, area, buf);
    }
}

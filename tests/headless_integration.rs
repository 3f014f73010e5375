use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wordrace::keymap::{action_for, Action};
use wordrace::language::WordList;
use wordrace::runtime::{FixedTicker, GameEvent, Runner, TestEventSource};
use wordrace::{Game, GameSettings, KeyOutcome, Phase};

fn game(words: &str, lookahead: usize, round_length: Duration) -> Game {
    Game::new(
        WordList::parse("test", words).unwrap(),
        &GameSettings {
            lookahead,
            round_length,
            seed: Some(3),
        },
    )
}

fn press(c: char) -> GameEvent {
    GameEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

// Headless integration using the runtime + Game without a TTY.
// Verifies that typed words flow through Runner/TestEventSource into a score.
#[test]
fn headless_typing_flow_scores_words() {
    let mut game = game("hello", 6, Duration::from_secs(30));

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    for c in "hello hello hellp ".chars() {
        tx.send(press(c)).unwrap();
    }

    let mut accepted = 0;
    for _ in 0..100u32 {
        match runner.step() {
            GameEvent::Tick => {
                game.tick(Instant::now());
            }
            GameEvent::Resize => {}
            GameEvent::Closed => break,
            GameEvent::Key(key) => {
                if let Action::Type(c) = action_for(&key, game.phase()) {
                    if let KeyOutcome::Accepted { .. } = game.type_char(c, Instant::now()) {
                        accepted += 1;
                    }
                }
            }
        }
        if accepted == 2 && game.input() == "hellp " {
            break;
        }
    }

    assert_eq!(accepted, 2);
    assert_eq!(game.completed_words(), 2);
    assert_eq!(game.input(), "hellp ");
    assert_eq!(game.phase(), Phase::Running);

    let finish = game.end(Instant::now()).unwrap();
    assert_eq!(finish.words, 2);
    assert_eq!(game.phase(), Phase::Over);
}

#[test]
fn headless_timed_round_expires_by_ticks() {
    // ~200ms round, ticks every 10ms
    let mut game = game("a\nb\nc", 3, Duration::from_millis(200));

    let (_tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(10)),
    );

    game.type_char('a', Instant::now());
    assert_eq!(game.phase(), Phase::Running);

    let mut finished = None;
    for _ in 0..100u32 {
        if let GameEvent::Tick = runner.step() {
            if let Some(finish) = game.tick(Instant::now()) {
                finished = Some(finish);
                break;
            }
        }
    }

    let finish = finished.expect("round should finish by timeout");
    assert_eq!(finish.elapsed, Duration::from_millis(200));
    assert_eq!(game.phase(), Phase::Over);
    assert_eq!(game.type_char('b', Instant::now()), KeyOutcome::Ignored);
}

#[test]
fn hello_with_correction_is_accepted() {
    let mut game = game("hello", 2, Duration::from_secs(30));
    let t0 = Instant::now();

    for c in "hellp".chars() {
        game.type_char(c, t0);
    }
    game.backspace();
    game.type_char('o', t0);
    let outcome = game.type_char(' ', t0);

    assert_eq!(
        outcome,
        KeyOutcome::Accepted {
            word: "hello".to_string()
        }
    );
    assert_eq!(game.completed_words(), 1);
}

#[test]
fn thirty_second_round_scores_words_over_half_a_minute() {
    let mut game = game("hi", 6, Duration::from_secs(30));
    let t0 = Instant::now();

    for i in 0..9u64 {
        let at = t0 + Duration::from_secs(i);
        game.type_char('h', at);
        game.type_char('i', at);
        game.type_char(' ', at);
    }
    assert_eq!(game.completed_words(), 9);

    let finish = game.tick(t0 + Duration::from_secs(30)).unwrap();
    assert_eq!(finish.wpm, 18);
    assert_eq!(game.view(t0 + Duration::from_secs(40)).wpm, 18);
}

#[test]
fn restart_after_round_deals_fresh_round() {
    let mut game = game("hi", 4, Duration::from_secs(30));
    let t0 = Instant::now();
    for c in "hi ".chars() {
        game.type_char(c, t0);
    }
    game.end(t0 + Duration::from_secs(2));

    game.restart();

    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.completed_words(), 0);
    assert_eq!(game.upcoming().count(), 3);
    assert_eq!(game.view(Instant::now()).remaining, Duration::from_secs(30));
}

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin, Stdout},
    path::PathBuf,
    time::Instant,
};
use wordrace::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    keymap::{action_for, Action},
    logging,
    runtime::{CrosstermEventSource, EventSource, FixedTicker, GameEvent, Runner, Ticker},
    Game,
};

/// terminal typing race: type the word, hit space, beat the clock
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type the highlighted word and press space to submit it. Correct words move the queue along; your words per minute is measured over a fixed round."
)]
pub struct Cli {
    /// number of words on screen (the target plus upcoming words)
    #[clap(short = 'w', long)]
    words: Option<usize>,

    /// round length in seconds
    #[clap(short = 's', long)]
    secs: Option<u64>,

    /// bundled word list to draw from
    #[clap(short = 'l', long, value_enum)]
    language: Option<SupportedLanguage>,

    /// plain text word list, one word per line (overrides --language)
    #[clap(short = 'f', long)]
    word_file: Option<PathBuf>,

    /// seed for the word picker, for reproducible rounds
    #[clap(long)]
    seed: Option<u64>,

    /// store the effective settings as the new defaults
    #[clap(long)]
    save_config: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, ValueEnum, strum_macros::Display)]
pub enum SupportedLanguage {
    English,
    Code,
}

impl Cli {
    /// Flags given on the command line win over the stored config.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(words) = self.words {
            config.words = words;
        }
        if let Some(secs) = self.secs {
            config.secs = secs;
        }
        if let Some(language) = self.language {
            config.language = language.to_string().to_lowercase();
            config.word_file = None;
        }
        if let Some(ref path) = self.word_file {
            config.word_file = Some(path.clone());
        }
        config
    }
}

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub game: Game,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    fn handle(&mut self, action: Action, now: Instant) -> Flow {
        match action {
            Action::Quit => return Flow::Quit,
            Action::Type(c) => {
                self.game.type_char(c, now);
            }
            Action::Backspace => self.game.backspace(),
            Action::EndRound => {
                self.game.end(now);
            }
            Action::Restart => self.game.restart(),
            Action::Nothing => {}
        }
        Flow::Continue
    }
}

/// Raw mode and the alternate screen for as long as this lives.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(err)
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Err(err) = logging::init(&AppDirs::log_path()) {
        eprintln!("logging disabled: {err}");
    }

    let store = FileConfigStore::new();
    let config = cli.apply(store.load());
    config.validate()?;
    if cli.save_config {
        store.save(&config)?;
        log::info!("saved settings to {}", store.path().display());
    }

    let words = config.word_list()?;
    log::info!(
        "{} words from {}, {} on screen, {}s rounds",
        words.len(),
        words.origin(),
        config.words,
        config.secs
    );
    let mut app = App::new(Game::new(words, &config.game_settings(cli.seed)));

    let mut guard = TerminalGuard::enter()?;
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());
    start_tui(&mut guard.terminal, &mut app, &runner)?;

    Ok(())
}

fn start_tui<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui(app, f))?;

        let event = runner.step();
        let now = Instant::now();
        match event {
            GameEvent::Tick => {
                app.game.tick(now);
            }
            GameEvent::Resize => {}
            GameEvent::Closed => {
                log::warn!("terminal input closed, leaving");
                break;
            }
            GameEvent::Key(key) => {
                let action = action_for(&key, app.game.phase());
                if app.handle(action, now) == Flow::Quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    let view = app.game.view(Instant::now());
    f.render_widget(&view, f.area());
}

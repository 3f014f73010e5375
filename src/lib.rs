// Library surface for headless/integration tests and reuse.
// The binary in main.rs only adds the CLI and terminal lifecycle.
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod keymap;
pub mod language;
pub mod logging;
pub mod round;
pub mod runtime;
pub mod scoring;
pub mod ui;
pub mod word_queue;

pub use error::{Error, Result};
pub use game::{Game, GameSettings, GameView, KeyOutcome};
pub use round::{Finish, Phase};

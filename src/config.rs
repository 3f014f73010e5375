use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_dirs::AppDirs;
use crate::error::{Error, Result};
use crate::game::GameSettings;
use crate::language::WordList;
use crate::round::DEFAULT_ROUND_SECS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Target plus upcoming words on screen.
    pub words: usize,
    pub secs: u64,
    pub language: String,
    pub word_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: 6,
            secs: DEFAULT_ROUND_SECS,
            language: "english".to_string(),
            word_file: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.words == 0 {
            return Err(Error::InvalidConfig(
                "at least one word must be shown".to_string(),
            ));
        }
        if self.secs == 0 {
            return Err(Error::InvalidConfig(
                "round length must be at least one second".to_string(),
            ));
        }
        Ok(())
    }

    pub fn game_settings(&self, seed: Option<u64>) -> GameSettings {
        GameSettings {
            lookahead: self.words,
            round_length: Duration::from_secs(self.secs),
            seed,
        }
    }

    /// A word file wins over the bundled language.
    pub fn word_list(&self) -> Result<WordList> {
        match &self.word_file {
            Some(path) => WordList::from_file(path),
            None => WordList::from_language(&self.language),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// Missing or unreadable files fall back to defaults.
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!(
                    "ignoring unreadable config {}: {err}",
                    self.path.display()
                );
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("config.json"));
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        assert_eq!(cfg, store.load());
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("nested").join("config.json"));
        let cfg = Config {
            words: 3,
            secs: 60,
            language: "code".into(),
            word_file: Some(PathBuf::from("/tmp/words.txt")),
        };
        store.save(&cfg).unwrap();
        assert_eq!(cfg, store.load());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("nope.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn garbage_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"{not json").unwrap();
        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "secs": 15 }"#).unwrap();

        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.secs, 15);
        assert_eq!(cfg.words, 6);
        assert_eq!(cfg.language, "english");
    }

    #[test]
    fn validate_rejects_zeroes() {
        assert!(Config::default().validate().is_ok());

        let cfg = Config {
            words: 0,
            ..Config::default()
        };
        assert_matches!(cfg.validate(), Err(Error::InvalidConfig(_)));

        let cfg = Config {
            secs: 0,
            ..Config::default()
        };
        assert_matches!(cfg.validate(), Err(Error::InvalidConfig(_)));
    }

    #[test]
    fn game_settings_follow_config() {
        let cfg = Config {
            words: 4,
            secs: 45,
            ..Config::default()
        };
        let settings = cfg.game_settings(Some(9));
        assert_eq!(settings.lookahead, 4);
        assert_eq!(settings.round_length, Duration::from_secs(45));
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn word_file_overrides_language() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "zebra\n").unwrap();

        let cfg = Config {
            word_file: Some(path),
            ..Config::default()
        };
        assert_eq!(cfg.word_list().unwrap().words(), &["zebra"]);
    }

    #[test]
    fn unknown_language_is_reported() {
        let cfg = Config {
            language: "elvish".into(),
            ..Config::default()
        };
        assert_matches!(cfg.word_list(), Err(Error::UnknownLanguage(_)));
    }
}

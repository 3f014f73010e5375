use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;

use crate::error::{Error, Result};

static LANG_DIR: Dir = include_dir!("src/lang");

/// A dictionary bundled into the binary under `src/lang/<name>.json`.
#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    pub fn new(name: &str) -> Result<Self> {
        read_language_from_file(&format!("{name}.json"))
    }

    /// Names of all bundled dictionaries, sorted.
    pub fn available() -> Vec<String> {
        let mut names: Vec<String> = LANG_DIR
            .files()
            .filter_map(|f| f.path().file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

fn read_language_from_file(file_name: &str) -> Result<Language> {
    let file = LANG_DIR.get_file(file_name).ok_or_else(|| {
        Error::UnknownLanguage(file_name.trim_end_matches(".json").to_string())
    })?;

    let contents = file
        .contents_utf8()
        .ok_or_else(|| Error::UnknownLanguage(file_name.to_string()))?;

    Ok(from_str(contents)?)
}

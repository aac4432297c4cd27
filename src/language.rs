use include_dir::{include_dir, Dir};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

/// A named list of candidate words for building prompts
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Language {
    pub name: String,
    #[serde(default)]
    pub size: u32,
    pub words: Vec<String>,
}

/// Word files come either as a bare array or as a full language object
#[derive(Deserialize)]
#[serde(untagged)]
enum WordFile {
    List(Vec<String>),
    Language(Language),
}

impl Language {
    /// Load one of the word lists bundled into the binary, e.g. `english`
    pub fn bundled(name: &str) -> Result<Self> {
        let file_name = format!("{name}.json");
        let file = LANG_DIR
            .get_file(&file_name)
            .ok_or_else(|| Error::LanguageNotFound {
                name: name.to_string(),
                available: Self::available().join(", "),
            })?;

        let contents = file
            .contents_utf8()
            .ok_or_else(|| Error::InvalidEncoding {
                name: file_name.clone(),
            })?;

        Self::from_json(name, contents)
    }

    /// Load a word list from a JSON file on disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let contents = String::from_utf8(bytes).map_err(|_| Error::InvalidEncoding {
            name: path.display().to_string(),
        })?;

        Self::from_json(&name, &contents)
    }

    fn from_json(name: &str, contents: &str) -> Result<Self> {
        let lang = match serde_json::from_str::<WordFile>(contents)? {
            WordFile::Language(lang) => lang,
            WordFile::List(words) => Language {
                name: name.to_string(),
                size: words.len() as u32,
                words,
            },
        };

        tracing::debug!(name = %lang.name, words = lang.words.len(), "loaded word list");
        Ok(lang)
    }

    /// Names of the bundled word lists
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

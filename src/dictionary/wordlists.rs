// src/dictionary/wordlists.rs
//! Word-list providers.
//!
//! A provider answers `load_words_for(name)` for the five list names
//! `positive`, `negative`, `neutral`, `ignore` and `negation`, returning trimmed,
//! non-empty entries in file order.
//!
//! Two stock providers:
//! - [`EmbeddedWordLists`]: lists compiled into the crate from `data/*.txt`.
//! - [`DirectoryWordLists`]: `<dir>/<name>.json` (array of strings) or
//!   `<dir>/<name>.txt` (one entry per line, `#` comment lines).

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

pub const IGNORE_LIST: &str = "ignore";
pub const NEGATION_LIST: &str = "negation";

/// Source of raw word lists keyed by list name.
pub trait WordListProvider {
    fn load_words_for(&self, name: &str) -> Result<Vec<String>>;
}

static EMBEDDED: Lazy<HashMap<&'static str, Vec<String>>> = Lazy::new(|| {
    HashMap::from([
        ("positive", parse_lines(include_str!("../../data/positive.txt"))),
        ("negative", parse_lines(include_str!("../../data/negative.txt"))),
        ("neutral", parse_lines(include_str!("../../data/neutral.txt"))),
        (IGNORE_LIST, parse_lines(include_str!("../../data/ignore.txt"))),
        (NEGATION_LIST, parse_lines(include_str!("../../data/negation.txt"))),
    ])
});

/// Lists shipped with the crate (small general-purpose English lexicon).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordLists;

impl WordListProvider for EmbeddedWordLists {
    fn load_words_for(&self, name: &str) -> Result<Vec<String>> {
        EMBEDDED.get(name).cloned().ok_or_else(|| {
            Error::word_list(
                name,
                io::Error::new(io::ErrorKind::NotFound, "no embedded list with this name"),
            )
        })
    }
}

/// Lists read from a data directory, one file per list.
#[derive(Debug, Clone)]
pub struct DirectoryWordLists {
    dir: PathBuf,
}

impl DirectoryWordLists {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn data_directory(&self) -> &Path {
        &self.dir
    }

    fn read_list(&self, name: &str) -> io::Result<Vec<String>> {
        let json_p = self.dir.join(format!("{name}.json"));
        if json_p.exists() {
            let bytes = fs::read(&json_p)?;
            let words: Vec<String> = serde_json::from_slice(&bytes)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            return Ok(words
                .iter()
                .map(|w| w.trim())
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect());
        }
        let txt_p = self.dir.join(format!("{name}.txt"));
        if txt_p.exists() {
            return Ok(parse_lines(&fs::read_to_string(&txt_p)?));
        }
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("neither {name}.json nor {name}.txt in {}", self.dir.display()),
        ))
    }
}

impl WordListProvider for DirectoryWordLists {
    fn load_words_for(&self, name: &str) -> Result<Vec<String>> {
        self.read_list(name).map_err(|e| Error::word_list(name, e))
    }
}

/// One entry per line; blank lines and `#` comments skipped; `\r\n` tolerated.
fn parse_lines(s: &str) -> Vec<String> {
    s.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Undo backslash escapes in list entries.
///
/// `\n`, `\t`, `\r` become control characters; any other escaped character
/// stands for itself (`\'` → `'`, `\\` → `\`). A trailing lone backslash is
/// dropped.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

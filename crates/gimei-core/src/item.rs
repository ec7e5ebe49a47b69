use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the four renderings every item carries.
///
/// The discriminant order is the column order of a corpus row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    Kanji,
    Hiragana,
    Katakana,
    Romaji,
}

impl Script {
    pub const ALL: [Script; 4] = [
        Script::Kanji,
        Script::Hiragana,
        Script::Katakana,
        Script::Romaji,
    ];

    /// Column index of this script within a corpus row.
    pub fn index(self) -> usize {
        match self {
            Self::Kanji => 0,
            Self::Hiragana => 1,
            Self::Katakana => 2,
            Self::Romaji => 3,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "kanji" => Some(Self::Kanji),
            "hiragana" => Some(Self::Hiragana),
            "katakana" => Some(Self::Katakana),
            "romaji" => Some(Self::Romaji),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kanji => "kanji",
            Self::Hiragana => "hiragana",
            Self::Katakana => "katakana",
            Self::Romaji => "romaji",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Script {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| Error::UnknownScript(value.to_string()))
    }
}

/// A single lexical entry (surname, given name, prefecture, city, town or
/// postal code) rendered in kanji, hiragana, katakana and optionally romaji.
///
/// On the wire an item is a sequence of three or four strings in
/// [`Script`] column order. Romaji is stored lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Item {
    kanji: String,
    hiragana: String,
    katakana: String,
    romaji: Option<String>,
}

impl Item {
    pub fn new(
        kanji: impl Into<String>,
        hiragana: impl Into<String>,
        katakana: impl Into<String>,
    ) -> Self {
        Self {
            kanji: kanji.into(),
            hiragana: hiragana.into(),
            katakana: katakana.into(),
            romaji: None,
        }
    }

    pub fn with_romaji(mut self, romaji: impl Into<String>) -> Self {
        self.romaji = Some(romaji.into());
        self
    }

    pub fn kanji(&self) -> &str {
        &self.kanji
    }

    pub fn hiragana(&self) -> &str {
        &self.hiragana
    }

    pub fn katakana(&self) -> &str {
        &self.katakana
    }

    /// Romaji with the first letter of every word upper-cased, or an empty
    /// string when the row has no romaji column. Words break on anything but
    /// letters, digits and apostrophes, so `jean-luc` becomes `Jean-Luc`.
    pub fn romaji(&self) -> String {
        self.romaji.as_deref().map(title_case).unwrap_or_default()
    }

    /// Romaji exactly as stored in the corpus.
    pub fn raw_romaji(&self) -> Option<&str> {
        self.romaji.as_deref()
    }

    /// Raw column for `script`; `None` only for absent romaji.
    pub fn get(&self, script: Script) -> Option<&str> {
        match script {
            Script::Kanji => Some(&self.kanji),
            Script::Hiragana => Some(&self.hiragana),
            Script::Katakana => Some(&self.katakana),
            Script::Romaji => self.romaji.as_deref(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kanji)
    }
}

impl TryFrom<Vec<String>> for Item {
    type Error = Error;

    fn try_from(columns: Vec<String>) -> Result<Self, Self::Error> {
        let width = columns.len();
        if !(3..=4).contains(&width) {
            return Err(Error::ItemWidth(width));
        }

        let mut columns = columns.into_iter();
        let mut next = || columns.next().unwrap_or_default();
        let kanji = next();
        let hiragana = next();
        let katakana = next();
        let romaji = (width == 4).then(next);

        Ok(Self {
            kanji,
            hiragana,
            katakana,
            romaji,
        })
    }
}

impl From<Item> for Vec<String> {
    fn from(item: Item) -> Self {
        let mut columns = vec![item.kanji, item.hiragana, item.katakana];
        if let Some(romaji) = item.romaji {
            columns.push(romaji);
        }
        columns
    }
}

fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word_start = true;
    for ch in value.chars() {
        if word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        word_start = !(ch.is_alphanumeric() || ch == '\'');
    }
    out
}

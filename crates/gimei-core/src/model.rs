use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::{Item, Script};
use crate::render::Renderable;
use crate::sex::Sex;

/// A person (or pet) name: surname, given name and sex tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first: Item,
    pub last: Item,
    #[serde(default)]
    pub sex: Sex,
}

impl Name {
    pub fn new(first: Item, last: Item, sex: Sex) -> Self {
        Self { first, last, sex }
    }

    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }

    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }

    // Surname first, except romaji which is given-name first.
    fn join(&self, script: Script) -> String {
        let (head, tail) = match script {
            Script::Romaji => (self.first.romaji(), self.last.romaji()),
            _ => (
                self.last.get(script).unwrap_or_default().to_string(),
                self.first.get(script).unwrap_or_default().to_string(),
            ),
        };
        format!("{head} {tail}")
    }
}

impl Renderable for Name {
    fn kanji(&self) -> String {
        self.join(Script::Kanji)
    }

    fn hiragana(&self) -> String {
        self.join(Script::Hiragana)
    }

    fn katakana(&self) -> String {
        self.join(Script::Katakana)
    }

    fn romaji(&self) -> String {
        self.join(Script::Romaji)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderable::kanji(self))
    }
}

/// A postal address made of prefecture, city and town, always in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub prefecture: Item,
    pub city: Item,
    pub town: Item,
}

impl Address {
    pub fn new(prefecture: Item, city: Item, town: Item) -> Self {
        Self {
            prefecture,
            city,
            town,
        }
    }

    fn parts(&self) -> [&Item; 3] {
        [&self.prefecture, &self.city, &self.town]
    }

    fn concat(&self, script: Script) -> String {
        match script {
            Script::Romaji => self.parts().iter().map(|item| item.romaji()).collect(),
            _ => self
                .parts()
                .iter()
                .filter_map(|item| item.get(script))
                .collect(),
        }
    }
}

impl Renderable for Address {
    fn kanji(&self) -> String {
        self.concat(Script::Kanji)
    }

    fn hiragana(&self) -> String {
        self.concat(Script::Hiragana)
    }

    fn katakana(&self) -> String {
        self.concat(Script::Katakana)
    }

    fn romaji(&self) -> String {
        self.concat(Script::Romaji)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderable::kanji(self))
    }
}

/// A postal code wrapping a single corpus row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCode {
    pub code: Item,
}

impl PostalCode {
    pub fn new(code: Item) -> Self {
        Self { code }
    }
}

impl Renderable for PostalCode {
    fn kanji(&self) -> String {
        self.code.kanji().to_string()
    }

    fn hiragana(&self) -> String {
        self.code.hiragana().to_string()
    }

    fn katakana(&self) -> String {
        self.code.katakana().to_string()
    }

    fn romaji(&self) -> String {
        self.code.romaji()
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code.kanji())
    }
}

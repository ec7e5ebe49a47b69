//! Random Japanese names, addresses and postal codes for fixtures.
//!
//! [`Gimei`] samples composite records from a small embedded corpus and
//! looks rendered strings back up. The crate-level functions delegate to a
//! process-wide [`Gimei::global`] instance.

pub mod assets;
pub mod corpus;
pub mod engine;
pub mod errors;
pub mod finder;
pub mod random;

pub use corpus::{Corpus, CorpusBuilder, CorpusCounts, CorpusGroup, Table};
pub use engine::{Gimei, NameKind};
pub use errors::GenerationError;
pub use gimei_core::{Address, Item, Name, PostalCode, Renderable, Script, Sex};
pub use random::SharedRng;

use rand::RngCore;

/// Replaces the random source of the global instance.
pub fn set_rng(rng: impl RngCore + Send + 'static) {
    Gimei::global().set_rng(rng);
}

/// Reseeds the global instance with a deterministic ChaCha source.
pub fn reseed(seed: u64) {
    Gimei::global().reseed(seed);
}

pub fn new_name() -> Name {
    Gimei::global().name()
}

pub fn new_male() -> Name {
    Gimei::global().male()
}

pub fn new_female() -> Name {
    Gimei::global().female()
}

pub fn new_dog() -> Name {
    Gimei::global().dog()
}

pub fn new_cat() -> Name {
    Gimei::global().cat()
}

pub fn new_male_dog() -> Name {
    Gimei::global().male_dog()
}

pub fn new_female_dog() -> Name {
    Gimei::global().female_dog()
}

pub fn new_male_cat() -> Name {
    Gimei::global().male_cat()
}

pub fn new_female_cat() -> Name {
    Gimei::global().female_cat()
}

pub fn new_address() -> Address {
    Gimei::global().address()
}

pub fn new_prefecture() -> Item {
    Gimei::global().prefecture()
}

pub fn new_city() -> Item {
    Gimei::global().city()
}

pub fn new_town() -> Item {
    Gimei::global().town()
}

pub fn new_postal_code() -> PostalCode {
    Gimei::global().postal_code()
}

pub fn find_name_by_kanji(kanji: &str) -> Option<Name> {
    Gimei::global().find_name_by_kanji(kanji)
}

pub fn find_name_by_hiragana(hiragana: &str) -> Option<Name> {
    Gimei::global().find_name_by_hiragana(hiragana)
}

pub fn find_name_by_katakana(katakana: &str) -> Option<Name> {
    Gimei::global().find_name_by_katakana(katakana)
}

pub fn find_name_by_romaji(romaji: &str) -> Option<Name> {
    Gimei::global().find_name_by_romaji(romaji)
}

pub fn find_address_by_kanji(kanji: &str) -> Option<Address> {
    Gimei::global().find_address_by_kanji(kanji)
}

pub fn find_address_by_hiragana(hiragana: &str) -> Option<Address> {
    Gimei::global().find_address_by_hiragana(hiragana)
}

pub fn find_address_by_katakana(katakana: &str) -> Option<Address> {
    Gimei::global().find_address_by_katakana(katakana)
}

/// Row counts of every table in the global corpus.
pub fn count_data() -> CorpusCounts {
    Gimei::global().count_data()
}

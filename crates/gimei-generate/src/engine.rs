use std::fmt;
use std::sync::{Arc, OnceLock};

use gimei_core::{Address, Item, Name, PostalCode, Script, Sex};
use rand::{Rng, RngCore};
use tracing::trace;

use crate::corpus::{Corpus, CorpusCounts, Table};
use crate::finder;
use crate::random::SharedRng;

/// Flavour of name a constructor draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// Human, sex decided by a fair coin.
    Person,
    Male,
    Female,
    Dog,
    Cat,
    MaleDog,
    FemaleDog,
    MaleCat,
    FemaleCat,
}

impl NameKind {
    pub const ALL: [NameKind; 9] = [
        NameKind::Person,
        NameKind::Male,
        NameKind::Female,
        NameKind::Dog,
        NameKind::Cat,
        NameKind::MaleDog,
        NameKind::FemaleDog,
        NameKind::MaleCat,
        NameKind::FemaleCat,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Person),
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "dog" => Some(Self::Dog),
            "cat" => Some(Self::Cat),
            "male-dog" => Some(Self::MaleDog),
            "female-dog" => Some(Self::FemaleDog),
            "male-cat" => Some(Self::MaleCat),
            "female-cat" => Some(Self::FemaleCat),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "name",
            Self::Male => "male",
            Self::Female => "female",
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::MaleDog => "male-dog",
            Self::FemaleDog => "female-dog",
            Self::MaleCat => "male-cat",
            Self::FemaleCat => "female-cat",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application context: a corpus plus the random source that samples it.
///
/// Every method takes `&self`; a `Gimei` can be shared across threads.
/// Seeding it (or calling [`Gimei::reseed`]) before a sequence of calls makes
/// that sequence reproducible.
#[derive(Debug)]
pub struct Gimei {
    corpus: Arc<Corpus>,
    rng: SharedRng,
}

impl Default for Gimei {
    fn default() -> Self {
        Self::new()
    }
}

impl Gimei {
    /// Embedded corpus, entropy-seeded source.
    pub fn new() -> Self {
        Self::with_corpus(Corpus::embedded())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_parts(Arc::new(Corpus::embedded()), SharedRng::seeded(seed))
    }

    pub fn with_corpus(corpus: Corpus) -> Self {
        Self::from_parts(Arc::new(corpus), SharedRng::from_entropy())
    }

    pub fn from_parts(corpus: Arc<Corpus>, rng: SharedRng) -> Self {
        Self { corpus, rng }
    }

    /// Process-wide instance used by the crate-level functions.
    pub fn global() -> &'static Gimei {
        static GLOBAL: OnceLock<Gimei> = OnceLock::new();
        GLOBAL.get_or_init(Gimei::new)
    }

    /// New context sharing this corpus with its own seeded source, for
    /// per-worker determinism.
    pub fn fork(&self, seed: u64) -> Self {
        Self::from_parts(Arc::clone(&self.corpus), SharedRng::seeded(seed))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn set_rng(&self, rng: impl RngCore + Send + 'static) {
        self.rng.set(rng);
    }

    pub fn reseed(&self, seed: u64) {
        self.rng.reseed(seed);
    }

    pub fn generate_name(&self, kind: NameKind) -> Name {
        let names = self.corpus.names();
        let name = self.rng.with(|rng| {
            let (first, last, sex) = match kind {
                NameKind::Person => {
                    if rng.random_bool(0.5) {
                        (&names.male, &names.last_name, Sex::Male)
                    } else {
                        (&names.female, &names.last_name, Sex::Female)
                    }
                }
                NameKind::Male => (&names.male, &names.last_name, Sex::Male),
                NameKind::Female => (&names.female, &names.last_name, Sex::Female),
                NameKind::Dog => (&names.animal, &names.last_name_dog, Sex::Unspecified),
                NameKind::Cat => (&names.animal, &names.last_name_cat, Sex::Unspecified),
                NameKind::MaleDog => (&names.animal, &names.last_name_dog, Sex::Male),
                NameKind::FemaleDog => (&names.animal, &names.last_name_dog, Sex::Female),
                NameKind::MaleCat => (&names.animal, &names.last_name_cat, Sex::Male),
                NameKind::FemaleCat => (&names.animal, &names.last_name_cat, Sex::Female),
            };
            draw_name(first, last, sex, rng)
        });
        trace!(kind = %kind, name = %name, "name sampled");
        name
    }

    pub fn name(&self) -> Name {
        self.generate_name(NameKind::Person)
    }

    pub fn male(&self) -> Name {
        self.generate_name(NameKind::Male)
    }

    pub fn female(&self) -> Name {
        self.generate_name(NameKind::Female)
    }

    pub fn dog(&self) -> Name {
        self.generate_name(NameKind::Dog)
    }

    pub fn cat(&self) -> Name {
        self.generate_name(NameKind::Cat)
    }

    pub fn male_dog(&self) -> Name {
        self.generate_name(NameKind::MaleDog)
    }

    pub fn female_dog(&self) -> Name {
        self.generate_name(NameKind::FemaleDog)
    }

    pub fn male_cat(&self) -> Name {
        self.generate_name(NameKind::MaleCat)
    }

    pub fn female_cat(&self) -> Name {
        self.generate_name(NameKind::FemaleCat)
    }

    pub fn address(&self) -> Address {
        let tables = self.corpus.addresses();
        let address = self.rng.with(|rng| {
            let prefecture = tables.prefecture.sample(rng).clone();
            let city = tables.city.sample(rng).clone();
            let town = tables.town.sample(rng).clone();
            Address::new(prefecture, city, town)
        });
        trace!(address = %address, "address sampled");
        address
    }

    pub fn prefecture(&self) -> Item {
        self.sample(&self.corpus.addresses().prefecture)
    }

    pub fn city(&self) -> Item {
        self.sample(&self.corpus.addresses().city)
    }

    pub fn town(&self) -> Item {
        self.sample(&self.corpus.addresses().town)
    }

    pub fn postal_code(&self) -> PostalCode {
        PostalCode::new(self.sample(&self.corpus.postal_codes().postal_codes))
    }

    /// One uniformly random row of `table`.
    pub fn sample(&self, table: &Table) -> Item {
        self.rng.with(|rng| table.sample(rng).clone())
    }

    pub fn find_name(&self, input: &str, script: Script) -> Option<Name> {
        finder::find_name(self.corpus.names(), input, script)
    }

    pub fn find_name_by_kanji(&self, kanji: &str) -> Option<Name> {
        self.find_name(kanji, Script::Kanji)
    }

    pub fn find_name_by_hiragana(&self, hiragana: &str) -> Option<Name> {
        self.find_name(hiragana, Script::Hiragana)
    }

    pub fn find_name_by_katakana(&self, katakana: &str) -> Option<Name> {
        self.find_name(katakana, Script::Katakana)
    }

    pub fn find_name_by_romaji(&self, romaji: &str) -> Option<Name> {
        self.find_name(romaji, Script::Romaji)
    }

    pub fn find_address(&self, input: &str, script: Script) -> Option<Address> {
        finder::find_address(self.corpus.addresses(), input, script)
    }

    pub fn find_address_by_kanji(&self, kanji: &str) -> Option<Address> {
        self.find_address(kanji, Script::Kanji)
    }

    pub fn find_address_by_hiragana(&self, hiragana: &str) -> Option<Address> {
        self.find_address(hiragana, Script::Hiragana)
    }

    pub fn find_address_by_katakana(&self, katakana: &str) -> Option<Address> {
        self.find_address(katakana, Script::Katakana)
    }

    pub fn count_data(&self) -> CorpusCounts {
        self.corpus.counts()
    }
}

// Given name is drawn before the surname.
fn draw_name(first: &Table, last: &Table, sex: Sex, rng: &mut dyn RngCore) -> Name {
    let first = first.sample(rng).clone();
    let last = last.sample(rng).clone();
    Name::new(first, last, sex)
}

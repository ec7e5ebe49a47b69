use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use gimei_core::Item;
use rand::Rng;
use serde::Serialize;

use crate::assets::{self, AssetSource};
use crate::errors::GenerationError;

/// Independent load unit of the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorpusGroup {
    Names,
    Addresses,
    PostalCodes,
}

impl CorpusGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Names => "names",
            Self::Addresses => "addresses",
            Self::PostalCodes => "postal codes",
        }
    }
}

impl fmt::Display for CorpusGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, non-empty list of items for one category.
#[derive(Debug, Clone)]
pub struct Table {
    category: &'static str,
    rows: Vec<Item>,
}

impl Table {
    pub fn new(category: &'static str, rows: Vec<Item>) -> Result<Self, GenerationError> {
        if rows.is_empty() {
            return Err(GenerationError::EmptyTable(category));
        }
        Ok(Self { category, rows })
    }

    /// Dotted category name, e.g. `first_name.male`.
    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Item] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.rows.iter()
    }

    /// Uniformly random row. Tables are never empty, so this cannot fail.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &Item {
        &self.rows[rng.random_range(0..self.rows.len())]
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a gimei_core::Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[derive(Debug, Clone)]
pub struct NameTables {
    pub male: Table,
    pub female: Table,
    pub animal: Table,
    pub last_name: Table,
    pub last_name_dog: Table,
    pub last_name_cat: Table,
}

#[derive(Debug, Clone)]
pub struct AddressTables {
    pub prefecture: Table,
    pub city: Table,
    pub town: Table,
}

#[derive(Debug, Clone)]
pub struct PostalCodeTables {
    pub postal_codes: Table,
}

/// Read-only reference tables, loaded lazily once per [`CorpusGroup`].
///
/// Groups that were not overridden through [`CorpusBuilder`] are parsed from
/// the embedded assets on first access. The embedded assets are part of the
/// build, so a parse failure there panics.
#[derive(Debug, Default)]
pub struct Corpus {
    names: OnceLock<NameTables>,
    addresses: OnceLock<AddressTables>,
    postal_codes: OnceLock<PostalCodeTables>,
}

impl Corpus {
    pub fn embedded() -> Self {
        Self::default()
    }

    pub fn builder() -> CorpusBuilder {
        CorpusBuilder::default()
    }

    pub fn names(&self) -> &NameTables {
        self.names
            .get_or_init(|| load_embedded(CorpusGroup::Names, assets::parse_names))
    }

    pub fn addresses(&self) -> &AddressTables {
        self.addresses
            .get_or_init(|| load_embedded(CorpusGroup::Addresses, assets::parse_addresses))
    }

    pub fn postal_codes(&self) -> &PostalCodeTables {
        self.postal_codes
            .get_or_init(|| load_embedded(CorpusGroup::PostalCodes, assets::parse_postal_codes))
    }

    /// Loads `group` if it is not loaded yet.
    pub fn ensure_loaded(&self, group: CorpusGroup) {
        match group {
            CorpusGroup::Names => {
                self.names();
            }
            CorpusGroup::Addresses => {
                self.addresses();
            }
            CorpusGroup::PostalCodes => {
                self.postal_codes();
            }
        }
    }

    pub fn is_loaded(&self, group: CorpusGroup) -> bool {
        match group {
            CorpusGroup::Names => self.names.get().is_some(),
            CorpusGroup::Addresses => self.addresses.get().is_some(),
            CorpusGroup::PostalCodes => self.postal_codes.get().is_some(),
        }
    }

    /// Table by dotted category name, loading its group on demand.
    pub fn table(&self, category: &str) -> Option<&Table> {
        let table = match category {
            "first_name.male" => &self.names().male,
            "first_name.female" => &self.names().female,
            "first_name.animal" => &self.names().animal,
            "last_name" => &self.names().last_name,
            "last_name_dog" => &self.names().last_name_dog,
            "last_name_cat" => &self.names().last_name_cat,
            "addresses.prefecture" => &self.addresses().prefecture,
            "addresses.city" => &self.addresses().city,
            "addresses.town" => &self.addresses().town,
            "postal_codes" => &self.postal_codes().postal_codes,
            _ => return None,
        };
        Some(table)
    }

    /// Row counts of every table. Forces all groups to load.
    pub fn counts(&self) -> CorpusCounts {
        let names = self.names();
        let addresses = self.addresses();
        let postal = self.postal_codes();
        CorpusCounts {
            male: names.male.len(),
            female: names.female.len(),
            animal: names.animal.len(),
            last_name: names.last_name.len(),
            last_name_dog: names.last_name_dog.len(),
            last_name_cat: names.last_name_cat.len(),
            prefecture: addresses.prefecture.len(),
            city: addresses.city.len(),
            town: addresses.town.len(),
            postal_codes: postal.postal_codes.len(),
        }
    }
}

fn load_embedded<T>(group: CorpusGroup, parse: fn(&str) -> Result<T, GenerationError>) -> T {
    match parse(assets::embedded(group)) {
        Ok(tables) => tables,
        Err(err) => panic!("failed to load {group} data: {err}"),
    }
}

/// Builds a [`Corpus`] whose groups may come from other YAML sources.
///
/// Overridden groups are parsed eagerly by [`CorpusBuilder::build`], so a bad
/// override surfaces as an error instead of a panic on first use.
#[derive(Debug, Default, Clone)]
pub struct CorpusBuilder {
    names: Option<AssetSource>,
    addresses: Option<AssetSource>,
    postal_codes: Option<AssetSource>,
}

impl CorpusBuilder {
    pub fn names_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.names = Some(AssetSource::Inline(yaml.into()));
        self
    }

    pub fn names_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.names = Some(AssetSource::File(path.into()));
        self
    }

    pub fn addresses_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.addresses = Some(AssetSource::Inline(yaml.into()));
        self
    }

    pub fn addresses_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.addresses = Some(AssetSource::File(path.into()));
        self
    }

    pub fn postal_codes_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.postal_codes = Some(AssetSource::Inline(yaml.into()));
        self
    }

    pub fn postal_codes_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.postal_codes = Some(AssetSource::File(path.into()));
        self
    }

    pub fn build(self) -> Result<Corpus, GenerationError> {
        Ok(Corpus {
            names: preload(self.names.as_ref(), assets::parse_names)?,
            addresses: preload(self.addresses.as_ref(), assets::parse_addresses)?,
            postal_codes: preload(self.postal_codes.as_ref(), assets::parse_postal_codes)?,
        })
    }
}

fn preload<T>(
    source: Option<&AssetSource>,
    parse: fn(&str) -> Result<T, GenerationError>,
) -> Result<OnceLock<T>, GenerationError> {
    match source {
        None => Ok(OnceLock::new()),
        Some(source) => {
            let text = source.read()?;
            Ok(OnceLock::from(parse(&text)?))
        }
    }
}

/// Row counts per table, for operational sanity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusCounts {
    pub male: usize,
    pub female: usize,
    pub animal: usize,
    pub last_name: usize,
    pub last_name_dog: usize,
    pub last_name_cat: usize,
    pub prefecture: usize,
    pub city: usize,
    pub town: usize,
    pub postal_codes: usize,
}

impl fmt::Display for CorpusCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FirstName:")?;
        writeln!(f, "  Male:       {:5}", self.male)?;
        writeln!(f, "  Female:     {:5}", self.female)?;
        writeln!(f, "  Animal:     {:5}", self.animal)?;
        writeln!(f, "LastName:     {:5}", self.last_name)?;
        writeln!(f, "  Dog:        {:5}", self.last_name_dog)?;
        writeln!(f, "  Cat:        {:5}", self.last_name_cat)?;
        writeln!(f, "Addresses:")?;
        writeln!(f, "  Prefecture: {:5}", self.prefecture)?;
        writeln!(f, "  City:       {:5}", self.city)?;
        writeln!(f, "  Town:       {:5}", self.town)?;
        write!(f, "PostalCodes:  {:5}", self.postal_codes)
    }
}

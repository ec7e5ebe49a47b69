use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use gimei_core::Item;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::corpus::{AddressTables, CorpusGroup, NameTables, PostalCodeTables, Table};
use crate::errors::GenerationError;

const NAMES_YAML: &str = include_str!("../data/names.yml");
const ADDRESSES_YAML: &str = include_str!("../data/addresses.yml");
const POSTAL_CODES_YAML: &str = include_str!("../data/postal_codes.yml");

/// YAML text compiled into the crate for `group`.
pub fn embedded(group: CorpusGroup) -> &'static str {
    match group {
        CorpusGroup::Names => NAMES_YAML,
        CorpusGroup::Addresses => ADDRESSES_YAML,
        CorpusGroup::PostalCodes => POSTAL_CODES_YAML,
    }
}

/// Where an overriding corpus group is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Inline(String),
    File(PathBuf),
}

impl AssetSource {
    pub fn read(&self) -> Result<Cow<'_, str>, GenerationError> {
        match self {
            Self::Inline(text) => Ok(Cow::Borrowed(text)),
            Self::File(path) => fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|source| GenerationError::Io {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NamesFile {
    first_name: FirstNames,
    last_name: Vec<Item>,
    last_name_dog: Vec<Item>,
    last_name_cat: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct FirstNames {
    male: Vec<Item>,
    female: Vec<Item>,
    animal: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct AddressesFile {
    addresses: AddressSections,
}

#[derive(Debug, Deserialize)]
struct AddressSections {
    prefecture: Vec<Item>,
    city: Vec<Item>,
    town: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct PostalCodesFile {
    postal_codes: Vec<Item>,
}

fn decode<T: DeserializeOwned>(group: CorpusGroup, text: &str) -> Result<T, GenerationError> {
    serde_yaml::from_str(text).map_err(|source| GenerationError::Yaml { group, source })
}

pub fn parse_names(source: &str) -> Result<NameTables, GenerationError> {
    let file: NamesFile = decode(CorpusGroup::Names, source)?;
    let tables = NameTables {
        male: Table::new("first_name.male", file.first_name.male)?,
        female: Table::new("first_name.female", file.first_name.female)?,
        animal: Table::new("first_name.animal", file.first_name.animal)?,
        last_name: Table::new("last_name", file.last_name)?,
        last_name_dog: Table::new("last_name_dog", file.last_name_dog)?,
        last_name_cat: Table::new("last_name_cat", file.last_name_cat)?,
    };
    debug!(
        group = %CorpusGroup::Names,
        male = tables.male.len(),
        female = tables.female.len(),
        animal = tables.animal.len(),
        last_name = tables.last_name.len(),
        last_name_dog = tables.last_name_dog.len(),
        last_name_cat = tables.last_name_cat.len(),
        "corpus group loaded"
    );
    Ok(tables)
}

pub fn parse_addresses(source: &str) -> Result<AddressTables, GenerationError> {
    let file: AddressesFile = decode(CorpusGroup::Addresses, source)?;
    let tables = AddressTables {
        prefecture: Table::new("addresses.prefecture", file.addresses.prefecture)?,
        city: Table::new("addresses.city", file.addresses.city)?,
        town: Table::new("addresses.town", file.addresses.town)?,
    };
    debug!(
        group = %CorpusGroup::Addresses,
        prefecture = tables.prefecture.len(),
        city = tables.city.len(),
        town = tables.town.len(),
        "corpus group loaded"
    );
    Ok(tables)
}

pub fn parse_postal_codes(source: &str) -> Result<PostalCodeTables, GenerationError> {
    let file: PostalCodesFile = decode(CorpusGroup::PostalCodes, source)?;
    let tables = PostalCodeTables {
        postal_codes: Table::new("postal_codes", file.postal_codes)?,
    };
    debug!(
        group = %CorpusGroup::PostalCodes,
        postal_codes = tables.postal_codes.len(),
        "corpus group loaded"
    );
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_assets_parse() {
        assert!(parse_names(embedded(CorpusGroup::Names)).is_ok());
        assert!(parse_addresses(embedded(CorpusGroup::Addresses)).is_ok());
        assert!(parse_postal_codes(embedded(CorpusGroup::PostalCodes)).is_ok());
    }

    #[test]
    fn missing_file_keeps_path_and_io_source() {
        let missing = PathBuf::from("/nonexistent/gimei/names.yml");
        let source = AssetSource::File(missing.clone());
        let err = source.read().expect_err("missing file");

        match &err {
            GenerationError::Io { path, source } => {
                assert_eq!(path, &missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("/nonexistent/gimei/names.yml"));
    }

    #[test]
    fn short_rows_are_rejected() {
        let yaml = "postal_codes:\n  - [\"060-0001\", \"060-0001\"]\n";
        let result = parse_postal_codes(yaml);
        assert!(matches!(
            result,
            Err(GenerationError::Yaml {
                group: CorpusGroup::PostalCodes,
                ..
            })
        ));
    }

    #[test]
    fn empty_tables_are_rejected() {
        let yaml = "addresses:\n  prefecture: []\n  city: [[a, b, c]]\n  town: [[a, b, c]]\n";
        let result = parse_addresses(yaml);
        assert!(matches!(
            result,
            Err(GenerationError::EmptyTable("addresses.prefecture"))
        ));
    }

    #[test]
    fn names_load_event_reports_every_table() {
        use std::sync::{Arc, Mutex};

        use tracing::{Event, Subscriber};
        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

        #[derive(Clone, Default)]
        struct EventFields(Arc<Mutex<Vec<String>>>);

        impl<S: Subscriber> Layer<S> for EventFields {
            fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
                let mut fields = self.0.lock().expect("fields lock");
                fields.extend(event.metadata().fields().iter().map(|f| f.name().to_string()));
            }
        }

        let captured = EventFields::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());
        tracing::subscriber::with_default(subscriber, || {
            parse_names(embedded(CorpusGroup::Names)).expect("embedded names");
        });

        let fields = captured.0.lock().expect("fields lock");
        for table in [
            "male",
            "female",
            "animal",
            "last_name",
            "last_name_dog",
            "last_name_cat",
        ] {
            assert!(fields.iter().any(|field| field == table), "missing {table}");
        }
    }
}

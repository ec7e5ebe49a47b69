use std::collections::HashMap;

use gimei_core::{Address, Item, Name, PostalCode, Renderable, Script};
use gimei_generate::{Gimei, NameKind};

use crate::CliError;

/// Which rendering of a value to print. `Default` is the `Display` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    Default,
    Script(Script),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePart {
    Full,
    Last,
    First,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Render(NamePart, Rendering),
    IsMale,
    IsFemale,
    Sex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressPart {
    Full,
    Prefecture,
    City,
    Town,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name(NameKind, NameField),
    Address(AddressPart, Rendering),
    Postal(Rendering),
}

/// One `kind[:field]` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: String,
    pub field: Field,
}

impl FieldSpec {
    pub fn parse(arg: &str) -> Result<Self, CliError> {
        let (kind, field) = arg.split_once(':').unwrap_or((arg, "name"));
        let unknown_field = || CliError::Usage(format!("unknown field '{field}' for '{kind}'"));

        let field = match kind {
            "address" => {
                let (part, rendering) = parse_address_field(field).ok_or_else(unknown_field)?;
                Field::Address(part, rendering)
            }
            "postal" => Field::Postal(parse_postal_field(field).ok_or_else(unknown_field)?),
            _ => {
                let kind = NameKind::parse(kind)
                    .ok_or_else(|| CliError::Usage(format!("unknown kind '{kind}'")))?;
                Field::Name(kind, parse_name_field(field).ok_or_else(unknown_field)?)
            }
        };

        Ok(Self {
            label: arg.to_string(),
            field,
        })
    }
}

fn parse_rendering(value: &str, allow_romaji: bool) -> Option<Rendering> {
    match value {
        "name" => Some(Rendering::Default),
        _ => match Script::parse(value)? {
            Script::Romaji if !allow_romaji => None,
            script => Some(Rendering::Script(script)),
        },
    }
}

fn parse_name_field(field: &str) -> Option<NameField> {
    match field {
        "is-male" => return Some(NameField::IsMale),
        "is-female" => return Some(NameField::IsFemale),
        "sex" => return Some(NameField::Sex),
        _ => {}
    }
    let (part, rest) = if let Some(rest) = field.strip_prefix("last-") {
        (NamePart::Last, rest)
    } else if let Some(rest) = field.strip_prefix("first-") {
        (NamePart::First, rest)
    } else {
        (NamePart::Full, field)
    };
    Some(NameField::Render(part, parse_rendering(rest, true)?))
}

fn parse_address_field(field: &str) -> Option<(AddressPart, Rendering)> {
    let (part, rest) = if let Some(rest) = field.strip_prefix("prefecture-") {
        (AddressPart::Prefecture, rest)
    } else if let Some(rest) = field.strip_prefix("city-") {
        (AddressPart::City, rest)
    } else if let Some(rest) = field.strip_prefix("town-") {
        (AddressPart::Town, rest)
    } else {
        (AddressPart::Full, field)
    };
    Some((part, parse_rendering(rest, false)?))
}

fn parse_postal_field(field: &str) -> Option<Rendering> {
    match field {
        "name" => Some(Rendering::Default),
        "kanji" => Some(Rendering::Script(Script::Kanji)),
        _ => None,
    }
}

/// Entities sampled for one output record. Arguments of the same kind share
/// one entity.
#[derive(Debug, Default)]
pub struct RecordCache {
    names: HashMap<NameKind, Name>,
    address: Option<Address>,
    postal: Option<PostalCode>,
}

impl RecordCache {
    pub fn render(&mut self, gimei: &Gimei, field: Field) -> String {
        match field {
            Field::Name(kind, field) => {
                let name = self
                    .names
                    .entry(kind)
                    .or_insert_with(|| gimei.generate_name(kind));
                render_name(name, field)
            }
            Field::Address(part, rendering) => {
                let address = self.address.get_or_insert_with(|| gimei.address());
                render_address(address, part, rendering)
            }
            Field::Postal(_) => {
                let postal = self.postal.get_or_insert_with(|| gimei.postal_code());
                postal.to_string()
            }
        }
    }
}

/// Renders every spec against freshly sampled entities.
pub fn build_record(gimei: &Gimei, specs: &[FieldSpec]) -> Vec<(String, String)> {
    let mut cache = RecordCache::default();
    specs
        .iter()
        .map(|spec| (spec.label.clone(), cache.render(gimei, spec.field)))
        .collect()
}

fn render_name(name: &Name, field: NameField) -> String {
    match field {
        NameField::IsMale => name.is_male().to_string(),
        NameField::IsFemale => name.is_female().to_string(),
        NameField::Sex => name.sex.to_string(),
        NameField::Render(NamePart::Full, Rendering::Default) => name.to_string(),
        NameField::Render(NamePart::Full, Rendering::Script(script)) => name.render(script),
        NameField::Render(NamePart::Last, rendering) => render_item(&name.last, rendering),
        NameField::Render(NamePart::First, rendering) => render_item(&name.first, rendering),
    }
}

fn render_address(address: &Address, part: AddressPart, rendering: Rendering) -> String {
    let item = match part {
        AddressPart::Full => {
            return match rendering {
                Rendering::Default => address.to_string(),
                Rendering::Script(script) => address.render(script),
            };
        }
        AddressPart::Prefecture => &address.prefecture,
        AddressPart::City => &address.city,
        AddressPart::Town => &address.town,
    };
    render_item(item, rendering)
}

fn render_item(item: &Item, rendering: Rendering) -> String {
    match rendering {
        Rendering::Default => item.to_string(),
        Rendering::Script(Script::Romaji) => item.romaji(),
        Rendering::Script(script) => item.get(script).unwrap_or_default().to_string(),
    }
}

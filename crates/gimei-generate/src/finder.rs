//! Reverse lookup: decompose a full rendering back into corpus rows.

use std::borrow::Cow;

use gimei_core::{Address, Item, Name, Script, Sex};
use tracing::trace;

use crate::corpus::{AddressTables, NameTables};

/// Finds the first surname × given-name pair whose `script` rendering equals
/// `input`.
///
/// The input must contain exactly one space. Surnames are scanned in table
/// order; for each match the male table is searched before the female one.
/// Romaji input is given-name first and compared case-insensitively.
pub fn find_name(names: &NameTables, input: &str, script: Script) -> Option<Name> {
    let (head, tail) = input.split_once(' ')?;
    if tail.contains(' ') {
        trace!(input, script = %script, "name lookup rejected malformed input");
        return None;
    }

    let (last_part, first_part) = match script {
        Script::Romaji => (
            Cow::Owned(tail.to_lowercase()),
            Cow::Owned(head.to_lowercase()),
        ),
        _ => (Cow::Borrowed(head), Cow::Borrowed(tail)),
    };

    let given_tables = [(&names.male, Sex::Male), (&names.female, Sex::Female)];
    for last in names
        .last_name
        .iter()
        .filter(|item| column_matches(item, script, &last_part))
    {
        for (table, sex) in given_tables {
            if let Some(first) = table
                .iter()
                .find(|item| column_matches(item, script, &first_part))
            {
                trace!(input, script = %script, "name lookup matched");
                return Some(Name::new(first.clone(), last.clone(), sex));
            }
        }
    }

    trace!(input, script = %script, "name lookup missed");
    None
}

/// Finds the first prefecture × city × town triple whose concatenated
/// `script` rendering equals `input`.
///
/// There is no delimiter between the parts, so candidates are tried by
/// nested prefix matching in table order and the first full cover wins.
/// That is not necessarily the decomposition an address was sampled from.
pub fn find_address(addresses: &AddressTables, input: &str, script: Script) -> Option<Address> {
    for prefecture in &addresses.prefecture {
        let Some(after_prefecture) = strip_column(prefecture, script, input) else {
            continue;
        };
        for city in &addresses.city {
            let Some(rest) = strip_column(city, script, after_prefecture) else {
                continue;
            };
            if let Some(town) = addresses
                .town
                .iter()
                .find(|town| town.get(script) == Some(rest))
            {
                trace!(input, script = %script, "address lookup matched");
                return Some(Address::new(prefecture.clone(), city.clone(), town.clone()));
            }
        }
    }

    trace!(input, script = %script, "address lookup missed");
    None
}

fn column_matches(item: &Item, script: Script, wanted: &str) -> bool {
    match (script, item.get(script)) {
        (_, None) => false,
        (Script::Romaji, Some(value)) => value.to_lowercase() == wanted,
        (_, Some(value)) => value == wanted,
    }
}

fn strip_column<'a>(item: &Item, script: Script, input: &'a str) -> Option<&'a str> {
    input.strip_prefix(item.get(script)?)
}

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::Tables;
use crate::script::{contains_cyrillic, is_cyrillic, is_latin_letter, simple_lower, simple_upper};

const CYRILLIC_TO_LATIN: &str = "cyrillic_to_latin";
const BOLD_LATIN: &str = "bold_latin";
const LATIN_DIGRAPHS: &str = "latin_digraphs";
const LATIN_TO_CYRILLIC: &str = "latin_to_cyrillic";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TablesConfig {
    cyrillic_to_latin: BTreeMap<String, String>,
    bold_latin: BTreeMap<String, String>,
    latin_digraphs: BTreeMap<String, String>,
    latin_to_cyrillic: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    EmptySection(&'static str),
    #[error("[{section}] key must be a single character: {key:?}")]
    KeyNotSingleChar { section: &'static str, key: String },
    #[error("[{section}] empty value for key: {key}")]
    EmptyValue { section: &'static str, key: String },
    #[error("[{section}] value for {key} must be a single character: {value:?}")]
    ValueNotSingleChar {
        section: &'static str,
        key: String,
        value: String,
    },
    #[error("[{section}] {text:?} is not {expected}")]
    UnexpectedScript {
        section: &'static str,
        text: String,
        expected: &'static str,
    },
    #[error("[bold_latin] value for {key} is not ASCII: {value:?}")]
    NonAsciiBoldValue { key: String, value: String },
    #[error("[bold_latin] key is already ASCII: {0:?}")]
    AsciiBoldKey(String),
    #[error("[latin_digraphs] key must be exactly two characters: {0:?}")]
    DigraphLength(String),
    #[error("[latin_digraphs] {key:?} has no entry for case permutation {missing:?}")]
    MissingCasePermutation { key: String, missing: String },
    #[error("[latin_digraphs] {first:?} overlaps {second:?}")]
    DigraphOverlap { first: String, second: String },
    #[error("transliteration tables already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into validated lookup tables.
pub fn parse_tables_toml(toml_str: &str) -> Result<Tables, TableError> {
    let config: TablesConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    Ok(Tables {
        cyrillic_to_latin: build_cyrillic_to_latin(&config.cyrillic_to_latin)?,
        bold_latin: build_bold_latin(&config.bold_latin)?,
        latin_digraphs: build_latin_digraphs(&config.latin_digraphs)?,
        latin_to_cyrillic: build_latin_to_cyrillic(&config.latin_to_cyrillic)?,
    })
}

fn build_cyrillic_to_latin(
    raw: &BTreeMap<String, String>,
) -> Result<HashMap<char, String>, TableError> {
    ensure_non_empty(CYRILLIC_TO_LATIN, raw)?;
    let mut map = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let c = single_char_key(CYRILLIC_TO_LATIN, key)?;
        if !is_cyrillic(c) {
            return Err(unexpected_script(CYRILLIC_TO_LATIN, key, "Cyrillic"));
        }
        ensure_value(CYRILLIC_TO_LATIN, key, value)?;
        if contains_cyrillic(value) {
            return Err(unexpected_script(CYRILLIC_TO_LATIN, value, "Latin"));
        }
        map.insert(c, value.clone());
    }
    Ok(map)
}

fn build_bold_latin(raw: &BTreeMap<String, String>) -> Result<HashMap<char, String>, TableError> {
    ensure_non_empty(BOLD_LATIN, raw)?;
    let mut map = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let c = single_char_key(BOLD_LATIN, key)?;
        // An ASCII key could be reached again by a folded value.
        if c.is_ascii() {
            return Err(TableError::AsciiBoldKey(key.clone()));
        }
        ensure_value(BOLD_LATIN, key, value)?;
        if !value.is_ascii() {
            return Err(TableError::NonAsciiBoldValue {
                key: key.clone(),
                value: value.clone(),
            });
        }
        map.insert(c, value.clone());
    }
    Ok(map)
}

fn build_latin_digraphs(
    raw: &BTreeMap<String, String>,
) -> Result<HashMap<[char; 2], char>, TableError> {
    ensure_non_empty(LATIN_DIGRAPHS, raw)?;
    let mut map = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let pair = match key.chars().collect::<Vec<_>>()[..] {
            [first, second] => [first, second],
            _ => return Err(TableError::DigraphLength(key.clone())),
        };
        if !pair.iter().all(|&c| is_latin_letter(c)) {
            return Err(unexpected_script(LATIN_DIGRAPHS, key, "Latin"));
        }
        let cyr = single_cyrillic_value(LATIN_DIGRAPHS, key, value)?;
        map.insert(pair, cyr);
    }

    for pair in map.keys() {
        for permutation in case_permutations(*pair) {
            if !map.contains_key(&permutation) {
                return Err(TableError::MissingCasePermutation {
                    key: pair.iter().collect(),
                    missing: permutation.iter().collect(),
                });
            }
        }
    }

    // Resolution is a single forward pass; it is only order-independent
    // while no key can start where another one ends.
    let mut keys: Vec<&[char; 2]> = map.keys().collect();
    keys.sort();
    for first in &keys {
        for second in &keys {
            if first[1] == second[0] {
                return Err(TableError::DigraphOverlap {
                    first: first.iter().collect(),
                    second: second.iter().collect(),
                });
            }
        }
    }

    Ok(map)
}

fn build_latin_to_cyrillic(
    raw: &BTreeMap<String, String>,
) -> Result<HashMap<char, char>, TableError> {
    ensure_non_empty(LATIN_TO_CYRILLIC, raw)?;
    let mut map = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let c = single_char_key(LATIN_TO_CYRILLIC, key)?;
        if !is_latin_letter(c) {
            return Err(unexpected_script(LATIN_TO_CYRILLIC, key, "Latin"));
        }
        map.insert(c, single_cyrillic_value(LATIN_TO_CYRILLIC, key, value)?);
    }
    Ok(map)
}

fn case_permutations([a, b]: [char; 2]) -> [[char; 2]; 4] {
    let (ua, la) = (simple_upper(a), simple_lower(a));
    let (ub, lb) = (simple_upper(b), simple_lower(b));
    [[ua, ub], [ua, lb], [la, ub], [la, lb]]
}

fn ensure_non_empty(
    section: &'static str,
    raw: &BTreeMap<String, String>,
) -> Result<(), TableError> {
    if raw.is_empty() {
        return Err(TableError::EmptySection(section));
    }
    Ok(())
}

fn ensure_value(section: &'static str, key: &str, value: &str) -> Result<(), TableError> {
    if value.is_empty() {
        return Err(TableError::EmptyValue {
            section,
            key: key.to_string(),
        });
    }
    Ok(())
}

fn single_char_key(section: &'static str, key: &str) -> Result<char, TableError> {
    single_char(key).ok_or_else(|| TableError::KeyNotSingleChar {
        section,
        key: key.to_string(),
    })
}

fn single_cyrillic_value(
    section: &'static str,
    key: &str,
    value: &str,
) -> Result<char, TableError> {
    ensure_value(section, key, value)?;
    let c = single_char(value).ok_or_else(|| TableError::ValueNotSingleChar {
        section,
        key: key.to_string(),
        value: value.to_string(),
    })?;
    if !is_cyrillic(c) {
        return Err(unexpected_script(section, value, "Cyrillic"));
    }
    Ok(c)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn unexpected_script(section: &'static str, text: &str, expected: &'static str) -> TableError {
    TableError::UnexpectedScript {
        section,
        text: text.to_string(),
        expected,
    }
}

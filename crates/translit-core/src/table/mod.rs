//! Lookup tables for Serbian Cyrillic/Latin transliteration.
//!
//! The default tables are embedded via `include_str!("default_tables.toml")`
//! and validated by [`parse_tables_toml`] before any lookup is served.

mod config;

use std::collections::HashMap;

pub use config::{parse_tables_toml, TableError};

pub const DEFAULT_TABLES_TOML: &str = include_str!("default_tables.toml");

/// Returns the embedded default tables TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLES_TOML
}

/// The four validated lookup tables. Read-only once built.
#[derive(Debug, Clone)]
pub struct Tables {
    cyrillic_to_latin: HashMap<char, String>,
    bold_latin: HashMap<char, String>,
    latin_digraphs: HashMap<[char; 2], char>,
    latin_to_cyrillic: HashMap<char, char>,
}

/// Entry counts per table, reported by the CLI validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub cyrillic_to_latin: usize,
    pub bold_latin: usize,
    pub latin_digraphs: usize,
    pub latin_to_cyrillic: usize,
}

impl Tables {
    /// Parse and validate the embedded default tables.
    pub fn default_tables() -> Result<Self, TableError> {
        parse_tables_toml(DEFAULT_TABLES_TOML)
    }

    pub fn cyrillic_to_latin(&self, c: char) -> Option<&str> {
        self.cyrillic_to_latin.get(&c).map(String::as_str)
    }

    pub fn bold_latin(&self, c: char) -> Option<&str> {
        self.bold_latin.get(&c).map(String::as_str)
    }

    /// Cyrillic letter spelled by the Latin pair `first second`, if any.
    pub fn latin_digraph(&self, first: char, second: char) -> Option<char> {
        self.latin_digraphs.get(&[first, second]).copied()
    }

    pub fn latin_to_cyrillic(&self, c: char) -> Option<char> {
        self.latin_to_cyrillic.get(&c).copied()
    }

    /// All digraph entries as `(latin pair, cyrillic letter)`, sorted by key.
    pub fn digraphs(&self) -> Vec<(String, char)> {
        let mut entries: Vec<(String, char)> = self
            .latin_digraphs
            .iter()
            .map(|(pair, &cyr)| (pair.iter().collect(), cyr))
            .collect();
        entries.sort();
        entries
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            cyrillic_to_latin: self.cyrillic_to_latin.len(),
            bold_latin: self.bold_latin.len(),
            latin_digraphs: self.latin_digraphs.len(),
            latin_to_cyrillic: self.latin_to_cyrillic.len(),
        }
    }
}

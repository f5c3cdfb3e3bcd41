//! Table-driven conversion between Serbian Cyrillic and Latin.
//!
//! Every operation treats absent, empty and whitespace-only input the same
//! way: the result is `None`. Non-blank input is converted from the original
//! string, so surrounding whitespace survives. Characters that no table
//! knows (digits, punctuation, foreign letters) pass through unchanged.
//!
//! Latin to Cyrillic runs in two phases: digraphs (`lj`, `nj`, `dž`, `dj` in
//! every casing) are resolved to their single Cyrillic letter first, then the
//! remaining letters are mapped one by one. Without the first phase "dj"
//! would come out as "дј" instead of "ђ".

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use tracing::{debug, debug_span};

use crate::conversion::Conversion;
use crate::script::{simple_lower, simple_upper};
use crate::table::{parse_tables_toml, TableError, Tables, DEFAULT_TABLES_TOML};

static INSTANCE: OnceLock<Transliterator> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Transliterator {
    tables: Tables,
}

impl Transliterator {
    pub fn new(tables: Tables) -> Self {
        Self { tables }
    }

    /// Build a transliterator from a custom tables document.
    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        parse_tables_toml(toml_str).map(Self::new)
    }

    /// Install custom tables as the global singleton. Must run before the
    /// first `global()` call; the install is a single `OnceLock::set`, so a
    /// concurrent `global()` either sees these tables or makes this fail.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        let tables = parse_tables_toml(&toml_content)?;
        let stats = tables.stats();
        INSTANCE
            .set(Transliterator::new(tables))
            .map_err(|_| TableError::AlreadyInitialized)?;
        debug!(?stats, "custom tables installed");
        Ok(())
    }

    /// Get or initialize the global singleton with the default tables.
    pub fn global() -> &'static Transliterator {
        INSTANCE.get_or_init(|| {
            let tables =
                parse_tables_toml(DEFAULT_TABLES_TOML).expect("tables TOML must be valid");
            debug!(stats = ?tables.stats(), "default tables loaded");
            Transliterator::new(tables)
        })
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn cyrillic_to_latin<'a>(&self, input: impl Into<Option<&'a str>>) -> Option<String> {
        let input = non_blank(input.into())?;
        let _span = debug_span!("cyrillic_to_latin", input_len = input.len()).entered();

        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            match self.tables.cyrillic_to_latin(c) {
                Some(latin) => out.push_str(latin),
                None => out.push(c),
            }
        }
        Some(out)
    }

    pub fn latin_to_cyrillic<'a>(&self, input: impl Into<Option<&'a str>>) -> Option<String> {
        let input = non_blank(input.into())?;
        let _span = debug_span!("latin_to_cyrillic", input_len = input.len()).entered();

        let resolved = self.resolve_digraphs(input);
        Some(
            resolved
                .chars()
                .map(|c| self.tables.latin_to_cyrillic(c).unwrap_or(c))
                .collect(),
        )
    }

    /// Replace every digraph occurrence with its Cyrillic letter.
    ///
    /// A left-to-right scan gives the same result as replacing each key
    /// separately because table validation rejects keys that could overlap.
    fn resolve_digraphs(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut resolved = 0usize;
        let mut chars = input.chars().peekable();
        while let Some(c) = chars.next() {
            let digraph = chars
                .peek()
                .and_then(|&next| self.tables.latin_digraph(c, next));
            match digraph {
                Some(cyr) => {
                    out.push(cyr);
                    chars.next();
                    resolved += 1;
                }
                None => out.push(c),
            }
        }
        debug!(resolved, "digraphs resolved");
        out
    }

    pub fn to_bold_latin<'a>(&self, input: impl Into<Option<&'a str>>) -> Option<String> {
        let input = non_blank(input.into())?;
        let _span = debug_span!("to_bold_latin", input_len = input.len()).entered();

        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            match self.tables.bold_latin(c) {
                Some(ascii) => out.push_str(ascii),
                None => out.push(c),
            }
        }
        Some(out)
    }

    pub fn to_lower_bold_latin<'a>(&self, input: impl Into<Option<&'a str>>) -> Option<String> {
        self.to_bold_latin(input)
            .map(|s| s.chars().map(simple_lower).collect())
    }

    pub fn to_upper_bold_latin<'a>(&self, input: impl Into<Option<&'a str>>) -> Option<String> {
        self.to_bold_latin(input)
            .map(|s| s.chars().map(simple_upper).collect())
    }

    pub fn apply<'a>(
        &self,
        conversion: Conversion,
        input: impl Into<Option<&'a str>>,
    ) -> Option<String> {
        match conversion {
            Conversion::CyrillicToLatin => self.cyrillic_to_latin(input),
            Conversion::LatinToCyrillic => self.latin_to_cyrillic(input),
            Conversion::BoldLatin => self.to_bold_latin(input),
            Conversion::LowerBoldLatin => self.to_lower_bold_latin(input),
            Conversion::UpperBoldLatin => self.to_upper_bold_latin(input),
        }
    }
}

fn non_blank(input: Option<&str>) -> Option<&str> {
    input.filter(|s| !s.trim().is_empty())
}

/// Cyrillic to Latin with the global tables, e.g. "Њива" → "Njiva".
pub fn cyrillic_to_latin<'a>(input: impl Into<Option<&'a str>>) -> Option<String> {
    Transliterator::global().cyrillic_to_latin(input)
}

/// Latin to Cyrillic with the global tables, e.g. "Njegov" → "Његов".
pub fn latin_to_cyrillic<'a>(input: impl Into<Option<&'a str>>) -> Option<String> {
    Transliterator::global().latin_to_cyrillic(input)
}

/// Fold Cyrillic or accented Latin to plain ASCII Latin, e.g. "Чачак" → "Cacak".
pub fn to_bold_latin<'a>(input: impl Into<Option<&'a str>>) -> Option<String> {
    Transliterator::global().to_bold_latin(input)
}

pub fn to_lower_bold_latin<'a>(input: impl Into<Option<&'a str>>) -> Option<String> {
    Transliterator::global().to_lower_bold_latin(input)
}

pub fn to_upper_bold_latin<'a>(input: impl Into<Option<&'a str>>) -> Option<String> {
    Transliterator::global().to_upper_bold_latin(input)
}

/// Run `conversion` with the global tables.
pub fn transliterate<'a>(
    conversion: Conversion,
    input: impl Into<Option<&'a str>>,
) -> Option<String> {
    Transliterator::global().apply(conversion, input)
}

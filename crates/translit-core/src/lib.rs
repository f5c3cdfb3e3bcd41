//! Serbian Cyrillic/Latin transliteration.

pub mod conversion;
pub mod script;
pub mod table;
pub mod transliterate;

pub use conversion::{Conversion, UnknownConversion};
pub use table::{TableError, Tables};
pub use transliterate::{
    cyrillic_to_latin, latin_to_cyrillic, to_bold_latin, to_lower_bold_latin, to_upper_bold_latin,
    transliterate, Transliterator,
};

//! Character-level script classification for table validation.

/// Check the basic Cyrillic block (U+0400..U+04FF). Serbian only uses a
/// subset, but the block-level check keeps custom tables for neighbouring
/// letters (Ѓ, Ќ, Ѕ) loadable.
pub fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

/// ASCII letters plus the Latin-1 Supplement and Latin Extended-A/B letters
/// (minus × and ÷). The extended ranges cover every accented letter of Gaj's alphabet
/// (Č Ć Đ Š Ž) and the usual foreign-name diacritics.
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || (('\u{00C0}'..='\u{024F}').contains(&c) && c != '\u{00D7}' && c != '\u{00F7}')
}

pub fn contains_cyrillic(s: &str) -> bool {
    s.chars().any(is_cyrillic)
}

/// One-to-one upper-case mapping. Characters whose upper case is longer
/// than one character (ß, ŉ, ǰ) have no simple mapping and stay unchanged.
pub fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// One-to-one lower-case mapping. The only multi-character lower case is
/// İ → "i\u{307}", whose simple mapping is the leading `i`.
pub fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

use std::fs;

use translit_core::table::{default_toml, parse_tables_toml, TableStats};

pub fn tables_export() {
    print!("{}", default_toml());
}

pub fn tables_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(parse_tables_toml(&content), "Error: {}");
    println!("OK: {}", summarize(tables.stats()));
}

pub fn summarize(stats: TableStats) -> String {
    format!(
        "cyrillic_to_latin={}, bold_latin={}, latin_digraphs={}, latin_to_cyrillic={}",
        stats.cyrillic_to_latin, stats.bold_latin, stats.latin_digraphs, stats.latin_to_cyrillic
    )
}

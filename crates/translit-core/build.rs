const TABLES_PATH: &str = "src/table/default_tables.toml";

fn main() {
    println!("cargo:rerun-if-changed={TABLES_PATH}");
    // The tables are embedded with include_str!; reject broken TOML here
    // rather than at the first conversion.
    let content = include_str!("src/table/default_tables.toml");
    if let Err(e) = content.parse::<toml::Value>() {
        panic!("{TABLES_PATH} contains invalid TOML: {e}");
    }
}

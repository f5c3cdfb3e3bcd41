use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use tracing::debug;

use translit_core::{Conversion, Transliterator};

/// Install custom tables from `tables` (if given) and return the global
/// transliterator.
pub fn load_transliterator(tables: Option<&str>) -> &'static Transliterator {
    if let Some(path) = tables {
        let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
        die!(
            Transliterator::init_custom(content),
            "Error loading tables from {path}: {}"
        );
        debug!(path, "custom tables installed");
    }
    Transliterator::global()
}

pub fn convert_cmd(conversion: Conversion, text: Option<&str>, tables: Option<&str>) {
    let t = load_transliterator(tables);

    match text {
        Some(text) => match t.apply(conversion, text) {
            Some(out) => println!("{out}"),
            None => {
                eprintln!("Nothing to convert: input is blank");
                process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let lines = die!(
                convert_lines(t, conversion, stdin.lock(), stdout.lock()),
                "Error converting input: {}"
            );
            debug!(lines, %conversion, "stdin converted");
        }
    }
}

/// Convert `reader` line by line. Blank lines come out empty so the output
/// stays aligned with the input.
pub fn convert_lines<R: BufRead, W: Write>(
    t: &Transliterator,
    conversion: Conversion,
    reader: R,
    mut writer: W,
) -> io::Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        let out = t.apply(conversion, line.as_str()).unwrap_or_default();
        writeln!(writer, "{out}")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

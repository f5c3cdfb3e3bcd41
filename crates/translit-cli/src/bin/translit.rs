use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use translit_cli::commands::{convert_ops, table_ops};
use translit_core::Conversion;

#[derive(Parser)]
#[command(name = "translit", about = "Serbian Cyrillic/Latin transliteration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text; reads stdin line by line when no text is given
    Convert {
        /// cyr2lat, lat2cyr, bold, lower-bold or upper-bold
        conversion: Conversion,
        /// Text to convert
        text: Option<String>,
        /// Custom tables TOML file
        #[arg(long)]
        tables: Option<String>,
    },
    /// Inspect transliteration tables
    Tables {
        #[command(subcommand)]
        command: TablesCommand,
    },
}

#[derive(Subcommand)]
enum TablesCommand {
    /// Print the built-in tables as TOML
    Export,
    /// Parse and validate a tables TOML file
    Validate {
        /// Tables TOML file
        file: String,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            conversion,
            text,
            tables,
        } => convert_ops::convert_cmd(conversion, text.as_deref(), tables.as_deref()),
        Command::Tables { command } => match command {
            TablesCommand::Export => table_ops::tables_export(),
            TablesCommand::Validate { file } => table_ops::tables_validate(&file),
        },
    }
}

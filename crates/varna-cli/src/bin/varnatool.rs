use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use varna_cli::commands::{analyze_ops, config_ops, scan_ops, CommandError};
use varna_cli::trace_init;
use varna_core::translit::Scheme;

#[derive(Parser)]
#[command(name = "varnatool", about = "Sanskrit phoneme and chakra analysis")]
struct Cli {
    /// Write JSON trace logs to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    /// Custom phoneme symbol table (TOML)
    #[arg(long, global = true)]
    symbols: Option<PathBuf>,
    /// Custom chakra map (TOML)
    #[arg(long, global = true)]
    chakras: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize ITRANS text into onsets and nuclei
    Scan {
        /// ITRANS text
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Transliterate, tokenize and report the dominant chakra
    Analyze {
        /// Name or phrase to analyze
        text: String,
        /// Input scheme (itrans, hk, slp1, velthuis, wx, devanagari)
        #[arg(long, default_value = "itrans")]
        scheme: Scheme,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert text between transliteration schemes
    Translit {
        /// Text to convert
        text: String,
        /// Source scheme
        #[arg(long)]
        from: Scheme,
        /// Target scheme
        #[arg(long)]
        to: Scheme,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List devas, or only those associated with one chakra
    Devas {
        /// Chakra name (Muladhara .. Ajna)
        #[arg(long)]
        chakra: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the default symbol table TOML to stdout
    SymbolsExport,
    /// Validate a symbol table TOML file
    SymbolsValidate {
        /// Path to TOML file
        file: String,
    },
    /// Print the default chakra map TOML to stdout
    ChakrasExport,
    /// Validate a chakra map TOML file
    ChakrasValidate {
        /// Path to TOML file
        file: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let trace_guard = cli.trace_dir.as_deref().map(trace_init::init_tracing);
    let result = run(cli);
    drop(trace_guard);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    config_ops::install_custom(cli.symbols.as_deref(), cli.chakras.as_deref())
        .map_err(CommandError::Install)?;

    match cli.command {
        Command::Scan { text, json } => scan_ops::scan_cmd(&text, json),
        Command::Analyze { text, scheme, json } => analyze_ops::analyze_cmd(&text, scheme, json),
        Command::Translit {
            text,
            from,
            to,
            json,
        } => analyze_ops::translit_cmd(&text, from, to, json),
        Command::Devas { chakra, json } => analyze_ops::devas_cmd(chakra.as_deref(), json),
        Command::SymbolsExport => config_ops::symbols_export(),
        Command::SymbolsValidate { file } => config_ops::symbols_validate(&file),
        Command::ChakrasExport => config_ops::chakras_export(),
        Command::ChakrasValidate { file } => config_ops::chakras_validate(&file),
    }
}

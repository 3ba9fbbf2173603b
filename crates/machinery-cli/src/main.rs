//! Machinery CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rhizome_machinery_isa::extract::DEFAULT_SOURCE;
use rhizome_machinery_isa::listing::format_line;
use rhizome_machinery_isa::{
    CollisionPolicy, ExtractOptions, ListingFormat, arch, compare, extract_file,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

#[derive(Parser)]
#[command(name = "machinery")]
#[command(about = "Opcode table tooling for VM bytecode formats")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract an opcode table from beam_opcodes.erl
    Extract {
        /// Upstream opcode source
        #[arg(default_value = DEFAULT_SOURCE)]
        file: String,

        /// Output notation
        #[arg(short, long, value_enum, default_value_t = Format::Listing)]
        format: Format,

        /// Align mnemonics into one column
        #[arg(long)]
        align: bool,

        /// Fail when a code is defined more than once
        #[arg(long)]
        strict: bool,
    },

    /// Look up a mnemonic, or a code given as decimal or 0x-prefixed hex
    Lookup {
        /// Architecture label
        arch: String,

        /// Mnemonic or code
        query: String,
    },

    /// Print an architecture's opcode table
    List {
        /// Architecture label
        arch: String,

        /// Print JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Compare a shipped table against the upstream source
    Verify {
        /// Architecture label
        arch: String,

        /// Upstream opcode source
        #[arg(default_value = DEFAULT_SOURCE)]
        file: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// MNEMONIC = 0xHH # DDD
    Listing,
    /// Lines for a define_opcodes! block
    Rust,
}

impl From<Format> for ListingFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Listing => ListingFormat::Listing,
            Format::Rust => ListingFormat::Rust,
        }
    }
}

/// Default log directives when `RUST_LOG` is unset.
const DEFAULT_LOG: &str = "machinery=info,rhizome_machinery_isa=info";

type CliResult = Result<Outcome, Box<dyn std::error::Error>>;

/// How a subcommand finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // Logs go to stderr; stdout carries the tables.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(directives.as_deref())?)
        .init();

    let cli = Cli::parse();
    let mut out = std::io::stdout().lock();

    let outcome = match cli.command {
        Commands::Extract {
            file,
            format,
            align,
            strict,
        } => run_extract(&file, format, align, strict, &mut out)?,
        Commands::Lookup { arch: label, query } => run_lookup(&label, &query, &mut out)?,
        Commands::List { arch: label, json } => run_list(&label, json, &mut out)?,
        Commands::Verify { arch: label, file } => run_verify(&label, &file, &mut out)?,
    };

    Ok(outcome.into())
}

/// `RUST_LOG` replaces the defaults entirely when set.
fn log_filter(directives: Option<&str>) -> Result<EnvFilter, ParseError> {
    match directives.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives),
        None => EnvFilter::try_new(DEFAULT_LOG),
    }
}

fn run_extract(
    file: &str,
    format: Format,
    align: bool,
    strict: bool,
    out: &mut impl Write,
) -> CliResult {
    let options = ExtractOptions {
        policy: if strict {
            CollisionPolicy::Reject
        } else {
            CollisionPolicy::Overwrite
        },
    };
    let extraction = extract_file(file, &options)?;
    if extraction.is_empty() {
        warn!("no opcode definitions found in {}", file);
    }
    write!(out, "{}", extraction.render(format.into(), align))?;
    Ok(Outcome::Success)
}

fn run_lookup(label: &str, query: &str, out: &mut impl Write) -> CliResult {
    let arch = arch::lookup(label)?;
    let table = arch.table();

    let found = match parse_code(query) {
        Some(code) => table
            .lookup_by_code(code)
            .map(|mnemonic| format_line(mnemonic, code, 0)),
        None => table.get(query).map(|entry| {
            let line = format_line(&entry.mnemonic, entry.code, 0);
            match &entry.alias_of {
                Some(canonical) => format!("{} (alias of {})", line, canonical),
                None => line,
            }
        }),
    };

    match found {
        Some(line) => {
            writeln!(out, "{}", line)?;
            Ok(Outcome::Success)
        }
        None => {
            eprintln!("{}: {} not found", arch.label(), query);
            Ok(Outcome::Failure)
        }
    }
}

fn run_list(label: &str, json: bool, out: &mut impl Write) -> CliResult {
    let arch = arch::lookup(label)?;
    if json {
        let entries: Vec<_> = arch.entries().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        write!(out, "{}", arch.table().to_listing(true))?;
    }
    Ok(Outcome::Success)
}

fn run_verify(label: &str, file: &str, out: &mut impl Write) -> CliResult {
    let arch = arch::lookup(label)?;
    let extraction = extract_file(file, &ExtractOptions::default())?;
    let differences = compare(arch.table(), &extraction);

    for difference in &differences {
        writeln!(out, "{}", difference)?;
    }
    if !differences.is_empty() {
        warn!(
            "{} differs from {} in {} codes",
            arch.label(),
            file,
            differences.len()
        );
        return Ok(Outcome::Failure);
    }
    info!("{} matches {}", arch.label(), file);
    Ok(Outcome::Success)
}

/// Parse a decimal or `0x`-prefixed hex code. Mnemonics never start with a
/// digit, so anything else is a name.
fn parse_code(query: &str) -> Option<u32> {
    match query
        .strip_prefix("0x")
        .or_else(|| query.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None if query.starts_with(|c: char| c.is_ascii_digit()) => query.parse().ok(),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("30"), Some(30));
        assert_eq!(parse_code("0x1e"), Some(0x1e));
        assert_eq!(parse_code("0X1E"), Some(0x1e));
        assert_eq!(parse_code("SLICE_0"), None);
        assert_eq!(parse_code("0xzz"), None);
    }

    #[test]
    fn test_extract_defaults() {
        let cli = Cli::parse_from(["machinery", "extract"]);
        match cli.command {
            Commands::Extract {
                file,
                align,
                strict,
                ..
            } => {
                assert_eq!(file, DEFAULT_SOURCE);
                assert!(!align);
                assert!(!strict);
            }
            _ => panic!("expected extract"),
        }
    }

    const FIXTURE: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../machinery-isa/tests/fixtures/beam_opcodes.erl"
    );

    fn lookup(label: &str, query: &str) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run_lookup(label, query, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    /// Whether library INFO and DEBUG events pass `filter`.
    fn library_levels(filter: EnvFilter) -> (bool, bool) {
        let subscriber = tracing_subscriber::registry().with(filter);
        tracing::subscriber::with_default(subscriber, || {
            (
                tracing::enabled!(target: "rhizome_machinery_isa::extract", Level::INFO),
                tracing::enabled!(target: "rhizome_machinery_isa::extract", Level::DEBUG),
            )
        })
    }

    #[test]
    fn test_default_log_filter() {
        assert_eq!(library_levels(log_filter(None).unwrap()), (true, false));
        assert_eq!(library_levels(log_filter(Some("")).unwrap()), (true, false));
    }

    #[test]
    fn test_rust_log_replaces_defaults() {
        let targeted = log_filter(Some("rhizome_machinery_isa=debug,machinery=debug")).unwrap();
        assert_eq!(library_levels(targeted), (true, true));

        let global = log_filter(Some("debug")).unwrap();
        assert_eq!(library_levels(global), (true, true));

        let quiet = log_filter(Some("warn")).unwrap();
        assert_eq!(library_levels(quiet), (false, false));
    }

    #[test]
    fn test_invalid_rust_log() {
        assert!(log_filter(Some("rhizome_machinery_isa=loud")).is_err());
    }

    #[test]
    fn test_lookup_alias() {
        let (outcome, out) = lookup("pyvm", "SLICE_0");
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, "SLICE_0 = 0x1e # 030 (alias of SLICE)\n");
    }

    #[test]
    fn test_lookup_codes() {
        assert_eq!(lookup("pyvm", "30").1, "SLICE = 0x1e # 030\n");
        assert_eq!(lookup("pyvm", "0x1e").1, "SLICE = 0x1e # 030\n");
        assert_eq!(lookup("beam", "0x02").1, "FUNC_INFO = 0x02 # 002\n");
    }

    #[test]
    fn test_lookup_not_found() {
        let (outcome, out) = lookup("beam", "0xff");
        assert_eq!(outcome, Outcome::Failure);
        assert!(out.is_empty());

        assert_eq!(lookup("beam", "SLICE").0, Outcome::Failure);
        assert!(run_lookup("jvm", "NOP", &mut Vec::new()).is_err());
    }

    #[test]
    fn test_extract_fixture() {
        let mut out = Vec::new();
        let outcome = run_extract(FIXTURE, Format::Listing, false, true, &mut out).unwrap();
        assert_eq!(outcome, Outcome::Success);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("LABEL = 0x01 # 001\nFUNC_INFO = 0x02 # 002\n"));
        assert_eq!(text.lines().count(), 148);
    }

    #[test]
    fn test_verify_fixture() {
        let mut out = Vec::new();
        assert_eq!(run_verify("beam", FIXTURE, &mut out).unwrap(), Outcome::Success);
        assert!(out.is_empty());
    }

    #[test]
    fn test_verify_reports_differences() {
        let source = std::fs::read_to_string(FIXTURE).unwrap();
        let drifted = source.replace("opname(1) -> {label,1};", "opname(1) -> {lbl,1};");
        assert_ne!(source, drifted);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(drifted.as_bytes()).unwrap();

        let mut out = Vec::new();
        let path = file.path().to_str().unwrap();
        assert_eq!(run_verify("beam", path, &mut out).unwrap(), Outcome::Failure);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0x01: LABEL is LBL upstream\n"
        );
    }

    #[test]
    fn test_list_json() {
        let mut out = Vec::new();
        assert_eq!(run_list("pyvm", true, &mut out).unwrap(), Outcome::Success);

        let entries: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let slice0 = entries
            .as_array()
            .unwrap()
            .iter()
            .find(|entry| entry["mnemonic"] == "SLICE_0")
            .unwrap();
        assert_eq!(slice0["code"], 0x1e);
        assert_eq!(slice0["alias_of"], "SLICE");
    }

    #[test]
    fn test_lookup_args() {
        let cli = Cli::parse_from(["machinery", "lookup", "pyvm", "SLICE_0"]);
        assert!(matches!(
            cli.command,
            Commands::Lookup { ref arch, ref query } if arch == "pyvm" && query == "SLICE_0"
        ));
    }
}

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::fmt;

use tabgrep::{read_pattern_source, Error, FieldSpec, Grep, GrepConfig, Result};

/// Filter rows of delimited tabular data (CSV/TSV) by field patterns.
///
/// Rows are kept when the key field matches any pattern: exact literals by
/// default, regular expressions with --use-regex. Header rows pass through
/// untouched, and the key field may be a column name resolved against each
/// input's own header.
#[derive(Parser, Debug)]
#[command(name = "tabgrep")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Query pattern (repeatable)
    #[arg(short, long, value_name = "PATTERN")]
    pattern: Vec<String>,

    /// File of patterns, one per row; may itself be delimited data
    #[arg(short = 'f', long, value_name = "FILE")]
    pattern_file: Option<PathBuf>,

    /// Case-insensitive matching
    #[arg(short, long)]
    ignore_case: bool,

    /// Treat patterns as regular expressions
    #[arg(short = 'r', long)]
    use_regex: bool,

    /// Invert the match: keep rows whose key field matches no pattern
    #[arg(short = 'v', long)]
    invert: bool,

    /// Key field: a column name or a 1-based index
    #[arg(short, long, default_value = "1", value_name = "FIELD")]
    key: String,

    /// Treat the first row of each input as data, not a header
    #[arg(short = 'H', long)]
    no_header_row: bool,

    /// Input field delimiter
    #[arg(short, long, default_value = ",", value_name = "CHAR")]
    delimiter: String,

    /// Output field delimiter
    #[arg(short = 'D', long, default_value = ",", value_name = "CHAR")]
    out_delimiter: String,

    /// Read tab-delimited input (overrides --delimiter)
    #[arg(short = 't', long)]
    tabs: bool,

    /// Write tab-delimited output (overrides --out-delimiter)
    #[arg(short = 'T', long)]
    out_tabs: bool,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    out_file: Option<PathBuf>,

    /// Input files; none or "-" reads stdin
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Warnings go to stderr so stdout stays clean for record output
    let subscriber = fmt::Subscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr);
    subscriber.init();

    if let Err(e) = run(cli) {
        eprintln!("tabgrep: {}", e);
        process::exit(2);
    }
}

fn run(cli: Cli) -> Result<()> {
    let delimiter = if cli.tabs {
        b'\t'
    } else {
        delimiter_byte(&cli.delimiter)?
    };
    let out_delimiter = if cli.out_tabs {
        b'\t'
    } else {
        delimiter_byte(&cli.out_delimiter)?
    };

    if cli.pattern.is_empty() && cli.pattern_file.is_none() {
        return Err(Error::config("no patterns supplied, use -p or -f"));
    }

    let mut patterns = cli.pattern;
    if let Some(path) = &cli.pattern_file {
        let file = File::open(path)?;
        patterns.extend(read_pattern_source(file, delimiter)?);
    }

    let config = GrepConfig {
        patterns,
        ignore_case: cli.ignore_case,
        use_regex: cli.use_regex,
        invert: cli.invert,
        key: FieldSpec::parse(&cli.key)?,
        delimiter,
        out_delimiter,
        no_header_row: cli.no_header_row,
    };
    let mut grep = Grep::new(config)?;

    // Every input is opened before the output file is created, so a bad
    // configuration or missing input never leaves a truncated output behind
    let inputs = open_inputs(&cli.files)?;

    match &cli.out_file {
        Some(path) => {
            let mut output = File::create(path)?;
            grep.run(inputs, &mut output)
        }
        None => {
            let stdout = io::stdout();
            let mut output = stdout.lock();
            grep.run(inputs, &mut output)
        }
    }
}

fn open_inputs(files: &[PathBuf]) -> Result<Vec<Box<dyn Read>>> {
    if files.is_empty() {
        return Ok(vec![Box::new(io::stdin())]);
    }

    let mut inputs: Vec<Box<dyn Read>> = Vec::with_capacity(files.len());
    for path in files {
        if path.as_os_str() == "-" {
            inputs.push(Box::new(io::stdin()));
        } else {
            inputs.push(Box::new(File::open(path)?));
        }
    }
    Ok(inputs)
}

fn delimiter_byte(value: &str) -> Result<u8> {
    match value.as_bytes() {
        [b] => Ok(*b),
        _ => Err(Error::config(format!(
            "delimiter must be a single byte, got '{}'",
            value
        ))),
    }
}

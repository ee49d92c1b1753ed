use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use linetable::{Delimiter, ListHeader, Options, Splitter, Table};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelimArg {
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

#[derive(Parser, Debug)]
#[command(
    name = "linetable-cli",
    about = "Print delimited text lines as JSON records",
    version
)]
struct Args {
    /// Field delimiter
    #[arg(long, value_enum, default_value_t = DelimArg::Comma)]
    delimiter: DelimArg,

    /// Use the first line as the header line
    #[arg(long, conflicts_with = "names")]
    header: bool,

    /// Comma separated field names (default: field positions)
    #[arg(long)]
    names: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }
    debug!(bytes = buf.len(), "read input");

    let delimiter = match args.delimiter {
        DelimArg::Comma => Delimiter::Comma,
        DelimArg::Tab => Delimiter::Tab,
        DelimArg::Pipe => Delimiter::Pipe,
        DelimArg::Semicolon => Delimiter::Semicolon,
    };

    let table: Table = match &args.names {
        Some(names) => {
            let header = ListHeader::from_line(names, &Splitter::comma());
            let lines = linetable::split_lines(&buf);
            linetable::read_table_with(lines, &header, &Splitter::from(delimiter))?
        }
        None => {
            let options = Options {
                delimiter,
                has_header: args.header,
            };
            linetable::read_str(&buf, &options)?
        }
    };
    info!(records = table.len(), "parsed table");

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        println!("{}", serde_json::to_string(&table)?);
    }

    Ok(())
}

//! `jsondoc` CLI: format, compact, check and query documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print (stdin → stdout, 2-space indent)
//! echo '{"name":"probe","ports":[80,443]}' | jsondoc format
//!
//! # Pretty-print a file into another file with a 4-space indent
//! jsondoc format -i config.json -o config.pretty.json --indent 4
//!
//! # Single-line output
//! jsondoc compact -i config.json
//!
//! # Validate and describe the root
//! jsondoc check -i config.json
//!
//! # Extract a sub-document by dotted path
//! jsondoc get servers.0.host -i config.json
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `--verbose`) to see file I/O on stderr.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsondoc_core::{Kind, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsondoc", version, about = "Format, compact and query JSON documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at info level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-indent a document
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Spaces per nesting level
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Rewrite a document on a single line
    Compact {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate a document and report the kind and size of its root
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the sub-document at a dotted path (e.g. `servers.0.host`)
    Get {
        /// Dotted path; numeric segments index arrays, negative counts from the end
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Spaces per nesting level (0 for a single line)
        #[arg(long, default_value_t = 0)]
        indent: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Format {
            input,
            output,
            indent,
        } => {
            let doc = read_document(input.as_deref())?;
            write_document(output.as_deref(), &doc, indent)?;
        }
        Commands::Compact { input, output } => {
            let doc = read_document(input.as_deref())?;
            write_document(output.as_deref(), &doc, 0)?;
        }
        Commands::Check { input } => {
            let doc = read_document(input.as_deref())?;
            println!("{}", describe(&doc));
        }
        Commands::Get {
            path,
            input,
            indent,
        } => {
            let doc = read_document(input.as_deref())?;
            let selected = doc
                .select(&path)
                .with_context(|| format!("Failed to select path: {}", path))?;
            println!("{}", jsondoc_core::serialize(selected, indent));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// One-line summary of the root value, e.g. `object with 3 keys`.
fn describe(doc: &Value) -> String {
    match doc.kind() {
        Kind::Array => format!("array with {} elements", doc.len()),
        Kind::Object => format!("object with {} keys", doc.len()),
        kind => format!("{}", kind),
    }
}

fn read_document(path: Option<&str>) -> Result<Value> {
    match path {
        Some(path) => {
            let doc = jsondoc_core::load(path)
                .with_context(|| format!("Failed to load document: {}", path))?;
            tracing::info!(path, kind = %doc.kind(), size = doc.len(), "loaded document");
            Ok(doc)
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            let doc = jsondoc_core::parse(&buf).context("Failed to parse document from stdin")?;
            tracing::info!(bytes = buf.len(), kind = %doc.kind(), "parsed stdin");
            Ok(doc)
        }
    }
}

fn write_document(path: Option<&str>, doc: &Value, indent: usize) -> Result<()> {
    match path {
        Some(path) => {
            jsondoc_core::dump(doc, Path::new(path), indent)
                .with_context(|| format!("Failed to write file: {}", path))?;
            tracing::info!(path, indent, "wrote document");
        }
        None => {
            println!("{}", jsondoc_core::serialize(doc, indent));
        }
    }
    Ok(())
}

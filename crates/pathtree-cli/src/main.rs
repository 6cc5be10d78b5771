//! `pathtree` CLI — read and edit a JSON document by path from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Read a value (prints JSON)
//! pathtree -f offer.json get 'rfps[2].data.title'
//!
//! # Read with a fallback for missing paths
//! pathtree -f offer.json get 'rfps[9].data' --default '{}'
//!
//! # Write a value; missing objects/lists are created, the file is rewritten
//! pathtree -f offer.json set 'rfps[0].data.budget' 1200
//! pathtree -f offer.json set title 'Plain text is stored as a string'
//!
//! # Delete an element, slice or key
//! pathtree -f offer.json delete 'rfps[-1]'
//!
//! # Print the whole document, or copy it elsewhere
//! pathtree -f offer.json dump -o backup/offer.json
//! ```
//!
//! Logging goes to stderr. `-v` shows coercions and list growth, `-vv` adds
//! placeholder creation; `RUST_LOG` overrides both.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use pathtree_core::{Container, Options};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pathtree",
    version,
    about = "Read and edit JSON documents with dot/bracket paths"
)]
struct Cli {
    /// JSON document to operate on
    #[arg(short, long, global = true, default_value = "data.json")]
    file: PathBuf,

    /// Spaces of indentation when writing JSON (0 for compact)
    #[arg(long, global = true)]
    indent: Option<usize>,

    /// JSON file with container options ({"indent": 2, "max_index": 1048576})
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a path
    Get {
        path: String,
        /// JSON printed when the path does not resolve (default: null)
        #[arg(long)]
        default: Option<String>,
    },
    /// Store a value at a path and rewrite the file
    Set {
        path: String,
        /// JSON value; anything that is not valid JSON is stored as a string
        value: String,
    },
    /// Remove the element, slice or key at a path and rewrite the file
    Delete { path: String },
    /// Print the document, or write it to another file
    Dump {
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = load_options(cli.config.as_deref(), cli.indent)?;

    match cli.command {
        Commands::Get { path, default } => {
            let container = open(&cli.file, false)?.with_options(options);
            let default = match default.as_deref() {
                Some(raw) => parse_value(raw),
                None => Value::Null,
            };
            let value = container
                .get_value(&path, default)
                .with_context(|| format!("Failed to read path '{}'", path))?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Commands::Set { path, value } => {
            let mut container = open(&cli.file, true)?.with_options(options);
            container
                .set_value(&path, parse_value(&value))
                .with_context(|| format!("Failed to set path '{}'", path))?;
            save(&container, &cli.file)?;
        }
        Commands::Delete { path } => {
            let mut container = open(&cli.file, false)?.with_options(options);
            let removed = container
                .delete_entry(&path)
                .with_context(|| format!("Failed to delete path '{}'", path))?;
            match removed {
                Some(value) => {
                    save(&container, &cli.file)?;
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                None => debug!(path = %path, "nothing removed, file left untouched"),
            }
        }
        Commands::Dump { output } => {
            let container = open(&cli.file, false)?.with_options(options);
            match output {
                Some(target) => save(&container, &target)?,
                None => println!("{}", container.dumps()?),
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Options from `--config`, with `--indent` taking precedence.
fn load_options(config: Option<&Path>, indent: Option<usize>) -> Result<Options> {
    let mut options = match config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str::<Options>(&raw)
                .with_context(|| format!("Invalid config: {}", path.display()))?
        }
        None => Options::default(),
    };
    if let Some(indent) = indent {
        options.indent = indent;
    }
    Ok(options)
}

/// Load the document. With `create`, a missing file starts as an empty object.
fn open(file: &Path, create: bool) -> Result<Container> {
    if create && !file.exists() {
        debug!(file = %file.display(), "starting a new document");
        let name = file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
        return Ok(Container::new(name, None)?);
    }
    Container::load(file).with_context(|| format!("Failed to load: {}", file.display()))
}

fn save(container: &Container, file: &Path) -> Result<()> {
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("Not a file path: {}", file.display()))?;
    container
        .dump(dir, Some(&file_name))
        .with_context(|| format!("Failed to write: {}", file.display()))?;
    Ok(())
}

/// Interpret a command-line value as JSON, falling back to a plain string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

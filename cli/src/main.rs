use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use errgrain::logging::{init_logging, LogLevel};
use errgrain::{catalog, classify, Category};

#[derive(Parser)]
#[command(name = "errgrain")]
#[command(author, version, about = "Classify OS error codes into named categories")]
#[command(after_help = "Examples:
  errgrain list                           Show the standard category catalog
  errgrain list --json                    Same, as JSON for tooling
  errgrain match 2                        Classify errno 2 (ENOENT)
  errgrain match 104 connection-reset connection-error
                                          Try candidates in the given order
  errgrain probe /no/such/file            Raise a real OS error and classify it")]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the standard categories
    List {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Match a raw OS error code against categories, in order
    Match {
        /// The raw reason code (errno)
        code: i32,
        /// Candidate category names, tried in order (default: full catalog)
        categories: Vec<String>,
    },
    /// Stat a path and classify the error the OS raises, if any
    Probe {
        /// Path to probe
        path: PathBuf,
    },
}

fn lookup(name: &str) -> Result<&'static Category> {
    catalog::all()
        .into_iter()
        .find(|c| c.name() == name)
        .with_context(|| format!("unknown category '{name}'"))
}

fn cmd_list(json: bool) -> Result<()> {
    let infos: Vec<_> = catalog::all().iter().map(|c| c.info()).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }
    for info in infos {
        let codes = info
            .codes
            .map(|codes| {
                let list: Vec<String> = codes.iter().map(i32::to_string).collect();
                format!("  [{}]", list.join(", "))
            })
            .unwrap_or_default();
        println!("{:<22} {}{}", info.name.green(), info.doc, codes.dimmed());
    }
    Ok(())
}

fn cmd_match(code: i32, names: &[String]) -> Result<()> {
    let candidates: Vec<&Category> = if names.is_empty() {
        catalog::all()
    } else {
        names
            .iter()
            .map(|name| lookup(name))
            .collect::<Result<_>>()?
    };

    let error = io::Error::from_raw_os_error(code);
    match classify(&error, &candidates) {
        Some(category) => {
            println!("{}  {}", category.name().green().bold(), category.doc());
            Ok(())
        }
        None => bail!("reason code {code} ({error}) matched no candidate category"),
    }
}

fn cmd_probe(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(metadata) => {
            println!(
                "{} {} raised no error ({} bytes)",
                "ok:".green(),
                path.display(),
                metadata.len()
            );
            Ok(())
        }
        Err(error) => match classify(&error, &catalog::all()) {
            Some(category) => {
                println!(
                    "{}  {} ({})",
                    category.name().green().bold(),
                    category.doc(),
                    error
                );
                Ok(())
            }
            None => bail!("uncategorized error for {}: {error}", path.display()),
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LogLevel::from(cli.verbose));

    match cli.command {
        Commands::List { json } => cmd_list(json),
        Commands::Match { code, categories } => cmd_match(code, &categories),
        Commands::Probe { path } => cmd_probe(&path),
    }
}

//! Glaze CLI - attribute-string parsing and debugging tool
//!
//! Usage:
//!   glaze "attr1='val1' attr2"          Print the canonical form
//!   glaze --file attrs.txt              Read the input from a file
//!   glaze --keys "b a c"                List keys in canonical order
//!   glaze --data "data-a x"             Keep only data-* pairs
//!   glaze --json "a=1 b"                Dump the pairs as JSON

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use glaze_attr::{Attribute, AttributeMap, ParseError};
use owo_colors::OwoColorize;

/// Parse an attribute string and print its canonical form.
#[derive(Parser)]
#[command(name = "glaze", version, about)]
struct Cli {
    /// The attribute string to parse.
    input: Option<String>,

    /// Read the attribute string from a file instead.
    #[arg(long, conflicts_with = "input")]
    file: Option<PathBuf>,

    /// List the keys in canonical order, one per line.
    #[arg(long)]
    keys: bool,

    /// Keep only the data-* pairs.
    #[arg(long)]
    data: bool,

    /// Dump the parsed pairs as JSON.
    #[arg(long, conflicts_with = "keys")]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let text = match (&cli.input, &cli.file) {
        (Some(input), None) => input.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => bail!("expected an attribute string or --file"),
    };

    let map = match AttributeMap::parse(&text) {
        Ok(map) => map,
        Err(err) => {
            report_parse_error(&text, err);
            return Ok(ExitCode::FAILURE);
        }
    };

    let map = if cli.data { map.data() } else { map };

    if cli.keys {
        for key in map.keys() {
            println!("{key}");
        }
    } else if cli.json {
        let pairs: Vec<&Attribute> = map.iter().collect();
        println!("{}", serde_json::to_string_pretty(&pairs)?);
    } else {
        println!("{map}");
    }

    Ok(ExitCode::SUCCESS)
}

/// Print a caret diagnostic pointing at the error's byte offset.
fn report_parse_error(text: &str, err: ParseError) {
    eprintln!("{} {err}", "error:".red().bold());
    let line = text.lines().next().unwrap_or(text);
    if err.position() <= line.len() {
        eprintln!("  {line}");
        eprintln!("  {}{}", " ".repeat(err.position()), "^".red().bold());
    }
    eprintln!("  {} {}", "kind:".dimmed(), err.kind());
}

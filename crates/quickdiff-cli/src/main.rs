//! `quickdiff` CLI -- compare two JSON documents structurally.
//!
//! ## Usage
//!
//! ```sh
//! # Human-readable report
//! quickdiff old.json new.json
//!
//! # Machine-readable report
//! quickdiff old.json new.json --format json
//! ```
//!
//! Exit codes follow the diff(1) convention: 0 when the documents are
//! structurally identical, 1 when differences were found, 2 on usage or
//! I/O errors.

use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use quickdiff_core::{diff, DiffReport, Value};

#[derive(Parser)]
#[command(
    name = "quickdiff",
    version,
    about = "Structural diff for JSON documents"
)]
struct Cli {
    /// Left-hand input file
    a: String,

    /// Right-hand input file
    b: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One line per finding
    Text,
    /// The full report as pretty-printed JSON
    Json,
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

/// Returns `Ok(true)` when the documents are identical.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    let a = read_value(&cli.a)?;
    let b = read_value(&cli.b)?;
    let report = diff(&a, &b);

    match cli.format {
        Format::Text => print_text(&report),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(report.is_empty())
}

fn read_value(path: &str) -> Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path))?;
    let json: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON in {}", path))?;
    Ok(Value::from(json))
}

/// One line per finding, grouped by kind in report order.
fn print_text(report: &DiffReport) {
    if report.is_empty() {
        println!("no differences");
        return;
    }
    for f in &report.value_changes {
        println!("value changed at {}: {} -> {}", f.path, f.a, f.b);
    }
    for f in &report.type_changes {
        println!(
            "type changed at {}: {} ({}) -> {} ({})",
            f.path,
            f.a,
            f.a.category(),
            f.b,
            f.b.category()
        );
    }
    for f in &report.keys_removed {
        println!("key removed at {}: {} = {}", f.path, f.key, f.value);
    }
    for f in &report.keys_added {
        println!("key added at {}: {} = {}", f.path, f.key, f.value);
    }
    for f in &report.length_mismatches {
        println!(
            "length mismatch at {}: {} -> {}",
            f.path, f.a_len, f.b_len
        );
    }
}

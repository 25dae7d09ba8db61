// src/cli.rs
use std::path::PathBuf;

use crate::config::{BuildOptions, RenderOptions};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::runner;
use crate::table::preview;

pub const MANIFEST_HELP: &str = include_str!("manifest_help.txt");
pub const TABLE_HELP: &str = include_str!("table_help.txt");

/// Parsed command line: either options to run with, or a help request.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation<T> {
    Run(T),
    Help,
}

/// Prints scan status to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        println!("Processing {total} JSON files...");
    }
}

/* ---------------- Argument parsing ---------------- */

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::Usage(format!("Missing value for {flag}")))
}

pub fn parse_build_args<I>(args: I) -> Result<Invocation<BuildOptions>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = BuildOptions::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--root" => opts.root = PathBuf::from(value(&mut args, "--root")?),
            "-o" | "--out" => opts.out = PathBuf::from(value(&mut args, "--out")?),
            "-h" | "--help" => return Ok(Invocation::Help),
            _ => return Err(Error::Usage(format!("Unknown arg: {a}"))),
        }
    }
    Ok(Invocation::Run(opts))
}

pub fn parse_render_args<I>(args: I) -> Result<Invocation<RenderOptions>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = RenderOptions::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--manifest" => opts.manifest = PathBuf::from(value(&mut args, "--manifest")?),
            "-o" | "--out" => opts.out = PathBuf::from(value(&mut args, "--out")?),
            "--no-preview" => opts.preview = false,
            "-h" | "--help" => return Ok(Invocation::Help),
            _ => return Err(Error::Usage(format!("Unknown arg: {a}"))),
        }
    }
    Ok(Invocation::Run(opts))
}

/* ---------------- Entry points ---------------- */

fn year(y: Option<u16>) -> String {
    y.map(|y| y.to_string()).unwrap_or_else(|| s!("none"))
}

pub fn run_manifest<I: IntoIterator<Item = String>>(args: I) -> Result<()> {
    let opts = match parse_build_args(args)? {
        Invocation::Run(opts) => opts,
        Invocation::Help => {
            eprintln!("{MANIFEST_HELP}");
            return Ok(());
        }
    };

    println!("Generating SASAP manifest...");
    let summary = runner::build(&opts, Some(&mut ConsoleProgress))?;
    let stats = &summary.manifest.statistics;
    if summary.skipped > 0 {
        println!("Skipped {} files without a year prefix", summary.skipped);
    }

    println!("Manifest generated successfully!");
    println!("Statistics:");
    println!("   - Total files: {}", stats.total_files);
    println!("   - Total locations: {}", stats.total_locations);
    println!("   - Total species: {}", stats.total_species);
    println!("   - Years covered: {}", stats.years_covered);
    println!("   - Year range: {}-{}", year(stats.earliest_year), year(stats.latest_year));
    println!("Manifest saved as: {}", summary.path.display());
    Ok(())
}

pub fn run_table<I: IntoIterator<Item = String>>(args: I) -> Result<()> {
    let opts = match parse_render_args(args)? {
        Invocation::Run(opts) => opts,
        Invocation::Help => {
            eprintln!("{TABLE_HELP}");
            return Ok(());
        }
    };

    println!("Generating SASAP README table...");
    let summary = runner::render(&opts)?;

    println!("Location table generated successfully!");
    println!("Table saved as: {}", summary.path.display());
    if opts.preview {
        let rule = "=".repeat(50);
        println!("\n{rule}");
        println!("TABLE PREVIEW:");
        println!("{rule}");
        println!("{}", preview(&summary.table));
    }
    Ok(())
}

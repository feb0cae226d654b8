//! # hoi4gen-cli
//!
//! Command-line driver: discovers country workbooks, loads the substitution
//! dictionary, and writes the generated unit-history files.

use anyhow::{Context, Result};
use clap::Parser;
use hoi4gen_core::{CountryAssets, SubstitutionTable};
use hoi4gen_sheet::Workbook;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// hoi4gen - spreadsheet unit rosters to HOI4 unit-history script
#[derive(Parser)]
#[command(name = "hoi4gen")]
#[command(author, version, about = "Generate HOI4 unit history from xlsx rosters", long_about = None)]
struct Cli {
    /// Directory scanned for country workbooks named TAG.xlsx
    #[arg(short = 'i', long = "input-dir", default_value = ".")]
    input_dir: PathBuf,

    /// Directory the generated files are written under
    #[arg(short = 'o', long = "output-dir", default_value = "output")]
    output_dir: PathBuf,

    /// Substitution dictionary workbook; defaults to dictionaries.xlsx in
    /// the input directory
    #[arg(short = 'd', long = "dictionaries")]
    dictionaries: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let dictionaries = cli
        .dictionaries
        .clone()
        .unwrap_or_else(|| cli.input_dir.join("dictionaries.xlsx"));
    let table = load_dictionaries(&dictionaries);

    for (tag, path) in discover_country_files(&cli.input_dir)? {
        println!("Handling xlsx file: {}", path.display());
        match generate_country(&tag, &path, &table, &cli.output_dir) {
            Ok(()) => println!("Success."),
            // A failed file never aborts the batch.
            Err(err) => println!("Fail: {err:#}"),
        }
    }

    Ok(())
}

/// Load the substitution dictionary, falling back to an empty (pass-through)
/// table when the workbook is missing or unreadable.
fn load_dictionaries(path: &Path) -> SubstitutionTable {
    match Workbook::from_xlsx(path) {
        Ok(book) => SubstitutionTable::from_workbook(&book),
        Err(err) => {
            warn!(
                "no substitution dictionary loaded from {}: {err}",
                path.display()
            );
            SubstitutionTable::new()
        }
    }
}

/// Find country workbooks: files named `TAG.xlsx` with a three-letter
/// uppercase tag. Sorted by tag for a deterministic processing order.
fn discover_country_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let pattern =
        Regex::new(r"^([A-Z]{3})\.xlsx$").context("invalid country file pattern")?;

    let entries = fs::read_dir(dir)
        .with_context(|| format!("cannot read input directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(captures) = pattern.captures(name) {
            files.push((captures[1].to_string(), entry.path()));
        }
    }
    files.sort();
    Ok(files)
}

/// Process one country workbook and write its four artifacts.
fn generate_country(
    tag: &str,
    path: &Path,
    table: &SubstitutionTable,
    output_dir: &Path,
) -> Result<()> {
    let book = Workbook::from_xlsx(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let assets = CountryAssets::from_workbook(&book, table);

    let units_dir = output_dir.join("history/units");
    let names_dir = output_dir.join("common/units/names_divisions");
    fs::create_dir_all(&units_dir)
        .with_context(|| format!("cannot create {}", units_dir.display()))?;
    fs::create_dir_all(&names_dir)
        .with_context(|| format!("cannot create {}", names_dir.display()))?;

    let mut land = String::new();
    assets.write_land_history(&mut land, tag)?;
    fs::write(units_dir.join(format!("{tag}.txt")), land)?;

    let mut naval = String::new();
    assets.write_naval_history(&mut naval, tag)?;
    fs::write(units_dir.join(format!("{tag}_naval.txt")), naval)?;

    let mut air = String::new();
    assets.write_air_history(&mut air, tag)?;
    fs::write(units_dir.join(format!("{tag}_air.txt")), air)?;

    let mut names = String::new();
    assets.write_division_name_groups(&mut names, tag)?;
    fs::write(names_dir.join(format!("{tag}_generated.txt")), names)?;

    Ok(())
}

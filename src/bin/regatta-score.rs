//! CLI tool to score a regatta data file (.json) and write the results.
//!
//! Usage:
//!   regatta-score <regatta.json>
//!   regatta-score <regatta.json> -o results.html
//!   regatta-score <regatta.json> --format json
//!
//! If no output file is specified, writes to stdout.

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use regatta_scoring::{RegattaFile, calculate, calculate_traced, render_html};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// HTML results table
    Html,
    /// Standings as JSON
    Json,
}

/// Score a regatta under the low-point system with discards.
#[derive(Parser)]
#[command(name = "regatta-score")]
struct Cli {
    /// Regatta data file (.json)
    regatta: PathBuf,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Log each scoring stage on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print every boat's scores after each stage on stderr
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let regatta = match RegattaFile::load(&cli.regatta) {
        Ok(regatta) => regatta,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let scored = if cli.trace {
        calculate_traced(&regatta.races).map(|(standings, trace)| {
            eprint!("{trace}");
            standings
        })
    } else {
        calculate(&regatta.races)
    };
    let standings = match scored {
        Ok(standings) => standings,
        Err(e) => {
            eprintln!("Scoring error: {e}");
            process::exit(1);
        }
    };

    let output = match cli.format {
        Format::Html => {
            let mut out = Vec::new();
            let club = regatta.club.as_deref().unwrap_or("");
            render_html(&standings.results, &regatta.skippers, club, &mut out).map(|()| out)
        }
        Format::Json => serde_json::to_vec_pretty(&standings).map_err(io::Error::from),
    };
    let output = match output {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error rendering results: {e}");
            process::exit(1);
        }
    };

    if let Some(out_path) = &cli.output {
        if let Some(parent) = Path::new(out_path).parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!("Error creating output directory for '{}'", out_path.display());
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, &output) {
            eprintln!("Error writing output file '{}': {e}", out_path.display());
            process::exit(1);
        }
    } else if let Err(e) = io::stdout().write_all(&output) {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }

    if cli.verbose {
        eprintln!(
            "Scored {} boats over {} races",
            standings.results.len(),
            regatta.races.len()
        );
    }
}

/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod logging;

use std::collections::BTreeMap;
use std::path::PathBuf;

use cite_core::{CitationStandard, RecordKind};
use cite_processor::{io::load_records, CitationFormatter, ProcessorError, StyleRegistry};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a records file as a sorted reference list
    Format {
        /// Path to the records file (YAML or JSON)
        records: PathBuf,

        /// Citation standard
        #[arg(short, long, value_enum, default_value_t = Style::Gost)]
        style: Style,

        /// Output as a JSON array of strings
        #[arg(long)]
        json: bool,
    },
    /// List the citation standards and the record kinds each supports
    Styles,
    /// Validate a records file
    Check {
        /// Path to the records file (YAML or JSON)
        records: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Style {
    Gost,
    Apa,
}

impl From<Style> for CitationStandard {
    fn from(style: Style) -> Self {
        match style {
            Style::Gost => CitationStandard::Gost,
            Style::Apa => CitationStandard::Apa,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), ProcessorError> {
    match command {
        Commands::Format {
            records,
            style,
            json,
        } => {
            let records = load_records(&records)?;
            let citations: Vec<String> = CitationFormatter::new(style.into(), &records)?
                .format()
                .iter()
                .map(|citation| citation.to_string())
                .collect();

            if json {
                let out = serde_json::to_string_pretty(&citations)
                    .map_err(|e| ProcessorError::Serialization(e.to_string()))?;
                println!("{}", out);
            } else {
                for citation in citations {
                    println!("{}", citation);
                }
            }
        }
        Commands::Styles => {
            for standard in CitationStandard::ALL {
                let kinds: Vec<&str> = StyleRegistry::for_standard(*standard)
                    .kinds()
                    .map(|kind| kind.as_str())
                    .collect();
                println!("{} ({}): {}", standard, standard.title(), kinds.join(", "));
            }
        }
        Commands::Check { records } => {
            let loaded = load_records(&records)?;
            let mut counts: BTreeMap<RecordKind, usize> = BTreeMap::new();
            for record in &loaded {
                *counts.entry(record.kind()).or_default() += 1;
            }
            println!("{}: {} records", records.display(), loaded.len());
            for (kind, count) in counts {
                println!("  {}: {}", kind, count);
            }
        }
    }
    Ok(())
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # qualifier - Event qualification tooling
//!
//! Validates, describes and evaluates WCIF event qualifications.
//!
//! - `qualifier validate <file>` checks a qualification and prints its canonical form
//! - `qualifier describe --event 333 <file>` prints the human-readable rule
//! - `qualifier check --results results.csv --person 2019TEST01 --event 333 <file>`
//!   answers whether the person currently meets the qualification
//! - `qualifier schema` prints the WCIF JSON schema
//!
//! Qualification files contain a single WCIF qualification object (or `null`).
//! Pass `-` as the file to read from standard input.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context, eyre::eyre};
use qualifier::{QualificationRegistry, ResultHistory};
use qualifier_api::{
    CheckEligibilityRequest, CheckEligibilityResponse, CompetitionEvent,
    DescribeQualificationRequest, DescribeQualificationResponse, ValidateQualificationRequest,
    ValidateQualificationResponse, check_eligibility, describe_qualification, load_result_history,
    validate_qualification,
};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Qualifier - WCIF event qualification tooling
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        let registry: &QualificationRegistry = QualificationRegistry::global();
        self.command.run(registry)
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Validate a qualification and print its canonical WCIF form
    #[command(visible_alias = "v")]
    Validate {
        /// Qualification JSON file, or `-` for stdin
        file: PathBuf,
    },

    /// Print the human-readable description of a qualification
    #[command(visible_alias = "d")]
    Describe {
        /// WCA event id the qualification belongs to
        #[arg(short, long)]
        event: String,

        /// Qualification JSON file, or `-` for stdin
        file: PathBuf,
    },

    /// Check whether a person currently meets a qualification
    #[command(visible_alias = "c")]
    Check {
        /// CSV file of results (`person_id,event_id,competition_start_date,best,average`)
        #[arg(short, long)]
        results: PathBuf,

        /// WCA id of the person; omit for a competitor without one
        #[arg(short, long)]
        person: Option<String>,

        /// WCA event id the qualification belongs to
        #[arg(short, long)]
        event: String,

        /// Qualification JSON file, or `-` for stdin
        file: PathBuf,
    },

    /// Print the JSON schema of a WCIF event qualification
    Schema {
        /// Print the schema of the whole WCIF event instead
        #[arg(long)]
        event: bool,
    },
}

impl Command {
    fn run(self, registry: &QualificationRegistry) -> Result<()> {
        match self {
            Self::Validate { file } => validate(registry, &file),
            Self::Describe { event, file } => describe(registry, event, &file),
            Self::Check {
                results,
                person,
                event,
                file,
            } => check(registry, &results, person, event, &file),
            Self::Schema { event } => {
                let schema: Value = if event {
                    CompetitionEvent::wcif_json_schema(registry)
                } else {
                    qualifier::wcif_json_schema(registry)
                };
                print_json(&schema)
            }
        }
    }
}

fn validate(registry: &QualificationRegistry, file: &Path) -> Result<()> {
    let request: ValidateQualificationRequest = ValidateQualificationRequest {
        qualification: read_qualification(file)?,
    };
    let response: ValidateQualificationResponse = validate_qualification(registry, &request)?;
    print_json(&serde_json::to_value(&response)?)?;

    if response.valid {
        Ok(())
    } else {
        Err(eyre!("qualification in {} is invalid", file.display()))
    }
}

fn describe(registry: &QualificationRegistry, event_id: String, file: &Path) -> Result<()> {
    let request: DescribeQualificationRequest = DescribeQualificationRequest {
        event_id,
        qualification: read_qualification(file)?,
    };
    let response: DescribeQualificationResponse = describe_qualification(registry, &request)?;
    println!("{}", response.description.as_deref().unwrap_or("-"));
    Ok(())
}

fn check(
    registry: &QualificationRegistry,
    results: &Path,
    person_id: Option<String>,
    event_id: String,
    file: &Path,
) -> Result<()> {
    let csv_content: String = std::fs::read_to_string(results)
        .wrap_err_with(|| format!("failed to read results from {}", results.display()))?;
    let history: ResultHistory = load_result_history(&csv_content)?;
    info!(
        results = history.len(),
        "Loaded results from {}",
        results.display()
    );

    let request: CheckEligibilityRequest = CheckEligibilityRequest {
        event_id,
        person_id,
        qualification: read_qualification(file)?,
    };
    let response: CheckEligibilityResponse = check_eligibility(registry, &history, &request)?;
    print_json(&serde_json::to_value(&response)?)
}

fn read_qualification(file: &Path) -> Result<Value> {
    let content: String = if file == Path::new("-") {
        let mut buffer: String = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read qualification from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(file)
            .wrap_err_with(|| format!("failed to read qualification from {}", file.display()))?
    };
    debug!(bytes = content.len(), "Read qualification payload");

    serde_json::from_str(&content)
        .wrap_err_with(|| format!("{} does not contain valid JSON", file.display()))
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

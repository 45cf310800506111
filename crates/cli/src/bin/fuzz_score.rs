//! Score check-digit schemes against the standard error batteries.

use anyhow::{bail, Context};
use checkdigit_algorithms::catalog;
use checkdigit_cli::field_config;
use checkdigit_cli::helpers::telemetry;
use checkdigit_fuzz::optimize::search_primitives;
use checkdigit_fuzz::{FuzzScorer, ScoringConfig, Subject};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(version, about = "Score check-digit schemes against simulated typos")]
struct Args {
    /// Scheme to score; repeat for several, all schemes when omitted
    #[arg(long, short)]
    scheme: Vec<String>,

    /// TOML scoring configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed of every random stream
    #[arg(long)]
    seed: Option<u64>,

    /// Random payloads per battery
    #[arg(long)]
    battery_size: Option<usize>,

    /// Tweaks per payload
    #[arg(long)]
    attempts: Option<usize>,

    /// Symbols per random payload
    #[arg(long)]
    payload_length: Option<usize>,

    /// Worker threads
    #[arg(long)]
    threads: Option<usize>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Search every primitive alternative of the field-based schemes
    #[arg(long)]
    search: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn scoring_config(&self) -> anyhow::Result<ScoringConfig> {
        let mut config = match &self.config {
            Some(path) => ScoringConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ScoringConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(size) = self.battery_size {
            config = config.with_battery_size(size);
        }
        if let Some(attempts) = self.attempts {
            config = config.with_attempts(attempts);
        }
        if let Some(length) = self.payload_length {
            config = config.with_payload_length(length);
        }
        if let Some(threads) = self.threads {
            config = config.with_threads(threads);
        }
        Ok(config)
    }

    fn schemes(&self) -> Vec<String> {
        if self.scheme.is_empty() {
            catalog::names().map(String::from).collect()
        } else {
            self.scheme.clone()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    telemetry::setup_simple_tracing(telemetry::level_from_verbosity(args.verbose));

    let config = args.scoring_config()?;
    info!(?config, "scoring");
    let scorer = FuzzScorer::new(config)?;

    if args.search {
        return search(&scorer, &args);
    }

    let mut reports = Vec::new();
    for name in args.schemes() {
        let Some(entry) = catalog::find(&name) else {
            bail!("unknown scheme '{name}'");
        };
        let checker = entry.build()?;
        let report = scorer.score(&Subject::from_entry(entry, &*checker))?;
        if !args.json {
            println!("{report}");
        }
        reports.push(report);
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn search(scorer: &FuzzScorer, args: &Args) -> anyhow::Result<()> {
    let names: Vec<String> = if args.scheme.is_empty() {
        vec!["base32check1".into(), "base32check2".into()]
    } else {
        args.scheme.clone()
    };
    let mut outcomes = Vec::new();
    for name in names {
        let Some(config) = field_config(&name) else {
            bail!("scheme '{name}' has no field parameters to search");
        };
        let Some(outcome) = search_primitives(scorer, &config)? else {
            continue;
        };
        if !args.json {
            for candidate in &outcome.candidates {
                println!("{}\t{:?}\t{:.6}", outcome.label, candidate.field, candidate.detection_rate);
            }
            println!(
                "{}: best {:?} with {:.6}",
                outcome.label, outcome.best.field, outcome.best.detection_rate
            );
        }
        outcomes.push(outcome);
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    }
    Ok(())
}

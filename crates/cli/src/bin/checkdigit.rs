//! Compute or verify check characters for the payload read from stdin.

use checkdigit_algorithms::catalog;
use checkdigit_cli::helpers::{input, telemetry};
use checkdigit_cli::{error_exit_code, run_checker, CheckOutcome};
use clap::Parser;
use std::process;

#[derive(Parser)]
#[command(version, about = "Compute or verify check characters of stdin")]
struct Args {
    /// Scheme to use; see `--list`
    #[arg(long, short, default_value = "base32check1")]
    scheme: String,

    /// Treat stdin as payload plus check and verify it
    #[arg(long, short)]
    check: bool,

    /// Print the available schemes and exit
    #[arg(long)]
    list: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    telemetry::setup_simple_tracing(telemetry::level_from_verbosity(args.verbose));

    if args.list {
        for name in catalog::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let checker = catalog::build(&args.scheme)?;
    let payload = input::read_payload(std::io::stdin().lock())?;

    match run_checker(&*checker, &payload, args.check) {
        Ok(CheckOutcome::Computed(check)) => println!("{check}"),
        Ok(outcome) => {
            eprintln!(
                "{}",
                if outcome == CheckOutcome::Valid { "OK" } else { "FAILED" }
            );
            process::exit(outcome.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(error_exit_code(&e));
        }
    }
    Ok(())
}

//! List the primitive elements of GF(p) or primitive polynomials of GF(2^k).

use anyhow::{bail, Context};
use checkdigit_algorithms::field::{primitive_elements, primitive_polynomials};
use checkdigit_cli::format_polynomial;
use checkdigit_cli::helpers::telemetry;
use clap::Parser;

#[derive(Parser)]
#[command(version, about = "List generators of a finite field")]
struct Args {
    /// Field cardinality: a prime, or a power of two with --polynomials
    cardinal: u32,

    /// List primitive polynomials of GF(2^k) instead of elements of GF(p)
    #[arg(long)]
    polynomials: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    telemetry::setup_simple_tracing(telemetry::level_from_verbosity(args.verbose));

    if args.polynomials {
        if !args.cardinal.is_power_of_two() || args.cardinal < 2 {
            bail!("{} is not a power of two", args.cardinal);
        }
        let degree = args.cardinal.trailing_zeros();
        let polynomials = primitive_polynomials(degree)
            .with_context(|| format!("searching polynomials of degree {degree}"))?;
        for polynomial in polynomials {
            println!("{polynomial:#b}\t{}", format_polynomial(polynomial));
        }
    } else {
        let elements = primitive_elements(args.cardinal)
            .with_context(|| format!("searching generators of GF({})", args.cardinal))?;
        let line: Vec<String> = elements.iter().map(u32::to_string).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}

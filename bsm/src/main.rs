//! `bsm` - command-line front end for the Black-Scholes-Merton pricers.
//!
//! # Commands
//!
//! - `bsm price` - closed-form call value, `d1`, `d2`, and vega
//! - `bsm simulate` - Monte Carlo estimate and terminal-level summary
//! - `bsm validate` - Monte Carlo against closed form; non-zero exit on failure
//!
//! Parameter flags default to S=110, K=115, T=3, r=5%, σ=5%. Log output goes
//! to stderr and is controlled by `RUST_LOG` (or `-v`).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;

use config::CliConfig;

/// Black-Scholes-Merton European call valuation
#[derive(Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML file with `[pricer]` settings and an optional `[scenario]`
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Closed-form value, d1, d2, and vega
    Price {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Monte Carlo estimate of the call value
    Simulate {
        #[command(flatten)]
        params: ParamArgs,

        #[command(flatten)]
        mc: McArgs,
    },

    /// Compare the Monte Carlo estimate with the closed form
    Validate {
        #[command(flatten)]
        params: ParamArgs,

        #[command(flatten)]
        mc: McArgs,
    },
}

/// Option parameters; unset flags fall back to the config `[scenario]`,
/// then to the reference scenario.
#[derive(Args, Debug, Clone, Copy)]
struct ParamArgs {
    /// Spot price of the underlying
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    strike: Option<f64>,

    /// Time to maturity in years
    #[arg(long)]
    maturity: Option<f64>,

    /// Continuously-compounded risk-free rate
    #[arg(long)]
    rate: Option<f64>,

    /// Annualised volatility
    #[arg(long)]
    volatility: Option<f64>,
}

#[derive(Args, Debug, Clone, Copy)]
struct McArgs {
    /// Number of simulated paths (pairs when antithetic)
    #[arg(short = 'n', long, default_value_t = 100_000)]
    paths: usize,

    /// Generator seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Random number generator
    #[arg(short, long, value_enum, default_value_t = Generator::MersenneTwister)]
    generator: Generator,

    /// Use antithetic pairs (z, -z)
    #[arg(long)]
    antithetic: bool,

    /// Split the paths across the rayon thread pool
    #[arg(long)]
    parallel: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Generator {
    /// MT19937-64 with inverse-CDF normals
    MersenneTwister,
    /// `rand`'s StdRng with `rand_distr::StandardNormal`
    Std,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Price { params } => {
            let params = params.resolve(config.scenario.as_ref())?;
            commands::price::run(&params, config.pricer)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Simulate { params, mc } => {
            let params = params.resolve(config.scenario.as_ref())?;
            commands::simulate::run(&params, mc.apply(config.pricer), &mc)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { params, mc } => {
            let params = params.resolve(config.scenario.as_ref())?;
            let passed = commands::validate::run(&params, mc.apply(config.pricer), &mc)?;
            Ok(if passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use sssp_cost::prelude::*;
use thiserror::Error;

mod chart;
mod output;
mod runner;
mod table;

use chart::{ChartConfig, ChartError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.quiet {
        LevelFilter::Error
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let output_dir = args
        .output_dir
        .unwrap_or_else(|| PathBuf::from(args.set.output_dir()));

    let stdout = std::io::stdout();
    runner::run(&mut stdout.lock(), args.set, &output_dir, &args.chart)?;

    Ok(())
}

#[derive(Error, Debug)]
pub(crate) enum AppError {
    #[error("error while writing report")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("error while evaluating scenario")]
    Model {
        #[from]
        source: sssp_cost::Error,
    },
    #[error("error while rendering chart")]
    Chart {
        #[from]
        source: ChartError,
    },
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Tabulates and charts theoretical SSSP algorithm costs",
    propagate_version = true
)]
struct Args {
    /// The group of scenarios to evaluate.
    #[arg(value_enum)]
    set: ScenarioSet,

    /// Directory for the rendered charts [default: figures | figures_v2]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    #[command(flatten)]
    chart: ChartConfig,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

mod cli;
mod config;
mod error;
mod logging;
mod output;
mod progress;

use crate::cli::{Cli, Commands, RunArgs};
use crate::error::{CliError, Result};
use clap::Parser;
use std::io;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_ref())?;

    info!("ising v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!("Setting Rayon global thread pool to {} threads.", num_threads);
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| CliError::Config(format!("failed to build thread pool: {e}")))?;
    }

    let result = match cli.command {
        Commands::Run(args) => run_command(&args, cli.quiet),
    };

    if let Err(e) = &result {
        error!("Command failed: {}", e);
    }
    result
}

fn run_command(args: &RunArgs, quiet: bool) -> Result<()> {
    let config = config::build_config(args)?;
    info!(
        "Simulating a {n}x{n} lattice at {} temperatures in [{}, {}].",
        config.n_temps,
        config.t_start,
        config.t_end,
        n = config.lattice_size
    );

    let pb = progress::sweep_bar(config.total_sweeps() as u64, args.no_progress || quiet);
    let results = ising_sim::run_with_progress(&config, &|| pb.inc(1))?;
    pb.finish_and_clear();

    match &args.output {
        Some(path) => {
            output::write_csv_file(path, &results)?;
            info!("Wrote {} rows to '{}'.", results.len(), path.display());
        }
        None => output::write_table(io::stdout().lock(), &results)?,
    }

    Ok(())
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Metropolis Monte Carlo simulation of the 2D Ising model over a temperature sweep."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for temperature points.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sweep a temperature range and report per-temperature observables.
    Run(RunArgs),
}

/// Arguments for the `run` subcommand.
///
/// Values given on the command line override the config file, which in turn
/// overrides the built-in defaults.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write results as CSV to this path instead of printing a table.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Linear lattice size N (the lattice is N x N).
    #[arg(short = 'n', long, value_name = "INT")]
    pub size: Option<usize>,

    /// Number of temperature points.
    #[arg(long, value_name = "INT")]
    pub n_temps: Option<usize>,

    /// Equilibration sweeps per temperature point.
    #[arg(long, value_name = "INT")]
    pub eq_steps: Option<usize>,

    /// Measurement sweeps per temperature point.
    #[arg(long, value_name = "INT")]
    pub mc_steps: Option<usize>,

    /// First temperature of the schedule.
    #[arg(long, value_name = "FLOAT")]
    pub t_start: Option<f64>,

    /// Last temperature of the schedule.
    #[arg(long, value_name = "FLOAT")]
    pub t_end: Option<f64>,

    /// Base random seed; temperature point t uses seed + t.
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Process temperature points one at a time on the main thread.
    #[arg(long)]
    pub sequential: bool,

    /// Record running averages during equilibration (logged at TRACE level).
    #[arg(long)]
    pub equilibration_diagnostic: bool,

    /// Estimate the energy autocorrelation time up to this lag.
    #[arg(long, value_name = "INT")]
    pub autocorrelation_max_lag: Option<usize>,

    /// Hide the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_flags_are_parsed() {
        let cli = Cli::parse_from([
            "ising", "-vv", "run", "-n", "8", "--n-temps", "5", "--t-start", "1.0", "--t-end",
            "3.0", "--sequential",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Run(args) = cli.command;
        assert_eq!(args.size, Some(8));
        assert_eq!(args.n_temps, Some(5));
        assert_eq!(args.t_start, Some(1.0));
        assert_eq!(args.t_end, Some(3.0));
        assert!(args.sequential);
        assert!(args.eq_steps.is_none());
    }
}

use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use ising_sim::SimConfig;
use std::fs;
use std::path::Path;
use tracing::debug;
use validator::Validate;

/// Read a [`SimConfig`] from a TOML file. Missing keys take their defaults.
pub fn load_config_file(path: &Path) -> Result<SimConfig> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| CliError::ConfigParsing {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the effective configuration: defaults, then the config file, then
/// command-line overrides. The result is validated.
pub fn build_config(args: &RunArgs) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from '{}'.", path.display());
            load_config_file(path)?
        }
        None => SimConfig::default(),
    };

    if let Some(size) = args.size {
        config.lattice_size = size;
    }
    if let Some(n_temps) = args.n_temps {
        config.n_temps = n_temps;
    }
    if let Some(eq_steps) = args.eq_steps {
        config.eq_steps = eq_steps;
    }
    if let Some(mc_steps) = args.mc_steps {
        config.mc_steps = mc_steps;
    }
    if let Some(t_start) = args.t_start {
        config.t_start = t_start;
    }
    if let Some(t_end) = args.t_end {
        config.t_end = t_end;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.sequential {
        config.sequential = true;
    }
    if args.equilibration_diagnostic {
        config.equilibration_diagnostic = true;
    }
    if let Some(lag) = args.autocorrelation_max_lag {
        config.autocorrelation_max_lag = Some(lag);
    }

    config
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

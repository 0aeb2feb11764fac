use std::path::PathBuf;

use clap::Parser;

use solar_plant_sim::config::{ConfigError, ScenarioConfig};

/// Solar plant output over a sweeping sun angle.
///
/// If no --scenario or --preset is given, the default preset is used.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Load scenario from TOML config file
    #[arg(long, conflicts_with = "preset")]
    pub scenario: Option<PathBuf>,
    /// Use a built-in preset (default, uniform, fan)
    #[arg(long)]
    pub preset: Option<String>,
    /// Export sweep samples to CSV
    #[arg(long)]
    pub csv_out: Option<PathBuf>,
    /// Search for a layout with a flatter output profile
    #[arg(long)]
    pub optimize: bool,
    /// Override the number of search iterations
    #[arg(long, requires = "optimize")]
    pub iterations: Option<usize>,
    /// Override the search seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Only print the profile reports
    #[arg(long, short)]
    pub quiet: bool,
    /// Log sweep and search progress to stderr (overridden by RUST_LOG)
    #[arg(long, short)]
    pub verbose: bool,
    /// Open the live sweep chart (requires the `tui` feature)
    #[arg(long)]
    pub tui: bool,
}

impl Args {
    /// Name of the preset to use when no scenario file is given.
    pub fn preset_name(&self) -> &str {
        self.preset.as_deref().unwrap_or("default")
    }

    /// Label shown for the loaded scenario: the file stem of `--scenario`,
    /// otherwise the preset name.
    pub fn scenario_label(&self) -> String {
        match &self.scenario {
            Some(path) => path
                .file_stem()
                .unwrap_or(path.as_os_str())
                .to_string_lossy()
                .into_owned(),
            None => self.preset_name().to_string(),
        }
    }

    /// Default log filter when RUST_LOG is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Loads the selected scenario and applies command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file or preset cannot be loaded.
    pub fn load_scenario(&self) -> Result<ScenarioConfig, ConfigError> {
        let mut scenario = match &self.scenario {
            Some(path) => ScenarioConfig::from_toml_file(path)?,
            None => ScenarioConfig::from_preset(self.preset_name())?,
        };
        if let Some(n) = self.iterations {
            scenario.search.iterations = n;
        }
        if let Some(seed) = self.seed {
            scenario.search.seed = seed;
        }
        Ok(scenario)
    }
}

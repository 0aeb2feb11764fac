//! TOML-based scenario configuration and preset definitions.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{PLANT_SLOTS, Panel, PanelSetup, Plant};
use crate::report::Reporter;
use crate::sim::optimize::SearchOptions;
use crate::sim::sweep::{AngleSweep, MAX_SWEEP_SAMPLES};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the `default` preset. Load from TOML
/// with [`ScenarioConfig::from_toml_file`] or pick a built-in preset with
/// [`ScenarioConfig::from_preset`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Light source sweep.
    #[serde(default)]
    pub sweep: SweepConfig,
    /// Plant layout.
    #[serde(default)]
    pub plant: PlantConfig,
    /// Optional single setup sampled next to the plant.
    #[serde(default)]
    pub reference: Option<SetupConfig>,
    /// Layout search parameters.
    #[serde(default)]
    pub search: SearchConfig,
}

/// Light source sweep range.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// First source angle (radians, inclusive).
    pub start_rad: f64,
    /// Source angle at which the sweep stops (radians, exclusive).
    pub stop_rad: f64,
    /// Increment per step (radians, must be > 0).
    pub step_rad: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_rad: -FRAC_PI_2,
            stop_rad: FRAC_PI_2,
            step_rad: PI / 16.0,
        }
    }
}

/// One mounted panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Mount angle (radians).
    pub mount_angle_rad: f64,
    /// Panel elements along the width.
    pub width_units: i32,
    /// Panel elements along the height.
    pub height_units: i32,
}

impl Default for SetupConfig {
    fn default() -> Self {
        let panel = Panel::default();
        Self {
            mount_angle_rad: 0.0,
            width_units: panel.width_units(),
            height_units: panel.height_units(),
        }
    }
}

impl SetupConfig {
    fn angled(mount_angle_rad: f64) -> Self {
        Self {
            mount_angle_rad,
            ..Self::default()
        }
    }

    /// Builds the configured setup.
    pub fn build(&self) -> PanelSetup {
        PanelSetup::new(
            self.mount_angle_rad,
            Panel::new(self.width_units, self.height_units),
        )
    }
}

/// In-place panel resize applied after the setups are placed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResizeConfig {
    /// Slot index (0-9).
    pub slot: usize,
    /// New element count along the width.
    pub width_units: i32,
    /// New element count along the height.
    pub height_units: i32,
}

/// Plant layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlantConfig {
    /// Either empty (every slot default) or exactly ten setups.
    pub setups: Vec<SetupConfig>,
    /// Resizes applied in order after placing the setups.
    pub resizes: Vec<ResizeConfig>,
}

/// Layout search parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Number of random layouts to evaluate.
    pub iterations: usize,
    /// Random seed.
    pub seed: u64,
    /// Minimum mean output as a fraction of the configured plant's (0.0-1.0).
    pub min_mean_fraction: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let opts = SearchOptions::default();
        Self {
            iterations: opts.iterations,
            seed: opts.seed,
            min_mean_fraction: opts.min_mean_fraction,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"sweep.step_rad"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ScenarioConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["default", "uniform", "fan"];

    /// Ten default setups swept from -π/2 to π/2.
    pub fn default_preset() -> Self {
        Self::default()
    }

    /// Every slot holds the same small panel tilted to -π/2, with that
    /// setup also sampled as the reference.
    pub fn uniform() -> Self {
        let test_setup = SetupConfig {
            mount_angle_rad: -FRAC_PI_2,
            width_units: 2,
            height_units: 3,
        };
        Self {
            plant: PlantConfig {
                setups: vec![test_setup.clone(); PLANT_SLOTS],
                resizes: Vec::new(),
            },
            reference: Some(test_setup),
            ..Self::default()
        }
    }

    /// Panels fanned out towards the morning, zenith and evening sun.
    ///
    /// Slots 0-3 face π/4 with 10x10 panels, 4-5 face π/2 and 6-9 face
    /// -π/4. The sweep runs one extra step past π/2.
    pub fn fan() -> Self {
        let mut setups = Vec::with_capacity(PLANT_SLOTS);
        setups.extend(std::iter::repeat_n(SetupConfig::angled(FRAC_PI_4), 4));
        setups.extend(std::iter::repeat_n(SetupConfig::angled(FRAC_PI_2), 2));
        setups.extend(std::iter::repeat_n(SetupConfig::angled(-FRAC_PI_4), 4));

        let resizes = (0..4)
            .map(|slot| ResizeConfig {
                slot,
                width_units: 10,
                height_units: 10,
            })
            .collect();

        Self {
            sweep: SweepConfig {
                stop_rad: FRAC_PI_2 + PI / 16.0,
                ..SweepConfig::default()
            },
            plant: PlantConfig { setups, resizes },
            ..Self::default()
        }
    }

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "default" => Ok(Self::default_preset()),
            "uniform" => Ok(Self::uniform()),
            "fan" => Ok(Self::fan()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("scenario", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let sw = &self.sweep;
        for (field, v) in [
            ("sweep.start_rad", sw.start_rad),
            ("sweep.stop_rad", sw.stop_rad),
            ("sweep.step_rad", sw.step_rad),
        ] {
            if !v.is_finite() {
                errors.push(ConfigError::new(field, "must be finite"));
            }
        }
        if !(sw.step_rad > 0.0) {
            errors.push(ConfigError::new("sweep.step_rad", "must be > 0"));
        }
        if !(sw.start_rad < sw.stop_rad) {
            errors.push(ConfigError::new(
                "sweep.start_rad",
                "must be < sweep.stop_rad",
            ));
        }
        if sw.step_rad > 0.0 && sw.start_rad + sw.step_rad == sw.start_rad {
            errors.push(ConfigError::new(
                "sweep.step_rad",
                "too small to move the angle away from sweep.start_rad",
            ));
        } else if sw.step_rad > 0.0
            && (sw.stop_rad - sw.start_rad) / sw.step_rad > MAX_SWEEP_SAMPLES as f64
        {
            errors.push(ConfigError::new(
                "sweep.step_rad",
                format!("sweep would exceed {MAX_SWEEP_SAMPLES} samples"),
            ));
        }

        let p = &self.plant;
        if !p.setups.is_empty() && p.setups.len() != PLANT_SLOTS {
            errors.push(ConfigError::new(
                "plant.setups",
                format!(
                    "must list exactly {PLANT_SLOTS} setups or none, got {}",
                    p.setups.len()
                ),
            ));
        }
        for (i, s) in p.setups.iter().enumerate() {
            if !s.mount_angle_rad.is_finite() {
                errors.push(ConfigError::new(
                    format!("plant.setups[{i}].mount_angle_rad"),
                    "must be finite",
                ));
            }
        }
        for (i, r) in p.resizes.iter().enumerate() {
            if r.slot >= PLANT_SLOTS {
                errors.push(ConfigError::new(
                    format!("plant.resizes[{i}].slot"),
                    format!("must be < {PLANT_SLOTS}"),
                ));
            }
        }

        if let Some(r) = &self.reference {
            if !r.mount_angle_rad.is_finite() {
                errors.push(ConfigError::new(
                    "reference.mount_angle_rad",
                    "must be finite",
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.search.min_mean_fraction) {
            errors.push(ConfigError::new(
                "search.min_mean_fraction",
                "must be in [0.0, 1.0]",
            ));
        }

        errors
    }

    /// Builds the configured sweep.
    ///
    /// # Panics
    ///
    /// Panics if the sweep section fails [`ScenarioConfig::validate`].
    pub fn build_sweep(&self) -> AngleSweep {
        AngleSweep::new(
            self.sweep.start_rad,
            self.sweep.stop_rad,
            self.sweep.step_rad,
        )
    }

    /// Builds the configured plant, reporting every resize.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the setups list has the wrong length or a
    /// resize addresses a slot outside the plant.
    pub fn build_plant(&self, reporter: &mut dyn Reporter) -> Result<Plant, ConfigError> {
        let mut plant = if self.plant.setups.is_empty() {
            Plant::new()
        } else {
            let setups: [PanelSetup; PLANT_SLOTS] = self
                .plant
                .setups
                .iter()
                .map(SetupConfig::build)
                .collect::<Vec<_>>()
                .try_into()
                .map_err(|v: Vec<PanelSetup>| {
                    ConfigError::new(
                        "plant.setups",
                        format!("must list exactly {PLANT_SLOTS} setups, got {}", v.len()),
                    )
                })?;
            Plant::from_setups(setups)
        };

        for (i, r) in self.plant.resizes.iter().enumerate() {
            plant
                .resize_panel_at(r.slot, r.width_units, r.height_units, reporter)
                .map_err(|e| ConfigError::new(format!("plant.resizes[{i}].slot"), e.to_string()))?;
        }
        Ok(plant)
    }

    /// Builds the reference setup, if configured.
    pub fn build_reference(&self) -> Option<PanelSetup> {
        self.reference.as_ref().map(SetupConfig::build)
    }

    /// Layout search options.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            iterations: self.search.iterations,
            seed: self.search.seed,
            min_mean_fraction: self.search.min_mean_fraction,
        }
    }
}

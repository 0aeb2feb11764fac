//! Sweep engine that drives the light source across a plant.

use crate::model::{LightSource, PanelSetup, Plant, illumination_angle};

use super::sweep::AngleSweep;
use super::types::SweepSample;

/// Owns a plant, a light source and the sweep that moves it.
///
/// The optional reference setup is evaluated against the same source
/// position as the plant, so a single panel can be compared with the
/// aggregate.
#[derive(Debug, Clone)]
pub struct Engine {
    plant: Plant,
    sweep: AngleSweep,
    source: LightSource,
    reference: Option<PanelSetup>,
    next_step: usize,
}

impl Engine {
    /// Creates a new engine. The source is placed by the first step.
    pub fn new(plant: Plant, sweep: AngleSweep) -> Self {
        Self {
            plant,
            sweep,
            source: LightSource::new(),
            reference: None,
            next_step: 0,
        }
    }

    /// Adds a reference setup sampled alongside the plant.
    pub fn with_reference(mut self, reference: PanelSetup) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Executes one sweep step.
    ///
    /// # Returns
    ///
    /// The sample at the new source position, or `None` once the sweep is
    /// finished.
    pub fn step(&mut self) -> Option<SweepSample> {
        let angle = self.sweep.tick(&mut self.source)?;

        let plant_power_w = self.plant.current_output(&self.source);
        let max = self.plant.max_output();
        let efficiency_pct = if max != 0.0 {
            100.0 * plant_power_w / max
        } else {
            0.0
        };
        let reference_power_w = self
            .reference
            .map(|r| r.current_power(illumination_angle(&r, &self.source)));

        let sample = SweepSample {
            step: self.next_step,
            source_angle_rad: angle,
            plant_power_w,
            reference_power_w,
            efficiency_pct,
        };
        self.next_step += 1;
        log::debug!("{sample}");
        Some(sample)
    }

    /// Executes all remaining steps and returns their samples.
    pub fn run(&mut self) -> Vec<SweepSample> {
        let mut samples = Vec::new();
        while let Some(s) = self.step() {
            samples.push(s);
        }
        log::debug!("sweep finished after {} samples", samples.len());
        samples
    }

    /// Rewinds the sweep to its start.
    pub fn reset(&mut self) {
        self.sweep.reset();
        self.next_step = 0;
    }

    /// Returns `true` once every step has been executed.
    pub fn is_finished(&self) -> bool {
        self.sweep.is_finished()
    }

    pub fn plant(&self) -> &Plant {
        &self.plant
    }

    pub fn sweep(&self) -> &AngleSweep {
        &self.sweep
    }

    pub fn source(&self) -> &LightSource {
        &self.source
    }

    pub fn reference(&self) -> Option<&PanelSetup> {
        self.reference.as_ref()
    }
}

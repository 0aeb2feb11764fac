//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::f64::consts::FRAC_PI_2;

use solar_plant_sim::model::{PLANT_SLOTS, Panel, PanelSetup, Plant};
use solar_plant_sim::sim::engine::Engine;
use solar_plant_sim::sim::sweep::AngleSweep;
use solar_plant_sim::sim::types::SweepSample;

/// Tolerance for floating-point comparisons.
pub const EPS: f64 = 1e-9;

/// Sweep over `[-1.5, 1.5)` in exactly representable steps of 0.125 rad.
pub fn fine_sweep() -> AngleSweep {
    AngleSweep::new(-1.5, 1.5, 0.125)
}

/// The demo test setup: tilted to -π/2 with a 2x3 panel (90 W rated).
pub fn test_setup() -> PanelSetup {
    PanelSetup::new(-FRAC_PI_2, Panel::new(2, 3))
}

/// Plant with every slot holding [`test_setup`].
pub fn uniform_plant() -> Plant {
    Plant::from_setups([test_setup(); PLANT_SLOTS])
}

/// Runs `plant` over `sweep` and returns the samples.
pub fn run(plant: &Plant, sweep: AngleSweep) -> Vec<SweepSample> {
    Engine::new(plant.clone(), sweep).run()
}

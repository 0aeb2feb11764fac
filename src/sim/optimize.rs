//! Random search for plant layouts with a flat output profile.

use std::f64::consts::FRAC_PI_2;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::model::{PLANT_SLOTS, Plant};

use super::engine::Engine;
use super::kpi::ProfileReport;
use super::sweep::AngleSweep;

/// Parameters of the layout search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Number of random layouts to evaluate.
    pub iterations: usize,
    /// Random seed for reproducible searches.
    pub seed: u64,
    /// Minimum mean output of a candidate, as a fraction of the base
    /// plant's mean output (0.0 to 1.0).
    pub min_mean_fraction: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            iterations: 2000,
            seed: 42,
            min_mean_fraction: 0.5,
        }
    }
}

/// Result of a layout search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best plant found; the base plant if nothing beat it.
    pub plant: Plant,
    /// Profile of the best plant.
    pub report: ProfileReport,
    /// Profile of the base plant.
    pub baseline: ProfileReport,
    /// Number of candidates that replaced the running best.
    pub improvements: usize,
}

/// Profile of `plant` over a full run of `sweep`.
pub fn evaluate(plant: &Plant, sweep: &AngleSweep) -> ProfileReport {
    let mut sweep = sweep.clone();
    sweep.reset();
    let samples = Engine::new(plant.clone(), sweep).run();
    ProfileReport::from_samples(&samples)
}

/// Searches mount angles in `[-π/2, π/2]` that flatten the output profile.
///
/// Panels are taken from `base`; only the mount angles change. A candidate
/// is accepted when its mean output stays above the configured floor and
/// its coefficient of variation beats the best so far. The search is
/// deterministic for a given seed.
pub fn optimize_layout(base: &Plant, sweep: &AngleSweep, opts: &SearchOptions) -> SearchOutcome {
    let baseline = evaluate(base, sweep);
    let floor = baseline.mean_power_w * opts.min_mean_fraction.clamp(0.0, 1.0);

    let mut rng = StdRng::seed_from_u64(opts.seed);
    let mut best_plant = base.clone();
    let mut best = baseline.clone();
    let mut improvements = 0;

    for i in 0..opts.iterations {
        let angles: [f64; PLANT_SLOTS] =
            std::array::from_fn(|_| rng.random_range(-FRAC_PI_2..=FRAC_PI_2));
        let candidate = base.with_mount_angles(angles);
        let report = evaluate(&candidate, sweep);

        if report.mean_power_w > 0.0
            && report.mean_power_w >= floor
            && report.flatness_cv < best.flatness_cv
        {
            log::debug!(
                "iteration {i}: cv {:.4} -> {:.4}",
                best.flatness_cv,
                report.flatness_cv
            );
            best_plant = candidate;
            best = report;
            improvements += 1;
        }
    }

    SearchOutcome {
        plant: best_plant,
        report: best,
        baseline,
        improvements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PanelSetup;

    fn sweep() -> AngleSweep {
        AngleSweep::new(-1.5, 1.5, 0.125)
    }

    fn uniform_plant() -> Plant {
        Plant::from_setups([PanelSetup::with_angle(-FRAC_PI_2); PLANT_SLOTS])
    }

    #[test]
    fn zero_iterations_returns_base() {
        let opts = SearchOptions {
            iterations: 0,
            ..SearchOptions::default()
        };
        let out = optimize_layout(&uniform_plant(), &sweep(), &opts);
        assert_eq!(out.plant, uniform_plant());
        assert_eq!(out.report, out.baseline);
        assert_eq!(out.improvements, 0);
    }

    #[test]
    fn search_never_gets_worse() {
        let opts = SearchOptions {
            iterations: 200,
            ..SearchOptions::default()
        };
        let out = optimize_layout(&uniform_plant(), &sweep(), &opts);
        assert!(out.report.flatness_cv <= out.baseline.flatness_cv);
        assert!(out.report.mean_power_w >= 0.5 * out.baseline.mean_power_w);
    }

    #[test]
    fn search_improves_a_uniform_layout() {
        let opts = SearchOptions {
            iterations: 300,
            seed: 7,
            min_mean_fraction: 0.3,
        };
        let out = optimize_layout(&uniform_plant(), &sweep(), &opts);
        assert!(out.improvements > 0);
        assert!(out.report.flatness_cv < out.baseline.flatness_cv);
    }

    #[test]
    fn search_is_deterministic_for_seed() {
        let opts = SearchOptions {
            iterations: 100,
            ..SearchOptions::default()
        };
        let a = optimize_layout(&uniform_plant(), &sweep(), &opts);
        let b = optimize_layout(&uniform_plant(), &sweep(), &opts);
        assert_eq!(a.plant, b.plant);
        assert_eq!(a.report, b.report);
    }

    #[test]
    fn search_keeps_panels() {
        let mut base = uniform_plant();
        base.set_panel_setup(PanelSetup::new(0.0, crate::model::Panel::new(2, 3)), 4)
            .expect("slot 4");
        let opts = SearchOptions {
            iterations: 50,
            ..SearchOptions::default()
        };
        let out = optimize_layout(&base, &sweep(), &opts);
        for (a, b) in out.plant.setups().iter().zip(base.setups()) {
            assert_eq!(a.panel(), b.panel());
        }
    }

    #[test]
    fn evaluate_ignores_sweep_progress() {
        let mut s = sweep();
        let full = evaluate(&uniform_plant(), &s);
        let mut sun = crate::model::LightSource::new();
        s.tick(&mut sun);
        s.tick(&mut sun);
        assert_eq!(evaluate(&uniform_plant(), &s), full);
    }
}

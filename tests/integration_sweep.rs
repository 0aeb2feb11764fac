//! Integration tests for plant sweeps.

mod common;

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use common::EPS;
use solar_plant_sim::config::ScenarioConfig;
use solar_plant_sim::model::{
    LightSource, PLANT_SLOTS, PanelSetup, Plant, PlantError, illumination_angle,
};
use solar_plant_sim::report::{NullReporter, RecordingReporter, ReportEvent};
use solar_plant_sim::sim::engine::Engine;
use solar_plant_sim::sim::kpi::ProfileReport;
use solar_plant_sim::sim::sweep::AngleSweep;

#[test]
fn default_plant_at_zero_is_ten_times_one_setup() {
    let plant = Plant::new();
    let sun = LightSource::new();
    let one = PanelSetup::default();
    let single = one.current_power(illumination_angle(&one, &sun));
    assert!((plant.current_output(&sun) - 10.0 * single).abs() < EPS);
}

#[test]
fn uniform_plant_traces_a_single_cosine_peak() {
    let samples = common::run(&common::uniform_plant(), common::fine_sweep());
    assert_eq!(samples.len(), 24);

    let rated = 10.0 * 90.0;
    for s in &samples {
        let expected = rated * s.source_angle_rad.cos();
        assert!(
            (s.plant_power_w - expected).abs() < 1e-6,
            "power mismatch at {}: {} vs {}",
            s.source_angle_rad,
            s.plant_power_w,
            expected
        );
    }

    let report = ProfileReport::from_samples(&samples);
    assert_eq!(report.peak_angle_rad, 0.0);
    assert!((report.peak_power_w - rated).abs() < EPS);

    // rises strictly up to the peak, falls strictly after it
    let peak_idx = samples
        .iter()
        .position(|s| s.source_angle_rad == 0.0)
        .expect("zero angle sampled");
    for w in samples[..=peak_idx].windows(2) {
        assert!(w[1].plant_power_w > w[0].plant_power_w);
    }
    for w in samples[peak_idx..].windows(2) {
        assert!(w[1].plant_power_w < w[0].plant_power_w);
    }
}

#[test]
fn peak_follows_mount_angle() {
    // non-negative mounts peak where the source sits at mount - π/2
    let plant = Plant::from_setups([PanelSetup::with_angle(1.0); PLANT_SLOTS]);
    let samples = common::run(&plant, common::fine_sweep());
    let report = ProfileReport::from_samples(&samples);
    assert!((report.peak_angle_rad - (1.0 - FRAC_PI_2)).abs() <= 0.0625 + EPS);
}

#[test]
fn reference_setup_matches_single_plant_slot() {
    let plant = common::uniform_plant();
    let mut engine = Engine::new(plant, common::fine_sweep()).with_reference(common::test_setup());
    for s in engine.run() {
        let reference = s.reference_power_w.expect("reference sampled");
        assert!((s.plant_power_w - 10.0 * reference).abs() < 1e-6);
    }
}

#[test]
fn fan_layout_is_flatter_than_uniform() {
    let fan = ScenarioConfig::fan();
    let fan_plant = fan.build_plant(&mut NullReporter).expect("fan plant");
    let fan_report = ProfileReport::from_samples(&common::run(&fan_plant, fan.build_sweep()));

    let uniform = ScenarioConfig::uniform();
    let uniform_plant = uniform.build_plant(&mut NullReporter).expect("uniform plant");
    let uniform_report =
        ProfileReport::from_samples(&common::run(&uniform_plant, fan.build_sweep()));

    assert!(fan_report.flatness_cv < uniform_report.flatness_cv);
}

#[test]
fn set_slot_then_read_back_and_reject_out_of_range() {
    let mut plant = Plant::new();
    let setup = PanelSetup::with_angle(-FRAC_PI_4);
    plant.set_panel_setup(setup, 9).expect("slot 9");
    assert_eq!(*plant.setup(9).expect("slot 9"), setup);

    let err = plant.set_panel_setup(setup, PLANT_SLOTS);
    assert_eq!(
        err,
        Err(PlantError::SlotOutOfRange {
            index: PLANT_SLOTS,
            len: PLANT_SLOTS
        })
    );
    assert!(
        plant
            .resize_panel_at(usize::MAX, 1, 1, &mut NullReporter)
            .is_err()
    );
}

#[test]
fn resize_then_report_shows_new_area() {
    let mut plant = Plant::new();
    let mut rec = RecordingReporter::new();
    plant.resize_panel_at(0, 10, 10, &mut rec).expect("slot 0");
    plant.report(&mut rec);

    assert_eq!(rec.events.len(), 1 + PLANT_SLOTS);
    assert_eq!(
        rec.events[1],
        ReportEvent::SlotSummary {
            index: 0,
            mount_angle_rad: 0.0,
            area_cm2: 6000.0
        }
    );
}

#[test]
fn sweep_is_restartable_from_any_angle() {
    let mut sweep = AngleSweep::new(-0.5, 0.5, 0.25);
    let mut sun = LightSource::at(10.0);
    let mut first = Vec::new();
    sweep.run(&mut sun, |a| first.push(a));

    sun.set_angle(-3.0);
    sweep.reset();
    let mut second = Vec::new();
    sweep.run(&mut sun, |a| second.push(a));
    assert_eq!(first, second);
}

#[test]
fn determinism_two_identical_runs_produce_identical_results() {
    let cfg = ScenarioConfig::fan();
    let plant = cfg.build_plant(&mut NullReporter).expect("fan plant");
    let a = common::run(&plant, cfg.build_sweep());
    let b = common::run(&plant, cfg.build_sweep());
    assert_eq!(a, b);
}

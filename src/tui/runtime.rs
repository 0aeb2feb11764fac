//! Sweep runner and TUI application state.

use std::collections::VecDeque;
use std::time::Instant;

use crate::config::ScenarioConfig;
use crate::report::NullReporter;
use crate::sim::engine::Engine;
use crate::sim::types::SweepSample;

/// Maximum number of history entries kept for the rolling chart.
const MAX_HISTORY: usize = 200;

/// Tick interval options in milliseconds (slowest → fastest).
const SPEED_LEVELS_MS: [u64; 6] = [1000, 500, 250, 100, 50, 20];

/// Default speed index (250 ms).
const DEFAULT_SPEED_IDX: usize = 2;

/// Builds the sweep engine for a validated scenario.
///
/// Falls back to the default scenario if the plant cannot be built.
fn engine_for(scenario: &ScenarioConfig) -> Engine {
    let plant = scenario
        .build_plant(&mut NullReporter)
        .or_else(|_| ScenarioConfig::default().build_plant(&mut NullReporter))
        .unwrap_or_default();
    let engine = Engine::new(plant, scenario.build_sweep());
    match scenario.build_reference() {
        Some(r) => engine.with_reference(r),
        None => engine,
    }
}

/// TUI application state.
pub struct App {
    /// Sweep engine for the active scenario.
    engine: Engine,
    /// Rolling history of samples for the chart.
    pub history: VecDeque<SweepSample>,
    /// Total samples in the sweep.
    pub total_steps: usize,
    /// Whether the sweep is paused.
    pub paused: bool,
    /// Current index into `SPEED_LEVELS_MS`.
    pub speed_idx: usize,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// When the last sweep tick was executed.
    pub last_tick: Instant,
    /// Name of the active preset.
    pub preset_name: String,
}

impl App {
    /// Creates a new app from an already loaded scenario.
    pub fn new(scenario: &ScenarioConfig, name: &str) -> Self {
        let engine = engine_for(scenario);
        let total_steps = engine.sweep().len();
        Self {
            engine,
            history: VecDeque::with_capacity(MAX_HISTORY),
            total_steps,
            paused: false,
            speed_idx: DEFAULT_SPEED_IDX,
            quit: false,
            last_tick: Instant::now(),
            preset_name: name.to_string(),
        }
    }

    /// Creates a new app from a preset name, falling back to the default preset.
    pub fn from_preset(preset: &str) -> Self {
        let scenario = ScenarioConfig::from_preset(preset).unwrap_or_default();
        Self::new(&scenario, preset)
    }

    /// Advances the sweep by one step if not finished.
    pub fn tick(&mut self) {
        let Some(sample) = self.engine.step() else {
            return;
        };
        if self.history.len() >= MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(sample);
    }

    /// Toggles pause/resume.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Increases sweep speed (shorter tick interval).
    pub fn speed_up(&mut self) {
        if self.speed_idx + 1 < SPEED_LEVELS_MS.len() {
            self.speed_idx += 1;
        }
    }

    /// Decreases sweep speed (longer tick interval).
    pub fn speed_down(&mut self) {
        if self.speed_idx > 0 {
            self.speed_idx -= 1;
        }
    }

    /// Returns the current tick interval in milliseconds.
    pub fn tick_interval_ms(&self) -> u64 {
        SPEED_LEVELS_MS[self.speed_idx]
    }

    /// Switches to a different preset, resetting the sweep.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(scenario) = ScenarioConfig::from_preset(name) else {
            return;
        };
        self.engine = engine_for(&scenario);
        self.total_steps = self.engine.sweep().len();
        self.history.clear();
        self.paused = false;
        self.preset_name = name.to_string();
    }

    /// Restarts the sweep from its first angle.
    pub fn restart(&mut self) {
        self.engine.reset();
        self.history.clear();
        self.paused = false;
    }

    /// Number of samples taken so far.
    pub fn steps_done(&self) -> usize {
        self.history.back().map_or(0, |s| s.step + 1)
    }

    /// Returns `true` when the sweep has finished.
    pub fn is_finished(&self) -> bool {
        self.engine.is_finished() || self.steps_done() >= self.total_steps
    }

    /// Returns the most recent sample, if any.
    pub fn last_sample(&self) -> Option<&SweepSample> {
        self.history.back()
    }

    /// Rated output of the active plant (W).
    pub fn max_output_w(&self) -> f64 {
        self.engine.plant().max_output()
    }

    /// Sweep range as `[start, stop]` (radians).
    pub fn angle_bounds(&self) -> [f64; 2] {
        let sweep = self.engine.sweep();
        [sweep.start(), sweep.stop()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_creates_and_ticks() {
        let mut app = App::from_preset("default");
        assert_eq!(app.steps_done(), 0);
        assert!(!app.is_finished());

        app.tick();
        assert_eq!(app.steps_done(), 1);
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn app_finishes_after_total_steps() {
        let mut app = App::from_preset("fan");
        for _ in 0..app.total_steps {
            app.tick();
        }
        assert!(app.is_finished());
        let before = app.history.len();
        app.tick();
        assert_eq!(app.history.len(), before);
    }

    #[test]
    fn speed_controls_stay_in_bounds() {
        let mut app = App::from_preset("default");
        for _ in 0..10 {
            app.speed_down();
        }
        assert_eq!(app.speed_idx, 0);
        for _ in 0..10 {
            app.speed_up();
        }
        assert_eq!(app.speed_idx, SPEED_LEVELS_MS.len() - 1);
    }

    #[test]
    fn switch_preset_resets_state() {
        let mut app = App::from_preset("default");
        app.tick();
        app.tick();
        app.switch_preset("uniform");
        assert_eq!(app.steps_done(), 0);
        assert!(app.history.is_empty());
        assert_eq!(app.preset_name, "uniform");
    }

    #[test]
    fn unknown_preset_is_ignored() {
        let mut app = App::from_preset("fan");
        app.switch_preset("nope");
        assert_eq!(app.preset_name, "fan");
    }

    #[test]
    fn restart_reproduces_samples() {
        let mut app = App::from_preset("uniform");
        for _ in 0..3 {
            app.tick();
        }
        let first: Vec<SweepSample> = app.history.iter().cloned().collect();
        app.restart();
        assert!(app.history.is_empty());
        for _ in 0..3 {
            app.tick();
        }
        let second: Vec<SweepSample> = app.history.iter().cloned().collect();
        assert_eq!(first, second);
    }
}

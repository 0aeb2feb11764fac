use crate::model::LightSource;

/// Upper bound on the samples a configured sweep may produce.
pub const MAX_SWEEP_SAMPLES: usize = 100_000;

/// Steps a light source across a range of angles.
///
/// The first tick places the source at `start`; every later tick moves it
/// by `step`. Ticking stops once the source angle reaches or passes `stop`,
/// or when a step no longer moves the source forward.
///
/// # Examples
///
/// ```
/// use solar_plant_sim::model::LightSource;
/// use solar_plant_sim::sim::sweep::AngleSweep;
///
/// let mut sweep = AngleSweep::new(-1.0, 1.0, 0.5);
/// let mut sun = LightSource::new();
/// let mut angles = Vec::new();
///
/// sweep.run(&mut sun, |a| angles.push(a));
/// assert_eq!(angles, vec![-1.0, -0.5, 0.0, 0.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AngleSweep {
    start: f64,
    stop: f64,
    step: f64,
    /// Whether the source has been placed at `start` yet.
    started: bool,
    /// Whether the sweep has crossed `stop`.
    finished: bool,
}

impl AngleSweep {
    /// Creates a sweep from `start` (inclusive) towards `stop` (exclusive).
    ///
    /// # Panics
    ///
    /// Panics if `step` is not a positive finite number, or if `start` or
    /// `stop` is not finite.
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        assert!(step.is_finite() && step > 0.0, "sweep step must be > 0");
        assert!(start.is_finite() && stop.is_finite());
        Self {
            start,
            stop,
            step,
            started: false,
            finished: false,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Advances the source by one step.
    ///
    /// # Returns
    ///
    /// * `Some(angle)` - The source angle to sample at
    /// * `None` - If the source has reached `stop`, or the step is lost
    ///   to rounding at the current angle
    pub fn tick(&mut self, source: &mut LightSource) -> Option<f64> {
        if self.finished {
            return None;
        }
        let stalled = if self.started {
            let before = source.angle();
            source.move_angle_by(self.step);
            source.angle() <= before
        } else {
            source.set_angle(self.start);
            self.started = true;
            false
        };

        let angle = source.angle();
        if angle < self.stop && !stalled {
            Some(angle)
        } else {
            if stalled {
                log::warn!("sweep step {} does not advance angle {angle}", self.step);
            }
            self.finished = true;
            None
        }
    }

    /// Calls `f` with the source angle of every remaining tick.
    pub fn run(&mut self, source: &mut LightSource, mut f: impl FnMut(f64)) {
        while let Some(angle) = self.tick(source) {
            f(angle);
        }
    }

    /// Rewinds the sweep so the next tick starts over at `start`.
    pub fn reset(&mut self) {
        self.started = false;
        self.finished = false;
    }

    /// Returns `true` once the sweep has crossed `stop`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of samples a full sweep produces.
    pub fn len(&self) -> usize {
        let mut probe = Self::new(self.start, self.stop, self.step);
        let mut source = LightSource::new();
        let mut n = 0;
        probe.run(&mut source, |_| n += 1);
        n
    }

    /// Returns `true` if a full sweep produces no samples.
    pub fn is_empty(&self) -> bool {
        self.start >= self.stop
    }
}

//! Post-hoc profile metrics computed from sweep samples.

use std::fmt;

use super::types::SweepSample;

/// Aggregate metrics of a plant's output profile over one sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileReport {
    /// Number of samples in the sweep.
    pub samples: usize,
    /// Highest plant output (W).
    pub peak_power_w: f64,
    /// Source angle where the peak occurs (first one on ties).
    pub peak_angle_rad: f64,
    /// Lowest plant output (W).
    pub min_power_w: f64,
    /// Mean plant output (W).
    pub mean_power_w: f64,
    /// Trapezoid integral of output over source angle (W·rad).
    pub energy_w_rad: f64,
    /// Coefficient of variation of the output, `std / mean`. Lower is flatter.
    pub flatness_cv: f64,
}

impl ProfileReport {
    /// Computes all metrics from the complete sample vector.
    pub fn from_samples(samples: &[SweepSample]) -> Self {
        let Some(first) = samples.first() else {
            return Self {
                samples: 0,
                peak_power_w: 0.0,
                peak_angle_rad: 0.0,
                min_power_w: 0.0,
                mean_power_w: 0.0,
                energy_w_rad: 0.0,
                flatness_cv: 0.0,
            };
        };

        let n = samples.len() as f64;
        let mut peak_power_w = first.plant_power_w;
        let mut peak_angle_rad = first.source_angle_rad;
        let mut min_power_w = first.plant_power_w;
        let mut sum = 0.0;
        for s in samples {
            if s.plant_power_w > peak_power_w {
                peak_power_w = s.plant_power_w;
                peak_angle_rad = s.source_angle_rad;
            }
            min_power_w = min_power_w.min(s.plant_power_w);
            sum += s.plant_power_w;
        }
        let mean_power_w = sum / n;

        let variance = samples
            .iter()
            .map(|s| (s.plant_power_w - mean_power_w).powi(2))
            .sum::<f64>()
            / n;
        let flatness_cv = if mean_power_w > 0.0 {
            variance.sqrt() / mean_power_w
        } else {
            0.0
        };

        let energy_w_rad = samples
            .windows(2)
            .map(|w| {
                let da = w[1].source_angle_rad - w[0].source_angle_rad;
                0.5 * (w[0].plant_power_w + w[1].plant_power_w) * da
            })
            .sum();

        Self {
            samples: samples.len(),
            peak_power_w,
            peak_angle_rad,
            min_power_w,
            mean_power_w,
            energy_w_rad,
            flatness_cv,
        }
    }
}

impl fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Profile Report ---")?;
        writeln!(f, "Samples:        {}", self.samples)?;
        writeln!(
            f,
            "Peak output:    {:.2} W at {:.4} rad",
            self.peak_power_w, self.peak_angle_rad
        )?;
        writeln!(f, "Min output:     {:.2} W", self.min_power_w)?;
        writeln!(f, "Mean output:    {:.2} W", self.mean_power_w)?;
        writeln!(f, "Energy:         {:.2} W rad", self.energy_w_rad)?;
        write!(f, "Flatness (CV):  {:.4}", self.flatness_cv)
    }
}

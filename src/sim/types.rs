//! Sweep sample records.

use std::fmt;

/// Complete record of one sweep step.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSample {
    /// Step index, starting at 0.
    pub step: usize,
    /// Light source angle at this step (radians).
    pub source_angle_rad: f64,
    /// Total plant output (W).
    pub plant_power_w: f64,
    /// Output of the reference setup, if the run has one (W).
    pub reference_power_w: Option<f64>,
    /// Plant output as a percentage of its rated power.
    pub efficiency_pct: f64,
}

impl fmt::Display for SweepSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step={:>3} | sun={:>7.4} rad | plant={:>10.2} W ({:>5.1}%)",
            self.step, self.source_angle_rad, self.plant_power_w, self.efficiency_pct,
        )?;
        if let Some(p) = self.reference_power_w {
            write!(f, " | reference={p:>9.2} W")?;
        }
        Ok(())
    }
}

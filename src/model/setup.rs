use crate::report::Reporter;

use super::panel::Panel;

/// A panel mounted at a fixed tilt.
///
/// The setup owns its panel by value; constructing a setup copies the panel
/// it is given, so later changes to either side are independent. The mount
/// angle is an arbitrary real number, no wraparound is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSetup {
    mount_angle_rad: f64,
    panel: Panel,
}

impl PanelSetup {
    /// Creates a setup with the given mount angle and panel.
    pub fn new(mount_angle_rad: f64, panel: Panel) -> Self {
        Self {
            mount_angle_rad,
            panel,
        }
    }

    /// Creates a setup with the given mount angle and a default panel.
    pub fn with_angle(mount_angle_rad: f64) -> Self {
        Self::new(mount_angle_rad, Panel::default())
    }

    /// Instantaneous power for light arriving at `incidence_rad` from the
    /// panel normal.
    ///
    /// Follows the cosine law and is clamped at zero: light from more than
    /// 90 degrees away produces nothing.
    pub fn current_power(&self, incidence_rad: f64) -> f64 {
        let c = incidence_rad.cos();
        if c > 0.0 {
            self.panel.max_power_w() * c
        } else {
            0.0
        }
    }

    /// Output as a percentage of rated power.
    ///
    /// Returns 0 when the light is behind the panel or when the panel has no
    /// rated power, rather than propagating NaN.
    pub fn efficiency(&self, incidence_rad: f64) -> f64 {
        let max = self.panel.max_power_w();
        if incidence_rad.cos() > 0.0 && max != 0.0 {
            100.0 * self.current_power(incidence_rad) / max
        } else {
            0.0
        }
    }

    pub fn angle(&self) -> f64 {
        self.mount_angle_rad
    }

    pub fn set_angle(&mut self, mount_angle_rad: f64) {
        self.mount_angle_rad = mount_angle_rad;
    }

    /// Read access to the mounted panel.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Exclusive access to the mounted panel for in-place reconfiguration.
    pub fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }

    /// Resizes the mounted panel to `nx` by `ny` elements and reports the
    /// resulting area.
    pub fn set_panel_elements(&mut self, nx: i32, ny: i32, reporter: &mut dyn Reporter) {
        self.resize_panel(nx, ny);
        reporter.panel_resized(None, self.panel.area_cm2());
    }

    pub(crate) fn resize_panel(&mut self, nx: i32, ny: i32) {
        self.panel.resize_width(nx);
        self.panel.resize_height(ny);
    }
}

impl Default for PanelSetup {
    fn default() -> Self {
        Self::new(0.0, Panel::default())
    }
}

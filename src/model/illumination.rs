use std::f64::consts::FRAC_PI_2;

use super::light::LightSource;
use super::setup::PanelSetup;

/// Angle of incidence between the light and a setup's panel normal.
///
/// Setups tilted to negative angles see the source mirrored. Both branches
/// agree at a mount angle of 0.
pub fn illumination_angle(setup: &PanelSetup, source: &LightSource) -> f64 {
    let mount = setup.angle();
    if mount < 0.0 {
        FRAC_PI_2 - source.angle() + mount
    } else {
        FRAC_PI_2 + source.angle() - mount
    }
}

/// The light source of the one-dimensional world.
///
/// A single angle describes the position of the sun. The angle is not
/// wrapped or bounded; drivers keep it in whatever range they sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightSource {
    angle_rad: f64,
}

impl LightSource {
    /// Creates a light source at angle 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a light source at the given angle.
    pub fn at(angle_rad: f64) -> Self {
        Self { angle_rad }
    }

    pub fn set_angle(&mut self, angle_rad: f64) {
        self.angle_rad = angle_rad;
    }

    /// Moves the source by `delta_rad`.
    pub fn move_angle_by(&mut self, delta_rad: f64) {
        self.angle_rad += delta_rad;
    }

    pub fn angle(&self) -> f64 {
        self.angle_rad
    }
}

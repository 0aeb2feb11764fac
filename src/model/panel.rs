//! Physical solar panel built from a grid of identical elements.

/// Width of a single panel element in centimetres.
pub const ELEMENT_WIDTH_CM: f64 = 6.0;

/// Height of a single panel element in centimetres.
pub const ELEMENT_HEIGHT_CM: f64 = 10.0;

/// Rated power of a single panel element in watts.
pub const ELEMENT_POWER_W: f64 = 15.0;

/// Default element count along the panel width.
pub const DEFAULT_WIDTH_UNITS: i32 = 20;

/// Default element count along the panel height.
pub const DEFAULT_HEIGHT_UNITS: i32 = 30;

/// A rectangular solar panel measured in element counts.
///
/// Dimensions, area and rated power are derived from the element counts
/// and the process-wide element constants. Counts are not validated: zero
/// or negative values propagate into zero or negative derived quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    width_units: i32,
    height_units: i32,
}

impl Panel {
    /// Creates a panel with the given element counts.
    pub fn new(width_units: i32, height_units: i32) -> Self {
        Self {
            width_units,
            height_units,
        }
    }

    /// Number of elements along the width.
    pub fn width_units(&self) -> i32 {
        self.width_units
    }

    /// Number of elements along the height.
    pub fn height_units(&self) -> i32 {
        self.height_units
    }

    /// Panel width in centimetres.
    pub fn width_cm(&self) -> f64 {
        f64::from(self.width_units) * ELEMENT_WIDTH_CM
    }

    /// Panel height in centimetres.
    pub fn height_cm(&self) -> f64 {
        f64::from(self.height_units) * ELEMENT_HEIGHT_CM
    }

    /// Panel area in square centimetres.
    pub fn area_cm2(&self) -> f64 {
        self.width_cm() * self.height_cm()
    }

    /// Rated power when light hits the panel along its normal.
    pub fn max_power_w(&self) -> f64 {
        f64::from(self.width_units) * f64::from(self.height_units) * ELEMENT_POWER_W
    }

    /// Overwrites the element count along the width. May grow or shrink.
    pub fn resize_width(&mut self, units: i32) {
        self.width_units = units;
    }

    /// Overwrites the element count along the height. May grow or shrink.
    pub fn resize_height(&mut self, units: i32) {
        self.height_units = units;
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH_UNITS, DEFAULT_HEIGHT_UNITS)
    }
}

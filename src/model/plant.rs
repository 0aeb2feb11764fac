use thiserror::Error;

use crate::report::Reporter;

use super::illumination::illumination_angle;
use super::light::LightSource;
use super::setup::PanelSetup;

/// Number of panel setups in every plant.
pub const PLANT_SLOTS: usize = 10;

/// Errors raised by slot-addressed plant operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlantError {
    #[error("slot index {index} is out of range for a plant with {len} slots")]
    SlotOutOfRange { index: usize, len: usize },
}

/// A solar plant made of exactly [`PLANT_SLOTS`] panel setups.
///
/// The plant owns its setups in a fixed-length array; slots can be
/// overwritten but never inserted or removed. The light source is only
/// borrowed for the duration of an output query.
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    setups: [PanelSetup; PLANT_SLOTS],
}

impl Plant {
    /// Creates a plant with every slot holding the default setup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plant from a full set of setups.
    pub fn from_setups(setups: [PanelSetup; PLANT_SLOTS]) -> Self {
        Self { setups }
    }

    /// Overwrites slot `index` with a copy of `setup`.
    ///
    /// # Errors
    ///
    /// Returns [`PlantError::SlotOutOfRange`] if `index >= PLANT_SLOTS`.
    pub fn set_panel_setup(&mut self, setup: PanelSetup, index: usize) -> Result<(), PlantError> {
        *self.slot_mut(index)? = setup;
        Ok(())
    }

    /// Returns the setup at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PlantError::SlotOutOfRange`] if `index >= PLANT_SLOTS`.
    pub fn setup(&self, index: usize) -> Result<&PanelSetup, PlantError> {
        self.setups.get(index).ok_or(PlantError::SlotOutOfRange {
            index,
            len: PLANT_SLOTS,
        })
    }

    /// All setups in slot order.
    pub fn setups(&self) -> &[PanelSetup; PLANT_SLOTS] {
        &self.setups
    }

    /// Total instantaneous power for the given source position.
    pub fn current_output(&self, source: &LightSource) -> f64 {
        self.setups
            .iter()
            .map(|s| s.current_power(illumination_angle(s, source)))
            .sum()
    }

    /// Sum of the rated power of every panel.
    pub fn max_output(&self) -> f64 {
        self.setups.iter().map(|s| s.panel().max_power_w()).sum()
    }

    /// Mount angles of every slot.
    pub fn mount_angles(&self) -> [f64; PLANT_SLOTS] {
        self.setups.map(|s| s.angle())
    }

    /// Returns a copy of this plant with each slot re-tilted to the given
    /// angle. Panels are kept.
    pub fn with_mount_angles(&self, angles: [f64; PLANT_SLOTS]) -> Self {
        let mut plant = self.clone();
        for (setup, angle) in plant.setups.iter_mut().zip(angles) {
            setup.set_angle(angle);
        }
        plant
    }

    /// Resizes the panel in slot `index` in place and reports its new area.
    ///
    /// # Errors
    ///
    /// Returns [`PlantError::SlotOutOfRange`] if `index >= PLANT_SLOTS`.
    /// Nothing is reported on error.
    pub fn resize_panel_at(
        &mut self,
        index: usize,
        nx: i32,
        ny: i32,
        reporter: &mut dyn Reporter,
    ) -> Result<(), PlantError> {
        let slot = self.slot_mut(index)?;
        slot.resize_panel(nx, ny);
        reporter.panel_resized(Some(index), slot.panel().area_cm2());
        Ok(())
    }

    /// Emits index, mount angle and panel area of every slot.
    pub fn report(&self, reporter: &mut dyn Reporter) {
        for (i, s) in self.setups.iter().enumerate() {
            reporter.slot_summary(i, s.angle(), s.panel().area_cm2());
        }
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut PanelSetup, PlantError> {
        self.setups.get_mut(index).ok_or(PlantError::SlotOutOfRange {
            index,
            len: PLANT_SLOTS,
        })
    }
}

impl Default for Plant {
    fn default() -> Self {
        Self {
            setups: [PanelSetup::default(); PLANT_SLOTS],
        }
    }
}

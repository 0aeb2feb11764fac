//! Composition model of a solar plant: panels, their setups, the light
//! source and the plant that aggregates them.

pub mod illumination;
/// Light source position.
pub mod light;
/// Physical panel and element constants.
pub mod panel;
pub mod plant;
/// Mounted panel and the cosine power law.
pub mod setup;

pub use illumination::illumination_angle;
pub use light::LightSource;
pub use panel::Panel;
pub use plant::{PLANT_SLOTS, Plant, PlantError};
pub use setup::PanelSetup;

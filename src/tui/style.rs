//! Color constants and auto-scaling helpers for the TUI.

use ratatui::style::Color;

/// Plant output line color.
pub const PLANT_COLOR: Color = Color::Yellow;
/// Reference setup line color.
pub const REFERENCE_COLOR: Color = Color::DarkGray;
/// Efficiency gauge color when high (>= 50%).
pub const EFF_HIGH: Color = Color::Green;
/// Efficiency gauge color when medium (>= 20%).
pub const EFF_MID: Color = Color::Yellow;
/// Efficiency gauge color when low (< 20%).
pub const EFF_LOW: Color = Color::Red;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Returns a color based on output efficiency in percent.
pub fn efficiency_color(pct: f64) -> Color {
    if pct >= 50.0 {
        EFF_HIGH
    } else if pct >= 20.0 {
        EFF_MID
    } else {
        EFF_LOW
    }
}

/// Computes Y-axis bounds from chart data points, anchored at zero with
/// 10% headroom.
pub fn auto_bounds_y(plant: &[(f64, f64)], reference: &[(f64, f64)]) -> [f64; 2] {
    let max = plant
        .iter()
        .chain(reference.iter())
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return [0.0, 1.0];
    }
    [0.0, max * 1.1]
}

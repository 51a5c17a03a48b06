//! Geometry for the purely decorative animated backgrounds.
//!
//! Nothing here carries product meaning: these helpers compute SVG path data
//! and CSS for the landing mesh gradient and the signup brand panel.

#[cfg(test)]
#[path = "decor_test.rs"]
mod decor_test;

use crate::util::viewport::Viewport;

/// Paths drawn per floating-path family.
pub const FLOATING_PATH_COUNT: usize = 36;

/// One animated stroke in the signup brand panel.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingPath {
    pub id: usize,
    pub d: String,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub duration_secs: u32,
}

/// SVG path data for stroke `index`, mirrored horizontally by `position`
/// (`1` or `-1`).
#[must_use]
pub fn floating_path(index: usize, position: i64) -> String {
    let i = i64::try_from(index).unwrap_or(i64::MAX / 16);
    let shift = i * 5 * position;
    let rise = i * 6;
    format!(
        "M-{} -{}C-{} -{} -{} {} {} {}C{} {} {} {} {} {}",
        380 - shift,
        189 + rise,
        380 - shift,
        189 + rise,
        312 - shift,
        216 - rise,
        152 - shift,
        343 - rise,
        616 - shift,
        470 - rise,
        684 - shift,
        875 - rise,
        684 - shift,
        875 - rise,
    )
}

/// The full family of strokes for one side.
#[must_use]
pub fn floating_paths(position: i64) -> Vec<FloatingPath> {
    (0..FLOATING_PATH_COUNT)
        .map(|id| {
            #[allow(clippy::cast_precision_loss)]
            let step = id as f64 * 0.03;
            FloatingPath {
                id,
                d: floating_path(id, position),
                stroke_width: 0.5 + step,
                stroke_opacity: 0.1 + step,
                // Spread loop lengths over 20-29s so strokes drift out of phase.
                duration_secs: 20 + u32::try_from(id * 7 % 10).unwrap_or(0),
            }
        })
        .collect()
}

/// Palette of the landing mesh gradient, darkest first.
pub const MESH_COLORS: [&str; 6] = ["#0f172a", "#1e293b", "#14b8a6", "#0d9488", "#134e4a", "#083344"];

/// Landing background parameters derived from the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBackground {
    pub width: u32,
    pub height: u32,
    /// Horizontal radius of each color blob, in percent of the width.
    pub spread_x: u32,
    /// Horizontal offset of the gradient focus, in percent.
    pub focus_x: u32,
}

impl MeshBackground {
    const OFFSET_X: f64 = 0.08;

    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        let aspect = viewport.aspect_ratio().clamp(0.5, 3.0);
        Self {
            width: to_px(viewport.width),
            height: to_px(viewport.height),
            spread_x: to_px(40.0 / aspect),
            focus_x: to_px(50.0 + Self::OFFSET_X * 100.0),
        }
    }

    /// Inline CSS for the background element.
    #[must_use]
    pub fn style(&self) -> String {
        let stops = MESH_COLORS
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, color)| {
                let x = (self.focus_x + u32::try_from(i * 17).unwrap_or(0)) % 100;
                let y = u32::try_from(i * 23 % 100).unwrap_or(0);
                format!("radial-gradient({}% 60% at {x}% {y}%, {color} 0%, transparent 70%)", self.spread_x)
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "width: {}px; height: {}px; background-color: {}; background-image: {stops};",
            self.width, self.height, MESH_COLORS[0]
        )
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_px(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 { value.round() as u32 } else { 0 }
}

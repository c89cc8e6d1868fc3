use std::path::Path;

use crate::{
    assets::decode::ResizeFilter,
    foundation::{
        core::{GOLDEN_RATIO, Rgba8},
        error::{GoldenError, GoldenResult},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrokeStyle {
    pub color: Rgba8,
    pub width: f64,
}

impl StrokeStyle {
    pub const fn new(color: Rgba8, width: f64) -> Self {
        Self { color, width }
    }
}

/// Strokes for the three overlay layers, drawn in field order.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayStyle {
    pub rectangles: StrokeStyle,
    pub squares: StrokeStyle,
    pub spiral: StrokeStyle,
    /// Flattening tolerance for the spiral's arc-to-curve conversion, in pixels.
    pub tolerance: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            rectangles: StrokeStyle::new(Rgba8::opaque(0xcc, 0xcc, 0xcc), 1.0),
            squares: StrokeStyle::new(Rgba8::opaque(0x88, 0x88, 0x88), 1.0),
            spiral: StrokeStyle::new(Rgba8::new(0xff, 0xf3, 0x44, 0xff), 2.0),
            tolerance: 0.1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Longest side of both panels, in pixels.
    pub max_side: f64,
    pub filter: ResizeFilter,
    /// Fill behind the bitmap; only visible through transparent pixels.
    pub background: Rgba8,
    pub overlay: OverlayStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_side: 300.0,
            filter: ResizeFilter::default(),
            background: Rgba8::new(0, 0, 0, 0),
            overlay: OverlayStyle::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(s: &str) -> GoldenResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| GoldenError::config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> GoldenResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GoldenError::config(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> GoldenResult<()> {
        if !(self.max_side.is_finite() && self.max_side >= 1.0) {
            return Err(GoldenError::config(format!(
                "max_side must be a finite value >= 1, got {}",
                self.max_side
            )));
        }
        if self.max_side > f64::from(u16::MAX) {
            return Err(GoldenError::config(format!(
                "max_side must be <= {}, got {}",
                u16::MAX,
                self.max_side
            )));
        }
        // The short golden side must still leave a usable pixel row.
        if self.max_side / GOLDEN_RATIO < 1.0 {
            return Err(GoldenError::config("max_side is too small for a golden panel"));
        }
        for (name, stroke) in [
            ("rectangles", self.overlay.rectangles),
            ("squares", self.overlay.squares),
            ("spiral", self.overlay.spiral),
        ] {
            if !(stroke.width.is_finite() && stroke.width > 0.0) {
                return Err(GoldenError::config(format!(
                    "overlay.{name}.width must be > 0, got {}",
                    stroke.width
                )));
            }
        }
        if !(self.overlay.tolerance.is_finite() && self.overlay.tolerance > 0.0) {
            return Err(GoldenError::config("overlay.tolerance must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

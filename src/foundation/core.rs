pub use kurbo::{BezPath, Point, Rect, Size};

/// The golden ratio φ, at the precision used for all sizing.
pub const GOLDEN_RATIO: f64 = 1.618033988749;

/// Portrait/landscape classification of the *original* image.
///
/// It is decided once, before the golden aspect is forced, and stays fixed for the whole
/// decomposition of the golden canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// `Portrait` when `width / height < 1`, `Landscape` otherwise (squares included).
    pub fn from_dimensions(width: f64, height: f64) -> Self {
        if width / height < 1.0 {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }

    pub fn is_portrait(self) -> bool {
        matches!(self, Self::Portrait)
    }
}

/// Straight (non-premultiplied) RGBA8. Serializes as `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

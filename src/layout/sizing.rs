use crate::foundation::{
    core::{GOLDEN_RATIO, Orientation, Rect, Size},
    error::{GoldenError, GoldenResult},
};

/// Aspect-preserving fit of `natural` with its longer side equal to `max_side`.
///
/// Squares take the portrait branch, which yields the same result.
pub fn display_size(natural: Size, max_side: f64) -> Size {
    let ratio = natural.width / natural.height;
    if natural.width > natural.height {
        Size::new(max_side, max_side / ratio)
    } else {
        Size::new(max_side * ratio, max_side)
    }
}

/// Box with the golden aspect whose long side is `max_side`, laid out along the original's
/// orientation.
pub fn golden_size(orientation: Orientation, max_side: f64) -> Size {
    match orientation {
        Orientation::Landscape => Size::new(max_side, max_side / GOLDEN_RATIO),
        Orientation::Portrait => Size::new(max_side / GOLDEN_RATIO, max_side),
    }
}

/// The golden box as a rectangle at the origin, ready for decomposition.
pub fn golden_box(orientation: Orientation, max_side: f64) -> Rect {
    Rect::from_origin_size((0.0, 0.0), golden_size(orientation, max_side))
}

/// Pixel surface for a fractional box: sides truncate like a canvas dimension, never below 1.
pub fn pixel_extent(size: Size) -> GoldenResult<(u16, u16)> {
    fn side(v: f64, what: &str) -> GoldenResult<u16> {
        if !v.is_finite() || v < 0.0 {
            return Err(GoldenError::validation(format!(
                "panel {what} must be finite and non-negative, got {v}"
            )));
        }
        let px = v.trunc().max(1.0);
        if px > f64::from(u16::MAX) {
            return Err(GoldenError::validation(format!(
                "panel {what} {px} exceeds {}",
                u16::MAX
            )));
        }
        Ok(px as u16)
    }
    Ok((side(size.width, "width")?, side(size.height, "height")?))
}

/// `1:<width / height>` with three decimals.
pub fn ratio_label(width: f64, height: f64) -> String {
    format!("1:{:.3}", width / height)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sizing.rs"]
mod tests;

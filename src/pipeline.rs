use crate::{
    assets::{LoadedImage, decode::decode_image},
    config::RenderConfig,
    foundation::{
        core::{Orientation, Rect, Size},
        error::{GoldenError, GoldenResult},
    },
    geometry::decompose::{Decomposition, decompose},
    layout::sizing::{display_size, golden_box, pixel_extent, ratio_label},
    render::{FrameRGBA, render_overlay, render_resized},
};

pub const CONVERTED_MESSAGE: &str = "The input image was converted to the golden ratio (1:1.618).";

/// Everything the presenting side needs for one image.
#[derive(Clone, Debug)]
pub struct Presentation {
    pub natural: Size,
    pub orientation: Orientation,
    pub display: Size,
    pub golden_box: Rect,
    pub decomposition: Decomposition,
    /// Original aspect-ratio panel.
    pub original: FrameRGBA,
    /// Golden-ratio panel with the overlay.
    pub golden: FrameRGBA,
}

impl Presentation {
    pub fn ratio_label(&self) -> String {
        ratio_label(self.natural.width, self.natural.height)
    }

    pub fn status_lines(&self) -> [String; 2] {
        [
            format!("ratio: {}", self.ratio_label()),
            CONVERTED_MESSAGE.to_owned(),
        ]
    }
}

pub fn process_image(bytes: &[u8], cfg: &RenderConfig) -> GoldenResult<Presentation> {
    let image = decode_image(bytes)?;
    process_loaded(&image, cfg)
}

#[tracing::instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn process_loaded(image: &LoadedImage, cfg: &RenderConfig) -> GoldenResult<Presentation> {
    cfg.validate()?;
    let natural = image.natural_size();
    if natural.is_zero_area() {
        return Err(GoldenError::validation("image has no pixels"));
    }

    let orientation = Orientation::from_dimensions(natural.width, natural.height);
    let shown = display_size(natural, cfg.max_side);
    let bounds = golden_box(orientation, cfg.max_side);
    tracing::debug!(
        ?orientation,
        display_w = shown.width,
        display_h = shown.height,
        golden_w = bounds.width(),
        golden_h = bounds.height(),
        "sized panels"
    );

    let decomposition = decompose(bounds, orientation)?;
    tracing::debug!(
        steps = decomposition.len(),
        max_gap = decomposition.max_arc_gap(),
        "decomposed golden box"
    );

    let original = render_resized(image, pixel_extent(shown)?, cfg)?;
    let golden = render_overlay(image, bounds, &decomposition, cfg)?;

    Ok(Presentation {
        natural,
        orientation,
        display: shown,
        golden_box: bounds,
        decomposition,
        original,
        golden,
    })
}

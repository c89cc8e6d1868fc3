use crate::{
    GoldenResult,
    assets::LoadedImage,
    foundation::error::GoldenError,
};

/// Resampling filter used when fitting a bitmap into a panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    fn to_image(self) -> image::imageops::FilterType {
        use image::imageops::FilterType;
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

pub fn decode_image(bytes: &[u8]) -> GoldenResult<LoadedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| GoldenError::decode(format!("could not load image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(GoldenError::validation("image has no pixels"));
    }
    tracing::debug!(width = rgba.width(), height = rgba.height(), "decoded image");
    Ok(LoadedImage { rgba })
}

/// Stretch `image` to exactly `width` x `height`; the aspect ratio is not preserved.
pub fn resize_to(
    image: &LoadedImage,
    width: u16,
    height: u16,
    filter: ResizeFilter,
) -> image::RgbaImage {
    let (w, h) = (u32::from(width), u32::from(height));
    if image.rgba.dimensions() == (w, h) {
        return image.rgba.clone();
    }
    image::imageops::resize(&image.rgba, w, h, filter.to_image())
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

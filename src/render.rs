pub(crate) mod cpu;
pub(crate) mod plan;

use crate::{
    assets::LoadedImage,
    config::RenderConfig,
    foundation::{core::Rect, error::GoldenResult},
    geometry::decompose::Decomposition,
    layout::sizing::pixel_extent,
};

/// A rendered panel. Pixels are premultiplied RGBA8, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data
            .get(i..i + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Un-premultiplied copy, the layout PNG encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = px[3] as u16;
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    pub fn save_png(&self, path: &std::path::Path) -> crate::GoldenResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| crate::GoldenError::render(format!("write png '{}': {e}", path.display())))
    }
}

/// Plain panel: the bitmap stretched over `extent` (width, height) pixels.
pub fn render_resized(
    image: &LoadedImage,
    extent: (u16, u16),
    cfg: &RenderConfig,
) -> GoldenResult<FrameRGBA> {
    cpu::CpuBackend::new(cfg.filter).render(&plan::plan_resized(extent, cfg), image)
}

/// Golden panel: the bitmap stretched over `golden_box`, then the decomposition overlay.
pub fn render_overlay(
    image: &LoadedImage,
    golden_box: Rect,
    decomposition: &Decomposition,
    cfg: &RenderConfig,
) -> GoldenResult<FrameRGBA> {
    let extent = pixel_extent(golden_box.size())?;
    let plan = plan::plan_overlay(extent, decomposition, cfg);
    cpu::CpuBackend::new(cfg.filter).render(&plan, image)
}

#[cfg(test)]
#[path = "../tests/unit/render/frame.rs"]
mod tests;

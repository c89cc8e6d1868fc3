use std::sync::Arc;

use crate::{
    assets::{
        LoadedImage,
        decode::{ResizeFilter, premultiply_rgba8_in_place, resize_to},
    },
    config::StrokeStyle,
    foundation::{
        core::{BezPath, Point, Rect, Rgba8},
        error::{GoldenError, GoldenResult},
    },
    render::{
        FrameRGBA,
        plan::{DrawOp, PanelPlan},
    },
};

/// Executes [`PanelPlan`]s on the CPU with `vello_cpu`.
pub struct CpuBackend {
    filter: ResizeFilter,
}

impl CpuBackend {
    pub fn new(filter: ResizeFilter) -> Self {
        Self { filter }
    }

    #[tracing::instrument(skip_all, fields(width = plan.width, height = plan.height, ops = plan.ops.len()))]
    pub fn render(&mut self, plan: &PanelPlan, image: &LoadedImage) -> GoldenResult<FrameRGBA> {
        if plan.width == 0 || plan.height == 0 {
            return Err(GoldenError::render("panel must be at least 1x1"));
        }

        let mut ctx = vello_cpu::RenderContext::new(plan.width, plan.height);
        let full =
            vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(plan.width), f64::from(plan.height));

        if plan.background.a > 0 {
            ctx.set_paint(color_to_cpu(plan.background));
            ctx.fill_rect(&full);
        }

        // Resample once per panel even if the plan draws the bitmap more than once.
        let mut bitmap: Option<vello_cpu::Image> = None;
        for op in &plan.ops {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            match op {
                DrawOp::Bitmap => {
                    let paint = match &bitmap {
                        Some(p) => p.clone(),
                        None => {
                            let p = self.bitmap_paint(image, plan.width, plan.height)?;
                            bitmap = Some(p.clone());
                            p
                        }
                    };
                    ctx.set_paint(paint);
                    ctx.fill_rect(&full);
                }
                DrawOp::StrokeRect { rect, stroke } => {
                    apply_stroke(&mut ctx, stroke);
                    ctx.stroke_rect(&rect_to_cpu(*rect));
                }
                DrawOp::StrokePath { path, stroke } => {
                    apply_stroke(&mut ctx, stroke);
                    ctx.stroke_path(&bezpath_to_cpu(path));
                }
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(plan.width, plan.height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(plan.width),
            height: u32::from(plan.height),
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }

    fn bitmap_paint(
        &self,
        image: &LoadedImage,
        width: u16,
        height: u16,
    ) -> GoldenResult<vello_cpu::Image> {
        let resized = resize_to(image, width, height, self.filter);
        let mut bytes = resized.into_raw();
        premultiply_rgba8_in_place(&mut bytes);
        let pixmap = premul_bytes_to_pixmap(&bytes, width, height)?;
        Ok(vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        })
    }
}

fn apply_stroke(ctx: &mut vello_cpu::RenderContext, stroke: &StrokeStyle) {
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(stroke.width));
    ctx.set_paint(color_to_cpu(stroke.color));
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u16,
    height: u16,
) -> GoldenResult<vello_cpu::Pixmap> {
    if rgba8_premul.len() != usize::from(width) * usize::from(height) * 4 {
        return Err(GoldenError::render("resized bitmap byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let pixels = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        width,
        height,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

use crate::{
    config::{RenderConfig, StrokeStyle},
    foundation::core::{BezPath, Rect, Rgba8},
    geometry::decompose::Decomposition,
};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// The source bitmap stretched over the whole panel.
    Bitmap,
    StrokeRect { rect: Rect, stroke: StrokeStyle },
    StrokePath { path: BezPath, stroke: StrokeStyle },
}

/// Backend-agnostic display list for one panel, executed in order.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelPlan {
    pub width: u16,
    pub height: u16,
    pub background: Rgba8,
    pub ops: Vec<DrawOp>,
}

pub fn plan_resized(extent: (u16, u16), cfg: &RenderConfig) -> PanelPlan {
    PanelPlan {
        width: extent.0,
        height: extent.1,
        background: cfg.background,
        ops: vec![DrawOp::Bitmap],
    }
}

/// Bitmap, then rectangle outlines, then squares, then the spiral on top.
pub fn plan_overlay(
    extent: (u16, u16),
    decomposition: &Decomposition,
    cfg: &RenderConfig,
) -> PanelPlan {
    let style = &cfg.overlay;
    let mut ops = Vec::with_capacity(2 * decomposition.len() + 2);
    ops.push(DrawOp::Bitmap);
    ops.extend(decomposition.rects().map(|rect| DrawOp::StrokeRect {
        rect,
        stroke: style.rectangles,
    }));
    ops.extend(decomposition.squares().map(|sq| DrawOp::StrokeRect {
        rect: sq.to_rect(),
        stroke: style.squares,
    }));
    ops.push(DrawOp::StrokePath {
        path: decomposition.spiral_path(style.tolerance),
        stroke: style.spiral,
    });

    PanelPlan {
        width: extent.0,
        height: extent.1,
        background: cfg.background,
        ops,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
